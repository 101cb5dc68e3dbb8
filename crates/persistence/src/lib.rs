// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Powerdesk.
//!
//! Records (orders, projects, quotations, purchase orders and purchase
//! requests) are stored in `SQLite` through Diesel, with embedded
//! migrations.
//!
//! ## Identifier allocation
//!
//! Previews scan the stored identifiers and write nothing, so two previews
//! in the same scope agree until a record is stored. Creation runs the scan
//! and the insert inside one `BEGIN IMMEDIATE` transaction; the write lock
//! is taken before the scan, so concurrent creators in the same scope are
//! serialized and never observe the same maximum. Unique indexes on
//! `order_no`, `pid_no` and `po_number` reject any identifier that slips
//! through with `PersistenceError::IdentifierConflict`.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` opens a fresh shared-cache in-memory
//! database per call; tests never share state.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use powerdesk::{
    Allocation, IdentifierFinding, IssueContext, PidAllocation, allocate, allocate_pid,
    audit_identifiers,
};
use powerdesk_domain::{
    Collection, IdentifierFamily, LinkedPid, OrderDraft, ProjectDraft, PurchaseOrderDraft,
    PurchaseRequestDraft, QuotationDraft, RecordSummary,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod source;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use source::ConnectionSource;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A stored record together with the identifier allocated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRecord {
    /// The record as stored.
    pub record: RecordSummary,
    /// The allocation that produced its identifier.
    pub allocation: Allocation,
}

/// Persistence adapter for Powerdesk records.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Better read concurrency for file databases
        backend::sqlite::enable_wal_mode(&mut conn)?;

        info!(
            path = path_str,
            busy_timeout_ms = backend::sqlite::busy_timeout(&mut conn)?,
            "Opened database file"
        );

        Ok(Self { conn })
    }

    // ========================================================================
    // Previews
    // ========================================================================

    /// Computes the next PID without storing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails.
    pub fn preview_pid(&mut self, context: &IssueContext) -> Result<PidAllocation, PersistenceError> {
        Ok(allocate_pid(self, context)?)
    }

    /// Computes the next identifier of any family without storing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails.
    pub fn preview(
        &mut self,
        family: IdentifierFamily,
        linked_pid: Option<&LinkedPid>,
        context: &IssueContext,
    ) -> Result<Allocation, PersistenceError> {
        Ok(allocate(self, family, linked_pid, context)?)
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Allocates and inserts inside one immediate transaction.
    fn create_with<F>(
        &mut self,
        collection: Collection,
        family: IdentifierFamily,
        linked_pid: Option<&LinkedPid>,
        context: &IssueContext,
        insert: F,
    ) -> Result<CreatedRecord, PersistenceError>
    where
        F: FnOnce(&mut SqliteConnection, &str, &str) -> Result<i64, PersistenceError>,
    {
        let created: CreatedRecord =
            self.conn
                .immediate_transaction::<_, PersistenceError, _>(|conn| {
                    let allocation: Allocation =
                        allocate(&mut ConnectionSource::new(conn), family, linked_pid, context)?;
                    let id: i64 = insert(conn, &allocation.identifier, &context.timestamp())?;
                    let record: RecordSummary = queries::get_record(conn, collection, id)?;
                    Ok(CreatedRecord { record, allocation })
                })?;

        info!(
            collection = %collection,
            identifier = %created.record.identifier,
            id = created.record.id,
            "Created record"
        );

        Ok(created)
    }

    /// Creates a project, allocating its PID.
    ///
    /// # Errors
    ///
    /// Returns an error if allocation or the insert fails.
    pub fn create_project(
        &mut self,
        draft: &ProjectDraft,
        context: &IssueContext,
    ) -> Result<CreatedRecord, PersistenceError> {
        self.create_with(
            Collection::Projects,
            IdentifierFamily::Pid,
            None,
            context,
            |conn, identifier, created_at| {
                mutations::insert_project(conn, draft, identifier, created_at)
            },
        )
    }

    /// Creates an order, allocating its PID.
    ///
    /// # Errors
    ///
    /// Returns an error if allocation or the insert fails.
    pub fn create_order(
        &mut self,
        draft: &OrderDraft,
        context: &IssueContext,
    ) -> Result<CreatedRecord, PersistenceError> {
        self.create_with(
            Collection::Orders,
            IdentifierFamily::Pid,
            None,
            context,
            |conn, identifier, created_at| {
                mutations::insert_order(conn, draft, identifier, created_at)
            },
        )
    }

    /// Creates a quotation, allocating its quotation number.
    ///
    /// # Errors
    ///
    /// Returns an error if allocation or the insert fails.
    pub fn create_quotation(
        &mut self,
        draft: &QuotationDraft,
        context: &IssueContext,
    ) -> Result<CreatedRecord, PersistenceError> {
        self.create_with(
            Collection::Quotations,
            IdentifierFamily::Quotation,
            draft.linked_pid.as_ref(),
            context,
            |conn, identifier, created_at| {
                mutations::insert_quotation(conn, draft, identifier, created_at)
            },
        )
    }

    /// Creates a purchase order, allocating its PO number.
    ///
    /// # Errors
    ///
    /// Returns an error if allocation or the insert fails.
    pub fn create_purchase_order(
        &mut self,
        draft: &PurchaseOrderDraft,
        context: &IssueContext,
    ) -> Result<CreatedRecord, PersistenceError> {
        self.create_with(
            Collection::PurchaseOrders,
            IdentifierFamily::PurchaseOrder,
            draft.linked_pid.as_ref(),
            context,
            |conn, identifier, created_at| {
                mutations::insert_purchase_order(conn, draft, identifier, created_at)
            },
        )
    }

    /// Creates a purchase request, allocating its PR number.
    ///
    /// # Errors
    ///
    /// Returns an error if allocation or the insert fails.
    pub fn create_purchase_request(
        &mut self,
        draft: &PurchaseRequestDraft,
        context: &IssueContext,
    ) -> Result<CreatedRecord, PersistenceError> {
        self.create_with(
            Collection::PurchaseRequests,
            IdentifierFamily::PurchaseRequest,
            draft.linked_pid.as_ref(),
            context,
            |conn, identifier, created_at| {
                mutations::insert_purchase_request(conn, draft, identifier, created_at)
            },
        )
    }

    // ========================================================================
    // Records
    // ========================================================================

    /// Lists the records of a collection in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_records(
        &mut self,
        collection: Collection,
    ) -> Result<Vec<RecordSummary>, PersistenceError> {
        queries::list_records(&mut self.conn, collection)
    }

    /// Retrieves one record.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::RecordNotFound` if it does not exist.
    pub fn get_record(
        &mut self,
        collection: Collection,
        id: i64,
    ) -> Result<RecordSummary, PersistenceError> {
        queries::get_record(&mut self.conn, collection, id)
    }

    /// Deletes one record and retires its identifier, so the number is never
    /// handed out again.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::RecordNotFound` if it does not exist.
    pub fn delete_record(&mut self, collection: Collection, id: i64) -> Result<(), PersistenceError> {
        let retired: RecordSummary =
            self.conn
                .immediate_transaction::<_, PersistenceError, _>(|conn| {
                    let record: RecordSummary = queries::get_record(conn, collection, id)?;
                    mutations::retire_identifier(conn, collection, &record.identifier)?;
                    mutations::delete_record(conn, collection, id)?;
                    Ok(record)
                })?;

        info!(
            collection = %collection,
            identifier = %retired.identifier,
            id,
            "Deleted record and retired its identifier"
        );

        Ok(())
    }

    // ========================================================================
    // Audit
    // ========================================================================

    /// Returns every stored identifier as `(collection, identifier)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn list_identifiers(&mut self) -> Result<Vec<(Collection, String)>, PersistenceError> {
        queries::list_identifiers(&mut self.conn)
    }

    /// Audits every stored identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn audit_identifiers(&mut self) -> Result<Vec<IdentifierFinding>, PersistenceError> {
        let identifiers: Vec<(Collection, String)> = self.list_identifiers()?;
        Ok(audit_identifiers(&identifiers))
    }
}

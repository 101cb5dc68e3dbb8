// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record inserts and deletes.
//!
//! Inserts take an identifier that has already been allocated; they do not
//! compute one. A deleted record's identifier is retired first, so its
//! number is never allocated again.

use diesel::SqliteConnection;
use diesel::prelude::*;
use powerdesk_domain::{
    Collection, LinkedPid, OrderDraft, ProjectDraft, PurchaseOrderDraft, PurchaseRequestDraft,
    QuotationDraft,
};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{
    orders, projects, purchase_orders, purchase_requests, quotations, retired_identifiers,
};
use crate::error::PersistenceError;

/// Inserts a project under an allocated PID.
///
/// # Errors
///
/// Returns `PersistenceError::IdentifierConflict` if the PID is already
/// stored, or another error if the insert fails.
pub fn insert_project(
    conn: &mut SqliteConnection,
    draft: &ProjectDraft,
    pid_no: &str,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(projects::table)
        .values((
            projects::pid_no.eq(pid_no),
            projects::name.eq(&draft.name),
            projects::client_name.eq(&draft.client_name),
            projects::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let project_id: i64 = conn.get_last_insert_rowid()?;
    info!(project_id, pid_no, "Inserted project");
    Ok(project_id)
}

/// Inserts an order under an allocated PID.
///
/// # Errors
///
/// Returns `PersistenceError::IdentifierConflict` if the PID is already
/// stored, or another error if the insert fails.
pub fn insert_order(
    conn: &mut SqliteConnection,
    draft: &OrderDraft,
    order_no: &str,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(orders::table)
        .values((
            orders::order_no.eq(order_no),
            orders::client_name.eq(&draft.client_name),
            orders::description.eq(&draft.description),
            orders::customer_reference.eq(draft.customer_reference.as_deref()),
            orders::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let order_id: i64 = conn.get_last_insert_rowid()?;
    info!(order_id, order_no, "Inserted order");
    Ok(order_id)
}

/// Inserts a quotation.
///
/// Linked quotations share their number, so no uniqueness is enforced.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_quotation(
    conn: &mut SqliteConnection,
    draft: &QuotationDraft,
    quotation_no: &str,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(quotations::table)
        .values((
            quotations::quotation_no.eq(quotation_no),
            quotations::linked_pid.eq(draft.linked_pid.as_ref().map(LinkedPid::as_str)),
            quotations::client_name.eq(&draft.client_name),
            quotations::subject.eq(&draft.subject),
            quotations::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let quotation_id: i64 = conn.get_last_insert_rowid()?;
    info!(quotation_id, quotation_no, "Inserted quotation");
    Ok(quotation_id)
}

/// Inserts a purchase order.
///
/// # Errors
///
/// Returns `PersistenceError::IdentifierConflict` if the number is already
/// stored, or another error if the insert fails.
pub fn insert_purchase_order(
    conn: &mut SqliteConnection,
    draft: &PurchaseOrderDraft,
    po_number: &str,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(purchase_orders::table)
        .values((
            purchase_orders::po_number.eq(po_number),
            purchase_orders::linked_pid.eq(draft.linked_pid.as_ref().map(LinkedPid::as_str)),
            purchase_orders::vendor_name.eq(&draft.vendor_name),
            purchase_orders::description.eq(&draft.description),
            purchase_orders::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let purchase_order_id: i64 = conn.get_last_insert_rowid()?;
    info!(purchase_order_id, po_number, "Inserted purchase order");
    Ok(purchase_order_id)
}

/// Inserts a purchase request.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_purchase_request(
    conn: &mut SqliteConnection,
    draft: &PurchaseRequestDraft,
    pr_number: &str,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(purchase_requests::table)
        .values((
            purchase_requests::pr_number.eq(pr_number),
            purchase_requests::linked_pid.eq(draft.linked_pid.as_ref().map(LinkedPid::as_str)),
            purchase_requests::requested_by.eq(&draft.requested_by),
            purchase_requests::description.eq(&draft.description),
            purchase_requests::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let purchase_request_id: i64 = conn.get_last_insert_rowid()?;
    info!(purchase_request_id, pr_number, "Inserted purchase request");
    Ok(purchase_request_id)
}

/// Records `identifier` as retired from `collection`.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn retire_identifier(
    conn: &mut SqliteConnection,
    collection: Collection,
    identifier: &str,
) -> Result<(), PersistenceError> {
    diesel::insert_into(retired_identifiers::table)
        .values((
            retired_identifiers::collection.eq(collection.as_str()),
            retired_identifiers::identifier.eq(identifier),
        ))
        .execute(conn)?;

    debug!(collection = %collection, identifier, "Retired identifier");
    Ok(())
}

/// Deletes a record by collection and row ID.
///
/// Callers retire the record's identifier in the same transaction.
///
/// # Errors
///
/// Returns `PersistenceError::RecordNotFound` if no row was deleted.
pub fn delete_record(
    conn: &mut SqliteConnection,
    collection: Collection,
    id: i64,
) -> Result<(), PersistenceError> {
    let deleted: usize = match collection {
        Collection::Orders => diesel::delete(orders::table.find(id)).execute(conn)?,
        Collection::Projects => diesel::delete(projects::table.find(id)).execute(conn)?,
        Collection::Quotations => diesel::delete(quotations::table.find(id)).execute(conn)?,
        Collection::PurchaseOrders => {
            diesel::delete(purchase_orders::table.find(id)).execute(conn)?
        }
        Collection::PurchaseRequests => {
            diesel::delete(purchase_requests::table.find(id)).execute(conn)?
        }
    };

    if deleted == 0 {
        return Err(PersistenceError::RecordNotFound { collection, id });
    }

    debug!(collection = %collection, id, "Deleted record");
    Ok(())
}

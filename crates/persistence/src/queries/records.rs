// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record listing and lookup.

use diesel::SqliteConnection;
use diesel::prelude::*;
use powerdesk_domain::{Collection, RecordSummary};

use crate::diesel_schema::{orders, projects, purchase_orders, purchase_requests, quotations};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = orders)]
struct OrderRow {
    order_id: i64,
    order_no: String,
    client_name: String,
    description: String,
    created_at: String,
}

impl From<OrderRow> for RecordSummary {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.order_id,
            collection: Collection::Orders,
            identifier: row.order_no,
            linked_pid: None,
            counterparty: row.client_name,
            title: row.description,
            created_at: row.created_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = projects)]
struct ProjectRow {
    project_id: i64,
    pid_no: String,
    name: String,
    client_name: String,
    created_at: String,
}

impl From<ProjectRow> for RecordSummary {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.project_id,
            collection: Collection::Projects,
            identifier: row.pid_no,
            linked_pid: None,
            counterparty: row.client_name,
            title: row.name,
            created_at: row.created_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = quotations)]
struct QuotationRow {
    quotation_id: i64,
    quotation_no: String,
    linked_pid: Option<String>,
    client_name: String,
    subject: String,
    created_at: String,
}

impl From<QuotationRow> for RecordSummary {
    fn from(row: QuotationRow) -> Self {
        Self {
            id: row.quotation_id,
            collection: Collection::Quotations,
            identifier: row.quotation_no,
            linked_pid: row.linked_pid,
            counterparty: row.client_name,
            title: row.subject,
            created_at: row.created_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = purchase_orders)]
struct PurchaseOrderRow {
    purchase_order_id: i64,
    po_number: String,
    linked_pid: Option<String>,
    vendor_name: String,
    description: String,
    created_at: String,
}

impl From<PurchaseOrderRow> for RecordSummary {
    fn from(row: PurchaseOrderRow) -> Self {
        Self {
            id: row.purchase_order_id,
            collection: Collection::PurchaseOrders,
            identifier: row.po_number,
            linked_pid: row.linked_pid,
            counterparty: row.vendor_name,
            title: row.description,
            created_at: row.created_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = purchase_requests)]
struct PurchaseRequestRow {
    purchase_request_id: i64,
    pr_number: String,
    linked_pid: Option<String>,
    requested_by: String,
    description: String,
    created_at: String,
}

impl From<PurchaseRequestRow> for RecordSummary {
    fn from(row: PurchaseRequestRow) -> Self {
        Self {
            id: row.purchase_request_id,
            collection: Collection::PurchaseRequests,
            identifier: row.pr_number,
            linked_pid: row.linked_pid,
            counterparty: row.requested_by,
            title: row.description,
            created_at: row.created_at,
        }
    }
}

fn summaries<R: Into<RecordSummary>>(rows: Vec<R>) -> Vec<RecordSummary> {
    rows.into_iter().map(Into::into).collect()
}

/// Lists every record of a collection in insertion order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_records(
    conn: &mut SqliteConnection,
    collection: Collection,
) -> Result<Vec<RecordSummary>, PersistenceError> {
    let records: Vec<RecordSummary> = match collection {
        Collection::Orders => summaries(
            orders::table
                .select(OrderRow::as_select())
                .order(orders::order_id.asc())
                .load::<OrderRow>(conn)?,
        ),
        Collection::Projects => summaries(
            projects::table
                .select(ProjectRow::as_select())
                .order(projects::project_id.asc())
                .load::<ProjectRow>(conn)?,
        ),
        Collection::Quotations => summaries(
            quotations::table
                .select(QuotationRow::as_select())
                .order(quotations::quotation_id.asc())
                .load::<QuotationRow>(conn)?,
        ),
        Collection::PurchaseOrders => summaries(
            purchase_orders::table
                .select(PurchaseOrderRow::as_select())
                .order(purchase_orders::purchase_order_id.asc())
                .load::<PurchaseOrderRow>(conn)?,
        ),
        Collection::PurchaseRequests => summaries(
            purchase_requests::table
                .select(PurchaseRequestRow::as_select())
                .order(purchase_requests::purchase_request_id.asc())
                .load::<PurchaseRequestRow>(conn)?,
        ),
    };

    Ok(records)
}

/// Retrieves one record by collection and row ID.
///
/// # Errors
///
/// Returns `PersistenceError::RecordNotFound` if no such record exists.
pub fn get_record(
    conn: &mut SqliteConnection,
    collection: Collection,
    id: i64,
) -> Result<RecordSummary, PersistenceError> {
    let result: Result<RecordSummary, diesel::result::Error> = match collection {
        Collection::Orders => orders::table
            .find(id)
            .select(OrderRow::as_select())
            .first::<OrderRow>(conn)
            .map(Into::into),
        Collection::Projects => projects::table
            .find(id)
            .select(ProjectRow::as_select())
            .first::<ProjectRow>(conn)
            .map(Into::into),
        Collection::Quotations => quotations::table
            .find(id)
            .select(QuotationRow::as_select())
            .first::<QuotationRow>(conn)
            .map(Into::into),
        Collection::PurchaseOrders => purchase_orders::table
            .find(id)
            .select(PurchaseOrderRow::as_select())
            .first::<PurchaseOrderRow>(conn)
            .map(Into::into),
        Collection::PurchaseRequests => purchase_requests::table
            .find(id)
            .select(PurchaseRequestRow::as_select())
            .first::<PurchaseRequestRow>(conn)
            .map(Into::into),
    };

    match result {
        Ok(record) => Ok(record),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::RecordNotFound { collection, id })
        }
        Err(e) => Err(e.into()),
    }
}

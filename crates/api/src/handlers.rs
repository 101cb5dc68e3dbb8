// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Handlers validate raw requests into domain values, call persistence and
//! shape the result. They know nothing about HTTP.

use powerdesk::{Allocation, IssueContext, PidAllocation};
use powerdesk_domain::{
    BusinessClock, Collection, FiscalYear, IdentifierFamily, LinkedPid, OrderDraft, ProjectDraft,
    PurchaseOrderDraft, PurchaseRequestDraft, QuotationDraft, RecordSummary, parse_calendar_date,
};
use powerdesk_persistence::{CreatedRecord, Persistence};
use time::Date;
use tracing::{debug, info};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    CreateOrderRequest, CreateProjectRequest, CreatePurchaseOrderRequest,
    CreatePurchaseRequestRequest, CreateQuotationRequest, CreateRecordResponse,
    DeleteRecordResponse, FiscalYearRequest, FiscalYearResponse, IdentifierPreviewResponse,
    ListRecordsResponse, PidPreviewResponse, PreviewIdentifierRequest, PreviewPidRequest,
};

/// Treats blank query and body values as absent.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Builds the issue context for a request: the clock's current time and
/// the fiscal year override, if any.
///
/// # Errors
///
/// Returns an error if the override is not a valid fiscal year or the clock
/// cannot be read.
pub fn issue_context(clock: &BusinessClock, fy: Option<&str>) -> Result<IssueContext, ApiError> {
    let fiscal_year: Option<FiscalYear> = non_blank(fy)
        .map(str::parse::<FiscalYear>)
        .transpose()
        .map_err(translate_domain_error)?;
    let now = clock.now().map_err(translate_domain_error)?;

    Ok(IssueContext::at(now).with_fiscal_year(fiscal_year))
}

fn parse_collection(collection: &str) -> Result<Collection, ApiError> {
    collection
        .parse::<Collection>()
        .map_err(translate_domain_error)
}

/// Resolves the fiscal year of a date, or of today when no date is given.
///
/// # Errors
///
/// Returns an error if the date cannot be parsed or the clock cannot be read.
pub fn resolve_fiscal_year(
    clock: &BusinessClock,
    request: &FiscalYearRequest,
) -> Result<FiscalYearResponse, ApiError> {
    let date: Date = match non_blank(request.date.as_deref()) {
        Some(value) => parse_calendar_date(value).map_err(translate_domain_error)?,
        None => clock.today().map_err(translate_domain_error)?,
    };

    Ok(FiscalYearResponse {
        date: date.to_string(),
        financial_year: FiscalYear::containing(date).label(),
    })
}

/// Previews the next PID without storing anything.
///
/// # Errors
///
/// Returns an error if the fiscal year override is invalid or the scan fails.
pub fn preview_pid(
    persistence: &mut Persistence,
    clock: &BusinessClock,
    request: &PreviewPidRequest,
) -> Result<PidPreviewResponse, ApiError> {
    let context: IssueContext = issue_context(clock, request.fy.as_deref())?;
    let allocation: PidAllocation = persistence
        .preview_pid(&context)
        .map_err(translate_persistence_error)?;

    debug!(next_pid = %allocation.next_pid, "Previewed PID");

    Ok(PidPreviewResponse {
        next_pid: allocation.next_pid,
        financial_year: allocation.financial_year.label(),
        sequence: allocation.sequence,
        skipped: allocation.skipped,
    })
}

/// Previews the next identifier of any family without storing anything.
///
/// # Errors
///
/// Returns an error if the family, linked PID or fiscal year is invalid, or
/// the scan fails.
pub fn preview_identifier(
    persistence: &mut Persistence,
    clock: &BusinessClock,
    request: &PreviewIdentifierRequest,
) -> Result<IdentifierPreviewResponse, ApiError> {
    let family: IdentifierFamily = request
        .family
        .parse::<IdentifierFamily>()
        .map_err(translate_domain_error)?;
    let linked_pid: Option<LinkedPid> = non_blank(request.linked_pid.as_deref())
        .map(LinkedPid::new)
        .transpose()
        .map_err(translate_domain_error)?;
    let context: IssueContext = issue_context(clock, request.fy.as_deref())?;

    let allocation: Allocation = persistence
        .preview(family, linked_pid.as_ref(), &context)
        .map_err(translate_persistence_error)?;

    debug!(family = %family, identifier = %allocation.identifier, "Previewed identifier");

    Ok(IdentifierPreviewResponse {
        family: family.as_str().to_string(),
        identifier: allocation.identifier,
        sequence: allocation.sequence,
        financial_year: allocation.fiscal_year.map(|fy| fy.label()),
        linked_pid: allocation.linked_pid.map(|pid| pid.as_str().to_string()),
        skipped: allocation.skipped,
    })
}

fn created_response(created: CreatedRecord) -> CreateRecordResponse {
    let message: String = format!(
        "Created {} {}",
        created.record.collection, created.record.identifier
    );
    info!(
        collection = %created.record.collection,
        identifier = %created.record.identifier,
        "Record created via API"
    );

    CreateRecordResponse {
        record: created.record,
        sequence: created.allocation.sequence,
        skipped: created.allocation.skipped,
        message,
    }
}

/// Creates a project and allocates its PID.
///
/// # Errors
///
/// Returns an error if validation, allocation or storage fails.
pub fn create_project(
    persistence: &mut Persistence,
    clock: &BusinessClock,
    request: &CreateProjectRequest,
) -> Result<CreateRecordResponse, ApiError> {
    let draft: ProjectDraft =
        ProjectDraft::new(&request.name, &request.client_name).map_err(translate_domain_error)?;
    let context: IssueContext = issue_context(clock, request.fy.as_deref())?;

    persistence
        .create_project(&draft, &context)
        .map(created_response)
        .map_err(translate_persistence_error)
}

/// Creates an order and allocates its PID.
///
/// # Errors
///
/// Returns an error if validation, allocation or storage fails.
pub fn create_order(
    persistence: &mut Persistence,
    clock: &BusinessClock,
    request: &CreateOrderRequest,
) -> Result<CreateRecordResponse, ApiError> {
    let draft: OrderDraft = OrderDraft::new(
        &request.client_name,
        &request.description,
        request.customer_reference.as_deref(),
    )
    .map_err(translate_domain_error)?;
    let context: IssueContext = issue_context(clock, request.fy.as_deref())?;

    persistence
        .create_order(&draft, &context)
        .map(created_response)
        .map_err(translate_persistence_error)
}

/// Creates a quotation and allocates its number.
///
/// # Errors
///
/// Returns an error if validation, allocation or storage fails.
pub fn create_quotation(
    persistence: &mut Persistence,
    clock: &BusinessClock,
    request: &CreateQuotationRequest,
) -> Result<CreateRecordResponse, ApiError> {
    let draft: QuotationDraft = QuotationDraft::new(
        &request.client_name,
        &request.subject,
        request.linked_pid.as_deref(),
    )
    .map_err(translate_domain_error)?;
    let context: IssueContext = issue_context(clock, request.fy.as_deref())?;

    persistence
        .create_quotation(&draft, &context)
        .map(created_response)
        .map_err(translate_persistence_error)
}

/// Creates a purchase order and allocates its number.
///
/// # Errors
///
/// Returns an error if validation, allocation or storage fails.
pub fn create_purchase_order(
    persistence: &mut Persistence,
    clock: &BusinessClock,
    request: &CreatePurchaseOrderRequest,
) -> Result<CreateRecordResponse, ApiError> {
    let draft: PurchaseOrderDraft = PurchaseOrderDraft::new(
        &request.vendor_name,
        &request.description,
        request.linked_pid.as_deref(),
    )
    .map_err(translate_domain_error)?;
    let context: IssueContext = issue_context(clock, request.fy.as_deref())?;

    persistence
        .create_purchase_order(&draft, &context)
        .map(created_response)
        .map_err(translate_persistence_error)
}

/// Creates a purchase request and allocates its number.
///
/// # Errors
///
/// Returns an error if validation, allocation or storage fails.
pub fn create_purchase_request(
    persistence: &mut Persistence,
    clock: &BusinessClock,
    request: &CreatePurchaseRequestRequest,
) -> Result<CreateRecordResponse, ApiError> {
    let draft: PurchaseRequestDraft = PurchaseRequestDraft::new(
        &request.requested_by,
        &request.description,
        request.linked_pid.as_deref(),
    )
    .map_err(translate_domain_error)?;
    let context: IssueContext = issue_context(clock, request.fy.as_deref())?;

    persistence
        .create_purchase_request(&draft, &context)
        .map(created_response)
        .map_err(translate_persistence_error)
}

/// Lists the records of a collection.
///
/// # Errors
///
/// Returns an error if the collection is unknown or the query fails.
pub fn list_records(
    persistence: &mut Persistence,
    collection: &str,
) -> Result<ListRecordsResponse, ApiError> {
    let collection: Collection = parse_collection(collection)?;
    let records: Vec<RecordSummary> = persistence
        .list_records(collection)
        .map_err(translate_persistence_error)?;

    Ok(ListRecordsResponse {
        collection: collection.as_str().to_string(),
        records,
    })
}

/// Deletes a record and retires its identifier, which is never handed out
/// again.
///
/// # Errors
///
/// Returns an error if the collection is unknown, the record does not exist
/// or the delete fails.
pub fn delete_record(
    persistence: &mut Persistence,
    collection: &str,
    id: i64,
) -> Result<DeleteRecordResponse, ApiError> {
    let collection: Collection = parse_collection(collection)?;
    persistence
        .delete_record(collection, id)
        .map_err(translate_persistence_error)?;

    info!(collection = %collection, id, "Record deleted via API");

    Ok(DeleteRecordResponse {
        collection: collection.as_str().to_string(),
        id,
        message: format!("Deleted record {id} from {collection}"),
    })
}

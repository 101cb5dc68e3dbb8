// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    create_order, create_project, create_purchase_order, create_purchase_request,
    create_quotation, delete_record, issue_context, list_records, preview_identifier, preview_pid,
    resolve_fiscal_year,
};
pub use request_response::{
    CreateOrderRequest, CreateProjectRequest, CreatePurchaseOrderRequest,
    CreatePurchaseRequestRequest, CreateQuotationRequest, CreateRecordResponse,
    DeleteRecordResponse, FiscalYearRequest, FiscalYearResponse, IdentifierPreviewResponse,
    ListRecordsResponse, PidPreviewResponse, PreviewIdentifierRequest, PreviewPidRequest,
};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Required text fields default to empty when absent so that a missing
//! field and a blank field are rejected the same way.

use powerdesk_domain::RecordSummary;
use serde::{Deserialize, Serialize};

/// API request to resolve the fiscal year of a date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FiscalYearRequest {
    /// ISO 8601 date; today in the business timezone when absent.
    pub date: Option<String>,
}

/// API response carrying a resolved fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearResponse {
    /// The date that was resolved.
    pub date: String,
    /// The fiscal year label, e.g. `25-26`.
    pub financial_year: String,
}

/// API request to preview the next PID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreviewPidRequest {
    /// Fiscal year override.
    pub fy: Option<String>,
}

/// API response for a PID preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PidPreviewResponse {
    /// The next PID, e.g. `PID/25-26/008`.
    pub next_pid: String,
    /// The fiscal year label.
    pub financial_year: String,
    /// The numeric sequence of the PID.
    pub sequence: u32,
    /// Stored identifiers ignored because their sequence was unparseable.
    pub skipped: usize,
}

/// API request to preview the next identifier of any family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreviewIdentifierRequest {
    /// `pid`, `quotation`, `purchase_order` or `purchase_request`.
    #[serde(default)]
    pub family: String,
    /// Parent PID for chained families.
    pub linked_pid: Option<String>,
    /// Fiscal year override.
    pub fy: Option<String>,
}

/// API response for an identifier preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierPreviewResponse {
    /// The family previewed.
    pub family: String,
    /// The identifier that would be issued next.
    pub identifier: String,
    /// The sequence number, absent for derived and time-of-day forms.
    pub sequence: Option<u32>,
    /// The fiscal year label, for fiscal-year-scoped forms.
    pub financial_year: Option<String>,
    /// The parent PID, for chained forms.
    pub linked_pid: Option<String>,
    /// Stored identifiers ignored because their sequence was unparseable.
    pub skipped: usize,
}

/// API request to create a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub client_name: String,
    pub fy: Option<String>,
}

/// API request to create an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub description: String,
    pub customer_reference: Option<String>,
    pub fy: Option<String>,
}

/// API request to create a quotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateQuotationRequest {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub subject: String,
    pub linked_pid: Option<String>,
    pub fy: Option<String>,
}

/// API request to create a purchase order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatePurchaseOrderRequest {
    #[serde(default)]
    pub vendor_name: String,
    #[serde(default)]
    pub description: String,
    pub linked_pid: Option<String>,
    pub fy: Option<String>,
}

/// API request to create a purchase request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatePurchaseRequestRequest {
    #[serde(default)]
    pub requested_by: String,
    #[serde(default)]
    pub description: String,
    pub linked_pid: Option<String>,
    pub fy: Option<String>,
}

/// API response for a successful record creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    /// The stored record.
    pub record: RecordSummary,
    /// The sequence number behind the identifier, if any.
    pub sequence: Option<u32>,
    /// Stored identifiers ignored during allocation.
    pub skipped: usize,
    /// A success message.
    pub message: String,
}

/// API response listing the records of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRecordsResponse {
    pub collection: String,
    pub records: Vec<RecordSummary>,
}

/// API response for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRecordResponse {
    pub collection: String,
    pub id: i64,
    pub message: String,
}

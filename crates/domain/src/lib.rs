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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod error;
mod fiscal_year;
mod identifier;
mod records;

#[cfg(test)]
mod tests;

pub use clock::{BusinessClock, DEFAULT_TIMEZONE};
pub use error::DomainError;
pub use fiscal_year::{FiscalYear, parse_calendar_date};
pub use identifier::{
    Collection, IdentifierFamily, IdentifierShape, LinkedPid, SequenceScope,
    classify_identifier, linked_quotation_number, unlinked_purchase_request_number,
};
pub use records::{
    OrderDraft, ProjectDraft, PurchaseOrderDraft, PurchaseRequestDraft, QuotationDraft,
    RecordSummary,
};

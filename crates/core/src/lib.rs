// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier allocation for Powerdesk.
//!
//! Every project, order, quotation, purchase order and purchase request
//! receives a human-readable identifier when it is created. This crate
//! computes the next identifier for a family by scanning the identifiers
//! already stored, through an injected [`IdentifierSource`].

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

mod allocator;
mod audit;
mod error;
mod scanner;
mod source;

#[cfg(test)]
mod tests;

pub use allocator::{
    Allocation, IssueContext, PidAllocation, allocate, allocate_pid,
    allocate_purchase_order_number, allocate_purchase_request_number, allocate_quotation_number,
};
pub use audit::{FindingKind, IdentifierFinding, audit_identifiers};
pub use error::AllocationError;
pub use scanner::{SequenceScan, scan_sequence};
pub use source::IdentifierSource;

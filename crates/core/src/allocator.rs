// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier allocation per family.
//!
//! Allocation reads persisted state and computes the next identifier. It
//! does not write anything, so two allocations in the same scope made
//! before either record is stored return the same identifier. Callers that
//! persist the result must run allocation and insert under one write lock.

use crate::error::AllocationError;
use crate::scanner::{SequenceScan, scan_sequence};
use crate::source::IdentifierSource;
use powerdesk_domain::{
    FiscalYear, IdentifierFamily, LinkedPid, SequenceScope, linked_quotation_number,
    unlinked_purchase_request_number,
};
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use tracing::debug;

/// When an identifier is issued and which fiscal year it is issued in.
///
/// The fiscal year defaults to the one containing `now` and may be
/// overridden, e.g. to preview identifiers for another year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueContext {
    now: PrimitiveDateTime,
    fiscal_year: FiscalYear,
}

impl IssueContext {
    /// Creates a context for the given wall-clock time.
    #[must_use]
    pub fn at(now: PrimitiveDateTime) -> Self {
        Self {
            now,
            fiscal_year: FiscalYear::containing(now.date()),
        }
    }

    /// Replaces the fiscal year when an override is given.
    #[must_use]
    pub fn with_fiscal_year(self, fiscal_year: Option<FiscalYear>) -> Self {
        Self {
            fiscal_year: fiscal_year.unwrap_or(self.fiscal_year),
            ..self
        }
    }

    /// Returns the wall-clock time of issue.
    #[must_use]
    pub const fn now(&self) -> PrimitiveDateTime {
        self.now
    }

    /// Returns the fiscal year identifiers are issued in.
    #[must_use]
    pub const fn fiscal_year(&self) -> FiscalYear {
        self.fiscal_year
    }

    /// Returns the time of issue as `YYYY-MM-DDTHH:MM:SS`.
    #[must_use]
    pub fn timestamp(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.now.year(),
            u8::from(self.now.month()),
            self.now.day(),
            self.now.hour(),
            self.now.minute(),
            self.now.second()
        )
    }
}

/// The next project/order identifier for a fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PidAllocation {
    /// The identifier, e.g. `PID/25-26/008`.
    pub next_pid: String,
    /// The fiscal year the identifier belongs to.
    pub financial_year: FiscalYear,
    /// The numeric sequence of the identifier.
    pub sequence: u32,
    /// Existing identifiers ignored because their sequence was unparseable.
    pub skipped: usize,
}

/// An identifier of any family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// The family the identifier belongs to.
    pub family: IdentifierFamily,
    /// The identifier itself.
    pub identifier: String,
    /// The sequence number, absent for derived and time-of-day forms.
    pub sequence: Option<u32>,
    /// The fiscal year, for fiscal-year-scoped forms.
    pub fiscal_year: Option<FiscalYear>,
    /// The parent PID, for forms chained to one.
    pub linked_pid: Option<LinkedPid>,
    /// Existing identifiers ignored because their sequence was unparseable.
    pub skipped: usize,
}

impl Allocation {
    fn sequential(family: IdentifierFamily, scan: &SequenceScan) -> Self {
        let (fiscal_year, linked_pid) = match &scan.scope {
            SequenceScope::Pid(fy)
            | SequenceScope::Quotation(fy)
            | SequenceScope::UnlinkedPurchaseOrder(fy) => (Some(*fy), None),
            SequenceScope::PurchaseOrder(pid) | SequenceScope::PurchaseRequest(pid) => {
                (None, Some(pid.clone()))
            }
        };

        Self {
            family,
            identifier: scan.identifier(),
            sequence: Some(scan.next),
            fiscal_year,
            linked_pid,
            skipped: scan.skipped.len(),
        }
    }
}

impl From<PidAllocation> for Allocation {
    fn from(value: PidAllocation) -> Self {
        Self {
            family: IdentifierFamily::Pid,
            identifier: value.next_pid,
            sequence: Some(value.sequence),
            fiscal_year: Some(value.financial_year),
            linked_pid: None,
            skipped: value.skipped,
        }
    }
}

/// Allocates the next PID, counting across orders and projects.
///
/// # Errors
///
/// Returns an error if a query fails or the sequence is exhausted.
pub fn allocate_pid<S: IdentifierSource>(
    source: &mut S,
    context: &IssueContext,
) -> Result<PidAllocation, AllocationError<S::Error>> {
    let scan: SequenceScan = scan_sequence(source, &SequenceScope::Pid(context.fiscal_year))?;

    Ok(PidAllocation {
        next_pid: scan.identifier(),
        financial_year: context.fiscal_year,
        sequence: scan.next,
        skipped: scan.skipped.len(),
    })
}

/// Allocates a quotation number.
///
/// A linked quotation is numbered `Q-{linked_pid}` without scanning; the same
/// PID always yields the same number. A standalone quotation gets the next
/// `Q-{fy}-{n:04}`.
///
/// # Errors
///
/// Returns an error if a query fails or the sequence is exhausted.
pub fn allocate_quotation_number<S: IdentifierSource>(
    source: &mut S,
    linked_pid: Option<&LinkedPid>,
    context: &IssueContext,
) -> Result<Allocation, AllocationError<S::Error>> {
    if let Some(pid) = linked_pid {
        return Ok(Allocation {
            family: IdentifierFamily::Quotation,
            identifier: linked_quotation_number(pid),
            sequence: None,
            fiscal_year: None,
            linked_pid: Some(pid.clone()),
            skipped: 0,
        });
    }

    let scan: SequenceScan =
        scan_sequence(source, &SequenceScope::Quotation(context.fiscal_year))?;
    Ok(Allocation::sequential(IdentifierFamily::Quotation, &scan))
}

/// Allocates a purchase order number.
///
/// Linked purchase orders are numbered per parent PID; unlinked ones fall
/// back to a fiscal-year sequence.
///
/// # Errors
///
/// Returns an error if a query fails or the sequence is exhausted.
pub fn allocate_purchase_order_number<S: IdentifierSource>(
    source: &mut S,
    linked_pid: Option<&LinkedPid>,
    context: &IssueContext,
) -> Result<Allocation, AllocationError<S::Error>> {
    let scope: SequenceScope = linked_pid.map_or(
        SequenceScope::UnlinkedPurchaseOrder(context.fiscal_year),
        |pid| SequenceScope::PurchaseOrder(pid.clone()),
    );

    let scan: SequenceScan = scan_sequence(source, &scope)?;
    Ok(Allocation::sequential(IdentifierFamily::PurchaseOrder, &scan))
}

/// Allocates a purchase request number.
///
/// Linked purchase requests are numbered per parent PID. Unlinked ones are
/// numbered from the time of day (`PR-{fy}-{hhmmss}`) and are not sequential.
///
/// # Errors
///
/// Returns an error if a query fails or the sequence is exhausted.
pub fn allocate_purchase_request_number<S: IdentifierSource>(
    source: &mut S,
    linked_pid: Option<&LinkedPid>,
    context: &IssueContext,
) -> Result<Allocation, AllocationError<S::Error>> {
    let Some(pid) = linked_pid else {
        return Ok(Allocation {
            family: IdentifierFamily::PurchaseRequest,
            identifier: unlinked_purchase_request_number(
                context.fiscal_year,
                context.now.time(),
            ),
            sequence: None,
            fiscal_year: Some(context.fiscal_year),
            linked_pid: None,
            skipped: 0,
        });
    };

    let scan: SequenceScan = scan_sequence(source, &SequenceScope::PurchaseRequest(pid.clone()))?;
    Ok(Allocation::sequential(
        IdentifierFamily::PurchaseRequest,
        &scan,
    ))
}

/// Allocates an identifier of any family.
///
/// A linked PID has no meaning for the PID family and is ignored there.
///
/// # Errors
///
/// Returns an error if a query fails or the sequence is exhausted.
pub fn allocate<S: IdentifierSource>(
    source: &mut S,
    family: IdentifierFamily,
    linked_pid: Option<&LinkedPid>,
    context: &IssueContext,
) -> Result<Allocation, AllocationError<S::Error>> {
    debug!(
        family = %family,
        linked_pid = ?linked_pid.map(LinkedPid::as_str),
        fiscal_year = %context.fiscal_year,
        "Allocating identifier"
    );

    match family {
        IdentifierFamily::Pid => allocate_pid(source, context).map(Allocation::from),
        IdentifierFamily::Quotation => allocate_quotation_number(source, linked_pid, context),
        IdentifierFamily::PurchaseOrder => {
            allocate_purchase_order_number(source, linked_pid, context)
        }
        IdentifierFamily::PurchaseRequest => {
            allocate_purchase_request_number(source, linked_pid, context)
        }
    }
}

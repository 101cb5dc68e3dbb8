// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod creation_tests;
mod initialization_tests;

use crate::Persistence;
use powerdesk::IssueContext;
use powerdesk_domain::{
    LinkedPid, OrderDraft, ProjectDraft, PurchaseOrderDraft, PurchaseRequestDraft, QuotationDraft,
};
use time::macros::datetime;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

/// 2025-11-20 14:30:15, inside fiscal year 25-26.
pub fn context_25_26() -> IssueContext {
    IssueContext::at(datetime!(2025-11-20 14:30:15))
}

pub fn linked(pid: &str) -> LinkedPid {
    LinkedPid::new(pid).expect("valid linked PID")
}

pub fn project_draft() -> ProjectDraft {
    ProjectDraft::new("Plant upgrade", "Acme Industries").unwrap()
}

pub fn order_draft() -> OrderDraft {
    OrderDraft::new("Acme Industries", "Control panel retrofit", Some("ACME-PO-77")).unwrap()
}

pub fn quotation_draft(linked_pid: Option<&str>) -> QuotationDraft {
    QuotationDraft::new("Acme Industries", "Panel retrofit offer", linked_pid).unwrap()
}

pub fn purchase_order_draft(linked_pid: Option<&str>) -> PurchaseOrderDraft {
    PurchaseOrderDraft::new("Volt Supplies", "Breakers and busbars", linked_pid).unwrap()
}

pub fn purchase_request_draft(linked_pid: Option<&str>) -> PurchaseRequestDraft {
    PurchaseRequestDraft::new("Site stores", "Cable ties", linked_pid).unwrap()
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FindingKind, IdentifierFinding, audit_identifiers};
use powerdesk_domain::Collection;

fn records(entries: &[(Collection, &str)]) -> Vec<(Collection, String)> {
    entries
        .iter()
        .map(|(collection, identifier)| (*collection, (*identifier).to_string()))
        .collect()
}

#[test]
fn test_clean_data_has_no_findings() {
    let findings: Vec<IdentifierFinding> = audit_identifiers(&records(&[
        (Collection::Orders, "PID/25-26/001"),
        (Collection::Projects, "PID/25-26/002"),
        (Collection::Quotations, "Q-PID/25-26/001"),
        (Collection::Quotations, "Q-PID/25-26/001"),
        (Collection::PurchaseOrders, "PO-PID/25-26/001-01"),
        (Collection::PurchaseOrders, "PO-PID/25-26/002-01"),
    ]));

    assert!(findings.is_empty(), "unexpected findings: {findings:?}");
}

#[test]
fn test_malformed_identifiers_are_reported() {
    let findings: Vec<IdentifierFinding> = audit_identifiers(&records(&[
        (Collection::Orders, "PID/25-26/abc"),
        (Collection::PurchaseRequests, "REQ-7"),
    ]));

    assert_eq!(findings.len(), 2);
    assert!(findings.iter().all(|f| f.kind == FindingKind::Malformed));
}

#[test]
fn test_pid_shared_between_orders_and_projects() {
    let findings: Vec<IdentifierFinding> = audit_identifiers(&records(&[
        (Collection::Orders, "PID/25-26/005"),
        (Collection::Projects, "PID/25-26/005"),
    ]));

    assert_eq!(findings.len(), 2);
    assert!(
        findings
            .iter()
            .all(|f| f.kind == FindingKind::SharedSequence)
    );
    assert_eq!(findings[0].collection, Collection::Orders);
    assert!(findings[0].detail.contains("projects:PID/25-26/005"));
}

#[test]
fn test_duplicate_inside_one_collection() {
    let findings: Vec<IdentifierFinding> = audit_identifiers(&records(&[
        (Collection::PurchaseOrders, "PO-PID/25-26/010-01"),
        (Collection::PurchaseOrders, "PO-PID/25-26/010-01"),
    ]));

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::Duplicate);
    assert_eq!(findings[0].detail, "stored 2 times");
}

#[test]
fn test_differently_padded_suffixes_share_a_sequence() {
    let findings: Vec<IdentifierFinding> = audit_identifiers(&records(&[
        (Collection::Orders, "PID/25-26/7"),
        (Collection::Orders, "PID/25-26/007"),
    ]));

    assert_eq!(findings.len(), 2);
    assert!(
        findings
            .iter()
            .all(|f| f.kind == FindingKind::SharedSequence)
    );
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{
    context_25_26, create_test_persistence, linked, order_draft, project_draft,
    purchase_order_draft, purchase_request_draft, quotation_draft,
};
use crate::{CreatedRecord, PersistenceError, mutations};
use powerdesk::IssueContext;
use powerdesk_domain::{Collection, FiscalYear, IdentifierFamily};

#[test]
fn test_orders_and_projects_share_the_pid_sequence() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();

    let project: CreatedRecord = persistence.create_project(&project_draft(), &context).unwrap();
    let order: CreatedRecord = persistence.create_order(&order_draft(), &context).unwrap();

    assert_eq!(project.record.identifier, "PID/25-26/001");
    assert_eq!(project.record.collection, Collection::Projects);
    assert_eq!(order.record.identifier, "PID/25-26/002");
    assert_eq!(order.record.collection, Collection::Orders);
    assert_eq!(order.allocation.sequence, Some(2));
}

#[test]
fn test_next_pid_counts_both_collections() {
    let mut persistence = create_test_persistence();
    mutations::insert_order(&mut persistence.conn, &order_draft(), "PID/25-26/005", "t").unwrap();
    mutations::insert_project(&mut persistence.conn, &project_draft(), "PID/25-26/007", "t")
        .unwrap();

    let created = persistence
        .create_order(&order_draft(), &context_25_26())
        .unwrap();

    assert_eq!(created.record.identifier, "PID/25-26/008");
}

#[test]
fn test_previews_agree_until_a_record_is_stored() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();

    let first = persistence.preview_pid(&context).unwrap();
    let second = persistence.preview_pid(&context).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.next_pid, "PID/25-26/001");

    persistence.create_project(&project_draft(), &context).unwrap();
    let third = persistence.preview_pid(&context).unwrap();
    assert_eq!(third.next_pid, "PID/25-26/002");
}

#[test]
fn test_malformed_identifiers_are_skipped() {
    let mut persistence = create_test_persistence();
    mutations::insert_order(&mut persistence.conn, &order_draft(), "PID/25-26/abc", "t").unwrap();
    mutations::insert_order(&mut persistence.conn, &order_draft(), "PID/25-26/003", "t").unwrap();

    let preview = persistence.preview_pid(&context_25_26()).unwrap();

    assert_eq!(preview.next_pid, "PID/25-26/004");
    assert_eq!(preview.skipped, 1);
}

#[test]
fn test_deleted_identifiers_are_never_reused() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();
    let created: Vec<CreatedRecord> = (0..3)
        .map(|_| persistence.create_project(&project_draft(), &context).unwrap())
        .collect();

    persistence
        .delete_record(Collection::Projects, created[1].record.id)
        .unwrap();
    let next = persistence.create_project(&project_draft(), &context).unwrap();

    assert_eq!(next.record.identifier, "PID/25-26/004");
}

#[test]
fn test_deleting_the_highest_pid_does_not_reissue_it() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();
    let created: Vec<CreatedRecord> = (0..3)
        .map(|_| persistence.create_project(&project_draft(), &context).unwrap())
        .collect();

    persistence
        .delete_record(Collection::Projects, created[2].record.id)
        .unwrap();

    assert_eq!(
        persistence.preview_pid(&context).unwrap().next_pid,
        "PID/25-26/004"
    );
    let next = persistence.create_project(&project_draft(), &context).unwrap();
    assert_eq!(next.record.identifier, "PID/25-26/004");
}

#[test]
fn test_retired_order_pid_still_counts_for_projects() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();
    persistence.create_project(&project_draft(), &context).unwrap();
    let order = persistence.create_order(&order_draft(), &context).unwrap();
    assert_eq!(order.record.identifier, "PID/25-26/002");

    persistence
        .delete_record(Collection::Orders, order.record.id)
        .unwrap();
    let project = persistence.create_project(&project_draft(), &context).unwrap();

    assert_eq!(project.record.identifier, "PID/25-26/003");
}

#[test]
fn test_deleting_the_last_linked_purchase_order_keeps_its_number_retired() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();
    persistence
        .create_purchase_order(&purchase_order_draft(Some("PID/25-26/010")), &context)
        .unwrap();
    let second = persistence
        .create_purchase_order(&purchase_order_draft(Some("PID/25-26/010")), &context)
        .unwrap();
    assert_eq!(second.record.identifier, "PO-PID/25-26/010-02");

    persistence
        .delete_record(Collection::PurchaseOrders, second.record.id)
        .unwrap();
    let third = persistence
        .create_purchase_order(&purchase_order_draft(Some("PID/25-26/010")), &context)
        .unwrap();

    assert_eq!(third.record.identifier, "PO-PID/25-26/010-03");
}

#[test]
fn test_retired_identifiers_are_not_listed_as_stored() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();
    let first = persistence.create_project(&project_draft(), &context).unwrap();
    persistence.create_project(&project_draft(), &context).unwrap();

    persistence
        .delete_record(Collection::Projects, first.record.id)
        .unwrap();

    assert_eq!(
        persistence.list_identifiers().unwrap(),
        vec![(Collection::Projects, "PID/25-26/002".to_string())]
    );
    assert!(persistence.audit_identifiers().unwrap().is_empty());
}

#[test]
fn test_failed_delete_retires_nothing() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();

    let result = persistence.delete_record(Collection::Projects, 42);
    assert!(matches!(result, Err(PersistenceError::RecordNotFound { .. })));

    let created = persistence.create_project(&project_draft(), &context).unwrap();
    assert_eq!(created.record.identifier, "PID/25-26/001");
}

#[test]
fn test_fiscal_year_override_on_create() {
    let mut persistence = create_test_persistence();
    let context: IssueContext =
        context_25_26().with_fiscal_year(Some(FiscalYear::starting_in(2024)));

    let created = persistence.create_project(&project_draft(), &context).unwrap();

    assert_eq!(created.record.identifier, "PID/24-25/001");
    assert_eq!(created.record.created_at, "2025-11-20T14:30:15");
}

#[test]
fn test_linked_quotations_share_their_number() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();

    let first = persistence
        .create_quotation(&quotation_draft(Some("PID/25-26/010")), &context)
        .unwrap();
    let second = persistence
        .create_quotation(&quotation_draft(Some("PID/25-26/010")), &context)
        .unwrap();

    assert_eq!(first.record.identifier, "Q-PID/25-26/010");
    assert_eq!(second.record.identifier, "Q-PID/25-26/010");
    assert_ne!(first.record.id, second.record.id);
    assert_eq!(first.record.linked_pid.as_deref(), Some("PID/25-26/010"));
}

#[test]
fn test_standalone_quotations_are_sequential() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();
    persistence
        .create_quotation(&quotation_draft(Some("PID/25-26/010")), &context)
        .unwrap();

    let first = persistence
        .create_quotation(&quotation_draft(None), &context)
        .unwrap();
    let second = persistence
        .create_quotation(&quotation_draft(None), &context)
        .unwrap();

    assert_eq!(first.record.identifier, "Q-25-26-0001");
    assert_eq!(second.record.identifier, "Q-25-26-0002");
    assert_eq!(second.record.title, "Panel retrofit offer");
}

#[test]
fn test_purchase_orders_are_numbered_per_parent() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();

    let numbers: Vec<String> = [
        Some("PID/25-26/010"),
        Some("PID/25-26/010"),
        Some("PID/25-26/011"),
        None,
    ]
    .into_iter()
    .map(|pid| {
        persistence
            .create_purchase_order(&purchase_order_draft(pid), &context)
            .unwrap()
            .record
            .identifier
    })
    .collect();

    assert_eq!(
        numbers,
        vec![
            "PO-PID/25-26/010-01",
            "PO-PID/25-26/010-02",
            "PO-PID/25-26/011-01",
            "PO-25-26-0001",
        ]
    );
}

#[test]
fn test_purchase_requests_linked_and_unlinked() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();

    let linked_pr = persistence
        .create_purchase_request(&purchase_request_draft(Some("PID/25-26/010")), &context)
        .unwrap();
    let unlinked_pr = persistence
        .create_purchase_request(&purchase_request_draft(None), &context)
        .unwrap();

    assert_eq!(linked_pr.record.identifier, "PR-PID/25-26/010-01");
    assert_eq!(linked_pr.record.counterparty, "Site stores");
    assert_eq!(unlinked_pr.record.identifier, "PR-25-26-143015");
    assert_eq!(unlinked_pr.allocation.sequence, None);
}

#[test]
fn test_preview_for_any_family() {
    let mut persistence = create_test_persistence();
    let context = context_25_26();
    persistence
        .create_purchase_order(&purchase_order_draft(Some("PID/25-26/010")), &context)
        .unwrap();

    let preview = persistence
        .preview(
            IdentifierFamily::PurchaseOrder,
            Some(&linked("PID/25-26/010")),
            &context,
        )
        .unwrap();

    assert_eq!(preview.identifier, "PO-PID/25-26/010-02");
    assert_eq!(
        persistence
            .list_records(Collection::PurchaseOrders)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_unique_index_rejects_duplicate_pid() {
    let mut persistence = create_test_persistence();
    mutations::insert_project(&mut persistence.conn, &project_draft(), "PID/25-26/001", "t")
        .unwrap();

    let result =
        mutations::insert_project(&mut persistence.conn, &project_draft(), "PID/25-26/001", "t");

    assert!(matches!(result, Err(PersistenceError::IdentifierConflict(_))));
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::Path;

use clap::Parser;
use powerdesk::IssueContext;
use powerdesk_domain::{LinkedPid, ProjectDraft, PurchaseOrderDraft};
use powerdesk_persistence::Persistence;
use tempfile::TempDir;
use time::macros::datetime;

use crate::Args;
use crate::report::OutputFormat;

fn run(args: &[&str]) -> color_eyre::Result<String> {
    let args = Args::try_parse_from(std::iter::once("powerdesk-admin").chain(args.iter().copied()))?;
    let mut out: Vec<u8> = Vec::new();
    args.run(&mut out)?;
    Ok(String::from_utf8(out)?)
}

fn seed_database(path: &Path) {
    let mut persistence = Persistence::new_with_file(path).unwrap();
    let context = IssueContext::at(datetime!(2025-11-20 14:30:15));

    for _ in 0..2 {
        persistence
            .create_project(
                &ProjectDraft {
                    name: "Plant upgrade".to_string(),
                    client_name: "Acme Industries".to_string(),
                },
                &context,
            )
            .unwrap();
    }

    let parent = LinkedPid::new("PID/25-26/001").unwrap();
    persistence
        .create_purchase_order(
            &PurchaseOrderDraft {
                vendor_name: "Volt Supplies".to_string(),
                description: "Breakers and busbars".to_string(),
                linked_pid: Some(parent),
            },
            &context,
        )
        .unwrap();
}

#[test]
fn test_parse_defaults() {
    let args = Args::try_parse_from(["powerdesk-admin", "audit"]).unwrap();
    assert!(args.database.is_none());
    assert_eq!(args.timezone, powerdesk_domain::DEFAULT_TIMEZONE);
    assert!(matches!(
        args.command,
        crate::Command::Audit {
            output: OutputFormat::Text
        }
    ));
}

#[test]
fn test_parse_rejects_unknown_output_format() {
    let result = Args::try_parse_from(["powerdesk-admin", "audit", "--output", "xml"]);
    assert!(result.is_err());
}

#[test]
fn test_fiscal_year_for_date() {
    assert_eq!(
        run(&["fiscal-year", "--date", "2026-03-31"]).unwrap(),
        "25-26\n"
    );
    assert_eq!(run(&["fy", "--date", "2026-04-01"]).unwrap(), "26-27\n");
}

#[test]
fn test_fiscal_year_rejects_bad_date() {
    assert!(run(&["fiscal-year", "--date", "31/03/2026"]).is_err());
}

#[test]
fn test_unknown_timezone_is_an_error() {
    assert!(run(&["--timezone", "Mars/Olympus", "fiscal-year"]).is_err());
}

#[test]
fn test_preview_requires_database() {
    let err = run(&["preview", "pid", "--fy", "25-26"]).unwrap_err();
    assert!(err.to_string().contains("--database"));
}

#[test]
fn test_preview_against_seeded_database() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("powerdesk.db");
    seed_database(&path);
    let db = path.to_str().unwrap();

    assert_eq!(
        run(&["--database", db, "preview", "pid", "--fy", "25-26"]).unwrap(),
        "PID/25-26/003\n"
    );
    assert_eq!(
        run(&[
            "--database",
            db,
            "preview",
            "po",
            "--linked-pid",
            "PID/25-26/001"
        ])
        .unwrap(),
        "PO-PID/25-26/001-02\n"
    );
    assert_eq!(
        run(&["-d", db, "p", "quotation", "--linked-pid", "PID/25-26/002"]).unwrap(),
        "Q-PID/25-26/002\n"
    );
}

#[test]
fn test_preview_rejects_unknown_family() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("powerdesk.db");
    seed_database(&path);

    assert!(run(&["--database", path.to_str().unwrap(), "preview", "invoice"]).is_err());
}

#[test]
fn test_audit_clean_database() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("powerdesk.db");
    seed_database(&path);
    let db = path.to_str().unwrap();

    assert_eq!(
        run(&["--database", db, "audit"]).unwrap(),
        "No identifier problems found\n"
    );
    assert_eq!(
        run(&["--database", db, "audit", "--output", "csv"]).unwrap(),
        "collection,identifier,kind,detail\n"
    );
}

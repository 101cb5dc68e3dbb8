// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::report::{OutputFormat, write_findings};
use powerdesk::{FindingKind, IdentifierFinding};
use powerdesk_domain::Collection;

fn sample_findings() -> Vec<IdentifierFinding> {
    vec![
        IdentifierFinding {
            collection: Collection::Orders,
            identifier: "PID/25-26/abc".to_string(),
            kind: FindingKind::Malformed,
            detail: "does not match any order_no identifier form".to_string(),
        },
        IdentifierFinding {
            collection: Collection::Projects,
            identifier: "PID/25-26/005".to_string(),
            kind: FindingKind::SharedSequence,
            detail: "sequence 5 of 'PID/25-26/' also held by orders:PID/25-26/005".to_string(),
        },
    ]
}

fn render(findings: &[IdentifierFinding], format: OutputFormat) -> String {
    let mut out: Vec<u8> = Vec::new();
    write_findings(findings, format, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_text_report_lists_each_finding_and_summary() {
    let text = render(&sample_findings(), OutputFormat::Text);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "orders\tPID/25-26/abc\tmalformed\tdoes not match any order_no identifier form"
    );
    assert!(lines[1].starts_with("projects\tPID/25-26/005\tshared_sequence\t"));
    assert_eq!(lines[2], "2 finding(s)");
}

#[test]
fn test_text_report_without_findings() {
    let text = render(&[], OutputFormat::Text);
    assert_eq!(text, "No identifier problems found\n");
}

#[test]
fn test_csv_report_has_header_and_quotes_commas() {
    let mut findings = sample_findings();
    findings[1].detail = "also held by orders:PID/25-26/005, projects:PID/25-26/005".to_string();

    let csv = render(&findings, OutputFormat::Csv);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "collection,identifier,kind,detail");
    assert_eq!(
        lines[1],
        "orders,PID/25-26/abc,malformed,does not match any order_no identifier form"
    );
    assert_eq!(
        lines[2],
        "projects,PID/25-26/005,shared_sequence,\"also held by orders:PID/25-26/005, projects:PID/25-26/005\""
    );
}

#[test]
fn test_csv_report_without_findings_is_header_only() {
    let csv = render(&[], OutputFormat::Csv);
    assert_eq!(csv, "collection,identifier,kind,detail\n");
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FiscalYear, parse_calendar_date};
use time::macros::date;

#[test]
fn test_march_belongs_to_previous_fiscal_year() {
    let fy: FiscalYear = FiscalYear::containing(date!(2026 - 03 - 15));
    assert_eq!(fy.label(), "25-26");
}

#[test]
fn test_april_starts_new_fiscal_year() {
    let fy: FiscalYear = FiscalYear::containing(date!(2026 - 04 - 01));
    assert_eq!(fy.label(), "26-27");
}

#[test]
fn test_fiscal_year_boundary_days() {
    assert_eq!(
        FiscalYear::containing(date!(2026 - 03 - 31)).to_string(),
        "25-26"
    );
    assert_eq!(
        FiscalYear::containing(date!(2026 - 04 - 01)).to_string(),
        "26-27"
    );
    assert_eq!(
        FiscalYear::containing(date!(2025 - 12 - 31)).to_string(),
        "25-26"
    );
    assert_eq!(
        FiscalYear::containing(date!(2026 - 01 - 01)).to_string(),
        "25-26"
    );
}

#[test]
fn test_century_rollover_is_zero_padded() {
    assert_eq!(
        FiscalYear::containing(date!(2099 - 06 - 01)).to_string(),
        "99-00"
    );
    assert_eq!(
        FiscalYear::containing(date!(2100 - 02 - 01)).to_string(),
        "99-00"
    );
    assert_eq!(
        FiscalYear::containing(date!(2105 - 05 - 01)).to_string(),
        "05-06"
    );
}

#[test]
fn test_starting_in_label() {
    assert_eq!(FiscalYear::starting_in(2025).label(), "25-26");
    assert_eq!(FiscalYear::starting_in(2099).label(), "99-00");
}

#[test]
fn test_parse_valid_labels() {
    assert_eq!(
        "25-26".parse::<FiscalYear>().unwrap(),
        FiscalYear::starting_in(2025)
    );
    assert_eq!(
        "99-00".parse::<FiscalYear>().unwrap(),
        FiscalYear::starting_in(1999)
    );
    assert_eq!(
        " 07-08 ".parse::<FiscalYear>().unwrap(),
        FiscalYear::starting_in(2007)
    );
}

#[test]
fn test_parse_rejects_malformed_labels() {
    for label in ["", "2025-26", "25-27", "25/26", "2526", "a5-26", "25-", "-26", "5-6"] {
        let result = label.parse::<FiscalYear>();
        assert!(
            matches!(result, Err(DomainError::InvalidFiscalYear(_))),
            "expected '{label}' to be rejected, got {result:?}"
        );
    }
}

#[test]
fn test_fiscal_year_serializes_as_label() {
    let fy: FiscalYear = FiscalYear::starting_in(2025);
    let json: String = serde_json::to_string(&fy).unwrap();
    assert_eq!(json, "\"25-26\"");

    let parsed: FiscalYear = serde_json::from_str("\"24-25\"").unwrap();
    assert_eq!(parsed, FiscalYear::starting_in(2024));

    assert!(serde_json::from_str::<FiscalYear>("\"24-26\"").is_err());
}

#[test]
fn test_parse_calendar_date() {
    assert_eq!(parse_calendar_date(" 2026-03-31 "), Ok(date!(2026 - 03 - 31)));
    assert!(matches!(
        parse_calendar_date("2026-02-30"),
        Err(DomainError::DateParseError { .. })
    ));
    assert!(parse_calendar_date("31/03/2026").is_err());
}

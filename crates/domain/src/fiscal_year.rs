// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! April-to-March fiscal years.
//!
//! A fiscal year is never stored on its own. It is derived from a calendar
//! date and rendered as the pair of two-digit calendar years it spans,
//! e.g. `25-26` for April 2025 through March 2026.
//!
//! ## Invariants
//!
//! - Months April through December belong to the fiscal year starting in
//!   the same calendar year
//! - Months January through March belong to the fiscal year that started
//!   in the previous calendar year
//! - The second component always follows the first modulo 100 (`99-00`)

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Month};

/// The first month of a fiscal year.
const FISCAL_YEAR_START: Month = Month::April;

/// An April-to-March fiscal year labelled `"{y1:02}-{y2:02}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FiscalYear {
    /// Two-digit calendar year in which the fiscal year starts.
    first: u8,
    /// Two-digit calendar year in which the fiscal year ends.
    second: u8,
}

impl FiscalYear {
    /// Resolves the fiscal year containing the given calendar date.
    ///
    /// # Example
    ///
    /// ```text
    /// 2026-03-31 -> 25-26
    /// 2026-04-01 -> 26-27
    /// ```
    #[must_use]
    pub fn containing(date: Date) -> Self {
        let year: i32 = date.year();
        if u8::from(date.month()) >= u8::from(FISCAL_YEAR_START) {
            Self::starting_in(year)
        } else {
            Self::starting_in(year - 1)
        }
    }

    /// Returns the fiscal year that starts in April of `year`.
    #[must_use]
    pub fn starting_in(year: i32) -> Self {
        Self {
            first: two_digits(year),
            second: two_digits(year + 1),
        }
    }

    /// Returns the label, e.g. `"25-26"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

/// Reduces a calendar year to its last two digits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn two_digits(year: i32) -> u8 {
    // rem_euclid keeps the value in 0..100 even for negative years
    year.rem_euclid(100) as u8
}

/// Parses exactly two ASCII digits.
fn parse_two_digits(part: &str) -> Option<u8> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u8>().ok()
}

/// Parses an ISO 8601 calendar date such as `2026-03-31`.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the value is not a valid date.
pub fn parse_calendar_date(value: &str) -> Result<Date, DomainError> {
    let value: &str = value.trim();
    Date::parse(value, &time::format_description::well_known::Iso8601::DEFAULT).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

impl std::fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.first, self.second)
    }
}

impl FromStr for FiscalYear {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidFiscalYear(s.to_string());

        let (first, second) = s.trim().split_once('-').ok_or_else(invalid)?;
        let first: u8 = parse_two_digits(first).ok_or_else(invalid)?;
        let second: u8 = parse_two_digits(second).ok_or_else(invalid)?;

        if (first + 1) % 100 != second {
            return Err(invalid());
        }

        Ok(Self { first, second })
    }
}

impl TryFrom<String> for FiscalYear {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FiscalYear> for String {
    fn from(value: FiscalYear) -> Self {
        value.to_string()
    }
}

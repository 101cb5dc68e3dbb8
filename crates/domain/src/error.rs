// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A fiscal year label is not of the form `NN-NN` with consecutive years.
    InvalidFiscalYear(String),
    /// A linked PID is empty or contains whitespace.
    InvalidLinkedPid(String),
    /// A required record field is empty or invalid.
    InvalidField {
        /// The field that failed validation.
        field: &'static str,
        /// Why the field was rejected.
        reason: String,
    },
    /// The configured business timezone is not a known IANA zone.
    InvalidTimezone(String),
    /// A wall-clock timestamp could not be represented.
    InvalidTimestamp(String),
    /// The identifier family name is not recognised.
    UnknownFamily(String),
    /// The collection name is not recognised.
    UnknownCollection(String),
    /// The next sequence number would not fit in the sequence type.
    SequenceOverflow {
        /// The scan prefix whose sequence is exhausted.
        prefix: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFiscalYear(value) => write!(
                f,
                "Invalid fiscal year '{value}': expected two consecutive two-digit years such as 25-26"
            ),
            Self::InvalidLinkedPid(msg) => write!(f, "Invalid linked PID: {msg}"),
            Self::InvalidField { field, reason } => {
                write!(f, "Invalid value for '{field}': {reason}")
            }
            Self::InvalidTimezone(name) => write!(f, "Unknown timezone '{name}'"),
            Self::InvalidTimestamp(msg) => write!(f, "Invalid timestamp: {msg}"),
            Self::UnknownFamily(name) => write!(
                f,
                "Unknown identifier family '{name}'. Must be one of: pid, quotation, purchase_order, purchase_request"
            ),
            Self::UnknownCollection(name) => write!(
                f,
                "Unknown collection '{name}'. Must be one of: orders, projects, quotations, purchase_orders, purchase_requests"
            ),
            Self::SequenceOverflow { prefix } => {
                write!(f, "Sequence for '{prefix}' cannot be advanced any further")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

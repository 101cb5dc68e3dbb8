// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier families, sequence scopes and identifier formatting.
//!
//! | Family | Format | Scope |
//! |---|---|---|
//! | Project/Order PID | `PID/{fy}/{n:03}` | fiscal year, orders and projects |
//! | Quotation (linked) | `Q-{linked_pid}` | derived from the parent |
//! | Quotation (standalone) | `Q-{fy}-{n:04}` | fiscal year |
//! | Purchase order | `PO-{linked_pid}-{n:02}` | parent PID |
//! | Purchase order (unlinked) | `PO-{fy}-{n:04}` | fiscal year |
//! | Purchase request | `PR-{linked_pid}-{n:02}` | parent PID |
//! | Purchase request (unlinked) | `PR-{fy}-{hhmmss}` | time of day |
//!
//! Sequential forms are described by [`SequenceScope`]. The two derived
//! forms have their own constructors and are never scanned.

use crate::error::DomainError;
use crate::fiscal_year::FiscalYear;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Time;

/// A collection of business records carrying an identifier field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Customer orders, identified by `order_no`.
    Orders,
    /// Projects, identified by `pid_no`.
    Projects,
    /// Quotations, identified by `quotation_no`.
    Quotations,
    /// Purchase orders, identified by `po_number`.
    PurchaseOrders,
    /// Purchase requests, identified by `pr_number`.
    PurchaseRequests,
}

impl Collection {
    /// Every collection, in a stable order.
    pub const ALL: [Self; 5] = [
        Self::Orders,
        Self::Projects,
        Self::Quotations,
        Self::PurchaseOrders,
        Self::PurchaseRequests,
    ];

    /// Returns the collection name used in URLs and reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Projects => "projects",
            Self::Quotations => "quotations",
            Self::PurchaseOrders => "purchase_orders",
            Self::PurchaseRequests => "purchase_requests",
        }
    }

    /// Returns the name of the field holding the record's identifier.
    #[must_use]
    pub const fn identifier_field(&self) -> &'static str {
        match self {
            Self::Orders => "order_no",
            Self::Projects => "pid_no",
            Self::Quotations => "quotation_no",
            Self::PurchaseOrders => "po_number",
            Self::PurchaseRequests => "pr_number",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Collection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|collection| collection.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownCollection(s.to_string()))
    }
}

/// The identifier families a caller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierFamily {
    /// Project/order identifiers (`PID/...`).
    Pid,
    /// Quotation numbers (`Q-...`).
    Quotation,
    /// Purchase order numbers (`PO-...`).
    PurchaseOrder,
    /// Purchase request numbers (`PR-...`).
    PurchaseRequest,
}

impl IdentifierFamily {
    /// Returns the family name used in query strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pid => "pid",
            Self::Quotation => "quotation",
            Self::PurchaseOrder => "purchase_order",
            Self::PurchaseRequest => "purchase_request",
        }
    }
}

impl std::fmt::Display for IdentifierFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IdentifierFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pid" => Ok(Self::Pid),
            "quotation" => Ok(Self::Quotation),
            "purchase_order" | "po" => Ok(Self::PurchaseOrder),
            "purchase_request" | "pr" => Ok(Self::PurchaseRequest),
            _ => Err(DomainError::UnknownFamily(s.to_string())),
        }
    }
}

/// A parent PID that scopes child identifiers.
///
/// The value is trimmed and must be non-empty with no interior whitespace.
/// It is not required to exist as a stored PID. A value that begins with a
/// fiscal year label (`25-26`, `25-26-0001`) is rejected: chained numbers
/// under it would share a prefix with the unlinked fiscal-year forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LinkedPid(String);

impl LinkedPid {
    /// Creates a validated linked PID.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty, contains whitespace or begins
    /// with a fiscal year label.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidLinkedPid(String::from(
                "Linked PID cannot be empty",
            )));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidLinkedPid(format!(
                "'{trimmed}' must not contain whitespace"
            )));
        }
        if starts_with_fiscal_year(trimmed) {
            return Err(DomainError::InvalidLinkedPid(format!(
                "'{trimmed}' begins with a fiscal year label"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the PID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether the first two dash-separated segments form a fiscal year.
fn starts_with_fiscal_year(value: &str) -> bool {
    let mut segments = value.splitn(3, '-');
    match (segments.next(), segments.next()) {
        (Some(first), Some(second)) => format!("{first}-{second}").parse::<FiscalYear>().is_ok(),
        _ => false,
    }
}

impl std::fmt::Display for LinkedPid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LinkedPid {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<LinkedPid> for String {
    fn from(value: LinkedPid) -> Self {
        value.0
    }
}

/// A scope within which sequence numbers are counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SequenceScope {
    /// `PID/{fy}/{n:03}`, counted across orders and projects.
    Pid(FiscalYear),
    /// `Q-{fy}-{n:04}`, standalone quotations.
    Quotation(FiscalYear),
    /// `PO-{linked_pid}-{n:02}`.
    PurchaseOrder(LinkedPid),
    /// `PO-{fy}-{n:04}`, purchase orders without a parent PID.
    UnlinkedPurchaseOrder(FiscalYear),
    /// `PR-{linked_pid}-{n:02}`.
    PurchaseRequest(LinkedPid),
}

impl SequenceScope {
    /// Returns the collections scanned for existing identifiers.
    #[must_use]
    pub const fn collections(&self) -> &'static [Collection] {
        match self {
            Self::Pid(_) => &[Collection::Orders, Collection::Projects],
            Self::Quotation(_) => &[Collection::Quotations],
            Self::PurchaseOrder(_) | Self::UnlinkedPurchaseOrder(_) => {
                &[Collection::PurchaseOrders]
            }
            Self::PurchaseRequest(_) => &[Collection::PurchaseRequests],
        }
    }

    /// Returns the literal prefix every identifier in this scope starts with.
    #[must_use]
    pub fn prefix(&self) -> String {
        match self {
            Self::Pid(fy) => format!("PID/{fy}/"),
            Self::Quotation(fy) => format!("Q-{fy}-"),
            Self::PurchaseOrder(pid) => format!("PO-{pid}-"),
            Self::UnlinkedPurchaseOrder(fy) => format!("PO-{fy}-"),
            Self::PurchaseRequest(pid) => format!("PR-{pid}-"),
        }
    }

    /// Returns the zero-padded width of the sequence segment.
    #[must_use]
    pub const fn width(&self) -> usize {
        match self {
            Self::Pid(_) => 3,
            Self::Quotation(_) | Self::UnlinkedPurchaseOrder(_) => 4,
            Self::PurchaseOrder(_) | Self::PurchaseRequest(_) => 2,
        }
    }

    /// Extracts the sequence number from an existing identifier.
    ///
    /// PIDs use the third `/`-delimited segment; every other family uses the
    /// last `-`-delimited segment. Returns `None` when the identifier is not
    /// in this scope or its segment is not an integer.
    #[must_use]
    pub fn parse_sequence(&self, identifier: &str) -> Option<u32> {
        if !identifier.starts_with(&self.prefix()) {
            return None;
        }

        let segment: &str = match self {
            Self::Pid(_) => identifier.split('/').nth(2)?,
            _ => identifier.rsplit('-').next()?,
        };

        segment.parse::<u32>().ok()
    }

    /// Renders the identifier for the given sequence number.
    #[must_use]
    pub fn format(&self, sequence: u32) -> String {
        format!(
            "{}{:0width$}",
            self.prefix(),
            sequence,
            width = self.width()
        )
    }
}

impl std::fmt::Display for SequenceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Returns the quotation number derived from a parent PID.
///
/// Deriving twice for the same PID yields the same string, so this form
/// does not identify a single quotation.
#[must_use]
pub fn linked_quotation_number(linked_pid: &LinkedPid) -> String {
    format!("Q-{linked_pid}")
}

/// Returns the time-of-day purchase request number used without a parent PID.
#[must_use]
pub fn unlinked_purchase_request_number(fiscal_year: FiscalYear, time_of_day: Time) -> String {
    format!(
        "PR-{fiscal_year}-{:02}{:02}{:02}",
        time_of_day.hour(),
        time_of_day.minute(),
        time_of_day.second()
    )
}

/// How a stored identifier relates to the known identifier forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierShape {
    /// A sequential identifier: its scan prefix and sequence number.
    Sequential {
        /// The prefix shared by the identifier's scope.
        prefix: String,
        /// The parsed sequence number.
        sequence: u32,
    },
    /// A derived, non-sequential identifier such as `Q-{linked_pid}`.
    Derived,
    /// Matches no known form for its collection.
    Malformed,
}

/// Classifies a stored identifier against the forms of its collection.
#[must_use]
pub fn classify_identifier(collection: Collection, identifier: &str) -> IdentifierShape {
    match collection {
        Collection::Orders | Collection::Projects => classify_pid(identifier),
        Collection::Quotations => match identifier.strip_prefix("Q-") {
            None | Some("") => IdentifierShape::Malformed,
            Some(rest) => match split_trailing_sequence(rest) {
                Some((scope, sequence)) if scope.parse::<FiscalYear>().is_ok() => {
                    IdentifierShape::Sequential {
                        prefix: format!("Q-{scope}-"),
                        sequence,
                    }
                }
                _ => IdentifierShape::Derived,
            },
        },
        Collection::PurchaseOrders => classify_chained("PO-", identifier),
        Collection::PurchaseRequests => classify_chained("PR-", identifier),
    }
}

fn classify_pid(identifier: &str) -> IdentifierShape {
    let parts: Vec<&str> = identifier.split('/').collect();
    match parts.as_slice() {
        ["PID", fy, sequence] => match (fy.parse::<FiscalYear>(), sequence.parse::<u32>()) {
            (Ok(fy), Ok(sequence)) => IdentifierShape::Sequential {
                prefix: format!("PID/{fy}/"),
                sequence,
            },
            _ => IdentifierShape::Malformed,
        },
        _ => IdentifierShape::Malformed,
    }
}

fn classify_chained(family_prefix: &str, identifier: &str) -> IdentifierShape {
    identifier
        .strip_prefix(family_prefix)
        .and_then(split_trailing_sequence)
        .map_or(IdentifierShape::Malformed, |(scope, sequence)| {
            IdentifierShape::Sequential {
                prefix: format!("{family_prefix}{scope}-"),
                sequence,
            }
        })
}

/// Splits `"{scope}-{digits}"` into its scope and sequence number.
fn split_trailing_sequence(value: &str) -> Option<(&str, u32)> {
    let (scope, tail) = value.rsplit_once('-')?;
    if scope.is_empty() {
        return None;
    }
    tail.parse::<u32>().ok().map(|sequence| (scope, sequence))
}

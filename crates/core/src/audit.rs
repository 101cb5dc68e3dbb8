// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Consistency audit over stored identifiers.
//!
//! Allocation tolerates dirty data by skipping it. This audit makes that
//! data visible: identifiers matching no known form, identifiers stored
//! twice, and sequence numbers claimed by more than one identifier within a
//! scope (for PIDs, across orders and projects).

use powerdesk_domain::{Collection, IdentifierShape, classify_identifier};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// The kind of problem found with a stored identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// The identifier matches no known form for its collection.
    Malformed,
    /// The same identifier is stored more than once in its collection.
    Duplicate,
    /// Another identifier in the same scope carries the same sequence number.
    SharedSequence,
}

impl FindingKind {
    /// Returns the name used in reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::Duplicate => "duplicate",
            Self::SharedSequence => "shared_sequence",
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One problem found with one stored identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct IdentifierFinding {
    /// The collection holding the identifier.
    pub collection: Collection,
    /// The identifier as stored.
    pub identifier: String,
    /// What is wrong with it.
    pub kind: FindingKind,
    /// Human-readable detail.
    pub detail: String,
}

/// Audits stored identifiers, given as `(collection, identifier)` pairs.
///
/// Derived quotation numbers (`Q-{linked_pid}`) are intentionally shared and
/// are never reported as duplicates. Findings are returned sorted.
#[must_use]
pub fn audit_identifiers(records: &[(Collection, String)]) -> Vec<IdentifierFinding> {
    let mut findings: Vec<IdentifierFinding> = Vec::new();
    let mut occurrences: BTreeMap<(Collection, &str), usize> = BTreeMap::new();
    let mut by_sequence: BTreeMap<(String, u32), BTreeSet<(Collection, &str)>> = BTreeMap::new();

    for (collection, identifier) in records {
        match classify_identifier(*collection, identifier) {
            IdentifierShape::Malformed => findings.push(IdentifierFinding {
                collection: *collection,
                identifier: identifier.clone(),
                kind: FindingKind::Malformed,
                detail: format!(
                    "does not match any {} identifier form",
                    collection.identifier_field()
                ),
            }),
            IdentifierShape::Derived => {}
            IdentifierShape::Sequential { prefix, sequence } => {
                *occurrences
                    .entry((*collection, identifier.as_str()))
                    .or_default() += 1;
                by_sequence
                    .entry((prefix, sequence))
                    .or_default()
                    .insert((*collection, identifier.as_str()));
            }
        }
    }

    for ((collection, identifier), count) in &occurrences {
        if *count > 1 {
            findings.push(IdentifierFinding {
                collection: *collection,
                identifier: (*identifier).to_string(),
                kind: FindingKind::Duplicate,
                detail: format!("stored {count} times"),
            });
        }
    }

    for ((prefix, sequence), holders) in &by_sequence {
        if holders.len() < 2 {
            continue;
        }
        for (collection, identifier) in holders {
            let others: Vec<String> = holders
                .iter()
                .filter(|(c, i)| (c, i) != (collection, identifier))
                .map(|(c, i)| format!("{c}:{i}"))
                .collect();
            findings.push(IdentifierFinding {
                collection: *collection,
                identifier: (*identifier).to_string(),
                kind: FindingKind::SharedSequence,
                detail: format!(
                    "sequence {sequence} of '{prefix}' also held by {}",
                    others.join(", ")
                ),
            });
        }
    }

    findings.sort();
    findings
}

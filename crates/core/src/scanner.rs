// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sequence scanning.
//!
//! The next number in a scope is `max(existing) + 1`, or `1` when the scope
//! is empty. Gaps left by deleted records are never filled.
//!
//! ## Invariants
//!
//! - Every collection listed by the scope is scanned in full
//! - Identifiers whose sequence segment is not an integer are skipped,
//!   logged and reported, never treated as an error
//! - Query failures are returned unchanged

use crate::error::AllocationError;
use crate::source::IdentifierSource;
use powerdesk_domain::{DomainError, SequenceScope};
use tracing::{debug, warn};

/// The outcome of scanning one sequence scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceScan {
    /// The scope that was scanned.
    pub scope: SequenceScope,
    /// The sequence number to hand out next.
    pub next: u32,
    /// The highest sequence number found, if any.
    pub highest: Option<u32>,
    /// How many identifiers contributed a sequence number.
    pub observed: usize,
    /// Identifiers in scope whose sequence segment could not be parsed.
    pub skipped: Vec<String>,
}

impl SequenceScan {
    /// Renders the identifier for `next`.
    #[must_use]
    pub fn identifier(&self) -> String {
        self.scope.format(self.next)
    }
}

/// Scans every collection of `scope` and computes the next sequence number.
///
/// # Errors
///
/// Returns `AllocationError::Source` if a query fails and
/// `AllocationError::Domain` if the sequence cannot be advanced.
pub fn scan_sequence<S: IdentifierSource>(
    source: &mut S,
    scope: &SequenceScope,
) -> Result<SequenceScan, AllocationError<S::Error>> {
    let prefix: String = scope.prefix();
    let mut highest: Option<u32> = None;
    let mut observed: usize = 0;
    let mut skipped: Vec<String> = Vec::new();

    for &collection in scope.collections() {
        let identifiers: Vec<String> = source
            .identifiers_with_prefix(collection, &prefix)
            .map_err(AllocationError::Source)?;

        debug!(
            collection = %collection,
            prefix = %prefix,
            count = identifiers.len(),
            "Scanned identifiers"
        );

        for identifier in identifiers {
            // Sources may match case-insensitively; only exact prefixes are in scope.
            if !identifier.starts_with(&prefix) {
                continue;
            }

            if let Some(sequence) = scope.parse_sequence(&identifier) {
                observed += 1;
                highest = Some(highest.map_or(sequence, |h| h.max(sequence)));
            } else {
                warn!(
                    collection = %collection,
                    identifier = %identifier,
                    "Skipping identifier with unparseable sequence"
                );
                skipped.push(identifier);
            }
        }
    }

    let next: u32 = match highest {
        None => 1,
        Some(h) => h
            .checked_add(1)
            .ok_or_else(|| DomainError::SequenceOverflow {
                prefix: prefix.clone(),
            })?,
    };

    debug!(
        prefix = %prefix,
        next,
        observed,
        skipped = skipped.len(),
        "Computed next sequence"
    );

    Ok(SequenceScan {
        scope: scope.clone(),
        next,
        highest,
        observed,
        skipped,
    })
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{IdentifierSource, IssueContext};
use powerdesk_domain::{Collection, FiscalYear, LinkedPid};
use std::collections::BTreeMap;
use time::macros::datetime;

/// Error returned by an unavailable in-memory source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnavailable;

impl std::fmt::Display for SourceUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "source unavailable")
    }
}

impl std::error::Error for SourceUnavailable {}

/// An identifier source backed by in-memory collections.
#[derive(Debug, Default)]
pub struct MemorySource {
    collections: BTreeMap<Collection, Vec<String>>,
    unavailable: bool,
    pub queries: Vec<(Collection, String)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, collection: Collection, identifiers: &[&str]) -> Self {
        for identifier in identifiers {
            self.insert(collection, identifier);
        }
        self
    }

    pub fn insert(&mut self, collection: Collection, identifier: &str) {
        self.collections
            .entry(collection)
            .or_default()
            .push(identifier.to_string());
    }

    pub fn remove(&mut self, collection: Collection, identifier: &str) {
        if let Some(identifiers) = self.collections.get_mut(&collection) {
            identifiers.retain(|i| i != identifier);
        }
    }
}

impl IdentifierSource for MemorySource {
    type Error = SourceUnavailable;

    fn identifiers_with_prefix(
        &mut self,
        collection: Collection,
        prefix: &str,
    ) -> Result<Vec<String>, Self::Error> {
        self.queries.push((collection, prefix.to_string()));
        if self.unavailable {
            return Err(SourceUnavailable);
        }
        Ok(self
            .collections
            .get(&collection)
            .map(|identifiers| {
                identifiers
                    .iter()
                    .filter(|i| i.starts_with(prefix))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

pub fn fy_25_26() -> FiscalYear {
    FiscalYear::starting_in(2025)
}

/// Mid-fiscal-year context in 25-26.
pub fn context_25_26() -> IssueContext {
    IssueContext::at(datetime!(2025-11-20 14:30:15))
}

pub fn linked(value: &str) -> LinkedPid {
    LinkedPid::new(value).unwrap()
}

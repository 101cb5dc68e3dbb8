// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier scans.
//!
//! `LIKE` in `SQLite` is case-insensitive for ASCII, so a prefix scan may
//! return identifiers that differ from the prefix in case. The allocator
//! filters those out by exact prefix.
//!
//! Prefix scans also return the retired identifiers of deleted records, so
//! the highest number ever issued stays visible after its record is gone.

use diesel::SqliteConnection;
use diesel::prelude::*;
use powerdesk_domain::Collection;
use tracing::debug;

use crate::diesel_schema::{
    orders, projects, purchase_orders, purchase_requests, quotations, retired_identifiers,
};
use crate::error::PersistenceError;

const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching every value that starts with `prefix`.
pub(crate) fn like_prefix_pattern(prefix: &str) -> String {
    let mut pattern: String = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Returns every identifier in `collection` starting with `prefix`,
/// including identifiers retired from that collection.
///
/// The result is never capped.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn identifiers_with_prefix(
    conn: &mut SqliteConnection,
    collection: Collection,
    prefix: &str,
) -> Result<Vec<String>, PersistenceError> {
    let pattern: String = like_prefix_pattern(prefix);

    let mut identifiers: Vec<String> = match collection {
        Collection::Orders => orders::table
            .select(orders::order_no)
            .filter(orders::order_no.like(&pattern).escape(LIKE_ESCAPE))
            .load(conn)?,
        Collection::Projects => projects::table
            .select(projects::pid_no)
            .filter(projects::pid_no.like(&pattern).escape(LIKE_ESCAPE))
            .load(conn)?,
        Collection::Quotations => quotations::table
            .select(quotations::quotation_no)
            .filter(quotations::quotation_no.like(&pattern).escape(LIKE_ESCAPE))
            .load(conn)?,
        Collection::PurchaseOrders => purchase_orders::table
            .select(purchase_orders::po_number)
            .filter(purchase_orders::po_number.like(&pattern).escape(LIKE_ESCAPE))
            .load(conn)?,
        Collection::PurchaseRequests => purchase_requests::table
            .select(purchase_requests::pr_number)
            .filter(purchase_requests::pr_number.like(&pattern).escape(LIKE_ESCAPE))
            .load(conn)?,
    };

    let retired: Vec<String> = retired_identifiers::table
        .select(retired_identifiers::identifier)
        .filter(retired_identifiers::collection.eq(collection.as_str()))
        .filter(
            retired_identifiers::identifier
                .like(&pattern)
                .escape(LIKE_ESCAPE),
        )
        .load(conn)?;

    debug!(
        collection = %collection,
        prefix,
        live = identifiers.len(),
        retired = retired.len(),
        "Loaded identifiers by prefix"
    );

    identifiers.extend(retired);

    Ok(identifiers)
}

/// Returns every identifier held by a live record as
/// `(collection, identifier)` pairs, collection by collection in insertion
/// order. Retired identifiers are not included.
///
/// # Errors
///
/// Returns an error if any database query fails.
pub fn list_identifiers(
    conn: &mut SqliteConnection,
) -> Result<Vec<(Collection, String)>, PersistenceError> {
    let mut all: Vec<(Collection, String)> = Vec::new();

    for collection in Collection::ALL {
        let identifiers: Vec<String> = match collection {
            Collection::Orders => orders::table
                .select(orders::order_no)
                .order(orders::order_id.asc())
                .load(conn)?,
            Collection::Projects => projects::table
                .select(projects::pid_no)
                .order(projects::project_id.asc())
                .load(conn)?,
            Collection::Quotations => quotations::table
                .select(quotations::quotation_no)
                .order(quotations::quotation_id.asc())
                .load(conn)?,
            Collection::PurchaseOrders => purchase_orders::table
                .select(purchase_orders::po_number)
                .order(purchase_orders::purchase_order_id.asc())
                .load(conn)?,
            Collection::PurchaseRequests => purchase_requests::table
                .select(purchase_requests::pr_number)
                .order(purchase_requests::purchase_request_id.asc())
                .load(conn)?,
        };
        all.extend(identifiers.into_iter().map(|identifier| (collection, identifier)));
    }

    Ok(all)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use powerdesk::IdentifierSource;
use powerdesk_domain::Collection;

use crate::Persistence;
use crate::error::PersistenceError;
use crate::queries;

/// Scans identifiers through a borrowed connection, e.g. inside a
/// transaction.
pub struct ConnectionSource<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> ConnectionSource<'a> {
    pub const fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }
}

impl IdentifierSource for ConnectionSource<'_> {
    type Error = PersistenceError;

    fn identifiers_with_prefix(
        &mut self,
        collection: Collection,
        prefix: &str,
    ) -> Result<Vec<String>, Self::Error> {
        queries::identifiers_with_prefix(self.conn, collection, prefix)
    }
}

impl IdentifierSource for Persistence {
    type Error = PersistenceError;

    fn identifiers_with_prefix(
        &mut self,
        collection: Collection,
        prefix: &str,
    ) -> Result<Vec<String>, Self::Error> {
        queries::identifiers_with_prefix(&mut self.conn, collection, prefix)
    }
}

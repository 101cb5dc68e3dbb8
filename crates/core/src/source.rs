// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use powerdesk_domain::Collection;

/// Read-only access to the identifiers already stored in each collection.
///
/// The allocator never holds a connection of its own; callers pass in the
/// handle they want scanned.
pub trait IdentifierSource {
    /// The error produced when the underlying query fails.
    type Error;

    /// Returns every identifier in `collection` that starts with `prefix`.
    ///
    /// Implementations must return all matches. A capped or paginated result
    /// would let the allocator hand out a number that is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be queried.
    fn identifiers_with_prefix(
        &mut self,
        collection: Collection,
        prefix: &str,
    ) -> Result<Vec<String>, Self::Error>;
}

impl<S: IdentifierSource + ?Sized> IdentifierSource for &mut S {
    type Error = S::Error;

    fn identifiers_with_prefix(
        &mut self,
        collection: Collection,
        prefix: &str,
    ) -> Result<Vec<String>, Self::Error> {
        (**self).identifiers_with_prefix(collection, prefix)
    }
}

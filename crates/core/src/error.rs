// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use powerdesk_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while allocating an identifier.
///
/// Query failures from the identifier source are passed through unchanged
/// in `Source`; the allocator adds no retry or fallback.
#[derive(Debug, Error)]
pub enum AllocationError<E> {
    /// The underlying identifier query failed.
    #[error("Identifier query failed: {0}")]
    Source(#[source] E),

    /// A domain rule prevented allocation.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

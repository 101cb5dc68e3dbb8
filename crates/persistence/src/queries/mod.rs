// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.

pub mod identifiers;
pub mod records;

pub use identifiers::{identifiers_with_prefix, list_identifiers};
pub use records::{get_record, list_records};

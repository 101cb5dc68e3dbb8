// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record mutations.

pub mod records;

pub use records::{
    delete_record, insert_order, insert_project, insert_purchase_order, insert_purchase_request,
    insert_quotation, retire_identifier,
};

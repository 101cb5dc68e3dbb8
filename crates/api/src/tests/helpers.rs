// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use powerdesk_domain::BusinessClock;
use powerdesk_persistence::Persistence;
use time::macros::datetime;

use crate::{CreateProjectRequest, CreatePurchaseOrderRequest};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

/// A clock stopped at 2025-11-20 14:30:15, inside fiscal year 25-26.
pub const fn create_test_clock() -> BusinessClock {
    BusinessClock::fixed(datetime!(2025-11-20 14:30:15))
}

pub fn project_request() -> CreateProjectRequest {
    CreateProjectRequest {
        name: String::from("Plant upgrade"),
        client_name: String::from("Acme Industries"),
        fy: None,
    }
}

pub fn purchase_order_request(linked_pid: Option<&str>) -> CreatePurchaseOrderRequest {
    CreatePurchaseOrderRequest {
        vendor_name: String::from("Volt Supplies"),
        description: String::from("Breakers"),
        linked_pid: linked_pid.map(String::from),
        fy: None,
    }
}

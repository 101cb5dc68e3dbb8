// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{context_25_26, create_test_persistence, project_draft};
use crate::backend::sqlite::{BUSY_TIMEOUT_MS, busy_timeout};
use crate::{Persistence, PersistenceError};
use powerdesk_domain::Collection;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_migrations_create_every_collection() {
    let mut persistence = create_test_persistence();

    for collection in Collection::ALL {
        let records = persistence.list_records(collection);
        assert!(
            records.is_ok_and(|r| r.is_empty()),
            "{collection} should exist and start empty"
        );
    }
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = create_test_persistence();
    let mut db2 = create_test_persistence();

    db1.create_project(&project_draft(), &context_25_26())
        .unwrap();

    assert_eq!(db1.list_records(Collection::Projects).unwrap().len(), 1);
    assert!(db2.list_records(Collection::Projects).unwrap().is_empty());
}

#[test]
fn test_file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("powerdesk.db");

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        persistence
            .create_project(&project_draft(), &context_25_26())
            .unwrap();
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    let next = reopened.preview_pid(&context_25_26()).unwrap();

    assert_eq!(next.next_pid, "PID/25-26/002");
    assert_eq!(
        busy_timeout(&mut reopened.conn).unwrap(),
        i32::try_from(BUSY_TIMEOUT_MS).unwrap()
    );
}

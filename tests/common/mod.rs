#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use once_cell::sync::Lazy;
use split_ledger::{core::SplitApp, domain::User};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A fresh directory to use as `SPLIT_LEDGER_HOME`.
pub fn isolated_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// An app with one user per id and a group `name` containing all of them.
pub fn app_with_group(name: &str, ids: &[&str]) -> SplitApp {
    let mut app = SplitApp::new();
    for id in ids {
        app.create_user(User::new(*id, id.to_uppercase()))
            .expect("create user");
    }
    let members: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    app.create_group(name, &members).expect("create group");
    app
}

//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the two
//! server-backed snapshots (todo list, selected todo) plus the notice
//! stack. Snapshots are replaced wholesale on every successful fetch,
//! never field-patched.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_api_client::Todo;

use crate::notify::Notice;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last-fetched todo list, server order preserved
    pub todos: Vec<Todo>,
    /// Last-fetched selected todo with its tasks, None when nothing selected
    pub selected: Option<Todo>,
    /// True while a list fetch is in flight
    pub list_loading: bool,
    /// Active user notifications
    pub notices: Vec<Notice>,
    /// Monotonic id source for notices
    pub next_notice_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

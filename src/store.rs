//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Every task mutation is written through to local storage.

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::storage::{self, KeyValueStore};
use crate::tasks::{TaskFilter, TaskList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, newest first
    pub tasks: TaskList,
    /// Current task list filter
    pub task_filter: TaskFilter,
    /// Local storage key the tasks are persisted under
    pub tasks_storage_key: String,
}

impl AppState {
    /// Hydrate tasks from `kv`, starting empty if nothing usable is stored
    pub fn hydrate<S: KeyValueStore + ?Sized>(kv: &S, tasks_storage_key: &str) -> Self {
        let tasks: TaskList = storage::load_or_default(kv, tasks_storage_key);
        log::info!("[TASKS] Loaded {} tasks", tasks.len());
        Self {
            tasks,
            task_filter: TaskFilter::All,
            tasks_storage_key: tasks_storage_key.to_string(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a task and persist; blank text changes nothing
pub fn store_add_task<S: KeyValueStore + ?Sized>(store: &AppStore, kv: &S, text: &str) -> bool {
    let added = store.tasks().write().add(text, Utc::now()).is_some();
    if added {
        persist_tasks(store, kv);
    }
    added
}

/// Toggle a task by ID and persist
pub fn store_toggle_task<S: KeyValueStore + ?Sized>(store: &AppStore, kv: &S, task_id: &str) {
    if store.tasks().write().toggle(task_id) {
        persist_tasks(store, kv);
    }
}

/// Remove a task by ID and persist
pub fn store_delete_task<S: KeyValueStore + ?Sized>(store: &AppStore, kv: &S, task_id: &str) {
    if store.tasks().write().delete(task_id) {
        persist_tasks(store, kv);
    }
}

/// Write the whole task list under the configured key
fn persist_tasks<S: KeyValueStore + ?Sized>(store: &AppStore, kv: &S) {
    let key = store.tasks_storage_key().get_untracked();
    let tasks = store.tasks().read_untracked();
    match storage::save(kv, &key, &*tasks) {
        Ok(()) => log::debug!("[TASKS] Saved {} tasks", tasks.len()),
        Err(e) => log::error!("[TASKS] Failed to save tasks: {}", e),
    }
}

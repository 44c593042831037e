//! Task Row Component
//!
//! One task with its toggle checkbox and delete button.

use leptos::prelude::*;

use crate::models::Task;
use crate::storage::BrowserStorage;
use crate::store::{store_delete_task, store_toggle_task, use_app_store};

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();

    let row_class = if task.completed { "task-row completed" } else { "task-row" };
    let check_class = if task.completed { "task-check checked" } else { "task-check" };
    let check_label = if task.completed { "Mark as active" } else { "Mark as completed" };

    view! {
        <div class=row_class>
            <button
                type="button"
                class=check_class
                aria-label=check_label
                on:click=move |_| store_toggle_task(&store, &BrowserStorage, &toggle_id)
            >
                {task.completed.then_some("✓")}
            </button>
            <span class="task-text">{task.text}</span>
            <button
                type="button"
                class="task-delete"
                aria-label="Delete task"
                on:click=move |_| store_delete_task(&store, &BrowserStorage, &delete_id)
            >
                "🗑"
            </button>
        </div>
    }
}

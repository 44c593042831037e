//! Task Manager Component
//!
//! Input form, filter bar, stats line and the filtered task list.

use leptos::prelude::*;

use crate::components::{Card, TaskFilterBar, TaskRow};
use crate::storage::BrowserStorage;
use crate::store::{store_add_task, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskManager() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let visible_tasks = Memo::new(move |_| {
        let filter = store.task_filter().get();
        store.tasks().read().filtered(filter)
    });
    let stats = Memo::new(move |_| store.tasks().read().stats());

    // Submit button and Enter both land here
    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if store_add_task(&store, &BrowserStorage, &text) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <section id="tasks" class="section tasks-section">
            <div class="section-inner narrow">
                <div class="section-header">
                    <h2>"Task Manager"</h2>
                    <p>"Manage your tasks with full CRUD operations and local storage persistence"</p>
                </div>

                <Card>
                    <form class="task-form" on:submit=add_task>
                        <input
                            type="text"
                            class="task-input"
                            placeholder="Add a new task..."
                            prop:value=move || new_text.get()
                            on:input=move |ev| set_new_text.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn btn-primary">"+ Add Task"</button>
                    </form>

                    <div class="task-toolbar">
                        <TaskFilterBar />
                        <div class="task-stats">
                            {move || {
                                let s = stats.get();
                                format!("{} total • {} active • {} completed", s.total, s.active, s.completed)
                            }}
                        </div>
                    </div>

                    <Show
                        when=move || !visible_tasks.with(Vec::is_empty)
                        fallback=move || view! {
                            <div class="task-empty">
                                {move || store.task_filter().get().empty_message()}
                            </div>
                        }
                    >
                        <div class="task-list">
                            <For
                                each=move || visible_tasks.get()
                                key=|task| (task.id.clone(), task.completed)
                                children=move |task| view! { <TaskRow task=task /> }
                            />
                        </div>
                    </Show>
                </Card>
            </div>
        </section>
    }
}

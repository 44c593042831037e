//! Task Filter Bar
//!
//! All / Active / Completed toggle buttons.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::tasks::TaskFilter;

#[component]
pub fn TaskFilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {TaskFilter::ALL.iter().map(|&filter| {
                let is_selected = move || store.task_filter().get() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn small active" } else { "filter-btn small" }
                        on:click=move |_| { *store.task_filter().write() = filter; }
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

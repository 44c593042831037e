//! Showcase Frontend App
//!
//! Single page: hero, task manager and article browser stacked in the layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ArticleBrowser, Hero, Layout, TaskManager};
use crate::config::AppConfig;
use crate::storage::BrowserStorage;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Hydrate tasks before anything renders
    let store = Store::new(AppState::hydrate(&BrowserStorage, &config.tasks_storage_key));

    // Provide context to all children
    provide_context(store);
    provide_context(config);

    view! {
        <Layout>
            <Hero />
            <TaskManager />
            <ArticleBrowser />
        </Layout>
    }
}

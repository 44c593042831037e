//! Showcase Frontend Entry Point

mod app;
mod articles;
mod components;
mod config;
mod fetch;
mod models;
mod storage;
mod store;
mod tasks;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!("[APP] Logger not installed: {}", e)));
    }
    log::info!("[APP] Starting with posts={} users={}", config.posts_url, config.users_url);

    mount_to_body(move || view! { <App config=config /> });
}

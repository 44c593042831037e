//! Hero Section
//!
//! Headline, call-to-action buttons and feature highlights.

use leptos::prelude::*;

/// (icon, title, description)
const FEATURES: &[(&str, &str, &str)] = &[
    ("✔", "Task Management", "Create, complete, and organize your tasks with ease"),
    ("⚡", "API Integration", "Seamless data fetching with loading and error states"),
    ("🎨", "Modern Design", "Beautiful, responsive UI with dark/light theme support"),
];

/// Decorative floating shapes: (class, glyph)
const SHAPES: &[(&str, &str)] = &[
    ("shape shape-1", "●"),
    ("shape shape-2", "★"),
    ("shape shape-3", "▲"),
    ("shape shape-4", "●"),
    ("shape shape-5", "★"),
    ("shape shape-6", "▲"),
];

/// Smoothly scroll the element with `id` into view
fn scroll_to(id: &str) {
    let element = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id));
    let Some(element) = element else {
        log::warn!("[HERO] No section #{}", id);
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-shapes" aria-hidden="true">
                {SHAPES.iter().map(|&(class, glyph)| view! {
                    <span class=class>{glyph}</span>
                }).collect_view()}
            </div>

            <div class="hero-inner">
                <div class="hero-glass">
                    <h1 class="hero-title">"Master Leptos Development"</h1>
                    <p class="hero-subtitle">
                        "A Rust single-page application showcasing component architecture, reactive state, "
                        "local persistence and API integration, compiled to WebAssembly."
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary btn-lg" on:click=move |_| scroll_to("tasks")>
                            "Try Task Manager"
                        </button>
                        <button class="btn btn-secondary btn-lg" on:click=move |_| scroll_to("api-demo")>
                            "View API Demo"
                        </button>
                    </div>
                </div>

                <div class="feature-grid">
                    {FEATURES.iter().map(|&(icon, title, description)| view! {
                        <div class="feature-card">
                            <div class="feature-icon">{icon}</div>
                            <h3>{title}</h3>
                            <p>{description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

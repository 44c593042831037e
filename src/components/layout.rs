//! Page Layout
//!
//! Navigation bar, main column and footer.

use leptos::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#tasks", "Tasks"),
    ("#api-demo", "Articles"),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <nav class="navbar">
                <a class="navbar-brand" href="#">"Leptos Showcase"</a>
                <div class="navbar-links">
                    {NAV_LINKS.iter().map(|&(href, label)| view! {
                        <a class="navbar-link" href=href>{label}</a>
                    }).collect_view()}
                </div>
            </nav>
            <main class="main-content">
                {children()}
            </main>
            <footer class="footer">
                <p>"Built with Leptos. Tasks stay in this browser; articles come from JSONPlaceholder."</p>
            </footer>
        </div>
    }
}

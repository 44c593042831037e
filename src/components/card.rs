//! Card Component
//!
//! Bordered container used by the hero, task manager and article gallery.

use leptos::prelude::*;

fn card_class(extra: &str, hover: bool) -> String {
    let mut class = String::from("card");
    if hover {
        class.push_str(" card-hover");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    #[prop(optional)] hover: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_class(&class, hover)>
            {children()}
        </div>
    }
}

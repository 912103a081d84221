//! Small pill label used in the hero.

use leptos::prelude::*;

#[component]
pub fn Chip(children: Children) -> impl IntoView {
    view! { <span class="chip">{children()}</span> }
}

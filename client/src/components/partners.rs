//! Targeted partner names.

use leptos::prelude::*;

#[component]
pub fn PartnerGrid(names: Vec<&'static str>) -> impl IntoView {
    view! {
        <div class="partner-grid">
            {names
                .into_iter()
                .map(|name| view! { <div class="partner"><span>{name}</span></div> })
                .collect_view()}
        </div>
    }
}

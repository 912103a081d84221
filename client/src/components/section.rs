//! Page section wrapper with eyebrow, title and optional kicker.

use leptos::prelude::*;
use widgets::SectionId;
use widgets::content::SectionCopy;

/// Anchored section. `anchor` becomes the element id so in-page links can jump
/// to it.
#[component]
pub fn Section(anchor: SectionId, copy: SectionCopy, children: Children) -> impl IntoView {
    view! {
        <section id=anchor.anchor() class="section">
            <div class="section-inner">
                <div class="section-eyebrow">{copy.eyebrow}</div>
                <h2 class="section-title">{copy.title}</h2>
                {copy.kicker.map(|kicker| view! { <p class="section-kicker">{kicker}</p> })}
                <div class="section-body">{children()}</div>
            </div>
        </section>
    }
}

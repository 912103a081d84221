//! Hero block: chips, headline, calls to action and highlight tiles.

use leptos::prelude::*;
use widgets::SectionId;
use widgets::content::Hero;

use crate::components::chip::Chip;

#[component]
pub fn HeroSection(hero: Hero, deck_href: &'static str) -> impl IntoView {
    let Hero { chips, headline, lede, highlights, illustration_title, illustration_caption } = hero;

    view! {
        <section class="hero">
            <div class="hero-inner">
                <div>
                    <div class="chip-row">
                        {chips.into_iter().map(|chip| view! { <Chip>{chip}</Chip> }).collect_view()}
                    </div>
                    <h1 class="hero-headline">{headline}</h1>
                    <p class="hero-lede">{lede}</p>
                    <div class="hero-actions">
                        <a href=SectionId::Contact.href() class="button button-primary">"Talk to us"</a>
                        <a href=deck_href class="button button-secondary">"View pitch deck"</a>
                    </div>
                    <div class="highlight-row">
                        {highlights
                            .into_iter()
                            .map(|h| {
                                view! {
                                    <div class="highlight">
                                        <div class="highlight-label">{h.label}</div>
                                        <div class="highlight-value">{h.value}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="hero-illustration">
                    <div class="hero-illustration-title">{illustration_title}</div>
                    <div class="hero-illustration-frame"></div>
                    <p class="hero-illustration-caption">{illustration_caption}</p>
                </div>
            </div>
        </section>
    }
}

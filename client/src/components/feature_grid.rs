//! Grid of titled feature cards (problem and solution sections).

use leptos::prelude::*;
use widgets::content::FeatureCard;

#[component]
pub fn FeatureGrid(cards: Vec<FeatureCard>, columns: u8) -> impl IntoView {
    view! {
        <div class=grid_class(columns)>
            {cards
                .into_iter()
                .map(|card| {
                    view! {
                        <div class="card">
                            <div class="card-title">{card.title}</div>
                            <p class="card-body">{card.body}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn grid_class(columns: u8) -> String {
    format!("card-grid card-grid-{columns}")
}

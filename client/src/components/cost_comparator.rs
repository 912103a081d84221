//! Illustrative cost comparator: a visits slider and three derived totals.

use leptos::prelude::*;
use widgets::content::ComparatorCopy;
use widgets::cost::{MAX_VISITS, MIN_VISITS};
use widgets::{CostComparator, CostRates};

#[component]
pub fn CostComparatorPanel(rates: CostRates, copy: ComparatorCopy) -> impl IntoView {
    let comparator = RwSignal::new(CostComparator::new(rates));

    let visits = move || comparator.with(CostComparator::visits_per_month);
    let breakdown = move || comparator.with(CostComparator::derive);

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        comparator.update(|c| {
            // Rejected input keeps the previous value.
            let _ = c.set_visits_from_input(&raw);
        });
    };

    let ComparatorCopy { caption, slider_label, assumptions, notes } = copy;

    view! {
        <div class="card comparator">
            <div class="comparator-caption">{caption}</div>
            <div class="comparator-body">
                <div>
                    <label class="comparator-label" for="visits-per-month">{slider_label}</label>
                    <input
                        id="visits-per-month"
                        type="range"
                        min=MIN_VISITS.to_string()
                        max=MAX_VISITS.to_string()
                        step="1"
                        prop:value=move || visits().to_string()
                        on:input=on_input
                    />
                    <div class="comparator-visits">{move || visits_label(visits())}</div>
                    <div class="cost-tiles">
                        <div class="cost-tile cost-tile-baseline">
                            <div class="cost-tile-label">"Traditional"</div>
                            <div class="cost-tile-value">{move || format_usd(breakdown().baseline_cost)}</div>
                        </div>
                        <div class="cost-tile cost-tile-service">
                            <div class="cost-tile-label">"NaijaCare"</div>
                            <div class="cost-tile-value">{move || format_usd(breakdown().service_cost)}</div>
                        </div>
                        <div class="cost-tile cost-tile-savings">
                            <div class="cost-tile-label">"Savings"</div>
                            <div class="cost-tile-value">{move || format_usd(breakdown().savings)}</div>
                        </div>
                    </div>
                    <p class="comparator-assumptions">{assumptions}</p>
                </div>
                <div class="comparator-notes">
                    {notes
                        .into_iter()
                        .map(|(lead, text)| view! { <p><strong>{lead}</strong>" "{text}</p> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// "1 visit/month", "3 visits/month".
fn visits_label(visits: u8) -> String {
    let noun = if visits == 1 { "visit" } else { "visits" };
    format!("{visits} {noun}/month")
}

fn format_usd(amount: u32) -> String {
    format!("${amount}")
}

#[cfg(test)]
#[path = "cost_comparator_test.rs"]
mod tests;

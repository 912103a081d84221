//! Compact horizontal roadmap.

use leptos::prelude::*;
use widgets::content::RoadmapEntry;

#[component]
pub fn RoadmapTimeline(entries: Vec<RoadmapEntry>) -> impl IntoView {
    view! {
        <div class="roadmap-scroll">
            <ol class="roadmap">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="roadmap-entry">
                                <div class="roadmap-quarter">{entry.quarter}</div>
                                <div class="roadmap-label">{entry.label}</div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

//! Landing page: every section in document order.

use std::sync::Arc;

use leptos::prelude::*;
use widgets::{SectionId, SiteContent};

use crate::components::contact::ContactCards;
use crate::components::cost_comparator::CostComparatorPanel;
use crate::components::feature_grid::FeatureGrid;
use crate::components::hero::HeroSection;
use crate::components::partners::PartnerGrid;
use crate::components::roadmap::RoadmapTimeline;
use crate::components::section::Section;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::ussd_demo::UssdDemo;

/// The single page of the site. Reads [`SiteContent`] from context.
#[component]
pub fn LandingPage() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();

    // Children render inside their own closures, so each piece is pulled out
    // up front and moved into exactly one of them.
    let SiteContent {
        brand,
        nav,
        hero,
        problem,
        problem_cards,
        solution,
        solution_cards,
        demos,
        demo,
        script,
        comparator,
        rates,
        roadmap,
        roadmap_entries,
        partners,
        partner_names,
        contact,
        contact_details,
    } = content.as_ref().clone();
    let deck_href = contact_details.deck_href;

    view! {
        <div class="landing">
            <SiteHeader brand nav/>
            <HeroSection hero deck_href/>

            <Section anchor=SectionId::Problem copy=problem>
                <FeatureGrid cards=problem_cards columns=3/>
            </Section>

            <Section anchor=SectionId::Solution copy=solution>
                <FeatureGrid cards=solution_cards columns=4/>
            </Section>

            <Section anchor=SectionId::Demos copy=demos>
                <div class="demo-stack">
                    <UssdDemo script copy=demo/>
                    <CostComparatorPanel rates copy=comparator/>
                </div>
            </Section>

            <Section anchor=SectionId::Roadmap copy=roadmap>
                <RoadmapTimeline entries=roadmap_entries/>
            </Section>

            <Section anchor=SectionId::Partners copy=partners>
                <PartnerGrid names=partner_names/>
            </Section>

            <Section anchor=SectionId::Contact copy=contact>
                <ContactCards contact=contact_details/>
            </Section>

            <SiteFooter brand/>
        </div>
    }
}

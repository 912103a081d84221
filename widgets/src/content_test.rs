use std::collections::HashSet;

use super::*;

fn content() -> SiteContent {
    SiteContent::naijacare().expect("built-in content is valid")
}

#[test]
fn builtin_script_has_five_steps_ending_with_hotline() {
    let content = content();
    assert_eq!(content.script.len(), 5);
    assert_eq!(content.script.steps()[0].user_prompt, "Dial *123# to begin");
    assert_eq!(
        content.script.steps()[4].system_reply,
        "Thanks! A nurse will call shortly. Save: 0800-NAIJACARE"
    );
}

#[test]
fn builtin_lists_have_expected_sizes() {
    let content = content();
    assert_eq!(content.roadmap_entries.len(), 4);
    assert_eq!(content.partner_names.len(), 8);
    assert_eq!(content.problem_cards.len(), 3);
    assert_eq!(content.solution_cards.len(), 4);
    assert_eq!(content.hero.highlights.len(), 3);
}

#[test]
fn builtin_rates_are_defaults() {
    assert_eq!(content().rates, CostRates { baseline_unit_cost: 8, service_unit_cost: 2 });
}

#[test]
fn section_anchors_are_unique() {
    let anchors: HashSet<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
    assert_eq!(anchors.len(), SectionId::ALL.len());
}

#[test]
fn nav_links_target_distinct_sections() {
    let content = content();
    let targets: HashSet<_> = content.nav.iter().map(|l| l.target).collect();
    assert_eq!(targets.len(), content.nav.len());
}

#[test]
fn section_href_prefixes_anchor() {
    assert_eq!(SectionId::Demos.href(), "#demos");
    assert_eq!(SectionId::Contact.href(), "#contact");
}

#[test]
fn deck_link_points_at_static_deck_path() {
    assert!(content().contact_details.deck_href.starts_with("/deck/"));
}

#[test]
fn copy_matches_published_wording() {
    let content = content();
    assert_eq!(
        content.hero.lede,
        "AI-guided telehealth and trusted education that works on any phone—USSD, SMS, or voice—co-created with \
         community health workers."
    );
    assert_eq!(content.problem.title, "The problem is structural—access, literacy, and cost");
    assert!(content.demo.body.ends_with("short, safe, and clear—no medical claims, just user journey proof."));
    assert_eq!(
        content.contact.kicker,
        Some("Partners, investors, community leaders, clinicians, journalists—your message will reach the core team.")
    );
    assert_eq!(
        content.contact_details.newsletter_note,
        "Add a simple form (Plausible or GA for analytics) in a later pass."
    );
}

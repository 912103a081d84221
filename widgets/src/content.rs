//! Static page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the landing page renders besides widget state lives here as
//! plain data, built once at startup and handed to the renderer. The
//! conversation script goes through [`Script::new`] so a broken script fails
//! the build of [`SiteContent`] rather than surfacing mid-session.

use std::sync::Arc;

use crate::conversation::{ConversationStep, Script};
use crate::cost::CostRates;
use crate::error::WidgetError;

/// Page sections that external navigation can jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Problem,
    Solution,
    Demos,
    Roadmap,
    Partners,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 6] =
        [Self::Problem, Self::Solution, Self::Demos, Self::Roadmap, Self::Partners, Self::Contact];

    /// Stable element id for the section.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Solution => "solution",
            Self::Demos => "demos",
            Self::Roadmap => "roadmap",
            Self::Partners => "partners",
            Self::Contact => "contact",
        }
    }

    /// In-page link to the section.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

/// Heading block shared by every section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionCopy {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub kicker: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub chips: Vec<&'static str>,
    pub headline: &'static str,
    pub lede: &'static str,
    pub highlights: Vec<Highlight>,
    pub illustration_title: &'static str,
    pub illustration_caption: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub body: &'static str,
}

/// Copy surrounding the USSD simulator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoCopy {
    pub simulator_caption: &'static str,
    pub device_banner: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub bullets: Vec<&'static str>,
}

/// Copy surrounding the cost comparator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparatorCopy {
    pub caption: &'static str,
    pub slider_label: &'static str,
    pub assumptions: &'static str,
    pub notes: Vec<(&'static str, &'static str)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapEntry {
    pub quarter: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub email: &'static str,
    pub email_note: &'static str,
    pub deck_href: &'static str,
    pub deck_note: &'static str,
    pub newsletter_href: &'static str,
    pub newsletter_note: &'static str,
    pub disclaimer: &'static str,
}

/// Immutable configuration for one rendering of the landing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub brand: &'static str,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub problem: SectionCopy,
    pub problem_cards: Vec<FeatureCard>,
    pub solution: SectionCopy,
    pub solution_cards: Vec<FeatureCard>,
    pub demos: SectionCopy,
    pub demo: DemoCopy,
    pub script: Arc<Script>,
    pub comparator: ComparatorCopy,
    pub rates: CostRates,
    pub roadmap: SectionCopy,
    pub roadmap_entries: Vec<RoadmapEntry>,
    pub partners: SectionCopy,
    pub partner_names: Vec<&'static str>,
    pub contact: SectionCopy,
    pub contact_details: Contact,
}

impl SiteContent {
    /// Built-in NaijaCare content.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the built-in conversation script
    /// fails validation.
    pub fn naijacare() -> Result<Self, WidgetError> {
        Ok(Self {
            brand: "NaijaCare",
            nav: vec![
                NavLink { label: "Problem", target: SectionId::Problem },
                NavLink { label: "Solution", target: SectionId::Solution },
                NavLink { label: "Demos", target: SectionId::Demos },
                NavLink { label: "Partners", target: SectionId::Partners },
                NavLink { label: "Contact", target: SectionId::Contact },
            ],
            hero: Hero {
                chips: vec!["Low-bandwidth", "Local languages", "Community-rooted"],
                headline: "Democratizing maternal & child health in rural Nigeria",
                lede: "AI-guided telehealth and trusted education that works on any phone—USSD, SMS, or voice—\
                       co-created with community health workers.",
                highlights: vec![
                    Highlight { label: "Works anywhere", value: "2G/USSD/SMS" },
                    Highlight { label: "Affordable", value: "~$2/consult" },
                    Highlight { label: "Local-first", value: "Hausa • Yoruba • Igbo" },
                ],
                illustration_title: "Care on any phone",
                illustration_caption: "Placeholder for an illustration/mockup (phone + tower + family).",
            },
            problem: SectionCopy {
                eyebrow: "The case for NaijaCare",
                title: "The problem is structural—access, literacy, and cost",
                kicker: Some(
                    "Millions face long travel, high out-of-pocket costs, and low digital literacy. \
                     We meet people where they are with channels they already use.",
                ),
            },
            problem_cards: vec![
                FeatureCard { title: "Rural distance", body: "Hours to nearest clinic; transport cost is care delayed." },
                FeatureCard { title: "Low literacy", body: "Voice + local languages reduce friction and increase trust." },
                FeatureCard { title: "High OOP spend", body: "Micro-pricing and institutional plans tame financial shocks." },
            ],
            solution: SectionCopy {
                eyebrow: "What we do",
                title: "A low-bandwidth telehealth layer plus trusted education",
                kicker: Some(
                    "USSD/SMS triage, clinician connection, and culturally grounded content. \
                     Offline-first now; voice IVR later.",
                ),
            },
            solution_cards: vec![
                FeatureCard {
                    title: "USSD/SMS triage",
                    body: "Guided steps help users decide: self-care vs. connect to a nurse.",
                },
                FeatureCard {
                    title: "Clinician linkage",
                    body: "Fast handoff to a licensed clinician when escalation is needed.",
                },
                FeatureCard { title: "Local languages", body: "Hausa/Yoruba/Igbo/English content that respects context." },
                FeatureCard { title: "Offline-first", body: "Works in patchy connectivity; light, resilient UX." },
            ],
            demos: SectionCopy {
                eyebrow: "Show, don’t tell",
                title: "Mini demos",
                kicker: Some("These interactive mocks help partners, clinicians, and communities visualize the experience."),
            },
            demo: DemoCopy {
                simulator_caption: "USSD / SMS Simulator",
                device_banner: "NaijaCare • 2G Ready",
                heading: "Showcase the low-bandwidth experience",
                body: "This guided, non-functional demo mirrors a typical USSD/SMS flow for maternal health triage in \
                       Hausa/Yoruba/Igbo/English. We keep it short, safe, and clear—no medical claims, just user \
                       journey proof.",
                bullets: vec![
                    "2G-friendly and phone-agnostic",
                    "Simple branching (self-care vs. connect to clinician)",
                    "Clear micro-costing (~$2 per consult) and time-to-help expectations",
                ],
            },
            script: Arc::new(Script::new(ussd_script())?),
            comparator: ComparatorCopy {
                caption: "Cost Comparator (illustrative)",
                slider_label: "Number of maternal/child consultations per month",
                assumptions: "Assumes ~$2/NaijaCare consult vs. ~$8 traditional direct cost. \
                              Adjust later with validated figures.",
                notes: vec![
                    (
                        "For NGOs/Clinics:",
                        "Pair pay-per-use with a simple institutional plan (e.g., $50/month) to stabilize \
                         operations while serving low-income users.",
                    ),
                    ("For users:", "Clear, predictable micro-costing reduces delayed care and catastrophic OOP expenses."),
                ],
            },
            rates: CostRates::default(),
            roadmap: SectionCopy {
                eyebrow: "Execution",
                title: "Roadmap & pilots",
                kicker: Some(
                    "Initial focus on Sokoto/Jigawa with CHW partners; expand based on evidence and feedback.",
                ),
            },
            roadmap_entries: vec![
                RoadmapEntry { quarter: "Q4 2025", label: "Partner discovery & pilot scoping (Sokoto/Jigawa)" },
                RoadmapEntry { quarter: "Q1 2026", label: "USSD short code + language packs (Hausa v1)" },
                RoadmapEntry { quarter: "Q2 2026", label: "Pilot launch w/ CHWs + monitoring" },
                RoadmapEntry { quarter: "H2 2026", label: "Scale to 3+ states; add voice IVR" },
            ],
            partners: SectionCopy {
                eyebrow: "Allies we’re targeting",
                title: "Partners & advisors (in discussion / targeted)",
                kicker: None,
            },
            partner_names: vec!["MTN", "Airtel", "UNICEF", "WHO", "NMA", "State MoH", "WCHRI", "Africa Centre"],
            contact: SectionCopy {
                eyebrow: "Let’s collaborate",
                title: "One inbox for any and all inquiries",
                kicker: Some(
                    "Partners, investors, community leaders, clinicians, journalists—\
                     your message will reach the core team.",
                ),
            },
            contact_details: Contact {
                email: "babello@ualberta.ca",
                email_note: "Use this for everything: partnerships, media, pilots, careers.",
                deck_href: "/deck/naijacare_pitch_deck.pdf",
                deck_note: "We can gate this behind email capture later if you prefer.",
                newsletter_href: "#",
                newsletter_note: "Add a simple form (Plausible or GA for analytics) in a later pass.",
                disclaimer: "Disclaimer: This site is for informational purposes and early pilot recruitment. \
                             Not a medical device; not for emergency use.",
            },
        })
    }
}

fn ussd_script() -> Vec<ConversationStep> {
    vec![
        ConversationStep::new(1, "Dial *123# to begin", "Welcome to NaijaCare. Choose: 1) Maternal 2) Child 3) General"),
        ConversationStep::new(2, "1", "Maternal health. Symptoms? 1) Headache 2) Swelling 3) Fever"),
        ConversationStep::new(
            3,
            "2",
            "Risk tip: Sudden swelling can signal preeclampsia. Need help now? 1) Yes → connect 2) No → self-care tips",
        ),
        ConversationStep::new(4, "1", "Connecting you to a clinician… Est. cost ₦~1500 (~$2)."),
        ConversationStep::new(5, "—", "Thanks! A nurse will call shortly. Save: 0800-NAIJACARE"),
    ]
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;

//! Interaction state and static content for the NaijaCare landing page.
//!
//! This crate owns the two demo widgets (a scripted USSD conversation player
//! and a cost comparator) plus the page's static content model. It has no UI
//! or I/O dependency so the same state machines back both SSR and hydration,
//! and can be tested without a browser.

pub mod content;
pub mod conversation;
pub mod cost;
pub mod error;

pub use content::{SectionId, SiteContent};
pub use conversation::{ConversationPlayer, ConversationStep, Script};
pub use cost::{CostBreakdown, CostComparator, CostRates};
pub use error::WidgetError;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections from static content props. Only
//! `ussd_demo` and `cost_comparator` hold local reactive state, and each
//! instance owns its own signal.

pub mod chip;
pub mod contact;
pub mod cost_comparator;
pub mod feature_grid;
pub mod hero;
pub mod partners;
pub mod roadmap;
pub mod section;
pub mod site_footer;
pub mod site_header;
pub mod ussd_demo;

//! Sticky header with brand mark and in-page navigation.

use leptos::prelude::*;
use widgets::SectionId;
use widgets::content::NavLink;

#[component]
pub fn SiteHeader(brand: &'static str, nav: Vec<NavLink>) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <div class="brand">
                    <div class="brand-mark"></div>
                    <div class="brand-name">{brand}</div>
                </div>
                <nav class="site-nav">
                    {nav
                        .into_iter()
                        .map(|link| view! { <a href=link.target.href() class="nav-link">{link.label}</a> })
                        .collect_view()}
                </nav>
                <a href=SectionId::Contact.href() class="button button-primary" aria-label="Open inquiries section">
                    "Inquiries"
                </a>
            </div>
        </header>
    }
}

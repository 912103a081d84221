//! Footer with copyright year and legal links.

use leptos::prelude::*;

use crate::util::year::current_year;

#[component]
pub fn SiteFooter(brand: &'static str) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <div>{copyright_line(current_year(), brand)}</div>
                <div class="footer-links">
                    <a href="#">"Privacy"</a>
                    <a href="#">"Terms"</a>
                </div>
            </div>
        </footer>
    }
}

fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {year} {brand}")
}

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod tests;

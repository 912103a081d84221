//! Root application component with routing and the content context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use widgets::SiteContent;

use crate::pages::landing::LandingPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, content: Arc<SiteContent>) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App content/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page content as context and routes `/` to the landing page.
#[component]
pub fn App(content: Arc<SiteContent>) -> impl IntoView {
    provide_meta_context();

    let title = format!("{} | Care on any phone", content.brand);
    provide_context(content);

    view! {
        <Stylesheet id="leptos" href="/pkg/naijacare.css"/>
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}

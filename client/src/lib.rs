//! # client
//!
//! Leptos frontend for the NaijaCare landing page.
//!
//! This crate renders the static page sections and wires the two demo widgets
//! from the `widgets` crate to buttons and a slider. It is server-rendered by
//! the root `naijacare` binary (`ssr` feature) and hydrated in the browser
//! (`hydrate` feature).

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: rebuild the page content and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use std::sync::Arc;

    use leptos::prelude::*;
    use widgets::SiteContent;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match SiteContent::naijacare() {
        Ok(content) => {
            let content = Arc::new(content);
            leptos::mount::hydrate_body(move || view! { <App content=content/> });
        }
        Err(e) => log::error!("site content rejected, page left unhydrated: {e}"),
    }
}

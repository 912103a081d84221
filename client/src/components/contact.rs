//! Contact cards: inbox, pitch deck, newsletter, plus the disclaimer.

use leptos::prelude::*;
use widgets::content::Contact;

#[component]
pub fn ContactCards(contact: Contact) -> impl IntoView {
    view! {
        <div class="contact-grid">
            <div class="card">
                <div class="card-eyebrow">"Email"</div>
                <a href=mailto_href(contact.email) class="contact-link">{contact.email}</a>
                <p class="card-note">{contact.email_note}</p>
            </div>
            <div class="card">
                <div class="card-eyebrow">"Pitch deck"</div>
                <a href=contact.deck_href class="contact-link">"Download (PDF)"</a>
                <p class="card-note">{contact.deck_note}</p>
            </div>
            <div class="card">
                <div class="card-eyebrow">"Newsletter"</div>
                <a href=contact.newsletter_href class="contact-link">"Subscribe for updates"</a>
                <p class="card-note">{contact.newsletter_note}</p>
            </div>
        </div>
        <p class="disclaimer">{contact.disclaimer}</p>
    }
}

fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

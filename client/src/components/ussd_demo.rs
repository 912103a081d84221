//! USSD/SMS simulator: a phone-shaped transcript with Back/Next controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each instance owns a `RwSignal<ConversationPlayer>` created on mount and
//! dropped on unmount. Buttons call the player's clamped `retreat`/`advance`
//! and are disabled at the ends of the script; the transcript re-renders from
//! `visible_steps` on every change.

use std::sync::Arc;

use leptos::prelude::*;
use widgets::content::DemoCopy;
use widgets::{ConversationPlayer, ConversationStep, Script};

/// Which of the two navigation buttons is being styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavButton {
    Back,
    Next,
}

#[component]
pub fn UssdDemo(script: Arc<Script>, copy: DemoCopy) -> impl IntoView {
    let player = RwSignal::new(ConversationPlayer::new(script));

    let can_retreat = move || player.with(ConversationPlayer::can_retreat);
    let can_advance = move || player.with(ConversationPlayer::can_advance);
    let on_back = move |_| player.update(ConversationPlayer::retreat);
    let on_next = move |_| player.update(ConversationPlayer::advance);

    let transcript = move || {
        player.with(|p| p.visible_steps().iter().map(transcript_entry).collect_view())
    };

    let DemoCopy { simulator_caption, device_banner, heading, body, bullets } = copy;

    view! {
        <div class="ussd-demo">
            <div class="card simulator">
                <div class="simulator-header">
                    <span class="simulator-caption">{simulator_caption}</span>
                    <div class="window-dots">
                        <span class="dot dot-red"></span>
                        <span class="dot dot-yellow"></span>
                        <span class="dot dot-green"></span>
                    </div>
                </div>
                <div class="phone">
                    <div class="phone-banner">{device_banner}</div>
                    <div class="phone-transcript">{transcript}</div>
                    <div class="phone-controls">
                        <button
                            class=move || nav_button_class(NavButton::Back, can_retreat())
                            disabled=move || !can_retreat()
                            on:click=on_back
                        >
                            "Back"
                        </button>
                        <button
                            class=move || nav_button_class(NavButton::Next, can_advance())
                            disabled=move || !can_advance()
                            on:click=on_next
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            </div>
            <div class="ussd-demo-copy">
                <h3>{heading}</h3>
                <p>{body}</p>
                <ul>{bullets.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}</ul>
            </div>
        </div>
    }
}

fn transcript_entry(step: &ConversationStep) -> impl IntoView + use<> {
    let prompt = step.user_prompt.clone();
    let reply = step.system_reply.clone();
    view! {
        <div class="exchange">
            <div class="bubble bubble-user">{prompt}</div>
            <div class="bubble bubble-system">{reply}</div>
        </div>
    }
}

fn nav_button_class(button: NavButton, enabled: bool) -> &'static str {
    match (button, enabled) {
        (NavButton::Back, true) => "phone-button phone-button-back",
        (NavButton::Next, true) => "phone-button phone-button-next",
        (_, false) => "phone-button phone-button-disabled",
    }
}

#[cfg(test)]
#[path = "ussd_demo_test.rs"]
mod tests;

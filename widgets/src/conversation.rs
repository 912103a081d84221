//! Scripted USSD/SMS conversation replay.
//!
//! DESIGN
//! ======
//! A [`Script`] is validated once at construction and then shared behind an
//! `Arc`; each [`ConversationPlayer`] owns only its cursor into that script,
//! so any number of players can walk the same script independently.
//!
//! Navigation is clamped: stepping past either end leaves the cursor where it
//! is rather than wrapping or erroring.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// One simulated exchange: what the user sent and what the service replied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationStep {
    /// 1-based position of the step within its script.
    pub sequence_index: u32,
    /// Text the simulated user sent.
    pub user_prompt: String,
    /// Text the simulated service answered with.
    pub system_reply: String,
}

impl ConversationStep {
    pub fn new(sequence_index: u32, user_prompt: impl Into<String>, system_reply: impl Into<String>) -> Self {
        Self { sequence_index, user_prompt: user_prompt.into(), system_reply: system_reply.into() }
    }
}

/// Non-empty, ordered list of conversation steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ConversationStep>", into = "Vec<ConversationStep>")]
pub struct Script {
    steps: Vec<ConversationStep>,
}

impl Script {
    /// Validate and wrap a list of steps.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::EmptyScript`] for an empty list,
    /// [`WidgetError::StepOutOfOrder`] when sequence indices are not exactly
    /// `1..=N` in order, and [`WidgetError::BlankStep`] when a prompt or reply
    /// is blank.
    pub fn new(steps: Vec<ConversationStep>) -> Result<Self, WidgetError> {
        if steps.is_empty() {
            return Err(WidgetError::EmptyScript);
        }
        for (position, step) in steps.iter().enumerate() {
            let expected = u32::try_from(position + 1).unwrap_or(u32::MAX);
            if step.sequence_index != expected {
                return Err(WidgetError::StepOutOfOrder { position, expected, found: step.sequence_index });
            }
            if step.user_prompt.trim().is_empty() {
                return Err(WidgetError::BlankStep { index: step.sequence_index, field: "prompt" });
            }
            if step.system_reply.trim().is_empty() {
                return Err(WidgetError::BlankStep { index: step.sequence_index, field: "reply" });
            }
        }
        Ok(Self { steps })
    }

    #[must_use]
    pub fn steps(&self) -> &[ConversationStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` only for an empty script, which [`Script::new`] never builds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }
}

impl TryFrom<Vec<ConversationStep>> for Script {
    type Error = WidgetError;

    fn try_from(steps: Vec<ConversationStep>) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<Script> for Vec<ConversationStep> {
    fn from(script: Script) -> Self {
        script.steps
    }
}

/// Cursor over a shared [`Script`].
///
/// `current_index` always stays within `0..script.len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationPlayer {
    script: Arc<Script>,
    current_index: usize,
}

impl ConversationPlayer {
    /// Start a player at the first step.
    #[must_use]
    pub fn new(script: Arc<Script>) -> Self {
        Self { script, current_index: 0 }
    }

    /// Validate `steps` and start a player on them.
    ///
    /// # Errors
    ///
    /// Propagates any [`Script::new`] validation failure.
    pub fn from_steps(steps: Vec<ConversationStep>) -> Result<Self, WidgetError> {
        Ok(Self::new(Arc::new(Script::new(steps)?)))
    }

    #[must_use]
    pub fn script(&self) -> &Arc<Script> {
        &self.script
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// `true` only if the underlying script is empty; see [`Script::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_step(&self) -> &ConversationStep {
        &self.script.steps()[self.current_index]
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.current_index < self.script.last_index()
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.current_index > 0
    }

    /// Move one step forward; no-op on the last step.
    pub fn advance(&mut self) {
        if self.can_advance() {
            self.current_index += 1;
        }
    }

    /// Move one step back; no-op on the first step.
    pub fn retreat(&mut self) {
        if self.can_retreat() {
            self.current_index -= 1;
        }
    }

    /// Transcript so far: every step up to and including the current one.
    #[must_use]
    pub fn visible_steps(&self) -> &[ConversationStep] {
        &self.script.steps()[..=self.current_index]
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

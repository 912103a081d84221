//! Error taxonomy shared by the widgets and the content model.

/// Error returned by widget updates and script construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// A requested visit count fell outside the slider's bounds.
    #[error("visits per month {value} outside {min}..={max}")]
    VisitsOutOfRange { value: i64, min: u8, max: u8 },
    /// The slider produced something that is not a whole number.
    #[error("visits per month is not a whole number: {0:?}")]
    InvalidVisits(String),
    /// A conversation script must contain at least one step.
    #[error("conversation script has no steps")]
    EmptyScript,
    /// Sequence indices must run 1..=N in order.
    #[error("conversation step at position {position} has sequence index {found}, expected {expected}")]
    StepOutOfOrder { position: usize, expected: u32, found: u32 },
    /// A step's prompt or reply is blank.
    #[error("conversation step {index} has a blank {field}")]
    BlankStep { index: u32, field: &'static str },
}

impl WidgetError {
    /// `true` for errors raised while building configuration (scripts), as
    /// opposed to rejected user input.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::EmptyScript | Self::StepOutOfOrder { .. } | Self::BlankStep { .. })
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

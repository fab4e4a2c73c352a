//! Error types for the dimmer panel.

/// Errors that can occur when driving the dimmer panel or its torch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DimmerError {
    /// A brightness value was outside the valid range.
    #[error("Invalid brightness {value} (expected {min}-{max})")]
    InvalidBrightness {
        /// The invalid value provided.
        value: i64,
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
    },

    /// A textual slider value could not be read as a number.
    #[error("Failed to parse brightness from {0:?}")]
    BrightnessParse(String),

    /// The torch backend rejected a request.
    #[error("Torch backend '{backend}' failed: {reason}")]
    Backend {
        /// The backend name.
        backend: String,
        /// What went wrong.
        reason: String,
    },
}

//! Panel state snapshot.

use crate::brightness::Brightness;

/// A snapshot of the panel's state.
///
/// Use [`DimmerPanel::state`](crate::DimmerPanel::state) to obtain one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimmerState {
    /// Whether the torch is switched on.
    pub is_on: bool,
    /// Current brightness, kept even while off.
    pub brightness: Brightness,
}

/// Colour family of the status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Torch on (green).
    Active,
    /// Torch off (red).
    Inactive,
}

impl DimmerState {
    /// Text of the status label.
    pub fn status_text(&self) -> &'static str {
        if self.is_on { "STATUS: ON" } else { "STATUS: OFF" }
    }

    /// Colour family of the status label.
    pub fn status_tone(&self) -> StatusTone {
        if self.is_on {
            StatusTone::Active
        } else {
            StatusTone::Inactive
        }
    }

    /// Label of the toggle button: the action a click performs.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_on { "TURN OFF" } else { "TURN ON" }
    }

    /// Live percentage label under the slider.
    pub fn percent_label(&self) -> String {
        self.brightness.to_string()
    }
}

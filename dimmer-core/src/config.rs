//! Panel layout constants and UI strings.

use crate::bar::BarGeometry;
use crate::brightness::Brightness;

/// Static configuration of the dimmer panel.
///
/// There is no config file; the binary builds this with [`Default`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Window title.
    pub window_title: &'static str,
    /// Window size in logical pixels (width, height).
    pub window_size: (f32, f32),
    /// Size of the brightness bar canvas.
    pub bar: BarGeometry,
    /// Brightness before any interaction.
    pub initial_brightness: Brightness,
    /// Percentage points moved per keyboard nudge.
    pub keyboard_step: i8,
    /// Large heading at the top of the window.
    pub heading: &'static str,
    /// Caption above the slider section.
    pub slider_section: &'static str,
    /// Label next to the slider.
    pub slider_caption: &'static str,
    /// Caption in the information area.
    pub info_caption: &'static str,
    /// Shown while no real torch is wired in.
    pub unavailable_note: &'static str,
    /// Exit button label.
    pub exit_label: &'static str,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            window_title: "LED Dimmer Control",
            window_size: (400.0, 500.0),
            bar: BarGeometry::default(),
            initial_brightness: Brightness::DEFAULT,
            keyboard_step: 10,
            heading: "FLASHLIGHT DIMMER",
            slider_section: "Brightness control",
            slider_caption: "Brightness:",
            info_caption: "Device flashlight control",
            unavailable_note: "Real flashlight control needs a platform backend:\n\
                               Windows: a vendor torch/camera API binding\n\
                               Android: a build with camera access",
            exit_label: "EXIT",
        }
    }
}

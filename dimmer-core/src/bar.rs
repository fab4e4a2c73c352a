//! Brightness bar renderer model.
//!
//! Everything here is toolkit-agnostic: [`BarScene::render`] turns a
//! [`DimmerState`] into plain data, and the GUI draws that data onto its
//! canvas.

use crate::brightness::Brightness;
use crate::state::DimmerState;

/// Red channel of the leftmost gradient column.
const GRADIENT_START: f32 = 255.0;
/// How much the red channel drops across the filled region.
const GRADIENT_RAMP: f32 = 100.0;
/// The gradient never gets darker than this.
const GRADIENT_FLOOR: u8 = 155;
/// Green as a fraction of red, for a warm yellow-orange.
const GREEN_RATIO: f32 = 0.8;

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// Bar background (light grey).
    pub const BACKGROUND: Self = Self::new(211, 211, 211);
    /// Outline around the filled region (dark orange).
    pub const OUTLINE: Self = Self::new(255, 140, 0);
    /// Canvas border (grey).
    pub const BORDER: Self = Self::new(128, 128, 128);
    /// The "OFF" label.
    pub const MUTED: Self = Self::new(128, 128, 128);
    /// Dark percentage label.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Light percentage label.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Size of the bar canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGeometry {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for BarGeometry {
    fn default() -> Self {
        Self {
            width: 300,
            height: 30,
        }
    }
}

impl BarGeometry {
    /// Width of the lit region: `floor(width * percent / 100)`.
    pub fn filled_width(&self, brightness: Brightness) -> u32 {
        self.width * u32::from(brightness.percent()) / 100
    }
}

/// Colour of gradient column `column` in a lit region `filled` pixels wide.
///
/// Darkens linearly from left to right and never goes below the floor.
/// A zero-width region has no columns; it yields the start colour rather
/// than dividing by zero.
pub fn column_color(column: u32, filled: u32) -> Rgb {
    let ramp = if filled == 0 {
        0.0
    } else {
        column as f32 / filled as f32 * GRADIENT_RAMP
    };
    let intensity = ((GRADIENT_START - ramp) as u8).max(GRADIENT_FLOOR);
    let green = (f32::from(intensity) * GREEN_RATIO) as u8;
    Rgb::new(intensity, green, 0)
}

/// Contrast family of the percentage label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTone {
    /// Dark text, for the brighter bars above 50%.
    Dark,
    /// Light text.
    Light,
    /// Greyed-out text for the "OFF" state.
    Muted,
}

impl LabelTone {
    /// Label tone for a lit bar at `brightness`.
    pub fn for_brightness(brightness: Brightness) -> Self {
        if brightness.percent() > 50 {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The colour this tone is drawn in.
    pub fn color(self) -> Rgb {
        match self {
            Self::Dark => Rgb::BLACK,
            Self::Light => Rgb::WHITE,
            Self::Muted => Rgb::MUTED,
        }
    }
}

/// Text drawn on the bar, centred on `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLabel {
    /// The text.
    pub text: String,
    /// Horizontal centre in pixels.
    pub x: f32,
    /// Vertical centre in pixels.
    pub y: f32,
    /// Contrast family.
    pub tone: LabelTone,
}

/// The lit part of the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledRegion {
    /// Width in pixels, starting at the left edge.
    pub width: u32,
    /// One colour per pixel column; `columns.len() == width`.
    pub columns: Vec<Rgb>,
}

/// Everything needed to draw the bar for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct BarScene {
    /// Canvas size.
    pub geometry: BarGeometry,
    /// The lit region, present only while the torch is on.
    pub fill: Option<FilledRegion>,
    /// The overlaid label.
    pub label: BarLabel,
}

impl BarScene {
    /// Describe the bar for `state`.
    ///
    /// # Example
    ///
    /// ```
    /// use dimmer_core::{BarGeometry, BarScene, Brightness, DimmerState};
    ///
    /// let state = DimmerState { is_on: true, brightness: Brightness::new(50)? };
    /// let scene = BarScene::render(&state, BarGeometry::default());
    /// assert_eq!(scene.fill.unwrap().width, 150);
    /// assert_eq!(scene.label.text, "50%");
    /// # Ok::<(), dimmer_core::DimmerError>(())
    /// ```
    pub fn render(state: &DimmerState, geometry: BarGeometry) -> Self {
        let mid_y = (geometry.height / 2) as f32;

        if !state.is_on {
            return Self {
                geometry,
                fill: None,
                label: BarLabel {
                    text: "OFF".to_string(),
                    x: (geometry.width / 2) as f32,
                    y: mid_y,
                    tone: LabelTone::Muted,
                },
            };
        }

        let width = geometry.filled_width(state.brightness);
        let columns = (0..width).map(|column| column_color(column, width)).collect();

        Self {
            geometry,
            fill: Some(FilledRegion { width, columns }),
            label: BarLabel {
                text: state.brightness.to_string(),
                x: (width / 2) as f32,
                y: mid_y,
                tone: LabelTone::for_brightness(state.brightness),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(percent: u8) -> DimmerState {
        DimmerState {
            is_on: true,
            brightness: Brightness::new(percent).unwrap(),
        }
    }

    #[test]
    fn test_filled_width_in_bounds() {
        let geometry = BarGeometry::default();
        for percent in 0..=100u8 {
            let filled = geometry.filled_width(Brightness::new(percent).unwrap());
            assert_eq!(filled, 300 * u32::from(percent) / 100);
            assert!(filled <= geometry.width);
        }
    }

    #[test]
    fn test_filled_width_floors() {
        let geometry = BarGeometry {
            width: 7,
            height: 10,
        };
        assert_eq!(geometry.filled_width(Brightness::new(50).unwrap()), 3);
        assert_eq!(geometry.filled_width(Brightness::new(99).unwrap()), 6);
        assert_eq!(geometry.filled_width(Brightness::MAX), 7);
    }

    #[test]
    fn test_gradient_darkens_and_stays_warm() {
        let scene = BarScene::render(&lit(100), BarGeometry::default());
        let columns = scene.fill.unwrap().columns;
        assert_eq!(columns.len(), 300);
        assert_eq!(columns[0], Rgb::new(255, 204, 0));

        for pair in columns.windows(2) {
            assert!(pair[1].r <= pair[0].r);
        }
        for color in &columns {
            assert!(color.r >= GRADIENT_FLOOR);
            assert_eq!(color.b, 0);
            assert_eq!(color.g, (f32::from(color.r) * 0.8) as u8);
        }
        assert!(columns[299].r < columns[0].r);
    }

    #[test]
    fn test_column_color_guards_zero_width() {
        assert_eq!(column_color(0, 0), Rgb::new(255, 204, 0));
    }

    #[test]
    fn test_column_color_floor() {
        // Past the end of the region the ramp would drop below the floor.
        assert_eq!(column_color(20, 10).r, GRADIENT_FLOOR);
    }

    #[test]
    fn test_zero_percent_on_has_empty_fill() {
        let scene = BarScene::render(&lit(0), BarGeometry::default());
        let fill = scene.fill.unwrap();
        assert_eq!(fill.width, 0);
        assert!(fill.columns.is_empty());
        assert_eq!(scene.label.text, "0%");
        assert_eq!(scene.label.x, 0.0);
    }

    #[test]
    fn test_full_percent_spans_bar() {
        let scene = BarScene::render(&lit(100), BarGeometry::default());
        assert_eq!(scene.fill.unwrap().width, 300);
        assert_eq!(scene.label.x, 150.0);
    }

    #[test]
    fn test_off_scene() {
        let scene = BarScene::render(&DimmerState::default(), BarGeometry::default());
        assert!(scene.fill.is_none());
        assert_eq!(scene.label.text, "OFF");
        assert_eq!(scene.label.tone, LabelTone::Muted);
        assert_eq!((scene.label.x, scene.label.y), (150.0, 15.0));
    }

    #[test]
    fn test_label_contrast() {
        assert_eq!(LabelTone::for_brightness(Brightness::new(51).unwrap()), LabelTone::Dark);
        assert_eq!(LabelTone::for_brightness(Brightness::new(50).unwrap()), LabelTone::Light);
        assert_eq!(LabelTone::Dark.color(), Rgb::BLACK);
        assert_eq!(LabelTone::Light.color(), Rgb::WHITE);
    }
}

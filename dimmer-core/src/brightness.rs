//! Brightness percentage.

use crate::error::DimmerError;
use std::fmt;

/// Torch brightness as a whole percentage (0-100).
///
/// The only way to build one is through a checked constructor, so every
/// `Brightness` in the program is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Lowest brightness.
    pub const MIN: Self = Self(0);
    /// Highest brightness.
    pub const MAX: Self = Self(100);
    /// Brightness the panel starts with.
    pub const DEFAULT: Self = Self(50);

    /// Create a brightness from a percentage.
    ///
    /// # Errors
    /// Returns an error if `percent > 100`.
    pub fn new(percent: u8) -> Result<Self, DimmerError> {
        if percent > Self::MAX.0 {
            return Err(DimmerError::InvalidBrightness {
                value: i64::from(percent),
                min: Self::MIN.0,
                max: Self::MAX.0,
            });
        }
        Ok(Self(percent))
    }

    /// Convert a continuous slider position into a brightness.
    ///
    /// The value is truncated toward zero and clamped to 0-100.
    /// Returns `None` for NaN.
    pub fn from_slider(value: f32) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        let truncated = value.trunc().clamp(0.0, 100.0) as u8;
        Some(Self(truncated))
    }

    /// Parse a textual slider value such as `"42"` or `"42.7"`.
    ///
    /// # Errors
    /// Returns [`DimmerError::BrightnessParse`] if the text is not a finite
    /// number.
    pub fn parse(raw: &str) -> Result<Self, DimmerError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| DimmerError::BrightnessParse(raw.to_string()))?;
        if !value.is_finite() {
            return Err(DimmerError::BrightnessParse(raw.to_string()));
        }
        Self::from_slider(value as f32)
            .ok_or_else(|| DimmerError::BrightnessParse(raw.to_string()))
    }

    /// Move by `step` percentage points, saturating at the bounds.
    pub fn nudge(self, step: i8) -> Self {
        let next = (i16::from(self.0) + i16::from(step)).clamp(0, 100);
        Self(next as u8)
    }

    /// The percentage value.
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Whether the torch would emit no light at this level.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = DimmerError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<Brightness> for u8 {
    fn from(brightness: Brightness) -> Self {
        brightness.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert_eq!(Brightness::new(0).unwrap().percent(), 0);
        assert_eq!(Brightness::new(100).unwrap().percent(), 100);
        assert_eq!(
            Brightness::new(101),
            Err(DimmerError::InvalidBrightness {
                value: 101,
                min: 0,
                max: 100
            })
        );
    }

    #[test]
    fn test_from_slider_truncates() {
        assert_eq!(Brightness::from_slider(74.9).unwrap().percent(), 74);
        assert_eq!(Brightness::from_slider(0.99).unwrap().percent(), 0);
        assert_eq!(Brightness::from_slider(100.0).unwrap().percent(), 100);
    }

    #[test]
    fn test_from_slider_clamps() {
        assert_eq!(Brightness::from_slider(-3.5).unwrap(), Brightness::MIN);
        assert_eq!(Brightness::from_slider(250.0).unwrap(), Brightness::MAX);
        assert_eq!(Brightness::from_slider(f32::INFINITY).unwrap(), Brightness::MAX);
        assert!(Brightness::from_slider(f32::NAN).is_none());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Brightness::parse("42").unwrap().percent(), 42);
        assert_eq!(Brightness::parse(" 42.7 ").unwrap().percent(), 42);
        assert!(matches!(
            Brightness::parse("bright"),
            Err(DimmerError::BrightnessParse(_))
        ));
        assert!(Brightness::parse("").is_err());
        assert!(Brightness::parse("inf").is_err());
        assert!(Brightness::parse("NaN").is_err());
    }

    #[test]
    fn test_nudge_saturates() {
        assert_eq!(Brightness::new(95).unwrap().nudge(10), Brightness::MAX);
        assert_eq!(Brightness::new(5).unwrap().nudge(-10), Brightness::MIN);
        assert_eq!(Brightness::DEFAULT.nudge(10).percent(), 60);
    }

    #[test]
    fn test_display() {
        assert_eq!(Brightness::new(75).unwrap().to_string(), "75%");
        assert_eq!(Brightness::default().to_string(), "50%");
    }
}

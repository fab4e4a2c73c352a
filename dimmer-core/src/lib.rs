//! Model and torch abstraction for a dimmable flashlight control panel.
//!
//! This crate holds everything behind the dimmer GUI that does not depend on
//! a UI toolkit: the on/off flag and brightness, the torch capability, and
//! the brightness bar's rendering model.
//!
//! # Example
//!
//! ```
//! use dimmer_core::{Capability, DimmerPanel, TorchOutcome};
//!
//! fn main() -> Result<(), dimmer_core::DimmerError> {
//!     // Probe once at startup; no platform backend exists, so this simulates
//!     let mut panel = DimmerPanel::new(Capability::probe());
//!
//!     // Switch on at the default 50%
//!     if let TorchOutcome::Simulated(line) = panel.toggle()? {
//!         println!("{}", line);
//!     }
//!
//!     // Dim while lit
//!     panel.slider_moved(75.0)?;
//!
//!     // The bar is 75% full
//!     let scene = panel.bar_scene();
//!     assert_eq!(scene.fill.map(|f| f.width), Some(225));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Use [`MockTorch`] to exercise the hardware branch without a torch:
//!
//! ```
//! use std::sync::Arc;
//! use dimmer_core::{Brightness, Capability, DimmerPanel, MockTorch, TorchCall};
//!
//! let mock = Arc::new(MockTorch::new());
//! let mut panel = DimmerPanel::new(Capability::PlatformHandle(mock.clone()));
//! panel.toggle().unwrap();
//! assert_eq!(mock.calls(), vec![TorchCall::Light(Brightness::DEFAULT)]);
//! ```

#![warn(missing_docs)]

mod bar;
mod brightness;
mod config;
mod error;
mod mock;
mod panel;
mod state;
mod torch;

// Re-export public API
pub use bar::{
    BarGeometry, BarLabel, BarScene, FilledRegion, LabelTone, Rgb, column_color,
};
pub use brightness::Brightness;
pub use config::PanelConfig;
pub use error::DimmerError;
pub use mock::{MockTorch, TorchCall};
pub use panel::DimmerPanel;
pub use state::{DimmerState, StatusTone};
pub use torch::{Capability, Torch, TorchBackend, TorchOutcome};

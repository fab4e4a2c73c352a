//! The dimmer panel: on/off flag, brightness, and the torch behind them.

use crate::bar::{BarGeometry, BarScene};
use crate::brightness::Brightness;
use crate::config::PanelConfig;
use crate::error::DimmerError;
use crate::state::DimmerState;
use crate::torch::{Capability, Torch, TorchOutcome};

use log::{debug, info};

/// State machine behind the control panel.
///
/// Owns the two pieces of mutable state and the injected [`Torch`]. Every
/// handler runs synchronously; the caller redraws the bar whenever
/// [`take_redraw`](Self::take_redraw) reports a change.
///
/// # Example
///
/// ```
/// use dimmer_core::{Capability, DimmerPanel, TorchOutcome};
///
/// let mut panel = DimmerPanel::new(Capability::Unavailable);
/// let outcome = panel.toggle()?;
/// assert_eq!(
///     outcome,
///     TorchOutcome::Simulated("TORCH ON (simulated) - brightness: 50%".into())
/// );
///
/// panel.slider_moved(75.0)?;
/// assert_eq!(panel.state().percent_label(), "75%");
/// # Ok::<(), dimmer_core::DimmerError>(())
/// ```
#[derive(Debug)]
pub struct DimmerPanel {
    torch: Torch,
    state: DimmerState,
    geometry: BarGeometry,
    needs_redraw: bool,
}

impl DimmerPanel {
    /// Create a panel with the default configuration.
    pub fn new(capability: Capability) -> Self {
        Self::with_config(capability, &PanelConfig::default())
    }

    /// Create a panel using the bar size and initial brightness of `config`.
    pub fn with_config(capability: Capability, config: &PanelConfig) -> Self {
        info!("dimmer panel starting, torch capability: {:?}", capability);
        Self {
            torch: Torch::new(capability),
            state: DimmerState {
                is_on: false,
                brightness: config.initial_brightness,
            },
            geometry: config.bar,
            needs_redraw: true,
        }
    }

    /// Get a snapshot of the current state.
    pub fn state(&self) -> DimmerState {
        self.state
    }

    /// Whether a real torch backend is wired in.
    pub fn hardware_available(&self) -> bool {
        self.torch.is_available()
    }

    /// Describe the brightness bar for the current state.
    pub fn bar_scene(&self) -> BarScene {
        BarScene::render(&self.state, self.geometry)
    }

    /// Report and clear the "bar is stale" flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Flip the torch on or off.
    ///
    /// The flag flips even when the backend fails, so the panel always
    /// reflects the last requested state.
    ///
    /// # Errors
    /// Returns the backend's error if a platform backend rejects the request.
    pub fn toggle(&mut self) -> Result<TorchOutcome, DimmerError> {
        self.state.is_on = !self.state.is_on;
        self.needs_redraw = true;
        info!("torch toggled {}", if self.state.is_on { "on" } else { "off" });

        if self.state.is_on {
            self.torch.turn_on(self.state.brightness)
        } else {
            self.torch.turn_off()
        }
    }

    /// Apply a new brightness.
    ///
    /// Returns the torch outcome when the torch is on and was re-lit,
    /// `None` when it is off.
    ///
    /// # Errors
    /// Returns the backend's error if a platform backend rejects the request.
    pub fn set_brightness(
        &mut self,
        brightness: Brightness,
    ) -> Result<Option<TorchOutcome>, DimmerError> {
        self.state.brightness = brightness;
        self.needs_redraw = true;
        debug!("brightness set to {}", brightness);

        if self.state.is_on {
            self.torch.turn_on(brightness).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Handle a continuous slider position.
    ///
    /// NaN positions are dropped without touching the state.
    ///
    /// # Errors
    /// Returns the backend's error if a platform backend rejects the request.
    pub fn slider_moved(&mut self, value: f32) -> Result<Option<TorchOutcome>, DimmerError> {
        match Brightness::from_slider(value) {
            Some(brightness) => self.set_brightness(brightness),
            None => Ok(None),
        }
    }

    /// Handle a slider value reported as text.
    ///
    /// Text that is not a finite number is silently ignored.
    ///
    /// # Errors
    /// Returns the backend's error if a platform backend rejects the request.
    pub fn slider_input(&mut self, raw: &str) -> Result<Option<TorchOutcome>, DimmerError> {
        match Brightness::parse(raw) {
            Ok(brightness) => self.set_brightness(brightness),
            Err(e) => {
                debug!("ignoring slider input: {}", e);
                Ok(None)
            }
        }
    }

    /// Move the brightness by `step` points, saturating at the bounds.
    ///
    /// # Errors
    /// Returns the backend's error if a platform backend rejects the request.
    pub fn nudge(&mut self, step: i8) -> Result<Option<TorchOutcome>, DimmerError> {
        self.set_brightness(self.state.brightness.nudge(step))
    }
}

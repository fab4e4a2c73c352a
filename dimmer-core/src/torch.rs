//! Torch hardware abstraction.

use crate::brightness::Brightness;
use crate::error::DimmerError;

use log::{debug, info};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Torch Backend Trait
// =============================================================================

/// Trait for real torch implementations.
///
/// This allows for fake implementations in tests.
pub trait TorchBackend: Send + Sync {
    /// Short human-readable backend name.
    fn name(&self) -> &str;

    /// Switch the torch on (or keep it on) at the given brightness.
    fn light(&self, level: Brightness) -> Result<(), DimmerError>;

    /// Switch the torch off.
    fn extinguish(&self) -> Result<(), DimmerError>;
}

// =============================================================================
// Capability
// =============================================================================

/// Whether real torch control is available, and through what.
#[derive(Clone)]
pub enum Capability {
    /// No torch API is wired in; every action is simulated.
    Unavailable,
    /// A platform backend drives the torch.
    PlatformHandle(Arc<dyn TorchBackend>),
}

impl Capability {
    /// Probe the platform for a torch once at startup.
    ///
    /// No platform backend exists yet, so this always returns
    /// [`Capability::Unavailable`].
    pub fn probe() -> Self {
        if cfg!(windows) {
            info!("torch control on Windows needs an extra vendor binding; simulating");
        } else {
            debug!("no torch API wired for {}; simulating", std::env::consts::OS);
        }
        Self::Unavailable
    }

    /// Whether a real backend is present.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::PlatformHandle(_))
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("Unavailable"),
            Self::PlatformHandle(backend) => {
                f.debug_tuple("PlatformHandle").field(&backend.name()).finish()
            }
        }
    }
}

// =============================================================================
// Torch
// =============================================================================

/// What a torch request actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TorchOutcome {
    /// Nothing happened on hardware; the line describes the simulated action.
    Simulated(String),
    /// The platform backend accepted the request.
    Applied,
}

/// The torch the panel talks to.
///
/// Every request branches on the injected [`Capability`].
///
/// # Example
///
/// ```
/// use dimmer_core::{Brightness, Capability, Torch, TorchOutcome};
///
/// let torch = Torch::new(Capability::Unavailable);
/// let outcome = torch.turn_on(Brightness::new(75)?)?;
/// assert_eq!(
///     outcome,
///     TorchOutcome::Simulated("TORCH ON (simulated) - brightness: 75%".into())
/// );
/// # Ok::<(), dimmer_core::DimmerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Torch {
    capability: Capability,
}

impl Torch {
    /// Create a torch over the given capability.
    pub fn new(capability: Capability) -> Self {
        Self { capability }
    }

    /// Whether a real backend is present.
    pub fn is_available(&self) -> bool {
        self.capability.is_available()
    }

    /// The capability this torch was built with.
    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    /// Switch on at `level`, or re-apply `level` while already on.
    ///
    /// # Errors
    /// Returns the backend's error when a platform backend rejects the request.
    pub fn turn_on(&self, level: Brightness) -> Result<TorchOutcome, DimmerError> {
        match &self.capability {
            Capability::PlatformHandle(backend) => {
                backend.light(level)?;
                debug!("{} lit at {}", backend.name(), level);
                Ok(TorchOutcome::Applied)
            }
            Capability::Unavailable => {
                debug!("simulating torch on at {}", level);
                Ok(TorchOutcome::Simulated(format!(
                    "TORCH ON (simulated) - brightness: {}",
                    level
                )))
            }
        }
    }

    /// Switch off.
    ///
    /// # Errors
    /// Returns the backend's error when a platform backend rejects the request.
    pub fn turn_off(&self) -> Result<TorchOutcome, DimmerError> {
        match &self.capability {
            Capability::PlatformHandle(backend) => {
                backend.extinguish()?;
                debug!("{} extinguished", backend.name());
                Ok(TorchOutcome::Applied)
            }
            Capability::Unavailable => {
                debug!("simulating torch off");
                Ok(TorchOutcome::Simulated("TORCH OFF (simulated)".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockTorch, TorchCall};

    #[test]
    fn test_probe_is_unavailable() {
        let capability = Capability::probe();
        assert!(!capability.is_available());
        assert!(!Torch::new(capability).is_available());
    }

    #[test]
    fn test_simulated_lines() {
        let torch = Torch::new(Capability::Unavailable);
        assert_eq!(
            torch.turn_on(Brightness::DEFAULT).unwrap(),
            TorchOutcome::Simulated("TORCH ON (simulated) - brightness: 50%".to_string())
        );
        assert_eq!(
            torch.turn_off().unwrap(),
            TorchOutcome::Simulated("TORCH OFF (simulated)".to_string())
        );
    }

    #[test]
    fn test_platform_handle_delegates() {
        let mock = Arc::new(MockTorch::new());
        let torch = Torch::new(Capability::PlatformHandle(mock.clone()));
        assert!(torch.is_available());

        assert_eq!(
            torch.turn_on(Brightness::new(30).unwrap()).unwrap(),
            TorchOutcome::Applied
        );
        assert_eq!(torch.turn_off().unwrap(), TorchOutcome::Applied);
        assert_eq!(
            mock.calls(),
            vec![TorchCall::Light(Brightness::new(30).unwrap()), TorchCall::Extinguish]
        );
    }

    #[test]
    fn test_backend_error_propagates() {
        let torch = Torch::new(Capability::PlatformHandle(Arc::new(MockTorch::failing())));
        assert!(matches!(
            torch.turn_on(Brightness::MAX),
            Err(DimmerError::Backend { .. })
        ));
    }

    #[test]
    fn test_capability_debug() {
        let capability = Capability::PlatformHandle(Arc::new(MockTorch::new()));
        assert_eq!(format!("{:?}", capability), "PlatformHandle(\"mock\")");
        assert_eq!(format!("{:?}", Capability::Unavailable), "Unavailable");
    }
}

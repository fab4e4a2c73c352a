//! Mock torch backend for testing.

use crate::brightness::Brightness;
use crate::error::DimmerError;
use crate::torch::TorchBackend;
use std::sync::Mutex;

/// A request received by [`MockTorch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorchCall {
    /// [`TorchBackend::light`] at the given level.
    Light(Brightness),
    /// [`TorchBackend::extinguish`].
    Extinguish,
}

/// A mock torch backend for testing.
///
/// This allows exercising the "available" branch of
/// [`Capability`](crate::Capability) without any actual torch hardware.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use dimmer_core::{Capability, DimmerPanel, MockTorch};
///
/// let mock = Arc::new(MockTorch::new());
/// let mut panel = DimmerPanel::new(Capability::PlatformHandle(mock.clone()));
/// panel.toggle().unwrap();
/// assert_eq!(mock.calls().len(), 1);
/// assert!(mock.is_lit());
/// ```
pub struct MockTorch {
    calls: Mutex<Vec<TorchCall>>,
    fail: bool,
}

impl MockTorch {
    /// Create a mock that accepts every request.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Create a mock that records every request and then rejects it.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// All requests received so far, oldest first.
    pub fn calls(&self) -> Vec<TorchCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether the last request left the torch lit.
    pub fn is_lit(&self) -> bool {
        let calls = self.calls.lock().unwrap();
        matches!(calls.last(), Some(TorchCall::Light(level)) if !level.is_zero())
    }

    fn record(&self, call: TorchCall) -> Result<(), DimmerError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(DimmerError::Backend {
                backend: self.name().to_string(),
                reason: format!("rejected {:?}", call),
            });
        }
        Ok(())
    }
}

impl Default for MockTorch {
    fn default() -> Self {
        Self::new()
    }
}

impl TorchBackend for MockTorch {
    fn name(&self) -> &str {
        "mock"
    }

    fn light(&self, level: Brightness) -> Result<(), DimmerError> {
        self.record(TorchCall::Light(level))
    }

    fn extinguish(&self) -> Result<(), DimmerError> {
        self.record(TorchCall::Extinguish)
    }
}

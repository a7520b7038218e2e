//! Recording dialer for tests.

use std::sync::{Arc, Mutex};

use crate::error::SystemError;
use crate::traits::{tel_uri, Dialer};

/// Remembers every number it was asked to dial.
#[derive(Debug, Clone, Default)]
pub struct RecordingDialer {
    dialed: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingDialer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dialer whose opener always errors (numbers are still recorded)
    pub fn broken() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn dialed(&self) -> Vec<String> {
        self.dialed.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Dialer for RecordingDialer {
    fn dial(&self, digits: &str) -> Result<(), SystemError> {
        self.dialed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(digits.to_string());
        if self.fail {
            return Err(SystemError::OpenerFailed {
                uri: tel_uri(digits),
                message: "no tel handler".to_string(),
            });
        }
        Ok(())
    }
}

//! Dialer backed by the platform URL opener.

use tracing::debug;

use crate::error::SystemError;
use crate::traits::{tel_uri, Dialer};

/// Opens `tel:` URIs with whatever handler the OS has registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDialer;

impl Dialer for SystemDialer {
    fn dial(&self, digits: &str) -> Result<(), SystemError> {
        let uri = tel_uri(digits);
        debug!(%uri, "opening tel handler");
        open::that(&uri).map_err(|e| SystemError::OpenerFailed {
            uri,
            message: e.to_string(),
        })
    }
}

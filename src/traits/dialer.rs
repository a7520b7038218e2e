//! Phone dialing abstraction.

use crate::error::SystemError;

/// Hands a number to whatever can place a call on this machine.
pub trait Dialer: Send + Sync {
    /// `digits` is already stripped to ASCII digits.
    fn dial(&self, digits: &str) -> Result<(), SystemError>;
}

/// `tel:` URI for a digits-only number
pub fn tel_uri(digits: &str) -> String {
    format!("tel:{}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_uri() {
        assert_eq!(tel_uri("988"), "tel:988");
    }
}

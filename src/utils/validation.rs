use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Check that a base numeral is usable: non-empty and ASCII digits only.
/// Whitespace counts as a non-digit, so whitespace-only input is rejected
/// too.
///
/// # Errors
///
/// Returns an error if the string is empty or contains any non-ASCII-digit
/// characters.
pub fn validate_digit_string(base: &str) -> Result<(), UtilsError> {
    debug!("Validating base numeral: '{}'", base);

    if base.is_empty() {
        warn!("Base numeral is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    if !base.chars().all(|c| c.is_ascii_digit()) {
        warn!("Base numeral contains non-digit characters: '{}'", base);
        return Err(UtilsError::InvalidDigitString(base.to_string()));
    }

    Ok(())
}

//! Form definitions backing the administration routes.

use phonenumber::Mode;
use thiserror::Error;
use validator::ValidationErrors;

pub mod catalog;
pub mod enrollment;
pub mod exam;
pub mod lecturer;
pub mod location;
pub mod roadmap;
pub mod student;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid date or time: {0}")]
    InvalidDateTime(String),

    #[error("invalid enrollment status: {0}")]
    InvalidStatus(String),

    #[error("malformed upload: {0}")]
    Upload(String),
}

/// Normalize a contact phone to E.164. Empty input stays empty; the phone
/// fields are optional everywhere.
pub(crate) fn normalize_phone(value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let parsed =
        phonenumber::parse(None, trimmed).map_err(|_| FormError::InvalidPhoneNumber)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_phone_is_allowed() {
        assert_eq!(normalize_phone("  ").unwrap(), "");
    }

    #[test]
    fn phone_normalizes_to_e164() {
        assert_eq!(normalize_phone("+49 30 901820").unwrap(), "+4930901820");
    }

    #[test]
    fn garbage_phone_is_rejected() {
        assert!(normalize_phone("not a phone").is_err());
    }
}

//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// Name candidate was empty
    #[error("Name can't be empty")]
    InvalidName,

    /// Phone candidate was not exactly 10 digits
    #[error("Phone number must be exactly 10 digits, got: {0:?}")]
    InvalidPhone(String),

    /// No record stored under the name
    #[error("Record with name {0} not found")]
    NameNotFound(String),

    /// No phone entry equal to the searched value
    #[error("Phone {0} not found")]
    PhoneNotFound(String),
}

impl From<ValidationError> for AddressBookError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => Self::InvalidName,
            ValidationError::InvalidPhone(phone) => Self::InvalidPhone(phone),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(AddressBookError::InvalidName.to_string(), "Name can't be empty");

        let err = AddressBookError::NameNotFound("Jane".to_string());
        assert_eq!(err.to_string(), "Record with name Jane not found");

        let err = AddressBookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone 1234567890 not found");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_LOG_LEVEL".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for ADDRESS_BOOK_LOG_LEVEL: bad");
    }

    #[test]
    fn test_invalid_phone_display_quotes_candidate() {
        let err = AddressBookError::InvalidPhone("123".to_string());
        assert!(err.to_string().contains("\"123\""));
    }

    #[test]
    fn test_from_validation_error() {
        assert_eq!(
            AddressBookError::from(ValidationError::EmptyName),
            AddressBookError::InvalidName
        );
        assert_eq!(
            AddressBookError::from(ValidationError::InvalidPhone("12".to_string())),
            AddressBookError::InvalidPhone("12".to_string())
        );
    }
}

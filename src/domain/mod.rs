//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names and phone numbers. These value
//! objects validate at construction time and prevent invalid data from
//! being represented in the system.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::{Phone, PHONE_DIGITS};

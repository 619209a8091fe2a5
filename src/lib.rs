//! Address Book - an in-memory contact directory.
//!
//! Stores named records, each holding a validated list of phone numbers, and
//! supports create/read/update/delete on both records and their phones. The
//! crate is a library meant to be embedded in a larger application.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`)
//! - **models**: The `Record` type (one contact)
//! - **book**: The `AddressBook` keyed collection
//! - **matching**: Fuzzy name / exact phone search over records
//! - **error**: Error types for precise error handling
//! - **config**: Configuration from environment variables
//! - **logging**: Optional tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, AddressBookError, Record};
//!
//! let mut john = Record::new("John").unwrap();
//! john.add_phone("1234567890").unwrap();
//! john.add_phone("5555555555").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(john);
//!
//! let mut john = book.find_mut("John").unwrap();
//! john.edit_phone("1234567890", "1112223333").unwrap();
//! assert_eq!(
//!     john.to_string(),
//!     "Contact name: John, phones: 1112223333; 5555555555"
//! );
//!
//! assert_eq!(
//!     book.delete("Jane").unwrap_err(),
//!     AddressBookError::NameNotFound("Jane".to_string())
//! );
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod matching;
pub mod models;

pub use book::{AddressBook, RecordMut};
pub use config::Config;
pub use domain::{Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError, ConfigResult};
pub use logging::init_logging;
pub use matching::{MatchResult, MatchType, RecordMatcher, RecordQuery};
pub use models::Record;

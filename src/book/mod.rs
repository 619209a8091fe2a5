//! The address book: keyed storage of contact records.

pub mod address_book;
pub mod record_mut;

pub use address_book::{AddressBook, Iter};
pub use record_mut::RecordMut;

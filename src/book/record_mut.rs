//! Mutable access to a stored record that cannot change its name.

use crate::domain::Phone;
use crate::error::AddressBookResult;
use crate::models::Record;
use std::ops::Deref;

/// A borrowed record inside an [`AddressBook`](super::AddressBook).
///
/// Only phone operations are forwarded, so the record cannot be replaced
/// or renamed and its key always equals its name. Read access goes through
/// `Deref<Target = Record>`.
#[derive(Debug)]
pub struct RecordMut<'a> {
    record: &'a mut Record,
}

impl<'a> RecordMut<'a> {
    pub(crate) fn new(record: &'a mut Record) -> Self {
        Self { record }
    }

    /// See [`Record::add_phone`].
    pub fn add_phone(&mut self, phone: impl Into<String>) -> AddressBookResult<()> {
        self.record.add_phone(phone)
    }

    /// See [`Record::edit_phone`].
    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: impl Into<String>,
    ) -> AddressBookResult<()> {
        self.record.edit_phone(old_phone, new_phone)
    }

    /// See [`Record::find_phone_mut`]. The returned `Phone` re-validates on `set`.
    pub fn find_phone_mut(&mut self, phone: &str) -> AddressBookResult<&mut Phone> {
        self.record.find_phone_mut(phone)
    }

    /// See [`Record::remove_phone`].
    pub fn remove_phone(&mut self, phone: &str) -> AddressBookResult<Phone> {
        self.record.remove_phone(phone)
    }
}

impl Deref for RecordMut<'_> {
    type Target = Record;

    fn deref(&self) -> &Record {
        &*self.record
    }
}

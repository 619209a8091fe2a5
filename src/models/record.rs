//! Record model representing one contact in the address book.

use crate::domain::{Name, Phone};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: one name and an ordered list of phone numbers.
///
/// Phone lookups compare the stored value verbatim and act on the first
/// matching entry. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> AddressBookResult<Self> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// The contact name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn phone_count(&self) -> usize {
        self.phones.len()
    }

    pub fn has_phone(&self, phone: &str) -> bool {
        self.position(phone).is_some()
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidPhone` if `phone` is malformed; the
    /// list is unchanged in that case.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> AddressBookResult<()> {
        let phone = Phone::new(phone)?;
        debug!(name = %self.name, phone = %phone, "phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`,
    /// keeping its position.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::PhoneNotFound` if no entry equals `old_phone`.
    /// - `AddressBookError::InvalidPhone` if `new_phone` is malformed; the
    ///   old value stays in place.
    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: impl Into<String>,
    ) -> AddressBookResult<()> {
        let idx = self
            .position(old_phone)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old_phone.to_string()))?;
        self.phones[idx].set(new_phone)?;
        debug!(name = %self.name, old = old_phone, new = %self.phones[idx], "phone edited");
        Ok(())
    }

    /// Return the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if no entry matches.
    pub fn find_phone(&self, phone: &str) -> AddressBookResult<&Phone> {
        self.position(phone)
            .map(|idx| &self.phones[idx])
            .ok_or_else(|| AddressBookError::PhoneNotFound(phone.to_string()))
    }

    /// Mutable variant of [`Record::find_phone`].
    pub fn find_phone_mut(&mut self, phone: &str) -> AddressBookResult<&mut Phone> {
        match self.position(phone) {
            Some(idx) => Ok(&mut self.phones[idx]),
            None => Err(AddressBookError::PhoneNotFound(phone.to_string())),
        }
    }

    /// Remove the first phone equal to `phone`. Later duplicates remain.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if no entry matches.
    pub fn remove_phone(&mut self, phone: &str) -> AddressBookResult<Phone> {
        let idx = self
            .position(phone)
            .ok_or_else(|| AddressBookError::PhoneNotFound(phone.to_string()))?;
        let removed = self.phones.remove(idx);
        debug!(name = %self.name, phone = %removed, "phone removed");
        Ok(removed)
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Record {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    #[test]
    fn test_new_record_renders_empty_phone_list() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.to_string(), "Contact name: John, phones: ");
        assert_eq!(record.phone_count(), 0);
    }

    #[test]
    fn test_new_record_rejects_empty_name() {
        assert_eq!(Record::new(""), Err(AddressBookError::InvalidName));
    }

    #[test]
    fn test_add_phone_appends_in_order() {
        let record = john();
        assert_eq!(record.to_string(), "Contact name: John, phones: 1234567890; 5555555555");
    }

    #[test]
    fn test_add_invalid_phone_leaves_list_unchanged() {
        let mut record = john();
        let before = record.phones().to_vec();

        assert_eq!(
            record.add_phone("123"),
            Err(AddressBookError::InvalidPhone("123".to_string()))
        );
        assert_eq!(record.phones(), before.as_slice());
    }

    #[test]
    fn test_add_duplicate_phone_keeps_both() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phone_count(), 2);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = john();
        record.edit_phone("1234567890", "1112223333").unwrap();
        assert_eq!(record.to_string(), "Contact name: John, phones: 1112223333; 5555555555");

        assert_eq!(
            record.edit_phone("1234567890", "x"),
            Err(AddressBookError::PhoneNotFound("1234567890".to_string()))
        );
    }

    #[test]
    fn test_edit_phone_invalid_new_value_keeps_old() {
        let mut record = john();
        assert_eq!(
            record.edit_phone("1234567890", "12ab"),
            Err(AddressBookError::InvalidPhone("12ab".to_string()))
        );
        assert!(record.has_phone("1234567890"));
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_edit_phone_touches_first_duplicate_only() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();

        record.edit_phone("1234567890", "9999999999").unwrap();
        assert_eq!(record.to_string(), "Contact name: John, phones: 9999999999; 1234567890");
    }

    #[test]
    fn test_find_phone() {
        let record = john();
        let phone = record.find_phone("5555555555").unwrap();
        assert_eq!(phone.to_string(), "5555555555");

        assert_eq!(
            record.find_phone("0000000000"),
            Err(AddressBookError::PhoneNotFound("0000000000".to_string()))
        );
    }

    #[test]
    fn test_find_phone_mut_allows_validated_edit() {
        let mut record = john();
        record
            .find_phone_mut("5555555555")
            .unwrap()
            .set("4444444444")
            .unwrap();
        assert!(record.has_phone("4444444444"));
        assert!(!record.has_phone("5555555555"));
    }

    #[test]
    fn test_remove_phone() {
        let mut record = john();
        let removed = record.remove_phone("5555555555").unwrap();
        assert_eq!(removed.as_str(), "5555555555");
        assert_eq!(
            record.find_phone("5555555555"),
            Err(AddressBookError::PhoneNotFound("5555555555".to_string()))
        );
        assert_eq!(
            record.remove_phone("5555555555"),
            Err(AddressBookError::PhoneNotFound("5555555555".to_string()))
        );
    }

    #[test]
    fn test_remove_phone_leaves_later_duplicates() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_phone("1234567890").unwrap();

        record.remove_phone("1234567890").unwrap();
        assert_eq!(record.to_string(), "Contact name: John, phones: 5555555555; 1234567890");
    }

    #[test]
    fn test_render_is_stable_across_reads() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();

        let first = record.to_string();
        let _ = record.find_phone("1234567890");
        assert_eq!(record.to_string(), first);
        assert_eq!(record.to_string(), first);
    }

    #[test]
    fn test_record_serialization() {
        let record = john();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "John", "phones": ["1234567890", "5555555555"]})
        );

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_validates_fields() {
        let bad_phone = serde_json::json!({"name": "John", "phones": ["123"]});
        assert!(serde_json::from_value::<Record>(bad_phone).is_err());

        let bad_name = serde_json::json!({"name": "", "phones": []});
        assert!(serde_json::from_value::<Record>(bad_name).is_err());

        let no_phones = serde_json::json!({"name": "Jane"});
        let record: Record = serde_json::from_value(no_phones).unwrap();
        assert_eq!(record.phone_count(), 0);
    }
}

//! Name-keyed collection of records.

use crate::config::Config;
use crate::error::{AddressBookError, AddressBookResult};
use crate::matching::{MatchResult, RecordMatcher, RecordQuery};
use crate::models::Record;
use indexmap::map::{self, IndexMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::iter::FusedIterator;
use tracing::{debug, warn};

use super::RecordMut;

/// An in-memory address book.
///
/// Records are keyed by their name. Iteration follows insertion order of
/// names; replacing a record keeps its slot, deleting and re-adding a name
/// moves it to the end.
///
/// The book does no internal locking. Hosts that share it between threads
/// must wrap it (for example in a `Mutex`) around each logical operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, silently replacing any record
    /// already stored under that name.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_owned();
        let previous = self.records.insert(key, record);
        match &previous {
            Some(old) => warn!(name = %old.name(), "record replaced"),
            None => debug!(total = self.records.len(), "record added"),
        }
        previous
    }

    /// Look up a record by name.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NameNotFound` if no record has that name.
    pub fn find(&self, name: &str) -> AddressBookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| AddressBookError::NameNotFound(name.to_string()))
    }

    /// Mutable variant of [`AddressBook::find`], for editing a stored
    /// record's phones. The record's name cannot be changed through it.
    pub fn find_mut(&mut self, name: &str) -> AddressBookResult<RecordMut<'_>> {
        self.records
            .get_mut(name)
            .map(RecordMut::new)
            .ok_or_else(|| AddressBookError::NameNotFound(name.to_string()))
    }

    /// Remove the record stored under `name` and return it.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NameNotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        let removed = self
            .records
            .shift_remove(name)
            .ok_or_else(|| AddressBookError::NameNotFound(name.to_string()))?;
        debug!(name, total = self.records.len(), "record deleted");
        Ok(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    /// Stored names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Stored records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Find records matching `query` by fuzzy name or exact phone.
    ///
    /// Results are sorted by confidence (highest first) and truncated to
    /// `max_results`.
    pub fn search(
        &self,
        query: &RecordQuery,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'_>> {
        RecordMatcher::new().find_matches(query, self.records(), max_results, min_confidence)
    }

    /// [`AddressBook::search`] using the limits from `config`.
    pub fn search_with_config(&self, query: &RecordQuery, config: &Config) -> Vec<MatchResult<'_>> {
        self.search(
            query,
            config.max_match_results,
            config.match_confidence_threshold,
        )
    }
}

/// Iterator over `(name, record)` pairs, created by [`AddressBook::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: map::Iter<'a, String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, record)| (name.as_str(), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(name, record)| (name.as_str(), record))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

// Serde support - serialize as an ordered list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - later duplicates replace earlier ones, as with add_record
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

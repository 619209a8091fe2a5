//! Fuzzy matching implementation for record lookup.
//!
//! This module provides record matching with:
//! - Exact matching on phone numbers (after normalization)
//! - Fuzzy name matching (substring and Levenshtein similarity)
//! - Confidence scoring (0-100 scale)

use crate::domain::PHONE_DIGITS;
use crate::models::Record;

/// A match result referencing a record in the book and its confidence score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact phone match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Search query parameters for record matching.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    /// Name to search for
    pub name: Option<String>,

    /// Phone number to search for; formatting characters are ignored
    pub phone: Option<String>,
}

impl RecordQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_phone(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Default::default()
        }
    }
}

/// Record matcher with fuzzy name and exact phone matching.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordMatcher;

impl RecordMatcher {
    /// Create a new RecordMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find matching records based on the search query.
    ///
    /// # Arguments
    /// * `query` - Name and/or phone to look for
    /// * `records` - Records to search through
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence for fuzzy name matches (0-100)
    ///
    /// # Returns
    /// A vector of MatchResult, sorted by confidence (highest first)
    pub fn find_matches<'a, I>(
        &self,
        query: &RecordQuery,
        records: I,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let phone_query = query.phone.as_deref().map(Self::normalize_phone);
        let name_query = query.name.as_deref().map(Self::normalize_name);

        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for record in records {
            // Exact phone matches take priority over name similarity
            if let Some(phone) = &phone_query {
                if let Some(confidence) = Self::match_phone(phone, record) {
                    results.push(MatchResult {
                        record,
                        confidence,
                        match_type: MatchType::ExactPhone,
                    });
                    continue;
                }
            }

            if let Some(name) = &name_query {
                let target = Self::normalize_name(record.name().as_str());
                let confidence = Self::calculate_fuzzy_score(name, &target);
                if confidence > 0 && confidence >= min_confidence {
                    results.push(MatchResult {
                        record,
                        confidence,
                        match_type: MatchType::FuzzyName,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().cmp(b.record.name()))
        });

        results.truncate(max_results);

        results
    }

    /// Returns confidence 100 if any stored phone equals the normalized query.
    fn match_phone(normalized_query: &str, record: &Record) -> Option<u8> {
        if normalized_query.len() != PHONE_DIGITS {
            return None;
        }
        record
            .phones()
            .iter()
            .any(|p| p.as_str() == normalized_query)
            .then_some(100)
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        // Contains match (substring)
        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single-row dynamic programming
        let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut curr = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            curr[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[s2_chars.len()]
    }

    // ==================== Normalization Functions ====================

    /// Normalize a phone number for comparison.
    ///
    /// Extracts only digits and takes the last 10 digits (drops country codes).
    pub fn normalize_phone(phone: &str) -> String {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() > PHONE_DIGITS {
            digits[digits.len() - PHONE_DIGITS..].to_string()
        } else {
            digits
        }
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

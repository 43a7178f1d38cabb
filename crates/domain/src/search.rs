// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::sanitise;

/// Maximum accepted length of a sanitised search query.
pub const MAX_QUERY_LENGTH: usize = 100;

/// A classified member search term.
///
/// Queries beginning with `MBR-` (case-insensitive) are treated as exact
/// member-ID lookups; anything else is a fuzzy match against phone and name
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    /// Exact match on the member ID, upper-cased.
    MemberId(String),
    /// Substring match on phone, first name, last name, or the
    /// concatenated full name.
    Fuzzy(String),
}

impl SearchTerm {
    /// Classifies a raw query string into a search term.
    ///
    /// The query is sanitised first; classification then inspects the
    /// `MBR-` prefix case-insensitively. ID searches are normalised to
    /// upper case so that `mbr-0042` and `MBR-0042` resolve identically.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyQuery`] when the sanitised query is
    /// empty, or [`DomainError::QueryTooLong`] when it exceeds
    /// [`MAX_QUERY_LENGTH`] characters.
    pub fn classify(raw: &str) -> Result<Self, DomainError> {
        let query: String = sanitise(raw);
        if query.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        let length: usize = query.chars().count();
        if length > MAX_QUERY_LENGTH {
            return Err(DomainError::QueryTooLong {
                length,
                max: MAX_QUERY_LENGTH,
            });
        }
        // Byte-wise comparison: slicing the str could split a multi-byte
        // character and panic.
        let bytes: &[u8] = query.as_bytes();
        if bytes.len() >= 4 && bytes[..4].eq_ignore_ascii_case(b"MBR-") {
            Ok(Self::MemberId(query.to_ascii_uppercase()))
        } else {
            Ok(Self::Fuzzy(query))
        }
    }
}

// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The unified attendance ledger projection.
//!
//! Member and visitor check-ins are heterogeneous at rest but are read
//! back as one tagged sequence of [`LedgerRow`]s. The discriminant lives
//! on the row itself so the renderer and the sort operate on a single
//! uniform type rather than parallel code paths.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which kind of entity a ledger row records a check-in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// A registered member.
    Member,
    /// A walk-in visitor.
    Visitor,
}

impl EntryKind {
    /// Converts this kind to its display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Visitor => "Visitor",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One unified, read-only projection of a single check-in event.
///
/// Temporal fields carry the stored text representation: `service_date` is
/// `YYYY-MM-DD` and `check_in_time` is an ISO 8601 UTC timestamp. Both
/// orderings therefore coincide with lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Display name (member "first last" or visitor full name).
    pub name: String,
    /// Whether the entry belongs to a member or a visitor.
    pub kind: EntryKind,
    /// Phone number, or "-" when the visitor left none.
    pub phone: String,
    /// Stored gender value.
    pub gender: String,
    /// Stored service name.
    pub service: String,
    /// Calendar date of the service (`YYYY-MM-DD`).
    pub service_date: String,
    /// Check-in timestamp (ISO 8601, UTC), if recorded.
    pub check_in_time: Option<String>,
}

/// Sorts ledger rows by `service_date` descending, then `check_in_time`
/// descending, with absent check-in times after all dated rows.
///
/// The sort is stable, so rows that compare equal keep their storage order.
pub fn sort_ledger(rows: &mut [LedgerRow]) {
    rows.sort_by(|a, b| {
        b.service_date
            .cmp(&a.service_date)
            .then_with(|| match (&a.check_in_time, &b.check_in_time) {
                (Some(a_time), Some(b_time)) => b_time.cmp(a_time),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    });
}

// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A member row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberData {
    pub member_id: i64,
    /// Public member code in `MBR-NNNN` form.
    pub member_code: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gender: String,
    pub created_at: String,
}

impl MemberData {
    /// Returns the member's display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A visitor row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorData {
    pub visitor_id: i64,
    pub full_name: String,
    pub phone: Option<String>,
    pub gender: String,
    /// Whether this was the visitor's first time attending.
    pub first_time: bool,
    pub created_at: String,
}

/// Row counts removed by a ledger purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeCounts {
    /// Member check-in rows deleted.
    pub member_entries: usize,
    /// Visitor check-in rows deleted.
    pub visitor_entries: usize,
}

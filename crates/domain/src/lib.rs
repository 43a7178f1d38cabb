// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod ledger;
mod search;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use ledger::{EntryKind, LedgerRow, sort_ledger};
pub use search::SearchTerm;
pub use types::{Gender, Service};
pub use validation::{
    sanitise, validate_full_name, validate_member_id, validate_phone, validate_service_date,
    validate_visitor_gender,
};

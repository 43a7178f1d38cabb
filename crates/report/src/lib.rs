// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance history report rendering.
//!
//! Produces the downloadable PDF of the unified attendance ledger:
//! a dark, gold-accented table of every check-in, paginated with a
//! repeated column header and a continuation caption on follow-on
//! pages.
//!
//! Layout planning ([`layout`]) is separated from drawing ([`pdf`]) so
//! pagination arithmetic is testable without producing a document.

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
#![allow(
    clippy::multiple_crate_versions,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

mod error;
mod format;
mod layout;
mod pdf;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use format::{format_check_in_time, format_service_date, generated_label, truncate_to_width};
pub use layout::{PagePlan, plan_pages};
pub use pdf::render_history_pdf;

// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cell text formatting.
//!
//! Dates render as `23 Aug 2026`, times as 12-hour `08:45 am`. Values
//! that fail to parse fall back to the stored text rather than erroring
//! out of a whole report, and missing values render as an em dash.

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Placeholder for missing cell values.
pub const MISSING: &str = "\u{2014}";

/// Approximate average glyph width of Helvetica, as a fraction of the
/// font size. Used for width estimates without font metrics.
const AVG_GLYPH_WIDTH: f32 = 0.5;

const DATE_INPUT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const DATE_OUTPUT: &[BorrowedFormatItem<'_>] =
    format_description!("[day] [month repr:short] [year]");
const DATE_OUTPUT_LONG: &[BorrowedFormatItem<'_>] =
    format_description!("[day] [month repr:long] [year]");
const TIME_OUTPUT: &[BorrowedFormatItem<'_>] =
    format_description!("[hour repr:12 padding:zero]:[minute] [period case:lower]");

/// Formats a stored `YYYY-MM-DD` service date as `23 Aug 2026`.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_service_date(stored: &str) -> String {
    Date::parse(stored, DATE_INPUT)
        .ok()
        .and_then(|date| date.format(DATE_OUTPUT).ok())
        .unwrap_or_else(|| stored.to_string())
}

/// Formats a stored ISO 8601 check-in timestamp as 12-hour `08:45 am`.
///
/// A missing value renders as [`MISSING`]; unparseable input is
/// returned unchanged.
#[must_use]
pub fn format_check_in_time(stored: Option<&str>) -> String {
    let Some(stored) = stored else {
        return MISSING.to_string();
    };
    OffsetDateTime::parse(stored, &Rfc3339)
        .ok()
        .and_then(|ts| ts.format(TIME_OUTPUT).ok())
        .unwrap_or_else(|| stored.to_string())
}

/// Builds the `Generated: …` caption under the report title.
#[must_use]
pub fn generated_label(now: OffsetDateTime) -> String {
    let date: String = now
        .format(DATE_OUTPUT_LONG)
        .unwrap_or_else(|_| now.date().to_string());
    let time: String = now
        .format(TIME_OUTPUT)
        .unwrap_or_else(|_| now.time().to_string());
    format!("Generated: {date}  |  {time}")
}

/// Estimates the rendered width of `text` at `font_size` points.
#[must_use]
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let glyphs: f32 = text.chars().count() as f32;
    glyphs * font_size * AVG_GLYPH_WIDTH
}

/// Truncates `text` to fit `max_width` points at `font_size`, appending
/// an ellipsis when anything was cut.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: f32, font_size: f32) -> String {
    if text_width(text, font_size) <= max_width {
        return text.to_string();
    }

    let glyph_width: f32 = font_size * AVG_GLYPH_WIDTH;
    let budget: usize = (max_width / glyph_width) as usize;
    let keep: usize = budget.saturating_sub(1);

    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push('\u{2026}');
    truncated
}

// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Table geometry and pagination planning.
//!
//! All values are PDF points on a US-Letter page. The pagination plan is
//! computed here, separately from drawing, so page capacity and the
//! page-local stripe counter can be tested without rendering a document.

/// Page width in points (US Letter).
pub const PAGE_WIDTH: f32 = 612.0;
/// Page height in points (US Letter).
pub const PAGE_HEIGHT: f32 = 792.0;
/// Uniform page margin in points.
pub const MARGIN: f32 = 48.0;
/// Full table width between the margins.
pub const TABLE_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Height of one data row.
pub const ROW_HEIGHT: f32 = 22.0;
/// Height of the column header band.
pub const HEADER_HEIGHT: f32 = 26.0;
/// Minimum space that must remain below a row before a page break.
pub const PAGE_BREAK_SAFETY: f32 = 10.0;
/// Height of the gold accent bar across the top of every page.
pub const ACCENT_BAR_HEIGHT: f32 = 6.0;
/// Horizontal padding inside each cell.
pub const CELL_PADDING: f32 = 6.0;

/// Distance from the top of the first page to the table, leaving room
/// for the title block.
pub const FIRST_PAGE_TABLE_TOP: f32 = 150.0;
/// Top of the continuation caption on follow-on pages.
pub const CONTINUATION_CAPTION_TOP: f32 = MARGIN + 18.0;
/// Top of the table on follow-on pages.
pub const CONTINUATION_TABLE_TOP: f32 = CONTINUATION_CAPTION_TOP + 16.0;

/// Relative column widths: Name, Type, Phone, Gender, Service, Date, Check-in.
pub const COLUMN_WEIGHTS: [f32; 7] = [0.22, 0.10, 0.16, 0.10, 0.22, 0.10, 0.10];
/// Column header labels, in column order.
pub const COLUMN_LABELS: [&str; 7] = [
    "Name", "Type", "Phone", "Gender", "Service", "Date", "Check-in",
];

/// Computes absolute column widths from the relative weights.
///
/// The weights are normalised by their sum, so they need not add up to
/// exactly one.
#[must_use]
pub fn column_widths() -> [f32; 7] {
    let total: f32 = COLUMN_WEIGHTS.iter().sum();
    let mut widths: [f32; 7] = [0.0; 7];
    for (width, weight) in widths.iter_mut().zip(COLUMN_WEIGHTS.iter()) {
        *width = (weight / total) * TABLE_WIDTH;
    }
    widths
}

/// One page of the pagination plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    /// Index of the first ledger row on this page.
    pub first_row: usize,
    /// Number of ledger rows on this page.
    pub row_count: usize,
    /// Whether this page carries the continuation caption instead of
    /// the full title block.
    pub continuation: bool,
}

/// Splits `total_rows` ledger rows into pages.
///
/// Mirrors the drawing pass: each page starts with the column header
/// band, then takes rows while at least `ROW_HEIGHT + PAGE_BREAK_SAFETY`
/// points remain above the bottom margin. An empty ledger still yields
/// one page so the header band and empty notice can be drawn.
///
/// Row stripe parity is page-local: the caller derives even/odd from a
/// row's index within its page, not from its ledger index.
#[must_use]
pub fn plan_pages(total_rows: usize) -> Vec<PagePlan> {
    let mut pages: Vec<PagePlan> = Vec::new();
    let mut first_row: usize = 0;
    let mut continuation: bool = false;

    loop {
        let table_top: f32 = if continuation {
            CONTINUATION_TABLE_TOP
        } else {
            FIRST_PAGE_TABLE_TOP
        };

        let mut y: f32 = table_top + HEADER_HEIGHT;
        let mut row_count: usize = 0;
        while first_row + row_count < total_rows
            && PAGE_HEIGHT - MARGIN - y >= ROW_HEIGHT + PAGE_BREAK_SAFETY
        {
            y += ROW_HEIGHT;
            row_count += 1;
        }

        pages.push(PagePlan {
            first_row,
            row_count,
            continuation,
        });
        first_row += row_count;

        if first_row >= total_rows {
            break;
        }
        continuation = true;
    }

    pages
}

// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::datetime;

use checkin_domain::{EntryKind, LedgerRow};

use crate::format::{
    format_check_in_time, format_service_date, generated_label, truncate_to_width,
};
use crate::layout::{
    CONTINUATION_TABLE_TOP, FIRST_PAGE_TABLE_TOP, HEADER_HEIGHT, MARGIN, PAGE_HEIGHT, PagePlan,
    ROW_HEIGHT, column_widths, plan_pages,
};
use crate::pdf::render_history_pdf;

fn create_test_rows(count: usize) -> Vec<LedgerRow> {
    (0..count)
        .map(|i| LedgerRow {
            name: format!("Person {i}"),
            kind: if i % 2 == 0 {
                EntryKind::Member
            } else {
                EntryKind::Visitor
            },
            phone: String::from("0712345678"),
            gender: String::from("Female"),
            service: String::from("Sunday Morning Service"),
            service_date: String::from("2026-08-23"),
            check_in_time: Some(String::from("2026-08-23T08:45:00Z")),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[test]
fn test_empty_ledger_still_plans_one_page() {
    let plan: Vec<PagePlan> = plan_pages(0);

    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].row_count, 0);
    assert!(!plan[0].continuation);
}

#[test]
fn test_single_row_fits_on_first_page() {
    let plan: Vec<PagePlan> = plan_pages(1);

    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].row_count, 1);
}

#[test]
fn test_large_ledger_spills_to_continuation_pages() {
    let plan: Vec<PagePlan> = plan_pages(100);

    assert!(plan.len() > 1);
    assert!(!plan[0].continuation);
    assert!(plan.iter().skip(1).all(|page| page.continuation));
}

#[test]
fn test_plan_covers_every_row_exactly_once() {
    for total in [0, 1, 24, 25, 26, 53, 100, 500] {
        let plan: Vec<PagePlan> = plan_pages(total);

        let mut expected_first: usize = 0;
        for page in &plan {
            assert_eq!(page.first_row, expected_first);
            expected_first += page.row_count;
        }
        assert_eq!(expected_first, total);
    }
}

#[test]
fn test_rows_stay_above_the_bottom_margin() {
    for total in [0, 1, 24, 25, 26, 53, 100, 500] {
        for page in plan_pages(total) {
            let table_top: f32 = if page.continuation {
                CONTINUATION_TABLE_TOP
            } else {
                FIRST_PAGE_TABLE_TOP
            };
            let bottom: f32 = table_top + HEADER_HEIGHT + page.row_count as f32 * ROW_HEIGHT;

            assert!(
                bottom <= PAGE_HEIGHT - MARGIN,
                "{} rows: page overruns the bottom margin ({bottom})",
                total
            );
        }
    }
}

#[test]
fn test_continuation_pages_hold_more_rows_than_the_first() {
    // The title block takes space the continuation caption does not.
    let plan: Vec<PagePlan> = plan_pages(500);

    assert!(plan[1].row_count > plan[0].row_count);
}

#[test]
fn test_full_continuation_pages_have_equal_capacity() {
    let plan: Vec<PagePlan> = plan_pages(500);
    let full_pages = &plan[1..plan.len() - 1];

    assert!(full_pages.windows(2).all(|w| w[0].row_count == w[1].row_count));
}

#[test]
fn test_column_widths_span_the_table() {
    let widths: [f32; 7] = column_widths();
    let total: f32 = widths.iter().sum();

    assert!((total - crate::layout::TABLE_WIDTH).abs() < 0.01);
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn test_service_date_renders_short_month() {
    assert_eq!(format_service_date("2026-08-23"), "23 Aug 2026");
}

#[test]
fn test_unparseable_date_passes_through() {
    assert_eq!(format_service_date("not-a-date"), "not-a-date");
}

#[test]
fn test_check_in_time_renders_twelve_hour() {
    assert_eq!(
        format_check_in_time(Some("2026-08-23T08:45:00Z")),
        "08:45 am"
    );
    assert_eq!(
        format_check_in_time(Some("2026-08-23T18:05:00Z")),
        "06:05 pm"
    );
}

#[test]
fn test_missing_check_in_time_renders_dash() {
    assert_eq!(format_check_in_time(None), "\u{2014}");
}

#[test]
fn test_generated_label_has_long_month_and_time() {
    let now: OffsetDateTime = datetime!(2026-08-23 08:45:00 UTC);
    assert_eq!(generated_label(now), "Generated: 23 August 2026  |  08:45 am");
}

#[test]
fn test_truncate_keeps_short_text_unchanged() {
    assert_eq!(truncate_to_width("Short", 100.0, 8.0), "Short");
}

#[test]
fn test_truncate_appends_ellipsis() {
    let long: &str = "A very long visitor name that cannot fit";
    let shown: String = truncate_to_width(long, 40.0, 8.0);

    assert!(shown.ends_with('\u{2026}'));
    assert!(shown.chars().count() < long.chars().count());
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn test_render_produces_pdf_bytes() {
    let rows: Vec<LedgerRow> = create_test_rows(3);
    let bytes: Vec<u8> =
        render_history_pdf(&rows, datetime!(2026-08-23 10:00:00 UTC)).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_render_empty_ledger_succeeds() {
    let bytes: Vec<u8> =
        render_history_pdf(&[], datetime!(2026-08-23 10:00:00 UTC)).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_render_multi_page_ledger_succeeds() {
    let rows: Vec<LedgerRow> = create_test_rows(120);
    let bytes: Vec<u8> =
        render_history_pdf(&rows, datetime!(2026-08-23 10:00:00 UTC)).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    // Multi-page output is strictly larger than a single page of the same rows
    let single: Vec<u8> =
        render_history_pdf(&create_test_rows(3), datetime!(2026-08-23 10:00:00 UTC)).unwrap();
    assert!(bytes.len() > single.len());
}

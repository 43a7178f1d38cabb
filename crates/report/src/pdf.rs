// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! PDF document assembly.
//!
//! Draws the attendance history report onto the pagination plan from
//! [`crate::layout`]. The page is dark with gold accents; member rows
//! tag their type in green, visitor rows in gold.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Pt,
    Rect, Rgb,
};
use time::OffsetDateTime;
use tracing::debug;

use checkin_domain::{EntryKind, LedgerRow};

use crate::error::ReportError;
use crate::format::{
    format_check_in_time, format_service_date, generated_label, text_width, truncate_to_width,
};
use crate::layout::{
    ACCENT_BAR_HEIGHT, CELL_PADDING, COLUMN_LABELS, CONTINUATION_CAPTION_TOP,
    CONTINUATION_TABLE_TOP, FIRST_PAGE_TABLE_TOP, HEADER_HEIGHT, MARGIN, PAGE_HEIGHT, PAGE_WIDTH,
    PagePlan, ROW_HEIGHT, TABLE_WIDTH, column_widths, plan_pages,
};

const PAGE_BACKGROUND: Color = color(15, 15, 26);
const GOLD: Color = color(200, 170, 100);
const GOLD_DIM: Color = color(107, 90, 46);
const TEXT: Color = color(232, 224, 208);
const TEXT_DIM: Color = color(138, 130, 120);
const ROW_EVEN: Color = color(22, 22, 37);
const ROW_ODD: Color = color(30, 30, 50);
const HEADER_BACKGROUND: Color = color(26, 26, 46);
const MEMBER_GREEN: Color = color(94, 189, 122);

const TITLE: &str = "RFP Ministries";
const SUBTITLE: &str = "Raised For a Purpose";
const REPORT_NAME: &str = "Attendance History";
const CONTINUATION_CAPTION: &str = "RFP Ministries - Attendance History (continued)";
const EMPTY_NOTICE: &str = "No attendance records found.";

const fn color(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        icc_profile: None,
    })
}

/// Converts a distance from the page top into PDF coordinates.
fn from_top(offset: f32) -> Mm {
    Mm::from(Pt(PAGE_HEIGHT - offset))
}

struct Painter {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Painter {
    /// Fills a rectangle given its top-left corner in top-down coordinates.
    fn fill_rect(&self, x: f32, y_top: f32, width: f32, height: f32, fill: &Color) {
        self.layer.set_fill_color(fill.clone());
        let rect: Rect = Rect::new(
            Mm::from(Pt(x)),
            from_top(y_top + height),
            Mm::from(Pt(x + width)),
            from_top(y_top),
        )
        .with_mode(PaintMode::Fill);
        self.layer.add_rect(rect);
    }

    /// Strokes a horizontal rule across the table width.
    fn rule(&self, y_top: f32, stroke: &Color, thickness: f32) {
        self.layer.set_outline_color(stroke.clone());
        self.layer.set_outline_thickness(thickness);
        let line: Line = Line {
            points: vec![
                (Point::new(Mm::from(Pt(MARGIN)), from_top(y_top)), false),
                (
                    Point::new(Mm::from(Pt(MARGIN + TABLE_WIDTH)), from_top(y_top)),
                    false,
                ),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    /// Writes text with its baseline at the given distance from the top.
    fn text(&self, value: &str, size: f32, x: f32, baseline_top: f32, fill: &Color, bold: bool) {
        let font: &IndirectFontRef = if bold { &self.bold } else { &self.regular };
        self.layer.set_fill_color(fill.clone());
        self.layer
            .use_text(value, size, Mm::from(Pt(x)), from_top(baseline_top), font);
    }

    /// Writes text centered between the page margins.
    fn centered_text(&self, value: &str, size: f32, baseline_top: f32, fill: &Color, bold: bool) {
        let x: f32 = (PAGE_WIDTH - text_width(value, size)) / 2.0;
        self.text(value, size, x, baseline_top, fill, bold);
    }

    fn page_background(&self) {
        self.fill_rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT, &PAGE_BACKGROUND);
        self.fill_rect(0.0, 0.0, PAGE_WIDTH, ACCENT_BAR_HEIGHT, &GOLD);
    }

    fn title_block(&self, generated_at: OffsetDateTime) {
        self.centered_text(TITLE, 22.0, MARGIN + 22.0, &GOLD, true);
        self.centered_text(SUBTITLE, 10.0, MARGIN + 36.0, &TEXT_DIM, false);
        self.centered_text(REPORT_NAME, 15.0, MARGIN + 62.0, &TEXT, true);
        self.centered_text(
            &generated_label(generated_at),
            9.0,
            MARGIN + 76.0,
            &TEXT_DIM,
            false,
        );
        self.rule(MARGIN + 86.0, &GOLD_DIM, 0.7);
    }

    fn continuation_caption(&self) {
        self.centered_text(
            CONTINUATION_CAPTION,
            8.0,
            CONTINUATION_CAPTION_TOP + 8.0,
            &TEXT_DIM,
            false,
        );
    }

    fn table_header(&self, table_top: f32, widths: &[f32; 7]) {
        self.fill_rect(MARGIN, table_top, TABLE_WIDTH, HEADER_HEIGHT, &HEADER_BACKGROUND);
        self.rule(table_top, &GOLD, 1.0);

        let mut x: f32 = MARGIN;
        for (label, width) in COLUMN_LABELS.iter().zip(widths.iter()) {
            let cell_width: f32 = width - 2.0 * CELL_PADDING;
            let value: String = truncate_to_width(label, cell_width, 8.5);
            self.text(&value, 8.5, x + CELL_PADDING, table_top + 16.5, &GOLD, true);
            x += width;
        }
    }

    fn table_row(&self, y_top: f32, row: &LedgerRow, even: bool, widths: &[f32; 7]) {
        let stripe: &Color = if even { &ROW_EVEN } else { &ROW_ODD };
        self.fill_rect(MARGIN, y_top, TABLE_WIDTH, ROW_HEIGHT, stripe);

        let kind_color: &Color = match row.kind {
            EntryKind::Member => &MEMBER_GREEN,
            EntryKind::Visitor => &GOLD,
        };
        let cells: [(String, &Color); 7] = [
            (row.name.clone(), &TEXT),
            (row.kind.as_str().to_string(), kind_color),
            (row.phone.clone(), &TEXT),
            (row.gender.clone(), &TEXT),
            (row.service.clone(), &TEXT),
            (format_service_date(&row.service_date), &TEXT),
            (format_check_in_time(row.check_in_time.as_deref()), &TEXT),
        ];

        let mut x: f32 = MARGIN;
        for ((value, fill), width) in cells.iter().zip(widths.iter()) {
            let cell_width: f32 = width - 2.0 * CELL_PADDING;
            let shown: String = truncate_to_width(value, cell_width, 8.0);
            self.text(&shown, 8.0, x + CELL_PADDING, y_top + 15.0, fill, false);
            x += width;
        }
    }

    fn empty_notice(&self, table_top: f32) {
        self.centered_text(
            EMPTY_NOTICE,
            11.0,
            table_top + HEADER_HEIGHT + 28.0,
            &TEXT_DIM,
            false,
        );
    }
}

/// Renders the attendance history report and returns the PDF bytes.
///
/// # Arguments
///
/// * `rows` - The ledger, already sorted newest first
/// * `generated_at` - Timestamp shown in the report caption
///
/// # Errors
///
/// Returns an error if font registration or document serialization fails.
pub fn render_history_pdf(
    rows: &[LedgerRow],
    generated_at: OffsetDateTime,
) -> Result<Vec<u8>, ReportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "RFP Attendance History",
        Mm::from(Pt(PAGE_WIDTH)),
        Mm::from(Pt(PAGE_HEIGHT)),
        "content",
    );

    let regular: IndirectFontRef = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::FontError(e.to_string()))?;
    let bold: IndirectFontRef = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::FontError(e.to_string()))?;

    let widths: [f32; 7] = column_widths();
    let plan: Vec<PagePlan> = plan_pages(rows.len());
    debug!(rows = rows.len(), pages = plan.len(), "Rendering history report");

    for (page_index, page) in plan.iter().enumerate() {
        let layer: PdfLayerReference = if page_index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_ref, layer_ref) = doc.add_page(
                Mm::from(Pt(PAGE_WIDTH)),
                Mm::from(Pt(PAGE_HEIGHT)),
                "content",
            );
            doc.get_page(page_ref).get_layer(layer_ref)
        };

        let painter: Painter = Painter {
            layer,
            regular: regular.clone(),
            bold: bold.clone(),
        };

        painter.page_background();

        let table_top: f32 = if page.continuation {
            painter.continuation_caption();
            CONTINUATION_TABLE_TOP
        } else {
            painter.title_block(generated_at);
            FIRST_PAGE_TABLE_TOP
        };

        painter.table_header(table_top, &widths);

        let mut y: f32 = table_top + HEADER_HEIGHT;
        for page_local in 0..page.row_count {
            let row: &LedgerRow = &rows[page.first_row + page_local];
            // Stripe parity restarts on every page
            painter.table_row(y, row, page_local % 2 == 0, &widths);
            y += ROW_HEIGHT;
        }

        if rows.is_empty() {
            painter.empty_notice(table_top);
        }

        // The closing rule follows the final row of the document only
        if page_index == plan.len() - 1 {
            painter.rule(y + 12.0, &GOLD_DIM, 0.7);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| ReportError::RenderError(e.to_string()))
}

//! Minimal PDF writer for product listings
//!
//! Produces a PDF 1.4 file using the built-in Helvetica font: a title block,
//! one row per product and a totals line, split across as many A4 pages as
//! needed. Every page carries a "Page i of n" footer.

use chrono::Utc;
use rust_decimal::Decimal;

use inv_core::domain::entities::Product;
use inv_core::errors::DomainResult;
use inv_core::services::{ReportGenerator, ReportKind};

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_HEIGHT: f32 = 14.0;
const BODY_SIZE: f32 = 10.0;
const TITLE_SIZE: f32 = 16.0;
/// Space kept free above the footer
const BOTTOM_LIMIT: f32 = MARGIN + 40.0;
const FOOTER_Y: f32 = 30.0;
const MAX_NAME_CHARS: usize = 42;

const COLUMNS: [(f32, &str); 4] = [(50.0, "Name"), (310.0, "SKU"), (420.0, "Stock"), (480.0, "Price")];

struct TextRun {
    x: f32,
    y: f32,
    size: f32,
    text: String,
}

/// Renders reports as PDF documents
#[derive(Debug, Default, Clone)]
pub struct PdfReportGenerator;

impl PdfReportGenerator {
    pub fn new() -> Self {
        Self
    }

    fn layout(&self, kind: ReportKind, products: &[Product], generated_by: &str) -> Vec<Vec<TextRun>> {
        let mut pages = Vec::new();
        let mut page = Vec::new();
        let mut y = PAGE_HEIGHT - MARGIN;

        page.push(run(MARGIN, y, TITLE_SIZE, &kind.title()));
        y -= 24.0;
        let stamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        page.push(run(MARGIN, y, BODY_SIZE, &format!("Generated: {}", stamp)));
        y -= ROW_HEIGHT;
        page.push(run(MARGIN, y, BODY_SIZE, &format!("Generated by: {}", generated_by)));
        y -= 24.0;

        if products.is_empty() {
            page.push(run(MARGIN, y, BODY_SIZE, "No products match this report."));
            pages.push(page);
            return pages;
        }

        push_header(&mut page, y);
        y -= ROW_HEIGHT + 2.0;

        for product in products {
            if y < BOTTOM_LIMIT {
                pages.push(std::mem::take(&mut page));
                y = PAGE_HEIGHT - MARGIN;
                push_header(&mut page, y);
                y -= ROW_HEIGHT + 2.0;
            }
            push_row(&mut page, y, product);
            y -= ROW_HEIGHT;
        }

        if y < BOTTOM_LIMIT {
            pages.push(std::mem::take(&mut page));
            y = PAGE_HEIGHT - MARGIN;
        }
        page.push(run(MARGIN, y - 6.0, BODY_SIZE, &totals_line(products)));
        pages.push(page);

        pages
    }
}

impl ReportGenerator for PdfReportGenerator {
    fn render(&self, kind: ReportKind, products: &[Product], generated_by: &str) -> DomainResult<Vec<u8>> {
        let mut pages = self.layout(kind, products, generated_by);
        let count = pages.len();
        for (index, page) in pages.iter_mut().enumerate() {
            let footer = format!("Page {} of {}", index + 1, count);
            page.push(run(PAGE_WIDTH - MARGIN - 60.0, FOOTER_Y, 8.0, &footer));
        }

        Ok(write_document(&pages))
    }
}

fn run(x: f32, y: f32, size: f32, text: &str) -> TextRun {
    TextRun {
        x,
        y,
        size,
        text: text.to_string(),
    }
}

fn push_header(page: &mut Vec<TextRun>, y: f32) {
    for (x, label) in COLUMNS {
        page.push(run(x, y, BODY_SIZE, label));
    }
}

fn push_row(page: &mut Vec<TextRun>, y: f32, product: &Product) {
    let cells = [
        truncate(&product.name, MAX_NAME_CHARS),
        product.sku.clone().unwrap_or_else(|| "-".to_string()),
        product.stock_quantity.to_string(),
        format!("${:.2}", product.price),
    ];
    for ((x, _), cell) in COLUMNS.iter().zip(cells.iter()) {
        page.push(run(*x, y, BODY_SIZE, cell));
    }
}

fn totals_line(products: &[Product]) -> String {
    let units: i64 = products.iter().map(|p| i64::from(p.stock_quantity)).sum();
    let value: Decimal = products
        .iter()
        .map(|p| p.price * Decimal::from(p.stock_quantity))
        .sum();
    format!(
        "Total products: {}    Total units: {}    Total value: ${:.2}",
        products.len(),
        units,
        value
    )
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max - 3).collect();
    format!("{}...", head)
}

/// WinAnsiEncoding byte for a character, if the font can show it
fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        ' '..='~' | '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(byte)
}

/// Escape a PDF literal string
///
/// Bytes above 0x7e are written as `\ooo` octal escapes so the content
/// stream stays ASCII. Characters WinAnsi cannot represent become '?'.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match win_ansi_byte(c) {
            Some(b'\\') | Some(b'(') | Some(b')') => {
                escaped.push('\\');
                escaped.push(c);
            }
            Some(byte) if byte.is_ascii() => escaped.push(char::from(byte)),
            Some(byte) => escaped.push_str(&format!("\\{:03o}", byte)),
            None => escaped.push('?'),
        }
    }
    escaped
}

fn content_stream(runs: &[TextRun]) -> String {
    runs.iter()
        .map(|r| {
            format!(
                "BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
                r.size,
                r.x,
                r.y,
                escape_text(&r.text)
            )
        })
        .collect()
}

/// Serialize pages into a complete file with a valid cross-reference table
fn write_document(pages: &[Vec<TextRun>]) -> Vec<u8> {
    // 1 catalog, 2 page tree, 3 font, then a (page, contents) pair per page
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 4 + 2 * i).collect();
    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, pages.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>".to_string(),
    ];
    for (page, id) in pages.iter().zip(&page_ids) {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            PAGE_WIDTH,
            PAGE_HEIGHT,
            id + 1
        ));
        // ASCII only, so the byte length equals the string length
        let stream = content_stream(page);
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}endstream",
            stream.len(),
            stream
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", index + 1, body));
    }

    let xref_offset = out.len();
    out.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        out.push_str(&format!("{:010} 00000 n \n", offset));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));

    out.into_bytes()
}

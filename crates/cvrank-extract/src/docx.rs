//! Word document extractor.
//!
//! A `.docx` file is a ZIP archive of XML parts; docx-rs parses it into a
//! typed tree:
//!
//! ```text
//! Document
//!   ├── Paragraph → Run → Text
//!   │            └── Hyperlink → Run → Text
//!   └── Table → Row → Cell → Paragraph | Table
//! ```
//!
//! Each paragraph becomes one line of output. Legacy binary `.doc` files are
//! routed here as well and fail to parse.

use async_trait::async_trait;
use cvrank_core::{ContentExtractor, DocumentFormat, ExtractError};
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use tracing::debug;

/// Extractor for Word documents.
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new Word extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentExtractor for DocxExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Docx]
    }

    async fn extract_bytes(&self, data: &[u8]) -> Result<String, ExtractError> {
        // The docx-rs reader indexes attributes without checking and panics on
        // malformed XML; run it off the async task so a panic becomes a join error.
        let bytes = data.to_vec();
        let lines = tokio::task::spawn_blocking(move || docx_lines(&bytes))
            .await
            .map_err(|e| ExtractError::Failed(format!("Task join error: {e}")))?
            .map_err(|e| ExtractError::Parse(format!("Word document parse failed: {e}")))?;

        debug!("Extracted {} paragraphs from Word document", lines.len());
        Ok(lines.join("\n"))
    }
}

/// Parse a Word document and return one line per paragraph, in document order.
fn docx_lines(bytes: &[u8]) -> Result<Vec<String>, String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| e.to_string())?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => lines.push(paragraph_text(para)),
            DocumentChild::Table(table) => collect_table(table, &mut lines),
            _ => {}
        }
    }
    Ok(lines)
}

/// Collect one line per paragraph inside a table, descending into nested tables.
fn collect_table(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(para) => lines.push(paragraph_text(para)),
                    TableCellContent::Table(inner) => collect_table(inner, lines),
                    _ => {}
                }
            }
        }
    }
}

/// Concatenate the visible text of a paragraph's runs.
fn paragraph_text(para: &Paragraph) -> String {
    let mut out = String::new();
    push_children(&para.children, &mut out);
    out
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}

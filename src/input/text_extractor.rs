//! Text extraction from various file formats

use crate::error::{AtsError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            AtsError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;

        if text.trim().is_empty() {
            log::warn!("No text layer found in {}; scanned PDFs are not supported", path.display());
        }
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content.trim_start_matches('\u{feff}').to_string())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Flatten Markdown into resume-shaped plain text: headings and paragraphs
/// on their own lines, list items prefixed with `•` so bullet detection
/// still sees them.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut output = String::new();
    let mut list_depth = 0usize;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::List(_)) => {
                list_depth += 1;
                ensure_newline(&mut output);
            }
            Event::End(Tag::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                ensure_newline(&mut output);
            }
            Event::Start(Tag::Item) => {
                ensure_newline(&mut output);
                output.push_str("• ");
            }
            Event::Start(Tag::Paragraph) | Event::Start(Tag::Heading(..)) => {
                // Paragraphs inside a list item continue the bullet line
                if list_depth == 0 {
                    ensure_newline(&mut output);
                }
            }
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item)
            | Event::End(Tag::CodeBlock(_))
            | Event::End(Tag::TableRow)
            | Event::End(Tag::TableHead) => output.push('\n'),
            Event::End(Tag::TableCell) => output.push_str(" | "),
            Event::Text(text) | Event::Code(text) => output.push_str(&text),
            Event::SoftBreak | Event::HardBreak | Event::Rule => output.push('\n'),
            _ => {}
        }
    }

    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn ensure_newline(output: &mut String) {
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_headings_and_bullets() {
        let markdown = "# Jane Smith\n\njane@example.com | **Rust** developer\n\n## Experience\n\n### Engineer at Acme\n\n- Built `ingest` pipeline\n- Cut costs by 30%\n";
        let text = markdown_to_text(markdown);

        assert_eq!(
            text,
            "Jane Smith\njane@example.com | Rust developer\nExperience\nEngineer at Acme\n• Built ingest pipeline\n• Cut costs by 30%"
        );
    }

    #[test]
    fn test_loose_list_items_stay_on_one_line() {
        let text = markdown_to_text("- first item\n\n- second item\n");
        assert_eq!(text, "• first item\n• second item");
    }

    #[test]
    fn test_plain_paragraph_soft_breaks() {
        let text = markdown_to_text("line one\nline two");
        assert_eq!(text, "line one\nline two");
    }
}

//! Text extraction from various file formats

use crate::error::{CopilotError, Result};
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
            CopilotError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

/// Plain text, with invalid UTF-8 replaced rather than rejected
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let markdown_content = String::from_utf8_lossy(&bytes);
        Ok(self.markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    /// Walk the Markdown events and keep only the text. Every list item
    /// starts its own line with a `-` marker, tight or loose, so bullets
    /// survive extraction. Entities are decoded once, by the parser.
    pub fn markdown_to_text(&self, markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::Item) => {
                    start_line(&mut text);
                    text.push_str("- ");
                }
                Event::Start(Tag::Paragraph)
                | Event::Start(Tag::Heading(..))
                | Event::Start(Tag::CodeBlock(_)) => {
                    if !text.ends_with("- ") {
                        start_line(&mut text);
                    }
                }
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::CodeBlock(_))
                | Event::End(Tag::Item) => start_line(&mut text),
                Event::Text(content) | Event::Code(content) => text.push_str(&content),
                Event::SoftBreak => text.push(' '),
                Event::HardBreak => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && *line != "-")
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn start_line(text: &mut String) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_keeps_bullets() {
        let md = "# Jane Doe\n\n**IT Support**\n\n- Reset *Active Directory* passwords\n- Imaged laptops & desktops\n";
        let text = MarkdownExtractor.markdown_to_text(md);

        assert_eq!(
            text,
            "Jane Doe\nIT Support\n- Reset Active Directory passwords\n- Imaged laptops & desktops"
        );
    }

    #[test]
    fn test_loose_list_items_stay_on_marker_line() {
        let md = "Jane\n\n- Supported Windows desktop users daily\n\n- Reset Active Directory passwords weekly\n";
        let text = MarkdownExtractor.markdown_to_text(md);

        assert_eq!(
            text,
            "Jane\n- Supported Windows desktop users daily\n- Reset Active Directory passwords weekly"
        );
    }

    #[test]
    fn test_entities_decoded_once() {
        let md = "Use &amp;lt;br&amp;gt; tags at AT&amp;T";
        assert_eq!(MarkdownExtractor.markdown_to_text(md), "Use &lt;br&gt; tags at AT&T");
    }
}

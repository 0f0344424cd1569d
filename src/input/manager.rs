//! Input manager for handling files and pasted text

use crate::error::{CopilotError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{info, warn};
use std::io::{BufRead, Write};
use std::path::Path;

/// Consecutive blank lines that end a paste
const PASTE_TERMINATOR_LINES: usize = 2;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read and trim a file, failing when it does not exist
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CopilotError::InvalidInput(format!(
                "Missing file: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(CopilotError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        Ok(text.trim().to_string())
    }

    /// Like `extract_text`, but a missing file reads as empty text
    pub async fn extract_text_optional(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            warn!("Fallback file not found: {}", path.display());
            return Ok(String::new());
        }
        self.extract_text(path).await
    }
}

/// Prompt for pasted text and read it until two consecutive blank lines or
/// end of input. Blank lines inside the paste are dropped.
pub fn collect_pasted_input<R, W>(prompt: &str, reader: &mut R, writer: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "{}", prompt)?;
    writeln!(writer, "(Press Enter twice to submit)\n")?;
    writer.flush()?;

    let mut lines: Vec<String> = Vec::new();
    let mut empty_count = 0;
    let mut buffer = String::new();

    loop {
        buffer.clear();
        if reader.read_line(&mut buffer)? == 0 {
            break;
        }

        let line = buffer.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            empty_count += 1;
            if empty_count >= PASTE_TERMINATOR_LINES {
                break;
            }
        } else {
            empty_count = 0;
            lines.push(line.to_string());
        }
    }

    Ok(lines.join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_paste_ends_on_two_blank_lines() {
        let mut input = Cursor::new("Jane Doe\n\n- Reset passwords\n\n\nnot read\n");
        let mut prompt = Vec::new();

        let text = collect_pasted_input("Paste RESUME text now:", &mut input, &mut prompt).unwrap();

        assert_eq!(text, "Jane Doe\n- Reset passwords");
        let shown = String::from_utf8(prompt).unwrap();
        assert!(shown.starts_with("Paste RESUME text now:\n(Press Enter twice to submit)"));
    }

    #[test]
    fn test_paste_stops_at_eof() {
        let mut input = Cursor::new("Only line");
        let mut sink = Vec::new();

        let text = collect_pasted_input("Paste:", &mut input, &mut sink).unwrap();
        assert_eq!(text, "Only line");
    }

    #[test]
    fn test_empty_paste() {
        let mut input = Cursor::new("\n\n");
        let mut sink = Vec::new();

        assert_eq!(collect_pasted_input("Paste:", &mut input, &mut sink).unwrap(), "");
    }
}

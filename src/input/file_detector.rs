//! File type detection

use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" | "text" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    /// Files without an extension are read as plain text
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => FileType::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection() {
        assert_eq!(FileType::from_path(Path::new("resume.PDF")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("job_posting.txt")), FileType::Text);
        assert_eq!(FileType::from_path(Path::new("notes.markdown")), FileType::Markdown);
        assert_eq!(FileType::from_path(Path::new("posting")), FileType::Text);
        assert_eq!(FileType::from_path(Path::new("resume.docx")), FileType::Unknown);
    }
}

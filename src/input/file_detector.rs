//! Input file type detection

use crate::error::{Result, ResumeAnalyzerError};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(FileType::Pdf),
            "txt" | "text" => Some(FileType::Text),
            "md" | "markdown" => Some(FileType::Markdown),
            _ => None,
        }
    }

    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeAnalyzerError::UnsupportedFormat(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        Self::from_extension(extension).ok_or_else(|| {
            ResumeAnalyzerError::UnsupportedFormat(format!(
                "Unsupported file type '.{}' for {} (expected .txt, .md or .pdf)",
                extension,
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(FileType::detect(Path::new("cv.PDF")).unwrap(), FileType::Pdf);
        assert_eq!(FileType::detect(Path::new("cv.markdown")).unwrap(), FileType::Markdown);
        assert!(matches!(
            FileType::detect(Path::new("cv.docx")),
            Err(ResumeAnalyzerError::UnsupportedFormat(_))
        ));
        assert!(FileType::detect(Path::new("README")).is_err());
    }
}

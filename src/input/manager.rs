//! Reads resume, job description and LinkedIn summary files

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached) = self.cache.get(path) {
                debug!("Using cached text for {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::detect(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Reading markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }
        Ok(text)
    }

    /// Read an optional file, e.g. the job description.
    pub async fn extract_optional(&mut self, path: Option<&Path>) -> Result<Option<String>> {
        match path {
            Some(path) => self.extract_text(path).await.map(Some),
            None => Ok(None),
        }
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reads_and_caches() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.md");
        std::fs::write(&path, "# Jane Roe\n\n- Led a team\n").unwrap();

        let mut manager = InputManager::new();
        let text = manager.extract_text(&path).await.unwrap();
        assert_eq!(text, "Jane Roe\n- Led a team");
        assert_eq!(manager.cache_size(), 1);

        std::fs::remove_file(&path).unwrap();
        assert_eq!(manager.extract_text(&path).await.unwrap(), text);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let mut manager = InputManager::new().with_cache(false);
        let err = manager
            .extract_text(Path::new("/nonexistent/resume.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResumeAnalyzerError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, "binary").unwrap();
        let err = InputManager::new().extract_text(&path).await.unwrap_err();
        assert!(matches!(err, ResumeAnalyzerError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_optional_none() {
        assert!(InputManager::new().extract_optional(None).await.unwrap().is_none());
    }
}

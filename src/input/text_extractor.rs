//! Text extraction from resume and job description files

use crate::error::{Result, ResumeAnalyzerError};
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

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown))
    }
}

/// Flatten markdown to plain lines. List items keep a leading "- " and
/// headings, paragraphs and items each end their line.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Item) => {
                end_line(&mut text);
                text.push_str("- ");
            }
            Event::Start(Tag::Heading(..)) | Event::Start(Tag::Paragraph) => end_line(&mut text),
            Event::End(Tag::Heading(..))
            | Event::End(Tag::Paragraph)
            | Event::End(Tag::Item)
            | Event::End(Tag::TableRow)
            | Event::End(Tag::TableHead) => end_line(&mut text),
            Event::End(Tag::TableCell) => text.push_str(" | "),
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::Rule => end_line(&mut text),
            _ => {}
        }
    }

    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn end_line(text: &mut String) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_keeps_structure() {
        let markdown = "# Jane Roe\n\n**Software Engineer** | [GitHub](https://github.com/jane)\n\n## Experience\n\n- Increased revenue by 20%\n- Led a team of `5` engineers\n";
        let text = markdown_to_text(markdown);
        assert_eq!(
            text,
            "Jane Roe\nSoftware Engineer | GitHub\nExperience\n- Increased revenue by 20%\n- Led a team of 5 engineers"
        );
    }

    #[test]
    fn test_nested_items() {
        let text = markdown_to_text("- Skills\n  - Rust\n  - Go\n");
        assert_eq!(text, "- Skills\n- Rust\n- Go");
    }

    #[tokio::test]
    async fn test_plain_text_extractor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane Roe\nEngineer").unwrap();
        assert_eq!(PlainTextExtractor.extract(&path).await.unwrap(), "Jane Roe\nEngineer");
    }
}

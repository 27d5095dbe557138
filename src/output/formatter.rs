//! Console, JSON and Markdown renderings of an analysis report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Colored terminal output.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter for a requested output format.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = score_badge(score);
        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_list(&self, output: &mut String, title: &str, items: &[String], color: Color) {
        if items.is_empty() {
            return;
        }
        output.push_str(&self.format_header(title, 3));
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }
}

fn score_badge(score: u8) -> (&'static str, Color) {
    match score {
        90..=100 => ("EXCELLENT", Color::Green),
        80..=89 => ("VERY GOOD", Color::BrightGreen),
        70..=79 => ("GOOD", Color::Yellow),
        60..=69 => ("FAIR", Color::BrightYellow),
        50..=59 => ("BELOW AVG", Color::Red),
        _ => ("POOR", Color::BrightRed),
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let metadata = &report.metadata;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Resume: {} | Generated: {} | Analyzed by: {} | {}ms\n",
            metadata.resume_name,
            metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            metadata.strategy,
            metadata.processing_time_ms
        ));
        if let Some(id) = &report.analysis_id {
            output.push_str(&format!("Analysis ID: {}\n", id));
        }

        output.push_str(&self.format_header("Scores", 2));
        output.push_str(&format!(
            "Overall Score:   {:>3}/100 {}\n",
            result.score,
            self.format_score_badge(result.score)
        ));
        output.push_str(&format!(
            "ATS Compatibility: {:>3}/100 {}\n",
            result.ats_score,
            self.format_score_badge(result.ats_score)
        ));
        if !result.summary.is_empty() {
            output.push_str(&format!("\n{}\n", self.colorize(&result.summary, Color::Cyan)));
        }

        if !result.suggestions.is_empty() {
            output.push_str(&self.format_header("Suggestions", 2));
            for (i, suggestion) in result.suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {} {}\n",
                    i + 1,
                    self.colorize(&suggestion.issue, Color::White),
                    self.colorize(&format!("({})", suggestion.section), Color::BrightBlack)
                ));
                output.push_str(&format!("   {}\n", suggestion.improvement));
            }
        }

        output.push_str(&self.format_header("Keywords", 2));
        let matched = if result.keywords.matched.is_empty() {
            "none".to_string()
        } else {
            result.keywords.matched.join(", ")
        };
        output.push_str(&format!("Matched: {}\n", self.colorize(&matched, Color::Green)));
        if !result.keywords.missing.is_empty() {
            output.push_str(&format!(
                "Missing: {}\n",
                self.colorize(&result.keywords.missing.join(", "), Color::Red)
            ));
        }

        self.format_list(&mut output, "Red Flags", &result.red_flags, Color::Red);
        self.format_list(&mut output, "Buzzwords", &result.buzzwords, Color::Yellow);
        self.format_list(
            &mut output,
            "Recommended Formats",
            &result.recommended_formats,
            Color::Cyan,
        );

        if let Some(entries) = result.linkedin_consistency.as_ref().filter(|e| !e.is_empty()) {
            output.push_str(&self.format_header("LinkedIn Consistency", 3));
            for entry in entries {
                output.push_str(&format!(
                    "  • {} {}\n",
                    self.colorize(&format!("[{}]", entry.field), Color::BrightBlack),
                    entry.issue
                ));
            }
        }

        if self.detailed {
            if let Some(details) = &report.details {
                output.push_str(&self.format_header("Detailed Analysis", 2));
                output.push_str(&self.format_header("Score Breakdown", 3));
                for (name, points, cap) in details.breakdown.components() {
                    output.push_str(&format!("  {:<24} {:>3} / {}\n", name, points, cap));
                }
                output.push_str(&format!("  {:<24} {:>3}\n", "penalties", -details.breakdown.penalties));
                output.push_str(&format!("  {:<24} {:>+3}\n", "bonuses", details.breakdown.bonuses));

                output.push_str(&self.format_header("ATS Checklist", 3));
                for factor in &details.ats.factors {
                    let mark = if factor.passed {
                        self.colorize("✓", Color::Green)
                    } else {
                        self.colorize("✗", Color::Red)
                    };
                    output.push_str(&format!("  {} {}\n", mark, factor.name));
                }

                self.format_list(
                    &mut output,
                    "Impact Statements",
                    &details.impact_statements,
                    Color::Green,
                );
            }
        }

        output.push('\n');
        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn bullet_section(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("## {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# Resume Analysis Report\n\n");
        output.push_str("| Metric | Score | Rating |\n|---|---|---|\n");
        output.push_str(&format!(
            "| Overall | {}/100 | {} |\n",
            result.score,
            score_badge(result.score).0
        ));
        output.push_str(&format!(
            "| ATS compatibility | {}/100 | {} |\n\n",
            result.ats_score,
            score_badge(result.ats_score).0
        ));

        if !result.summary.is_empty() {
            output.push_str(&format!("> {}\n\n", result.summary));
        }

        if !result.suggestions.is_empty() {
            output.push_str("## Suggestions\n\n");
            for (i, suggestion) in result.suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "{}. **{}** *({})*  \n   {}\n",
                    i + 1,
                    suggestion.issue,
                    suggestion.section,
                    suggestion.improvement
                ));
            }
            output.push('\n');
        }

        output.push_str("## Keywords\n\n");
        output.push_str(&format!(
            "- **Matched:** {}\n",
            if result.keywords.matched.is_empty() {
                "none".to_string()
            } else {
                result.keywords.matched.join(", ")
            }
        ));
        if !result.keywords.missing.is_empty() {
            output.push_str(&format!("- **Missing:** {}\n", result.keywords.missing.join(", ")));
        }
        output.push('\n');

        Self::bullet_section(&mut output, "Red Flags", &result.red_flags);
        Self::bullet_section(&mut output, "Buzzwords", &result.buzzwords);
        Self::bullet_section(&mut output, "Recommended Formats", &result.recommended_formats);

        if let Some(entries) = result.linkedin_consistency.as_ref().filter(|e| !e.is_empty()) {
            let lines: Vec<String> = entries
                .iter()
                .map(|e| format!("**{}**: {}", e.field, e.issue))
                .collect();
            Self::bullet_section(&mut output, "LinkedIn Consistency", &lines);
        }

        if self.include_metadata {
            let metadata = &report.metadata;
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated {} by resume-analyzer v{} using the {} strategy for `{}`.*\n",
                metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                metadata.version,
                metadata.strategy,
                metadata.resume_name
            ));
            if let Some(id) = &report.analysis_id {
                output.push_str(&format!("*Analysis ID: `{}`*\n", id));
            }
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };
    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisOutcome, AnalysisRequest, LinkedInConsistency};
    use crate::output::report::ScoreDetails;
    use crate::scoring::Scorer;

    fn sample_report() -> AnalysisReport {
        let request = AnalysisRequest::new("Jane Roe\njane@example.com\nExperience:\n- Increased revenue by 20%");
        let score_report = Scorer::new().report(&request).unwrap();
        let mut result = score_report.result.clone();
        result.linkedin_consistency = Some(vec![LinkedInConsistency {
            field: "headline".to_string(),
            issue: "Headlines differ".to_string(),
        }]);
        let outcome = AnalysisOutcome {
            result,
            analysis_id: Some("abc-123".to_string()),
            strategy: "local".to_string(),
        };
        AnalysisReport::new(outcome, "resume.txt", 12).with_details(ScoreDetails::from(&score_report))
    }

    #[test]
    fn test_console_plain() {
        let output = ConsoleFormatter::new(false, true)
            .format_report(&sample_report())
            .unwrap();
        assert!(output.contains("RESUME ANALYSIS"));
        assert!(output.contains("Analysis ID: abc-123"));
        assert!(output.contains("ATS Checklist"));
        assert!(output.contains("[headline] Headlines differ"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_console_hides_details_unless_detailed() {
        let output = ConsoleFormatter::new(false, false)
            .format_report(&sample_report())
            .unwrap();
        assert!(!output.contains("ATS Checklist"));
    }

    #[test]
    fn test_json_contains_result_and_id() {
        let output = JsonFormatter::new(false).format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["result"]["score"].is_u64());
        assert!(value["result"]["ats_score"].is_u64());
        assert_eq!(value["analysis_id"], "abc-123");
    }

    #[test]
    fn test_markdown() {
        let output = MarkdownFormatter::new(true).format_report(&sample_report()).unwrap();
        assert!(output.starts_with("# Resume Analysis Report"));
        assert!(output.contains("## Suggestions"));
        assert!(output.contains("**headline**: Headlines differ"));
        assert!(output.contains("`abc-123`"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Markdown, "/tmp/jane_resume.pdf", false),
            "jane_resume_analysis.md"
        );
        let stamped = suggest_filename(&OutputFormat::Json, "cv.txt", true);
        assert!(stamped.starts_with("cv_analysis_"));
        assert!(stamped.ends_with(".json"));
    }

    #[test]
    fn test_save_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");
        save_report_to_file("content", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "content");
    }
}

//! Persisting analysis results per user

use crate::error::{Result, ResumeAnalyzerError};
use crate::model::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub analysis_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub strategy: String,
    pub result: AnalysisResult,
}

/// Where finished analyses are kept. Called from a blocking task.
pub trait AnalysisStore: Send + Sync {
    fn save(&self, record: &StoredAnalysis) -> Result<()>;
}

/// One pretty-printed JSON file per analysis under `<root>/<user_id>/`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, user_id: &str, analysis_id: &str) -> PathBuf {
        self.root
            .join(sanitize_component(user_id))
            .join(format!("{}.json", sanitize_component(analysis_id)))
    }

    pub fn load(&self, user_id: &str, analysis_id: &str) -> Result<StoredAnalysis> {
        let content = std::fs::read_to_string(self.path_for(user_id, analysis_id))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Every stored analysis for a user, oldest first.
    pub fn list(&self, user_id: &str) -> Result<Vec<StoredAnalysis>> {
        let dir = self.root.join(sanitize_component(user_id));
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = std::fs::read_to_string(&path)?;
            records.push(serde_json::from_str::<StoredAnalysis>(&content)?);
        }
        records.sort_by_key(|r| r.created_at);
        Ok(records)
    }
}

impl AnalysisStore for JsonFileStore {
    fn save(&self, record: &StoredAnalysis) -> Result<()> {
        let path = self.path_for(&record.user_id, &record.analysis_id);
        let parent = path.parent().ok_or_else(|| {
            ResumeAnalyzerError::Storage(format!("No parent directory for {}", path.display()))
        })?;
        std::fs::create_dir_all(parent)?;

        let content = serde_json::to_string_pretty(record)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

/// Reduce an identifier to characters safe in a single path component.
pub fn sanitize_component(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        "anonymous".to_string()
    } else {
        trimmed.to_string()
    }
}

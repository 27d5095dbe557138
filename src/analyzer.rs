//! Top-level analysis orchestration

use crate::config::Config;
use crate::error::{Result, ResumeAnalyzerError};
use crate::llm::{AnalysisStrategy, LocalStrategy, RemoteProvider, RemoteStrategy};
use crate::model::{AnalysisOutcome, AnalysisRequest, AnalysisResult};
use crate::storage::{AnalysisStore, JsonFileStore, StoredAnalysis};
use chrono::Utc;
use log::{debug, error, info, warn};
use std::sync::Arc;
use uuid::Uuid;

pub const DEGRADED_STRATEGY: &str = "degraded";

/// Runs strategies in order and returns the first result.
pub struct ResumeAnalyzer {
    strategies: Vec<Arc<dyn AnalysisStrategy>>,
    store: Option<Arc<dyn AnalysisStore>>,
}

impl ResumeAnalyzer {
    /// Local heuristic only, no persistence.
    pub fn local_only() -> Self {
        Self::with_strategies(vec![Arc::new(LocalStrategy::new())])
    }

    /// `[primary?, secondary?, local]`, skipping providers without a key.
    pub fn from_config(config: &Config, local_only: bool) -> Self {
        let mut strategies: Vec<Arc<dyn AnalysisStrategy>> = Vec::new();

        if !local_only {
            for provider_config in config.enabled_providers() {
                match RemoteProvider::from_config(provider_config) {
                    Ok(Some(provider)) => {
                        info!("Using remote provider {}", provider_config.name);
                        strategies.push(Arc::new(RemoteStrategy::new(Arc::new(provider))));
                    }
                    Ok(None) => {}
                    Err(e) => warn!(
                        "Could not build HTTP client for {}: {}",
                        provider_config.name, e
                    ),
                }
            }
        }
        strategies.push(Arc::new(LocalStrategy::new()));

        let analyzer = Self::with_strategies(strategies);
        if config.storage.enabled {
            analyzer.with_store(Arc::new(JsonFileStore::new(&config.storage.directory)))
        } else {
            analyzer
        }
    }

    pub fn with_strategies(strategies: Vec<Arc<dyn AnalysisStrategy>>) -> Self {
        Self {
            strategies,
            store: None,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn AnalysisStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Analyze a resume. Fails only when the resume text is empty.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisOutcome> {
        if !request.has_resume_content() {
            return Err(ResumeAnalyzerError::Validation(
                "Resume content is required".to_string(),
            ));
        }

        let (result, strategy) = self.run_strategies(request).await;

        let analysis_id = match (&request.user_id, &self.store) {
            (Some(user_id), Some(store)) => {
                let analysis_id = Uuid::new_v4().to_string();
                self.persist(
                    Arc::clone(store),
                    StoredAnalysis {
                        analysis_id: analysis_id.clone(),
                        user_id: user_id.clone(),
                        created_at: Utc::now(),
                        strategy: strategy.clone(),
                        result: result.clone(),
                    },
                );
                Some(analysis_id)
            }
            _ => None,
        };

        Ok(AnalysisOutcome {
            result,
            analysis_id,
            strategy,
        })
    }

    async fn run_strategies(&self, request: &AnalysisRequest) -> (AnalysisResult, String) {
        for strategy in &self.strategies {
            debug!("Trying strategy {}", strategy.name());
            match strategy.analyze(request).await {
                Ok(result) => {
                    info!("Analysis produced by {}", strategy.name());
                    return (result.enforce_bounds(), strategy.name().to_string());
                }
                Err(e) => warn!("Strategy {} failed: {}", strategy.name(), e),
            }
        }

        warn!("All strategies failed, returning degraded result");
        (AnalysisResult::degraded(), DEGRADED_STRATEGY.to_string())
    }

    /// Fire-and-forget save; failures are logged only.
    ///
    /// The save is not awaited. A blocking task that has not started when the
    /// runtime shuts down is dropped, so a returned `analysis_id` may never
    /// reach the store.
    fn persist(&self, store: Arc<dyn AnalysisStore>, record: StoredAnalysis) {
        let save = move || {
            if let Err(e) = store.save(&record) {
                error!(
                    "Failed to persist analysis {} for {}: {}",
                    record.analysis_id, record.user_id, e
                );
            }
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(save);
            }
            Err(_) => save(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;

    fn config_without_keys() -> Config {
        let mut config = Config::default();
        for provider in [&mut config.providers.primary, &mut config.providers.secondary]
            .into_iter()
            .flatten()
        {
            provider.api_key_env = "RESUME_ANALYZER_ANALYZER_TEST_UNSET".to_string();
        }
        config.storage = StorageConfig {
            enabled: false,
            ..StorageConfig::default()
        };
        config
    }

    #[test]
    fn test_unconfigured_providers_leave_local_only() {
        let analyzer = ResumeAnalyzer::from_config(&config_without_keys(), false);
        assert_eq!(analyzer.strategy_names(), vec!["local"]);
    }

    #[test]
    fn test_local_only_flag_skips_providers() {
        let mut config = config_without_keys();
        if let Some(primary) = config.providers.primary.as_mut() {
            // PATH is always set, so it stands in for an API key here
            primary.api_key_env = "PATH".to_string();
        }
        let analyzer = ResumeAnalyzer::from_config(&config, true);
        assert_eq!(analyzer.strategy_names(), vec!["local"]);

        let analyzer = ResumeAnalyzer::from_config(&config, false);
        assert_eq!(analyzer.strategy_names(), vec!["openai", "local"]);
    }

    #[tokio::test]
    async fn test_empty_resume_is_validation_error() {
        let err = ResumeAnalyzer::local_only()
            .analyze(&AnalysisRequest::new("  \n "))
            .await
            .unwrap_err();
        assert!(matches!(err, ResumeAnalyzerError::Validation(_)));
        assert_eq!(err.to_string(), "Resume content is required");
    }

    #[tokio::test]
    async fn test_no_analysis_id_without_store() {
        let outcome = ResumeAnalyzer::local_only()
            .analyze(&AnalysisRequest::new("Jane Roe").with_user_id("u1"))
            .await
            .unwrap();
        assert!(outcome.analysis_id.is_none());
        assert_eq!(outcome.strategy, "local");
    }

    #[tokio::test]
    async fn test_empty_chain_is_degraded() {
        let outcome = ResumeAnalyzer::with_strategies(Vec::new())
            .analyze(&AnalysisRequest::new("Jane Roe"))
            .await
            .unwrap();
        assert_eq!(outcome.result, AnalysisResult::degraded());
        assert_eq!(outcome.strategy, DEGRADED_STRATEGY);
    }
}

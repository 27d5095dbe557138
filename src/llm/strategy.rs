//! Analysis strategies tried in order by the analyzer

use crate::error::AnalysisError;
use crate::llm::prompts::PromptTemplates;
use crate::llm::provider::TextGenerator;
use crate::llm::response::{blend, parse_analysis, sentiment_adjustment};
use crate::model::{AnalysisRequest, AnalysisResult};
use crate::scoring::Scorer;
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

#[async_trait]
pub trait AnalysisStrategy: Send + Sync {
    fn name(&self) -> &str;

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}

/// Remote provider with the local scorer as a sentiment-blend fallback for
/// replies that carry no usable JSON object.
pub struct RemoteStrategy {
    generator: Arc<dyn TextGenerator>,
    templates: PromptTemplates,
    scorer: Scorer,
}

impl RemoteStrategy {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            templates: PromptTemplates::default(),
            scorer: Scorer::new(),
        }
    }
}

#[async_trait]
impl AnalysisStrategy for RemoteStrategy {
    fn name(&self) -> &str {
        self.generator.name()
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let prompt = self.templates.render_analysis(request);
        let text = self.generator.generate(&prompt).await?;

        match parse_analysis(&text) {
            Ok(result) => Ok(result),
            Err(shape_error) => {
                let adjustment = sentiment_adjustment(&text);
                info!(
                    "{} reply not usable as JSON ({}); blending sentiment {:+} into local score",
                    self.name(),
                    shape_error,
                    adjustment
                );
                let local = self.scorer.analyze(request)?;
                Ok(blend(local, adjustment))
            }
        }
    }
}

pub const LOCAL_STRATEGY: &str = "local";

/// The local heuristic scorer alone.
#[derive(Debug, Default)]
pub struct LocalStrategy {
    scorer: Scorer,
}

impl LocalStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStrategy for LocalStrategy {
    fn name(&self) -> &str {
        LOCAL_STRATEGY
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        debug!("Running local heuristic scorer");
        self.scorer.analyze(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        fn name(&self) -> &str {
            "canned"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, AnalysisError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, AnalysisError> {
            Err(AnalysisError::EmptyResponse("failing".to_string()))
        }
    }

    const RESUME: &str = "Jane Roe\njane@example.com\n555-123-4567\nExperience:\n- Increased revenue by 20%";

    #[tokio::test]
    async fn test_remote_json_is_used() {
        let strategy = RemoteStrategy::new(Arc::new(CannedGenerator(
            "Here you go: {\"score\": 88, \"ats_score\": 74, \"summary\": \"Great\"}",
        )));
        let result = strategy.analyze(&AnalysisRequest::new(RESUME)).await.unwrap();
        assert_eq!(result.score, 88);
        assert_eq!(result.ats_score, 74);
        assert_eq!(strategy.name(), "canned");
    }

    #[tokio::test]
    async fn test_prose_reply_blends_into_local_score() {
        let request = AnalysisRequest::new(RESUME);
        let local = Scorer::new().analyze(&request).unwrap();

        let strategy = RemoteStrategy::new(Arc::new(CannedGenerator(
            "The resume is weak, vague and lacks detail.",
        )));
        let result = strategy.analyze(&request).await.unwrap();

        let expected = (i32::from(local.score) - 6).clamp(0, 100);
        assert_eq!(i32::from(result.score), expected);
        assert_eq!(result.suggestions, local.suggestions);
    }

    #[tokio::test]
    async fn test_generator_error_propagates() {
        let strategy = RemoteStrategy::new(Arc::new(FailingGenerator));
        assert!(strategy.analyze(&AnalysisRequest::new(RESUME)).await.is_err());
    }

    #[tokio::test]
    async fn test_local_strategy() {
        let strategy = LocalStrategy::new();
        assert_eq!(strategy.name(), "local");
        let result = strategy.analyze(&AnalysisRequest::new(RESUME)).await.unwrap();
        assert!(result.score <= 100);
    }
}

//! Resume analyzer library
//!
//! Scores resume text locally with regex and keyword heuristics, optionally
//! asking remote text-generation providers first and falling back in order.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod model;
pub mod output;
pub mod patterns;
pub mod processing;
pub mod scoring;
pub mod storage;

pub use analyzer::ResumeAnalyzer;
pub use config::Config;
pub use error::{AnalysisError, Result, ResumeAnalyzerError};
pub use input::InputManager;
pub use llm::{AnalysisStrategy, LocalStrategy, RemoteProvider, RemoteStrategy, TextGenerator};
pub use model::{
    AnalysisOutcome, AnalysisRequest, AnalysisResult, Keywords, LinkedInConsistency, Suggestion,
};
pub use scoring::Scorer;
pub use storage::{AnalysisStore, JsonFileStore, StoredAnalysis};

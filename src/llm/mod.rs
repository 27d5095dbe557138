//! Remote analysis: prompts, providers, response parsing and strategies

pub mod prompts;
pub mod provider;
pub mod response;
pub mod strategy;

pub use provider::{RemoteProvider, TextGenerator};
pub use strategy::{AnalysisStrategy, LocalStrategy, RemoteStrategy};

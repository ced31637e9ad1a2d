// crates/core/src/lib.rs
pub mod analyzer;
pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod provider;
pub mod scoring;
pub mod strategy;
pub mod suggestions;
pub mod themes;
pub mod types;
pub mod workflow;

pub use analyzer::ContentAnalyzer;
pub use cache::{cache_key, content_hash, AnalysisCache, InMemoryAnalysisCache};
pub use config::AnalyzerConfig;
pub use error::*;
pub use provider::{
    create_provider, AnalysisProvider, FallbackProvider, ProviderConfig, ProviderKind,
    RuleBasedProvider,
};
pub use types::*;
pub use workflow::{Workflow, WorkflowStage};

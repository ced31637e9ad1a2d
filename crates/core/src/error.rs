// crates/core/src/error.rs
use thiserror::Error;

/// Pipeline stage in which an analysis failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Extraction,
    Scoring,
    Selection,
    Generation,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PipelineStage::Extraction => "extraction",
            PipelineStage::Scoring => "scoring",
            PipelineStage::Selection => "selection",
            PipelineStage::Generation => "generation",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while analyzing content
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Content is empty")]
    EmptyContent,

    #[error("Content too long: {len} characters (max {max})")]
    ContentTooLong { len: usize, max: usize },

    #[error("Analysis failed during {stage}: {message}")]
    Failed {
        stage: PipelineStage,
        message: String,
    },

    #[error("Analysis provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Analysis task failed: {0}")]
    TaskFailed(String),
}

impl AnalysisError {
    pub fn failed(stage: PipelineStage, message: impl Into<String>) -> Self {
        Self::Failed {
            stage,
            message: message.into(),
        }
    }

    /// Input problems are reported to the caller before any scoring runs.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyContent | Self::ContentTooLong { .. })
    }
}

/// Errors raised by the editor workflow state machine
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("No analysis available; submit content first")]
    NoAnalysis,

    #[error("Suggestion not found: {0}")]
    SuggestionNotFound(String),

    #[error("Theme not found: {0}")]
    ThemeNotFound(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

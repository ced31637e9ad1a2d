// crates/core/src/workflow.rs
//! Editor workflow: input -> processing -> suggestions -> editing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WorkflowError;
use crate::provider::AnalysisProvider;
use crate::themes;
use crate::types::{ContentAnalysis, ContentInput, VisualSuggestion};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStage {
    #[default]
    Input,
    Processing,
    Suggestions,
    Editing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub stage: WorkflowStage,
    pub analysis: Option<ContentAnalysis>,
    pub selected_suggestion: Option<String>,
    pub theme_id: String,
}

impl Default for Workflow {
    fn default() -> Self {
        Self {
            stage: WorkflowStage::Input,
            analysis: None,
            selected_suggestion: None,
            theme_id: themes::default_theme().id.to_string(),
        }
    }
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze `input` and move to the suggestions stage.
    ///
    /// On failure the workflow is back at the input stage with no analysis,
    /// and the error is returned to the caller.
    pub async fn run(
        &mut self,
        provider: &dyn AnalysisProvider,
        input: &ContentInput,
    ) -> Result<&ContentAnalysis, WorkflowError> {
        self.analysis = None;
        self.selected_suggestion = None;
        self.stage = WorkflowStage::Processing;

        match provider.analyze(input).await {
            Ok(analysis) => {
                debug!(
                    provider = provider.name(),
                    suggestions = analysis.suggestions.len(),
                    "workflow analysis ready"
                );
                self.stage = WorkflowStage::Suggestions;
                Ok(self.analysis.insert(analysis))
            }
            Err(e) => {
                self.reset();
                Err(e.into())
            }
        }
    }

    /// Pick a suggestion to edit.
    pub fn select_suggestion(&mut self, id: &str) -> Result<&VisualSuggestion, WorkflowError> {
        let analysis = self.analysis.as_ref().ok_or(WorkflowError::NoAnalysis)?;
        let suggestion = analysis
            .suggestion(id)
            .ok_or_else(|| WorkflowError::SuggestionNotFound(id.to_string()))?;
        self.selected_suggestion = Some(suggestion.id.clone());
        self.stage = WorkflowStage::Editing;
        Ok(suggestion)
    }

    /// Switch theme. Allowed at any stage.
    pub fn select_theme(&mut self, id: &str) -> Result<&'static themes::Theme, WorkflowError> {
        let theme = themes::find(id).ok_or_else(|| WorkflowError::ThemeNotFound(id.to_string()))?;
        self.theme_id = theme.id.to_string();
        Ok(theme)
    }

    /// The selected suggestion, if any.
    pub fn selected(&self) -> Option<&VisualSuggestion> {
        let id = self.selected_suggestion.as_deref()?;
        self.analysis.as_ref()?.suggestion(id)
    }

    /// Back to an empty input stage. The theme choice is kept.
    pub fn reset(&mut self) {
        self.stage = WorkflowStage::Input;
        self.analysis = None;
        self.selected_suggestion = None;
    }
}

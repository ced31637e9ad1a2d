// crates/core/src/config.rs
//! Analyzer configuration.

/// Limits applied by the analysis pipeline.
///
/// Constructed once and handed to [`crate::ContentAnalyzer::new`]; the
/// analyzer never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Inputs longer than this (in chars) are rejected before extraction.
    pub max_content_chars: usize,
    /// Ranked approaches kept after sorting.
    pub max_approaches: usize,
    /// Suggestions kept after sorting.
    pub max_suggestions: usize,
    /// Share of sentences promoted to key points (rounded up).
    pub key_point_ratio: f64,
    pub max_key_points: usize,
    pub max_data_points: usize,
    pub max_relationships_per_type: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_content_chars: 50_000,
            max_approaches: 5,
            max_suggestions: 6,
            key_point_ratio: 0.3,
            max_key_points: 10,
            max_data_points: 20,
            max_relationships_per_type: 10,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_max_content_chars(mut self, max: usize) -> Self {
        self.max_content_chars = max;
        self
    }

    /// Number of key points for a text with `sentence_count` sentences.
    pub fn key_point_budget(&self, sentence_count: usize) -> usize {
        // Epsilon keeps 10 * 0.3 from rounding up to 4.
        let share = (sentence_count as f64 * self.key_point_ratio - 1e-9)
            .ceil()
            .max(0.0) as usize;
        share.min(self.max_key_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.max_approaches, 5);
        assert_eq!(config.max_suggestions, 6);
        assert_eq!(config.max_data_points, 20);
    }

    #[test]
    fn test_key_point_budget_rounds_up_and_caps() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.key_point_budget(0), 0);
        assert_eq!(config.key_point_budget(1), 1);
        assert_eq!(config.key_point_budget(4), 2);
        assert_eq!(config.key_point_budget(10), 3);
        assert_eq!(config.key_point_budget(100), 10);
    }
}

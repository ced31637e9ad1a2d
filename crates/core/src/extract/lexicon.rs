//! Keyword lists used by extraction and scoring.
//!
//! All entries are lowercase single words; matching is done against
//! lowercased tokens.

/// Words that make a sentence a stronger key-point candidate.
pub const IMPORTANCE: &[&str] = &[
    "important",
    "key",
    "significant",
    "critical",
    "essential",
    "primary",
    "main",
    "major",
    "result",
    "conclusion",
    "therefore",
    "must",
    "should",
    "need",
    "increase",
    "decrease",
    "growth",
];

pub const POSITIVE: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "success",
    "successful",
    "growth",
    "grew",
    "improve",
    "improved",
    "improvement",
    "gain",
    "gains",
    "benefit",
    "benefits",
    "strong",
    "increased",
    "win",
    "opportunity",
    "efficient",
    "effective",
    "profit",
    "best",
    "better",
    "happy",
];

pub const NEGATIVE: &[&str] = &[
    "bad",
    "poor",
    "negative",
    "fail",
    "failed",
    "failure",
    "loss",
    "losses",
    "decline",
    "declined",
    "decreased",
    "risk",
    "problem",
    "problems",
    "issue",
    "issues",
    "weak",
    "worse",
    "worst",
    "threat",
    "difficult",
    "challenge",
    "drop",
    "dropped",
];

/// Technical vocabulary. Drives complexity and audience level.
pub const TECHNICAL: &[&str] = &[
    "algorithm",
    "architecture",
    "infrastructure",
    "methodology",
    "implementation",
    "framework",
    "optimization",
    "integration",
    "paradigm",
    "correlation",
    "regression",
    "hypothesis",
    "statistical",
    "quantitative",
    "qualitative",
    "scalability",
    "protocol",
    "latency",
    "throughput",
    "complex",
    "complexity",
    "parameter",
    "coefficient",
    "variance",
    "heuristic",
    "api",
    "database",
];

pub const CONCEPTUAL: &[&str] = &[
    "concept",
    "concepts",
    "theory",
    "framework",
    "principle",
    "principles",
    "model",
    "strategy",
    "approach",
    "philosophy",
    "methodology",
    "insight",
    "insights",
    "understanding",
    "perspective",
    "implication",
    "implications",
    "analysis",
];

pub const TRANSITION: &[&str] = &[
    "first",
    "firstly",
    "second",
    "then",
    "next",
    "finally",
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "meanwhile",
    "subsequently",
    "consequently",
    "additionally",
    "thus",
    "lastly",
];

pub const TEMPORAL: &[&str] = &[
    "first",
    "then",
    "next",
    "after",
    "before",
    "finally",
    "later",
    "previously",
    "subsequently",
    "timeline",
    "phase",
    "stage",
    "year",
    "years",
    "month",
    "months",
    "quarter",
    "week",
    "weeks",
    "day",
    "days",
    "history",
    "since",
    "until",
    "during",
    "today",
    "tomorrow",
    "yesterday",
    "annual",
    "decade",
];

pub const QUANTITATIVE: &[&str] = &[
    "increase",
    "increased",
    "decrease",
    "decreased",
    "growth",
    "grew",
    "rate",
    "average",
    "total",
    "percent",
    "percentage",
    "revenue",
    "profit",
    "cost",
    "costs",
    "budget",
    "ratio",
    "number",
    "amount",
    "statistics",
    "metric",
    "metrics",
    "sales",
    "share",
];

/// Action verbs and modal words that signal something to do.
pub const ACTION: &[&str] = &[
    "should",
    "must",
    "need",
    "needs",
    "recommend",
    "implement",
    "create",
    "build",
    "develop",
    "improve",
    "expand",
    "increase",
    "reduce",
    "start",
    "launch",
    "adopt",
    "consider",
    "ensure",
    "plan",
    "will",
    "prioritize",
    "focus",
    "review",
    "schedule",
];

/// Count tokens that appear in `lexicon`.
pub fn count_hits(tokens: &[String], lexicon: &[&str]) -> usize {
    tokens
        .iter()
        .filter(|t| lexicon.contains(&t.as_str()))
        .count()
}

/// Count distinct lexicon entries that appear in `tokens`.
pub fn count_distinct(tokens: &[String], lexicon: &[&str]) -> usize {
    lexicon
        .iter()
        .filter(|kw| tokens.iter().any(|t| t == *kw))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_lexicons_are_lowercase() {
        for list in [
            IMPORTANCE,
            POSITIVE,
            NEGATIVE,
            TECHNICAL,
            CONCEPTUAL,
            TRANSITION,
            TEMPORAL,
            QUANTITATIVE,
            ACTION,
        ] {
            for word in list {
                assert_eq!(*word, word.to_lowercase(), "{word} must be lowercase");
            }
        }
    }

    #[test]
    fn test_count_hits_counts_repeats() {
        let t = tokens(&["should", "we", "should", "plan"]);
        assert_eq!(count_hits(&t, ACTION), 3);
        assert_eq!(count_distinct(&t, ACTION), 2);
    }
}

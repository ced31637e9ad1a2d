// crates/core/src/extract/mod.rs
//! Text feature extraction.
//!
//! Pure functions over the submitted text: sentence splitting, key-point
//! ranking, data points, relationships, sentiment and complexity level.
//! Nothing here allocates global state; the compiled [`ExtractionRules`]
//! are passed in by the caller.

pub mod lexicon;
pub mod rules;

use std::ops::Range;

use crate::config::AnalyzerConfig;
use crate::types::{
    ComplexityLevel, DataPoint, ExtractedData, Relationship, RelationshipType, Sentiment,
};

pub use rules::{DataRule, ExtractionRules, RelationRule, ValueKind};

/// Words of context kept on each side of a relationship trigger.
const RELATION_CONTEXT_WORDS: usize = 6;
/// Words preceding a data point that become part of its label.
const LABEL_CONTEXT_WORDS: usize = 3;
/// Words of at least this many chars count as "long".
pub const LONG_WORD_CHARS: usize = 9;

/// Counts derived once from the raw text and shared by the scorer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProfile {
    pub sentence_count: usize,
    pub word_count: usize,
    /// Lowercased word tokens with surrounding punctuation removed.
    pub tokens: Vec<String>,
    pub numeric_tokens: usize,
    pub list_markers: usize,
    pub long_words: usize,
    /// Sentences containing at least one action word.
    pub action_sentences: usize,
}

impl TextProfile {
    pub fn avg_sentence_words(&self) -> f64 {
        if self.sentence_count == 0 {
            return 0.0;
        }
        self.word_count as f64 / self.sentence_count as f64
    }

    pub fn long_word_ratio(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.long_words as f64 / self.word_count as f64
    }

    pub fn hits(&self, lexicon: &[&str]) -> usize {
        lexicon::count_hits(&self.tokens, lexicon)
    }
}

/// Split text into trimmed sentences, dropping fragments without a word.
pub fn split_sentences<'a>(rules: &ExtractionRules, text: &'a str) -> Vec<&'a str> {
    rules
        .sentence_break
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}

/// Whitespace-separated words with leading/trailing punctuation stripped.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
}

fn tokenize(text: &str) -> Vec<String> {
    words(text).map(str::to_lowercase).collect()
}

/// Build the [`TextProfile`] for a text.
pub fn profile(rules: &ExtractionRules, text: &str) -> TextProfile {
    let sentences = split_sentences(rules, text);
    let tokens = tokenize(text);
    let long_words = tokens
        .iter()
        .filter(|t| t.chars().count() >= LONG_WORD_CHARS)
        .count();
    let action_sentences = sentences
        .iter()
        .filter(|s| lexicon::count_hits(&tokenize(s), lexicon::ACTION) > 0)
        .count();

    TextProfile {
        sentence_count: sentences.len(),
        word_count: tokens.len(),
        numeric_tokens: rules.numeric_token.find_iter(text).count(),
        list_markers: rules.list_marker.find_iter(text).count(),
        long_words,
        action_sentences,
        tokens,
    }
}

// ============================================================================
// Key points
// ============================================================================

/// Heuristic importance of one sentence.
pub fn score_sentence(sentence: &str, index: usize) -> f64 {
    let tokens = tokenize(sentence);
    let mut score = lexicon::count_distinct(&tokens, lexicon::IMPORTANCE) as f64 * 2.0;

    score += match tokens.len() {
        8..=30 => 1.0,
        5..=7 => 0.5,
        _ => 0.0,
    };
    if sentence.chars().any(|c| c.is_ascii_digit()) {
        score += 1.5;
    }
    if index == 0 {
        score += 1.0;
    }
    score
}

/// Top-ranked sentences, returned in document order.
pub fn extract_key_points(
    rules: &ExtractionRules,
    config: &AnalyzerConfig,
    text: &str,
) -> Vec<String> {
    let sentences = split_sentences(rules, text);
    let budget = config.key_point_budget(sentences.len());

    let mut ranked: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(i, s)| (i, score_sentence(s, i)))
        .collect();
    // Stable sort: equal scores keep the earlier sentence first.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(budget);

    let mut chosen: Vec<usize> = ranked.into_iter().map(|(i, _)| i).collect();
    chosen.sort_unstable();
    chosen
        .into_iter()
        .map(|i| sentences[i].to_string())
        .collect()
}

// ============================================================================
// Data points
// ============================================================================

fn overlaps(claimed: &[Range<usize>], span: &Range<usize>) -> bool {
    claimed
        .iter()
        .any(|c| c.start < span.end && span.start < c.end)
}

/// Up to `n` words before `start`, stopping at the previous sentence break.
fn preceding_words(text: &str, start: usize, n: usize) -> Vec<&str> {
    let before = &text[..start];
    let cut = [". ", "! ", "? ", "\n"]
        .iter()
        .filter_map(|sep| before.rfind(sep).map(|i| i + sep.len()))
        .max()
        .unwrap_or(0);
    let mut found: Vec<&str> = words(&before[cut..]).collect();
    let skip = found.len().saturating_sub(n);
    found.drain(..skip);
    found
}

fn label_for(text: &str, span: &Range<usize>) -> String {
    let matched = text[span.clone()].trim();
    let mut parts = preceding_words(text, span.start, LABEL_CONTEXT_WORDS);
    parts.push(matched);
    parts.join(" ")
}

fn value_for(rule: &DataRule, caps: &regex_lite::Captures<'_>) -> Option<(f64, Option<String>)> {
    match rule.kind {
        ValueKind::Plain => rules::parse_number(caps.get(1)?.as_str()).map(|v| (v, None)),
        ValueKind::Currency => {
            let amount = rules::parse_number(caps.get(2)?.as_str())?;
            let suffix = caps.get(3).map(|m| m.as_str());
            Some((amount * rules::magnitude(suffix), None))
        }
        ValueKind::Ratio => {
            let numerator = rules::parse_number(caps.get(1)?.as_str())?;
            let denominator = rules::parse_number(caps.get(2)?.as_str())?;
            if denominator == 0.0 {
                return None;
            }
            Some((numerator / denominator, None))
        }
        ValueKind::LabeledNumber => {
            let label = caps.get(1)?.as_str().to_string();
            rules::parse_number(caps.get(2)?.as_str()).map(|v| (v, Some(label)))
        }
    }
}

/// Apply the data rules in priority order; later rules never re-claim a span.
pub fn extract_data_points(
    rules: &ExtractionRules,
    config: &AnalyzerConfig,
    text: &str,
) -> Vec<DataPoint> {
    let mut claimed: Vec<Range<usize>> = Vec::new();
    let mut found: Vec<(usize, DataPoint)> = Vec::new();

    for rule in &rules.data_rules {
        for caps in rule.regex.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let span = whole.range();
            if overlaps(&claimed, &span) {
                continue;
            }
            let Some((value, label_word)) = value_for(rule, &caps) else {
                continue;
            };
            let label = match label_word {
                Some(word) => format!("{} {}", word, caps.get(2).map_or("", |m| m.as_str())),
                None => label_for(text, &span),
            };
            claimed.push(span.clone());
            found.push((
                span.start,
                DataPoint {
                    id: String::new(),
                    value,
                    label,
                    category: rule.category,
                },
            ));
        }
    }

    // Document order, then stable ids.
    found.sort_by_key(|(start, _)| *start);
    found
        .into_iter()
        .take(config.max_data_points)
        .enumerate()
        .map(|(i, (_, mut dp))| {
            dp.id = format!("dp-{}", i);
            dp
        })
        .collect()
}

// ============================================================================
// Relationships
// ============================================================================

fn clean_phrase<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}

/// Source/target phrases around the first trigger of each relation rule.
pub fn extract_relationships(
    rules: &ExtractionRules,
    config: &AnalyzerConfig,
    text: &str,
) -> Vec<Relationship> {
    let mut found = Vec::new();
    let mut per_type = [0usize; 3];

    for sentence in split_sentences(rules, text) {
        for rule in &rules.relation_rules {
            let slot = match rule.relationship_type {
                RelationshipType::Causal => 0,
                RelationshipType::Temporal => 1,
                RelationshipType::Correlational => 2,
            };
            if per_type[slot] >= config.max_relationships_per_type {
                continue;
            }
            let Some(trigger) = rule.regex.find(sentence) else {
                continue;
            };

            let before: Vec<&str> = words(&sentence[..trigger.start()]).collect();
            let skip = before.len().saturating_sub(RELATION_CONTEXT_WORDS);
            let source = clean_phrase(before.into_iter().skip(skip));
            let target = clean_phrase(words(&sentence[trigger.end()..]).take(RELATION_CONTEXT_WORDS));
            if source.is_empty() || target.is_empty() {
                continue;
            }

            per_type[slot] += 1;
            found.push(Relationship {
                id: format!("rel-{}", found.len()),
                source,
                target,
                relationship_type: rule.relationship_type,
                strength: rule.relationship_type.strength(),
            });
        }
    }
    found
}

// ============================================================================
// Sentiment and complexity
// ============================================================================

/// Positive/negative keyword balance. A lead of one word is still neutral.
pub fn classify_sentiment(profile: &TextProfile) -> Sentiment {
    let positive = profile.hits(lexicon::POSITIVE);
    let negative = profile.hits(lexicon::NEGATIVE);
    if positive > negative + 1 {
        Sentiment::Positive
    } else if negative > positive + 1 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

pub fn classify_complexity(profile: &TextProfile) -> ComplexityLevel {
    let mut points = 0;

    points += match profile.word_count {
        n if n > 500 => 2,
        n if n > 200 => 1,
        _ => 0,
    };
    let avg = profile.avg_sentence_words();
    points += if avg > 25.0 {
        2
    } else if avg > 15.0 {
        1
    } else {
        0
    };
    points += match profile.hits(lexicon::TECHNICAL) {
        n if n >= 5 => 2,
        n if n >= 2 => 1,
        _ => 0,
    };

    match points {
        p if p >= 4 => ComplexityLevel::High,
        p if p >= 2 => ComplexityLevel::Medium,
        _ => ComplexityLevel::Low,
    }
}

/// Run every extractor over `text`.
pub fn extract(rules: &ExtractionRules, config: &AnalyzerConfig, text: &str) -> ExtractedData {
    extract_profiled(rules, config, text, &profile(rules, text))
}

/// Same as [`extract`], reusing a profile the caller already built.
pub fn extract_profiled(
    rules: &ExtractionRules,
    config: &AnalyzerConfig,
    text: &str,
    profile: &TextProfile,
) -> ExtractedData {
    ExtractedData {
        key_points: extract_key_points(rules, config, text),
        data_points: extract_data_points(rules, config, text),
        relationships: extract_relationships(rules, config, text),
        sentiment: classify_sentiment(profile),
        complexity: classify_complexity(profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataCategory;

    fn rules() -> ExtractionRules {
        ExtractionRules::compile().unwrap()
    }

    #[test]
    fn test_split_sentences() {
        let rules = rules();
        let sentences = split_sentences(&rules, "One. Two!  Three?\nFour 2.5 units");
        assert_eq!(sentences, vec!["One", "Two", "Three", "Four 2.5 units"]);
    }

    #[test]
    fn test_split_sentences_drops_punctuation_only() {
        let rules = rules();
        assert_eq!(split_sentences(&rules, "... !!! ok"), vec!["ok"]);
        assert!(split_sentences(&rules, "   ").is_empty());
    }

    #[test]
    fn test_words_strip_punctuation() {
        let w: Vec<&str> = words("Revenue grew 25% (in Q4).").collect();
        assert_eq!(w, vec!["Revenue", "grew", "25", "in", "Q4"]);
    }

    #[test]
    fn test_key_points_prefer_important_sentences() {
        let rules = rules();
        let config = AnalyzerConfig::default();
        let text = "The weather was mild. It is critical that we cut costs by 10% this quarter. \
                    Lunch was fine. The team met twice.";
        let points = extract_key_points(&rules, &config, text);
        // ceil(4 * 0.3) = 2
        assert_eq!(points.len(), 2);
        assert!(points.contains(&"It is critical that we cut costs by 10% this quarter".to_string()));
    }

    #[test]
    fn test_key_points_in_document_order() {
        let rules = rules();
        let config = AnalyzerConfig::default();
        let text = "Intro line. Filler. Filler again. Key result: revenue must increase 20% next year. \
                    Filler. Filler. Filler. Filler. Filler. Filler.";
        let points = extract_key_points(&rules, &config, text);
        assert_eq!(points.len(), 3);
        // The key sentence and the first sentence win; the earliest filler takes the tie.
        assert_eq!(points[0], "Intro line");
        assert_eq!(points[1], "Filler");
        assert!(points[2].starts_with("Key result"));
    }

    #[test]
    fn test_data_points_percentage_and_year() {
        let rules = rules();
        let config = AnalyzerConfig::default();
        let dps = extract_data_points(&rules, &config, "Revenue grew 25% in 2023.");
        assert_eq!(dps.len(), 2);
        assert_eq!(dps[0].category, DataCategory::Percentage);
        assert_eq!(dps[0].value, 25.0);
        assert_eq!(dps[0].label, "Revenue grew 25%");
        assert_eq!(dps[0].id, "dp-0");
        assert_eq!(dps[1].category, DataCategory::Year);
        assert_eq!(dps[1].value, 2023.0);
    }

    #[test]
    fn test_data_points_currency_magnitude() {
        let rules = rules();
        let config = AnalyzerConfig::default();
        let dps = extract_data_points(&rules, &config, "We raised $2.5 million from investors.");
        assert_eq!(dps.len(), 1);
        assert_eq!(dps[0].category, DataCategory::Currency);
        assert_eq!(dps[0].value, 2_500_000.0);
    }

    #[test]
    fn test_data_points_ratio_is_fraction() {
        let rules = rules();
        let config = AnalyzerConfig::default();
        let dps = extract_data_points(&rules, &config, "Customers rated it 4 out of 5.");
        assert_eq!(dps.len(), 1);
        assert_eq!(dps[0].category, DataCategory::Rating);
        assert!((dps[0].value - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_data_points_zero_denominator_skipped() {
        let rules = rules();
        let config = AnalyzerConfig::default();
        let dps = extract_data_points(&rules, &config, "It was 3 out of 0 somehow.");
        assert!(dps.iter().all(|dp| dp.category != DataCategory::Rating));
    }

    #[test]
    fn test_metric_does_not_reclaim_year() {
        let rules = rules();
        let config = AnalyzerConfig::default();
        let dps = extract_data_points(&rules, &config, "Founded year 1999 with employees 40.");
        assert_eq!(dps.len(), 2);
        assert_eq!(dps[0].category, DataCategory::Year);
        assert_eq!(dps[1].category, DataCategory::Metric);
        assert_eq!(dps[1].label, "employees 40");
    }

    #[test]
    fn test_data_points_capped() {
        let rules = rules();
        let config = AnalyzerConfig::default();
        let text = (0..30).map(|i| format!("{}% ", i)).collect::<String>();
        let dps = extract_data_points(&rules, &config, &text);
        assert_eq!(dps.len(), 20);
        assert_eq!(dps[19].id, "dp-19");
    }

    #[test]
    fn test_relationships_causal() {
        let rules = rules();
        let config = AnalyzerConfig::default();
        let rels = extract_relationships(&rules, &config, "Churn rose because support was slow.");
        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].relationship_type, RelationshipType::Causal);
        assert_eq!(rels[0].source, "Churn rose");
        assert_eq!(rels[0].target, "support was slow");
        assert_eq!(rels[0].strength, 0.8);
    }

    #[test]
    fn test_relationships_need_both_sides() {
        let rules = rules();
        let config = AnalyzerConfig::default();
        let rels = extract_relationships(&rules, &config, "Because reasons.");
        assert!(rels.is_empty());
    }

    #[test]
    fn test_relationships_capped_per_type() {
        let rules = rules();
        let config = AnalyzerConfig::default();
        let text = "A happened because B happened. ".repeat(15);
        let rels = extract_relationships(&rules, &config, &text);
        assert_eq!(rels.len(), 10);
    }

    #[test]
    fn test_sentiment_margin() {
        let rules = rules();
        let p = profile(&rules, "A great result.");
        assert_eq!(classify_sentiment(&p), Sentiment::Neutral);
        let p = profile(&rules, "A great and excellent success.");
        assert_eq!(classify_sentiment(&p), Sentiment::Positive);
        let p = profile(&rules, "Poor sales, a big loss, and another problem.");
        assert_eq!(classify_sentiment(&p), Sentiment::Negative);
    }

    #[test]
    fn test_complexity_levels() {
        let rules = rules();
        let p = profile(&rules, "hi ok");
        assert_eq!(classify_complexity(&p), ComplexityLevel::Low);

        let technical = "The algorithm architecture uses a statistical regression framework \
                         with heuristic optimization of every parameter in the protocol layer, \
                         and the team reviews the latency and throughput results carefully every single day.";
        let p = profile(&rules, technical);
        assert_eq!(classify_complexity(&p), ComplexityLevel::High);
    }

    #[test]
    fn test_profile_counts() {
        let rules = rules();
        let p = profile(&rules, "- Ship 3 features\n- Review 12 bugs\nWe should plan.");
        assert_eq!(p.list_markers, 2);
        assert_eq!(p.numeric_tokens, 2);
        assert_eq!(p.sentence_count, 3);
        assert_eq!(p.action_sentences, 2);
    }
}

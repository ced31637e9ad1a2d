//! Named regex rules for data-point and relationship extraction.
//!
//! Each regex family is one [`DataRule`] or [`RelationRule`] entry so the
//! rule set can be listed and tested rule by rule. Rules are compiled once
//! by [`ExtractionRules::compile`] and owned by the analyzer.

use regex_lite::Regex;

use crate::types::{DataCategory, RelationshipType};

/// How a data rule turns its captures into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Capture 1 is the value.
    Plain,
    /// Capture 2 is the amount, capture 3 an optional magnitude suffix.
    Currency,
    /// Captures 1 and 2 are numerator and denominator.
    Ratio,
    /// Capture 1 is the label word, capture 2 the value.
    LabeledNumber,
}

/// A regex family that yields data points of one category.
#[derive(Debug)]
pub struct DataRule {
    pub name: &'static str,
    pub category: DataCategory,
    pub kind: ValueKind,
    pub regex: Regex,
}

/// A trigger-phrase family that yields relationships of one type.
#[derive(Debug)]
pub struct RelationRule {
    pub name: &'static str,
    pub relationship_type: RelationshipType,
    pub regex: Regex,
}

/// Data rules in priority order. Earlier rules claim spans first.
const DATA_RULES: &[(&str, DataCategory, ValueKind, &str)] = &[
    (
        "percentage",
        DataCategory::Percentage,
        ValueKind::Plain,
        r"(?i)(\d+(?:\.\d+)?)\s?(?:%|percent\b)",
    ),
    (
        "currency",
        DataCategory::Currency,
        ValueKind::Currency,
        r"(?i)([$€£])\s?(\d[\d,]*(?:\.\d+)?)(?:\s?(thousand|million|billion|bn|k|m|b)\b)?",
    ),
    (
        "ratio",
        DataCategory::Rating,
        ValueKind::Ratio,
        r"(?i)\b(\d+(?:\.\d+)?)\s+out\s+of\s+(\d+(?:\.\d+)?)\b",
    ),
    (
        "year",
        DataCategory::Year,
        ValueKind::Plain,
        r"\b((?:19|20)\d{2})\b",
    ),
    (
        "metric",
        DataCategory::Metric,
        ValueKind::LabeledNumber,
        r"\b([A-Za-z][A-Za-z\-]{2,})\s+(\d[\d,]*(?:\.\d+)?)\b",
    ),
];

const RELATION_RULES: &[(&str, RelationshipType, &str)] = &[
    (
        "causal",
        RelationshipType::Causal,
        r"(?i)\b(?:because|due to|leads? to|results? in|caused by|as a result of)\b",
    ),
    (
        "temporal",
        RelationshipType::Temporal,
        r"(?i)\b(?:before|after|followed by|during|until|since)\b",
    ),
    (
        "comparison",
        RelationshipType::Correlational,
        r"(?i)\b(?:compared to|compared with|versus|vs|more than|less than|similar to|correlates with)\b",
    ),
];

/// The compiled rule table plus the helper patterns used for text profiling.
#[derive(Debug)]
pub struct ExtractionRules {
    pub data_rules: Vec<DataRule>,
    pub relation_rules: Vec<RelationRule>,
    pub(crate) sentence_break: Regex,
    pub(crate) numeric_token: Regex,
    pub(crate) list_marker: Regex,
}

impl ExtractionRules {
    pub fn compile() -> Result<Self, regex_lite::Error> {
        let data_rules = DATA_RULES
            .iter()
            .map(|(name, category, kind, pattern)| -> Result<DataRule, regex_lite::Error> {
                Ok(DataRule {
                    name: *name,
                    category: *category,
                    kind: *kind,
                    regex: Regex::new(pattern)?,
                })
            })
            .collect::<Result<Vec<_>, regex_lite::Error>>()?;

        let relation_rules = RELATION_RULES
            .iter()
            .map(|(name, relationship_type, pattern)| -> Result<RelationRule, regex_lite::Error> {
                Ok(RelationRule {
                    name: *name,
                    relationship_type: *relationship_type,
                    regex: Regex::new(pattern)?,
                })
            })
            .collect::<Result<Vec<_>, regex_lite::Error>>()?;

        Ok(Self {
            data_rules,
            relation_rules,
            sentence_break: Regex::new(r"[.!?]+(?:\s+|$)|\n+")?,
            numeric_token: Regex::new(r"\d+(?:[.,]\d+)*")?,
            list_marker: Regex::new(r"(?m)^\s*(?:[-*•]|\d+[.)])\s+")?,
        })
    }

    pub fn data_rule(&self, name: &str) -> Option<&DataRule> {
        self.data_rules.iter().find(|r| r.name == name)
    }

    pub fn relation_rule(&self, name: &str) -> Option<&RelationRule> {
        self.relation_rules.iter().find(|r| r.name == name)
    }
}

/// Parse a captured number, ignoring thousands separators.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Multiplier for a currency magnitude suffix.
pub(crate) fn magnitude(suffix: Option<&str>) -> f64 {
    match suffix.map(|s| s.to_lowercase()).as_deref() {
        Some("k") | Some("thousand") => 1_000.0,
        Some("m") | Some("million") => 1_000_000.0,
        Some("b") | Some("bn") | Some("billion") => 1_000_000_000.0,
        _ => 1.0,
    }
}

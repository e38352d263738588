//! Tiered recovery of structured guidance from untrusted provider text.
//!
//! The provider is a non-deterministic generator; its output is a trust
//! boundary. This module reduces any string (valid JSON, fenced JSON,
//! JSON-ish fragments, or free prose) to a fully-populated
//! [`AssessmentResult`]. Four ordered tiers, strictly mutually exclusive:
//!
//! 1. strict JSON parse of the brace-to-brace substring,
//! 2. per-field regex extraction over the original text,
//! 3. strip-to-plain-text salvage,
//! 4. a final sanitize-and-default polish applied to whichever tier won.
//!
//! [`recover`] is a total function: every input terminates and yields a
//! result with every field populated. Tier failure is a normal `None`,
//! never an error.

use crate::types::{normalize_risk_level, AssessmentResult};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Minimum length of an extracted summary or recommendations string for the
/// field-regex tier to count as a success. Heuristic guard against
/// false-positive partial matches; the exact value is not load-bearing.
const MIN_EXTRACTED_LEN: usize = 5;

/// Minimum length of salvaged plain text before the fixed fallback message
/// replaces it.
const MIN_PLAIN_TEXT_LEN: usize = 5;

/// Summary used when even plain-text salvage yields nothing readable.
pub const FORMAT_UNCLEAR_FALLBACK: &str =
    "Guidance generated, but format was unclear. Please consult a doctor for advice.";

const DEFAULT_SUMMARY: &str = "Health Guidance";
const DEFAULT_RISK_LEVEL: &str = "Medium Risk";

/// Key tokens deleted during plain-text salvage. Includes "data", which some
/// responses use as a wrapper key.
const STRIP_KEYS: [&str; 6] = [
    "summary",
    "recommendations",
    "culturalTips",
    "warningSigns",
    "riskLevel",
    "data",
];

static JSON_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)```json").unwrap());
static LEADING_BRACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s\n]*\{").unwrap());
static TRAILING_BRACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\}[\s\n]*$").unwrap());
static DQUOTE_COMMA_EOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?m)",\s*$"#).unwrap());
static SQUOTE_COMMA_EOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)',\s*$").unwrap());
static DQUOTE_EOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?m)"\s*$"#).unwrap());
static DQUOTE_BOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?m)^""#).unwrap());

/// Quoting variants tried per field, compiled once. Ordered; the first
/// non-empty capture wins.
static FIELD_PATTERNS: LazyLock<[(&'static str, [Regex; 5]); 5]> = LazyLock::new(|| {
    ["summary", "recommendations", "culturalTips", "warningSigns", "riskLevel"]
        .map(|name| (name, compile_field_patterns(name)))
});

fn compile_field_patterns(name: &str) -> [Regex; 5] {
    [
        format!(r#"(?i)"{name}"\s*:\s*"([^"]*)""#),
        format!(r#"(?i)"{name}"\s*:\s*'([^']*)'"#),
        format!(r#"(?i)'{name}'\s*:\s*"([^"]*)""#),
        format!(r#"(?i)'{name}'\s*:\s*'([^']*)'"#),
        format!(r#"(?i){name}\s*:\s*"([^"]*)""#),
    ]
    .map(|pattern| Regex::new(&pattern).unwrap())
}

/// Outcome of the tier that produced a usable result.
enum Recovered {
    /// Tier 1: the text contained a parseable JSON object.
    Parsed(Map<String, Value>),
    /// Tier 2: individual fields were pulled out by regex.
    Extracted(ExtractedFields),
    /// Tier 3: nothing structured survived; salvaged plain text.
    PlainText(String),
}

struct ExtractedFields {
    summary: String,
    recommendations: String,
    cultural_tips: String,
    warning_signs: String,
    risk_level: String,
}

/// Reduce raw provider output to a guaranteed-shape result.
///
/// Never fails; all work is synchronous string/regex transformation.
pub fn recover(raw: &str) -> AssessmentResult {
    let cleaned = strip_markdown_fences(raw);

    let recovered = match parse_json_object(&cleaned) {
        Some(map) => Recovered::Parsed(map),
        // Tier 2 runs over the original, uncleaned text.
        None => match extract_fields(raw) {
            Some(fields) => Recovered::Extracted(fields),
            None => Recovered::PlainText(strip_to_plain_text(&cleaned)),
        },
    };

    polish(recovered)
}

/// Remove Markdown code-fence markers and surrounding whitespace.
fn strip_markdown_fences(raw: &str) -> String {
    JSON_FENCE.replace_all(raw, "").replace("```", "").trim().to_string()
}

/// Tier 1: locate the greedy first-`{`-to-last-`}` substring and strict-parse
/// it. Succeeds only for a non-empty JSON object; an empty `{}` carries no
/// guidance and is left for later tiers.
fn parse_json_object(cleaned: &str) -> Option<Map<String, Value>> {
    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<Value>(&cleaned[start..=end]) {
        Ok(Value::Object(map)) if !map.is_empty() => Some(map),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("Strict JSON parse failed, trying field extraction: {}", e);
            None
        }
    }
}

/// Tier 2: per-field regex extraction over the original text.
fn extract_fields(raw: &str) -> Option<ExtractedFields> {
    let fields = ExtractedFields {
        summary: extract_field(raw, "summary"),
        recommendations: extract_field(raw, "recommendations"),
        cultural_tips: extract_field(raw, "culturalTips"),
        warning_signs: extract_field(raw, "warningSigns"),
        risk_level: extract_field(raw, "riskLevel"),
    };

    if fields.summary.chars().count() > MIN_EXTRACTED_LEN
        || fields.recommendations.chars().count() > MIN_EXTRACTED_LEN
    {
        Some(fields)
    } else {
        None
    }
}

/// Try the field's quoting variants in order; first non-empty capture wins.
fn extract_field(text: &str, name: &str) -> String {
    let Some((_, patterns)) = FIELD_PATTERNS.iter().find(|(n, _)| *n == name) else {
        return String::new();
    };

    for re in patterns {
        if let Some(capture) = re.captures(text).and_then(|caps| caps.get(1)) {
            if !capture.as_str().is_empty() {
                return capture.as_str().to_string();
            }
        }
    }

    String::new()
}

/// Tier 3: delete JSON syntax while preserving the values inline, so the
/// user still sees whatever guidance the provider produced.
fn strip_to_plain_text(cleaned: &str) -> String {
    let mut text = LEADING_BRACE.replace(cleaned, "").into_owned();
    text = TRAILING_BRACE.replace(&text, "").into_owned();

    // Delete key labels ("summary":, 'riskLevel':, data: ...) everywhere.
    for key in STRIP_KEYS {
        if let Ok(re) = Regex::new(&format!(r#"(?i)['"]?{key}['"]?\s*:\s*"#)) {
            text = re.replace_all(&text, "").into_owned();
        }
    }

    // Line-by-line cleanup of stray quotes and commas.
    text = DQUOTE_COMMA_EOL.replace_all(&text, "\n").into_owned();
    text = SQUOTE_COMMA_EOL.replace_all(&text, "\n").into_owned();
    text = DQUOTE_EOL.replace_all(&text, "").into_owned();
    text = DQUOTE_BOL.replace_all(&text, "").into_owned();

    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_PLAIN_TEXT_LEN {
        FORMAT_UNCLEAR_FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Tier 4: sanitize every string field, coerce recommendations to a list,
/// and fill defaults so the result upholds the no-empty-fields contract.
fn polish(recovered: Recovered) -> AssessmentResult {
    match recovered {
        Recovered::Parsed(map) => {
            // A parsed object may itself carry structuredData: false.
            let structured_data =
                map.get("structuredData").and_then(Value::as_bool) != Some(false);

            AssessmentResult {
                summary: final_summary(string_field(&map, "summary")),
                recommendations: coerce_recommendations(map.get("recommendations")),
                cultural_tips: sanitize_string(&string_field(&map, "culturalTips")),
                warning_signs: sanitize_string(&string_field(&map, "warningSigns")),
                risk_level: final_risk_level(string_field(&map, "riskLevel")),
                structured_data,
                error: None,
                timed_out: None,
                raw_text: None,
            }
        }
        Recovered::Extracted(fields) => AssessmentResult {
            summary: final_summary(fields.summary),
            recommendations: wrap_recommendation(&fields.recommendations),
            cultural_tips: sanitize_string(&fields.cultural_tips),
            warning_signs: sanitize_string(&fields.warning_signs),
            risk_level: final_risk_level(fields.risk_level),
            structured_data: true,
            error: None,
            timed_out: None,
            raw_text: None,
        },
        Recovered::PlainText(text) => AssessmentResult {
            summary: final_summary(text.clone()),
            recommendations: Vec::new(),
            cultural_tips: String::new(),
            warning_signs: String::new(),
            risk_level: DEFAULT_RISK_LEVEL.to_string(),
            structured_data: false,
            error: None,
            timed_out: None,
            raw_text: Some(text),
        },
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn final_summary(raw: String) -> String {
    let summary = sanitize_string(&raw);
    if summary.trim().is_empty() {
        DEFAULT_SUMMARY.to_string()
    } else {
        summary
    }
}

fn final_risk_level(raw: String) -> String {
    let risk = sanitize_string(&raw);
    if risk.trim().is_empty() {
        DEFAULT_RISK_LEVEL.to_string()
    } else {
        normalize_risk_level(&risk)
    }
}

/// Coerce whatever the provider put under `recommendations` into a list.
/// A real array is kept as-is; a non-empty scalar becomes a one-element
/// list after sanitization.
fn coerce_recommendations(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(s)) => wrap_recommendation(s),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => wrap_recommendation(&other.to_string()),
    }
}

fn wrap_recommendation(raw: &str) -> Vec<String> {
    let sanitized = sanitize_string(raw);
    if sanitized.trim().is_empty() {
        Vec::new()
    } else {
        vec![sanitized]
    }
}

/// Defensive cleanup against residual JSON syntax leaking through the
/// earlier tiers: a string that still opens with `{`, `[`, or `"` after
/// trimming has every brace, bracket, and double quote removed. Idempotent.
fn sanitize_string(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') || trimmed.starts_with('"') {
        raw.chars()
            .filter(|c| !matches!(c, '{' | '}' | '"' | '[' | ']'))
            .collect()
    } else {
        raw.to_string()
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Item identity as it appears in the dataset. Datasets in the wild use both
/// numeric and string ids, and the persisted output keeps whichever was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Text(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationItem {
    pub id: ItemId,
    pub question: String,
    pub rag_answer: String,
    pub ground_truth: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Criterion {
    Correctness,
    Completeness,
    Relevance,
}

impl Criterion {
    /// Iteration order used everywhere criteria are walked.
    pub const ALL: [Criterion; 3] = [
        Criterion::Correctness,
        Criterion::Completeness,
        Criterion::Relevance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Correctness => "correctness",
            Criterion::Completeness => "completeness",
            Criterion::Relevance => "relevance",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One criterion's verdict.
///
/// Judge output is read leniently, one record at a time. `score` is `None` when
/// the judge omitted it, sent a non-integer, or sent something other than an
/// object for the whole criterion. Such records are kept rather than rejected;
/// the aggregator decides how to treat them (see
/// [`crate::report::failure::MalformedScorePolicy`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    pub reasoning: String,
}

impl ScoreRecord {
    pub fn new(score: i64, reasoning: impl Into<String>) -> Self {
        Self {
            score: Some(score),
            reasoning: reasoning.into(),
        }
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                score: fields.get("score").and_then(Value::as_i64),
                reasoning: fields
                    .remove("reasoning")
                    .map(reasoning_text)
                    .unwrap_or_default(),
            },
            _ => Self {
                score: None,
                reasoning: String::new(),
            },
        }
    }
}

fn reasoning_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl<'de> Deserialize<'de> for ScoreRecord {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(d).map(Self::from_value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaScores {
    pub correctness: ScoreRecord,
    pub completeness: ScoreRecord,
    pub relevance: ScoreRecord,
}

impl CriteriaScores {
    pub fn get(&self, criterion: Criterion) -> &ScoreRecord {
        match criterion {
            Criterion::Correctness => &self.correctness,
            Criterion::Completeness => &self.completeness,
            Criterion::Relevance => &self.relevance,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &ScoreRecord)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    pub error: String,
    pub raw: String,
}

/// Judge verdict for one item.
///
/// Serialized untagged so the persisted JSON is either the three criteria
/// side by side or `{"error": ..., "raw": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Evaluation {
    Scored(CriteriaScores),
    ParseFailed(ParseFailure),
}

impl Evaluation {
    pub fn scores(&self) -> Option<&CriteriaScores> {
        match self {
            Evaluation::Scored(s) => Some(s),
            Evaluation::ParseFailed(_) => None,
        }
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Evaluation::ParseFailed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub id: ItemId,
    pub question: String,
    pub evaluation: Evaluation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureMode {
    pub id: ItemId,
    pub question: String,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FailureReport {
    pub total_evaluations: usize,
    pub failure_modes: Vec<FailureMode>,
}

/// A single judge completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    pub meta: Value,
}

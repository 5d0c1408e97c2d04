//! Deterministic stand-in for the LLM judge.
//!
//! Rules are checked top to bottom against the RAG answer and the first rule
//! whose marker occurs in it decides the verdict. No rule matching falls back
//! to a middling verdict.

use crate::model::{CriteriaScores, Evaluation, ScoreRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedScore {
    pub score: i64,
    pub reasoning: &'static str,
}

const fn fixed(score: i64, reasoning: &'static str) -> FixedScore {
    FixedScore { score, reasoning }
}

impl FixedScore {
    fn record(&self) -> ScoreRecord {
        ScoreRecord::new(self.score, self.reasoning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockVerdict {
    pub correctness: FixedScore,
    pub completeness: FixedScore,
    pub relevance: FixedScore,
}

impl MockVerdict {
    pub fn to_evaluation(&self) -> Evaluation {
        Evaluation::Scored(CriteriaScores {
            correctness: self.correctness.record(),
            completeness: self.completeness.record(),
            relevance: self.relevance.record(),
        })
    }
}

/// Case-sensitive substring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockRule {
    pub marker: &'static str,
    pub verdict: MockVerdict,
}

impl MockRule {
    pub fn matches(&self, rag_answer: &str) -> bool {
        rag_answer.contains(self.marker)
    }
}

pub const DEFAULT_RULES: &[MockRule] = &[
    MockRule {
        marker: "Paris",
        verdict: MockVerdict {
            correctness: fixed(5, "Answer is factually accurate."),
            completeness: fixed(4, "Covers the main point but lacks additional context."),
            relevance: fixed(5, "Directly answers the question."),
        },
    },
    MockRule {
        marker: "Austen",
        verdict: MockVerdict {
            correctness: fixed(5, "Correct author."),
            completeness: fixed(5, "Complete match."),
            relevance: fixed(5, "Highly relevant."),
        },
    },
    MockRule {
        marker: "90 degrees",
        verdict: MockVerdict {
            correctness: fixed(2, "Incorrect boiling point."),
            completeness: fixed(3, "Missing pressure context."),
            relevance: fixed(5, "Answers the question but wrongly."),
        },
    },
];

pub const DEFAULT_FALLBACK: MockVerdict = MockVerdict {
    correctness: fixed(3, "Partially correct."),
    completeness: fixed(3, "Incomplete."),
    relevance: fixed(4, "Somewhat relevant."),
};

#[derive(Debug, Clone)]
pub struct MockJudge {
    rules: Vec<MockRule>,
    fallback: MockVerdict,
}

impl Default for MockJudge {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec(), DEFAULT_FALLBACK)
    }
}

impl MockJudge {
    pub fn new(rules: Vec<MockRule>, fallback: MockVerdict) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[MockRule] {
        &self.rules
    }

    /// The rule that decides `rag_answer`, or `None` for the fallback.
    pub fn matching_rule(&self, rag_answer: &str) -> Option<&MockRule> {
        self.rules.iter().find(|r| r.matches(rag_answer))
    }

    pub fn evaluate(&self, rag_answer: &str) -> Evaluation {
        self.matching_rule(rag_answer)
            .map(|r| r.verdict)
            .unwrap_or(self.fallback)
            .to_evaluation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(e: &Evaluation) -> (i64, i64, i64) {
        let s = e.scores().expect("mock never fails to parse");
        (
            s.correctness.score.unwrap(),
            s.completeness.score.unwrap(),
            s.relevance.score.unwrap(),
        )
    }

    #[test]
    fn paris_answers_score_five_four_five() {
        let judge = MockJudge::default();
        for answer in ["Paris", "The capital is Paris.", "I think it's Paris, France"] {
            assert_eq!(scores(&judge.evaluate(answer)), (5, 4, 5));
        }
    }

    #[test]
    fn first_matching_rule_wins() {
        let judge = MockJudge::default();
        let e = judge.evaluate("Austen lived far from Paris");
        assert_eq!(scores(&e), (5, 4, 5));
        assert_eq!(
            judge.matching_rule("Austen and Paris").map(|r| r.marker),
            Some("Paris")
        );
    }

    #[test]
    fn each_rule_maps_to_its_verdict() {
        let judge = MockJudge::default();
        assert_eq!(scores(&judge.evaluate("Jane Austen wrote it.")), (5, 5, 5));
        assert_eq!(scores(&judge.evaluate("It boils at 90 degrees.")), (2, 3, 5));
    }

    #[test]
    fn unmatched_answer_falls_back() {
        let judge = MockJudge::default();
        assert!(judge.matching_rule("I don't know").is_none());
        let e = judge.evaluate("I don't know");
        assert_eq!(scores(&e), (3, 3, 4));
        let s = e.scores().unwrap();
        assert_eq!(s.correctness.reasoning, "Partially correct.");
    }

    #[test]
    fn markers_are_case_sensitive() {
        let judge = MockJudge::default();
        assert_eq!(scores(&judge.evaluate("paris")), (3, 3, 4));
    }

    #[test]
    fn custom_rules_are_declarative() {
        let judge = MockJudge::new(
            vec![MockRule {
                marker: "42",
                verdict: MockVerdict {
                    correctness: fixed(1, "wrong"),
                    completeness: fixed(1, "empty"),
                    relevance: fixed(1, "off topic"),
                },
            }],
            DEFAULT_FALLBACK,
        );
        assert_eq!(scores(&judge.evaluate("the answer is 42")), (1, 1, 1));
        assert_eq!(scores(&judge.evaluate("Paris")), (3, 3, 4));
    }
}

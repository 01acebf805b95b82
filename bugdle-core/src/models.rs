use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a puzzle as sent by the backend.
///
/// Puzzle files carry either a numeric or a string id; whichever arrives is
/// echoed back unchanged in the `puzzle_id` form field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PuzzleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleId::Number(n) => n.fmt(f),
            PuzzleId::Text(s) => s.fmt(f),
        }
    }
}

impl From<i64> for PuzzleId {
    fn from(v: i64) -> Self {
        PuzzleId::Number(v)
    }
}

impl From<&str> for PuzzleId {
    fn from(v: &str) -> Self {
        PuzzleId::Text(v.to_string())
    }
}

/// A buggy snippet together with the text shown above the editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: PuzzleId,
    pub title: String,
    pub description: String,
    pub snippet: String,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl Puzzle {
    pub fn headline(&self) -> String {
        format!("{} — {}", self.title, self.description)
    }

    pub fn difficulty_label(&self) -> String {
        let d = self
            .difficulty
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Unknown");
        format!("Difficulty: {d}")
    }
}

/// Status value the backend uses for "right line, wrong fix".
pub const STATUS_PARTIAL: &str = "partial";

/// Grading outcome returned by `POST /submit`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    #[serde(default)]
    pub correct: bool,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub fix_line: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn is_partial(&self) -> bool {
        self.status.as_deref() == Some(STATUS_PARTIAL)
    }
}

/// Body of a non-2xx puzzle response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorPayload {
    /// Lenient decode: anything that is not an object with `error` yields an
    /// empty payload.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_accepts_numeric_and_string_ids() {
        let p: Puzzle = serde_json::from_str(
            r#"{"id":1,"title":"T","description":"D","snippet":"x=1"}"#,
        )
        .unwrap();
        assert_eq!(p.id, PuzzleId::Number(1));
        assert_eq!(p.id.to_string(), "1");
        assert_eq!(p.difficulty, None);

        let p: Puzzle = serde_json::from_str(
            r#"{"id":"off_by_one","title":"T","description":"D","snippet":"","difficulty":"Easy"}"#,
        )
        .unwrap();
        assert_eq!(p.id.to_string(), "off_by_one");
        assert_eq!(p.difficulty.as_deref(), Some("Easy"));
    }

    #[test]
    fn headline_and_difficulty_label() {
        let mut p = Puzzle {
            id: 1.into(),
            title: "T".into(),
            description: "D".into(),
            snippet: "x=1".into(),
            difficulty: None,
        };
        assert_eq!(p.headline(), "T — D");
        assert_eq!(p.difficulty_label(), "Difficulty: Unknown");
        p.difficulty = Some(String::new());
        assert_eq!(p.difficulty_label(), "Difficulty: Unknown");
        p.difficulty = Some(" Hard ".into());
        assert_eq!(p.difficulty_label(), "Difficulty:  Hard ");
        p.difficulty = Some("Hard".into());
        assert_eq!(p.difficulty_label(), "Difficulty: Hard");
    }

    #[test]
    fn submission_result_defaults_missing_fields() {
        let r: SubmissionResult =
            serde_json::from_str(r#"{"error":"Puzzle not found"}"#).unwrap();
        assert!(!r.correct);
        assert_eq!(r.fix_line, None);
        assert!(!r.is_partial());

        let r: SubmissionResult = serde_json::from_str(
            r#"{"correct":false,"status":"partial","fix_line":3,"error":"off by one"}"#,
        )
        .unwrap();
        assert!(r.is_partial());
        assert_eq!(r.fix_line, Some(3));
    }

    #[test]
    fn error_payload_is_lenient() {
        assert_eq!(
            ErrorPayload::from_body(r#"{"error":"none today"}"#).error.as_deref(),
            Some("none today")
        );
        assert_eq!(ErrorPayload::from_body("<html>502</html>"), ErrorPayload::default());
        assert_eq!(ErrorPayload::from_body("{}"), ErrorPayload::default());
    }
}

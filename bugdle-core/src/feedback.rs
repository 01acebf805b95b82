use crate::models::SubmissionResult;

/// Colour family of the result message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Partial,
    Failure,
}

impl Tone {
    pub fn color(self) -> &'static str {
        match self {
            Tone::Success => "#3fb950",
            Tone::Partial => "#e3b341",
            Tone::Failure => "#f85149",
        }
    }
}

/// What the page shows after a graded submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub tone: Tone,
    /// Zero-based editor line to highlight and scroll to.
    pub highlight: Option<usize>,
}

impl Feedback {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: format!("❌ {}", message.into()),
            tone: Tone::Failure,
            highlight: None,
        }
    }
}

/// Map a grading result onto the page, given how many lines the editor
/// currently holds. Lines outside `[0, line_count)` are never highlighted.
pub fn feedback_for(result: &SubmissionResult, line_count: usize) -> Feedback {
    if result.correct {
        let explanation = result.explanation.as_deref().unwrap_or_default();
        return Feedback {
            message: format!("✅ Correct!\n\n{explanation}"),
            tone: Tone::Success,
            highlight: None,
        };
    }

    let highlight = result
        .fix_line
        .and_then(|l| usize::try_from(l).ok())
        .filter(|l| *l < line_count);

    if result.is_partial() {
        let line = result
            .fix_line
            .map(|l| l.to_string())
            .unwrap_or_else(|| "?".to_string());
        let error = result.error.as_deref().unwrap_or_default();
        Feedback {
            message: format!("🟡 Almost there! Check line {line}.\n\n{error}"),
            tone: Tone::Partial,
            highlight,
        }
    } else {
        let mut fb = Feedback::failure(result.error.as_deref().unwrap_or("Try again!"));
        fb.highlight = highlight;
        fb
    }
}

use std::fmt;

use crate::feedback::{Feedback, Tone, feedback_for};
use crate::models::{ErrorPayload, Puzzle, PuzzleId, SubmissionResult};

/// Fallback text when a failed load carries no usable message.
pub const UNAVAILABLE_TEXT: &str = "Puzzle unavailable";
/// Result text when the code editor widget cannot be created.
pub const EDITOR_UNAVAILABLE_TEXT: &str = "The code editor could not be created.";

/// The operations the page needs from the code editor widget.
pub trait CodeEditor {
    fn value(&self) -> String;
    fn set_value(&mut self, text: &str);
    fn line_count(&self) -> usize;
    /// Drop every line highlight and text mark left by earlier submissions.
    fn clear_highlights(&mut self);
    fn highlight_line(&mut self, line: usize);
    fn scroll_to_line(&mut self, line: usize);
}

/// The page elements the controller writes to.
pub trait Page {
    type Editor: CodeEditor;
    type Error: fmt::Display;

    fn set_description(&mut self, text: &str);
    fn set_difficulty(&mut self, text: &str);
    /// `tone` of `None` clears any colour left on the result area.
    fn set_result(&mut self, text: &str, tone: Option<Tone>);
    /// Create the editor widget inside the page, holding `snippet`.
    fn mount_editor(&mut self, snippet: &str) -> Result<Self::Editor, Self::Error>;
}

/// The editor is created lazily by the first successful load.
#[derive(Debug)]
pub enum EditorSlot<E> {
    Uninitialized,
    Ready(E),
}

impl<E> EditorSlot<E> {
    pub fn is_ready(&self) -> bool {
        matches!(self, EditorSlot::Ready(_))
    }

    pub fn ready(&self) -> Option<&E> {
        match self {
            EditorSlot::Ready(e) => Some(e),
            EditorSlot::Uninitialized => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut E> {
        match self {
            EditorSlot::Ready(e) => Some(e),
            EditorSlot::Uninitialized => None,
        }
    }
}

/// Result of a puzzle request, reduced to what the page cares about.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    Loaded(Puzzle),
    Unavailable(ErrorPayload),
}

impl LoadOutcome {
    /// Classify a response by status and body. A success body that is not a
    /// puzzle counts as unavailable.
    pub fn from_response(ok: bool, body: &str) -> Self {
        if !ok {
            return LoadOutcome::Unavailable(ErrorPayload::from_body(body));
        }
        match serde_json::from_str::<Puzzle>(body) {
            Ok(p) => LoadOutcome::Loaded(p),
            Err(_) => LoadOutcome::Unavailable(ErrorPayload::default()),
        }
    }
}

/// Form fields posted to the submit endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub code: String,
    pub puzzle_id: PuzzleId,
}

impl Submission {
    pub fn form_fields(&self) -> [(&'static str, String); 2] {
        [
            ("code", self.code.clone()),
            ("puzzle_id", self.puzzle_id.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError<E> {
    /// Submit pressed before any puzzle was shown.
    NotReady,
    /// The editor widget could not be created.
    Mount(E),
}

impl<E: fmt::Display> fmt::Display for ControllerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::NotReady => f.write_str("Load a puzzle before submitting."),
            ControllerError::Mount(e) => write!(f, "editor could not be created: {e}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for ControllerError<E> {}

/// Page state between user actions: the rendered puzzle's id and the editor.
pub struct PuzzleController<P: Page> {
    page: P,
    editor: EditorSlot<P::Editor>,
    current_puzzle_id: Option<PuzzleId>,
}

impl<P: Page> PuzzleController<P> {
    pub fn new(page: P) -> Self {
        Self {
            page,
            editor: EditorSlot::Uninitialized,
            current_puzzle_id: None,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn editor(&self) -> &EditorSlot<P::Editor> {
        &self.editor
    }

    pub fn current_puzzle_id(&self) -> Option<&PuzzleId> {
        self.current_puzzle_id.as_ref()
    }

    pub fn apply_load(&mut self, outcome: LoadOutcome) -> Result<(), ControllerError<P::Error>> {
        match outcome {
            LoadOutcome::Loaded(p) => self.show_puzzle(p),
            LoadOutcome::Unavailable(payload) => {
                self.show_unavailable(payload.error.as_deref());
                Ok(())
            }
        }
    }

    /// Render a puzzle. The editor is mounted before any text is written, so
    /// a failed mount leaves the page in the unavailable state.
    pub fn show_puzzle(&mut self, puzzle: Puzzle) -> Result<(), ControllerError<P::Error>> {
        if let Some(editor) = self.editor.ready_mut() {
            editor.clear_highlights();
            editor.set_value(&puzzle.snippet);
        } else {
            match self.page.mount_editor(&puzzle.snippet) {
                Ok(editor) => self.editor = EditorSlot::Ready(editor),
                Err(e) => {
                    self.show_unavailable(None);
                    self.show_feedback(&Feedback::failure(EDITOR_UNAVAILABLE_TEXT));
                    return Err(ControllerError::Mount(e));
                }
            }
        }
        self.page.set_description(&puzzle.headline());
        self.page.set_difficulty(&puzzle.difficulty_label());
        self.current_puzzle_id = Some(puzzle.id);
        self.page.set_result("", None);
        Ok(())
    }

    /// Degrade the page after a failed load. The previous puzzle id is kept
    /// so the editor and id never disagree about which puzzle is shown.
    pub fn show_unavailable(&mut self, message: Option<&str>) {
        let text = message
            .filter(|m| !m.is_empty())
            .unwrap_or(UNAVAILABLE_TEXT);
        self.page.set_description(text);
        self.page.set_difficulty("");
        if let Some(editor) = self.editor.ready_mut() {
            editor.clear_highlights();
            editor.set_value("");
        }
        self.page.set_result("", None);
    }

    /// Collect what to post. When nothing is loaded yet the refusal is shown
    /// in the result area and nothing should be sent.
    pub fn prepare_submission(&mut self) -> Result<Submission, ControllerError<P::Error>> {
        let ready = self
            .editor
            .ready()
            .zip(self.current_puzzle_id.as_ref())
            .map(|(editor, id)| Submission {
                code: editor.value(),
                puzzle_id: id.clone(),
            });
        match ready {
            Some(s) => Ok(s),
            None => {
                let err = ControllerError::NotReady;
                self.show_feedback(&Feedback::failure(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn show_submission(&mut self, result: &SubmissionResult) -> Feedback {
        let line_count = self.editor.ready().map(|e| e.line_count()).unwrap_or(0);
        let feedback = feedback_for(result, line_count);
        self.show_feedback(&feedback);
        feedback
    }

    pub fn show_submission_failure(&mut self, reason: &str) {
        self.show_feedback(&Feedback::failure(format!("Submission failed: {reason}")));
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        if let Some(editor) = self.editor.ready_mut() {
            editor.clear_highlights();
            if let Some(line) = feedback.highlight {
                editor.highlight_line(line);
                editor.scroll_to_line(line);
            }
        }
        self.page.set_result(&feedback.message, Some(feedback.tone));
    }
}

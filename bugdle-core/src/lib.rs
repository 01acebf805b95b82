//! Platform-independent half of the Bugdle page: wire models, endpoint
//! URLs, result formatting and the page controller.

pub mod config;
pub mod controller;
pub mod feedback;
pub mod models;
pub mod source;

pub use config::{CalendarOptions, ClientConfig, EditorOptions};
pub use controller::{
    CodeEditor, ControllerError, EditorSlot, LoadOutcome, Page, PuzzleController, Submission,
};
pub use feedback::{Feedback, Tone, feedback_for};
pub use models::{ErrorPayload, Puzzle, PuzzleId, SubmissionResult};
pub use source::{DateError, PuzzleDate, PuzzleSource, submit_url};

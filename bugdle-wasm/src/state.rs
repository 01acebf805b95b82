use bugdle_core::{ClientConfig, PuzzleController};
use web_sys::Window;

use crate::dom::DomPage;

/// Page state shared by the event handlers behind an `Rc<RefCell<_>>`.
/// Never hold a borrow across an `.await`.
pub struct State {
    pub window: Window,
    pub config: ClientConfig,
    pub controller: PuzzleController<DomPage>,
}

impl State {
    pub fn new(window: Window, config: ClientConfig, page: DomPage) -> Self {
        Self {
            window,
            config,
            controller: PuzzleController::new(page),
        }
    }
}

/// Element ids the page markup must provide.
pub const DESC_ID: &str = "desc";
pub const DIFFICULTY_ID: &str = "difficulty";
pub const EDITOR_ID: &str = "editor";
pub const RESULT_ID: &str = "result";
pub const SUBMIT_BTN_ID: &str = "submitBtn";
pub const RANDOM_BTN_ID: &str = "randomBtn";
pub const CALENDAR_ID: &str = "calendar-container";

/// Line class applied to the fix line; styled by the page stylesheet.
pub const HIGHLIGHT_CLASS: &str = "highlight-line";
/// Layer of the editor line the highlight class is attached to.
pub const HIGHLIGHT_LAYER: &str = "background";

/// Global the host page may assign to override client settings.
pub const CONFIG_GLOBAL: &str = "__BUGDLE_CONFIG";
/// Legacy base path global shared with other static pages.
pub const BASE_URL_GLOBAL: &str = "__BASE_URL";
/// Query parameter selecting the puzzle date on first load.
pub const DATE_QUERY_PARAM: &str = "date";

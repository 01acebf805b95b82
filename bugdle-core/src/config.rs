use serde::{Deserialize, Serialize};

/// Options handed to the code editor widget at mount time.
/// Field names follow the widget's own option keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
    pub mode: String,
    pub theme: String,
    pub line_numbers: bool,
    pub indent_unit: u32,
    pub tab_size: u32,
    pub indent_with_tabs: bool,
    pub line_wrapping: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            mode: "python".to_string(),
            theme: "dracula".to_string(),
            line_numbers: true,
            indent_unit: 4,
            tab_size: 4,
            indent_with_tabs: false,
            line_wrapping: false,
        }
    }
}

/// Options handed to the date picker widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarOptions {
    pub inline: bool,
    /// `"today"` disables future dates; `None` leaves the range open.
    pub max_date: Option<String>,
    pub theme: String,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            inline: true,
            max_date: Some("today".to_string()),
            theme: "dark".to_string(),
        }
    }
}

/// Page-level settings. The host page may override any subset of fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Margin in pixels kept around a highlighted line when scrolling to it.
    pub scroll_margin: u32,
    pub editor: EditorOptions,
    pub calendar: CalendarOptions,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            scroll_margin: 100,
            editor: EditorOptions::default(),
            calendar: CalendarOptions::default(),
        }
    }
}

impl ClientConfig {
    /// Parse host overrides. `fallback_base` is used when the overrides do
    /// not name a base URL themselves.
    pub fn from_overrides(
        json: Option<&str>,
        fallback_base: Option<&str>,
    ) -> Result<Self, serde_json::Error> {
        let mut cfg = match json {
            Some(s) if !s.trim().is_empty() => serde_json::from_str::<ClientConfig>(s)?,
            _ => ClientConfig::default(),
        };
        let names_base = json
            .and_then(|s| serde_json::from_str::<serde_json::Value>(s).ok())
            .map(|v| v.get("base_url").is_some())
            .unwrap_or(false);
        if !names_base && let Some(base) = fallback_base {
            cfg.base_url = base.to_string();
        }
        Ok(cfg)
    }
}

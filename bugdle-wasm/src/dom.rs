use bugdle_core::{ClientConfig, EditorOptions, Page, Tone};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{DESC_ID, DIFFICULTY_ID, EDITOR_ID, RESULT_ID};
use crate::utils::js_error_text;
use crate::widgets::CodeMirrorEditor;

/// Look up an element the page cannot work without.
pub fn require_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))
}

pub fn require_html_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    require_element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))
}

/// The puzzle page as the controller sees it.
pub struct DomPage {
    desc: HtmlElement,
    difficulty: HtmlElement,
    result: HtmlElement,
    editor_host: Element,
    editor_options: EditorOptions,
    scroll_margin: u32,
}

impl DomPage {
    pub fn from_document(document: &Document, config: &ClientConfig) -> Result<Self, JsValue> {
        Ok(Self {
            desc: require_html_element(document, DESC_ID)?,
            difficulty: require_html_element(document, DIFFICULTY_ID)?,
            result: require_html_element(document, RESULT_ID)?,
            editor_host: require_element(document, EDITOR_ID)?,
            editor_options: config.editor.clone(),
            scroll_margin: config.scroll_margin,
        })
    }
}

impl Page for DomPage {
    type Editor = CodeMirrorEditor;
    type Error = String;

    fn set_description(&mut self, text: &str) {
        self.desc.set_inner_text(text);
    }

    fn set_difficulty(&mut self, text: &str) {
        self.difficulty.set_inner_text(text);
    }

    fn set_result(&mut self, text: &str, tone: Option<Tone>) {
        self.result.set_inner_text(text);
        let style = self.result.style();
        let styled = match tone {
            Some(t) => style.set_property("color", t.color()),
            None => style.remove_property("color").map(|_| ()),
        };
        if let Err(err) = styled {
            gloo::console::warn!(format!("result colour not applied: {}", js_error_text(&err)));
        }
    }

    fn mount_editor(&mut self, snippet: &str) -> Result<CodeMirrorEditor, String> {
        CodeMirrorEditor::mount(
            &self.editor_host,
            snippet,
            &self.editor_options,
            self.scroll_margin,
        )
        .map_err(|e| js_error_text(&e))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::utils::local_puzzle_date;
    use bugdle_core::PuzzleSource;
    use console_error_panic_hook::set_once as set_panic_hook;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window()
            .and_then(|w| w.document())
            .expect("document available")
    }

    fn fixture() -> Document {
        let doc = document();
        for id in [DESC_ID, DIFFICULTY_ID, EDITOR_ID, RESULT_ID] {
            if doc.get_element_by_id(id).is_none() {
                let el = doc.create_element("div").expect("create element");
                el.set_id(id);
                doc.body()
                    .expect("body available")
                    .append_child(&el)
                    .expect("append element");
            }
        }
        doc
    }

    fn text_of(doc: &Document, id: &str) -> String {
        doc.get_element_by_id(id)
            .and_then(|e| e.text_content())
            .unwrap_or_default()
    }

    fn result_color(doc: &Document) -> String {
        require_html_element(doc, RESULT_ID)
            .expect("result element")
            .style()
            .get_property_value("color")
            .expect("color readable")
    }

    #[wasm_bindgen_test]
    fn writes_description_and_difficulty() {
        set_panic_hook();
        let doc = fixture();
        let mut page = DomPage::from_document(&doc, &ClientConfig::default()).expect("page");
        page.set_description("T — D");
        page.set_difficulty("Difficulty: Unknown");
        assert_eq!(text_of(&doc, DESC_ID), "T — D");
        assert_eq!(text_of(&doc, DIFFICULTY_ID), "Difficulty: Unknown");
    }

    #[wasm_bindgen_test]
    fn result_tone_sets_and_clears_colour() {
        set_panic_hook();
        let doc = fixture();
        let mut page = DomPage::from_document(&doc, &ClientConfig::default()).expect("page");
        page.set_result("❌ Try again!", Some(Tone::Failure));
        assert_eq!(text_of(&doc, RESULT_ID), "❌ Try again!");
        assert_eq!(result_color(&doc), "rgb(248, 81, 73)");
        page.set_result("", None);
        assert_eq!(text_of(&doc, RESULT_ID), "");
        assert_eq!(result_color(&doc), "");
    }

    #[wasm_bindgen_test]
    fn picked_local_date_targets_its_calendar_day() {
        set_panic_hook();
        // Month is zero-based on the JS side; the constructor builds local midnight.
        let picked = js_sys::Date::new_with_year_month_day(2024, 0, 5);
        let date = local_puzzle_date(&picked).expect("valid calendar day");
        assert_eq!(date.to_string(), "2024-01-05");
        let source = PuzzleSource::from_selection(&[date]).expect("non-empty selection");
        assert_eq!(source.url("/"), "/puzzle/date/2024-01-05");

        let new_years_eve = js_sys::Date::new_with_year_month_day(2023, 11, 31);
        assert_eq!(
            local_puzzle_date(&new_years_eve).expect("valid calendar day").to_string(),
            "2023-12-31"
        );
    }

    #[wasm_bindgen_test]
    fn missing_element_is_an_error() {
        set_panic_hook();
        let err = require_element(&document(), "no-such-element").unwrap_err();
        assert_eq!(err.as_string().as_deref(), Some("missing #no-such-element element"));
    }
}

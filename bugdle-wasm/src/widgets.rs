//! Bindings to the two widgets the page script tags load: CodeMirror 5 for
//! the snippet and flatpickr for the date picker.

use bugdle_core::{CalendarOptions, CodeEditor, EditorOptions, PuzzleDate};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::constants::{HIGHLIGHT_CLASS, HIGHLIGHT_LAYER};
use crate::utils::{js_error_text, local_puzzle_date, to_js};

#[wasm_bindgen]
extern "C" {
    type CodeMirror;

    #[wasm_bindgen(catch, js_name = CodeMirror)]
    fn create_code_mirror(host: &Element, options: &JsValue) -> Result<CodeMirror, JsValue>;

    #[wasm_bindgen(method, js_name = getValue)]
    fn get_value(this: &CodeMirror) -> String;

    #[wasm_bindgen(method, js_name = setValue)]
    fn set_value(this: &CodeMirror, value: &str);

    #[wasm_bindgen(method, js_name = lineCount)]
    fn line_count(this: &CodeMirror) -> u32;

    #[wasm_bindgen(method, js_name = addLineClass)]
    fn add_line_class(this: &CodeMirror, line: u32, layer: &str, class: &str);

    #[wasm_bindgen(method, js_name = removeLineClass)]
    fn remove_line_class(this: &CodeMirror, line: u32, layer: &str, class: &str);

    #[wasm_bindgen(method, js_name = getAllMarks)]
    fn get_all_marks(this: &CodeMirror) -> js_sys::Array;

    #[wasm_bindgen(method, js_name = scrollIntoView)]
    fn scroll_into_view(this: &CodeMirror, what: &JsValue, margin: u32);

    type TextMarker;

    #[wasm_bindgen(method)]
    fn clear(this: &TextMarker);

    #[wasm_bindgen(catch, js_name = flatpickr)]
    fn create_flatpickr(host: &Element, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// A mounted CodeMirror instance.
pub struct CodeMirrorEditor {
    cm: CodeMirror,
    scroll_margin: u32,
}

impl CodeMirrorEditor {
    pub fn mount(
        host: &Element,
        snippet: &str,
        options: &EditorOptions,
        scroll_margin: u32,
    ) -> Result<Self, JsValue> {
        let opts = to_js(options)?;
        js_sys::Reflect::set(&opts, &JsValue::from_str("value"), &JsValue::from_str(snippet))?;
        let cm = create_code_mirror(host, &opts)?;
        Ok(Self { cm, scroll_margin })
    }
}

impl CodeEditor for CodeMirrorEditor {
    fn value(&self) -> String {
        self.cm.get_value()
    }

    fn set_value(&mut self, text: &str) {
        self.cm.set_value(text);
    }

    fn line_count(&self) -> usize {
        self.cm.line_count() as usize
    }

    fn clear_highlights(&mut self) {
        for mark in self.cm.get_all_marks().iter() {
            mark.unchecked_into::<TextMarker>().clear();
        }
        for line in 0..self.cm.line_count() {
            self.cm
                .remove_line_class(line, HIGHLIGHT_LAYER, HIGHLIGHT_CLASS);
        }
    }

    fn highlight_line(&mut self, line: usize) {
        self.cm
            .add_line_class(line as u32, HIGHLIGHT_LAYER, HIGHLIGHT_CLASS);
    }

    fn scroll_to_line(&mut self, line: usize) {
        let pos = js_sys::Object::new();
        let line_key = JsValue::from_str("line");
        let ch_key = JsValue::from_str("ch");
        let built = js_sys::Reflect::set(&pos, &line_key, &JsValue::from(line as u32))
            .and_then(|_| js_sys::Reflect::set(&pos, &ch_key, &JsValue::from(0)));
        if let Err(err) = built {
            gloo::console::warn!(format!("cannot scroll to line {line}: {}", js_error_text(&err)));
            return;
        }
        self.cm.scroll_into_view(&pos, self.scroll_margin);
    }
}

/// Mount the inline date picker. `on_pick` runs for every non-empty
/// selection with the picked local calendar day.
pub fn mount_calendar(
    host: &Element,
    options: &CalendarOptions,
    initial: Option<PuzzleDate>,
    on_pick: impl FnMut(PuzzleDate) + 'static,
) -> Result<(), JsValue> {
    let opts = to_js(options)?;
    let default_date = match initial {
        Some(d) => JsValue::from_str(&d.to_string()),
        None => js_sys::Date::new_0().into(),
    };
    js_sys::Reflect::set(&opts, &JsValue::from_str("defaultDate"), &default_date)?;

    let mut on_pick = on_pick;
    let onchange = Closure::<dyn FnMut(js_sys::Array)>::wrap(Box::new(
        move |selected: js_sys::Array| {
            let Some(first) = selected.iter().next() else {
                return;
            };
            let Ok(date) = first.dyn_into::<js_sys::Date>() else {
                gloo::console::warn!("date picker returned a non-Date selection");
                return;
            };
            match local_puzzle_date(&date) {
                Ok(d) => on_pick(d),
                Err(e) => {
                    gloo::console::warn!(format!("ignoring picked date: {e}"));
                }
            }
        },
    ));
    js_sys::Reflect::set(&opts, &JsValue::from_str("onChange"), onchange.as_ref())?;
    create_flatpickr(host, &opts)?;
    onchange.forget();
    Ok(())
}

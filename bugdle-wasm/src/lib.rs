use std::cell::RefCell;
use std::rc::Rc;

use bugdle_core::{LoadOutcome, PuzzleDate, PuzzleSource, submit_url};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

mod api;
mod constants;
mod dom;
mod state;
mod utils;
mod widgets;

use crate::constants::{CALENDAR_ID, DATE_QUERY_PARAM, RANDOM_BTN_ID, SUBMIT_BTN_ID};
use crate::dom::{DomPage, require_element, require_html_element};
use crate::state::State;
use crate::utils::{get_query_param, js_error_text, read_client_config};

/// Fetch a puzzle and hand the outcome to the controller. Transport failures
/// degrade the page the same way an error response does.
async fn load_puzzle(state: Rc<RefCell<State>>, source: PuzzleSource) {
    let (window, url) = {
        let s = state.borrow();
        (s.window.clone(), source.url(&s.config.base_url))
    };
    let outcome = match api::fetch_puzzle(&window, &url).await {
        Ok(outcome) => outcome,
        Err(err) => {
            gloo::console::warn!(format!("fetching {url} failed: {}", js_error_text(&err)));
            LoadOutcome::Unavailable(Default::default())
        }
    };
    let loaded = matches!(outcome, LoadOutcome::Loaded(_));
    let applied = state.borrow_mut().controller.apply_load(outcome);
    match applied {
        Ok(()) if loaded => {
            gloo::console::log!(format!("puzzle loaded ({source})"));
        }
        Ok(()) => {
            gloo::console::warn!(format!("puzzle unavailable ({source})"));
        }
        Err(err) => {
            gloo::console::warn!(format!("could not show puzzle: {err}"));
        }
    }
}

/// Post the editor contents for the displayed puzzle and render the verdict.
async fn submit_fix(state: Rc<RefCell<State>>) {
    let (window, url, submission) = {
        let mut s = state.borrow_mut();
        let submission = match s.controller.prepare_submission() {
            Ok(sub) => sub,
            Err(err) => {
                gloo::console::warn!(format!("submission refused: {err}"));
                return;
            }
        };
        (s.window.clone(), submit_url(&s.config.base_url), submission)
    };
    match api::post_submission(&window, &url, &submission).await {
        Ok(result) => {
            let feedback = state.borrow_mut().controller.show_submission(&result);
            gloo::console::log!(format!(
                "submission for puzzle {} graded: {:?}",
                submission.puzzle_id, feedback.tone
            ));
        }
        Err(err) => {
            let reason = js_error_text(&err);
            gloo::console::warn!(format!("submission failed: {reason}"));
            state
                .borrow_mut()
                .controller
                .show_submission_failure(&reason);
        }
    }
}

fn attach_ui(state: Rc<RefCell<State>>, doc: &Document) -> Result<(), JsValue> {
    // Submit button
    let btn = require_html_element(doc, SUBMIT_BTN_ID)?;
    let st = state.clone();
    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        wasm_bindgen_futures::spawn_local(submit_fix(st.clone()));
    }));
    btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();

    // Random puzzle button
    let btn = require_html_element(doc, RANDOM_BTN_ID)?;
    let st = state.clone();
    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        wasm_bindgen_futures::spawn_local(load_puzzle(st.clone(), PuzzleSource::Random));
    }));
    btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();
    Ok(())
}

/// Date picker; a page without the widget script still works without it.
fn attach_calendar(
    state: Rc<RefCell<State>>,
    doc: &Document,
    initial: Option<PuzzleDate>,
) -> Result<(), JsValue> {
    let host = require_element(doc, CALENDAR_ID)?;
    let options = state.borrow().config.calendar.clone();
    let st = state.clone();
    let mounted = widgets::mount_calendar(&host, &options, initial, move |date| {
        if let Some(source) = PuzzleSource::from_selection(&[date]) {
            wasm_bindgen_futures::spawn_local(load_puzzle(st.clone(), source));
        }
    });
    if let Err(err) = mounted {
        gloo::console::warn!(format!("date picker unavailable: {}", js_error_text(&err)));
    }
    Ok(())
}

/// `?date=YYYY-MM-DD` on the page URL selects the first puzzle shown.
fn deep_link_date(window: &web_sys::Window) -> Option<PuzzleDate> {
    let search = window.location().search().ok()?;
    let raw = get_query_param(&search, DATE_QUERY_PARAM)?;
    match PuzzleDate::parse(&raw) {
        Ok(d) => Some(d),
        Err(err) => {
            gloo::console::warn!(format!("ignoring ?{DATE_QUERY_PARAM}: {err}"));
            None
        }
    }
}

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let config = read_client_config(&window);
    let page = DomPage::from_document(&document, &config)?;
    let initial = deep_link_date(&window);
    let state = Rc::new(RefCell::new(State::new(window, config, page)));

    attach_ui(state.clone(), &document)?;
    attach_calendar(state.clone(), &document, initial)?;

    let first = initial.map(PuzzleSource::Date).unwrap_or(PuzzleSource::Today);
    wasm_bindgen_futures::spawn_local(load_puzzle(state, first));
    Ok(())
}

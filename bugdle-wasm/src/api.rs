use bugdle_core::{LoadOutcome, Submission, SubmissionResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response, Window};

async fn send(window: &Window, request: &Request) -> Result<(bool, String), JsValue> {
    let resp: Response = JsFuture::from(window.fetch_with_request(request))
        .await?
        .dyn_into()?;
    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.ok(), text.as_string().unwrap_or_default()))
}

/// GET one of the puzzle endpoints. Non-2xx answers are returned as
/// `LoadOutcome::Unavailable`; only transport failures are errors.
pub async fn fetch_puzzle(window: &Window, url: &str) -> Result<LoadOutcome, JsValue> {
    let request = Request::new_with_str(url)?;
    let (ok, body) = send(window, &request).await?;
    Ok(LoadOutcome::from_response(ok, &body))
}

/// POST the edited code as multipart form fields and decode the verdict.
/// The body is decoded whatever the status, since error answers share the
/// result shape.
pub async fn post_submission(
    window: &Window,
    url: &str,
    submission: &Submission,
) -> Result<SubmissionResult, JsValue> {
    let form = FormData::new()?;
    for (name, value) in submission.form_fields() {
        form.append_with_str(name, &value)?;
    }
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);
    let request = Request::new_with_str_and_init(url, &init)?;
    let (_, body) = send(window, &request).await?;
    serde_json::from_str(&body)
        .map_err(|e| JsValue::from_str(&format!("unreadable response: {e}")))
}

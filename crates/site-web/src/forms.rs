//! DOM and fetch glue around [`site_core::form::FormController`].

use crate::dom;
use site_core::api::ApiResponse;
use site_core::form::{
    Completion, FormController, FormSpec, ResponseOutcome, StatusMessage, SubmitButton, SubmitDecision,
    Submission, SuccessDisplay,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct FormParts {
    form: web::HtmlFormElement,
    status: Option<web::HtmlElement>,
    button: Option<web::HtmlButtonElement>,
}

fn locate(document: &web::Document, spec: &FormSpec) -> Option<FormParts> {
    let form = document
        .get_element_by_id(spec.form_id)?
        .dyn_into::<web::HtmlFormElement>()
        .ok()?;
    let button = match spec.submit_button {
        SubmitButton::ById(id) => document.get_element_by_id(id),
        SubmitButton::FirstInForm => form.query_selector("button").ok().flatten(),
    }
    .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    Some(FormParts {
        status: dom::html_element(document, spec.status_id),
        form,
        button,
    })
}

/// Hook `spec`'s form up if it exists on this page.
pub fn wire_form(document: &web::Document, spec: &'static FormSpec) {
    let Some(parts) = locate(document, spec) else {
        return;
    };
    log::info!("[forms] wired #{}", spec.form_id);
    let parts = Rc::new(parts);
    let controller = Rc::new(RefCell::new(FormController::new(spec)));
    let document = document.clone();
    let target = parts.form.clone();
    dom::listen(&target, "submit", move |ev: web::Event| {
        ev.prevent_default();
        on_submit(&document, &parts, &controller);
    });
}

fn on_submit(document: &web::Document, parts: &Rc<FormParts>, controller: &Rc<RefCell<FormController>>) {
    let spec = controller.borrow().spec();
    if let Some(status) = &parts.status {
        dom::set_visible(status, false);
    }
    if let SuccessDisplay::Element { element_id } = spec.success {
        if let Some(el) = dom::html_element(document, element_id) {
            dom::set_visible(&el, false);
        }
    }

    let decision = controller
        .borrow_mut()
        .begin(|field| dom::field_value(document, field.element_id));
    let submission = match decision {
        SubmitDecision::Send(s) => s,
        SubmitDecision::Rejected(status) => {
            show(parts, &status);
            return;
        }
        SubmitDecision::Busy => return,
    };

    let original_label = parts.button.as_ref().and_then(|b| b.text_content());
    if let Some(b) = &parts.button {
        b.set_disabled(true);
        b.set_text_content(Some(spec.busy_label));
    }

    let document = document.clone();
    let parts = parts.clone();
    let controller = controller.clone();
    spawn_local(async move {
        let outcome = match post_json(&submission).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("[forms] {} submission error: {:?}", spec.form_id, e);
                ResponseOutcome::NetworkError
            }
        };
        let completion = controller.borrow_mut().finish(outcome);
        apply(&document, &parts, spec, completion);
        if let Some(b) = &parts.button {
            b.set_disabled(false);
            let label = spec.idle_label.map(str::to_owned).or(original_label);
            b.set_text_content(label.as_deref());
        }
    });
}

fn show(parts: &FormParts, status: &StatusMessage) {
    if let Some(el) = &parts.status {
        dom::show_status(el, status);
    }
}

fn apply(document: &web::Document, parts: &FormParts, spec: &FormSpec, completion: Completion) {
    match completion {
        Completion::Succeeded(SuccessDisplay::Element { element_id }) => {
            parts.form.reset();
            if let Some(el) = dom::html_element(document, element_id) {
                dom::set_visible(&el, true);
                dom::scroll_into_view_smooth(&el);
            }
        }
        Completion::Succeeded(SuccessDisplay::Status { text, hide_after_ms }) => {
            for field in spec.fields {
                dom::clear_field(document, field.element_id);
            }
            show(parts, &StatusMessage::success(text));
            if let Some(el) = parts.status.clone() {
                dom::set_timeout(hide_after_ms, move || dom::set_visible(&el, false));
            }
        }
        Completion::Failed(status) => show(parts, &status),
    }
}

/// POST `submission` as JSON. Transport failures are `Err`; any HTTP answer is
/// an outcome, with `body: None` when it is not a JSON `{success, message}`.
async fn post_json(submission: &Submission) -> anyhow::Result<ResponseOutcome> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let headers = web::Headers::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&wasm_bindgen::JsValue::from_str(&submission.body.to_string()));
    let request = web::Request::new_with_str_and_init(submission.endpoint, &init)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ok = resp.ok();
    let text = match resp.text() {
        Ok(p) => JsFuture::from(p).await.ok().and_then(|v| v.as_string()),
        Err(_) => None,
    };
    let body = text.and_then(|t| serde_json::from_str::<ApiResponse>(&t).ok());
    Ok(ResponseOutcome::Received { ok, body })
}

use crate::constants::*;
use site_core::form::{StatusKind, StatusMessage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a listener for the page's lifetime.
pub fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        );
    }
    closure.forget();
}

/// Run `f` every `ms` milliseconds for the page's lifetime.
pub fn set_interval(ms: i32, f: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        );
    }
    closure.forget();
}

pub fn elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

#[inline]
pub fn set_visible(el: &web::HtmlElement, visible: bool) {
    set_style(el, "display", if visible { "block" } else { "none" });
}

/// Current value of an `<input>` or `<textarea>`.
pub fn field_value(document: &web::Document, id: &str) -> Option<String> {
    let el = document.get_element_by_id(id)?;
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlTextAreaElement>().map(|t| t.value())
}

pub fn clear_field(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value("");
        } else if let Some(t) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            t.set_value("");
        }
    }
}

/// Show a colored status line with a left accent border.
pub fn show_status(el: &web::HtmlElement, status: &StatusMessage) {
    el.set_text_content(Some(&status.text));
    set_visible(el, true);
    let (color, bg) = match status.kind {
        StatusKind::Error => (STATUS_ERROR_COLOR, STATUS_ERROR_BG),
        StatusKind::Success => (STATUS_SUCCESS_COLOR, STATUS_SUCCESS_BG),
    };
    set_style(el, "background-color", bg);
    set_style(el, "color", color);
    set_style(el, "border-left", &format!("4px solid {color}"));
}

pub fn scroll_into_view_smooth(el: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Keep the canvas backing store at CSS size × device pixel ratio, capped at
/// `max_pixel_ratio`. Returns the new backing size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, max_pixel_ratio: f32) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(max_pixel_ratio as f64);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}

pub fn viewport_css_width() -> u32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|v| v.max(0.0) as u32)
        .unwrap_or(0)
}

//! Decorative page behaviour around the scene: intro fade, slider, scroll
//! reveal, card tilt, smooth anchors, and the radio toggle.

use crate::constants::*;
use crate::dom;
use crate::input;
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_all(document: &web::Document) {
    wire_intro(document);
    wire_slider(document);
    wire_reveal(document);
    wire_card_tilt(document);
    wire_smooth_anchors(document);
    wire_radio(document);
}

fn wire_intro(document: &web::Document) {
    let Some(intro) = dom::html_element(document, INTRO_ID) else {
        return;
    };
    dom::set_timeout(INTRO_FADE_DELAY_MS, move || {
        dom::set_style(&intro, "opacity", "0");
        dom::set_style(&intro, "pointer-events", "none");
        dom::set_timeout(INTRO_REMOVE_DELAY_MS, move || intro.remove());
    });
}

fn wire_slider(document: &web::Document) {
    let images = dom::elements(document, SLIDER_IMAGES_SELECTOR);
    if images.is_empty() {
        return;
    }
    let mut index = 0usize;
    dom::set_interval(SLIDER_INTERVAL_MS, move || {
        for img in &images {
            _ = img.class_list().remove_1("active");
        }
        index = input::next_slide(index, images.len());
        _ = images[index].class_list().add_1("active");
    });
}

fn wire_reveal(document: &web::Document) {
    let targets = dom::elements(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }
    let reveal_all = |targets: &[web::HtmlElement]| {
        for el in targets {
            _ = el.class_list().add_1("active");
        }
    };

    let callback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1("active");
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
            callback.forget();
        }
        Err(e) => {
            log::info!("[effects] no IntersectionObserver ({e:?}), revealing all");
            reveal_all(&targets);
        }
    }
}

fn wire_card_tilt(document: &web::Document) {
    for card in dom::elements(document, TILT_CARDS_SELECTOR) {
        let hovered = card.clone();
        dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
            let rect = hovered.get_bounding_client_rect();
            let x = ev.client_x() as f32 - rect.left() as f32;
            let y = ev.client_y() as f32 - rect.top() as f32;
            let (rx, ry) =
                input::card_tilt_deg(x, y, rect.width() as f32, rect.height() as f32, TILT_MAX_DEG);
            dom::set_style(
                &hovered,
                "transform",
                &input::card_transform(rx, ry, TILT_PERSPECTIVE_PX, TILT_LIFT_PX),
            );
        });
        let left = card.clone();
        dom::listen(&card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&left, "transform", "");
        });
    }
}

fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::elements(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(&href) {
                dom::scroll_into_view_smooth(&target);
            }
        });
    }
}

fn wire_radio(document: &web::Document) {
    let (Some(button), Some(stream)) = (
        dom::html_element(document, RADIO_BUTTON_ID),
        document
            .get_element_by_id(RADIO_STREAM_ID)
            .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok()),
    ) else {
        return;
    };
    let playing = Cell::new(false);
    let label = button.clone();
    dom::listen(&button, "click", move |_: web::MouseEvent| {
        if playing.get() {
            _ = stream.pause();
            label.set_text_content(Some(RADIO_PLAY_LABEL));
        } else {
            if let Err(e) = stream.play() {
                log::warn!("[effects] radio play failed: {e:?}");
            }
            label.set_text_content(Some(RADIO_PAUSE_LABEL));
        }
        playing.set(!playing.get());
    });
}

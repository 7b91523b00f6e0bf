#![cfg(target_arch = "wasm32")]
use site_core::form::{CONTACT_FORM, NEWSLETTER_FORM};
use site_core::{ImpactScene, SceneConfig, SceneState, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod effects;
mod events;
mod forms;
mod frame;
mod input;
mod projection;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    forms::wire_form(&document, &CONTACT_FORM);
    forms::wire_form(&document, &NEWSLETTER_FORM);
    effects::wire_all(&document);

    if let Err(e) = start_impact_panel(&document) {
        log::error!("[impact] {:?}", e);
    }
    start_earth_scene(&document)
}

fn wire_canvas_input(canvas: web::HtmlCanvasElement, max_pixel_ratio: f32) -> frame::EventQueue {
    let queue: frame::EventQueue = Rc::new(RefCell::new(Vec::new()));
    events::wire_input_handlers(events::InputWiring {
        canvas,
        queue: queue.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
        max_pixel_ratio,
    });
    queue
}

fn start_earth_scene(document: &web::Document) -> anyhow::Result<()> {
    // The scene only lives on pages that carry its canvas
    let Some(canvas_el) = document.get_element_by_id(constants::CANVAS_ID) else {
        log::info!("no #{} canvas on this page", constants::CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let config = SceneConfig::for_viewport(dom::viewport_css_width());
    let max_pixel_ratio = config.max_pixel_ratio;
    let (width, height) = dom::sync_canvas_backing_size(&canvas, max_pixel_ratio);
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    log::info!(
        "[scene] {} particles, {}x{} backing, seed {}",
        config.particle_count,
        width,
        height,
        seed
    );
    let scene = SceneState::new(config, Viewport::new(width, height), seed);
    let renderer = render::CanvasRenderer::new(&canvas, site_core::BG_DARK)?;
    let queue = wire_canvas_input(canvas, max_pixel_ratio);

    let driver = frame::EarthDriver { scene, renderer };
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(driver, queue))));
    Ok(())
}

/// Second, smaller scene filling the `.impact-3d` container.
fn start_impact_panel(document: &web::Document) -> anyhow::Result<()> {
    let Ok(Some(container)) = document.query_selector(constants::IMPACT_SELECTOR) else {
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::set_style(&canvas, "display", "block");
    dom::set_style(&canvas, "width", "100%");
    dom::set_style(&canvas, "height", "100%");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let max_pixel_ratio = SceneConfig::for_viewport(dom::viewport_css_width()).max_pixel_ratio;
    let (width, height) = dom::sync_canvas_backing_size(&canvas, max_pixel_ratio);
    log::info!("[impact] {}x{} backing", width, height);
    let scene = ImpactScene::new(Viewport::new(width, height));
    let renderer = render::CanvasRenderer::new(&canvas, site_core::IMPACT_BACKGROUND)?;
    let queue = wire_canvas_input(canvas, max_pixel_ratio);

    let driver = frame::ImpactDriver { scene, renderer };
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(driver, queue))));
    Ok(())
}

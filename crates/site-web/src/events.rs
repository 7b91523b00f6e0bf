use crate::constants::{CLICK_SLOP_PX, WHEEL_PX_PER_STEP};
use crate::dom;
use crate::frame::EventQueue;
use crate::input::{self, DragState};
use glam::Vec2;
use site_core::{SceneEvent, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub queue: EventQueue,
    pub drag_state: Rc<RefCell<DragState>>,
    pub max_pixel_ratio: f32,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_resize(&w);
}

#[inline]
fn pointer_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    let pos = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    (pos, Vec2::new(rect.width() as f32, rect.height() as f32))
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "pointerdown", move |ev: web::PointerEvent| {
        let (pos, _) = pointer_css(&ev, &w.canvas);
        w.drag_state.borrow_mut().press(pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "pointermove", move |ev: web::PointerEvent| {
        let (pos, _) = pointer_css(&ev, &w.canvas);
        let delta = w.drag_state.borrow_mut().motion(pos);
        if let Some(d) = delta {
            if w.drag_state.borrow().travelled > CLICK_SLOP_PX {
                w.queue.borrow_mut().push(SceneEvent::Orbit { dx: d.x, dy: d.y });
            }
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "pointerup", move |ev: web::PointerEvent| {
        let was_click = w.drag_state.borrow_mut().release(CLICK_SLOP_PX);
        if was_click {
            let (pos, size) = pointer_css(&ev, &w.canvas);
            let ndc = input::client_to_ndc(pos.x, pos.y, size.x, size.y);
            w.queue.borrow_mut().push(SceneEvent::Click(ndc));
        }
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    });
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "wheel", move |ev: web::WheelEvent| {
        let steps = input::wheel_steps(ev.delta_y() as f32, WHEEL_PX_PER_STEP);
        if steps != 0.0 {
            w.queue.borrow_mut().push(SceneEvent::Zoom(steps));
            ev.prevent_default();
        }
    });
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let Some(window) = web::window() else {
        return;
    };
    dom::listen(&window, "resize", move |_: web::Event| {
        let (width, height) = dom::sync_canvas_backing_size(&w.canvas, w.max_pixel_ratio);
        w.queue
            .borrow_mut()
            .push(SceneEvent::Resize(Viewport::new(width, height)));
    });
}

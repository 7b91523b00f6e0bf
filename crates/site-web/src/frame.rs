use crate::render::CanvasRenderer;
use instant::Instant;
use site_core::{FrameInput, ImpactScene, SceneEvent, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Events queued by DOM handlers and drained by the next frame.
pub type EventQueue = Rc<RefCell<Vec<SceneEvent>>>;

/// One animated canvas: a simulation plus the renderer that draws it.
pub trait FrameDriver {
    fn frame(&mut self, input: FrameInput<'_>);
}

pub struct EarthDriver {
    pub scene: SceneState,
    pub renderer: CanvasRenderer,
}

impl FrameDriver for EarthDriver {
    fn frame(&mut self, input: FrameInput<'_>) {
        match self.scene.frame(input, &mut self.renderer) {
            Ok(report) => {
                if !report.spawned.is_empty() || !report.expired.is_empty() {
                    log::debug!(
                        "[frame] tick={} spawned={:?} expired={:?} live={}",
                        report.tick,
                        report.spawned,
                        report.expired,
                        self.scene.garden.len()
                    );
                }
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub struct ImpactDriver {
    pub scene: ImpactScene,
    pub renderer: CanvasRenderer,
}

impl FrameDriver for ImpactDriver {
    fn frame(&mut self, input: FrameInput<'_>) {
        if let Err(e) = self.scene.frame(input, &mut self.renderer) {
            log::error!("[impact] render error: {:?}", e);
        }
    }
}

pub struct FrameContext<D> {
    pub driver: D,
    pub queue: EventQueue,
    pub started: Instant,
    pending: Vec<SceneEvent>,
}

impl<D: FrameDriver> FrameContext<D> {
    pub fn new(driver: D, queue: EventQueue) -> Self {
        Self {
            driver,
            queue,
            started: Instant::now(),
            pending: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now_sec = self.started.elapsed().as_secs_f64();
        // swap so handlers firing during render queue into a fresh buffer
        std::mem::swap(&mut self.pending, &mut *self.queue.borrow_mut());
        self.driver.frame(FrameInput {
            now_sec,
            events: &self.pending,
        });
        self.pending.clear();
    }
}

pub fn start_loop<D: FrameDriver + 'static>(frame_ctx: Rc<RefCell<FrameContext<D>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

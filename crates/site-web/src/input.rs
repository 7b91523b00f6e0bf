use glam::Vec2;

// Pure pointer/effect math kept free of web-sys so it can be tested on the host.

/// Map a point inside a `width`×`height` box (css px, y down) to NDC (y up).
#[inline]
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width > 0.0 && height > 0.0 {
        Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
    } else {
        Vec2::ZERO
    }
}

/// Tilt for a hovered card: `(rotate_x_deg, rotate_y_deg)`, each within ±max/2.
#[inline]
pub fn card_tilt_deg(x: f32, y: f32, width: f32, height: f32, max_deg: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let rx = ((y / height) - 0.5) * max_deg;
    let ry = ((x / width) - 0.5) * -max_deg;
    (rx, ry)
}

pub fn card_transform(rx: f32, ry: f32, perspective_px: f32, lift_px: f32) -> String {
    format!(
        "perspective({perspective_px}px) rotateX({rx}deg) rotateY({ry}deg) translateY(-{lift_px}px)"
    )
}

#[inline]
pub fn next_slide(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

#[inline]
pub fn wheel_steps(delta_y: f32, px_per_step: f32) -> f32 {
    delta_y / px_per_step.max(1.0)
}

/// Tracks one pointer press to tell a click from an orbit drag.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub start: Vec2,
    pub last: Vec2,
    pub travelled: f32,
}

impl DragState {
    pub fn press(&mut self, at: Vec2) {
        self.active = true;
        self.start = at;
        self.last = at;
        self.travelled = 0.0;
    }

    /// Returns the movement since the last call while pressed.
    pub fn motion(&mut self, at: Vec2) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        self.travelled += delta.length();
        Some(delta)
    }

    /// Ends the press; true if the pointer stayed within `slop` (a click).
    pub fn release(&mut self, slop: f32) -> bool {
        let was_click = self.active && self.travelled <= slop;
        self.active = false;
        was_click
    }
}

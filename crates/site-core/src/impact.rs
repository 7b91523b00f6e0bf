//! The impact panel: a lone earth with three floating labels.
//!
//! Same frame shape as [`crate::scene`]: queued events are applied, the
//! state steps once, and an [`ImpactRenderer`] draws the result. Clicks do
//! nothing here.

use crate::constants::*;
use crate::scene::{FrameInput, SceneEvent};
use crate::state::{Camera, OrbitRig, Viewport};
use glam::Vec3;

/// One floating caption.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactLabel {
    pub text: &'static str,
    pub position: Vec3,
    pub color: [f32; 3],
    pub rotation_y: f32,
}

impl ImpactLabel {
    fn new(text: &'static str, position: Vec3, color: u32) -> Self {
        Self {
            text,
            position,
            color: rgb(color),
            rotation_y: 0.0,
        }
    }

    /// Bob by `sin(t + phase)` and turn about the vertical axis.
    pub fn step(&mut self, t: f64, phase: usize) {
        self.position.y += (t + phase as f64).sin() as f32 * IMPACT_LABEL_BOB;
        self.rotation_y += IMPACT_LABEL_SPIN;
    }
}

pub fn impact_labels() -> Vec<ImpactLabel> {
    vec![
        ImpactLabel::new("Women Empowerment", Vec3::new(-2.0, 1.5, 0.0), 0xff69b4),
        ImpactLabel::new("Youth Engagement", Vec3::new(2.0, 1.0, 1.0), 0x00ff00),
        ImpactLabel::new("Climate Action", Vec3::new(0.0, 2.0, -2.0), 0xffff00),
    ]
}

pub trait ImpactRenderer {
    fn resize(&mut self, viewport: Viewport);
    fn render(&mut self, scene: &ImpactScene) -> anyhow::Result<()>;
}

pub struct ImpactScene {
    pub labels: Vec<ImpactLabel>,
    pub camera: Camera,
    pub rig: OrbitRig,
    pub viewport: Viewport,
    pub earth_spin: f32,
    tick: u64,
}

impl ImpactScene {
    pub fn new(viewport: Viewport) -> Self {
        let camera = Camera {
            eye: IMPACT_CAMERA_EYE,
            aspect: viewport.aspect(),
            ..Camera::default()
        };
        let mut rig = OrbitRig::from_eye(camera.eye, camera.target);
        rig.auto_rotate = false;
        rig.min_distance = IMPACT_MIN_DISTANCE;
        rig.max_distance = IMPACT_MAX_DISTANCE;
        rig.distance = (camera.eye - camera.target).length();
        Self {
            labels: impact_labels(),
            camera,
            rig,
            viewport,
            earth_spin: 0.0,
            tick: 0,
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Follow the container's new size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    /// One tick. `now_sec` is the frame clock in seconds and sets the bob phase.
    pub fn step(&mut self, now_sec: f64) {
        self.tick += 1;
        self.earth_spin += IMPACT_EARTH_SPIN;
        for (i, label) in self.labels.iter_mut().enumerate() {
            label.step(now_sec, i);
        }
        self.rig.update(&mut self.camera);
    }

    pub fn frame<R: ImpactRenderer + ?Sized>(
        &mut self,
        input: FrameInput<'_>,
        renderer: &mut R,
    ) -> anyhow::Result<u64> {
        for ev in input.events {
            match *ev {
                SceneEvent::Resize(viewport) => {
                    self.resize(viewport);
                    renderer.resize(viewport);
                }
                SceneEvent::Orbit { dx, dy } => self.rig.orbit(dx, dy),
                SceneEvent::Zoom(steps) => self.rig.zoom(steps),
                SceneEvent::Click(_) => {}
            }
        }
        self.step(input.now_sec);
        renderer.render(self)?;
        Ok(self.tick)
    }
}

//! The animated earth scene: owned simulation state plus the per-frame update.
//!
//! `SceneState` holds everything that moves (particle cloud, satellites, live
//! plants, camera) and is advanced exactly once per display refresh through
//! [`SceneState::frame`], which drains queued interaction events, steps the
//! simulation, and hands the result to a [`SceneRenderer`].

use crate::constants::*;
use crate::particles::ParticleField;
use crate::picking::hit_sphere;
use crate::plants::{Garden, PlantId};
use crate::satellites::Satellite;
use crate::state::{Camera, OrbitRig, Viewport};
use glam::{Vec2, Vec3};
use rand::prelude::*;
use smallvec::SmallVec;

/// Size-dependent scene tuning picked once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub particle_size: f32,
    pub max_pixel_ratio: f32,
}

impl SceneConfig {
    /// Narrow (mobile) viewports get fewer, smaller particles and a 1:1 pixel ratio.
    pub fn for_viewport(css_width: u32) -> Self {
        if css_width < NARROW_VIEWPORT_PX {
            Self {
                particle_count: PARTICLE_COUNT_NARROW,
                particle_size: PARTICLE_SIZE_NARROW,
                max_pixel_ratio: MAX_PIXEL_RATIO_NARROW,
            }
        } else {
            Self {
                particle_count: PARTICLE_COUNT,
                particle_size: PARTICLE_SIZE,
                max_pixel_ratio: MAX_PIXEL_RATIO,
            }
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_viewport(NARROW_VIEWPORT_PX)
    }
}

/// Interaction queued by the frontend between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    /// Click position in normalized device coordinates (y up).
    Click(Vec2),
    Resize(Viewport),
    /// Pointer drag in pixels.
    Orbit { dx: f32, dy: f32 },
    /// Wheel steps; positive zooms out.
    Zoom(f32),
}

#[derive(Clone, Debug)]
pub struct FrameInput<'a> {
    pub now_sec: f64,
    pub events: &'a [SceneEvent],
}

#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    pub tick: u64,
    pub spawned: SmallVec<[PlantId; 4]>,
    pub expired: SmallVec<[PlantId; 4]>,
}

/// Drawing collaborator fed once per frame.
pub trait SceneRenderer {
    fn resize(&mut self, viewport: Viewport);
    fn render(&mut self, scene: &SceneState) -> anyhow::Result<()>;
}

pub struct SceneState {
    pub config: SceneConfig,
    pub particles: ParticleField,
    pub satellites: Vec<Satellite>,
    pub garden: Garden,
    pub camera: Camera,
    pub rig: OrbitRig,
    pub viewport: Viewport,
    pub earth_spin: f32,
    pub glow_spin: f32,
    start_sec: Option<f64>,
    elapsed_sec: f64,
    tick: u64,
    rng: StdRng,
}

impl SceneState {
    pub fn new(config: SceneConfig, viewport: Viewport, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = ParticleField::scatter(config.particle_count, &mut rng);
        let satellites = Satellite::constellation(&SATELLITE_PALETTE);
        let camera = Camera {
            aspect: viewport.aspect(),
            ..Camera::default()
        };
        let rig = OrbitRig::from_eye(camera.eye, camera.target);
        Self {
            config,
            particles,
            satellites,
            garden: Garden::new(),
            camera,
            rig,
            viewport,
            earth_spin: 0.0,
            glow_spin: 0.0,
            start_sec: None,
            elapsed_sec: 0.0,
            tick: 0,
            rng,
        }
    }

    /// Seconds since the first frame.
    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    /// Cast a ray through `ndc` and plant on the earth if it is hit.
    pub fn click(&mut self, ndc: Vec2, now_sec: f64) -> Option<PlantId> {
        let ray = self.camera.ray_from_ndc(ndc);
        let hit: Vec3 = hit_sphere(&ray, EARTH_CENTER, EARTH_RADIUS)?;
        let id = self.garden.spawn(hit.x, hit.z, now_sec, &mut self.rng);
        log::debug!("[scene] plant {:?} at ({:.2}, {:.2})", id, hit.x, hit.z);
        Some(id)
    }

    /// Advance every entity by one tick.
    pub fn step(&mut self, now_sec: f64, expired: &mut impl Extend<PlantId>) {
        let start = *self.start_sec.get_or_insert(now_sec);
        self.elapsed_sec = (now_sec - start).max(0.0);
        self.tick += 1;

        self.earth_spin += EARTH_SPIN;
        self.glow_spin += GLOW_SPIN;

        self.particles.spin += PARTICLE_CLOUD_SPIN;
        self.particles.step();

        for s in &mut self.satellites {
            s.step();
        }

        self.garden.prune(now_sec, expired);
        self.garden.animate(self.elapsed_sec as f32);

        self.rig.update(&mut self.camera);
    }

    /// Apply queued events, step, and render once.
    pub fn frame<R: SceneRenderer + ?Sized>(
        &mut self,
        input: FrameInput<'_>,
        renderer: &mut R,
    ) -> anyhow::Result<FrameReport> {
        let mut report = FrameReport::default();
        for ev in input.events {
            match *ev {
                SceneEvent::Resize(viewport) => {
                    self.resize(viewport);
                    renderer.resize(viewport);
                }
                SceneEvent::Orbit { dx, dy } => self.rig.orbit(dx, dy),
                SceneEvent::Zoom(steps) => self.rig.zoom(steps),
                SceneEvent::Click(ndc) => {
                    if let Some(id) = self.click(ndc, input.now_sec) {
                        report.spawned.push(id);
                    }
                }
            }
        }
        self.step(input.now_sec, &mut report.expired);
        report.tick = self.tick;
        renderer.render(self)?;
        Ok(report)
    }
}

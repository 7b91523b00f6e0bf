//! View-side state types shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs so the scene can be
//! stepped and tested on the host. The web frontend feeds them viewport sizes
//! and pointer input and reads back matrices for drawing.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Drawable area in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, with the height floored at one pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

/// Half-line in world space. `dir` is normalized.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: Viewport::default().aspect(),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Build a world-space ray through a point given in normalized device
    /// coordinates (x right, y up, both in -1..=1).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize(),
        }
    }

    /// Project a world point to NDC. `z` holds the clip depth; points behind
    /// the eye yield `None`.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }
}

/// Orbit controls around a fixed target: damped user rotation, immediate
/// zoom clamped to a distance range, and optional constant auto-rotation.
#[derive(Clone, Debug)]
pub struct OrbitRig {
    pub target: Vec3,
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub damping: f32,
    pending_azimuth: f32,
    pending_polar: f32,
}

impl OrbitRig {
    pub fn from_eye(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(1e-4);
        let polar = (offset.y / distance).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        Self {
            target,
            azimuth,
            polar,
            distance: distance.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE),
            min_distance: CAMERA_MIN_DISTANCE,
            max_distance: CAMERA_MAX_DISTANCE,
            auto_rotate: true,
            auto_rotate_speed: CAMERA_AUTO_ROTATE_SPEED,
            damping: CAMERA_DAMPING,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + Vec3::new(sp * sa, cp, sp * ca) * self.distance
    }

    /// Queue a drag of `dx`, `dy` pixels; applied gradually by `update`.
    pub fn orbit(&mut self, dx_px: f32, dy_px: f32) {
        self.pending_azimuth -= dx_px * ORBIT_RADIANS_PER_PX;
        self.pending_polar -= dy_px * ORBIT_RADIANS_PER_PX;
    }

    /// Positive steps move away from the target, negative steps move closer.
    pub fn zoom(&mut self, steps: f32) {
        let factor = ZOOM_STEP_SCALE.powf(-steps);
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Angle added per tick by auto-rotation (one revolution per minute at
    /// speed 1.0 and 60 ticks per second).
    pub fn auto_rotate_step(&self) -> f32 {
        std::f32::consts::TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    /// Advance one tick and write the resulting eye/target into `camera`.
    pub fn update(&mut self, camera: &mut Camera) {
        if self.auto_rotate {
            self.pending_azimuth -= self.auto_rotate_step();
        }
        self.azimuth += self.pending_azimuth * self.damping;
        self.polar = (self.polar + self.pending_polar * self.damping).clamp(
            CAMERA_POLAR_MARGIN,
            std::f32::consts::PI - CAMERA_POLAR_MARGIN,
        );
        self.pending_azimuth *= 1.0 - self.damping;
        self.pending_polar *= 1.0 - self.damping;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        camera.eye = self.eye();
        camera.target = self.target;
    }
}

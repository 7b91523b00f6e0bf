//! World-to-canvas mapping and the small shading helpers the canvas renderer
//! needs. Pure, so it is host-tested.

use glam::{Mat3, Mat4, Vec3};
use site_core::{Camera, Viewport};

/// A world point mapped to canvas pixels plus its distance in front of the eye.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen {
    pub x: f64,
    pub y: f64,
    pub depth: f32,
}

/// Camera matrices captured once per frame.
#[derive(Clone, Debug)]
pub struct Projector {
    view_proj: Mat4,
    view: Mat4,
    width: f32,
    height: f32,
    focal_px: f32,
}

impl Projector {
    pub fn new(camera: &Camera, viewport: Viewport) -> Self {
        let view = camera.view_matrix();
        Self {
            view_proj: camera.projection_matrix() * view,
            view,
            width: viewport.width as f32,
            height: viewport.height as f32,
            focal_px: viewport.height.max(1) as f32 * 0.5 / (camera.fovy_radians * 0.5).tan(),
        }
    }

    /// `None` behind the eye or past the far plane.
    pub fn project(&self, world: Vec3) -> Option<Screen> {
        let clip = self.view_proj * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if ndc.z > 1.0 {
            return None;
        }
        Some(Screen {
            x: ((ndc.x + 1.0) * 0.5 * self.width) as f64,
            y: ((1.0 - ndc.y) * 0.5 * self.height) as f64,
            depth: -self.view.transform_point3(world).z,
        })
    }

    /// On-screen size of `world_size` at `depth`.
    pub fn size_px(&self, world_size: f32, depth: f32) -> f64 {
        (world_size * self.focal_px / depth.max(1e-3)) as f64
    }
}

/// Horizontal half-width of meridian `k` of `count` on a sphere of radius
/// `r` turned by `spin` about its vertical axis.
pub fn meridian_half_width(spin: f32, k: usize, count: usize, r: f64) -> f64 {
    let a = spin + k as f32 * std::f32::consts::PI / count.max(1) as f32;
    (r * a.cos().abs() as f64).max(0.5)
}

/// Where a body-fixed mark at +Z ends up after x/y rotation, applied in
/// x-then-y Euler order.
pub fn spin_mark(spin: [f32; 2]) -> Vec3 {
    Mat3::from_rotation_x(spin[0]) * Mat3::from_rotation_y(spin[1]) * Vec3::Z
}

/// Horizontal squash for flat text turned by `rotation_y`; `None` while its
/// back faces the viewer.
pub fn label_facing(rotation_y: f32) -> Option<f64> {
    let c = rotation_y.cos();
    (c > 0.0).then_some(c as f64)
}

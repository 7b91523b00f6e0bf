// Host-side tests for the canvas projection helpers.

#![allow(dead_code)]
#[path = "../src/projection.rs"]
mod projection;

use glam::Vec3;
use projection::*;
use site_core::{Camera, Viewport};
use std::f32::consts::{FRAC_PI_2, PI};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

fn looking_down_z() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 5.0),
        target: Vec3::ZERO,
        aspect: 2.0,
        ..Camera::default()
    }
}

#[test]
fn target_lands_in_canvas_center() {
    let p = Projector::new(&looking_down_z(), Viewport::new(800, 400));
    let s = p.project(Vec3::ZERO).unwrap();
    assert!(approx(s.x, 400.0) && approx(s.y, 200.0));
    assert!((s.depth - 5.0).abs() < 1e-4);
}

#[test]
fn up_in_world_is_up_on_canvas() {
    let p = Projector::new(&looking_down_z(), Viewport::new(800, 400));
    let s = p.project(Vec3::new(0.0, 1.0, 0.0)).unwrap();
    assert!(s.y < 200.0);
    let s = p.project(Vec3::new(1.0, 0.0, 0.0)).unwrap();
    assert!(s.x > 400.0);
}

#[test]
fn points_behind_eye_are_dropped() {
    let p = Projector::new(&looking_down_z(), Viewport::new(800, 400));
    assert_eq!(p.project(Vec3::new(0.0, 0.0, 6.0)), None);
    assert_eq!(p.project(Vec3::new(0.0, 0.0, -500.0)), None);
}

#[test]
fn projector_matches_camera_projection() {
    let camera = Camera::default();
    let viewport = Viewport::new(1280, 720);
    let p = Projector::new(&camera, viewport);
    let world = Vec3::new(0.7, 0.3, -0.4);
    let ndc = camera.project(world).unwrap();
    let s = p.project(world).unwrap();
    assert!(approx(s.x, ((ndc.x + 1.0) * 0.5 * 1280.0) as f64));
    assert!(approx(s.y, ((1.0 - ndc.y) * 0.5 * 720.0) as f64));
}

#[test]
fn size_shrinks_with_depth() {
    let p = Projector::new(&looking_down_z(), Viewport::new(800, 400));
    let near = p.size_px(1.0, 2.0);
    let far = p.size_px(1.0, 4.0);
    assert!(approx(near, far * 2.0));
    assert!(p.size_px(1.0, 0.0).is_finite());
}

#[test]
fn meridians_sweep_with_spin() {
    assert!(approx(meridian_half_width(0.0, 0, 6, 10.0), 10.0));
    assert!(approx(meridian_half_width(FRAC_PI_2, 0, 6, 10.0), 0.5));
    // turning by one meridian spacing shifts the set by one
    let step = PI / 6.0;
    assert!(approx(
        meridian_half_width(step, 0, 6, 10.0),
        meridian_half_width(0.0, 1, 6, 10.0)
    ));
}

#[test]
fn spin_mark_follows_rotation() {
    let v = spin_mark([0.0, 0.0]);
    assert!((v - Vec3::Z).length() < 1e-6);
    let v = spin_mark([0.0, FRAC_PI_2]);
    assert!((v - Vec3::X).length() < 1e-6);
    let v = spin_mark([FRAC_PI_2, 0.0]);
    assert!((v - Vec3::NEG_Y).length() < 1e-6);
}

#[test]
fn labels_hide_their_back() {
    assert_eq!(label_facing(0.0), Some(1.0));
    assert!(label_facing(PI).is_none());
    let half = label_facing(PI / 3.0).unwrap();
    assert!(approx(half, 0.5));
}

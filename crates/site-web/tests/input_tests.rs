// Host-side tests for the pure pointer and effect math.
// The crate itself is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use glam::Vec2;
use input::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn client_corners_map_to_ndc_corners() {
    let tl = client_to_ndc(0.0, 0.0, 800.0, 600.0);
    let br = client_to_ndc(800.0, 600.0, 800.0, 600.0);
    let mid = client_to_ndc(400.0, 300.0, 800.0, 600.0);
    assert_eq!(tl, Vec2::new(-1.0, 1.0));
    assert_eq!(br, Vec2::new(1.0, -1.0));
    assert_eq!(mid, Vec2::ZERO);
}

#[test]
fn client_to_ndc_degenerate_box_is_center() {
    assert_eq!(client_to_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    assert_eq!(client_to_ndc(10.0, 10.0, 800.0, 0.0), Vec2::ZERO);
}

#[test]
fn tilt_is_zero_at_center_and_bounded_at_edges() {
    let (rx, ry) = card_tilt_deg(50.0, 25.0, 100.0, 50.0, 6.0);
    assert!(approx(rx, 0.0) && approx(ry, 0.0));

    // bottom-right corner tips the card away on both axes
    let (rx, ry) = card_tilt_deg(100.0, 50.0, 100.0, 50.0, 6.0);
    assert!(approx(rx, 3.0), "rx={rx}");
    assert!(approx(ry, -3.0), "ry={ry}");

    let (rx, ry) = card_tilt_deg(0.0, 0.0, 100.0, 50.0, 6.0);
    assert!(approx(rx, -3.0));
    assert!(approx(ry, 3.0));
}

#[test]
fn tilt_on_collapsed_card_is_flat() {
    assert_eq!(card_tilt_deg(5.0, 5.0, 0.0, 0.0, 6.0), (0.0, 0.0));
}

#[test]
fn card_transform_css_string() {
    let css = card_transform(1.5, -2.0, 900.0, 6.0);
    assert_eq!(
        css,
        "perspective(900px) rotateX(1.5deg) rotateY(-2deg) translateY(-6px)"
    );
}

#[test]
fn slider_wraps_around() {
    assert_eq!(next_slide(0, 3), 1);
    assert_eq!(next_slide(1, 3), 2);
    assert_eq!(next_slide(2, 3), 0);
    assert_eq!(next_slide(0, 1), 0);
    assert_eq!(next_slide(5, 0), 0);
}

#[test]
fn wheel_delta_scales_to_steps() {
    assert!(approx(wheel_steps(100.0, 100.0), 1.0));
    assert!(approx(wheel_steps(-250.0, 100.0), -2.5));
    assert!(approx(wheel_steps(0.0, 100.0), 0.0));
}

#[test]
fn short_press_is_a_click() {
    let mut drag = DragState::default();
    drag.press(Vec2::new(10.0, 10.0));
    assert_eq!(drag.motion(Vec2::new(11.0, 10.0)), Some(Vec2::new(1.0, 0.0)));
    assert!(drag.release(4.0));
    assert!(!drag.active);
}

#[test]
fn travelled_press_is_a_drag() {
    let mut drag = DragState::default();
    drag.press(Vec2::new(0.0, 0.0));
    drag.motion(Vec2::new(3.0, 0.0));
    drag.motion(Vec2::new(3.0, 3.0));
    assert!(approx(drag.travelled, 6.0));
    assert!(!drag.release(4.0));
}

#[test]
fn motion_without_press_is_ignored() {
    let mut drag = DragState::default();
    assert_eq!(drag.motion(Vec2::new(5.0, 5.0)), None);
    assert!(!drag.release(4.0));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_timings_are_sane() {
    use constants::*;
    assert!(INTRO_FADE_DELAY_MS > 0 && INTRO_REMOVE_DELAY_MS > 0);
    assert!(SLIDER_INTERVAL_MS >= 1000);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(TILT_MAX_DEG > 0.0 && TILT_MAX_DEG <= 15.0);
    assert!(CLICK_SLOP_PX > 0.0);
}

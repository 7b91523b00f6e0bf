// Host-side tests for the impact panel simulation.

use glam::Vec2;
use site_core::*;

#[derive(Default)]
struct CountingRenderer {
    renders: usize,
    resizes: Vec<Viewport>,
    label_ys: Vec<f32>,
}

impl ImpactRenderer for CountingRenderer {
    fn resize(&mut self, viewport: Viewport) {
        self.resizes.push(viewport);
    }

    fn render(&mut self, scene: &ImpactScene) -> anyhow::Result<()> {
        self.renders += 1;
        self.label_ys = scene.labels.iter().map(|l| l.position.y).collect();
        Ok(())
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn starts_with_three_labels_and_camera_at_rest() {
    let scene = ImpactScene::new(Viewport::new(800, 400));
    let texts: Vec<_> = scene.labels.iter().map(|l| l.text).collect();
    assert_eq!(texts, ["Women Empowerment", "Youth Engagement", "Climate Action"]);
    assert_eq!(scene.labels[0].color, rgb(0xff69b4));
    assert_eq!(scene.camera.eye, IMPACT_CAMERA_EYE);
    assert!(approx(scene.camera.aspect, 2.0));
    assert!(!scene.rig.auto_rotate);
    assert!(approx(scene.rig.distance, 40f32.sqrt()));
}

#[test]
fn labels_bob_by_phase_shifted_sine() {
    let mut scene = ImpactScene::new(Viewport::default());
    let before: Vec<f32> = scene.labels.iter().map(|l| l.position.y).collect();
    let t = 1.25;
    scene.step(t);
    for (i, label) in scene.labels.iter().enumerate() {
        let expected = before[i] + ((t + i as f64).sin() as f32) * 0.003;
        assert!(approx(label.position.y, expected), "label {i}: {}", label.position.y);
    }
    // x and z never move
    assert_eq!(scene.labels[1].position.x, 2.0);
    assert_eq!(scene.labels[1].position.z, 1.0);
}

#[test]
fn labels_and_earth_spin_each_tick() {
    let mut scene = ImpactScene::new(Viewport::default());
    for k in 0..10 {
        scene.step(k as f64 / 60.0);
    }
    assert_eq!(scene.tick_count(), 10);
    assert!(approx(scene.earth_spin, 0.02));
    for label in &scene.labels {
        assert!(approx(label.rotation_y, 0.05), "{}", label.rotation_y);
    }
}

#[test]
fn frame_applies_resize_and_ignores_clicks() {
    let mut scene = ImpactScene::new(Viewport::new(800, 400));
    let mut renderer = CountingRenderer::default();
    let events = [
        SceneEvent::Click(Vec2::ZERO),
        SceneEvent::Resize(Viewport::new(300, 300)),
    ];
    let tick = scene
        .frame(FrameInput { now_sec: 0.0, events: &events }, &mut renderer)
        .unwrap();
    assert_eq!(tick, 1);
    assert_eq!(renderer.renders, 1);
    assert_eq!(renderer.resizes, [Viewport::new(300, 300)]);
    assert_eq!(scene.viewport, Viewport::new(300, 300));
    assert!(approx(scene.camera.aspect, 1.0));
    assert_eq!(renderer.label_ys.len(), 3);
}

#[test]
fn zoom_stays_in_range() {
    let mut scene = ImpactScene::new(Viewport::default());
    let mut renderer = CountingRenderer::default();
    let events = [SceneEvent::Zoom(-200.0)];
    scene
        .frame(FrameInput { now_sec: 0.0, events: &events }, &mut renderer)
        .unwrap();
    assert!(approx(scene.rig.distance, IMPACT_MIN_DISTANCE));
    assert!(approx((scene.camera.eye - scene.camera.target).length(), IMPACT_MIN_DISTANCE));
}

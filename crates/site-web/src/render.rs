//! 2D-canvas drawing of the earth scene and the impact panel.
//!
//! Projects the simulation through the scene camera and paints it back to
//! front: far particles, atmosphere and earth, satellites and plants, then the
//! particles in front of the earth.

use crate::projection::{label_facing, meridian_half_width, spin_mark, Projector, Screen};
use glam::{Mat3, Vec3};
use site_core::constants::*;
use site_core::{ImpactRenderer, ImpactScene, SceneRenderer, SceneState, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

const EARTH_MERIDIANS: usize = 6;
const GLOW_MERIDIANS: usize = 4;
const PARTICLE_ALPHA: f64 = 0.8;
const GLOW_ALPHA: f64 = 0.1;
const PLANT_LINE_PX: f64 = 2.0;
const SATELLITE_MARK_SCALE: f64 = 0.35;
const LABEL_FONT: &str = "Helvetica, Arial, sans-serif";

pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
    particle_styles: Vec<String>,
    background: String,
}

#[inline]
fn css_rgb(c: [f32; 3]) -> String {
    format!(
        "rgb({}, {}, {})",
        (c[0] * 255.0).round() as u8,
        (c[1] * 255.0).round() as u8,
        (c[2] * 255.0).round() as u8
    )
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement, background: u32) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            viewport: Viewport::new(canvas.width(), canvas.height()),
            particle_styles: Vec::new(),
            background: css_rgb(rgb(background)),
        })
    }

    fn clear(&self) {
        self.ctx.set_fill_style_str(&self.background);
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn circle(&self, x: f64, y: f64, r: f64) {
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, r.max(0.5), 0.0, std::f64::consts::TAU);
        self.ctx.fill();
    }

    fn meridians(&self, center: Screen, r: f64, spin: f32, count: usize) {
        for k in 0..count {
            let rx = meridian_half_width(spin, k, count, r);
            self.ctx.begin_path();
            _ = self
                .ctx
                .ellipse(center.x, center.y, rx, r, 0.0, 0.0, std::f64::consts::TAU);
            self.ctx.stroke();
        }
    }

    fn draw_particles(&mut self, scene: &SceneState, proj: &Projector, earth_depth: f32, in_front: bool) {
        if self.particle_styles.len() != scene.particles.len() {
            self.particle_styles = scene.particles.particles.iter().map(|p| css_rgb(p.color)).collect();
        }
        let spin = Mat3::from_rotation_y(scene.particles.spin);
        self.ctx.set_global_alpha(PARTICLE_ALPHA);
        for (i, p) in scene.particles.particles.iter().enumerate() {
            let Some(s) = proj.project(spin * p.position) else {
                continue;
            };
            if (s.depth < earth_depth) != in_front {
                continue;
            }
            let size = proj.size_px(scene.config.particle_size, s.depth).max(1.0);
            self.ctx.set_fill_style_str(&self.particle_styles[i]);
            self.ctx.fill_rect(s.x - size * 0.5, s.y - size * 0.5, size, size);
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_earth(&self, scene: &SceneState, proj: &Projector, center: Screen) -> anyhow::Result<()> {
        let r = proj.size_px(EARTH_RADIUS, center.depth);
        let glow_r = proj.size_px(GLOW_RADIUS, center.depth);
        let cyan = css_rgb(rgb(ACCENT_CYAN));

        self.ctx.set_global_alpha(GLOW_ALPHA);
        self.ctx.set_fill_style_str(&cyan);
        self.circle(center.x, center.y, glow_r);
        // the atmosphere turns at its own rate
        self.ctx.set_stroke_style_str(&cyan);
        self.ctx.set_line_width(1.0);
        self.meridians(center, glow_r, scene.glow_spin, GLOW_MERIDIANS);
        self.ctx.set_global_alpha(1.0);

        let gradient = self
            .ctx
            .create_radial_gradient(center.x - r * 0.3, center.y - r * 0.3, 0.0, center.x, center.y, r)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = gradient.add_color_stop(0.0, &css_rgb(rgb(PRIMARY_LIGHT)));
        _ = gradient.add_color_stop(0.5, &css_rgb(rgb(SECONDARY_TEAL)));
        _ = gradient.add_color_stop(1.0, &css_rgb(rgb(PRIMARY_BLUE)));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.circle(center.x, center.y, r);

        self.ctx.set_global_alpha(0.25);
        self.meridians(center, r, scene.earth_spin, EARTH_MERIDIANS);
        self.ctx.set_global_alpha(1.0);
        Ok(())
    }

    fn draw_satellites(&self, scene: &SceneState, proj: &Projector) {
        for s in &scene.satellites {
            let Some(p) = proj.project(s.position) else {
                continue;
            };
            let r = proj.size_px(SATELLITE_SIZE, p.depth);
            self.ctx.set_fill_style_str(&css_rgb(s.color));
            self.circle(p.x, p.y, r);

            // a bright fleck fixed to the body shows its tumble
            let mark = spin_mark(s.spin);
            if mark.z > 0.0 {
                self.ctx.set_fill_style_str("#ffffff");
                self.circle(
                    p.x + mark.x as f64 * r * 0.6,
                    p.y - mark.y as f64 * r * 0.6,
                    r * SATELLITE_MARK_SCALE,
                );
            }
        }
    }

    fn draw_plants(&self, scene: &SceneState, proj: &Projector) {
        self.ctx.set_stroke_style_str(&css_rgb(rgb(SUCCESS_GREEN)));
        self.ctx.set_line_width(PLANT_LINE_PX);
        for plant in scene.garden.iter() {
            let half = plant.height * plant.scale_y * 0.5;
            let base = Vec3::new(plant.x, plant.y - half, plant.z);
            let tip = Vec3::new(plant.x, plant.y + half, plant.z);
            if let (Some(a), Some(b)) = (proj.project(base), proj.project(tip)) {
                self.ctx.begin_path();
                self.ctx.move_to(a.x, a.y);
                self.ctx.line_to(b.x, b.y);
                self.ctx.stroke();
            }
        }
    }

    fn draw_label(&self, proj: &Projector, text: &str, at: Screen, color: [f32; 3], squash: f64) {
        let px = proj.size_px(IMPACT_LABEL_SIZE, at.depth).max(1.0);
        self.ctx.save();
        _ = self.ctx.translate(at.x, at.y);
        _ = self.ctx.scale(squash, 1.0);
        self.ctx.set_font(&format!("{px:.0}px {LABEL_FONT}"));
        self.ctx.set_fill_style_str(&css_rgb(color));
        _ = self.ctx.fill_text(text, 0.0, 0.0);
        self.ctx.restore();
    }
}

impl SceneRenderer for CanvasRenderer {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn render(&mut self, scene: &SceneState) -> anyhow::Result<()> {
        self.clear();
        let proj = Projector::new(&scene.camera, self.viewport);

        let earth = proj.project(EARTH_CENTER);
        let earth_depth = earth.map(|e| e.depth).unwrap_or(f32::MAX);

        self.draw_particles(scene, &proj, earth_depth, false);
        if let Some(center) = earth {
            self.draw_earth(scene, &proj, center)?;
        }
        self.draw_satellites(scene, &proj);
        self.draw_plants(scene, &proj);
        self.draw_particles(scene, &proj, earth_depth, true);
        Ok(())
    }
}

impl ImpactRenderer for CanvasRenderer {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn render(&mut self, scene: &ImpactScene) -> anyhow::Result<()> {
        self.clear();
        let proj = Projector::new(&scene.camera, self.viewport);
        let Some(center) = proj.project(Vec3::ZERO) else {
            return Ok(());
        };

        // far labels first, then the earth, then the near ones
        let mut labels: Vec<_> = scene
            .labels
            .iter()
            .filter_map(|l| Some((l, proj.project(l.position)?, label_facing(l.rotation_y)?)))
            .collect();
        labels.sort_by(|a, b| b.1.depth.total_cmp(&a.1.depth));
        let (far, near): (Vec<_>, Vec<_>) = labels.into_iter().partition(|(_, s, _)| s.depth > center.depth);

        for (label, at, squash) in far {
            self.draw_label(&proj, label.text, at, label.color, squash);
        }

        let r = proj.size_px(IMPACT_EARTH_RADIUS, center.depth);
        self.ctx.set_fill_style_str(&css_rgb(rgb(IMPACT_EARTH_COLOR)));
        self.circle(center.x, center.y, r);
        self.ctx.set_stroke_style_str("#ffffff");
        self.ctx.set_line_width(1.0);
        self.ctx.set_global_alpha(0.2);
        self.meridians(center, r, scene.earth_spin, EARTH_MERIDIANS);
        self.ctx.set_global_alpha(1.0);

        for (label, at, squash) in near {
            self.draw_label(&proj, label.text, at, label.color, squash);
        }
        Ok(())
    }
}

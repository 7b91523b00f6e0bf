use crate::constants::*;
use glam::Vec3;

/// A marker on a fixed circular orbit around the origin, bobbing vertically
/// at half the orbital rate.
#[derive(Clone, Debug)]
pub struct Satellite {
    pub radius: f32,
    pub angle: f32,
    pub speed: f32,
    pub height: f32,
    pub color: [f32; 3],
    pub position: Vec3,
    /// Cosmetic self-rotation (x, y) in radians.
    pub spin: [f32; 2],
}

impl Satellite {
    pub fn new(radius: f32, angle: f32, speed: f32, height: f32, color: [f32; 3]) -> Self {
        let mut s = Self {
            radius,
            angle,
            speed,
            height,
            color,
            position: Vec3::ZERO,
            spin: [0.0, 0.0],
        };
        s.position = s.orbit_position();
        s
    }

    /// One satellite per palette entry, with radius, speed, and bob height
    /// growing with the index and starting phases spread evenly.
    pub fn constellation(palette: &[u32]) -> Vec<Self> {
        let n = palette.len().max(1) as f32;
        palette
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let fi = i as f32;
                Self::new(
                    SATELLITE_BASE_RADIUS + fi * SATELLITE_RADIUS_STEP,
                    fi / n * std::f32::consts::TAU,
                    SATELLITE_BASE_SPEED + fi * SATELLITE_SPEED_STEP,
                    SATELLITE_BASE_HEIGHT + fi * SATELLITE_HEIGHT_STEP,
                    rgb(*color),
                )
            })
            .collect()
    }

    #[inline]
    pub fn orbit_position(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.radius,
            (self.angle * 0.5).sin() * self.height,
            self.angle.sin() * self.radius,
        )
    }

    pub fn step(&mut self) {
        self.angle += self.speed;
        self.position = self.orbit_position();
        self.spin[0] += SATELLITE_SPIN[0];
        self.spin[1] += SATELLITE_SPIN[1];
    }
}

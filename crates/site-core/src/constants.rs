use glam::Vec3;

// Shared visual tuning constants used by the web frontend and tests.
// Per-tick increments assume one tick per display refresh.

// Palette (0xRRGGBB)
pub const PRIMARY_BLUE: u32 = 0x1e40af;
pub const PRIMARY_LIGHT: u32 = 0x3b82f6;
pub const SECONDARY_TEAL: u32 = 0x0369a1;
pub const ACCENT_CYAN: u32 = 0x00d9ff;
pub const SUCCESS_GREEN: u32 = 0x10b981;
pub const BG_DARK: u32 = 0x111827;

pub const PARTICLE_PALETTE: [u32; 5] = [
    PRIMARY_BLUE,
    PRIMARY_LIGHT,
    SECONDARY_TEAL,
    ACCENT_CYAN,
    SUCCESS_GREEN,
];
pub const SATELLITE_PALETTE: [u32; 4] = [PRIMARY_LIGHT, ACCENT_CYAN, SECONDARY_TEAL, SUCCESS_GREEN];

// Particles
pub const PARTICLE_COUNT: usize = 1200;
pub const PARTICLE_COUNT_NARROW: usize = 800;
pub const PARTICLE_BOUND: f32 = 10.0; // half-extent of the reflecting cube
pub const PARTICLE_SPAWN_RADIUS: f32 = 5.0;
pub const PARTICLE_MAX_SPEED: f32 = 0.025; // per axis, per tick
pub const PARTICLE_SIZE: f32 = 0.012;
pub const PARTICLE_SIZE_NARROW: f32 = 0.008;
pub const PARTICLE_CLOUD_SPIN: f32 = 0.0004;

// Viewport breakpoint below which the lighter scene is used
pub const NARROW_VIEWPORT_PX: u32 = 768;
pub const MAX_PIXEL_RATIO: f32 = 1.8;
pub const MAX_PIXEL_RATIO_NARROW: f32 = 1.0;

// Earth
pub const EARTH_CENTER: Vec3 = Vec3::new(0.0, 0.6, 0.0);
pub const EARTH_RADIUS: f32 = 1.0;
pub const GLOW_RADIUS: f32 = 1.05;
pub const EARTH_SPIN: f32 = 0.0006;
pub const GLOW_SPIN: f32 = 0.0003;

// Satellites
pub const SATELLITE_BASE_RADIUS: f32 = 1.5;
pub const SATELLITE_RADIUS_STEP: f32 = 0.3;
pub const SATELLITE_BASE_SPEED: f32 = 0.002;
pub const SATELLITE_SPEED_STEP: f32 = 0.001;
pub const SATELLITE_BASE_HEIGHT: f32 = 0.2;
pub const SATELLITE_HEIGHT_STEP: f32 = 0.1;
pub const SATELLITE_SPIN: [f32; 2] = [0.01, 0.02]; // x, y
pub const SATELLITE_SIZE: f32 = 0.05;

// Plants
pub const PLANT_LIFETIME_SEC: f64 = 3.0;
pub const PLANT_MIN_HEIGHT: f32 = 0.15;
pub const PLANT_HEIGHT_SPAN: f32 = 0.35;
pub const PLANT_PULSE_AMPLITUDE: f32 = 0.12;
pub const PLANT_PULSE_RATE: f32 = 2.0;
pub const PLANT_BOB_AMPLITUDE: f32 = 0.01;
pub const PLANT_BOB_RATE: f32 = 3.0;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 1.6, 4.0);
pub const CAMERA_MIN_DISTANCE: f32 = 2.5;
pub const CAMERA_MAX_DISTANCE: f32 = 6.0;
pub const CAMERA_AUTO_ROTATE_SPEED: f32 = 0.3;
pub const CAMERA_DAMPING: f32 = 0.05;
pub const CAMERA_POLAR_MARGIN: f32 = 0.05; // radians kept clear of each pole
pub const ORBIT_RADIANS_PER_PX: f32 = 0.005;
pub const ZOOM_STEP_SCALE: f32 = 0.95;

// Impact scene (the `.impact-3d` panel)
pub const IMPACT_BACKGROUND: u32 = 0x111111;
pub const IMPACT_EARTH_COLOR: u32 = 0x2194ce;
pub const IMPACT_EARTH_RADIUS: f32 = 1.2;
pub const IMPACT_EARTH_SPIN: f32 = 0.002;
pub const IMPACT_CAMERA_EYE: Vec3 = Vec3::new(0.0, 2.0, 6.0);
pub const IMPACT_MIN_DISTANCE: f32 = 2.0;
pub const IMPACT_MAX_DISTANCE: f32 = 20.0;
pub const IMPACT_LABEL_SIZE: f32 = 0.2; // glyph height in world units
pub const IMPACT_LABEL_BOB: f32 = 0.003; // times sin(t + index), per tick
pub const IMPACT_LABEL_SPIN: f32 = 0.005;

/// Split a 0xRRGGBB color into linear-ish `[r, g, b]` floats in 0..=1.
#[inline]
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

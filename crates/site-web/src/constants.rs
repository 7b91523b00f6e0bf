// Page wiring: element ids, selectors, and timing for the decorative effects.

pub const CANVAS_ID: &str = "webgl";
// Container the impact panel canvas is created in
pub const IMPACT_SELECTOR: &str = ".impact-3d";

// Intro overlay fades after load, then is removed once the CSS fade is done
pub const INTRO_ID: &str = "intro";
pub const INTRO_FADE_DELAY_MS: i32 = 1800;
pub const INTRO_REMOVE_DELAY_MS: i32 = 800;

// About section slider
pub const SLIDER_IMAGES_SELECTOR: &str = ".about-slider img";
pub const SLIDER_INTERVAL_MS: i32 = 4000;

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_THRESHOLD: f64 = 0.15;

// Hover tilt
pub const TILT_CARDS_SELECTOR: &str = ".service-box div, .focus li, .work-card, .media-card";
pub const TILT_MAX_DEG: f32 = 6.0;
pub const TILT_PERSPECTIVE_PX: f32 = 900.0;
pub const TILT_LIFT_PX: f32 = 6.0;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Radio toggle
pub const RADIO_BUTTON_ID: &str = "radioBtn";
pub const RADIO_STREAM_ID: &str = "radioStream";
pub const RADIO_PLAY_LABEL: &str = "\u{25B6}";
pub const RADIO_PAUSE_LABEL: &str = "\u{23F8}";

// Pointer travel (css px) past which a press counts as an orbit drag, not a click
pub const CLICK_SLOP_PX: f32 = 4.0;
// Wheel delta (px) that maps to one zoom step
pub const WHEEL_PX_PER_STEP: f32 = 100.0;

// Status line colors
pub const STATUS_ERROR_COLOR: &str = "#ef4444";
pub const STATUS_ERROR_BG: &str = "rgba(239, 68, 68, 0.15)";
pub const STATUS_SUCCESS_COLOR: &str = "#10b981";
pub const STATUS_SUCCESS_BG: &str = "rgba(16, 185, 129, 0.15)";

// Front-end tuning constants: DOM ids, texture and mesh resolution,
// colours and feedback tones.
//
// Quiz behaviour (springs, history, projection) lives in `quiz_core::constants`.

// Elements the page must provide
pub const CANVAS_ID: &str = "globe-canvas";
// inline equirectangular SVG, one element per country code
pub const WORLD_MAP_ID: &str = "world-map";
pub const ANSWER_INPUT_ID: &str = "answer-input";
pub const RESULT_OVERLAY_ID: &str = "result-overlay";
pub const RESULT_TEXT_ID: &str = "result-text";
pub const CONTINUE_BUTTON_ID: &str = "continue-button";
pub const ERROR_OVERLAY_ID: &str = "error-overlay";
pub const ERROR_TEXT_ID: &str = "error-text";

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Equirectangular globe texture (2:1)
pub const TEXTURE_WIDTH: u32 = 2048;
pub const TEXTURE_HEIGHT: u32 = 1024;

// Colours used when compositing the map
pub const OCEAN_COLOR: &str = "#1b3a5c";
pub const HIGHLIGHT_COLOR: &str = "#f2a23a";
pub const DOT_OUTLINE_COLOR: &str = "#ffffff";
pub const DOT_OUTLINE_PX: f64 = 2.0;

// Sphere tessellation
pub const SPHERE_RINGS: u32 = 64;
pub const SPHERE_SEGMENTS: u32 = 128;

// Background behind the globe
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.03, 0.06];

// Feedback tones: frequency sweeps (start, end) in Hz
pub const CORRECT_TONE_HZ: (f32, f32) = (660.0, 990.0);
pub const WRONG_TONE_HZ: (f32, f32) = (330.0, 196.0);
pub const TONE_DURATION_SEC: f64 = 0.35;
pub const TONE_ATTACK_SEC: f64 = 0.015;
pub const TONE_PEAK_GAIN: f32 = 0.2;

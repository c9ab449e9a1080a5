// Shared tuning constants for the quiz core.

// Camera distance from the globe centre per country scale (globe radius = 1)
pub const DISTANCE_SMALL: f32 = 1.8;
pub const DISTANCE_MEDIUM: f32 = 2.4;
pub const DISTANCE_LARGE: f32 = 3.2;
pub const DISTANCE_INTRO: f32 = 6.0; // where the camera starts before the first round

// Highlight dot radius in degrees of arc per country scale
pub const DOT_RADIUS_SMALL_DEG: f32 = 1.2;
pub const DOT_RADIUS_MEDIUM_DEG: f32 = 2.0;
pub const DOT_RADIUS_LARGE_DEG: f32 = 3.0;

// Springs: mass 1, damping at the critical value for each stiffness
pub const DISTANCE_STIFFNESS: f32 = 20.0;
pub const ANGLE_STIFFNESS: f32 = 30.0;
pub const SPRING_TOLERANCE: f32 = 1e-3;

// Longitude wraps around the antimeridian
pub const LONGITUDE_WRAP: (f32, f32) = (-180.0, 180.0);

// Longest frame delta fed to the springs; background tabs can deliver seconds
pub const MAX_FRAME_DELTA_MS: f32 = 100.0;

// Recently shown countries excluded from the next draw
pub const HISTORY_LEN: usize = 10;

// Projection
pub const FOVY_DEG: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

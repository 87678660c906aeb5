// Native host tuning constants

// Wheel input
pub const LINE_HEIGHT_PX: f32 = 40.0; // pixels scrolled per wheel "line" notch

// Runtime tuning via keyboard
pub const FOLLOW_RATE_STEP: f32 = 0.05;

// Frame summary logging cadence (seconds of animation time)
pub const REPORT_INTERVAL_SEC: f32 = 2.0;

// Window
pub const WINDOW_TITLE: &str = "Scroll sections (native)";
pub const FIELD_FLAG: &str = "--field"; // start with the dense particle field instead of sections

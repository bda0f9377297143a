/// Simulation tuning constants shared by the canvas scenes.
///
/// Distances are logical (CSS) pixels; per-tick quantities assume one
/// normalized tick of a 60fps frame.
// Frame timing
pub const TARGET_FRAME_MS: f32 = 1000.0 / 60.0;
pub const MAX_FRAME_MS: f32 = 100.0; // clamp on tab resume

// Pointer sentinel used while no pointer is over the page
pub const OFFSCREEN_SENTINEL: f32 = -100_000.0;

// Entity caps; counts past these are clamped or rejected
pub const MAX_BUBBLES: usize = 2_000;
pub const MAX_NETWORK_DOTS: usize = 500; // per kind

// Bubble motion
pub const PRESS_REPULSION_MULTIPLIER: f32 = 2.5;
pub const MIN_REPULSION_DISTANCE: f32 = 0.5;
pub const PULSE_SPEED_MIN: f32 = 0.015; // radians per tick
pub const PULSE_SPEED_MAX: f32 = 0.035;

// Radius oscillation: radius = base * (BASE + SPAN * sin(phase))
pub const RADIUS_OSC_BASE: f32 = 0.9;
pub const RADIUS_OSC_SPAN: f32 = 0.12;

// Bubble appearance
pub const HUE_MIN: f32 = 185.0;
pub const HUE_MAX: f32 = 215.0;
pub const ALPHA_MIN: f32 = 0.35;
pub const ALPHA_MAX: f32 = 0.75;

// Depth layers, 0 is the farthest
pub const DEPTH_LAYERS: u8 = 3;
pub const FAR_LAYER_ALPHA: f32 = 0.5; // alpha factor of layer 0
pub const FAR_LAYER_SPEED: f32 = 0.55; // speed factor of layer 0

// Bubble render geometry
pub const GLOW_SCALE: f32 = 2.7;
pub const HIGHLIGHT_OFFSET: f32 = 0.35;
pub const HIGHLIGHT_SCALE: f32 = 0.28;

// Pulse rings spawned on pointer press
pub const MAX_RINGS: usize = 8;
pub const RING_SPEED: f32 = 2.2; // px per tick
pub const RING_MAX_RADIUS: f32 = 90.0;
pub const RING_LINE_WIDTH: f32 = 1.5;

// Trail overlay alpha per frame
pub const TRAIL_ALPHA_DARK: f32 = 0.22;
pub const TRAIL_ALPHA_LIGHT: f32 = 0.28;

// Node network
pub const NETWORK_NODE_COUNT: usize = 8;
pub const NETWORK_PARTICLE_COUNT: usize = 30;
pub const CONNECTION_DISTANCE: f32 = 150.0;
pub const CONNECTION_OPACITY: f32 = 0.3;
pub const LIGHT_CONNECTION_SCALE: f32 = 0.8;
pub const NODE_OPACITY: f32 = 0.6;
pub const NODE_SPEED: f32 = 0.5; // full velocity span per component
pub const PARTICLE_SPEED: f32 = 0.3;
pub const NETWORK_PULSE_STEP: f32 = 0.02;
pub const NETWORK_TRAIL_ALPHA_DARK: f32 = 0.02;
pub const NETWORK_TRAIL_ALPHA_LIGHT: f32 = 0.01;

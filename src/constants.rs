/// DOM hooks, selectors and timings used by the web frontend.
///
/// Simulation tuning lives in `core::constants`; these only describe how the
/// page is wired.
// Canvas mounts
pub const BUBBLE_CANVAS_ID: &str = "bubble-bg-canvas";
pub const NETWORK_CANVAS_ID: &str = "animated-bg-canvas";

// Theme
pub const THEME_TOGGLE_ID: &str = "theme-toggle-btn";
pub const DARK_CLASS: &str = "dark";

// Smooth scrolling
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const HASH_SCROLL_DELAY_MS: i32 = 100;

// Scroll reveal
pub const REVEAL_SELECTORS: [&str; 3] = ["[data-scroll-animate]", "h1, h2, h3, h4, h5, h6", "p, ul, ol"];
pub const NO_ANIMATE_SELECTOR: &str = "[data-no-animate]";
pub const REVEAL_CLASS: &str = "animate-in";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

// Buttons
pub const BUTTON_SELECTOR: &str = "button, a[class*=\"btn\"], a[class*=\"cta\"]";
pub const NO_LIFT_CLASS: &str = "no-lift-effect";
pub const RIPPLE_CLASS: &str = "ripple";
pub const RIPPLE_LIFETIME_MS: i32 = 600;
pub const BUTTON_LIFT_PX: f32 = -2.0;

// Cards
pub const CARD_SELECTOR: &str = "[data-card], .card, article";
pub const CARD_HOVER_TRANSFORM: &str = "translateY(-5px) scale(1.01)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";
pub const CARD_HOVER_SHADOW: &str = "0 20px 40px rgba(0,0,0,0.15)";
pub const CARD_REST_SHADOW: &str = "0 4px 6px rgba(0,0,0,0.1)";
pub const CARD_TRANSITION: &str = "all 0.3s cubic-bezier(0.23, 1, 0.320, 1)";

// Parallax
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_ATTR: &str = "data-parallax";

// Scroll progress bar
pub const SCROLL_PROGRESS_ID: &str = "scroll-progress";
pub const SCROLL_PROGRESS_STYLE: &str = "position: fixed; top: 0; left: 0; height: 3px; \
    background: linear-gradient(to right, #0ea5e9, #10b981); z-index: 9999; \
    transition: width 0.1s ease;";

// Cursor glow
pub const CURSOR_GLOW_ID: &str = "glow-cursor";
pub const CURSOR_GLOW_SIZE: f32 = 20.0;
pub const CURSOR_GLOW_STYLE: &str = "position: fixed; width: 20px; height: 20px; \
    border: 2px solid rgba(14, 165, 233, 0.5); border-radius: 50%; pointer-events: none; \
    z-index: 9998; mix-blend-mode: screen; opacity: 0; transition: opacity 0.3s ease;";

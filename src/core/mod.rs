pub mod bubbles;
pub mod config;
pub mod constants;
pub mod effects;
pub mod input;
pub mod network;
pub mod paint;
pub mod scene;
pub mod scheduler;
pub mod theme;

pub use bubbles::BubbleField;
pub use config::{BubbleConfig, ConfigError, NetworkConfig};
pub use input::{PointerState, Viewport};
pub use network::NodeNetwork;
pub use paint::{Rgba, Surface};
pub use scene::Scene;
pub use scheduler::FrameClock;
pub use theme::Theme;

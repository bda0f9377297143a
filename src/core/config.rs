use super::constants::{MAX_BUBBLES, MAX_NETWORK_DOTS};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("radius bounds inverted: min {min} > max {max}")]
    RadiusBounds { min: f32, max: f32 },
    #[error("`{0}` must be positive and finite")]
    NotPositive(&'static str),
    #[error("damping must lie in (0, 1), got {0}")]
    Damping(f32),
    #[error("`{key}` exceeds the limit of {max}")]
    TooMany { key: &'static str, max: usize },
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn require_positive(name: &'static str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive(name))
    }
}

fn require_at_most(name: &'static str, v: usize, max: usize) -> Result<(), ConfigError> {
    if v <= max {
        Ok(())
    } else {
        Err(ConfigError::TooMany { key: name, max })
    }
}

fn require_non_negative(name: &'static str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive(name))
    }
}

/// Construction-time parameters of the bubble field.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleConfig {
    /// Entities per square logical pixel.
    pub density: f64,
    pub min_count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    pub max_speed: f32,
    pub drift: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub damping: f32,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            density: 0.000_09,
            min_count: 24,
            min_radius: 4.0,
            max_radius: 18.0,
            max_speed: 0.6,
            drift: 0.02,
            repulsion_radius: 120.0,
            repulsion_strength: 0.35,
            damping: 0.985,
        }
    }
}

impl BubbleConfig {
    /// Override keys, as they appear in `data-*` attributes.
    pub const KEYS: &'static [&'static str] = &[
        "density",
        "min-count",
        "min-radius",
        "max-radius",
        "max-speed",
        "drift",
        "repulsion-radius",
        "repulsion-strength",
        "damping",
    ];

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "density" => self.density = parse_value(key, value)?,
            "min-count" => self.min_count = parse_value(key, value)?,
            "min-radius" => self.min_radius = parse_value(key, value)?,
            "max-radius" => self.max_radius = parse_value(key, value)?,
            "max-speed" => self.max_speed = parse_value(key, value)?,
            "drift" => self.drift = parse_value(key, value)?,
            "repulsion-radius" => self.repulsion_radius = parse_value(key, value)?,
            "repulsion-strength" => self.repulsion_strength = parse_value(key, value)?,
            "damping" => self.damping = parse_value(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.density.is_finite() && self.density >= 0.0) {
            return Err(ConfigError::NotPositive("density"));
        }
        require_at_most("min-count", self.min_count, MAX_BUBBLES)?;
        require_positive("min-radius", self.min_radius)?;
        require_positive("max-radius", self.max_radius)?;
        if self.min_radius > self.max_radius {
            return Err(ConfigError::RadiusBounds {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        require_non_negative("max-speed", self.max_speed)?;
        require_non_negative("drift", self.drift)?;
        require_positive("repulsion-radius", self.repulsion_radius)?;
        require_non_negative("repulsion-strength", self.repulsion_strength)?;
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::Damping(self.damping));
        }
        Ok(())
    }
}

/// Parameters of the node network background.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    pub node_count: usize,
    pub particle_count: usize,
    pub connection_distance: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        use super::constants::{CONNECTION_DISTANCE, NETWORK_NODE_COUNT, NETWORK_PARTICLE_COUNT};
        Self {
            node_count: NETWORK_NODE_COUNT,
            particle_count: NETWORK_PARTICLE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
        }
    }
}

impl NetworkConfig {
    pub const KEYS: &'static [&'static str] =
        &["node-count", "particle-count", "connection-distance"];

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "node-count" => self.node_count = parse_value(key, value)?,
            "particle-count" => self.particle_count = parse_value(key, value)?,
            "connection-distance" => self.connection_distance = parse_value(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_at_most("node-count", self.node_count, MAX_NETWORK_DOTS)?;
        require_at_most("particle-count", self.particle_count, MAX_NETWORK_DOTS)?;
        require_positive("connection-distance", self.connection_distance)
    }
}

use super::config::BubbleConfig;
use super::constants::*;
use super::input::{PointerState, Viewport};
use super::paint::{Rgba, Surface};
use super::scene::Scene;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub position: Vec2,
    pub velocity: Vec2,
    pub base_radius: f32,
    pub radius: f32,
    pub phase: f32,
    pub pulse_speed: f32,
    pub alpha: f32,
    pub hue: f32,
    pub layer: u8,
}

/// 0.0 for the farthest layer, 1.0 for the nearest.
#[inline]
pub fn layer_depth(layer: u8) -> f32 {
    if DEPTH_LAYERS <= 1 {
        return 1.0;
    }
    (layer.min(DEPTH_LAYERS - 1) as f32) / (DEPTH_LAYERS - 1) as f32
}

#[inline]
pub fn oscillated_radius(base_radius: f32, phase: f32) -> f32 {
    base_radius * (RADIUS_OSC_BASE + RADIUS_OSC_SPAN * phase.sin())
}

/// Velocity impulse from the pointer, or `None` outside the repulsion radius.
pub fn repulsion(position: Vec2, pointer: &PointerState, config: &BubbleConfig) -> Option<Vec2> {
    let offset = position - pointer.position;
    let dist_sq = offset.length_squared();
    let reach = config.repulsion_radius;
    if !(dist_sq < reach * reach) {
        return None;
    }
    let raw = dist_sq.sqrt();
    let dir = if raw > 0.0 { offset / raw } else { Vec2::NEG_Y };
    let dist = raw.max(MIN_REPULSION_DISTANCE);
    let mut force = (1.0 - dist / reach).max(0.0) * config.repulsion_strength;
    if pointer.pressed {
        force *= PRESS_REPULSION_MULTIPLIER;
    }
    Some(dir * force)
}

/// Toroidal wrap with a slack margin of `radius` on every edge.
#[inline]
pub fn wrap_position(position: Vec2, radius: f32, viewport: &Viewport) -> Vec2 {
    let wrap = |v: f32, extent: f32| {
        if v < -radius {
            extent + radius
        } else if v > extent + radius {
            -radius
        } else {
            v
        }
    };
    Vec2::new(
        wrap(position.x, viewport.width),
        wrap(position.y, viewport.height),
    )
}

impl Bubble {
    pub fn spawn(rng: &mut impl Rng, viewport: &Viewport, config: &BubbleConfig) -> Self {
        let layer = rng.gen_range(0..DEPTH_LAYERS);
        let depth = layer_depth(layer);
        let speed_scale = FAR_LAYER_SPEED + (1.0 - FAR_LAYER_SPEED) * depth;
        let alpha_scale = FAR_LAYER_ALPHA + (1.0 - FAR_LAYER_ALPHA) * depth;
        let half_speed = config.max_speed * 0.5;
        let base_radius = rng.gen_range(config.min_radius..=config.max_radius);
        let phase = rng.gen_range(0.0..TAU);
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..=viewport.width),
                rng.gen_range(0.0..=viewport.height),
            ),
            velocity: Vec2::new(
                rng.gen_range(-half_speed..=half_speed),
                rng.gen_range(-half_speed..=half_speed),
            ) * speed_scale,
            base_radius,
            radius: oscillated_radius(base_radius, phase),
            phase,
            pulse_speed: rng.gen_range(PULSE_SPEED_MIN..=PULSE_SPEED_MAX),
            alpha: (rng.gen_range(ALPHA_MIN..=ALPHA_MAX) * alpha_scale).clamp(0.0, 1.0),
            hue: rng.gen_range(HUE_MIN..=HUE_MAX),
            layer,
        }
    }

    /// One integration step. `jitter` is a uniform sample in [0, 1) scaling the drift.
    pub fn step(
        &mut self,
        dt: f32,
        jitter: f32,
        pointer: &PointerState,
        config: &BubbleConfig,
        viewport: &Viewport,
    ) {
        self.velocity.y -= config.drift * jitter * dt;
        if let Some(push) = repulsion(self.position, pointer, config) {
            self.velocity += push * dt;
        }
        self.phase = (self.phase + self.pulse_speed * dt).rem_euclid(TAU);
        self.radius = oscillated_radius(self.base_radius, self.phase);
        self.position += self.velocity * dt;
        self.position = wrap_position(self.position, self.radius, viewport);
        self.velocity *= config.damping.powf(dt);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseRing {
    pub center: Vec2,
    pub radius: f32,
    pub max_radius: f32,
}

impl PulseRing {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            radius: 0.0,
            max_radius: RING_MAX_RADIUS,
        }
    }

    pub fn alpha(&self) -> f32 {
        (1.0 - self.radius / self.max_radius).clamp(0.0, 1.0)
    }

    /// Expand the ring; false once it has faded out.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.radius += RING_SPEED * dt;
        self.radius < self.max_radius
    }
}

/// Colours for one theme; the only place the dark flag matters.
#[derive(Clone, Copy, Debug)]
struct BubblePalette {
    trail: Rgba,
    saturation: f32,
    core_lightness: f32,
    core_alpha: f32,
    glow_lightness: f32,
    glow_alpha: f32,
    highlight_alpha: f32,
    ring: Rgba,
}

impl BubblePalette {
    fn for_theme(dark: bool) -> Self {
        if dark {
            Self {
                trail: Rgba::rgb(15, 23, 42).with_alpha(TRAIL_ALPHA_DARK),
                saturation: 0.85,
                core_lightness: 0.62,
                core_alpha: 0.55,
                glow_lightness: 0.58,
                glow_alpha: 0.35,
                highlight_alpha: 0.8,
                ring: Rgba::rgb(125, 211, 252),
            }
        } else {
            Self {
                trail: Rgba::rgb(255, 255, 255).with_alpha(TRAIL_ALPHA_LIGHT),
                saturation: 0.75,
                core_lightness: 0.52,
                core_alpha: 0.4,
                glow_lightness: 0.6,
                glow_alpha: 0.22,
                highlight_alpha: 0.9,
                ring: Rgba::rgb(14, 165, 233),
            }
        }
    }

    fn glow(&self, b: &Bubble) -> Rgba {
        Rgba::from_hsl(b.hue, self.saturation, self.glow_lightness, b.alpha * self.glow_alpha)
    }

    fn core(&self, b: &Bubble) -> Rgba {
        Rgba::from_hsl(b.hue, self.saturation, self.core_lightness, b.alpha * self.core_alpha)
    }

    fn highlight(&self, b: &Bubble) -> Rgba {
        Rgba::rgb(255, 255, 255).with_alpha(b.alpha * self.highlight_alpha)
    }
}

/// The water-bubble background: a density-sized set of drifting bubbles that
/// shy away from the pointer, plus expanding rings on press.
pub struct BubbleField {
    config: BubbleConfig,
    viewport: Viewport,
    bubbles: Vec<Bubble>,
    rings: SmallVec<[PulseRing; MAX_RINGS]>,
    was_pressed: bool,
    rng: StdRng,
}

impl BubbleField {
    pub fn new(config: BubbleConfig, viewport: Viewport, seed: u64) -> Self {
        let mut field = Self {
            config,
            viewport,
            bubbles: Vec::new(),
            rings: SmallVec::new(),
            was_pressed: false,
            rng: StdRng::seed_from_u64(seed),
        };
        field.repopulate();
        field
    }

    /// `max(min_count, floor(area * density))`, never above `MAX_BUBBLES`.
    pub fn target_count(viewport: &Viewport, config: &BubbleConfig) -> usize {
        let wanted = (viewport.area() * config.density).floor();
        let wanted = if wanted > 0.0 {
            wanted.min(MAX_BUBBLES as f64) as usize
        } else {
            0
        };
        wanted.max(config.min_count).min(MAX_BUBBLES)
    }

    pub fn config(&self) -> &BubbleConfig {
        &self.config
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn rings(&self) -> &[PulseRing] {
        &self.rings
    }

    fn repopulate(&mut self) {
        let count = Self::target_count(&self.viewport, &self.config);
        let (viewport, config) = (self.viewport, &self.config);
        let rng = &mut self.rng;
        self.bubbles = (0..count)
            .map(|_| Bubble::spawn(rng, &viewport, config))
            .collect();
        self.rings.clear();
    }

    fn spawn_ring(&mut self, center: Vec2) {
        if self.rings.len() >= MAX_RINGS {
            self.rings.remove(0);
        }
        self.rings.push(PulseRing::new(center));
    }
}

impl Scene for BubbleField {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.repopulate();
    }

    fn update(&mut self, dt: f32, pointer: &PointerState) {
        let pressed_edge = pointer.pressed && !self.was_pressed;
        self.was_pressed = pointer.pressed;
        if pressed_edge && self.viewport.contains(pointer.position) {
            self.spawn_ring(pointer.position);
        }

        for bubble in &mut self.bubbles {
            let jitter = self.rng.gen::<f32>();
            bubble.step(dt, jitter, pointer, &self.config, &self.viewport);
        }
        self.rings.retain(|ring| ring.advance(dt));
    }

    fn render(&self, surface: &mut dyn Surface, dark: bool) {
        let palette = BubblePalette::for_theme(dark);
        surface.fill_rect(Vec2::ZERO, self.viewport.size(), palette.trail);

        for layer in 0..DEPTH_LAYERS {
            for b in self.bubbles.iter().filter(|b| b.layer == layer) {
                let glow = palette.glow(b);
                surface.fill_glow(b.position, b.radius * GLOW_SCALE, glow, glow.transparent());
                surface.fill_circle(b.position, b.radius, palette.core(b));
                let offset = Vec2::splat(-HIGHLIGHT_OFFSET * b.radius);
                surface.fill_circle(
                    b.position + offset,
                    b.radius * HIGHLIGHT_SCALE,
                    palette.highlight(b),
                );
            }
        }

        for ring in &self.rings {
            surface.stroke_circle(
                ring.center,
                ring.radius,
                RING_LINE_WIDTH,
                palette.ring.with_alpha(ring.alpha() * 0.6),
            );
        }
    }
}

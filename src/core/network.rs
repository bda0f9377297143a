use super::config::NetworkConfig;
use super::constants::*;
use super::input::{PointerState, Viewport};
use super::paint::{Rgba, Surface};
use super::scene::Scene;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

const SKY: Rgba = Rgba::rgb(14, 165, 233);
const EMERALD: Rgba = Rgba::rgb(16, 185, 129);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotKind {
    Node,
    Particle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub kind: DotKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub pulse: f32,
}

impl Dot {
    fn node(rng: &mut impl Rng, viewport: &Viewport) -> Self {
        let half = NODE_SPEED * 0.5;
        Self {
            kind: DotKind::Node,
            position: random_point(rng, viewport),
            velocity: Vec2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half)),
            radius: rng.gen_range(2.0..=5.0),
            opacity: NODE_OPACITY,
            pulse: 0.0,
        }
    }

    fn particle(rng: &mut impl Rng, viewport: &Viewport) -> Self {
        let half = PARTICLE_SPEED * 0.5;
        Self {
            kind: DotKind::Particle,
            position: random_point(rng, viewport),
            velocity: Vec2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half)),
            radius: rng.gen_range(0.5..=2.0),
            opacity: rng.gen_range(0.3..=0.8),
            pulse: rng.gen_range(0.0..TAU),
        }
    }

    /// Pulsed draw radius; only particles pulse.
    pub fn display_radius(&self) -> f32 {
        match self.kind {
            DotKind::Node => self.radius,
            DotKind::Particle => self.radius * (self.pulse.sin() * 0.5 + 1.0),
        }
    }

    fn step(&mut self, dt: f32, viewport: &Viewport) {
        self.position += self.velocity * dt;
        if self.kind == DotKind::Particle {
            self.pulse = (self.pulse + NETWORK_PULSE_STEP * dt).rem_euclid(TAU);
        }
        if self.position.x < 0.0 || self.position.x > viewport.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > viewport.height {
            self.velocity.y = -self.velocity.y;
        }
        self.position = clamp_into(self.position, viewport);
    }
}

fn random_point(rng: &mut impl Rng, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        rng.gen_range(0.0..=viewport.width),
        rng.gen_range(0.0..=viewport.height),
    )
}

#[inline]
fn clamp_into(p: Vec2, viewport: &Viewport) -> Vec2 {
    p.clamp(Vec2::ZERO, viewport.size())
}

/// Connection opacity for two nodes `distance` apart, `None` when too far.
pub fn connection_opacity(distance: f32, max_distance: f32) -> Option<f32> {
    (distance < max_distance).then(|| (1.0 - distance / max_distance) * CONNECTION_OPACITY)
}

/// Floating nodes joined by fading lines, with small pulsing particles.
pub struct NodeNetwork {
    config: NetworkConfig,
    viewport: Viewport,
    nodes: Vec<Dot>,
    particles: Vec<Dot>,
}

impl NodeNetwork {
    pub fn new(config: NetworkConfig, viewport: Viewport, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = (0..config.node_count.min(MAX_NETWORK_DOTS))
            .map(|_| Dot::node(&mut rng, &viewport))
            .collect();
        let particles = (0..config.particle_count.min(MAX_NETWORK_DOTS))
            .map(|_| Dot::particle(&mut rng, &viewport))
            .collect();
        Self {
            config,
            viewport,
            nodes,
            particles,
        }
    }

    pub fn nodes(&self) -> &[Dot] {
        &self.nodes
    }

    pub fn particles(&self) -> &[Dot] {
        &self.particles
    }

    /// Node index pairs close enough to be joined, with their line opacity.
    pub fn connections(&self) -> Vec<(usize, usize, f32)> {
        let mut out = Vec::new();
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let d = self.nodes[i].position.distance(self.nodes[j].position);
                if let Some(opacity) = connection_opacity(d, self.config.connection_distance) {
                    out.push((i, j, opacity));
                }
            }
        }
        out
    }
}

impl Scene for NodeNetwork {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for dot in self.nodes.iter_mut().chain(self.particles.iter_mut()) {
            dot.position = clamp_into(dot.position, &viewport);
        }
    }

    fn update(&mut self, dt: f32, _pointer: &PointerState) {
        let viewport = self.viewport;
        for dot in self.nodes.iter_mut().chain(self.particles.iter_mut()) {
            dot.step(dt, &viewport);
        }
    }

    fn render(&self, surface: &mut dyn Surface, dark: bool) {
        let trail = if dark {
            Rgba::rgb(15, 23, 42).with_alpha(NETWORK_TRAIL_ALPHA_DARK)
        } else {
            Rgba::rgb(255, 255, 255).with_alpha(NETWORK_TRAIL_ALPHA_LIGHT)
        };
        surface.fill_rect(Vec2::ZERO, self.viewport.size(), trail);

        let line_scale = if dark { 1.0 } else { LIGHT_CONNECTION_SCALE };
        for (i, j, opacity) in self.connections() {
            let a = opacity * line_scale;
            surface.stroke_gradient_line(
                self.nodes[i].position,
                self.nodes[j].position,
                1.0,
                SKY.with_alpha(a),
                EMERALD.with_alpha(a),
            );
        }

        for node in &self.nodes {
            let (glow_a, core_a) = if dark {
                (node.opacity, node.opacity)
            } else {
                (node.opacity * 0.6, node.opacity * 0.7)
            };
            surface.fill_glow(node.position, node.radius * 2.0, SKY.with_alpha(glow_a), SKY.transparent());
            surface.fill_circle(node.position, node.radius, SKY.with_alpha(core_a));
        }

        for particle in &self.particles {
            let r = particle.display_radius();
            let (glow_a, core_a) = if dark {
                (particle.opacity * 0.5, particle.opacity)
            } else {
                (particle.opacity * 0.3, particle.opacity * 0.7)
            };
            surface.fill_glow(
                particle.position,
                r * 1.5,
                EMERALD.with_alpha(glow_a),
                EMERALD.transparent(),
            );
            surface.fill_circle(particle.position, r, EMERALD.with_alpha(core_a));
        }
    }
}

// Host-side tests for the bubble field simulation and render order.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod input {
    include!("../src/core/input.rs");
}
mod paint {
    include!("../src/core/paint.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod bubbles {
    include!("../src/core/bubbles.rs");
}

use bubbles::*;
use config::BubbleConfig;
use constants::*;
use glam::Vec2;
use input::{PointerState, Viewport};
use paint::{Rgba, Surface};
use scene::Scene;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Rect { size: Vec2, color: Rgba },
    Circle { center: Vec2, radius: f32 },
    Glow { center: Vec2, radius: f32 },
    Ring { radius: f32, color: Rgba },
    Line,
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Surface for Recorder {
    fn fill_rect(&mut self, _origin: Vec2, size: Vec2, color: Rgba) {
        self.ops.push(Op::Rect { size, color });
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Rgba) {
        self.ops.push(Op::Circle { center, radius });
    }
    fn fill_glow(&mut self, center: Vec2, radius: f32, _inner: Rgba, outer: Rgba) {
        assert_eq!(outer.a, 0.0, "glow must fade to transparent");
        self.ops.push(Op::Glow { center, radius });
    }
    fn stroke_circle(&mut self, _center: Vec2, radius: f32, _w: f32, color: Rgba) {
        self.ops.push(Op::Ring { radius, color });
    }
    fn stroke_gradient_line(&mut self, _f: Vec2, _t: Vec2, _w: f32, _a: Rgba, _b: Rgba) {
        self.ops.push(Op::Line);
    }
}

fn still_config() -> BubbleConfig {
    BubbleConfig {
        drift: 0.0,
        ..BubbleConfig::default()
    }
}

fn field(config: BubbleConfig, w: f32, h: f32, seed: u64) -> BubbleField {
    BubbleField::new(config, Viewport::new(w, h, 1.0), seed)
}

#[test]
fn default_config_is_valid() {
    assert!(BubbleConfig::default().validate().is_ok());
}

#[test]
fn population_matches_density_formula() {
    // 1024 * 512 / 4096 == 128 exactly
    let config = BubbleConfig {
        density: 1.0 / 4096.0,
        min_count: 10,
        ..BubbleConfig::default()
    };
    let f = field(config, 1024.0, 512.0, 1);
    assert_eq!(f.bubbles().len(), 128);
}

#[test]
fn population_falls_back_to_minimum_count() {
    let config = BubbleConfig {
        density: 1.0 / 4096.0,
        min_count: 24,
        ..BubbleConfig::default()
    };
    let f = field(config.clone(), 10.0, 10.0, 1);
    assert_eq!(f.bubbles().len(), 24);
    let empty = field(config, 0.0, 0.0, 1);
    assert_eq!(empty.bubbles().len(), 24);
}

#[test]
fn resize_to_same_dimensions_keeps_count_but_rerolls_positions() {
    let mut f = field(BubbleConfig::default(), 1280.0, 720.0, 7);
    let vp = Viewport::new(640.0, 480.0, 2.0);
    f.resize(vp);
    let first: Vec<Vec2> = f.bubbles().iter().map(|b| b.position).collect();
    f.resize(vp);
    let second: Vec<Vec2> = f.bubbles().iter().map(|b| b.position).collect();
    assert_eq!(first.len(), second.len());
    assert_eq!(first.len(), BubbleField::target_count(&vp, f.config()));
    assert_ne!(first, second);
}

#[test]
fn spawned_bubbles_respect_factory_ranges() {
    let config = BubbleConfig::default();
    let f = field(config.clone(), 800.0, 600.0, 3);
    let half = config.max_speed / 2.0;
    for b in f.bubbles() {
        assert!(b.position.x >= 0.0 && b.position.x <= 800.0);
        assert!(b.position.y >= 0.0 && b.position.y <= 600.0);
        assert!(b.velocity.x.abs() <= half && b.velocity.y.abs() <= half);
        assert!(b.base_radius >= config.min_radius && b.base_radius <= config.max_radius);
        assert!(b.phase >= 0.0 && b.phase < std::f32::consts::TAU);
        assert!(b.alpha >= 0.0 && b.alpha <= 1.0);
        assert!(b.hue >= HUE_MIN && b.hue <= HUE_MAX);
        assert!(b.layer < DEPTH_LAYERS);
    }
}

#[test]
fn radius_and_alpha_stay_bounded_while_running() {
    let config = BubbleConfig::default();
    let mut f = field(config.clone(), 400.0, 300.0, 11);
    let lo = config.min_radius * (RADIUS_OSC_BASE - RADIUS_OSC_SPAN);
    let hi = config.max_radius * (RADIUS_OSC_BASE + RADIUS_OSC_SPAN);
    for i in 0..1500 {
        let t = i as f32 * 0.01;
        let pointer = PointerState {
            position: Vec2::new(200.0 + 150.0 * t.cos(), 150.0 + 100.0 * t.sin()),
            pressed: i % 200 < 50,
        };
        f.update(1.0, &pointer);
        for b in f.bubbles() {
            assert!(b.radius >= lo - 1e-4 && b.radius <= hi + 1e-4, "radius {}", b.radius);
            assert!(b.radius > 0.0);
            assert!(b.alpha >= 0.0 && b.alpha <= 1.0);
        }
        for ring in f.rings() {
            assert!(ring.alpha() >= 0.0 && ring.alpha() <= 1.0);
        }
    }
}

#[test]
fn positions_stay_within_wrap_margin() {
    let config = BubbleConfig {
        max_speed: 40.0,
        repulsion_strength: 25.0,
        ..BubbleConfig::default()
    };
    let mut f = field(config, 320.0, 240.0, 5);
    let pointer = PointerState {
        position: Vec2::new(160.0, 120.0),
        pressed: true,
    };
    for _ in 0..500 {
        f.update(1.7, &pointer);
        for b in f.bubbles() {
            let r = b.radius;
            assert!(b.position.x >= -r && b.position.x <= 320.0 + r, "x {}", b.position.x);
            assert!(b.position.y >= -r && b.position.y <= 240.0 + r, "y {}", b.position.y);
        }
    }
}

#[test]
fn wrap_sends_entity_to_opposite_edge() {
    let vp = Viewport::new(100.0, 50.0, 1.0);
    assert_eq!(wrap_position(Vec2::new(-6.0, 20.0), 5.0, &vp), Vec2::new(105.0, 20.0));
    assert_eq!(wrap_position(Vec2::new(30.0, 56.0), 5.0, &vp), Vec2::new(30.0, -5.0));
    // inside the slack margin nothing moves
    assert_eq!(wrap_position(Vec2::new(-4.0, 54.0), 5.0, &vp), Vec2::new(-4.0, 54.0));
}

#[test]
fn coincident_pointer_applies_maximum_force_without_nan() {
    let config = still_config();
    let mut f = field(config.clone(), 500.0, 500.0, 9);
    let target = f.bubbles()[0].clone();
    let pointer = PointerState {
        position: target.position,
        pressed: false,
    };
    f.update(1.0, &pointer);
    let after = &f.bubbles()[0];
    assert!(after.position.is_finite() && after.velocity.is_finite());

    let max_force =
        (1.0 - MIN_REPULSION_DISTANCE / config.repulsion_radius) * config.repulsion_strength;
    let expected = (target.velocity + Vec2::NEG_Y * max_force) * config.damping;
    assert!((after.velocity - expected).length() < 1e-5, "{:?} vs {:?}", after.velocity, expected);
}

#[test]
fn repulsion_is_none_beyond_radius() {
    let config = BubbleConfig::default();
    let pointer = PointerState {
        position: Vec2::new(0.0, 0.0),
        pressed: true,
    };
    assert!(repulsion(Vec2::new(config.repulsion_radius + 1.0, 0.0), &pointer, &config).is_none());
    assert!(repulsion(Vec2::new(config.repulsion_radius * 0.5, 0.0), &pointer, &config).is_some());
}

#[test]
fn repulsion_falls_off_linearly_and_points_away() {
    let config = BubbleConfig::default();
    let pointer = PointerState {
        position: Vec2::new(100.0, 100.0),
        pressed: false,
    };
    let near = repulsion(Vec2::new(110.0, 100.0), &pointer, &config).unwrap();
    let far = repulsion(Vec2::new(160.0, 100.0), &pointer, &config).unwrap();
    assert!(near.x > far.x && far.x > 0.0);
    assert!(near.y.abs() < 1e-6);
    let expected = (1.0 - 60.0 / config.repulsion_radius) * config.repulsion_strength;
    assert!((far.x - expected).abs() < 1e-6);
}

#[test]
fn pressed_pointer_amplifies_repulsion() {
    let config = BubbleConfig::default();
    let mut pointer = PointerState {
        position: Vec2::new(50.0, 50.0),
        pressed: false,
    };
    let at = Vec2::new(80.0, 90.0);
    let idle = repulsion(at, &pointer, &config).unwrap();
    pointer.pressed = true;
    let pressed = repulsion(at, &pointer, &config).unwrap();
    let ratio = pressed.length() / idle.length();
    assert!((ratio - PRESS_REPULSION_MULTIPLIER).abs() < 1e-5);
}

#[test]
fn distant_pointer_leaves_only_damping() {
    let config = still_config();
    let mut f = field(config.clone(), 600.0, 400.0, 13);
    let before: Vec<Vec2> = f.bubbles().iter().map(|b| b.velocity).collect();
    f.update(1.0, &PointerState::default());
    for (b, v0) in f.bubbles().iter().zip(before) {
        let expected = v0 * config.damping;
        assert!((b.velocity - expected).length() < 1e-6);
    }
}

#[test]
fn velocity_decays_toward_rest_without_input() {
    let mut f = field(still_config(), 600.0, 400.0, 17);
    for _ in 0..2000 {
        f.update(1.0, &PointerState::default());
    }
    for b in f.bubbles() {
        assert!(b.velocity.length() < 1e-3);
    }
}

#[test]
fn press_edge_spawns_one_ring_that_expires() {
    let mut f = field(BubbleConfig::default(), 400.0, 400.0, 21);
    let pressed = PointerState {
        position: Vec2::new(200.0, 200.0),
        pressed: true,
    };
    f.update(1.0, &pressed);
    f.update(1.0, &pressed);
    assert_eq!(f.rings().len(), 1);

    let released = PointerState {
        pressed: false,
        ..pressed
    };
    let ticks = (RING_MAX_RADIUS / RING_SPEED).ceil() as usize + 1;
    for _ in 0..ticks {
        f.update(1.0, &released);
    }
    assert!(f.rings().is_empty());
}

#[test]
fn ring_count_is_capped() {
    let mut f = field(BubbleConfig::default(), 400.0, 400.0, 23);
    let mut pointer = PointerState {
        position: Vec2::new(100.0, 100.0),
        pressed: false,
    };
    for _ in 0..(MAX_RINGS * 2) {
        pointer.pressed = true;
        f.update(0.1, &pointer);
        pointer.pressed = false;
        f.update(0.1, &pointer);
    }
    assert_eq!(f.rings().len(), MAX_RINGS);
}

#[test]
fn press_outside_viewport_spawns_no_ring() {
    let mut f = field(BubbleConfig::default(), 400.0, 400.0, 29);
    let pointer = PointerState {
        pressed: true,
        ..PointerState::default()
    };
    f.update(1.0, &pointer);
    assert!(f.rings().is_empty());
}

#[test]
fn render_draws_trail_then_glow_core_highlight() {
    let f = field(BubbleConfig::default(), 300.0, 200.0, 31);
    let mut rec = Recorder::default();
    f.render(&mut rec, true);

    let n = f.bubbles().len();
    assert_eq!(rec.ops.len(), 1 + 3 * n);
    match &rec.ops[0] {
        Op::Rect { size, color } => {
            assert_eq!(*size, Vec2::new(300.0, 200.0));
            assert!(color.a > 0.0 && color.a < 1.0, "trail must be translucent");
        }
        other => panic!("expected trail fill first, got {:?}", other),
    }
    for chunk in rec.ops[1..].chunks(3) {
        let (Op::Glow { center: gc, radius: gr }, Op::Circle { center: cc, radius: cr }, Op::Circle { center: hc, radius: hr }) =
            (&chunk[0], &chunk[1], &chunk[2])
        else {
            panic!("unexpected op order {:?}", chunk);
        };
        assert_eq!(gc, cc);
        assert!(*gr >= 2.6 * cr && *gr <= 2.8 * cr);
        assert!(hr < cr);
        assert!(hc.x < cc.x && hc.y < cc.y);
    }
}

#[test]
fn render_goes_back_to_front_by_layer() {
    let f = field(BubbleConfig::default(), 500.0, 500.0, 37);
    let mut rec = Recorder::default();
    f.render(&mut rec, false);
    let drawn: Vec<Vec2> = rec
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Glow { center, .. } => Some(*center),
            _ => None,
        })
        .collect();
    let mut expected = Vec::new();
    for layer in 0..DEPTH_LAYERS {
        expected.extend(f.bubbles().iter().filter(|b| b.layer == layer).map(|b| b.position));
    }
    assert_eq!(drawn, expected);
}

#[test]
fn render_trail_colour_follows_theme_flag() {
    let f = field(BubbleConfig::default(), 100.0, 100.0, 41);
    let trail = |dark: bool| {
        let mut rec = Recorder::default();
        f.render(&mut rec, dark);
        rec.ops[0].clone()
    };
    assert_ne!(trail(true), trail(false));
}

#[test]
fn render_strokes_active_rings() {
    let mut f = field(BubbleConfig::default(), 300.0, 300.0, 43);
    f.update(
        1.0,
        &PointerState {
            position: Vec2::new(150.0, 150.0),
            pressed: true,
        },
    );
    let mut rec = Recorder::default();
    f.render(&mut rec, true);
    let rings: Vec<&Op> = rec.ops.iter().filter(|op| matches!(op, Op::Ring { .. })).collect();
    assert_eq!(rings.len(), 1);
    assert!(matches!(rec.ops.last(), Some(Op::Ring { .. })));
}

#[test]
fn render_does_not_touch_state() {
    let f = field(BubbleConfig::default(), 300.0, 300.0, 47);
    let before = f.bubbles().to_vec();
    let mut rec = Recorder::default();
    f.render(&mut rec, true);
    f.render(&mut rec, false);
    assert_eq!(before, f.bubbles());
}

#[test]
fn same_seed_gives_same_field() {
    let a = field(BubbleConfig::default(), 640.0, 480.0, 99);
    let b = field(BubbleConfig::default(), 640.0, 480.0, 99);
    assert_eq!(a.bubbles(), b.bubbles());
}

#[test]
fn huge_density_is_capped_instead_of_allocating() {
    let mut config = BubbleConfig::default();
    config.set("density", "1e30").unwrap();
    assert!(config.validate().is_ok());
    let vp = Viewport::new(1920.0, 1080.0, 1.0);
    assert_eq!(BubbleField::target_count(&vp, &config), MAX_BUBBLES);
    let field = BubbleField::new(config, vp, 11);
    assert_eq!(field.bubbles().len(), MAX_BUBBLES);
}

#[test]
fn count_cap_applies_to_unvalidated_configs() {
    let vp = Viewport::new(100.0, 100.0, 1.0);
    let overflow = BubbleConfig {
        density: f64::MAX,
        ..BubbleConfig::default()
    };
    assert_eq!(BubbleField::target_count(&vp, &overflow), MAX_BUBBLES);
    let crowded = BubbleConfig {
        min_count: usize::MAX,
        ..BubbleConfig::default()
    };
    assert_eq!(BubbleField::target_count(&vp, &crowded), MAX_BUBBLES);
    let nan = BubbleConfig {
        density: f64::NAN,
        ..BubbleConfig::default()
    };
    assert_eq!(BubbleField::target_count(&vp, &nan), nan.min_count);
}

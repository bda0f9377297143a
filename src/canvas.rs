use crate::core::config::ConfigError;
use crate::core::{BubbleConfig, NetworkConfig, Rgba, Surface, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D backend for `Surface`; callers draw in logical pixels.
pub struct Canvas2d {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    /// `None` when the element is missing, is not a canvas, or has no 2D context.
    pub fn acquire(document: &web::Document, id: &str) -> Option<Self> {
        let canvas = document
            .get_element_by_id(id)?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn element(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the viewport and scale drawing by the dpr.
    pub fn resize_to(&self, viewport: &Viewport) {
        let (w_px, h_px) = viewport.backing_size();
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", viewport.width));
        _ = style.set_property("height", &format!("{}px", viewport.height));
        let dpr = viewport.dpr as f64;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn arc_path(&self, center: Vec2, radius: f32) -> bool {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
    }

    /// Apply `data-*` overrides from the canvas element onto `config`.
    fn read_overrides(
        &self,
        keys: &[&str],
        mut apply: impl FnMut(&str, &str) -> Result<(), ConfigError>,
    ) {
        for key in keys {
            if let Some(value) = self.canvas.get_attribute(&format!("data-{}", key)) {
                if let Err(e) = apply(key, &value) {
                    log::warn!("[canvas] ignoring override: {}", e);
                }
            }
        }
    }

    pub fn bubble_config(&self) -> BubbleConfig {
        let mut config = BubbleConfig::default();
        self.read_overrides(BubbleConfig::KEYS, |k, v| config.set(k, v));
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[bubbles] invalid configuration ({}), using defaults", e);
                BubbleConfig::default()
            }
        }
    }

    pub fn network_config(&self) -> NetworkConfig {
        let mut config = NetworkConfig::default();
        self.read_overrides(NetworkConfig::KEYS, |k, v| config.set(k, v));
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[network] invalid configuration ({}), using defaults", e);
                NetworkConfig::default()
            }
        }
    }
}

impl Surface for Canvas2d {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if self.arc_path(center, radius) {
            self.ctx.set_fill_style_str(&color.to_string());
            self.ctx.fill();
        }
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        let (x, y) = (center.x as f64, center.y as f64);
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0) as f64)
        else {
            return;
        };
        _ = gradient.add_color_stop(0.0, &inner.to_string());
        _ = gradient.add_color_stop(1.0, &outer.to_string());
        if self.arc_path(center, radius) {
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba) {
        if self.arc_path(center, radius) {
            self.ctx.set_stroke_style_str(&color.to_string());
            self.ctx.set_line_width(line_width as f64);
            self.ctx.stroke();
        }
    }

    fn stroke_gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        line_width: f32,
        from_color: Rgba,
        to_color: Rgba,
    ) {
        let gradient = self.ctx.create_linear_gradient(
            from.x as f64,
            from.y as f64,
            to.x as f64,
            to.y as f64,
        );
        _ = gradient.add_color_stop(0.0, &from_color.to_string());
        _ = gradient.add_color_stop(1.0, &to_color.to_string());
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}

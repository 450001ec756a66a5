//! Canvas 2D implementation of the drawing surface, plus viewport sizing.

use driftfield::{Rgb, StrokeStyle, Surface};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Immediate-mode surface over a canvas' 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("2d canvas context not supported")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn fill_background(&mut self, color: Rgb, width: f32, height: f32) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, style: StrokeStyle) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&style.color.css_with_alpha(style.alpha));
        self.ctx.set_line_width(style.width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}

/// Window inner size in CSS pixels.
pub fn window_size(window: &Window) -> Result<Vec2, JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("inner_width is not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("inner_height is not a number")?;
    Ok(Vec2::new(width as f32, height as f32))
}

/// Size the canvas backing store to the window and return the new size.
pub fn fit_to_window(canvas: &HtmlCanvasElement, window: &Window) -> Result<Vec2, JsValue> {
    let size = window_size(window)?;
    canvas.set_width(size.x as u32);
    canvas.set_height(size.y as u32);
    Ok(Vec2::new(canvas.width() as f32, canvas.height() as f32))
}

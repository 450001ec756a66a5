//! Drawing surface contract.
//!
//! The simulation never talks to a graphics API directly. Hosts implement
//! `Surface` over whatever immediate-mode 2D context they have (Canvas 2D in
//! the browser, `LineBuffer` for export and tests).

use glam::Vec2;
use crate::api::config::Rgb;

/// Stroke parameters for one line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    /// Opacity, already clamped to 0.0..=1.0.
    pub alpha: f32,
    pub width: f32,
}

/// A 2D immediate-mode drawing target.
pub trait Surface {
    /// Backend identifier (e.g., "canvas2d", "line-buffer").
    fn backend(&self) -> &'static str;

    /// Paint the whole `width` x `height` area with an opaque color.
    fn fill_background(&mut self, color: Rgb, width: f32, height: f32);

    /// Stroke a single segment from `from` to `to`.
    fn stroke_segment(&mut self, from: Vec2, to: Vec2, style: StrokeStyle);
}

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use crate::api::config::Rgb;
use super::traits::{StrokeStyle, Surface};

/// One stroked segment in the exported frame.
/// Wire format for JS-side renderers: 6 floats = 24 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    /// Stroke opacity (0.0..=1.0).
    pub alpha: f32,
    /// Stroke width in surface pixels.
    pub width: f32,
}

impl LineInstance {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// A recording surface: the last frame's background plus every segment
/// stroked since, as a flat buffer a JS renderer can read in place.
///
/// All segments share the config's stroke color, so only opacity and
/// width travel per line.
pub struct LineBuffer {
    lines: Vec<LineInstance>,
    background: Option<Rgb>,
    size: Vec2,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
            background: None,
            size: Vec2::ZERO,
        }
    }

    pub fn lines(&self) -> &[LineInstance] {
        &self.lines
    }

    /// Background painted for the current frame, if any.
    pub fn background(&self) -> Option<Rgb> {
        self.background
    }

    /// Size of the last background fill.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    /// The segments as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lines)
    }

    /// Raw pointer to line data for reads from wasm memory.
    pub fn lines_ptr(&self) -> *const f32 {
        self.lines.as_ptr() as *const f32
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for LineBuffer {
    fn backend(&self) -> &'static str {
        "line-buffer"
    }

    /// A background fill starts a new frame: previous segments are dropped.
    fn fill_background(&mut self, color: Rgb, width: f32, height: f32) {
        self.lines.clear();
        self.background = Some(color);
        self.size = Vec2::new(width, height);
    }

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, style: StrokeStyle) {
        self.lines.push(LineInstance {
            x0: from.x,
            y0: from.y,
            x1: to.x,
            y1: to.y,
            alpha: style.alpha,
            width: style.width,
        });
    }
}

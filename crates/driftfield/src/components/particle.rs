use glam::Vec2;

/// One lattice point of the field.
///
/// `pos` and `alpha` change every frame; the anchor and stroke length are
/// fixed at creation and only readable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current rendered position.
    pub pos: Vec2,
    /// Current opacity. Nominally 0.0..=1.0; fading can leave it slightly
    /// below zero until the particle re-enters the focal radius.
    pub alpha: f32,
    base: Vec2,
    line_length: f32,
}

impl Particle {
    /// Create an invisible particle resting on its anchor.
    pub fn new(base: Vec2, line_length: f32) -> Self {
        Self {
            pos: base,
            alpha: 0.0,
            base,
            line_length,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Anchor position on the lattice.
    pub fn base(&self) -> Vec2 {
        self.base
    }

    pub fn line_length(&self) -> f32 {
        self.line_length
    }

    /// Whether the renderer draws this particle.
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }

    /// Alpha clamped to 0.0..=1.0 for drawing.
    pub fn visible_alpha(&self) -> f32 {
        self.alpha.clamp(0.0, 1.0)
    }

    /// Stroke end point: the diagonal `line_length` down and right of `pos`.
    pub fn stroke_end(&self) -> Vec2 {
        self.pos + Vec2::splat(self.line_length)
    }
}

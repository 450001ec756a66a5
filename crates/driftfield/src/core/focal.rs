use glam::Vec2;

/// The point particles brighten around and are pushed relative to.
///
/// Holds the last pointer position indefinitely; leaving the surface does
/// not clear it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalPoint {
    pub position: Vec2,
    radius: f32,
}

impl FocalPoint {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    /// A focal point centered in a `width` x `height` viewport.
    pub fn centered(width: f32, height: f32, radius: f32) -> Self {
        Self::new(Vec2::new(width / 2.0, height / 2.0), radius)
    }

    /// Record a pointer move.
    pub fn set(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

use glam::Vec2;
use crate::api::config::FieldConfig;
use crate::components::particle::Particle;
use crate::renderer::traits::{StrokeStyle, Surface};

/// Paint the opaque background over the whole viewport.
/// Nothing from the previous frame survives.
pub fn clear_surface(surface: &mut impl Surface, viewport: Vec2, config: &FieldConfig) {
    surface.fill_background(config.background, viewport.x, viewport.y);
}

/// Stroke one particle as a short diagonal segment.
/// Particles with `alpha <= 0` produce no draw call.
pub fn draw_particle(particle: &Particle, surface: &mut impl Surface, config: &FieldConfig) {
    if !particle.is_visible() {
        return;
    }
    let style = StrokeStyle {
        color: config.stroke,
        alpha: particle.visible_alpha(),
        width: config.line_width,
    };
    surface.stroke_segment(particle.pos, particle.stroke_end(), style);
}

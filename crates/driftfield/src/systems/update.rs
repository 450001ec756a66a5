//! Per-particle, per-frame motion and opacity.
//!
//! Each particle is advanced independently from its own state, the shared
//! focal point and the frame counter. Same inputs, same output.

use glam::Vec2;
use crate::api::config::FieldConfig;
use crate::components::particle::Particle;
use crate::core::focal::FocalPoint;

/// Distances below this are treated as "on the focal point" when
/// normalising the push direction.
const MIN_DISTANCE: f32 = 0.001;

/// Vertical equilibrium for an anchor at `frame`: the anchor's Y plus a
/// sine wave travelling along X.
pub fn wave_target_y(base: Vec2, frame: u64, config: &FieldConfig) -> f32 {
    // Phase in f64 so long sessions keep a smooth wave.
    let phase = base.x as f64 * config.wave_frequency as f64
        + frame as f64 * config.wave_speed as f64;
    base.y + phase.sin() as f32 * config.wave_amplitude
}

/// Advance one particle by one frame.
///
/// Inside the focal radius the particle lights up with a linear falloff and
/// is pushed along the focal direction; outside it fades. Either way it then
/// relaxes a fixed fraction of the way back toward its anchor X and wave Y.
pub fn update_particle(
    particle: &mut Particle,
    focal: &FocalPoint,
    frame: u64,
    config: &FieldConfig,
) {
    let base = particle.base();
    let target_y = wave_target_y(base, frame, config);

    let delta = focal.position - particle.pos;
    let distance = delta.length();
    let radius = focal.radius();

    if distance < radius {
        particle.alpha = 1.0 - distance / radius;

        let force = (radius - distance) / radius;
        // Zero delta yields a zero direction rather than NaN.
        let direction = delta / distance.max(MIN_DISTANCE);
        particle.pos += direction * force * config.push_strength;
    } else if particle.alpha > 0.0 {
        // No clamp here; rendering treats alpha <= 0 as invisible.
        particle.alpha -= config.fade_rate;
    }

    particle.pos.x += (base.x - particle.pos.x) * config.drift_rate;
    particle.pos.y += (target_y - particle.pos.y) * config.drift_rate;
}

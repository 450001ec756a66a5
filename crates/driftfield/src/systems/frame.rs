use crate::core::state::AnimationState;
use crate::renderer::traits::Surface;
use crate::systems::render::{clear_surface, draw_particle};
use crate::systems::update::update_particle;

/// Run one tick: clear the surface, update then draw each particle in grid
/// order, and advance the frame counter.
pub fn run_frame(state: &mut AnimationState, surface: &mut impl Surface) {
    clear_surface(surface, state.viewport(), &state.config);

    let frame = state.frame;
    let focal = state.focal;
    for particle in state.grid.iter_mut() {
        update_particle(particle, &focal, frame, &state.config);
        draw_particle(particle, surface, &state.config);
    }

    state.frame += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::api::config::FieldConfig;
    use crate::input::queue::InputEvent;
    use crate::renderer::instance::LineBuffer;

    fn config_400() -> FieldConfig {
        FieldConfig {
            spacing: 20.0,
            ..FieldConfig::default()
        }
    }

    #[test]
    fn frame_advances_once_per_tick() {
        let mut state = AnimationState::new(config_400(), 400.0, 400.0);
        let mut buf = LineBuffer::new();
        for _ in 0..5 {
            run_frame(&mut state, &mut buf);
        }
        assert_eq!(state.frame(), 5);
    }

    #[test]
    fn pointer_on_first_particle_lights_it() {
        let mut state = AnimationState::new(config_400(), 400.0, 400.0);
        assert_eq!(state.grid().len(), 400);
        assert!(state.grid().iter().all(|p| p.alpha == 0.0));

        let first = state.grid().get(0).map(|p| p.base()).unwrap_or_default();
        state.apply(InputEvent::PointerMove { x: first.x, y: first.y });

        let mut buf = LineBuffer::new();
        run_frame(&mut state, &mut buf);

        let radius = state.focal().radius();
        assert_eq!(state.grid().get(0).map(|p| p.alpha), Some(1.0));
        for p in state.grid().iter() {
            if p.base().distance(first) >= radius {
                assert_eq!(p.alpha, 0.0, "particle at {:?} lit", p.base());
            }
        }
        // (380, 380) sits ~537 px away, beyond the 450 px radius.
        assert!(state.grid().iter().any(|p| p.base() == Vec2::new(380.0, 380.0)));
    }

    #[test]
    fn only_visible_particles_are_drawn() {
        let mut state = AnimationState::new(config_400(), 400.0, 400.0);
        state.apply(InputEvent::PointerMove { x: 0.0, y: 0.0 });
        let mut buf = LineBuffer::new();
        run_frame(&mut state, &mut buf);

        let visible = state.grid().iter().filter(|p| p.is_visible()).count();
        assert_eq!(buf.line_count() as usize, visible);
        assert!(visible > 0 && visible < state.grid().len());
        assert!(buf.lines().iter().all(|l| l.alpha > 0.0 && l.alpha <= 1.0));
    }

    #[test]
    fn focal_point_persists_across_ticks() {
        let mut state = AnimationState::new(config_400(), 400.0, 400.0);
        state.apply(InputEvent::PointerMove { x: 123.0, y: 45.0 });
        let mut buf = LineBuffer::new();
        for _ in 0..200 {
            run_frame(&mut state, &mut buf);
        }
        assert_eq!(state.focal().position, Vec2::new(123.0, 45.0));
    }

    #[test]
    fn lit_particles_fade_after_pointer_leaves_radius() {
        let mut state = AnimationState::new(config_400(), 400.0, 400.0);
        state.apply(InputEvent::PointerMove { x: 0.0, y: 0.0 });
        let mut buf = LineBuffer::new();
        run_frame(&mut state, &mut buf);
        assert!(buf.line_count() > 0);

        state.apply(InputEvent::PointerMove { x: 5000.0, y: 5000.0 });
        for _ in 0..60 {
            run_frame(&mut state, &mut buf);
        }
        assert_eq!(buf.line_count(), 0);
        assert!(state.grid().iter().all(|p| !p.is_visible()));
    }
}

pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{FieldConfig, Rgb};
pub use components::particle::Particle;
pub use core::focal::FocalPoint;
pub use core::grid::ParticleGrid;
pub use core::state::AnimationState;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{LineInstance, LineBuffer};
pub use renderer::traits::{Surface, StrokeStyle};
pub use systems::frame::run_frame;
pub use systems::update::{update_particle, wave_target_y};

use glam::Vec2;
use crate::api::config::FieldConfig;
use crate::core::focal::FocalPoint;
use crate::core::grid::ParticleGrid;
use crate::input::queue::InputEvent;

/// Everything the running effect owns: config, frame counter, grid,
/// focal point and the viewport the grid was built for.
///
/// Mutated only through `apply` (between ticks) and `systems::frame::run_frame`
/// (during a tick).
pub struct AnimationState {
    pub(crate) config: FieldConfig,
    pub(crate) frame: u64,
    pub(crate) grid: ParticleGrid,
    pub(crate) focal: FocalPoint,
    viewport: Vec2,
}

impl AnimationState {
    /// Build the initial grid for a `width` x `height` viewport, with the
    /// focal point at its center.
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Self {
        let grid = ParticleGrid::build(
            width,
            height,
            config.effective_spacing(),
            config.line_length,
        );
        let focal = FocalPoint::centered(width, height, config.focal_radius);
        Self {
            config,
            frame: 0,
            grid,
            focal,
            viewport: Vec2::new(width, height),
        }
    }

    /// Apply one queued state transition.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.set_focal_point(x, y),
            InputEvent::Resize { width, height } => self.rebuild_grid(width, height),
        }
    }

    pub fn set_focal_point(&mut self, x: f32, y: f32) {
        self.focal.set(x, y);
    }

    /// Replace the grid for a new viewport size. The frame counter and the
    /// focal point carry over.
    pub fn rebuild_grid(&mut self, width: f32, height: f32) {
        self.grid = ParticleGrid::build(
            width,
            height,
            self.config.effective_spacing(),
            self.config.line_length,
        );
        self.viewport = Vec2::new(width, height);
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Number of completed ticks.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn grid(&self) -> &ParticleGrid {
        &self.grid
    }

    pub fn focal(&self) -> &FocalPoint {
        &self.focal
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}

use driftfield::{
    AnimationState, FieldConfig, InputEvent, InputQueue, LineBuffer, Surface,
    run_frame,
};

/// Host-side driver for one particle field.
///
/// Owns the `AnimationState` and the pending input. Event callbacks only
/// push into the queue; `tick` applies everything queued so far, then runs
/// exactly one frame. The browser loop in `animation` calls `tick` once per
/// animation frame; hosts that draw from JS call `tick_buffered` and read the
/// line buffer instead.
pub struct FieldRunner {
    state: AnimationState,
    input: InputQueue,
    lines: LineBuffer,
}

impl FieldRunner {
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Self {
        let state = AnimationState::new(config, width, height);
        let lines = LineBuffer::with_capacity(state.grid().len());
        log::info!(
            "field runner: {}x{} viewport, {} particles",
            width, height, state.grid().len()
        );
        Self {
            state,
            input: InputQueue::new(),
            lines,
        }
    }

    /// Queue an event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply queued input, then run one frame onto `surface`.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        self.apply_pending_input();
        run_frame(&mut self.state, surface);
    }

    /// Apply queued input, then run one frame into the export buffer.
    pub fn tick_buffered(&mut self) {
        self.apply_pending_input();
        run_frame(&mut self.state, &mut self.lines);
    }

    fn apply_pending_input(&mut self) {
        for event in self.input.drain() {
            if let InputEvent::Resize { width, height } = event {
                log::debug!("resize to {}x{}", width, height);
            }
            self.state.apply(event);
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    // ---- Accessors for the exported line buffer ----

    pub fn lines(&self) -> &LineBuffer {
        &self.lines
    }

    pub fn lines_ptr(&self) -> *const f32 {
        self.lines.lines_ptr()
    }

    pub fn line_count(&self) -> u32 {
        self.lines.line_count()
    }

    pub fn frame(&self) -> u64 {
        self.state.frame()
    }

    pub fn particle_count(&self) -> u32 {
        self.state.grid().len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn runner_400() -> FieldRunner {
        let config = FieldConfig {
            spacing: 20.0,
            ..FieldConfig::default()
        };
        FieldRunner::new(config, 400.0, 400.0)
    }

    #[test]
    fn queued_input_waits_for_next_tick() {
        let mut runner = runner_400();
        runner.push_input(InputEvent::PointerMove { x: 0.0, y: 0.0 });
        assert_eq!(runner.state().focal().position, Vec2::new(200.0, 200.0));
        assert_eq!(runner.pending_input(), 1);

        runner.tick_buffered();
        assert_eq!(runner.pending_input(), 0);
        assert_eq!(runner.state().focal().position, Vec2::ZERO);
        assert_eq!(runner.state().grid().get(0).map(|p| p.alpha), Some(1.0));
    }

    #[test]
    fn events_apply_in_arrival_order() {
        let mut runner = runner_400();
        runner.push_input(InputEvent::Resize { width: 200.0, height: 100.0 });
        runner.push_input(InputEvent::PointerMove { x: 7.0, y: 8.0 });
        runner.push_input(InputEvent::PointerMove { x: 9.0, y: 10.0 });
        runner.tick_buffered();

        assert_eq!(runner.particle_count(), 10 * 5);
        assert_eq!(runner.state().focal().position, Vec2::new(9.0, 10.0));
        assert_eq!(runner.lines().size(), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn resize_keeps_frame_counter() {
        let mut runner = runner_400();
        runner.tick_buffered();
        runner.tick_buffered();
        runner.push_input(InputEvent::Resize { width: 800.0, height: 600.0 });
        runner.tick_buffered();
        assert_eq!(runner.frame(), 3);
        assert_eq!(runner.particle_count(), 40 * 30);
    }

    #[test]
    fn buffered_tick_exports_visible_lines() {
        let mut runner = runner_400();
        runner.tick_buffered();
        // Focal point starts at the center, so the middle of the grid lights up.
        let visible = runner.state().grid().iter().filter(|p| p.is_visible()).count();
        assert!(visible > 0);
        assert_eq!(runner.line_count() as usize, visible);
        assert_eq!(runner.lines().as_floats().len(), visible * 6);
    }

    #[test]
    fn tick_draws_onto_any_surface() {
        let mut runner = runner_400();
        let mut surface = LineBuffer::new();
        runner.tick(&mut surface);
        assert_eq!(runner.frame(), 1);
        assert!(surface.line_count() > 0);
        // The export buffer is untouched by a direct-surface tick.
        assert_eq!(runner.line_count(), 0);
    }
}

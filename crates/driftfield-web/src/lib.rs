pub mod runner;
pub mod canvas;
mod animation;

pub use canvas::CanvasSurface;
pub use runner::FieldRunner;

use std::cell::RefCell;

use driftfield::{FieldConfig, InputEvent, LineInstance, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

thread_local! {
    static RUNNER: RefCell<Option<FieldRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the installed runner. Returns `None` before
/// `field_start` / `field_init` has been called.
pub(crate) fn with_runner<R>(f: impl FnOnce(&mut FieldRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn install_runner(runner: FieldRunner) {
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
}

fn remove_runner() {
    let previous = RUNNER.with(|cell| cell.borrow_mut().take());
    drop(previous);
}

/// Install `runner` if the browser wiring for it succeeded. On failure the
/// half-built setup is retired and no runner is left behind.
fn commit_start<E>(runner: FieldRunner, wiring: Result<(), E>) -> Result<(), E> {
    match wiring {
        Ok(()) => {
            install_runner(runner);
            Ok(())
        }
        Err(err) => {
            animation::teardown();
            remove_runner();
            Err(err)
        }
    }
}

/// Replace whatever is running with a runner JS drives frame by frame.
fn install_headless(runner: FieldRunner) {
    animation::teardown();
    install_runner(runner);
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialised on a second start; keep the existing logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

fn parse_config(config_json: Option<String>) -> FieldConfig {
    match config_json {
        Some(json) => FieldConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("invalid field config ({}); using defaults", err);
            FieldConfig::default()
        }),
        None => FieldConfig::default(),
    }
}

/// Start the effect on `<canvas id=canvas_id>`: size it to the window, wire
/// pointer and resize listeners, and run the animation-frame loop.
#[wasm_bindgen]
pub fn field_start(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    init_logging();

    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("window has no document")?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{canvas_id}'")))?
        .dyn_into::<HtmlCanvasElement>()?;

    let size = canvas::fit_to_window(&canvas, &window)?;
    let surface = CanvasSurface::new(&canvas)?;
    let runner = FieldRunner::new(parse_config(config_json), size.x, size.y);

    log::info!("driftfield: starting on #{} ({})", canvas_id, surface.backend());

    let generation = animation::begin_generation();
    let wiring = animation::listen(&window, &canvas, generation)
        .and_then(|()| animation::start_loop(window, canvas, surface, generation));
    commit_start(runner, wiring)
}

/// Headless setup for hosts that schedule frames and draw in JS.
/// Pair with `field_tick` and the line-buffer accessors.
#[wasm_bindgen]
pub fn field_init(width: f32, height: f32, config_json: Option<String>) {
    init_logging();
    install_headless(FieldRunner::new(parse_config(config_json), width, height));
    log::info!("driftfield: initialized headless");
}

/// Run one tick into the line buffer.
#[wasm_bindgen]
pub fn field_tick() {
    with_runner(|r| r.tick_buffered());
}

#[wasm_bindgen]
pub fn field_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn field_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_lines_ptr() -> *const f32 {
    with_runner(|r| r.lines_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_line_count() -> u32 {
    with_runner(|r| r.line_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_line_floats() -> u32 {
    LineInstance::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_frame() -> f64 {
    with_runner(|r| r.frame() as f64).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.particle_count()).unwrap_or(0)
}

/// CSS color of the background fill, for JS renderers.
#[wasm_bindgen]
pub fn get_background_css() -> String {
    with_runner(|r| r.state().config().background.css()).unwrap_or_default()
}

/// CSS color strokes use before per-line alpha is applied.
#[wasm_bindgen]
pub fn get_stroke_css() -> String {
    with_runner(|r| r.state().config().stroke.css()).unwrap_or_default()
}

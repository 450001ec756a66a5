//! Browser wiring: DOM listeners that enqueue input, and the
//! `requestAnimationFrame` loop that ticks the runner.
//!
//! Only one setup is live at a time. `begin_generation` retires the previous
//! one: its listeners are removed and its frame loop stops on its next frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use driftfield::InputEvent;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::canvas::{fit_to_window, CanvasSurface};
use crate::with_runner;

/// The animation-frame closure, stored so it can reschedule itself.
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The window listeners of the live setup. Dropping it unregisters them.
struct Listeners {
    window: Window,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_resize: Closure<dyn FnMut()>,
}

impl Drop for Listeners {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}

thread_local! {
    /// Bumped for every new setup; loops and listeners from an older value stop.
    static GENERATION: Cell<u32> = const { Cell::new(0) };
    static LISTENERS: RefCell<Option<Listeners>> = const { RefCell::new(None) };
}

/// Retire the current setup and return the generation for the next one.
pub fn begin_generation() -> u32 {
    // Take first, drop after the borrow ends.
    let previous = LISTENERS.with(|slot| slot.borrow_mut().take());
    drop(previous);
    GENERATION.with(|g| {
        let next = g.get().wrapping_add(1);
        g.set(next);
        next
    })
}

/// Retire the current setup without starting another.
pub fn teardown() {
    begin_generation();
}

pub fn is_current(generation: u32) -> bool {
    GENERATION.with(|g| g.get()) == generation
}

/// Register the `mousemove` and `resize` listeners for `generation`.
///
/// Mouse moves enqueue a `PointerMove` in canvas-local coordinates; window
/// resizes refit the canvas and enqueue a `Resize`.
pub fn listen(window: &Window, canvas: &HtmlCanvasElement, generation: u32) -> Result<(), JsValue> {
    let move_canvas = canvas.clone();
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        if !is_current(generation) {
            return;
        }
        let rect = move_canvas.get_bounding_client_rect();
        let x = (event.client_x() as f64 - rect.left()) as f32;
        let y = (event.client_y() as f64 - rect.top()) as f32;
        with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
    }) as Box<dyn FnMut(_)>);

    let resize_canvas = canvas.clone();
    let resize_window = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        if !is_current(generation) {
            return;
        }
        match fit_to_window(&resize_canvas, &resize_window) {
            Ok(size) => {
                with_runner(|r| {
                    r.push_input(InputEvent::Resize {
                        width: size.x,
                        height: size.y,
                    })
                });
            }
            Err(err) => log::warn!("resize ignored: {:?}", err),
        }
    }) as Box<dyn FnMut()>);

    // Stored before registering so a failed registration is undone on drop.
    let listeners = Listeners {
        window: window.clone(),
        on_move,
        on_resize,
    };
    let registered = window
        .add_event_listener_with_callback("mousemove", listeners.on_move.as_ref().unchecked_ref())
        .and_then(|()| {
            window.add_event_listener_with_callback(
                "resize",
                listeners.on_resize.as_ref().unchecked_ref(),
            )
        });
    match registered {
        Ok(()) => {
            LISTENERS.with(|slot| *slot.borrow_mut() = Some(listeners));
            Ok(())
        }
        Err(err) => {
            drop(listeners);
            Err(err)
        }
    }
}

/// Start the self-rescheduling frame loop for `generation`.
///
/// Each animation frame runs one tick onto the canvas, then requests the
/// next frame. The loop ends when the canvas is removed from the document
/// or the generation is retired.
pub fn start_loop(
    window: Window,
    canvas: HtmlCanvasElement,
    mut surface: CanvasSurface,
    generation: u32,
) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let reschedule = callback.clone();
    let win = window.clone();

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !canvas.is_connected() {
            log::info!("canvas detached; animation loop stopped");
            return;
        }
        if !is_current(generation) {
            log::debug!("animation loop {} superseded", generation);
            return;
        }

        with_runner(|r| r.tick(&mut surface));

        if let Err(err) = request_frame(&win, &reschedule) {
            log::error!("requestAnimationFrame failed: {:?}", err);
        }
    }) as Box<dyn FnMut()>));

    request_frame(&window, &callback)
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<(), JsValue> {
    let borrow = callback.borrow();
    let closure = borrow.as_ref().ok_or("animation callback missing")?;
    let function: &js_sys::Function = closure.as_ref().unchecked_ref();
    window.request_animation_frame(function)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generation_retires_the_previous_one() {
        let first = begin_generation();
        assert!(is_current(first));

        let second = begin_generation();
        assert!(!is_current(first));
        assert!(is_current(second));
    }

    #[test]
    fn teardown_retires_without_replacement() {
        let generation = begin_generation();
        teardown();
        assert!(!is_current(generation));
        assert!(LISTENERS.with(|slot| slot.borrow().is_none()));
    }
}

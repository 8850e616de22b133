use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::components::visibility::use_visible_once;
use crate::counter::{CounterMachine, DEFAULT_DURATION_MS};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Repeated `requestAnimationFrame` loop. Keeps going while the callback
/// returns `true`; dropping it cancels the pending frame.
pub struct FrameLoop {
    window: Window,
    handle: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let handle = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next_window = window.clone();
        let next_handle = handle.clone();
        let next_callback = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            next_handle.set(None);
            if !on_frame(now) {
                return;
            }
            if let Some(cb) = next_callback.borrow().as_ref() {
                next_handle.set(next_window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));

        let first = callback
            .borrow()
            .as_ref()
            .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        handle.set(first);

        Some(Self {
            window,
            handle,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // breaks the closure's reference to itself
        self.callback.borrow_mut().take();
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u32,
    #[prop_or(DEFAULT_DURATION_MS as u32)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Counts up from 0 to `target` once, the first time it scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_visible_once(node.clone());
    let value = use_state_eq(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(visible, target, duration_ms): &(bool, u32, u32)| {
                let mut frames = None;
                if *visible {
                    let mut machine = CounterMachine::new(*target, f64::from(*duration_ms));
                    if machine.trigger() {
                        frames = FrameLoop::start(move |now| {
                            let more = machine.frame(now);
                            value.set(machine.value());
                            more
                        });
                    } else {
                        value.set(machine.value());
                    }
                }
                move || drop(frames)
            },
            (visible, props.target, props.duration_ms),
        );
    }

    html! {
        <span ref={node} class="animated-counter">
            { *value }{ props.suffix.clone() }
        </span>
    }
}

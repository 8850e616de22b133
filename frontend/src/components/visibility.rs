use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Watches one element and fires `on_visible` the first time it intersects
/// the viewport. Disconnects on drop.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    pub fn once(element: &Element, on_visible: impl FnOnce() + 'static) -> Option<Self> {
        let mut on_visible = Some(on_visible);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if intersecting {
                if let Some(fire) = on_visible.take() {
                    fire();
                }
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Latches to `true` once the referenced element has been on screen.
#[hook]
pub fn use_visible_once(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = if *visible {
                    None
                } else {
                    node.cast::<Element>()
                        .and_then(|element| VisibilityWatch::once(&element, move || visible.set(true)))
                };
                move || drop(watch)
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger offset in milliseconds.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Fades its children up the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_visible_once(node.clone());

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", visible.then(|| "revealed"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

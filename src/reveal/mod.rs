//! Scroll reveals wired to the page: one shared controller, one scroll and
//! resize listener, and hooks for components to subscribe with.

pub mod controller;

pub use controller::{RevealController, RevealId, RevealOptions, RevealTarget, ScrubId, ScrubOptions, Viewport};

use std::cell::RefCell;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::{engine, Pose, Ticker};

/// A trigger element and the elements its group animates.
#[derive(Clone)]
pub struct DomTarget {
    trigger: HtmlElement,
    elements: Vec<HtmlElement>,
}

impl DomTarget {
    pub fn new(trigger: HtmlElement, elements: Vec<HtmlElement>) -> Self {
        Self { trigger, elements }
    }
}

/// Viewport top of an element from its `offsetTop` chain. Offsets ignore
/// CSS transforms, so a trigger that is itself animated is measured at its
/// resting position.
fn layout_top(offsets: impl IntoIterator<Item = i32>, scroll_y: f64) -> f64 {
    offsets.into_iter().map(f64::from).sum::<f64>() - scroll_y
}

impl RevealTarget for DomTarget {
    fn trigger_top(&self) -> Option<f64> {
        if !self.trigger.is_connected() {
            return None;
        }
        let scroll_y = web_sys::window()?.scroll_y().ok()?;
        let chain = std::iter::successors(Some(self.trigger.clone()), |element| {
            element.offset_parent().and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
        });
        Some(layout_top(chain.map(|element| element.offset_top()), scroll_y))
    }

    fn trigger_height(&self) -> f64 {
        f64::from(self.trigger.offset_height())
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn apply(&self, index: usize, pose: &Pose) {
        if let Some(element) = self.elements.get(index) {
            let style = element.style();
            let _ = style.set_property("transform", &pose.transform_css());
            let _ = style.set_property("opacity", &format!("{:.3}", pose.opacity));
        }
    }
}

thread_local! {
    static CONTROLLER: RefCell<RevealController<DomTarget>> = RefCell::new(RevealController::new());
    static LISTENER: RefCell<Option<Closure<dyn FnMut()>>> = RefCell::new(None);
}

fn viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    Some(Viewport {
        height: window.inner_height().ok()?.as_f64()?,
        scroll_y: window.scroll_y().ok()?,
    })
}

fn with_controller<R>(f: impl FnOnce(&mut RevealController<DomTarget>, &mut Ticker) -> R) -> Option<R> {
    CONTROLLER.with(|cell| {
        let Ok(mut controller) = cell.try_borrow_mut() else {
            warn!("Reveal controller busy");
            return None;
        };
        match engine::with_ticker(|ticker| f(&mut controller, ticker)) {
            Ok(result) => Some(result),
            Err(err) => {
                warn!("Reveal update skipped: {}", err);
                None
            }
        }
    })
}

/// Installs the page wide scroll and resize listener. Safe to call more
/// than once.
pub fn init() -> bool {
    if LISTENER.with(|listener| listener.borrow().is_some()) {
        debug!("Reveal listener already installed");
        return false;
    }
    let Some(window) = web_sys::window() else {
        warn!("No window, scroll reveals disabled");
        return false;
    };

    let callback = Closure::wrap(Box::new(refresh) as Box<dyn FnMut()>);
    for event in ["scroll", "resize"] {
        if let Err(err) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            warn!("Failed to listen for {}: {:?}", event, err);
        }
    }
    LISTENER.with(|listener| *listener.borrow_mut() = Some(callback));
    info!("Scroll reveals listening");
    true
}

/// Re-measures every trigger against the current viewport.
pub fn refresh() {
    let Some(viewport) = viewport() else {
        return;
    };
    if let Some(fired) = with_controller(|controller, ticker| controller.on_scroll(ticker, viewport)) {
        if !fired.is_empty() {
            debug!("{} reveal transitions", fired.len());
        }
    }
}

pub fn observe(target: DomTarget, options: RevealOptions) -> Option<RevealId> {
    let viewport = viewport()?;
    match with_controller(|controller, ticker| controller.observe(ticker, target, options, viewport))? {
        Ok(id) => Some(id),
        Err(err) => {
            warn!("Reveal not registered: {}", err);
            None
        }
    }
}

pub fn observe_scrub(target: DomTarget, options: ScrubOptions) -> Option<ScrubId> {
    let viewport = viewport()?;
    with_controller(|controller, ticker| controller.observe_scrub(ticker, target, options, viewport))
}

pub fn unsubscribe(id: RevealId) {
    CONTROLLER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut controller) => {
            controller.unsubscribe(id, engine::cancel_all);
        }
        Err(_) => warn!("Reveal controller busy, group {:?} stays registered", id),
    });
}

pub fn unsubscribe_scrub(id: ScrubId) {
    CONTROLLER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut controller) => {
            controller.unsubscribe_scrub(id, engine::cancel_all);
        }
        Err(_) => warn!("Reveal controller busy, scrub {:?} stays registered", id),
    });
}

fn dom_target(trigger: &NodeRef, targets: &[NodeRef]) -> Option<DomTarget> {
    let trigger = trigger.cast::<HtmlElement>()?;
    let elements = targets.iter().filter_map(|t| t.cast::<HtmlElement>()).collect();
    Some(DomTarget::new(trigger, elements))
}

/// Reveals `targets` when `trigger` scrolls past the activation line.
#[hook]
pub fn use_reveal(trigger: NodeRef, targets: Vec<NodeRef>, options: RevealOptions) {
    use_effect_with_deps(
        move |options| {
            let id = dom_target(&trigger, &targets).and_then(|target| observe(target, options.clone()));
            move || {
                if let Some(id) = id {
                    unsubscribe(id);
                }
            }
        },
        options,
    );
}

/// Ties `targets` to the scroll position of `trigger`.
#[hook]
pub fn use_scrub(trigger: NodeRef, targets: Vec<NodeRef>, options: ScrubOptions) {
    use_effect_with_deps(
        move |options| {
            let id = dom_target(&trigger, &targets).and_then(|target| observe_scrub(target, options.clone()));
            move || {
                if let Some(id) = id {
                    unsubscribe_scrub(id);
                }
            }
        },
        options,
    );
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub options: RevealOptions,
    /// Element whose position decides the reveal, the wrapper itself if unset.
    #[prop_or_default]
    pub trigger: Option<NodeRef>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a `div` that reveals itself on scroll.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let trigger = props.trigger.clone().unwrap_or_else(|| node.clone());
    use_reveal(trigger, vec![node.clone()], props.options.clone());

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={props.style.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}

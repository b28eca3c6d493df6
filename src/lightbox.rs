//! Navigable modal over a static collection.

use std::rc::Rc;

use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::icons::{Icon, IconSvg};

pub enum LightboxState<T: 'static> {
    Closed,
    Open { items: &'static [T], index: usize },
}

impl<T: 'static> Clone for LightboxState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for LightboxState<T> {}

/// Open/closed state plus the current index. While open, `index` always
/// points into `items`.
pub struct LightboxController<T: 'static> {
    state: LightboxState<T>,
}

impl<T: 'static> Default for LightboxController<T> {
    fn default() -> Self {
        Self { state: LightboxState::Closed }
    }
}

impl<T: 'static> Clone for LightboxController<T> {
    fn clone(&self) -> Self {
        Self { state: self.state }
    }
}

impl<T: 'static> LightboxController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens at `index`. Out of range indices leave the state untouched.
    pub fn open(&mut self, items: &'static [T], index: usize) -> bool {
        if index >= items.len() {
            debug!("Lightbox index {} out of range for {} items", index, items.len());
            return false;
        }
        self.state = LightboxState::Open { items, index };
        true
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    pub fn next(&mut self) {
        if let LightboxState::Open { items, index } = &mut self.state {
            *index = (*index + 1) % items.len();
        }
    }

    pub fn prev(&mut self) {
        if let LightboxState::Open { items, index } = &mut self.state {
            *index = (*index + items.len() - 1) % items.len();
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    #[cfg(test)]
    pub fn index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index, .. } => Some(index),
            LightboxState::Closed => None,
        }
    }

    pub fn current_item(&self) -> Option<&'static T> {
        match self.state {
            LightboxState::Open { items, index } => items.get(index),
            LightboxState::Closed => None,
        }
    }

    /// One based position and collection length.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self.state {
            LightboxState::Open { items, index } => Some((index + 1, items.len())),
            LightboxState::Closed => None,
        }
    }

    /// Counter shown under the photo, e.g. `"3 / 13"`.
    pub fn counter(&self) -> Option<String> {
        self.position().map(|(at, of)| format!("{} / {}", at, of))
    }

    pub fn has_navigation(&self) -> bool {
        matches!(self.state, LightboxState::Open { items, .. } if items.len() > 1)
    }
}

pub enum LightboxAction<T: 'static> {
    Open(&'static [T], usize),
    Close,
    Next,
    Prev,
}

impl<T: 'static> Reducible for LightboxController<T> {
    type Action = LightboxAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LightboxAction::Open(items, index) => {
                if !next.open(items, index) {
                    return self;
                }
            }
            LightboxAction::Close => next.close(),
            LightboxAction::Next => next.next(),
            LightboxAction::Prev => next.prev(),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    /// Heading over the photo, the moment category for example.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    #[prop_or_default]
    pub counter: Option<AttrValue>,
    #[prop_or(true)]
    pub navigation: bool,
    pub on_close: Callback<()>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

/// Full screen dialog. Escape closes, arrow keys navigate, clicking the
/// backdrop closes.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    {
        let on_close = props.on_close.clone();
        let on_prev = props.on_prev.clone();
        let on_next = props.on_next.clone();
        let navigation = props.navigation;
        use_event_with_window("keydown", move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" => on_close.emit(()),
            "ArrowLeft" if navigation => on_prev.emit(()),
            "ArrowRight" if navigation => on_next.emit(()),
            _ => {}
        });
    }

    let backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let nav_button = |class: &'static str, icon: Icon, cb: &Callback<()>| {
        let cb = cb.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        });
        html! {
            <button class={classes!("lightbox-nav", class)} {onclick}>
                <IconSvg icon={icon} class={classes!("icon-lg")} />
            </button>
        }
    };

    html! {
        <div class="lightbox-backdrop" role="dialog" aria-modal="true" onclick={backdrop}>
            <button class="lightbox-close" onclick={close}>
                <IconSvg icon={Icon::Close} class={classes!("icon-md")} />
            </button>
            if let Some(title) = props.title.clone() {
                <h3 class="font-script lightbox-heading">{ title }</h3>
            }
            if props.navigation {
                <>
                    { nav_button("lightbox-prev", Icon::ChevronLeft, &props.on_prev) }
                    { nav_button("lightbox-next", Icon::ChevronRight, &props.on_next) }
                </>
            }
            <img class="lightbox-image" src={props.src.clone()} alt={props.alt.clone()} onclick={stop} />
            <div class="lightbox-caption">
                if let Some(caption) = props.caption.clone() {
                    <p class="font-script lightbox-title">{ caption }</p>
                }
                if let Some(counter) = props.counter.clone() {
                    <p class="lightbox-counter">{ counter }</p>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static THIRTEEN: [u32; 13] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    static ONE: [u32; 1] = [7];
    static NONE: [u32; 0] = [];

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut lightbox = LightboxController::new();
        assert!(lightbox.open(&THIRTEEN, 0));
        lightbox.prev();
        assert_eq!(lightbox.index(), Some(12));
        assert_eq!(lightbox.current_item(), Some(&12));
        assert_eq!(lightbox.counter().as_deref(), Some("13 / 13"));
    }

    #[test]
    fn next_cycles_back_to_start() {
        for start in [0, 5, 12] {
            let mut lightbox = LightboxController::new();
            lightbox.open(&THIRTEEN, start);
            for _ in 0..THIRTEEN.len() {
                lightbox.next();
            }
            assert_eq!(lightbox.index(), Some(start));
        }
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut lightbox = LightboxController::new();
        assert!(!lightbox.open(&THIRTEEN, 13));
        assert!(!lightbox.is_open());
        assert!(!lightbox.open(&NONE, 0));

        lightbox.open(&THIRTEEN, 4);
        assert!(!lightbox.open(&THIRTEEN, 40));
        assert_eq!(lightbox.index(), Some(4));
    }

    #[test]
    fn single_item_navigation_stays_put() {
        let mut lightbox = LightboxController::new();
        lightbox.open(&ONE, 0);
        lightbox.next();
        lightbox.prev();
        assert_eq!(lightbox.current_item(), Some(&7));
        assert!(!lightbox.has_navigation());
    }

    #[test]
    fn closed_ignores_navigation() {
        let mut lightbox: LightboxController<u32> = LightboxController::new();
        lightbox.next();
        lightbox.prev();
        assert_eq!(lightbox.current_item(), None);
        assert_eq!(lightbox.position(), None);

        lightbox.open(&THIRTEEN, 2);
        lightbox.close();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(LightboxController::<u32>::new());
        let state = state.reduce(LightboxAction::Open(&THIRTEEN, 0));
        let state = state.reduce(LightboxAction::Prev);
        assert_eq!(state.position(), Some((13, 13)));
        let state = state.reduce(LightboxAction::Next);
        assert_eq!(state.index(), Some(0));
        let state = state.reduce(LightboxAction::Close);
        assert!(!state.is_open());
    }
}

pub mod petals;
pub mod sequencer;

pub use sequencer::{FlowerPart, PreLoaderSequencer, PreLoaderTiming, PreLoaderView};

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, SvgElement};
use yew::prelude::*;

use crate::animation::{engine, Pose};
use crate::config;
use crate::effects::dom::DomHost;
use crate::icons::HEART_PATH;
use petals::PetalShower;

fn class_name(part: FlowerPart) -> &'static str {
    match part {
        FlowerPart::Stem => "flower-stem",
        FlowerPart::Leaf => "flower-leaf",
        FlowerPart::Petal => "flower-petal",
        FlowerPart::Centre => "flower-center",
    }
}

#[derive(Clone)]
struct DomPreLoader {
    overlay: Option<HtmlElement>,
    parts: Rc<Vec<(FlowerPart, Vec<SvgElement>)>>,
    progress: UseStateSetter<u8>,
}

impl DomPreLoader {
    fn new(overlay: Option<HtmlElement>, flower: Option<Element>, progress: UseStateSetter<u8>) -> Self {
        let parts = FlowerPart::ALL
            .into_iter()
            .map(|part| {
                let elements = flower
                    .as_ref()
                    .map(|flower| {
                        let found = flower.get_elements_by_class_name(class_name(part));
                        (0..found.length())
                            .filter_map(|i| found.item(i))
                            .filter_map(|el| el.dyn_into::<SvgElement>().ok())
                            .collect()
                    })
                    .unwrap_or_default();
                (part, elements)
            })
            .collect();
        Self { overlay, parts: Rc::new(parts), progress }
    }
}

impl PreLoaderView for DomPreLoader {
    fn pose(&self, part: FlowerPart, index: usize, pose: &Pose) {
        let element = self
            .parts
            .iter()
            .find(|(p, _)| *p == part)
            .and_then(|(_, elements)| elements.get(index));
        if let Some(element) = element {
            let style = element.style();
            let _ = style.set_property("transform", &pose.transform_css());
            let _ = style.set_property("opacity", &format!("{:.3}", pose.opacity));
        }
    }

    fn progress(&self, percent: u8) {
        self.progress.set(percent);
    }

    fn fade(&self, opacity: f64) {
        if let Some(overlay) = &self.overlay {
            let _ = overlay.style().set_property("opacity", &format!("{:.3}", opacity));
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PreLoaderProps {
    pub on_complete: Callback<()>,
}

/// Full screen intro shown until the flower has bloomed and the counter
/// reached 100%.
#[function_component(PreLoader)]
pub fn pre_loader(props: &PreLoaderProps) -> Html {
    let overlay_ref = use_node_ref();
    let flower_ref = use_node_ref();
    let progress = use_state(|| 0u8);

    {
        let overlay_ref = overlay_ref.clone();
        let flower_ref = flower_ref.clone();
        let setter = progress.setter();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let view = DomPreLoader::new(overlay_ref.cast::<HtmlElement>(), flower_ref.cast::<Element>(), setter);
                let mut sequencer = PreLoaderSequencer::new(PreLoaderTiming::default());
                let done = on_complete.clone();
                match engine::with_ticker(|ticker| sequencer.start(ticker, view, move || done.emit(()))) {
                    Ok(()) => info!("Preloader started"),
                    Err(err) => {
                        warn!("Preloader could not start, skipping: {}", err);
                        on_complete.emit(());
                    }
                }

                let shower = Rc::new(RefCell::new(PetalShower::new(
                    DomHost::new(overlay_ref.cast::<Element>()),
                    SmallRng::from_entropy(),
                )));
                let timers: Vec<Timeout> = (0..config::PETAL_COUNT)
                    .map(|index| {
                        let shower = shower.clone();
                        Timeout::new(index as u32 * config::PETAL_INTERVAL_MS, move || {
                            match engine::with_ticker(|ticker| shower.borrow_mut().drop_petal(ticker, index)) {
                                Ok(Ok(_)) => {}
                                Ok(Err(err)) => debug!("Petal {} skipped: {}", index, err),
                                Err(err) => debug!("Petal {} skipped: {}", index, err),
                            }
                        })
                    })
                    .collect();

                move || {
                    drop(timers);
                    sequencer.cancel(engine::cancel_all);
                    shower.borrow_mut().teardown(engine::cancel_all);
                }
            },
            (),
        );
    }

    let percent = *progress;

    html! {
        <div ref={overlay_ref} class="preloader">
            <div class="preloader-initials">
                <span class="font-script">{"J"}</span>
                <span class="font-script preloader-initial-second">{"C"}</span>
            </div>

            <svg ref={flower_ref} class="preloader-flower" viewBox="0 0 200 300">
                <path class="flower-stem" d="M100 300 Q100 200 100 150" stroke="#228B22" stroke-width="6" fill="none" stroke-linecap="round" />
                <g class="flower-leaf"><ellipse cx="70" cy="220" rx="25" ry="12" fill="#32CD32" transform="rotate(-30 70 220)" /></g>
                <g class="flower-leaf"><ellipse cx="130" cy="200" rx="25" ry="12" fill="#32CD32" transform="rotate(30 130 200)" /></g>
                <g class="flower-petal"><ellipse cx="100" cy="80" rx="25" ry="40" fill="#FF69B4" /></g>
                <g class="flower-petal"><ellipse cx="70" cy="100" rx="25" ry="40" fill="#FFB6C1" transform="rotate(-60 70 100)" /></g>
                <g class="flower-petal"><ellipse cx="130" cy="100" rx="25" ry="40" fill="#FF1493" transform="rotate(60 130 100)" /></g>
                <g class="flower-petal"><ellipse cx="60" cy="130" rx="25" ry="40" fill="#FFC0CB" transform="rotate(-120 60 130)" /></g>
                <g class="flower-petal"><ellipse cx="140" cy="130" rx="25" ry="40" fill="#FF69B4" transform="rotate(120 140 130)" /></g>
                <g class="flower-petal"><ellipse cx="100" cy="150" rx="25" ry="40" fill="#FFB6C1" transform="rotate(180 100 150)" /></g>
                <circle class="flower-center" cx="100" cy="115" r="20" fill="#FFD700" />
                <circle class="flower-center" cx="100" cy="115" r="15" fill="#FFA500" />
            </svg>

            <div class="preloader-text">
                <p class="font-script">{"Carregando nosso amor..."}</p>
                <span class="preloader-percent">{ format!("{}%", percent) }</span>
            </div>

            <div class="preloader-bar">
                <div class="preloader-bar-fill" style={format!("width: {}%;", percent)}></div>
            </div>

            <div class="preloader-hearts">
                { for (0..3).map(|i| html! {
                    <svg
                        key={i}
                        viewBox="0 0 24 24"
                        class="animate-heart-beat"
                        style={format!(
                            "fill: {}; animation-delay: {:.1}s;",
                            if i == 1 { "#FF69B4" } else { "#FFB6C1" },
                            i as f64 * 0.2
                        )}
                    >
                        <path d={HEART_PATH} />
                    </svg>
                }) }
            </div>
        </div>
    }
}

use std::cell::Cell;

use log::{debug, warn};
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use super::{typewriter_prefix, HeartDivider};
use crate::animation::{engine, Ease, Pose, Repeat, Tween};
use crate::config;
use crate::effects::{FloatingHearts, StarField};
use crate::icons::{Icon, IconSvg};
use crate::reveal::{use_scrub, Reveal, RevealOptions, ScrubOptions};

const TITLE: &str = "Nossa História de Amor";
const BOUNCE_PX: f64 = 10.0;

/// Intro animations play as soon as the hero mounts, since it starts on
/// screen.
fn intro(hidden: Pose, duration: f64, delay: f64, ease: Ease) -> RevealOptions {
    RevealOptions::default()
        .start(1.0)
        .once()
        .hidden(hidden)
        .duration(duration)
        .delay(delay)
        .ease(ease)
}

fn parallax(y: f64) -> ScrubOptions {
    ScrubOptions {
        start: 0.0,
        end: 0.0,
        from: Pose::REST,
        to: Pose { y, ..Pose::REST },
        lag: 1.0,
    }
}

fn scroll_to_history() {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("historia"))
    else {
        warn!("History section not found");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let section_ref = use_node_ref();
    let title_ref = use_node_ref();
    let title_layer = use_node_ref();
    let subtitle_layer = use_node_ref();
    let bounce_ref = use_node_ref();

    use_scrub(section_ref.clone(), vec![title_layer.clone()], parallax(100.0));
    use_scrub(section_ref.clone(), vec![subtitle_layer.clone()], parallax(50.0));

    {
        let title_ref = title_ref.clone();
        let bounce_ref = bounce_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut ids = Vec::new();

                if let Some(title) = title_ref.cast::<HtmlElement>() {
                    title.set_text_content(Some(""));
                    let shown = Cell::new(0usize);
                    let chars = TITLE.chars().count();
                    let writer = title.clone();
                    let typewriter = Tween::new(chars as f64 * config::TYPEWRITER_SECS_PER_CHAR).on_update(move |v| {
                        let prefix = typewriter_prefix(TITLE, v);
                        if shown.replace(prefix.len()) != prefix.len() {
                            writer.set_text_content(Some(prefix));
                        }
                    });
                    match engine::spawn(typewriter) {
                        Ok(id) => ids.push(id),
                        Err(err) => {
                            warn!("Typewriter skipped: {}", err);
                            title.set_text_content(Some(TITLE));
                        }
                    }
                }

                if let Some(indicator) = bounce_ref.cast::<HtmlElement>() {
                    let bounce = Tween::new(1.4)
                        .repeat(Repeat::Forever)
                        .yoyo(true)
                        .ease(Ease::Power1InOut)
                        .on_update(move |v| {
                            let pose = Pose { y: v * BOUNCE_PX, ..Pose::REST };
                            let _ = indicator.style().set_property("transform", &pose.transform_css());
                        });
                    ids.extend(engine::spawn(bounce).ok());
                }
                debug!("Hero intro running {} tweens", ids.len());

                move || engine::cancel_all(ids)
            },
            (),
        );
    }

    let on_indicator = Callback::from(|_: MouseEvent| scroll_to_history());

    html! {
        <section ref={section_ref} id="inicio" class="section-fullscreen hero">
            <FloatingHearts
                count={config::HERO_HEART_COUNT}
                min_size={config::HERO_HEART_SIZE.0}
                max_size={config::HERO_HEART_SIZE.1}
                speed={1.0}
            />
            <StarField count={config::HERO_STAR_COUNT} color="#FFD700" />

            <div class="blob blob-pink" style="top: 5rem; left: 2.5rem; width: 8rem; height: 8rem;"></div>
            <div class="blob blob-deep" style="bottom: 5rem; right: 2.5rem; width: 12rem; height: 12rem;"></div>
            <div class="blob blob-gold" style="top: 50%; left: 25%; width: 6rem; height: 6rem;"></div>

            <div class="hero-content">
                <Reveal
                    class={classes!("hero-initials")}
                    options={intro(Pose::hidden().with_scale(0.5), 1.2, 2.0, Ease::ELASTIC)}
                >
                    <span class="font-script">{"Otávio"}</span>
                    <IconSvg icon={Icon::Heart} class={classes!("icon-xl", "text-deep", "animate-heart-beat")} />
                    <span class="font-script">{"Camilla"}</span>
                </Reveal>

                <div ref={title_layer}>
                    <h1 ref={title_ref} class="font-script text-gradient-romantic hero-title" aria-label={TITLE}></h1>
                </div>

                <div ref={subtitle_layer}>
                    <Reveal options={intro(Pose::offset(0.0, 30.0), 1.0, 1.5, Ease::Power2Out)}>
                        <p class="font-display hero-subtitle">
                            {"\"Cada momento ao seu lado é um capítulo inesquecível\""}
                        </p>
                    </Reveal>
                </div>

                <HeartDivider />
                <p class="hero-tagline">{"Para sempre juntos 💕"}</p>
            </div>

            <Reveal
                class={classes!("scroll-indicator")}
                options={intro(Pose::offset(0.0, -20.0), 0.8, 2.5, Ease::Power2Out)}
                onclick={on_indicator}
            >
                <div ref={bounce_ref} class="scroll-indicator-inner">
                    <span>{"Role para explorar"}</span>
                    <IconSvg icon={Icon::ChevronDown} class={classes!("icon-md", "text-deep")} />
                </div>
            </Reveal>
        </section>
    }
}

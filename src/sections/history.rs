use yew::prelude::*;

use super::SectionTitle;
use crate::animation::{Ease, Pose};
use crate::content::{TimelineEvent, TIMELINE};
use crate::icons::IconSvg;
use crate::reveal::{use_reveal, use_scrub, RevealOptions, ScrubOptions};

const CARD_SHIFT_PX: f64 = 80.0;

#[derive(Properties, PartialEq)]
struct TimelineCardProps {
    index: usize,
    event: &'static TimelineEvent,
}

#[function_component(TimelineCard)]
fn timeline_card(props: &TimelineCardProps) -> Html {
    let card = use_node_ref();
    let icon = use_node_ref();
    let left = props.index % 2 == 0;
    let delay = props.index as f64 * 0.1;

    use_reveal(
        card.clone(),
        vec![card.clone()],
        RevealOptions::default()
            .hidden(Pose::offset(if left { -CARD_SHIFT_PX } else { CARD_SHIFT_PX }, 0.0))
            .duration(0.8)
            .delay(delay),
    );
    use_reveal(
        card.clone(),
        vec![icon.clone()],
        RevealOptions::default()
            .hidden(Pose::REST.with_scale(0.0))
            .duration(0.5)
            .delay(delay + 0.3)
            .ease(Ease::ELASTIC),
    );

    let event = props.event;
    html! {
        <div ref={card} class={classes!("timeline-card", if left { "timeline-left" } else { "timeline-right" })}>
            <div class="timeline-content">
                <div class="glass-romantic timeline-box">
                    <span class="font-display timeline-date">{ event.date }</span>
                    <h3 class="font-script">{ event.title }</h3>
                    <p>{ event.description }</p>
                </div>
            </div>
            <div ref={icon} class="timeline-icon">
                <IconSvg icon={event.icon} class={classes!("icon-md")} />
            </div>
            <div class="timeline-spacer"></div>
        </div>
    }
}

#[function_component(HistorySection)]
pub fn history_section() -> Html {
    let timeline = use_node_ref();
    let line = use_node_ref();

    use_scrub(
        timeline.clone(),
        vec![line.clone()],
        ScrubOptions {
            start: 0.7,
            end: 0.3,
            from: Pose { scale_y: 0.0, ..Pose::REST },
            to: Pose::REST,
            lag: 1.0,
        },
    );

    html! {
        <section id="historia" class="section-fullscreen history">
            <div class="blob blob-pink" style="top: 5rem; right: 2.5rem; width: 16rem; height: 16rem;"></div>
            <div class="blob blob-deep" style="bottom: 10rem; left: 2.5rem; width: 12rem; height: 12rem;"></div>

            <div class="container">
                <SectionTitle title="Nossa História" />

                <div ref={timeline} class="timeline">
                    <div ref={line} class="timeline-line"></div>
                    <div class="timeline-line-mobile"></div>
                    <div class="timeline-events">
                        { for TIMELINE.iter().enumerate().map(|(index, event)| html! {
                            <TimelineCard key={index} {index} {event} />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

use yew::prelude::*;

use super::SectionTitle;
use crate::animation::{Ease, Pose};
use crate::content::{dream_progress, Dream, DREAMS};
use crate::icons::{Icon, IconSvg};
use crate::reveal::{use_reveal, RevealOptions};

#[derive(Properties, PartialEq)]
struct DreamItemProps {
    index: usize,
    dream: &'static Dream,
}

#[function_component(DreamItem)]
fn dream_item(props: &DreamItemProps) -> Html {
    let item = use_node_ref();
    let checkbox = use_node_ref();
    let delay = props.index as f64 * 0.08;
    let shift = if props.index % 2 == 0 { -50.0 } else { 50.0 };

    use_reveal(
        item.clone(),
        vec![item.clone()],
        RevealOptions::default()
            .start(0.9)
            .hidden(Pose::offset(shift, 0.0))
            .duration(0.6)
            .delay(delay),
    );
    use_reveal(
        item.clone(),
        vec![checkbox.clone()],
        RevealOptions::default()
            .start(0.9)
            .hidden(Pose::REST.with_scale(0.0))
            .duration(0.4)
            .delay(delay + 0.3)
            .ease(Ease::BACK),
    );

    let dream = props.dream;
    let done = dream.completed;
    html! {
        <div ref={item} class={classes!("dream-item", done.then_some("dream-done"))}>
            <div ref={checkbox} class="dream-checkbox">
                if done {
                    <IconSvg icon={Icon::Check} class={classes!("icon-sm")} />
                }
            </div>
            <div class="dream-icon">
                <IconSvg icon={dream.icon} class={classes!("icon-sm")} />
            </div>
            <span class="dream-text">{ dream.text }</span>
            if done {
                <IconSvg icon={Icon::Heart} class={classes!("icon-xs", "text-deep", "animate-heart-beat", "dream-heart")} />
            }
        </div>
    }
}

#[function_component(DreamsSection)]
pub fn dreams_section() -> Html {
    let bar = use_node_ref();
    let (completed, total, percent) = dream_progress(&DREAMS);

    use_reveal(
        bar.clone(),
        vec![bar.clone()],
        RevealOptions::default()
            .start(0.85)
            .hidden(Pose { scale_x: 0.0, ..Pose::REST })
            .duration(1.5),
    );

    html! {
        <section id="sonhos" class="section-fullscreen dreams">
            <div class="blob blob-pink" style="top: 5rem; left: 5rem; width: 16rem; height: 16rem;"></div>
            <div class="blob blob-deep" style="bottom: 5rem; right: 5rem; width: 18rem; height: 18rem;"></div>
            <div class="blob blob-gold" style="top: 50%; left: 33%; width: 12rem; height: 12rem;"></div>

            <div class="container">
                <SectionTitle title="Nossos Sonhos" subtitle="Cada sonho é uma promessa de futuro" />

                <div class="dream-progress">
                    <div class="dream-progress-head">
                        <span>{"Nosso progresso"}</span>
                        <span class="font-script">{ format!("{}%", percent) }</span>
                    </div>
                    <div class="dream-progress-track">
                        <div ref={bar} class="dream-progress-fill" style={format!("width: {}%;", percent)}></div>
                    </div>
                    <p class="font-display">{ format!("{} de {} sonhos realizados", completed, total) }</p>
                </div>

                <div class="dream-list">
                    { for DREAMS.iter().enumerate().map(|(index, dream)| html! {
                        <DreamItem key={index} {index} {dream} />
                    }) }
                </div>

                <div class="glass-romantic dream-quote">
                    <p class="font-script">{"\"Juntos, podemos conquistar o mundo\""}</p>
                    <div class="dream-signature">
                        <IconSvg icon={Icon::Heart} class={classes!("icon-xs", "text-deep")} />
                        <span>{"Otávio & Camilla"}</span>
                        <IconSvg icon={Icon::Heart} class={classes!("icon-xs", "text-deep")} />
                    </div>
                </div>
            </div>
        </section>
    }
}

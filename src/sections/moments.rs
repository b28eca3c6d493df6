use yew::prelude::*;

use super::SectionTitle;
use crate::animation::{Ease, Pose};
use crate::content::{MomentCategory, Photo, MOMENTS};
use crate::icons::{Icon, IconSvg};
use crate::lightbox::{Lightbox, LightboxAction, LightboxController};
use crate::reveal::{use_reveal, RevealOptions};

#[derive(Properties, PartialEq)]
struct MomentCardProps {
    index: usize,
    category: &'static MomentCategory,
    on_open: Callback<usize>,
}

#[function_component(MomentCard)]
fn moment_card(props: &MomentCardProps) -> Html {
    let card = use_node_ref();
    let icon = use_node_ref();
    let delay = props.index as f64 * 0.15;

    use_reveal(
        card.clone(),
        vec![card.clone()],
        RevealOptions::default()
            .start(0.85)
            .hidden(Pose { rotate_y: -90.0, opacity: 0.0, ..Pose::REST })
            .duration(0.8)
            .delay(delay),
    );
    // one full turn, ending where it started
    use_reveal(
        card.clone(),
        vec![icon.clone()],
        RevealOptions::default()
            .hidden(Pose { rotation: -360.0, ..Pose::REST })
            .duration(1.0)
            .delay(delay + 0.5)
            .ease(Ease::BACK),
    );

    let onclick = {
        let on_open = props.on_open.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_open.emit(index))
    };
    let category = props.category;

    html! {
        <div ref={card} class="moment-card" {onclick}>
            <div class="moment-background" style={category.background}></div>
            <div class="moment-body">
                <div ref={icon} class="moment-icon">
                    <IconSvg icon={category.icon} class={classes!("icon-lg")} />
                </div>
                <h3 class="font-script">{ category.title }</h3>
                <p class="moment-description">{ category.description }</p>
                <p class="moment-hint">{"Toque para ver fotos →"}</p>
                <div class="moment-heart">
                    <IconSvg icon={Icon::Heart} class={classes!("icon-2xl")} />
                </div>
            </div>
        </div>
    }
}

#[function_component(MomentsSection)]
pub fn moments_section() -> Html {
    let lightbox = use_reducer(LightboxController::<Photo>::new);
    let category = use_state(|| None::<usize>);

    let on_open = {
        let lightbox = lightbox.dispatcher();
        let category = category.clone();
        Callback::from(move |index: usize| {
            if let Some(moment) = MOMENTS.get(index) {
                category.set(Some(index));
                lightbox.dispatch(LightboxAction::Open(moment.photos, 0));
            }
        })
    };
    let dispatch = |action: fn() -> LightboxAction<Photo>| {
        let lightbox = lightbox.dispatcher();
        Callback::from(move |_: ()| lightbox.dispatch(action()))
    };
    let title = (*category).and_then(|index| MOMENTS.get(index)).map(|m| AttrValue::from(m.title));

    html! {
        <section id="momentos" class="section-fullscreen moments">
            <div class="blob blob-pink" style="top: 5rem; right: 5rem; width: 18rem; height: 18rem;"></div>
            <div class="blob blob-deep" style="bottom: 10rem; left: 2.5rem; width: 14rem; height: 14rem;"></div>
            <div class="blob blob-gold" style="top: 50%; right: 25%; width: 10rem; height: 10rem;"></div>

            <div class="container">
                <SectionTitle
                    title="Momentos Especiais"
                    subtitle="Cada momento ao seu lado é uma memória preciosa"
                />
                <div class="moment-grid">
                    { for MOMENTS.iter().enumerate().map(|(index, category)| html! {
                        <MomentCard key={index} {index} {category} on_open={on_open.clone()} />
                    }) }
                </div>
                <p class="font-display section-quote">
                    {"\"A vida é feita de momentos, e eu quero viver todos eles com você\""}
                </p>
            </div>

            if let Some(photo) = lightbox.current_item() {
                <Lightbox
                    src={photo.src()}
                    alt={photo.alt}
                    {title}
                    caption={AttrValue::from(photo.caption)}
                    counter={lightbox.counter().map(AttrValue::from)}
                    navigation={lightbox.has_navigation()}
                    on_close={dispatch(|| LightboxAction::Close)}
                    on_prev={dispatch(|| LightboxAction::Prev)}
                    on_next={dispatch(|| LightboxAction::Next)}
                />
            }
        </section>
    }
}

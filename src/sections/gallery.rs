use yew::prelude::*;

use super::SectionTitle;
use crate::animation::Pose;
use crate::content::{Photo, GALLERY};
use crate::icons::{Icon, IconSvg};
use crate::lightbox::{Lightbox, LightboxAction, LightboxController};
use crate::reveal::{Reveal, RevealOptions};

fn card_options(index: usize) -> RevealOptions {
    RevealOptions::default()
        .start(0.9)
        .hidden(Pose::offset(0.0, 60.0).with_scale(0.9))
        .duration(0.6)
        .delay((index % 4) as f64 * 0.1)
}

#[derive(Properties, PartialEq)]
struct PhotoCardProps {
    index: usize,
    photo: &'static Photo,
    on_open: Callback<usize>,
}

#[function_component(PhotoCard)]
fn photo_card(props: &PhotoCardProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_open.emit(index))
    };
    let photo = props.photo;

    html! {
        <Reveal class={classes!("photo-card")} options={card_options(props.index)} {onclick}>
            <img src={photo.src()} alt={photo.alt} loading="lazy" />
            <div class="photo-overlay">
                <IconSvg icon={Icon::Heart} class={classes!("icon-lg", "animate-heart-beat")} />
                <p class="font-script">{ photo.caption }</p>
            </div>
            <div class="photo-corner">
                <IconSvg icon={Icon::Heart} class={classes!("icon-xs")} />
            </div>
        </Reveal>
    }
}

#[function_component(GallerySection)]
pub fn gallery_section() -> Html {
    let lightbox = use_reducer(LightboxController::<Photo>::new);

    let on_open = {
        let lightbox = lightbox.dispatcher();
        Callback::from(move |index: usize| lightbox.dispatch(LightboxAction::Open(&GALLERY, index)))
    };
    let dispatch = |action: fn() -> LightboxAction<Photo>| {
        let lightbox = lightbox.dispatcher();
        Callback::from(move |_: ()| lightbox.dispatch(action()))
    };

    html! {
        <section id="galeria" class="section-fullscreen gallery">
            <div class="blob blob-pink" style="top: 10rem; left: 5rem; width: 14rem; height: 14rem;"></div>
            <div class="blob blob-deep" style="bottom: 5rem; right: 5rem; width: 16rem; height: 16rem;"></div>

            <div class="container">
                <SectionTitle
                    title="Nossa Galeria"
                    subtitle="Cada foto conta um pedaço da nossa história"
                />
                <div class="photo-grid">
                    { for GALLERY.iter().enumerate().map(|(index, photo)| html! {
                        <PhotoCard key={index} {index} {photo} on_open={on_open.clone()} />
                    }) }
                </div>
            </div>

            if let Some(photo) = lightbox.current_item() {
                <Lightbox
                    src={photo.src()}
                    alt={photo.alt}
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

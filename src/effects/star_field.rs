use yew::prelude::*;

use super::particles::ParticleSpec;
use super::{use_particle_field, LAYER_STYLE};

#[derive(Properties, PartialEq)]
pub struct StarFieldProps {
    #[prop_or(30)]
    pub count: usize,
    #[prop_or(AttrValue::Static("#FFD700"))]
    pub color: AttrValue,
}

#[function_component(StarField)]
pub fn star_field(props: &StarFieldProps) -> Html {
    let container = use_node_ref();
    let spec = ParticleSpec::star_field(props.count).with_palette([props.color.to_string()]);
    use_particle_field(container.clone(), spec);

    html! { <div ref={container} class="particle-layer" style={LAYER_STYLE}></div> }
}

use yew::prelude::*;

use super::particles::ParticleSpec;
use super::{use_particle_field, LAYER_STYLE};

#[derive(Properties, PartialEq)]
pub struct FloatingHeartsProps {
    #[prop_or(15)]
    pub count: usize,
    #[prop_or(AttrValue::Static("#FFB6C1"))]
    pub color: AttrValue,
    #[prop_or(15.0)]
    pub min_size: f64,
    #[prop_or(35.0)]
    pub max_size: f64,
    #[prop_or(1.0)]
    pub speed: f64,
}

#[function_component(FloatingHearts)]
pub fn floating_hearts(props: &FloatingHeartsProps) -> Html {
    let container = use_node_ref();
    let spec = ParticleSpec::floating_hearts(props.count)
        .with_size(props.min_size, props.max_size)
        .with_palette([props.color.to_string()])
        .with_speed(props.speed);
    use_particle_field(container.clone(), spec);

    html! { <div ref={container} class="particle-layer" style={LAYER_STYLE}></div> }
}

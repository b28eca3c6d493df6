use yew::prelude::*;

use super::particles::ParticleSpec;
use super::{use_particle_field, LAYER_STYLE};

const RAIN_COLORS: [&str; 5] = ["#FFB6C1", "#FF69B4", "#FFC0CB", "#FF1493", "#C71585"];

#[derive(Properties, PartialEq)]
pub struct HeartRainProps {
    #[prop_or(12)]
    pub count: usize,
    #[prop_or(14.0)]
    pub min_size: f64,
    #[prop_or(28.0)]
    pub max_size: f64,
}

/// Hearts falling through the section behind its content.
#[function_component(HeartRain)]
pub fn heart_rain(props: &HeartRainProps) -> Html {
    let container = use_node_ref();
    let spec = ParticleSpec::heart_rain(props.count)
        .with_size(props.min_size, props.max_size)
        .with_palette(RAIN_COLORS);
    use_particle_field(container.clone(), spec);

    html! { <div ref={container} class="particle-layer" style={format!("{} z-index: 1;", LAYER_STYLE)}></div> }
}

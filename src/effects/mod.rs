pub mod dom;
pub mod floating_hearts;
pub mod heart_rain;
pub mod particles;
pub mod star_field;

pub use floating_hearts::FloatingHearts;
pub use heart_rain::HeartRain;
pub use star_field::StarField;

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys::Element;
use yew::prelude::*;

use crate::animation::engine;
use crate::error::EffectError;
use dom::DomHost;
use particles::{ParticleField, ParticleSpec};

/// Mounts a particle field into `container` for as long as the calling
/// component lives, remounting whenever `spec` changes.
#[hook]
pub fn use_particle_field(container: NodeRef, spec: ParticleSpec) {
    use_effect_with_deps(
        move |spec| {
            let mut host = DomHost::new(container.cast::<Element>());
            let mut rng = SmallRng::from_entropy();
            let field = match engine::with_ticker(|ticker| {
                ParticleField::mount(&mut host, spec, ticker, &mut rng)
            }) {
                Ok(Ok(field)) => Some(field),
                Ok(Err(EffectError::MissingContainer)) => {
                    debug!("Particle container missing, skipping {:?} field", spec.mode);
                    None
                }
                Ok(Err(err)) => {
                    warn!("Could not mount particle field: {}", err);
                    None
                }
                Err(err) => {
                    warn!("Could not mount particle field: {}", err);
                    None
                }
            };

            move || {
                if let Some(field) = field {
                    field.unmount(&mut host, engine::cancel_all);
                }
            }
        },
        spec,
    );
}

/// Full-bleed layer the particle fields spawn into.
pub(crate) const LAYER_STYLE: &str =
    "position: absolute; inset: 0; pointer-events: none; overflow: hidden; z-index: 0;";

use yew::prelude::*;
use yew_hooks::prelude::*;
use log::info;

mod animation;
mod config;
mod content;
mod effects;
mod error;
mod icons;
mod lightbox;
mod preloader;
mod reveal;
mod sections;

use preloader::PreLoader;
use sections::{DreamsSection, FooterSection, GallerySection, HeroSection, HistorySection, MomentsSection};


#[function_component]
fn App() -> Html {
    let intro = use_search_param("intro".to_string());
    let loading = use_state(|| !config::skip_intro(intro.as_deref()));

    let on_complete = {
        let loading = loading.clone();
        Callback::from(move |_| {
            info!("Preloader finished");
            loading.set(false);
        })
    };

    // Triggers may have moved while the overlay covered the page
    use_effect_with_deps(
        |loading| {
            if !*loading {
                reveal::refresh();
            }
            || ()
        },
        *loading,
    );

    html! {
        <>
            if *loading {
                <PreLoader {on_complete} />
            } else {
                <main class="page">
                    <HeroSection />
                    <HistorySection />
                    <GallerySection />
                    <MomentsSection />
                    <DreamsSection />
                    <FooterSection />
                </main>
            }
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    animation::engine::init();
    reveal::init();
    yew::Renderer::<App>::new().render();
}

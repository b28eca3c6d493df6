use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::effects::HeartRain;
use crate::icons::{Icon, IconSvg};
use crate::reveal::{Reveal, RevealOptions};

#[function_component(FooterSection)]
pub fn footer_section() -> Html {
    let year = Local::now().year();

    html! {
        <section class="section-fullscreen footer">
            <HeartRain count={config::FOOTER_RAIN_COUNT} />

            <div class="blob blob-pink" style="top: 2.5rem; left: 2.5rem; width: 12rem; height: 12rem;"></div>
            <div class="blob blob-deep" style="bottom: 5rem; right: 2.5rem; width: 16rem; height: 16rem;"></div>

            <Reveal class={classes!("footer-content")} options={RevealOptions::default()}>
                <div class="footer-sparkles">
                    { for [0.0, 0.3, 0.6].iter().enumerate().map(|(i, delay)| html! {
                        <IconSvg
                            icon={Icon::Sparkles}
                            class={classes!(if i == 1 { "icon-lg" } else { "icon-md" }, "text-gold", "animate-twinkle")}
                            style={AttrValue::from(format!("animation-delay: {}s;", delay))}
                        />
                    }) }
                </div>

                <blockquote class="font-script footer-quote">
                    {"\"Eu te amei ontem,"}<br />
                    {"te amo hoje,"}<br />
                    {"e te amarei"}<br />
                    {"para sempre\""}
                </blockquote>

                <div class="heart-divider">
                    <div class="divider-line divider-left"></div>
                    <IconSvg icon={Icon::Heart} class={classes!("icon-lg", "text-deep", "animate-heart-beat")} />
                    <div class="divider-line divider-right"></div>
                </div>

                <div class="footer-names">
                    <span class="font-script">{"Otávio"}</span>
                    <IconSvg icon={Icon::Heart} class={classes!("icon-xl", "text-deep", "animate-heart-beat")} />
                    <span class="font-script">{"Camilla"}</span>
                </div>

                <p class="font-display footer-year">{ format!("Desde o primeiro olhar • {}", year) }</p>

                <div class="glass-romantic footer-message">
                    <p>
                        {"Feito com "}
                        <IconSvg icon={Icon::Heart} class={classes!("icon-xs", "text-deep", "animate-heart-beat")} />
                        {" para o amor da minha vida"}
                    </p>
                </div>

                <p class="footer-copyright">{"Nossa História de Amor 💕"}</p>
            </Reveal>
        </section>
    }
}

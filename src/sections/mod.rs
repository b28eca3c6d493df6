pub mod dreams;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod history;
pub mod moments;

pub use dreams::DreamsSection;
pub use footer::FooterSection;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use history::HistorySection;
pub use moments::MomentsSection;

use yew::prelude::*;

use crate::icons::{Icon, IconSvg};
use crate::reveal::{Reveal, RevealOptions};

/// The first `progress` share of `text`, cut on a character boundary.
pub fn typewriter_prefix(text: &str, progress: f64) -> &str {
    let chars = text.chars().count();
    let shown = (progress.clamp(0.0, 1.0) * chars as f64 + 1e-9).floor() as usize;
    match text.char_indices().nth(shown) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Script heading with the heart divider, revealed from below.
#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <Reveal options={RevealOptions::default()}>
                <h2 class="font-script text-gradient-romantic">{ props.title.clone() }</h2>
            </Reveal>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="font-display section-subtitle">{ subtitle }</p>
            }
            <HeartDivider />
        </div>
    }
}

#[function_component(HeartDivider)]
pub fn heart_divider() -> Html {
    html! {
        <div class="heart-divider">
            <div class="divider-line divider-left"></div>
            <IconSvg icon={Icon::Heart} class={classes!("icon-sm", "text-deep", "animate-heart-beat")} />
            <div class="divider-line divider-right"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_grows_with_progress() {
        let title = "Nossa História de Amor";
        assert_eq!(typewriter_prefix(title, 0.0), "");
        assert_eq!(typewriter_prefix(title, 1.0), title);
        assert_eq!(typewriter_prefix(title, 0.25), "Nossa");
        assert_eq!(typewriter_prefix(title, 2.0), title);
        assert_eq!(typewriter_prefix(title, -1.0), "");
    }

    #[test]
    fn prefix_never_splits_a_character() {
        let title = "Nossa História de Amor";
        let chars = title.chars().count();
        for step in 0..=chars {
            let prefix = typewriter_prefix(title, step as f64 / chars as f64);
            assert_eq!(prefix.chars().count(), step);
        }
        assert_eq!(typewriter_prefix("💕💕", 0.5), "💕");
    }
}

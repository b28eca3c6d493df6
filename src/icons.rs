//! Inline SVG icons, stroke style 24x24.

use yew::prelude::*;

/// Filled heart, also used for heart particles.
pub const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Heart,
    Sparkles,
    Calendar,
    Gem,
    Home,
    Utensils,
    PartyPopper,
    Plane,
    Laugh,
    Baby,
    Star,
    Check,
    Gift,
    Music,
    Camera,
    MapPin,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    Close,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Heart => &[HEART_PATH],
            Icon::Sparkles => &[
                "M12 3l1.9 5.8L20 11l-6.1 2.2L12 19l-1.9-5.8L4 11l6.1-2.2z",
                "M5 3v4",
                "M3 5h4",
                "M19 17v4",
                "M17 19h4",
            ],
            Icon::Calendar => &["M8 2v4", "M16 2v4", "M3 10h18", "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z"],
            Icon::Gem => &["M6 3h12l4 6-10 13L2 9z", "M11 3 8 9l4 13 4-13-3-6", "M2 9h20"],
            Icon::Home => &["M3 10l9-7 9 7v10a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
            Icon::Utensils => &["M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2", "M7 2v20", "M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3zm0 0v7"],
            Icon::PartyPopper => &["M5.8 11.3 2 22l10.7-3.8", "M4 3h.01", "M22 8h.01", "M15 2h.01", "M22 20h.01", "M22 2l-2.24.75a2.9 2.9 0 0 0-1.96 3.12c.1.86-.57 1.63-1.45 1.63h-.38c-.86 0-1.6.6-1.76 1.44L14 10", "M11 13c1.93 1.93 2.83 4.17 2 5-.83.83-3.07-.07-5-2-1.93-1.93-2.83-4.17-2-5 .83-.83 3.07.07 5 2z"],
            Icon::Plane => &["M17.8 19.2 16 11l3.5-3.5C21 6 21.5 4 21 3c-1-.5-3 0-4.5 1.5L13 8 4.8 6.2c-.5-.1-.9.1-1.1.5l-.3.5c-.2.5-.1 1 .3 1.3L9 12l-2 3H4l-1 1 3 2 2 3 1-1v-3l3-2 3.5 5.3c.3.4.8.5 1.3.3l.5-.2c.4-.3.6-.7.5-1.2z"],
            Icon::Laugh => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M18 13a6 6 0 0 1-6 5 6 6 0 0 1-6-5h12z", "M9 9h.01", "M15 9h.01"],
            Icon::Baby => &["M9 12h.01", "M15 12h.01", "M10 16c.5.3 1.2.5 2 .5s1.5-.2 2-.5", "M19 6.3a9 9 0 0 1 1.8 3.9 2 2 0 0 1 0 3.6 9 9 0 0 1-17.6 0 2 2 0 0 1 0-3.6A9 9 0 0 1 12 3c2 0 3.5 1.1 3.5 2.5s-.9 2.5-2 2.5c-.8 0-1.5-.4-1.5-1"],
            Icon::Star => &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"],
            Icon::Check => &["M20 6 9 17l-5-5"],
            Icon::Gift => &["M3 8h18v4H3z", "M12 8v13", "M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7", "M7.5 8a2.5 2.5 0 0 1 0-5C11 3 12 8 12 8s1-5 4.5-5a2.5 2.5 0 0 1 0 5"],
            Icon::Music => &["M9 18V5l12-2v13", "M6 21a3 3 0 1 0 0-6 3 3 0 0 0 0 6z", "M18 19a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"],
            Icon::Camera => &["M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3z", "M12 16a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"],
            Icon::MapPin => &["M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z", "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::ChevronLeft => &["m15 18-6-6 6-6"],
            Icon::ChevronRight => &["m9 18 6-6-6-6"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }

    fn filled(self) -> bool {
        matches!(self, Icon::Heart)
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

#[function_component(IconSvg)]
pub fn icon_svg(props: &IconProps) -> Html {
    let (fill, stroke) = if props.icon.filled() {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };
    html! {
        <svg
            class={props.class.clone()}
            style={props.style.clone()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke={stroke}
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

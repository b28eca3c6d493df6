use log::Level;

#[cfg(debug_assertions)]
pub fn asset_base() -> &'static str {
    "/" // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn asset_base() -> &'static str {
    "./" // static hosting under any sub path
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const PRELOADER_COUNTER_SECS: f64 = 4.0;
pub const PRELOADER_FADE_SECS: f64 = 0.8;
pub const PETAL_COUNT: usize = 20;
pub const PETAL_INTERVAL_MS: u32 = 200;

pub const HERO_HEART_COUNT: usize = 20;
pub const HERO_HEART_SIZE: (f64, f64) = (12.0, 28.0);
pub const HERO_STAR_COUNT: usize = 12;
pub const FOOTER_RAIN_COUNT: usize = 12;

/// Seconds per character of the hero title typewriter.
pub const TYPEWRITER_SECS_PER_CHAR: f64 = 0.1;

/// `?intro=skip` jumps straight to the page.
pub fn skip_intro(param: Option<&str>) -> bool {
    matches!(param, Some(value) if value.eq_ignore_ascii_case("skip"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::particles::ParticleSpec;

    #[test]
    fn section_particles_are_valid() {
        let (min, max) = HERO_HEART_SIZE;
        assert!(ParticleSpec::floating_hearts(HERO_HEART_COUNT).with_size(min, max).validate().is_ok());
        assert!(ParticleSpec::star_field(HERO_STAR_COUNT).validate().is_ok());
        assert!(ParticleSpec::heart_rain(FOOTER_RAIN_COUNT).validate().is_ok());
    }

    #[test]
    fn intro_param() {
        assert!(skip_intro(Some("skip")));
        assert!(skip_intro(Some("SKIP")));
        assert!(!skip_intro(Some("play")));
        assert!(!skip_intro(None));
    }

    #[test]
    fn debug_builds_log_more() {
        assert!(log_level() >= Level::Info);
    }
}

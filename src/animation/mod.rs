//! Tween based animation: easing, poses, tweens, timelines and the frame
//! driven ticker that advances them.

pub mod easing;
pub mod engine;
pub mod pose;
pub mod ticker;
pub mod timeline;
pub mod tween;

pub use easing::Ease;
pub use pose::{Interpolate, Pose};
pub use ticker::{Ticker, TweenId};
pub use timeline::{Position, Timeline};
pub use tween::{Repeat, Tween};

use rand::Rng;

/// Uniform draw from `[min, max]`, tolerating `min == max`.
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max <= min {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

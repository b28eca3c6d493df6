//! Easing curves.
//!
//! Every curve maps `0.0 -> 0.0` and `1.0 -> 1.0`; inputs outside `[0, 1]`
//! are clamped first.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    SineInOut,
    /// Quadratic in-out.
    Power1InOut,
    /// Cubic out.
    Power2Out,
    /// Cubic in-out.
    Power2InOut,
    /// Overshoots the target by `overshoot` before settling.
    BackOut(f64),
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    /// `back.out(1.7)`
    pub const BACK: Ease = Ease::BackOut(1.7);
    /// `elastic.out(1, 0.5)`
    pub const ELASTIC: Ease = Ease::ElasticOut { amplitude: 1.0, period: 0.5 };

    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            Ease::Linear => t,
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::BackOut(overshoot) => {
                let c3 = overshoot + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + overshoot * (t - 1.0).powi(2)
            }
            Ease::ElasticOut { amplitude, period } => {
                let amplitude = amplitude.max(1.0);
                let tau = 2.0 * PI;
                let shift = period / tau * (1.0 / amplitude).asin();
                amplitude * 2f64.powf(-10.0 * t) * ((t - shift) * tau / period).sin() + 1.0
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Linear
    }
}

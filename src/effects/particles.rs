//! Decorative particle fields: floating hearts, heart rain, twinkling stars.
//!
//! A field samples every particle's look up front, asks its host to create a
//! node for it, and attaches looping tweens to the node. The field owns the
//! `(node, tweens)` pairs and releases both together on unmount.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::animation::{random_between, Ease, Pose, Repeat, Ticker, Tween, TweenId};
use crate::error::{ConfigError, EffectError};

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let (min, max) = (self.min, self.max);
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteRange { name, min, max });
        }
        if min > max {
            return Err(ConfigError::InvalidRange { name, min, max });
        }
        if min < 0.0 {
            return Err(ConfigError::NegativeRange { name, min, max });
        }
        Ok(())
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        random_between(rng, self.min, self.max)
    }

    /// Draw from `[-max, max]` style symmetric spreads.
    fn sample_signed<R: Rng + ?Sized>(spread: f64, rng: &mut R) -> f64 {
        random_between(rng, -spread, spread)
    }

    #[cfg(test)]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorMode {
    /// Bob gently in place.
    Ambient,
    /// Fall from above the top edge to below the bottom, forever.
    Rain,
    /// Pulse opacity and scale in place.
    Twinkle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    Heart,
    Dot,
    Petal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientSettings {
    /// Max horizontal drift in px.
    pub drift_x: f64,
    pub drift_y: f64,
    /// Max tilt in degrees.
    pub tilt: f64,
    pub drift_duration: Range,
    pub pulse_opacity: Range,
    pub pulse_duration: Range,
    pub start_delay: Range,
}

impl Default for AmbientSettings {
    fn default() -> Self {
        Self {
            drift_x: 14.0,
            drift_y: 20.0,
            tilt: 10.0,
            drift_duration: Range::new(2.5, 4.5),
            pulse_opacity: Range::new(0.15, 0.45),
            pulse_duration: Range::new(2.0, 3.5),
            start_delay: Range::new(0.0, 2.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RainSettings {
    /// Distance above the top edge where drops start, and below the bottom
    /// edge where they end.
    pub margin_px: f64,
    pub fall_duration: Range,
    pub start_delay: Range,
    pub sway_px: f64,
    pub spin: f64,
    pub sway_duration: Range,
}

impl Default for RainSettings {
    fn default() -> Self {
        Self {
            margin_px: 50.0,
            fall_duration: Range::new(7.0, 11.0),
            start_delay: Range::new(0.0, 5.0),
            sway_px: 40.0,
            spin: 180.0,
            sway_duration: Range::new(2.5, 4.5),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TwinkleSettings {
    pub glow: Range,
    pub opacity: Range,
    pub scale: Range,
    pub duration: Range,
    pub start_delay: Range,
}

impl Default for TwinkleSettings {
    fn default() -> Self {
        Self {
            glow: Range::new(2.0, 6.0),
            opacity: Range::new(0.3, 0.9),
            scale: Range::new(0.7, 1.15),
            duration: Range::new(1.8, 3.5),
            start_delay: Range::new(0.0, 3.0),
        }
    }
}

/// Configuration of one particle field.
///
/// Defaults match the hero's floating hearts: 15 pink hearts of 15-35px at
/// 0.2-0.5 opacity, normal speed. `speed_factor` multiplies every duration,
/// so `2.0` moves at half the pace.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub count: usize,
    pub size_range: Range,
    pub palette: Vec<String>,
    pub speed_factor: f64,
    pub mode: BehaviorMode,
    pub shape: ParticleShape,
    pub opacity_range: Range,
    pub ambient: AmbientSettings,
    pub rain: RainSettings,
    pub twinkle: TwinkleSettings,
}

impl Default for ParticleSpec {
    fn default() -> Self {
        Self {
            count: 15,
            size_range: Range::new(15.0, 35.0),
            palette: vec!["#FFB6C1".to_string()],
            speed_factor: 1.0,
            mode: BehaviorMode::Ambient,
            shape: ParticleShape::Heart,
            opacity_range: Range::new(0.2, 0.5),
            ambient: AmbientSettings::default(),
            rain: RainSettings::default(),
            twinkle: TwinkleSettings::default(),
        }
    }
}

impl ParticleSpec {
    pub fn floating_hearts(count: usize) -> Self {
        Self { count, ..Self::default() }
    }

    pub fn heart_rain(count: usize) -> Self {
        Self {
            count,
            size_range: Range::new(14.0, 28.0),
            mode: BehaviorMode::Rain,
            opacity_range: Range::new(0.4, 0.9),
            ..Self::default()
        }
    }

    pub fn star_field(count: usize) -> Self {
        Self {
            count,
            size_range: Range::new(2.0, 5.0),
            palette: vec!["#FFD700".to_string()],
            mode: BehaviorMode::Twinkle,
            shape: ParticleShape::Dot,
            opacity_range: Range::new(1.0, 1.0),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, min: f64, max: f64) -> Self {
        self.size_range = Range::new(min, max);
        self
    }

    pub fn with_palette<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.palette = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_speed(mut self, speed_factor: f64) -> Self {
        self.speed_factor = speed_factor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if !(self.speed_factor.is_finite() && self.speed_factor > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.speed_factor));
        }
        self.size_range.validate("size")?;
        self.opacity_range.validate("opacity")?;
        match self.mode {
            BehaviorMode::Ambient => {
                let a = &self.ambient;
                a.drift_duration.validate("drift duration")?;
                a.pulse_opacity.validate("pulse opacity")?;
                a.pulse_duration.validate("pulse duration")?;
                a.start_delay.validate("start delay")?;
            }
            BehaviorMode::Rain => {
                let r = &self.rain;
                r.fall_duration.validate("fall duration")?;
                r.start_delay.validate("start delay")?;
                r.sway_duration.validate("sway duration")?;
            }
            BehaviorMode::Twinkle => {
                let t = &self.twinkle;
                t.glow.validate("glow")?;
                t.opacity.validate("twinkle opacity")?;
                t.scale.validate("twinkle scale")?;
                t.duration.validate("twinkle duration")?;
                t.start_delay.validate("start delay")?;
            }
        }
        Ok(())
    }

    fn scaled(&self, seconds: f64) -> f64 {
        seconds * self.speed_factor
    }
}

/// Sampled appearance handed to the host when it creates a node.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleLook {
    pub index: usize,
    pub shape: ParticleShape,
    pub size_px: f64,
    pub left_percent: f64,
    pub top_percent: f64,
    /// Extra vertical offset of the resting position, negative is above.
    pub top_offset_px: f64,
    pub color: String,
    pub opacity: f64,
    pub glow_px: Option<f64>,
}

pub trait ParticleNode: Clone + 'static {
    /// Moves the resting position inside the container.
    fn place(&self, left_percent: f64, top_percent: f64);
    fn render(&self, pose: &Pose);
}

/// The container a field spawns into.
pub trait ParticleHost {
    type Node: ParticleNode;

    fn is_attached(&self) -> bool;
    fn height_px(&self) -> f64;
    fn spawn(&mut self, look: &ParticleLook) -> Result<Self::Node, EffectError>;
    fn remove(&mut self, node: &Self::Node);
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LiveState {
    left_percent: f64,
    top_percent: f64,
    pose: Pose,
}

type Live = Rc<RefCell<LiveState>>;

fn render<N: ParticleNode>(node: &N, live: &Live) {
    let pose = live.borrow().pose;
    node.render(&pose);
}

/// Live particles, each node paired with the tweens moving it.
pub struct ParticleField<N> {
    particles: Vec<(N, Vec<TweenId>)>,
}

impl<N: ParticleNode> ParticleField<N> {
    /// Spawns `spec.count` particles in ascending index order and starts
    /// their motion.
    pub fn mount<H, R>(
        host: &mut H,
        spec: &ParticleSpec,
        ticker: &mut Ticker,
        rng: &mut R,
    ) -> Result<Self, EffectError>
    where
        H: ParticleHost<Node = N>,
        R: Rng + ?Sized,
    {
        spec.validate()?;
        if !host.is_attached() {
            return Err(EffectError::MissingContainer);
        }

        let height = host.height_px();
        let mut field = ParticleField { particles: Vec::with_capacity(spec.count) };
        for index in 0..spec.count {
            let look = sample_look(index, spec, rng);
            let node = match host.spawn(&look) {
                Ok(node) => node,
                Err(err) => {
                    field.unmount(host, |ids| ticker.cancel_all(ids));
                    return Err(err);
                }
            };
            let motions = animate(&node, &look, spec, height, ticker, rng);
            field.particles.push((node, motions));
        }
        debug!("Mounted {} particles ({:?})", spec.count, spec.mode);
        Ok(field)
    }

    /// Cancels every motion through `cancel` and removes every node. Returns
    /// how many particles were torn down.
    pub fn unmount<H, C>(self, host: &mut H, mut cancel: C) -> usize
    where
        H: ParticleHost<Node = N>,
        C: FnMut(Vec<TweenId>),
    {
        let count = self.particles.len();
        for (node, motions) in self.particles {
            cancel(motions);
            host.remove(&node);
        }
        count
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

fn pick_color<R: Rng + ?Sized>(palette: &[String], rng: &mut R) -> String {
    palette[rng.gen_range(0..palette.len())].clone()
}

fn sample_look<R: Rng + ?Sized>(index: usize, spec: &ParticleSpec, rng: &mut R) -> ParticleLook {
    let size_px = spec.size_range.sample(rng);
    let left_percent = random_between(rng, 0.0, 100.0);
    let (top_percent, top_offset_px) = match spec.mode {
        BehaviorMode::Rain => (0.0, -spec.rain.margin_px),
        _ => (random_between(rng, 0.0, 100.0), 0.0),
    };
    let color = pick_color(&spec.palette, rng);
    let opacity = spec.opacity_range.sample(rng);
    let glow_px = match spec.mode {
        BehaviorMode::Twinkle => Some(spec.twinkle.glow.sample(rng)),
        _ => None,
    };
    ParticleLook {
        index,
        shape: spec.shape,
        size_px,
        left_percent,
        top_percent,
        top_offset_px,
        color,
        opacity,
        glow_px,
    }
}

fn animate<N, R>(
    node: &N,
    look: &ParticleLook,
    spec: &ParticleSpec,
    height: f64,
    ticker: &mut Ticker,
    rng: &mut R,
) -> Vec<TweenId>
where
    N: ParticleNode,
    R: Rng + ?Sized,
{
    let live: Live = Rc::new(RefCell::new(LiveState {
        left_percent: look.left_percent,
        top_percent: look.top_percent,
        pose: Pose::REST.with_opacity(look.opacity),
    }));
    render(node, &live);

    match spec.mode {
        BehaviorMode::Ambient => ambient_motion(node, &live, look.opacity, spec, ticker, rng),
        BehaviorMode::Rain => rain_motion(node, &live, spec, height, ticker, rng),
        BehaviorMode::Twinkle => twinkle_motion(node, &live, look.opacity, spec, ticker, rng),
    }
}

fn ambient_motion<N: ParticleNode, R: Rng + ?Sized>(
    node: &N,
    live: &Live,
    base_opacity: f64,
    spec: &ParticleSpec,
    ticker: &mut Ticker,
    rng: &mut R,
) -> Vec<TweenId> {
    let settings = &spec.ambient;
    let to_x = Range::sample_signed(settings.drift_x, rng);
    let to_y = Range::sample_signed(settings.drift_y, rng);
    let to_tilt = Range::sample_signed(settings.tilt, rng);

    let (drift_node, drift_live) = (node.clone(), live.clone());
    let drift = Tween::new(spec.scaled(settings.drift_duration.sample(rng)))
        .delay(settings.start_delay.sample(rng))
        .repeat(Repeat::Forever)
        .yoyo(true)
        .ease(Ease::SineInOut)
        .on_update(move |v| {
            {
                let mut state = drift_live.borrow_mut();
                state.pose.x = to_x * v;
                state.pose.y = to_y * v;
                state.pose.rotation = to_tilt * v;
            }
            render(&drift_node, &drift_live);
        });

    let to_opacity = settings.pulse_opacity.sample(rng);
    let (pulse_node, pulse_live) = (node.clone(), live.clone());
    let pulse = Tween::new(spec.scaled(settings.pulse_duration.sample(rng)))
        .delay(settings.start_delay.sample(rng))
        .repeat(Repeat::Forever)
        .yoyo(true)
        .ease(Ease::SineInOut)
        .on_update(move |v| {
            pulse_live.borrow_mut().pose.opacity = base_opacity + (to_opacity - base_opacity) * v;
            render(&pulse_node, &pulse_live);
        });

    vec![ticker.spawn(drift), ticker.spawn(pulse)]
}

fn rain_motion<N: ParticleNode, R: Rng + ?Sized>(
    node: &N,
    live: &Live,
    spec: &ParticleSpec,
    height: f64,
    ticker: &mut Ticker,
    rng: &mut R,
) -> Vec<TweenId> {
    let settings = &spec.rain;
    let distance_px = height.max(0.0) + settings.margin_px * 2.0;

    let (fall_node, fall_live) = (node.clone(), live.clone());
    let (reset_node, reset_live) = (node.clone(), live.clone());
    let opacity_range = spec.opacity_range;
    let mut reset_rng = SmallRng::seed_from_u64(rng.gen());
    let fall = Tween::new(spec.scaled(settings.fall_duration.sample(rng)))
        .delay(settings.start_delay.sample(rng))
        .repeat(Repeat::Forever)
        .on_update(move |v| {
            fall_live.borrow_mut().pose.y = distance_px * v;
            render(&fall_node, &fall_live);
        })
        .on_repeat(move |_| {
            let (left, top) = {
                let mut state = reset_live.borrow_mut();
                state.left_percent = random_between(&mut reset_rng, 0.0, 100.0);
                state.pose.opacity = opacity_range.sample(&mut reset_rng);
                state.pose.y = 0.0;
                (state.left_percent, state.top_percent)
            };
            reset_node.place(left, top);
            render(&reset_node, &reset_live);
        });

    let to_x = Range::sample_signed(settings.sway_px, rng);
    let to_spin = Range::sample_signed(settings.spin, rng);
    let (sway_node, sway_live) = (node.clone(), live.clone());
    let sway = Tween::new(spec.scaled(settings.sway_duration.sample(rng)))
        .repeat(Repeat::Forever)
        .yoyo(true)
        .ease(Ease::SineInOut)
        .on_update(move |v| {
            {
                let mut state = sway_live.borrow_mut();
                state.pose.x = to_x * v;
                state.pose.rotation = to_spin * v;
            }
            render(&sway_node, &sway_live);
        });

    vec![ticker.spawn(fall), ticker.spawn(sway)]
}

fn twinkle_motion<N: ParticleNode, R: Rng + ?Sized>(
    node: &N,
    live: &Live,
    base_opacity: f64,
    spec: &ParticleSpec,
    ticker: &mut Ticker,
    rng: &mut R,
) -> Vec<TweenId> {
    let settings = &spec.twinkle;
    let to_opacity = settings.opacity.sample(rng);
    let to_scale = settings.scale.sample(rng);
    let (twinkle_node, twinkle_live) = (node.clone(), live.clone());
    let twinkle = Tween::new(spec.scaled(settings.duration.sample(rng)))
        .delay(settings.start_delay.sample(rng))
        .repeat(Repeat::Forever)
        .yoyo(true)
        .ease(Ease::SineInOut)
        .on_update(move |v| {
            {
                let mut state = twinkle_live.borrow_mut();
                state.pose.opacity = base_opacity + (to_opacity - base_opacity) * v;
                state.pose.scale = 1.0 + (to_scale - 1.0) * v;
            }
            render(&twinkle_node, &twinkle_live);
        });
    vec![ticker.spawn(twinkle)]
}

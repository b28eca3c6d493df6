//! Petals drifting down over the preloader. Purely decorative: failures
//! are logged and skipped.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::animation::{Pose, Ticker, Tween, TweenId};
use crate::effects::particles::{ParticleHost, ParticleLook, ParticleNode, ParticleShape, Range};
use crate::error::EffectError;

pub const PETAL_COLORS: [&str; 4] = ["#FFB6C1", "#FF69B4", "#FFC0CB", "#FF1493"];

const SIZE: Range = Range::new(15.0, 30.0);
const LEFT: Range = Range::new(10.0, 90.0);
const SPIN: Range = Range::new(360.0, 720.0);
const FALL_SECS: Range = Range::new(4.0, 7.0);
const DRIFT_PX: f64 = 100.0;
const START_OFFSET_PX: f64 = -50.0;
const OPACITY: f64 = 0.8;

/// Sampled path of one petal.
#[derive(Debug, Clone, PartialEq)]
pub struct PetalFall {
    pub look: ParticleLook,
    pub drift_x: f64,
    pub spin: f64,
    pub duration: f64,
    pub distance_px: f64,
}

impl PetalFall {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, index: usize, viewport_height: f64) -> Self {
        let color = PETAL_COLORS.choose(rng).copied().unwrap_or(PETAL_COLORS[0]);
        Self {
            look: ParticleLook {
                index,
                shape: ParticleShape::Petal,
                size_px: SIZE.sample(rng),
                left_percent: LEFT.sample(rng),
                top_percent: 0.0,
                top_offset_px: START_OFFSET_PX,
                color: color.to_string(),
                opacity: OPACITY,
                glow_px: None,
            },
            drift_x: rng.gen_range(-DRIFT_PX..=DRIFT_PX),
            spin: SPIN.sample(rng),
            duration: FALL_SECS.sample(rng),
            distance_px: viewport_height * 1.1,
        }
    }

    fn pose(&self, t: f64) -> Pose {
        Pose {
            x: self.drift_x * t,
            y: self.distance_px * t,
            rotation: self.spin * t,
            opacity: OPACITY,
            ..Pose::REST
        }
    }
}

type Live<N> = Rc<RefCell<Vec<(usize, N, TweenId)>>>;

pub struct PetalShower<H: ParticleHost, R> {
    host: Rc<RefCell<H>>,
    rng: R,
    live: Live<H::Node>,
}

impl<H: ParticleHost + 'static, R: Rng> PetalShower<H, R> {
    pub fn new(host: H, rng: R) -> Self {
        Self { host: Rc::new(RefCell::new(host)), rng, live: Rc::new(RefCell::new(Vec::new())) }
    }

    /// Petals currently falling.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.live.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Spawns petal `index` and lets it fall. The node removes itself when
    /// the fall ends.
    pub fn drop_petal(&mut self, ticker: &mut Ticker, index: usize) -> Result<TweenId, EffectError> {
        let (fall, node) = {
            let mut host = self.host.borrow_mut();
            if !host.is_attached() {
                return Err(EffectError::MissingContainer);
            }
            let fall = PetalFall::sample(&mut self.rng, index, host.height_px());
            let node = host.spawn(&fall.look)?;
            (fall, node)
        };

        let render = node.clone();
        let host = self.host.clone();
        let live = self.live.clone();
        let tween = Tween::new(fall.duration)
            .on_update(move |t| render.render(&fall.pose(t)))
            .on_complete(move |_| {
                let mut live = live.borrow_mut();
                if let Some(at) = live.iter().position(|(i, _, _)| *i == index) {
                    let (_, node, _) = live.swap_remove(at);
                    host.borrow_mut().remove(&node);
                }
            });
        let id = ticker.spawn(tween);
        self.live.borrow_mut().push((index, node, id));
        Ok(id)
    }

    /// Removes every petal still on screen and hands their tweens to
    /// `cancel`. Returns how many petals were cleared.
    pub fn teardown<C>(&mut self, cancel: C) -> usize
    where
        C: FnOnce(Vec<TweenId>),
    {
        let drained: Vec<_> = self.live.borrow_mut().drain(..).collect();
        debug!("Clearing {} petals", drained.len());
        let mut host = self.host.borrow_mut();
        let ids: Vec<TweenId> = drained
            .into_iter()
            .map(|(_, node, id)| {
                host.remove(&node);
                id
            })
            .collect();
        let count = ids.len();
        cancel(ids);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ticker::run_for;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    #[derive(Clone)]
    struct Petal {
        removed: Rc<Cell<bool>>,
        last: Rc<Cell<Option<Pose>>>,
    }

    impl ParticleNode for Petal {
        fn place(&self, _left: f64, _top: f64) {}

        fn render(&self, pose: &Pose) {
            self.last.set(Some(*pose));
        }
    }

    #[derive(Default)]
    struct Stage {
        attached: bool,
        spawned: Rc<RefCell<Vec<Petal>>>,
    }

    impl ParticleHost for Stage {
        type Node = Petal;

        fn is_attached(&self) -> bool {
            self.attached
        }

        fn height_px(&self) -> f64 {
            800.0
        }

        fn spawn(&mut self, _look: &ParticleLook) -> Result<Petal, EffectError> {
            let petal = Petal { removed: Rc::new(Cell::new(false)), last: Rc::new(Cell::new(None)) };
            self.spawned.borrow_mut().push(petal.clone());
            Ok(petal)
        }

        fn remove(&mut self, node: &Petal) {
            node.removed.set(true);
        }
    }

    fn shower(attached: bool) -> (PetalShower<Stage, StdRng>, Rc<RefCell<Vec<Petal>>>) {
        let stage = Stage { attached, ..Stage::default() };
        let spawned = stage.spawned.clone();
        (PetalShower::new(stage, StdRng::seed_from_u64(7)), spawned)
    }

    #[test]
    fn samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for index in 0..50 {
            let fall = PetalFall::sample(&mut rng, index, 900.0);
            assert!(SIZE.contains(fall.look.size_px));
            assert!(LEFT.contains(fall.look.left_percent));
            assert!(FALL_SECS.contains(fall.duration));
            assert!(fall.drift_x.abs() <= DRIFT_PX);
            assert!(PETAL_COLORS.contains(&fall.look.color.as_str()));
            assert!((fall.distance_px - 990.0).abs() < 1e-9);
        }
    }

    #[test]
    fn petals_remove_themselves_after_falling() {
        let (mut shower, spawned) = shower(true);
        let mut ticker = Ticker::new();
        for index in 0..20 {
            shower.drop_petal(&mut ticker, index).unwrap();
        }
        assert_eq!(shower.len(), 20);
        run_for(&mut ticker, 7.1, 0.05);
        assert!(shower.is_empty());
        assert!(spawned.borrow().iter().all(|p| p.removed.get()));
        let landed = spawned.borrow()[0].last.get().unwrap();
        assert!((landed.y - 880.0).abs() < 1e-6);
    }

    #[test]
    fn teardown_clears_falling_petals() {
        let (mut shower, spawned) = shower(true);
        let mut ticker = Ticker::new();
        for index in 0..5 {
            shower.drop_petal(&mut ticker, index).unwrap();
        }
        run_for(&mut ticker, 1.0, 0.1);
        let mut handed = 0;
        assert_eq!(
            shower.teardown(|ids| {
                handed = ids.len();
                ticker.cancel_all(ids);
            }),
            5
        );
        assert_eq!(handed, 5);
        assert!(shower.is_empty());
        assert!(ticker.is_empty());
        assert!(spawned.borrow().iter().all(|p| p.removed.get()));
    }

    #[test]
    fn detached_stage_spawns_nothing() {
        let (mut shower, spawned) = shower(false);
        let mut ticker = Ticker::new();
        assert!(matches!(shower.drop_petal(&mut ticker, 0), Err(EffectError::MissingContainer)));
        assert!(spawned.borrow().is_empty());
        assert!(ticker.is_empty());
    }
}

//! Scroll driven reveal groups and scrub bindings.
//!
//! Each group is a two state machine, `Pending` or `Revealed`, bound to a
//! trigger. Whenever the viewport changes the controller compares the
//! trigger's top edge against the group's activation line and plays the
//! group's elements towards their resting pose, or back to the hidden one.

use std::cell::Cell;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use crate::animation::{Ease, Interpolate, Pose, Ticker, Tween, TweenId};
use crate::error::ConfigError;

new_key_type! {
    pub struct RevealId;
    pub struct ScrubId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub height: f64,
    pub scroll_y: f64,
}

/// What a group animates and what decides when it does.
pub trait RevealTarget: Clone + 'static {
    /// Top edge of the trigger relative to the top of the viewport, `None`
    /// once the trigger left the document.
    fn trigger_top(&self) -> Option<f64>;
    fn trigger_height(&self) -> f64;
    fn len(&self) -> usize;
    fn apply(&self, index: usize, pose: &Pose);
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Activation line as a fraction of the viewport height from its top.
    /// `0.8` reveals once the trigger's top passes 80% of the viewport.
    pub start: f64,
    /// Play back to hidden when the trigger drops below the line again.
    pub reversible: bool,
    pub duration: f64,
    pub delay: f64,
    /// Extra delay per element index.
    pub stagger: f64,
    pub ease: Ease,
    pub hidden: Pose,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            start: 0.8,
            reversible: true,
            duration: 1.0,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::Power2Out,
            hidden: Pose::offset(0.0, 50.0),
        }
    }
}

impl RevealOptions {
    pub fn start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    #[cfg(test)]
    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn hidden(mut self, hidden: Pose) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn once(mut self) -> Self {
        self.reversible = false;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.start) {
            return Err(ConfigError::InvalidThreshold(self.start));
        }
        for (name, value) in [("duration", self.duration), ("delay", self.delay), ("stagger", self.stagger)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteRange { name, min: value, max: value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeRange { name, min: value, max: value });
            }
        }
        Ok(())
    }
}

/// Scroll linked interpolation between two poses.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubOptions {
    /// Viewport fraction where the trigger's top edge starts the scrub.
    pub start: f64,
    /// Viewport fraction where the trigger's bottom edge ends it.
    pub end: f64,
    pub from: Pose,
    pub to: Pose,
    /// Seconds the value takes to catch up with the scroll position.
    pub lag: f64,
}

impl Default for ScrubOptions {
    fn default() -> Self {
        Self { start: 0.0, end: 0.0, from: Pose::REST, to: Pose::REST, lag: 1.0 }
    }
}

/// Progress of a trigger through `[start, end]`, clamped to `[0, 1]`.
pub fn scrub_progress(top: f64, height: f64, viewport_height: f64, start: f64, end: f64) -> f64 {
    let start_line = start * viewport_height;
    let span = start_line - (end * viewport_height - height);
    if span <= 0.0 {
        return if top <= start_line { 1.0 } else { 0.0 };
    }
    ((start_line - top) / span).clamp(0.0, 1.0)
}

struct Group<T> {
    target: T,
    options: RevealOptions,
    state: RevealState,
    progress: Vec<Rc<Cell<f64>>>,
    tweens: Vec<TweenId>,
    last_top: f64,
}

struct Scrub<T> {
    target: T,
    options: ScrubOptions,
    current: Rc<Cell<f64>>,
    goal: f64,
    tween: Option<TweenId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub id: RevealId,
    pub state: RevealState,
}

pub struct RevealController<T> {
    groups: SlotMap<RevealId, Group<T>>,
    scrubs: SlotMap<ScrubId, Scrub<T>>,
    last_scroll_y: Option<f64>,
}

impl<T> Default for RevealController<T> {
    fn default() -> Self {
        Self { groups: SlotMap::with_key(), scrubs: SlotMap::with_key(), last_scroll_y: None }
    }
}

impl<T: RevealTarget> RevealController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching `target`. Elements are put in their hidden pose, and
    /// revealed right away if the trigger is already past the line.
    pub fn observe(
        &mut self,
        ticker: &mut Ticker,
        target: T,
        options: RevealOptions,
        viewport: Viewport,
    ) -> Result<RevealId, ConfigError> {
        options.validate()?;
        let progress = (0..target.len()).map(|_| Rc::new(Cell::new(0.0))).collect();
        for index in 0..target.len() {
            target.apply(index, &options.hidden);
        }
        let id = self.groups.insert(Group {
            target,
            options,
            state: RevealState::Pending,
            progress,
            tweens: Vec::new(),
            last_top: f64::INFINITY,
        });
        if let Some(transition) = self.evaluate(id, viewport) {
            self.play(ticker, transition);
        }
        Ok(id)
    }

    pub fn observe_scrub(&mut self, ticker: &mut Ticker, target: T, options: ScrubOptions, viewport: Viewport) -> ScrubId {
        for index in 0..target.len() {
            target.apply(index, &options.from);
        }
        let id = self.scrubs.insert(Scrub {
            target,
            options,
            current: Rc::new(Cell::new(0.0)),
            goal: 0.0,
            tween: None,
        });
        self.update_scrub(ticker, id, viewport, true);
        id
    }

    /// Forgets the group and hands the tweens still running for it to
    /// `cancel`. Returns false for an unknown id.
    pub fn unsubscribe<C>(&mut self, id: RevealId, cancel: C) -> bool
    where
        C: FnOnce(Vec<TweenId>),
    {
        match self.groups.remove(id) {
            Some(group) => {
                cancel(group.tweens);
                true
            }
            None => false,
        }
    }

    pub fn unsubscribe_scrub<C>(&mut self, id: ScrubId, cancel: C) -> bool
    where
        C: FnOnce(Vec<TweenId>),
    {
        match self.scrubs.remove(id) {
            Some(scrub) => {
                cancel(scrub.tween.into_iter().collect());
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.groups.get(id).map(|group| group.state)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.groups.len() + self.scrubs.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn evaluate(&mut self, id: RevealId, viewport: Viewport) -> Option<Transition> {
        let group = self.groups.get_mut(id)?;
        let top = group.target.trigger_top()?;
        group.last_top = top;
        let inside = top <= group.options.start * viewport.height;
        match group.state {
            RevealState::Pending if inside => Some(Transition { id, state: RevealState::Revealed }),
            RevealState::Revealed if !inside && group.options.reversible => {
                Some(Transition { id, state: RevealState::Pending })
            }
            _ => None,
        }
    }

    /// Re-evaluates every group and scrub. Returns the transitions in the
    /// order they fired: top-most first while scrolling down, bottom-most
    /// first while scrolling up.
    pub fn on_scroll(&mut self, ticker: &mut Ticker, viewport: Viewport) -> Vec<Transition> {
        let scrolling_up = self
            .last_scroll_y
            .map(|last| viewport.scroll_y < last)
            .unwrap_or(false);
        self.last_scroll_y = Some(viewport.scroll_y);

        let ids: Vec<RevealId> = self.groups.keys().collect();
        let mut fired: Vec<(f64, Transition)> = ids
            .into_iter()
            .filter_map(|id| {
                let transition = self.evaluate(id, viewport)?;
                Some((self.groups[id].last_top, transition))
            })
            .collect();
        fired.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        if scrolling_up {
            fired.reverse();
        }

        let transitions: Vec<Transition> = fired.into_iter().map(|(_, t)| t).collect();
        for transition in &transitions {
            self.play(ticker, *transition);
        }

        let scrub_ids: Vec<ScrubId> = self.scrubs.keys().collect();
        for id in scrub_ids {
            self.update_scrub(ticker, id, viewport, false);
        }
        transitions
    }

    fn play(&mut self, ticker: &mut Ticker, transition: Transition) {
        let Some(group) = self.groups.get_mut(transition.id) else {
            return;
        };
        ticker.cancel_all(group.tweens.drain(..));
        group.state = transition.state;
        let forward = transition.state == RevealState::Revealed;
        let goal = if forward { 1.0 } else { 0.0 };

        for (index, cell) in group.progress.iter().enumerate() {
            let from = cell.get();
            let span = (goal - from).abs();
            if span <= f64::EPSILON {
                continue;
            }
            let delay = if forward {
                group.options.delay + index as f64 * group.options.stagger
            } else {
                0.0
            };
            let target = group.target.clone();
            let cell = cell.clone();
            let hidden = group.options.hidden;
            let ease = group.options.ease;
            let tween = Tween::new(group.options.duration * span)
                .delay(delay)
                .on_update(move |v| {
                    let value = from + (goal - from) * v;
                    cell.set(value);
                    target.apply(index, &hidden.lerp(&Pose::REST, ease.apply(value)));
                });
            group.tweens.push(ticker.spawn(tween));
        }
    }

    fn update_scrub(&mut self, ticker: &mut Ticker, id: ScrubId, viewport: Viewport, immediate: bool) {
        let Some(scrub) = self.scrubs.get_mut(id) else {
            return;
        };
        let Some(top) = scrub.target.trigger_top() else {
            return;
        };
        let goal = scrub_progress(
            top,
            scrub.target.trigger_height(),
            viewport.height,
            scrub.options.start,
            scrub.options.end,
        );
        if !immediate && (goal - scrub.goal).abs() <= f64::EPSILON {
            return;
        }
        scrub.goal = goal;
        if let Some(previous) = scrub.tween.take() {
            ticker.cancel(previous);
        }

        let from = scrub.current.get();
        let target = scrub.target.clone();
        let current = scrub.current.clone();
        let (from_pose, to_pose) = (scrub.options.from, scrub.options.to);
        let lag = if immediate { 0.0 } else { scrub.options.lag };
        let apply = move |v: f64| {
            let value = from + (goal - from) * v;
            current.set(value);
            let pose = from_pose.lerp(&to_pose, value);
            for index in 0..target.len() {
                target.apply(index, &pose);
            }
        };
        if lag <= 0.0 {
            apply(1.0);
            return;
        }
        scrub.tween = Some(ticker.spawn(Tween::new(lag).ease(Ease::Power2Out).on_update(apply)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ticker::run_for;
    use std::cell::RefCell;

    #[derive(Clone)]
    struct FakeTarget {
        top: Rc<Cell<Option<f64>>>,
        height: f64,
        poses: Rc<RefCell<Vec<Pose>>>,
    }

    impl FakeTarget {
        fn new(top: f64, elements: usize) -> Self {
            Self {
                top: Rc::new(Cell::new(Some(top))),
                height: 200.0,
                poses: Rc::new(RefCell::new(vec![Pose::REST; elements])),
            }
        }

        fn pose(&self, index: usize) -> Pose {
            self.poses.borrow()[index]
        }
    }

    impl RevealTarget for FakeTarget {
        fn trigger_top(&self) -> Option<f64> {
            self.top.get()
        }

        fn trigger_height(&self) -> f64 {
            self.height
        }

        fn len(&self) -> usize {
            self.poses.borrow().len()
        }

        fn apply(&self, index: usize, pose: &Pose) {
            self.poses.borrow_mut()[index] = *pose;
        }
    }

    const VIEW: Viewport = Viewport { height: 1000.0, scroll_y: 0.0 };

    fn at(scroll_y: f64) -> Viewport {
        Viewport { scroll_y, ..VIEW }
    }

    #[test]
    fn below_the_line_stays_hidden() {
        let mut ticker = Ticker::new();
        let mut controller = RevealController::new();
        let target = FakeTarget::new(900.0, 1);
        let id = controller.observe(&mut ticker, target.clone(), RevealOptions::default(), VIEW).unwrap();
        assert_eq!(controller.state(id), Some(RevealState::Pending));
        assert_eq!(target.pose(0).opacity, 0.0);
        assert_eq!(target.pose(0).y, 50.0);
        assert!(ticker.is_empty());
    }

    #[test]
    fn already_inside_reveals_without_scrolling() {
        let mut ticker = Ticker::new();
        let mut controller = RevealController::new();
        let target = FakeTarget::new(300.0, 3);
        let options = RevealOptions::default().stagger(0.1);
        let id = controller.observe(&mut ticker, target.clone(), options, VIEW).unwrap();
        assert_eq!(controller.state(id), Some(RevealState::Revealed));
        assert_eq!(ticker.len(), 3);
        run_for(&mut ticker, 1.3, 1.0 / 60.0);
        for index in 0..3 {
            assert_eq!(target.pose(index), Pose::REST);
        }
    }

    #[test]
    fn reverses_when_scrolled_back_above() {
        let mut ticker = Ticker::new();
        let mut controller = RevealController::new();
        let target = FakeTarget::new(900.0, 1);
        let id = controller.observe(&mut ticker, target.clone(), RevealOptions::default(), VIEW).unwrap();

        target.top.set(Some(700.0));
        let fired = controller.on_scroll(&mut ticker, at(200.0));
        assert_eq!(fired, vec![Transition { id, state: RevealState::Revealed }]);
        run_for(&mut ticker, 0.5, 1.0 / 60.0);
        let halfway = target.pose(0);
        assert!(halfway.opacity > 0.0 && halfway.opacity < 1.0);

        target.top.set(Some(850.0));
        let fired = controller.on_scroll(&mut ticker, at(50.0));
        assert_eq!(fired, vec![Transition { id, state: RevealState::Pending }]);
        assert_eq!(ticker.len(), 1, "forward tween replaced by the reverse one");
        run_for(&mut ticker, 1.0, 1.0 / 60.0);
        assert_eq!(target.pose(0).opacity, 0.0);

        target.top.set(Some(100.0));
        controller.on_scroll(&mut ticker, at(800.0));
        assert_eq!(controller.state(id), Some(RevealState::Revealed));
    }

    #[test]
    fn once_groups_never_reverse() {
        let mut ticker = Ticker::new();
        let mut controller = RevealController::new();
        let target = FakeTarget::new(100.0, 1);
        let id = controller
            .observe(&mut ticker, target.clone(), RevealOptions::default().once(), VIEW)
            .unwrap();
        target.top.set(Some(950.0));
        assert!(controller.on_scroll(&mut ticker, at(0.0)).is_empty());
        assert_eq!(controller.state(id), Some(RevealState::Revealed));
    }

    #[test]
    fn transitions_fire_in_crossing_order() {
        let mut ticker = Ticker::new();
        let mut controller = RevealController::new();
        let low = FakeTarget::new(1500.0, 1);
        let high = FakeTarget::new(1200.0, 1);
        let low_id = controller.observe(&mut ticker, low.clone(), RevealOptions::default(), VIEW).unwrap();
        let high_id = controller.observe(&mut ticker, high.clone(), RevealOptions::default(), VIEW).unwrap();

        low.top.set(Some(700.0));
        high.top.set(Some(400.0));
        let order: Vec<RevealId> = controller.on_scroll(&mut ticker, at(800.0)).iter().map(|t| t.id).collect();
        assert_eq!(order, vec![high_id, low_id]);

        low.top.set(Some(1500.0));
        high.top.set(Some(1200.0));
        let order: Vec<RevealId> = controller.on_scroll(&mut ticker, at(0.0)).iter().map(|t| t.id).collect();
        assert_eq!(order, vec![low_id, high_id]);
    }

    #[test]
    fn unsubscribe_cancels_running_tweens() {
        let mut ticker = Ticker::new();
        let mut controller = RevealController::new();
        let target = FakeTarget::new(0.0, 4);
        let id = controller.observe(&mut ticker, target, RevealOptions::default(), VIEW).unwrap();
        assert_eq!(ticker.len(), 4);
        assert!(controller.unsubscribe(id, |ids| ticker.cancel_all(ids)));
        assert!(ticker.is_empty());
        assert!(!controller.unsubscribe(id, |ids| ticker.cancel_all(ids)));
        assert!(controller.on_scroll(&mut ticker, at(10.0)).is_empty());
        assert!(controller.is_empty());
    }

    #[test]
    fn unsubscribe_scrub_cancels_its_catch_up() {
        let mut ticker = Ticker::new();
        let mut controller = RevealController::new();
        let target = FakeTarget::new(0.0, 1);
        let id = controller.observe_scrub(&mut ticker, target.clone(), ScrubOptions::default(), VIEW);
        target.top.set(Some(-100.0));
        controller.on_scroll(&mut ticker, at(100.0));
        assert_eq!(ticker.len(), 1);

        let mut handed = Vec::new();
        assert!(controller.unsubscribe_scrub(id, |ids| handed = ids));
        assert_eq!(handed.len(), 1);
        ticker.cancel_all(handed);
        assert!(ticker.is_empty());
        assert!(controller.is_empty());
        assert!(!controller.unsubscribe_scrub(id, |_| panic!("unknown id has nothing to cancel")));
    }

    #[test]
    fn timing_errors_name_the_problem() {
        let negative = RevealOptions::default().delay(-0.5).validate();
        assert!(matches!(negative, Err(ConfigError::NegativeRange { name: "delay", .. })));
        let endless = RevealOptions::default().duration(f64::INFINITY).validate();
        assert!(matches!(endless, Err(ConfigError::NonFiniteRange { name: "duration", .. })));
        assert_eq!(RevealOptions::default().stagger(0.2).validate(), Ok(()));
    }

    #[test]
    fn detached_trigger_is_ignored() {
        let mut ticker = Ticker::new();
        let mut controller = RevealController::new();
        let target = FakeTarget::new(0.0, 1);
        target.top.set(None);
        let id = controller.observe(&mut ticker, target, RevealOptions::default(), VIEW).unwrap();
        assert_eq!(controller.state(id), Some(RevealState::Pending));
    }

    #[test]
    fn rejects_threshold_outside_viewport() {
        let mut ticker = Ticker::new();
        let mut controller = RevealController::new();
        let result = controller.observe(&mut ticker, FakeTarget::new(0.0, 1), RevealOptions::default().start(1.5), VIEW);
        assert_eq!(result, Err(ConfigError::InvalidThreshold(1.5)));
        assert!(controller.is_empty());
    }

    #[test]
    fn scrub_progress_spans_start_to_end() {
        // "top top" to "bottom top" on a 1000px tall section
        assert_eq!(scrub_progress(0.0, 1000.0, 800.0, 0.0, 0.0), 0.0);
        assert_eq!(scrub_progress(-500.0, 1000.0, 800.0, 0.0, 0.0), 0.5);
        assert_eq!(scrub_progress(-2000.0, 1000.0, 800.0, 0.0, 0.0), 1.0);
        // "top 70%" to "bottom 30%"
        let p = scrub_progress(700.0, 400.0, 1000.0, 0.7, 0.3);
        assert_eq!(p, 0.0);
        let p = scrub_progress(300.0 - 400.0, 400.0, 1000.0, 0.7, 0.3);
        assert_eq!(p, 1.0);
    }

    #[test]
    fn scrub_catches_up_with_scroll() {
        let mut ticker = Ticker::new();
        let mut controller = RevealController::new();
        let target = FakeTarget::new(0.0, 1);
        let options = ScrubOptions {
            to: Pose { y: 100.0, ..Pose::REST },
            ..ScrubOptions::default()
        };
        controller.observe_scrub(&mut ticker, target.clone(), options, VIEW);
        assert_eq!(target.pose(0).y, 0.0);

        target.top.set(Some(-100.0));
        controller.on_scroll(&mut ticker, at(100.0));
        assert_eq!(target.pose(0).y, 0.0, "scrub lags behind the scroll");
        run_for(&mut ticker, 1.0, 0.05);
        assert!((target.pose(0).y - 50.0).abs() < 1e-6);
    }
}

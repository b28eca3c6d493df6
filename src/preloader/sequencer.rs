//! The intro choreography: a flower grows while a counter runs to 100%,
//! then the overlay fades out and completion is signalled once.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use crate::animation::{Ease, Interpolate, Pose, Position, Ticker, Timeline, Tween, TweenId};
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowerPart {
    Stem,
    Leaf,
    Petal,
    Centre,
}

impl FlowerPart {
    pub const ALL: [FlowerPart; 4] = [FlowerPart::Stem, FlowerPart::Leaf, FlowerPart::Petal, FlowerPart::Centre];

    /// Elements of each part in the flower drawing.
    pub fn count(self) -> usize {
        match self {
            FlowerPart::Stem => 1,
            FlowerPart::Leaf => 2,
            FlowerPart::Petal => 6,
            FlowerPart::Centre => 2,
        }
    }

    fn hidden(self) -> Pose {
        match self {
            FlowerPart::Stem => Pose { scale_y: 0.0, ..Pose::REST },
            _ => Pose::hidden().with_scale(0.0),
        }
    }
}

/// Counter value and the one-shot completion flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreLoaderState {
    pub progress: u8,
    pub completed: bool,
}

impl PreLoaderState {
    /// Moves the counter forward. Returns false if nothing changed.
    pub fn advance(&mut self, percent: u8) -> bool {
        let percent = percent.min(100);
        if percent <= self.progress {
            return false;
        }
        self.progress = percent;
        true
    }

    /// Marks completion. Only the first call returns true.
    pub fn complete(&mut self) -> bool {
        !std::mem::replace(&mut self.completed, true)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreLoaderTiming {
    pub stem: f64,
    pub leaf: f64,
    pub leaf_stagger: f64,
    pub leaf_overlap: f64,
    pub petal: f64,
    pub petal_stagger: f64,
    pub petal_overlap: f64,
    pub centre: f64,
    pub centre_overlap: f64,
    pub counter: f64,
    pub fade: f64,
}

impl Default for PreLoaderTiming {
    fn default() -> Self {
        Self {
            stem: 1.2,
            leaf: 0.6,
            leaf_stagger: 0.2,
            leaf_overlap: 0.4,
            petal: 0.8,
            petal_stagger: 0.1,
            petal_overlap: 0.3,
            centre: 0.5,
            centre_overlap: 0.4,
            counter: config::PRELOADER_COUNTER_SECS,
            fade: config::PRELOADER_FADE_SECS,
        }
    }
}

impl PreLoaderTiming {
    fn grow(part: FlowerPart, index: usize, duration: f64, ease: Ease, view: impl PreLoaderView) -> Tween {
        let from = part.hidden();
        Tween::new(duration)
            .ease(ease)
            .on_update(move |v| view.pose(part, index, &from.lerp(&Pose::REST, v)))
    }

    fn choreography<V: PreLoaderView>(&self, view: &V, state: Rc<RefCell<PreLoaderState>>) -> Timeline {
        let group = |part: FlowerPart, duration: f64, ease: Ease| -> Vec<Tween> {
            (0..part.count())
                .map(|index| Self::grow(part, index, duration, ease, view.clone()))
                .collect()
        };

        let counter_view = view.clone();
        let counter = Tween::new(self.counter).on_update(move |v| {
            let percent = (v * 100.0).round() as u8;
            if state.borrow_mut().advance(percent) {
                counter_view.progress(percent);
            }
        });

        Timeline::new()
            .stagger(Position::AfterPrevious, group(FlowerPart::Stem, self.stem, Ease::Power2Out), 0.0)
            .stagger(Position::Overlap(self.leaf_overlap), group(FlowerPart::Leaf, self.leaf, Ease::BACK), self.leaf_stagger)
            .stagger(Position::Overlap(self.petal_overlap), group(FlowerPart::Petal, self.petal, Ease::BACK), self.petal_stagger)
            .stagger(Position::Overlap(self.centre_overlap), group(FlowerPart::Centre, self.centre, Ease::ELASTIC), 0.0)
            .add(Position::At(0.0), counter)
    }

    /// End of the flower growth alone.
    pub fn flower_duration(&self) -> f64 {
        let span = |part: FlowerPart, stagger: f64, duration: f64| {
            (part.count().saturating_sub(1)) as f64 * stagger + duration
        };
        let leaves = (self.stem - self.leaf_overlap).max(0.0) + span(FlowerPart::Leaf, self.leaf_stagger, self.leaf);
        let petals = (leaves - self.petal_overlap).max(0.0) + span(FlowerPart::Petal, self.petal_stagger, self.petal);
        (petals - self.centre_overlap).max(0.0) + self.centre
    }

    /// Earliest moment completion can be signalled.
    pub fn minimum_duration(&self) -> f64 {
        self.flower_duration().max(self.counter) + self.fade
    }
}

/// Where the choreography draws itself.
pub trait PreLoaderView: Clone + 'static {
    fn pose(&self, part: FlowerPart, index: usize, pose: &Pose);
    fn progress(&self, percent: u8);
    /// Overlay opacity during the fade out.
    fn fade(&self, opacity: f64);
}

pub struct PreLoaderSequencer {
    timing: PreLoaderTiming,
    state: Rc<RefCell<PreLoaderState>>,
    tweens: Rc<RefCell<Vec<TweenId>>>,
    started: bool,
}

impl PreLoaderSequencer {
    pub fn new(timing: PreLoaderTiming) -> Self {
        Self {
            timing,
            state: Rc::new(RefCell::new(PreLoaderState::default())),
            tweens: Rc::new(RefCell::new(Vec::new())),
            started: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> PreLoaderState {
        *self.state.borrow()
    }

    /// Plays the choreography. `on_complete` runs once, after the fade,
    /// outside of the ticker.
    pub fn start<V: PreLoaderView>(&mut self, ticker: &mut Ticker, view: V, on_complete: impl FnOnce() + 'static) {
        if self.started {
            warn!("Preloader already started");
            return;
        }
        self.started = true;

        for part in FlowerPart::ALL {
            for index in 0..part.count() {
                view.pose(part, index, &part.hidden());
            }
        }
        view.progress(0);
        view.fade(1.0);

        let timeline = self.timing.choreography(&view, self.state.clone());
        debug!(
            "Preloader choreography of {} tweens over {:.2}s, completing after {:.2}s",
            timeline.len(),
            timeline.duration(),
            self.timing.minimum_duration()
        );

        let fade_secs = self.timing.fade;
        let state = self.state.clone();
        let tweens = self.tweens.clone();
        let ids = timeline.play(ticker, move |ticker| {
            let fade_view = view.clone();
            let fade = Tween::new(fade_secs)
                .ease(Ease::Power2InOut)
                .on_update(move |v| fade_view.fade(1.0 - v))
                .on_complete(move |ticker| {
                    if state.borrow_mut().complete() {
                        ticker.defer(on_complete);
                    }
                });
            tweens.borrow_mut().push(ticker.spawn(fade));
        });
        self.tweens.borrow_mut().extend(ids);
    }

    /// Hands every tween the choreography spawned so far to `cancel`.
    pub fn cancel<C>(&self, cancel: C)
    where
        C: FnOnce(Vec<TweenId>),
    {
        cancel(std::mem::take(&mut *self.tweens.borrow_mut()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ticker::run_for;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    struct FakeView {
        poses: Rc<RefCell<HashMap<(FlowerPart, usize), Pose>>>,
        progress: Rc<RefCell<Vec<u8>>>,
        opacity: Rc<Cell<f64>>,
    }

    impl PreLoaderView for FakeView {
        fn pose(&self, part: FlowerPart, index: usize, pose: &Pose) {
            self.poses.borrow_mut().insert((part, index), *pose);
        }

        fn progress(&self, percent: u8) {
            self.progress.borrow_mut().push(percent);
        }

        fn fade(&self, opacity: f64) {
            self.opacity.set(opacity);
        }
    }

    fn started() -> (Ticker, PreLoaderSequencer, FakeView, Rc<Cell<u32>>) {
        let mut ticker = Ticker::new();
        let mut sequencer = PreLoaderSequencer::new(PreLoaderTiming::default());
        let view = FakeView::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        sequencer.start(&mut ticker, view.clone(), move || counter.set(counter.get() + 1));
        (ticker, sequencer, view, calls)
    }

    #[test]
    fn default_timing_matches_the_flower() {
        let timing = PreLoaderTiming::default();
        assert!((timing.flower_duration() - 2.7).abs() < 1e-9);
        assert!((timing.minimum_duration() - 4.8).abs() < 1e-9);
    }

    #[test]
    fn completes_exactly_once_after_the_minimum() {
        let (mut ticker, sequencer, view, calls) = started();
        run_for(&mut ticker, 4.7, 1.0 / 60.0);
        assert_eq!(calls.get(), 0);
        assert!(!sequencer.state().completed);

        run_for(&mut ticker, 0.3, 1.0 / 60.0);
        assert_eq!(calls.get(), 1);
        assert!(sequencer.state().completed);
        assert_eq!(view.opacity.get(), 0.0);

        run_for(&mut ticker, 5.0, 1.0 / 60.0);
        assert_eq!(calls.get(), 1);
        assert!(ticker.is_empty());
    }

    #[test]
    fn progress_is_monotonic_and_reaches_100() {
        let (mut ticker, _sequencer, view, _calls) = started();
        run_for(&mut ticker, 6.0, 0.037);
        let progress = view.progress.borrow();
        assert_eq!(progress.first(), Some(&0));
        assert_eq!(progress.last(), Some(&100));
        assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn flower_ends_at_rest() {
        let (mut ticker, _sequencer, view, _calls) = started();
        assert_eq!(view.poses.borrow()[&(FlowerPart::Stem, 0)].scale_y, 0.0);
        assert_eq!(view.poses.borrow()[&(FlowerPart::Petal, 5)].opacity, 0.0);
        run_for(&mut ticker, 3.0, 1.0 / 60.0);
        for part in FlowerPart::ALL {
            for index in 0..part.count() {
                assert_eq!(view.poses.borrow()[&(part, index)], Pose::REST, "{:?} {}", part, index);
            }
        }
    }

    #[test]
    fn cancel_prevents_completion() {
        let (mut ticker, sequencer, _view, calls) = started();
        run_for(&mut ticker, 2.0, 1.0 / 60.0);
        sequencer.cancel(|ids| ticker.cancel_all(ids));
        assert!(ticker.is_empty());
        run_for(&mut ticker, 10.0, 0.1);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn second_start_is_ignored() {
        let (mut ticker, mut sequencer, view, calls) = started();
        let live = ticker.len();
        sequencer.start(&mut ticker, view, || {});
        assert_eq!(ticker.len(), live);
        run_for(&mut ticker, 6.0, 1.0 / 60.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn state_rules() {
        let mut state = PreLoaderState::default();
        assert!(state.advance(40));
        assert!(!state.advance(30));
        assert!(state.advance(250));
        assert_eq!(state.progress, 100);
        assert!(state.complete());
        assert!(!state.complete());
    }
}

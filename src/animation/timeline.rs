//! Sequencing of tweens on a shared clock.

use super::ticker::{Ticker, TweenId};
use super::tween::Tween;

/// Where an entry starts, relative to the timeline built so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Absolute offset from the start of the timeline.
    At(f64),
    /// When everything added so far has finished.
    AfterPrevious,
    /// That many seconds before everything added so far has finished.
    Overlap(f64),
}

#[derive(Default)]
pub struct Timeline {
    entries: Vec<(f64, Tween)>,
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, position: Position) -> f64 {
        match position {
            Position::At(at) => at.max(0.0),
            Position::AfterPrevious => self.end,
            Position::Overlap(overlap) => (self.end - overlap).max(0.0),
        }
    }

    fn push(&mut self, start: f64, tween: Tween) {
        if let Some(total) = tween.total_duration() {
            self.end = self.end.max(start + total);
        }
        self.entries.push((start, tween));
    }

    pub fn add(mut self, position: Position, tween: Tween) -> Self {
        let start = self.resolve(position);
        self.push(start, tween);
        self
    }

    /// Adds a group whose members start `each` seconds apart. Empty groups
    /// leave the timeline untouched.
    pub fn stagger(mut self, position: Position, tweens: Vec<Tween>, each: f64) -> Self {
        if tweens.is_empty() {
            return self;
        }
        let start = self.resolve(position);
        for (index, tween) in tweens.into_iter().enumerate() {
            self.push(start + index as f64 * each, tween);
        }
        self
    }

    /// End of the last finite entry.
    pub fn duration(&self) -> f64 {
        self.end
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Hands every entry to the ticker. `on_complete` runs once the whole
    /// timeline has played. The returned ids include the completion marker.
    pub fn play(
        self,
        ticker: &mut Ticker,
        on_complete: impl FnOnce(&mut Ticker) + 'static,
    ) -> Vec<TweenId> {
        let mut ids = Vec::with_capacity(self.entries.len() + 1);
        for (start, mut tween) in self.entries {
            tween.shift_delay(start);
            ids.push(ticker.spawn(tween));
        }
        ids.push(ticker.spawn(Tween::new(0.0).delay(self.end).on_complete(on_complete)));
        ids
    }
}

//! Arena of live tweens advanced once per frame.

use slotmap::{new_key_type, SlotMap};

use super::tween::{Tween, TweenStatus};

new_key_type! {
    /// Handle to a running tween. Stale handles are harmless.
    pub struct TweenId;
}

pub type Notification = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct Ticker {
    tweens: SlotMap<TweenId, Tween>,
    outbox: Vec<Notification>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, tween: Tween) -> TweenId {
        self.tweens.insert(tween)
    }

    /// Drops the tween without running its completion. Returns false when the
    /// tween already finished or was cancelled before.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        self.tweens.remove(id).is_some()
    }

    pub fn cancel_all<I: IntoIterator<Item = TweenId>>(&mut self, ids: I) {
        for id in ids {
            self.cancel(id);
        }
    }

    #[cfg(test)]
    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens.contains_key(id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Queues a callback that must run outside the ticker, e.g. one that may
    /// unmount components which cancel their own tweens.
    pub fn defer(&mut self, f: impl FnOnce() + 'static) {
        self.outbox.push(Box::new(f));
    }

    /// Advances every live tween by `dt` seconds. Completion callbacks run
    /// after all updates, tweens they spawn start on the next tick. Returns
    /// the deferred notifications for the caller to run.
    pub fn tick(&mut self, dt: f64) -> Vec<Notification> {
        let ids: Vec<TweenId> = self.tweens.keys().collect();
        let mut finished = Vec::new();
        for id in ids {
            if let Some(tween) = self.tweens.get_mut(id) {
                if tween.advance(dt) == TweenStatus::Finished {
                    finished.push(id);
                }
            }
        }
        for id in finished {
            if let Some(mut tween) = self.tweens.remove(id) {
                if let Some(complete) = tween.take_on_complete() {
                    complete(self);
                }
            }
        }
        std::mem::take(&mut self.outbox)
    }
}

/// Test helper: ticks in fixed steps and runs deferred notifications.
#[cfg(test)]
pub(crate) fn run_for(ticker: &mut Ticker, seconds: f64, step: f64) {
    let mut remaining = seconds;
    while remaining > 1e-12 {
        let dt = step.min(remaining);
        for note in ticker.tick(dt) {
            note();
        }
        remaining -= dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tween::Repeat;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn finished_tweens_leave_the_arena() {
        let mut ticker = Ticker::new();
        let id = ticker.spawn(Tween::new(0.5));
        ticker.tick(0.25);
        assert!(ticker.is_active(id));
        ticker.tick(0.5);
        assert!(!ticker.is_active(id));
        assert!(ticker.is_empty());
    }

    #[test]
    fn cancel_skips_completion() {
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        let mut ticker = Ticker::new();
        let id = ticker.spawn(Tween::new(1.0).on_complete(move |_| flag.set(true)));
        assert!(ticker.cancel(id));
        assert!(!ticker.cancel(id));
        ticker.tick(2.0);
        assert!(!done.get());
    }

    #[test]
    fn completion_can_chain_tweens() {
        let mut ticker = Ticker::new();
        ticker.spawn(Tween::new(1.0).on_complete(|t| {
            t.spawn(Tween::new(1.0).repeat(Repeat::Forever));
        }));
        ticker.tick(1.5);
        assert_eq!(ticker.len(), 1);
    }

    #[test]
    fn deferred_notifications_are_returned_not_run() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut ticker = Ticker::new();
        ticker.spawn(Tween::new(0.1).on_complete(move |t| {
            t.defer(move || counter.set(counter.get() + 1));
        }));
        let notes = ticker.tick(1.0);
        assert_eq!(hits.get(), 0);
        assert_eq!(notes.len(), 1);
        for note in notes {
            note();
        }
        assert_eq!(hits.get(), 1);
        assert!(ticker.tick(1.0).is_empty());
    }
}

use super::easing::Ease;
use super::ticker::Ticker;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Repeat {
    Once,
    Forever,
}

impl Repeat {
    fn cycles(self) -> Option<u32> {
        match self {
            Repeat::Once => Some(1),
            Repeat::Forever => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenStatus {
    Running,
    Finished,
}

pub type UpdateFn = Box<dyn FnMut(f64)>;
pub type RepeatFn = Box<dyn FnMut(u32)>;
pub type CompleteFn = Box<dyn FnOnce(&mut Ticker)>;

/// A time based interpolation from 0 to 1.
///
/// The tween itself knows nothing about what it animates: `on_update` receives
/// the eased progress of the current cycle and writes it wherever it wants.
/// With `yoyo` every odd cycle plays backwards. `on_repeat` fires once per
/// crossed loop boundary, before the first update of the new cycle.
pub struct Tween {
    duration: f64,
    delay: f64,
    repeat: Repeat,
    yoyo: bool,
    ease: Ease,
    elapsed: f64,
    cycle: u32,
    on_update: Option<UpdateFn>,
    on_repeat: Option<RepeatFn>,
    on_complete: Option<CompleteFn>,
}

impl Tween {
    /// Duration in seconds. Negative values are treated as zero.
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            delay: 0.0,
            repeat: Repeat::Once,
            yoyo: false,
            ease: Ease::Linear,
            elapsed: 0.0,
            cycle: 0,
            on_update: None,
            on_repeat: None,
            on_complete: None,
        }
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn on_update(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    pub fn on_repeat(mut self, f: impl FnMut(u32) + 'static) -> Self {
        self.on_repeat = Some(Box::new(f));
        self
    }

    /// Runs once the last cycle finished. Gets the ticker so it can chain
    /// follow-up tweens or defer outbound notifications.
    pub fn on_complete(mut self, f: impl FnOnce(&mut Ticker) + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub(crate) fn shift_delay(&mut self, seconds: f64) {
        self.delay = (self.delay + seconds).max(0.0);
    }

    /// Delay plus every cycle. `None` for tweens that loop forever.
    pub fn total_duration(&self) -> Option<f64> {
        self.repeat
            .cycles()
            .map(|cycles| self.delay + self.duration * cycles as f64)
    }

    pub(crate) fn take_on_complete(&mut self) -> Option<CompleteFn> {
        self.on_complete.take()
    }

    fn emit(&mut self, raw: f64) {
        let value = self.ease.apply(raw);
        if let Some(update) = self.on_update.as_mut() {
            update(value);
        }
    }

    fn enter_cycle(&mut self, cycle: u32) {
        while self.cycle < cycle {
            self.cycle += 1;
            if let Some(on_repeat) = self.on_repeat.as_mut() {
                on_repeat(self.cycle);
            }
        }
    }

    fn directed(&self, cycle: u32, progress: f64) -> f64 {
        if self.yoyo && cycle % 2 == 1 {
            1.0 - progress
        } else {
            progress
        }
    }

    pub fn advance(&mut self, dt: f64) -> TweenStatus {
        self.elapsed += dt.max(0.0);
        let local = self.elapsed - self.delay;
        if local < 0.0 {
            return TweenStatus::Running;
        }

        if self.duration <= 0.0 {
            self.emit(1.0);
            return TweenStatus::Finished;
        }

        if let Some(cycles) = self.repeat.cycles() {
            if local >= self.duration * cycles as f64 {
                let last = cycles - 1;
                self.enter_cycle(last);
                let end = self.directed(last, 1.0);
                self.emit(end);
                return TweenStatus::Finished;
            }
        }

        let cycle = (local / self.duration).floor() as u32;
        self.enter_cycle(cycle);
        let progress = (local - cycle as f64 * self.duration) / self.duration;
        let progress = self.directed(cycle, progress);
        self.emit(progress);
        TweenStatus::Running
    }
}

impl std::fmt::Debug for Tween {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("repeat", &self.repeat)
            .field("yoyo", &self.yoyo)
            .field("elapsed", &self.elapsed)
            .field("cycle", &self.cycle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl FnMut(f64) + 'static) {
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = values.clone();
        (values, move |v| sink.borrow_mut().push(v))
    }

    #[test]
    fn waits_for_delay_before_updating() {
        let (values, sink) = recorder();
        let mut tween = Tween::new(1.0).delay(0.5).on_update(sink);
        assert_eq!(tween.advance(0.25), TweenStatus::Running);
        assert!(values.borrow().is_empty());
        tween.advance(0.5);
        assert_eq!(values.borrow().len(), 1);
        assert!((values.borrow()[0] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn finishes_on_last_value() {
        let (values, sink) = recorder();
        let mut tween = Tween::new(1.0).on_update(sink);
        assert_eq!(tween.advance(0.5), TweenStatus::Running);
        assert_eq!(tween.advance(2.0), TweenStatus::Finished);
        assert_eq!(*values.borrow().last().unwrap(), 1.0);
    }

    #[test]
    fn yoyo_plays_odd_cycles_backwards() {
        let (values, sink) = recorder();
        let mut tween = Tween::new(1.0)
            .repeat(Repeat::Forever)
            .yoyo(true)
            .on_update(sink);
        tween.advance(0.25);
        tween.advance(1.0);
        assert!((values.borrow()[0] - 0.25).abs() < 1e-9);
        assert!((values.borrow()[1] - 0.75).abs() < 1e-9);
    }

    #[test]
    fn repeat_fires_once_per_boundary_before_update() {
        let log = Rc::new(RefCell::new(Vec::<String>::new()));
        let on_update = log.clone();
        let on_repeat = log.clone();
        let mut tween = Tween::new(1.0)
            .repeat(Repeat::Forever)
            .on_update(move |v| on_update.borrow_mut().push(format!("u{:.1}", v)))
            .on_repeat(move |c| on_repeat.borrow_mut().push(format!("r{}", c)));
        tween.advance(0.5);
        tween.advance(1.0);
        tween.advance(2.0);
        assert_eq!(*log.borrow(), vec!["u0.5", "r1", "u0.5", "r2", "r3", "u0.5"]);
    }

    #[test]
    fn forever_has_no_total_duration() {
        assert_eq!(Tween::new(1.0).repeat(Repeat::Forever).total_duration(), None);
        assert_eq!(Tween::new(1.0).delay(0.5).total_duration(), Some(1.5));
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut tween = Tween::new(0.0).on_update(move |v| {
            assert_eq!(v, 1.0);
            counter.set(counter.get() + 1);
        });
        assert_eq!(tween.advance(0.0), TweenStatus::Finished);
        assert_eq!(hits.get(), 1);
    }
}

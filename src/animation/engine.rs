//! The page wide ticker and its `requestAnimationFrame` loop.
//!
//! Everything runs on the browser's single thread, so the state lives in
//! thread locals. The frame loop only runs while tweens are alive.

use std::cell::{Cell, RefCell};

use gloo_render::{request_animation_frame, AnimationFrame};
use log::{debug, info, warn};

use super::ticker::{Ticker, TweenId};
use super::tween::Tween;
use crate::error::AnimationError;

/// Frames further apart than this (background tab, debugger pause) are
/// clamped so loops don't jump several cycles at once.
const MAX_FRAME_SECS: f64 = 0.1;

thread_local! {
    static INITIALIZED: Cell<bool> = Cell::new(false);
    static TICKER: RefCell<Ticker> = RefCell::new(Ticker::new());
    static PENDING_CANCEL: RefCell<Vec<TweenId>> = RefCell::new(Vec::new());
    static FRAME: RefCell<Option<AnimationFrame>> = RefCell::new(None);
    static LAST_FRAME_MS: Cell<Option<f64>> = Cell::new(None);
}

/// One time setup. Returns false when the engine was already initialized.
pub fn init() -> bool {
    if INITIALIZED.with(|flag| flag.replace(true)) {
        debug!("Animation engine already initialized");
        return false;
    }
    info!("Animation engine initialized");
    true
}

/// Runs `f` against the shared ticker. Fails when called from inside a
/// tween callback while the ticker is mid-tick.
pub fn with_ticker<R>(f: impl FnOnce(&mut Ticker) -> R) -> Result<R, AnimationError> {
    let result = TICKER.with(|ticker| match ticker.try_borrow_mut() {
        Ok(mut ticker) => Ok(f(&mut ticker)),
        Err(_) => Err(AnimationError::EngineBusy),
    });
    if result.is_ok() {
        ensure_frame();
    }
    result
}

pub fn spawn(tween: Tween) -> Result<TweenId, AnimationError> {
    with_ticker(|ticker| ticker.spawn(tween))
}

/// Cancels now, or right before the next frame if the ticker is busy.
pub fn cancel_all(ids: impl IntoIterator<Item = TweenId>) {
    let ids: Vec<TweenId> = ids.into_iter().collect();
    if ids.is_empty() {
        return;
    }
    let busy = TICKER.with(|ticker| match ticker.try_borrow_mut() {
        Ok(mut ticker) => {
            ticker.cancel_all(ids.iter().copied());
            None
        }
        Err(_) => Some(ids),
    });
    if let Some(ids) = busy {
        debug!("Ticker busy, queueing {} cancellations", ids.len());
        PENDING_CANCEL.with(|pending| pending.borrow_mut().extend(ids));
    }
}

fn ensure_frame() {
    FRAME.with(|frame| {
        if let Ok(mut frame) = frame.try_borrow_mut() {
            if frame.is_none() {
                *frame = Some(request_animation_frame(on_frame));
            }
        }
    });
}

fn on_frame(timestamp_ms: f64) {
    FRAME.with(|frame| frame.borrow_mut().take());

    let dt = match LAST_FRAME_MS.with(|last| last.replace(Some(timestamp_ms))) {
        Some(previous) => ((timestamp_ms - previous) / 1000.0).clamp(0.0, MAX_FRAME_SECS),
        None => 0.0,
    };

    let outcome = TICKER.with(|ticker| match ticker.try_borrow_mut() {
        Ok(mut ticker) => {
            let cancelled = PENDING_CANCEL.with(|pending| std::mem::take(&mut *pending.borrow_mut()));
            ticker.cancel_all(cancelled);
            let notes = ticker.tick(dt);
            Some((notes, ticker.is_empty()))
        }
        Err(_) => None,
    });

    let Some((notes, idle)) = outcome else {
        warn!("Skipped a frame, ticker still borrowed");
        ensure_frame();
        return;
    };

    for note in notes {
        note();
    }

    let still_idle = TICKER.with(|ticker| ticker.try_borrow().map(|t| t.is_empty()).unwrap_or(idle));
    if still_idle {
        LAST_FRAME_MS.with(|last| last.set(None));
    } else {
        ensure_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        assert!(init());
        assert!(!init());
        assert!(!init());
        assert!(INITIALIZED.with(Cell::get));
    }

    #[test]
    fn cancel_while_ticking_is_queued_for_the_next_frame() {
        let id = TICKER.with(|ticker| ticker.borrow_mut().spawn(Tween::new(1.0)));
        TICKER.with(|ticker| {
            let _ticking = ticker.borrow_mut();
            cancel_all([id]);
        });
        assert_eq!(PENDING_CANCEL.with(|pending| pending.borrow().clone()), vec![id]);
        assert!(TICKER.with(|ticker| !ticker.borrow().is_empty()));

        // the ticker is idle afterwards, so no further frame is requested
        on_frame(16.0);
        assert!(PENDING_CANCEL.with(|pending| pending.borrow().is_empty()));
        assert!(TICKER.with(|ticker| ticker.borrow().is_empty()));
    }

    #[test]
    fn cancel_when_idle_applies_at_once() {
        let id = TICKER.with(|ticker| ticker.borrow_mut().spawn(Tween::new(1.0)));
        cancel_all([id]);
        assert!(TICKER.with(|ticker| ticker.borrow().is_empty()));
        assert!(PENDING_CANCEL.with(|pending| pending.borrow().is_empty()));
    }
}

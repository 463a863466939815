// src/clock.rs
// Repeating-timer abstraction. Dropping the handle cancels the timer.

use gloo_timers::callback::Interval;

pub trait Clock {
    type Handle;

    /// Calls `tick` every `period_ms` until the returned handle is dropped.
    fn every<F>(&self, period_ms: u32, tick: F) -> Self::Handle
    where
        F: FnMut() + 'static;
}

/// setInterval-backed clock for the running app.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    type Handle = Interval;

    fn every<F>(&self, period_ms: u32, tick: F) -> Interval
    where
        F: FnMut() + 'static,
    {
        Interval::new(period_ms, tick)
    }
}

#[cfg(test)]
pub use manual::ManualClock;


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn fires_once_per_period() {
        let clock = ManualClock::new();
        let hits = Rc::new(Cell::new(0u32));
        let h = hits.clone();
        let _handle = clock.every(2000, move || h.set(h.get() + 1));

        clock.advance(1999);
        assert_eq!(hits.get(), 0);
        clock.advance(1);
        assert_eq!(hits.get(), 1);
        clock.advance(6000);
        assert_eq!(hits.get(), 4);
    }

    #[test]
    fn dropping_handle_cancels() {
        let clock = ManualClock::new();
        let hits = Rc::new(Cell::new(0u32));
        let h = hits.clone();
        let handle = clock.every(100, move || h.set(h.get() + 1));
        assert_eq!(clock.live_timers(), 1);

        clock.advance(250);
        drop(handle);
        assert_eq!(clock.live_timers(), 0);
        clock.advance(1000);
        assert_eq!(hits.get(), 2);
    }
}

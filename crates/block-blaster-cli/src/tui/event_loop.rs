use std::time::{Duration, Instant};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Produces ticks at a fixed interval, crossterm events as they arrive, and a
/// render request after anything that may have changed the screen.
///
/// Without a tick interval the loop only waits for crossterm events.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            // first frame
            dirty: true,
        }
    }

    /// Starts ticking every `interval`. The elapsed time of the next tick is
    /// measured from now.
    pub(super) fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = Some(interval);
        self.last_tick = Instant::now();
    }

    /// Blocks until the next tick, render or crossterm event.
    ///
    /// Ticks take priority. A render follows every tick and every crossterm event.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(elapsed) = self.take_tick(now) {
                return Ok(TuiEvent::Tick(elapsed));
            }
            if self.take_render() {
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(TuiEvent::Crossterm(event::read()?));
        }
    }

    /// Returns the measured time since the previous tick once the tick interval has passed.
    fn take_tick(&mut self, now: Instant) -> Option<Duration> {
        let interval = self.tick_interval?;
        let elapsed = now.duration_since(self.last_tick);
        if elapsed < interval {
            return None;
        }
        self.last_tick = now;
        self.dirty = true;
        Some(elapsed)
    }

    fn take_render(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Time left until the next tick is due.
    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.last_tick + self.tick_interval?;
        Some(next_tick_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(16);

    #[test]
    fn test_no_tick_without_interval() {
        let mut events = EventLoop::new();
        let later = events.last_tick + Duration::from_secs(10);
        assert_eq!(events.take_tick(later), None);
        assert_eq!(events.compute_timeout(later), None);
    }

    #[test]
    fn test_tick_carries_measured_elapsed() {
        let mut events = EventLoop::new();
        events.set_tick_interval(INTERVAL);
        let start = events.last_tick;

        assert_eq!(events.take_tick(start + Duration::from_millis(10)), None);

        let late = start + Duration::from_millis(40);
        assert_eq!(events.take_tick(late), Some(Duration::from_millis(40)));
        assert_eq!(events.last_tick, late);

        assert_eq!(events.take_tick(late + INTERVAL), Some(INTERVAL));
    }

    #[test]
    fn test_render_once_per_change() {
        let mut events = EventLoop::new();
        assert!(events.take_render());
        assert!(!events.take_render());

        events.set_tick_interval(INTERVAL);
        let start = events.last_tick;
        assert_eq!(events.take_tick(start + INTERVAL), Some(INTERVAL));
        assert!(events.take_render());
        assert!(!events.take_render());
    }

    #[test]
    fn test_timeout_counts_down_to_next_tick() {
        let mut events = EventLoop::new();
        events.set_tick_interval(INTERVAL);
        let start = events.last_tick;
        assert_eq!(events.compute_timeout(start), Some(INTERVAL));
        assert_eq!(
            events.compute_timeout(start + Duration::from_millis(10)),
            Some(Duration::from_millis(6))
        );
        assert_eq!(
            events.compute_timeout(start + Duration::from_millis(40)),
            Some(Duration::ZERO)
        );
    }
}

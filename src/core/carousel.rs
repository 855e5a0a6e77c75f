//! Testimonial carousel — autoplay with manual override.
//!
//! A small state machine: in `Auto` the index advances by one each interval;
//! any manual navigation jumps the index, suspends autoplay, and schedules a
//! one-shot resume after a cooldown.  A newer manual action restarts the
//! cooldown.  Deadlines are plain `Instant`s evaluated by [`Carousel::tick`],
//! so the widget owns its timers and nothing outlives it.

use std::time::{Duration, Instant};

/// Autoplay phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Empty testimonial list — navigation and timers are disabled entirely.
    Disabled,
    /// Autoplay turned off (config / CLI); manual navigation only.
    Manual,
    /// Timer running; advances when `next_at` elapses.
    Auto { next_at: Instant },
    /// Suspended by a manual action; returns to `Auto` at `resume_at`.
    Paused { resume_at: Instant },
}

#[derive(Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    mode: Mode,
    interval: Duration,
    cooldown: Duration,
}

impl Carousel {
    /// `autoplay = false` disables the timer permanently (manual mode).
    pub fn new(len: usize, interval: Duration, cooldown: Duration, autoplay: bool, now: Instant) -> Self {
        let mode = if len == 0 {
            Mode::Disabled
        } else if autoplay {
            Mode::Auto { next_at: now + interval }
        } else {
            Mode::Manual
        };
        Self {
            len,
            index: 0,
            mode,
            interval,
            cooldown,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True while the autoplay timer is actively running.
    pub fn is_auto(&self) -> bool {
        matches!(self.mode, Mode::Auto { .. })
    }

    /// Drive the timers.  Call once per app tick.
    pub fn tick(&mut self, now: Instant) {
        match self.mode {
            Mode::Disabled | Mode::Manual => {}
            Mode::Auto { next_at } => {
                if now >= next_at {
                    self.index = (self.index + 1) % self.len;
                    self.mode = Mode::Auto { next_at: now + self.interval };
                }
            }
            Mode::Paused { resume_at } => {
                if now >= resume_at {
                    self.mode = Mode::Auto { next_at: now + self.interval };
                }
            }
        }
    }

    pub fn next(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.go_to((self.index + 1) % self.len, now);
    }

    pub fn prev(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.go_to((self.index + self.len - 1) % self.len, now);
    }

    /// Manual jump: set the index, suspend autoplay, and (re)start the
    /// resume cooldown.  Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if self.len == 0 || index >= self.len {
            return;
        }
        self.index = index;
        if !matches!(self.mode, Mode::Manual) {
            self.mode = Mode::Paused { resume_at: now + self.cooldown };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(5);
    const COOLDOWN: Duration = Duration::from_secs(10);

    fn carousel(len: usize, now: Instant) -> Carousel {
        Carousel::new(len, INTERVAL, COOLDOWN, true, now)
    }

    #[test]
    fn auto_advances_by_one_after_interval() {
        let t0 = Instant::now();
        let mut c = carousel(4, t0);
        assert_eq!(c.index(), 0);

        c.tick(t0 + Duration::from_secs(4));
        assert_eq!(c.index(), 0);

        c.tick(t0 + INTERVAL);
        assert_eq!(c.index(), 1);
        assert!(c.is_auto());
    }

    #[test]
    fn auto_wraps_modulo_length() {
        let t0 = Instant::now();
        let mut c = carousel(3, t0);
        for i in 1..=3 {
            c.tick(t0 + INTERVAL * i);
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn manual_go_to_sets_index_and_pauses() {
        let t0 = Instant::now();
        let mut c = carousel(4, t0);
        c.go_to(2, t0);
        assert_eq!(c.index(), 2);
        assert!(!c.is_auto());

        // Still paused just before the cooldown elapses; no auto-advance.
        c.tick(t0 + Duration::from_secs(9));
        assert_eq!(c.index(), 2);
        assert!(!c.is_auto());

        // Cooldown elapses → autoplay resumes with a fresh interval.
        let t1 = t0 + COOLDOWN;
        c.tick(t1);
        assert!(c.is_auto());
        assert_eq!(c.index(), 2);
        c.tick(t1 + INTERVAL);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn new_manual_action_restarts_cooldown() {
        let t0 = Instant::now();
        let mut c = carousel(4, t0);
        c.next(t0);
        assert_eq!(c.index(), 1);

        // A second manual action shortly before the first cooldown fires.
        let t1 = t0 + Duration::from_secs(8);
        c.prev(t1);
        assert_eq!(c.index(), 0);

        // The original deadline passes — still paused.
        c.tick(t0 + COOLDOWN);
        assert!(!c.is_auto());

        // The restarted deadline passes — auto again.
        c.tick(t1 + COOLDOWN);
        assert!(c.is_auto());
    }

    #[test]
    fn prev_wraps_from_zero() {
        let t0 = Instant::now();
        let mut c = carousel(4, t0);
        c.prev(t0);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn empty_list_disables_the_widget() {
        let t0 = Instant::now();
        let mut c = carousel(0, t0);
        assert_eq!(c.mode(), Mode::Disabled);
        c.tick(t0 + INTERVAL);
        c.next(t0);
        c.prev(t0);
        c.go_to(0, t0);
        assert_eq!(c.index(), 0);
        assert_eq!(c.mode(), Mode::Disabled);
    }

    #[test]
    fn autoplay_off_stays_manual() {
        let t0 = Instant::now();
        let mut c = Carousel::new(4, INTERVAL, COOLDOWN, false, t0);
        assert_eq!(c.mode(), Mode::Manual);
        c.tick(t0 + INTERVAL * 10);
        assert_eq!(c.index(), 0);

        c.next(t0);
        assert_eq!(c.index(), 1);
        assert_eq!(c.mode(), Mode::Manual);
        c.tick(t0 + COOLDOWN * 2);
        assert_eq!(c.mode(), Mode::Manual);
    }

    #[test]
    fn out_of_range_go_to_is_ignored() {
        let t0 = Instant::now();
        let mut c = carousel(4, t0);
        c.go_to(7, t0);
        assert_eq!(c.index(), 0);
        assert!(c.is_auto());
    }
}

//! Row-level smooth scroll with exponential ease-out.
//!
//! Section jumps land the logical scroll position immediately and inject a
//! row displacement equal to the distance travelled; each tick the
//! displacement decays toward zero, so the page visibly slides into place
//! with deceleration.  Wheel/arrow scrolling moves the position directly.

/// Vertical page scroll position with an eased jump animation.
#[derive(Debug, Clone)]
pub struct PageScroll {
    /// Logical scroll-top row (the settle target).
    top: usize,
    /// Current row displacement away from `top`.  Decays to zero.
    offset: f64,
    /// Damping: `offset *= (1 - speed)` each tick.
    speed: f64,
    /// When false, jumps land instantly (reduced motion).
    smooth: bool,
}

impl PageScroll {
    pub fn new(smooth: bool) -> Self {
        Self {
            top: 0,
            offset: 0.0,
            speed: 0.35,
            smooth,
        }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    /// Jump to `row`, easing from the current rendered position.
    pub fn jump_to(&mut self, row: usize) {
        if self.smooth {
            // Start rendering from where we are now and decay toward `row`.
            self.offset += self.top as f64 - row as f64;
        }
        self.top = row;
    }

    /// Direct scroll by `delta` rows (wheel / arrows), clamped to `[0, max]`.
    /// Cancels any running jump animation so input never fights the easing.
    pub fn scroll_by(&mut self, delta: isize, max: usize) {
        self.offset = 0.0;
        let next = self.top as isize + delta;
        self.top = next.clamp(0, max as isize) as usize;
    }

    /// Re-clamp after a page reflow (resize, content change).
    pub fn clamp(&mut self, max: usize) {
        if self.top > max {
            self.top = max;
        }
    }

    /// Decay the displacement toward zero.  Call once per tick.
    pub fn tick(&mut self) {
        self.offset *= 1.0 - self.speed;
        if self.offset.abs() < 0.4 {
            self.offset = 0.0;
        }
    }

    /// The row the renderer should actually use this frame.
    pub fn rendered_top(&self) -> usize {
        let row = self.top as f64 + self.offset;
        if row <= 0.0 {
            0
        } else {
            row.round() as usize
        }
    }

    /// True while the jump animation is still visibly moving.
    pub fn is_animating(&self) -> bool {
        self.offset != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_jump_starts_at_old_row_and_settles_at_target() {
        let mut scroll = PageScroll::new(true);
        scroll.scroll_by(40, 1000);
        scroll.jump_to(100);

        assert_eq!(scroll.rendered_top(), 40);
        assert!(scroll.is_animating());

        for _ in 0..60 {
            scroll.tick();
        }
        assert_eq!(scroll.rendered_top(), 100);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn reduced_motion_jumps_instantly() {
        let mut scroll = PageScroll::new(false);
        scroll.jump_to(100);
        assert_eq!(scroll.rendered_top(), 100);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn wheel_scroll_is_clamped_and_cancels_animation() {
        let mut scroll = PageScroll::new(true);
        scroll.jump_to(50);
        scroll.scroll_by(-200, 80);
        assert_eq!(scroll.top(), 0);
        assert!(!scroll.is_animating());
        scroll.scroll_by(500, 80);
        assert_eq!(scroll.top(), 80);
    }
}

//! Time-based tween for smooth row scrolling

use std::time::{Duration, Instant};

/// Length of one arrow-press scroll animation.
pub const SCROLL_DURATION: Duration = Duration::from_millis(360);

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    active: bool,
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self {
            active: false,
            from: 0.0,
            to: 0.0,
            started_at: Instant::now(),
            duration: SCROLL_DURATION,
        }
    }
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self, from: f32, to: f32, now: Instant) {
        self.active = true;
        self.from = from;
        self.to = to;
        self.started_at = now;
    }

    /// Offset for `now`, or `None` when inactive. The final frame returns the
    /// exact target and deactivates the animator.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.to);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        Some(self.from + (self.to - self.from) * ease_out(t))
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}

/// Quadratic ease-out.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

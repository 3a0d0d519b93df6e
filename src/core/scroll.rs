use super::ease::{lerp, Ease};

/// Time-based scroll animation toward a fixed offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTween {
    pub from: f64,
    pub to: f64,
    pub duration_secs: f32,
    pub ease: Ease,
    elapsed_secs: f32,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_secs: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_secs: duration_secs.max(0.0),
            ease,
            elapsed_secs: 0.0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_secs >= self.duration_secs
    }

    /// Advance by `dt_sec` and return the scroll offset to apply.
    pub fn advance(&mut self, dt_sec: f32) -> f64 {
        self.elapsed_secs = (self.elapsed_secs + dt_sec.max(0.0)).min(self.duration_secs);
        let t = if self.duration_secs <= f32::EPSILON {
            1.0
        } else {
            self.elapsed_secs / self.duration_secs
        };
        let k = self.ease.apply(t) as f64;
        self.from + (self.to - self.from) * k
    }
}

/// Progress of a section through the viewport: 0 when its top meets the
/// viewport bottom, 1 when its bottom leaves the viewport top.
pub fn section_progress(top: f32, height: f32, viewport_height: f32) -> f32 {
    let travel = viewport_height + height;
    if travel <= f32::EPSILON {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Backdrop offset as a percentage of its own height for `progress`.
pub fn backdrop_shift_pct(progress: f32, travel_pct: f32) -> f32 {
    lerp(0.0, travel_pct, progress.clamp(0.0, 1.0))
}

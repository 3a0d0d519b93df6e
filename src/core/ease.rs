/// Easing curves used by the scroll timeline and smooth-scroll tweens.
///
/// Names follow the common `powerN` family: `power1` is quadratic, `power2`
/// is cubic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    /// No easing.
    #[default]
    Linear,
    /// Quadratic ease-in/out.
    Power1InOut,
    /// Cubic ease-out.
    Power2Out,
    /// Cubic ease-in/out.
    Power2InOut,
}

impl Ease {
    /// Map normalized progress `t` (clamped to `[0, 1]`) through this curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Linear remap of `value` from `[in_start, in_end]` onto `[out_start, out_end]`,
/// clamped at both ends.
#[inline]
pub fn remap_clamped(value: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    let span = in_end - in_start;
    if span.abs() <= f32::EPSILON {
        return if value < in_start { out_start } else { out_end };
    }
    lerp(out_start, out_end, ((value - in_start) / span).clamp(0.0, 1.0))
}

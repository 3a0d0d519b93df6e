use super::constants::{STAR_ACCENT_PROBABILITY, STAR_DRIFT_PX, STAR_FIELD_EXTENT, STAR_TIERS};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarColor {
    White,
    Accent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarPoint {
    pub x: u32,
    pub y: u32,
    pub color: StarColor,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldConfig {
    /// Coordinates are drawn from `0..extent` on both axes.
    pub extent: u32,
    pub accent_probability: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            extent: STAR_FIELD_EXTENT,
            accent_probability: STAR_ACCENT_PROBABILITY,
        }
    }
}

/// Produce `n` random star points.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    config: &StarfieldConfig,
) -> Vec<StarPoint> {
    let extent = config.extent.max(1);
    let p = config.accent_probability.clamp(0.0, 1.0);
    (0..n)
        .map(|_| {
            let color = if rng.gen_bool(p) {
                StarColor::Accent
            } else {
                StarColor::White
            };
            StarPoint {
                x: rng.gen_range(0..extent),
                y: rng.gen_range(0..extent),
                color,
            }
        })
        .collect()
}

/// One size tier of the decorative starfield.
#[derive(Clone, Debug, PartialEq)]
pub struct StarLayer {
    pub points: Vec<StarPoint>,
    /// Seconds for one full drift loop.
    pub drift_secs: f32,
}

impl StarLayer {
    /// Upward drift in pixels at `elapsed_secs`, looping every `drift_secs`.
    pub fn drift_offset(&self, elapsed_secs: f64) -> f32 {
        drift_offset(elapsed_secs, self.drift_secs)
    }

    /// The tier plus a copy one drift length further down. When the drift
    /// wraps, the copy sits exactly where the originals started.
    pub fn looped_points(&self) -> Vec<StarPoint> {
        let shift = STAR_DRIFT_PX as u32;
        let copies = self.points.iter().map(|p| StarPoint {
            y: p.y + shift,
            ..*p
        });
        self.points.iter().copied().chain(copies).collect()
    }
}

pub fn drift_offset(elapsed_secs: f64, loop_secs: f32) -> f32 {
    if loop_secs <= 0.0 {
        return 0.0;
    }
    let phase = (elapsed_secs.max(0.0) % loop_secs as f64) / loop_secs as f64;
    -(phase as f32) * STAR_DRIFT_PX
}

/// Small, medium and large tiers, generated once and kept for the lifetime of
/// the owner.
#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    pub layers: Vec<StarLayer>,
}

impl Starfield {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &StarfieldConfig) -> Self {
        let layers = STAR_TIERS
            .iter()
            .map(|&(count, drift_secs)| StarLayer {
                points: generate(rng, count, config),
                drift_secs,
            })
            .collect();
        Self { layers }
    }
}

use super::constants::{
    ENTRANCE_RISE_PX, GALLERY_ACTIVATION_RATIO, GALLERY_BAND_INSET_BOTTOM,
    GALLERY_BAND_INSET_TOP, GALLERY_INACTIVE_OPACITY, GALLERY_INACTIVE_SCALE,
};

/// Axis-aligned box in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right >= left && bottom >= top).then(|| Rect::new(left, top, right - left, bottom - top))
    }
}

/// Region of the viewport an observer watches, as fractions of the viewport
/// height trimmed from the top and bottom edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub inset_top: f32,
    pub inset_bottom: f32,
}

impl Band {
    pub const FULL: Band = Band {
        inset_top: 0.0,
        inset_bottom: 0.0,
    };

    pub const fn new(inset_top: f32, inset_bottom: f32) -> Self {
        Self {
            inset_top,
            inset_bottom,
        }
    }

    pub fn rect(&self, viewport_width: f32, viewport_height: f32) -> Rect {
        let top = viewport_height * self.inset_top;
        let bottom = viewport_height * (1.0 - self.inset_bottom);
        Rect::new(0.0, top, viewport_width, bottom - top)
    }
}

/// Source of the current viewport-relative box of an observed element.
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

impl Bounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Fraction of `target` inside `band`. Zero-area targets report 1.0 while
/// touching the band, matching the browser intersection primitive.
pub fn intersection_ratio(target: &Rect, band: &Rect) -> f32 {
    match target.intersection(band) {
        None => 0.0,
        Some(hit) => {
            let area = target.area();
            if area <= f32::EPSILON {
                1.0
            } else {
                (hit.area() / area).clamp(0.0, 1.0)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandConfig {
    pub band: Band,
    /// Minimum intersection ratio for the element to count as inside. A
    /// threshold of zero counts any overlap, including edge contact.
    pub threshold: f32,
}

impl BandConfig {
    pub fn gallery() -> Self {
        Self {
            band: Band::new(GALLERY_BAND_INSET_TOP, GALLERY_BAND_INSET_BOTTOM),
            threshold: GALLERY_ACTIVATION_RATIO,
        }
    }
}

impl Default for BandConfig {
    fn default() -> Self {
        Self::gallery()
    }
}

/// Polling stand-in for a native intersection observer: feed it the element's
/// box every frame and it yields a value only when inside/outside flips.
#[derive(Clone, Debug)]
pub struct BandObserver {
    config: BandConfig,
    inside: Option<bool>,
}

impl BandObserver {
    pub fn new(config: BandConfig) -> Self {
        Self {
            config,
            inside: None,
        }
    }

    pub fn is_inside(&self) -> bool {
        self.inside.unwrap_or(false)
    }

    pub fn evaluate(&self, target: &Rect, viewport_width: f32, viewport_height: f32) -> bool {
        let band = self.config.band.rect(viewport_width, viewport_height);
        if target.intersection(&band).is_none() {
            return false;
        }
        intersection_ratio(target, &band) >= self.config.threshold
    }

    /// First poll always reports; later polls report only changes.
    pub fn poll(
        &mut self,
        element: &impl Bounds,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Option<bool> {
        let now = self.evaluate(&element.bounds(), viewport_width, viewport_height);
        if self.inside == Some(now) {
            return None;
        }
        self.inside = Some(now);
        Some(now)
    }
}

/// Side effect requested when an activation flag flips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Play,
    Pause,
}

/// Declarative look of a gallery item for its activation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationLook {
    pub scale: f32,
    pub opacity: f32,
    pub play_affordance_visible: bool,
}

impl ActivationLook {
    pub fn for_active(active: bool) -> Self {
        if active {
            Self {
                scale: 1.0,
                opacity: 1.0,
                play_affordance_visible: false,
            }
        } else {
            Self {
                scale: GALLERY_INACTIVE_SCALE,
                opacity: GALLERY_INACTIVE_OPACITY,
                play_affordance_visible: true,
            }
        }
    }
}

/// Activation flag for one gallery item.
#[derive(Clone, Debug)]
pub struct ViewportActivation {
    observer: BandObserver,
    has_media: bool,
}

impl ViewportActivation {
    pub fn new(config: BandConfig, has_media: bool) -> Self {
        Self {
            observer: BandObserver::new(config),
            has_media,
        }
    }

    pub fn is_active(&self) -> bool {
        self.observer.is_inside()
    }

    pub fn look(&self) -> ActivationLook {
        ActivationLook::for_active(self.is_active())
    }

    /// Re-check the band. Returns the playback call to make when the element
    /// wraps media and the observer reported (first poll or a flip).
    pub fn update(
        &mut self,
        element: &impl Bounds,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Option<Playback> {
        let now = self.observer.poll(element, viewport_width, viewport_height)?;
        if !self.has_media {
            return None;
        }
        Some(if now { Playback::Play } else { Playback::Pause })
    }
}

/// Latching reveal: becomes visible the first time the element touches the
/// viewport and never reverts.
#[derive(Clone, Debug)]
pub struct OnceReveal {
    observer: BandObserver,
    revealed: bool,
    pub delay_secs: f32,
    /// Distance the element rises from while fading in.
    pub rise_px: f32,
}

impl OnceReveal {
    pub fn new(delay_secs: f32) -> Self {
        Self {
            observer: BandObserver::new(BandConfig {
                band: Band::FULL,
                threshold: 0.0,
            }),
            revealed: false,
            delay_secs: delay_secs.max(0.0),
            rise_px: ENTRANCE_RISE_PX,
        }
    }

    /// Build from the raw delay and rise attribute values. Missing or
    /// unparsable values fall back to no delay and the default rise.
    pub fn from_attributes(delay: Option<&str>, rise: Option<&str>) -> Self {
        let parse = |v: Option<&str>| {
            v.and_then(|s| s.trim().parse::<f32>().ok()).filter(|v| v.is_finite())
        };
        Self {
            rise_px: parse(rise).unwrap_or(ENTRANCE_RISE_PX),
            ..Self::new(parse(delay).unwrap_or(0.0))
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` exactly once, on the frame the element is first seen.
    pub fn update(
        &mut self,
        element: &impl Bounds,
        viewport_width: f32,
        viewport_height: f32,
    ) -> bool {
        if self.revealed {
            return false;
        }
        if self.observer.poll(element, viewport_width, viewport_height) == Some(true) {
            self.revealed = true;
            return true;
        }
        false
    }
}

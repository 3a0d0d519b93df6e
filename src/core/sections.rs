use super::constants::{NAV_VISIBLE_AFTER_PX, SECTION_BAND_INSET_BOTTOM, SECTION_BAND_INSET_TOP};
use super::viewport::{Band, BandConfig, BandObserver, Bounds};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionConfig {
    pub band: Band,
    pub nav_visible_after: f64,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            band: Band::new(SECTION_BAND_INSET_TOP, SECTION_BAND_INSET_BOTTOM),
            nav_visible_after: NAV_VISIBLE_AFTER_PX,
        }
    }
}

#[derive(Clone, Debug)]
struct Tracked {
    id: String,
    observer: BandObserver,
}

/// Tracks which labeled section is active for navigation highlighting.
///
/// Sections are polled in document order and every section that starts
/// intersecting in a poll is applied in that order, so the last one wins.
/// Nothing breaks ties inside a batch; two sections entering on the same
/// frame can flicker between polls.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    sections: Vec<Tracked>,
    active: Option<String>,
}

impl SectionTracker {
    pub fn new<I, S>(config: SectionConfig, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let observer_config = BandConfig {
            band: config.band,
            threshold: 0.0,
        };
        Self {
            sections: ids
                .into_iter()
                .map(|id| Tracked {
                    id: id.into(),
                    observer: BandObserver::new(observer_config),
                })
                .collect(),
            active: None,
        }
    }

    /// Start with `id` active before any intersection has been seen.
    pub fn with_initial(mut self, id: impl Into<String>) -> Self {
        self.active = Some(id.into());
        self
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    /// Report that section `id` started intersecting. Unknown ids still win.
    pub fn on_intersecting(&mut self, id: &str) -> bool {
        if self.active.as_deref() == Some(id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    /// Poll every section's box, given in the same order as the ids. Returns
    /// `true` when the active section changed.
    pub fn update<B: Bounds>(
        &mut self,
        boxes: &[B],
        viewport_width: f32,
        viewport_height: f32,
    ) -> bool {
        let mut entered = Vec::new();
        for (section, element) in self.sections.iter_mut().zip(boxes) {
            if section.observer.poll(element, viewport_width, viewport_height) == Some(true) {
                entered.push(section.id.clone());
            }
        }
        let before = self.active.clone();
        for id in &entered {
            self.on_intersecting(id);
        }
        before != self.active
    }
}

/// Navigation bar visibility, driven purely by scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavVisibility {
    threshold: f64,
    visible: bool,
}

impl NavVisibility {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` when visibility flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let now = scroll_y > self.threshold;
        let changed = now != self.visible;
        self.visible = now;
        changed
    }
}

impl Default for NavVisibility {
    fn default() -> Self {
        Self::new(NAV_VISIBLE_AFTER_PX)
    }
}

use super::constants::*;
use super::ease::{lerp, remap_clamped, Ease};
use fnv::FnvHashMap;

/// Visual layers the hero choreography writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// "Scroll to explore" hint and the "begin journey" prompt.
    ScrollHint,
    /// Foreground window mask.
    Window,
    /// Decorative glow circle behind the window.
    GlowCircle,
    Vignette,
    /// Hero content that starts blurred behind the window.
    HeroContent,
    /// Staggered reveal element, by document order.
    Reveal(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    Opacity,
    TranslateY,
    Scale,
    Blur,
    Brightness,
    TopPercent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub target: Layer,
    pub property: Property,
    pub start: f32,
    pub end: f32,
    pub from: f32,
    pub to: f32,
    pub ease: Ease,
}

impl Segment {
    fn value_at(&self, time: f32) -> f32 {
        let span = self.end - self.start;
        let t = if span <= f32::EPSILON {
            if time >= self.end {
                1.0
            } else {
                0.0
            }
        } else {
            (time - self.start) / span
        };
        lerp(self.from, self.to, self.ease.apply(t))
    }
}

/// Property values for every layer at one point of the timeline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineFrame {
    values: FnvHashMap<(Layer, Property), f32>,
}

impl TimelineFrame {
    pub fn get(&self, layer: Layer, property: Property) -> Option<f32> {
        self.values.get(&(layer, property)).copied()
    }

    pub fn get_or(&self, layer: Layer, property: Property, fallback: f32) -> f32 {
        self.get(layer, property).unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered list of segments sampled by timeline time.
///
/// Built once at mount and read-only afterwards. When segments for the same
/// layer and property overlap, the one registered last wins from its start
/// onwards. Before any of its segments start, a property holds the `from`
/// value of its first segment.
#[derive(Clone, Debug, Default)]
pub struct ScrollTimeline {
    segments: Vec<Segment>,
    duration: f32,
}

impl ScrollTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a segment covering `[start, start + duration]`.
    #[allow(clippy::too_many_arguments)]
    pub fn to(
        &mut self,
        target: Layer,
        property: Property,
        start: f32,
        duration: f32,
        from: f32,
        to: f32,
        ease: Ease,
    ) -> &mut Self {
        let start = start.max(0.0);
        let end = start + duration.max(0.0);
        self.duration = self.duration.max(end);
        self.segments.push(Segment {
            target,
            property,
            start,
            end,
            from,
            to,
            ease,
        });
        self
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sample at timeline time (clamped to `[0, duration]`).
    pub fn sample_time(&self, time: f32) -> TimelineFrame {
        let time = time.clamp(0.0, self.duration);
        let mut frame = TimelineFrame::default();
        for seg in &self.segments {
            let key = (seg.target, seg.property);
            if time >= seg.start {
                frame.values.insert(key, seg.value_at(time));
            } else {
                frame.values.entry(key).or_insert(seg.from);
            }
        }
        frame
    }

    /// Sample at normalized progress in `[0, 1]`.
    pub fn sample(&self, progress: f32) -> TimelineFrame {
        self.sample_time(progress.clamp(0.0, 1.0) * self.duration)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroConfig {
    pub reveal_count: usize,
    pub pin_factor: f32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            reveal_count: 5,
            pin_factor: PIN_VIEWPORT_FACTOR,
        }
    }
}

/// Build the hero reveal timeline: hint fade, window zoom with the backdrop
/// clearing, window fade, then the staggered content reveal.
pub fn hero_timeline(reveal_count: usize) -> ScrollTimeline {
    use Layer::*;
    use Property::*;
    let mut tl = ScrollTimeline::new();

    tl.to(ScrollHint, Opacity, 0.0, 0.15, 1.0, 0.0, Ease::Linear)
        .to(ScrollHint, TranslateY, 0.0, 0.15, 0.0, HINT_LIFT_PX, Ease::Linear);

    let zoom_at = 0.1;
    tl.to(Window, Scale, zoom_at, 0.5, 1.0, WINDOW_MAX_SCALE, Ease::Power1InOut)
        .to(
            GlowCircle,
            TopPercent,
            zoom_at,
            0.5,
            CIRCLE_START_TOP_PCT,
            CIRCLE_END_TOP_PCT,
            Ease::Power1InOut,
        )
        .to(Vignette, Opacity, zoom_at, 0.4, 1.0, 0.0, Ease::Power1InOut)
        .to(HeroContent, Blur, zoom_at, 0.5, CONTENT_START_BLUR_PX, 0.0, Ease::Power1InOut)
        .to(
            HeroContent,
            Brightness,
            zoom_at,
            0.5,
            CONTENT_START_BRIGHTNESS,
            1.0,
            Ease::Power1InOut,
        )
        .to(HeroContent, Scale, zoom_at, 0.5, CONTENT_START_SCALE, 1.0, Ease::Power1InOut);

    // Window fade overlaps the last 0.15 of the zoom.
    let zoom_end = tl.duration();
    tl.to(Window, Opacity, zoom_end - 0.15, 0.15, 1.0, 0.0, Ease::Linear);

    // Reveal starts 0.45 before the current end.
    let reveal_at = tl.duration() - 0.45;
    for i in 0..reveal_count {
        let start = reveal_at + REVEAL_STAGGER * i as f32;
        tl.to(Reveal(i), Opacity, start, 0.4, 0.0, 1.0, Ease::Power2Out)
            .to(Reveal(i), TranslateY, start, 0.4, REVEAL_START_Y_PX, 0.0, Ease::Power2Out)
            .to(Reveal(i), Blur, start, 0.4, REVEAL_START_BLUR_PX, 0.0, Ease::Power2Out);
    }
    tl
}

/// Scroll region that stays fixed in the viewport while scroll scrubs the
/// timeline 1:1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedScroll {
    /// Scroll offset where pinning begins.
    pub start: f32,
    /// Scroll distance the region stays pinned for.
    pub distance: f32,
}

impl PinnedScroll {
    /// Pin distance is fixed from the viewport height at mount time and is
    /// not recomputed on resize.
    pub fn at_mount(start: f32, viewport_height: f32, pin_factor: f32) -> Self {
        Self {
            start,
            distance: (viewport_height * pin_factor).max(0.0),
        }
    }

    pub fn end(&self) -> f32 {
        self.start + self.distance
    }

    pub fn progress(&self, scroll: f32) -> f32 {
        if self.distance <= f32::EPSILON {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / self.distance).clamp(0.0, 1.0)
    }

    pub fn is_pinned(&self, scroll: f32) -> bool {
        scroll >= self.start && scroll < self.end()
    }

    /// Translation that holds the region in place while pinned. It grows with
    /// scroll during the pin and stays at `distance` afterwards, so the region
    /// scrolls away normally once released.
    pub fn hold_offset(&self, scroll: f32) -> f32 {
        (scroll - self.start).clamp(0.0, self.distance)
    }
}

/// Parallax offsets applied after the pin ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub background_y: f32,
    pub circle_y: f32,
    pub text_y: f32,
    pub text_opacity: f32,
}

impl Parallax {
    pub fn at(scroll: f32, pin_end: f32) -> Self {
        let span =
            |len: f32, travel: f32| remap_clamped(scroll, pin_end, pin_end + len, 0.0, travel);
        Self {
            background_y: span(BG_PARALLAX_SPAN_PX, BG_PARALLAX_TRAVEL_PX),
            circle_y: span(CIRCLE_PARALLAX_SPAN_PX, CIRCLE_PARALLAX_TRAVEL_PX),
            text_y: span(TEXT_PARALLAX_SPAN_PX, TEXT_PARALLAX_TRAVEL_PX),
            text_opacity: remap_clamped(scroll, pin_end, pin_end + TEXT_PARALLAX_SPAN_PX, 1.0, 0.0),
        }
    }
}

/// Mount-time hero choreography: the pinned reveal plus post-pin parallax.
#[derive(Clone, Debug)]
pub struct ScrollChoreographer {
    timeline: ScrollTimeline,
    pin: PinnedScroll,
}

/// Everything the hero needs to draw for one scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroFrame {
    pub progress: f32,
    pub pinned: bool,
    pub hold_offset: f32,
    pub timeline: TimelineFrame,
    pub parallax: Parallax,
}

impl ScrollChoreographer {
    pub fn new(config: HeroConfig, pin_start: f32, viewport_height: f32) -> Self {
        Self {
            timeline: hero_timeline(config.reveal_count),
            pin: PinnedScroll::at_mount(pin_start, viewport_height, config.pin_factor),
        }
    }

    pub fn pin(&self) -> PinnedScroll {
        self.pin
    }

    pub fn timeline(&self) -> &ScrollTimeline {
        &self.timeline
    }

    pub fn frame(&self, scroll: f32) -> HeroFrame {
        let progress = self.pin.progress(scroll);
        HeroFrame {
            progress,
            pinned: self.pin.is_pinned(scroll),
            hold_offset: self.pin.hold_offset(scroll),
            timeline: self.timeline.sample(progress),
            parallax: Parallax::at(scroll, self.pin.end()),
        }
    }
}

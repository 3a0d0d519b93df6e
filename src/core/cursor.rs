use super::constants::{DOT_HALF_SIZE_PX, DOT_SPRING, RING_HALF_SIZE_PX, RING_SPRING};
use super::spring::{Spring, SpringParams};
use glam::Vec2;

/// Semantic region the pointer is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Zone {
    #[default]
    Default,
    Interactive,
    Media,
}

/// Snapshot of the parts of a DOM element that zone classification reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementInfo {
    /// Upper-case tag name, as reported by the DOM (`VIDEO`, `A`, ...).
    pub tag: String,
    /// Element carries the media-glow marker class.
    pub media_glow: bool,
    /// Element carries the explicit hoverable marker attribute.
    pub hoverable: bool,
}

impl ElementInfo {
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_uppercase(),
            ..Self::default()
        }
    }

    pub fn with_media_glow(mut self, on: bool) -> Self {
        self.media_glow = on;
        self
    }

    pub fn with_hoverable(mut self, on: bool) -> Self {
        self.hoverable = on;
        self
    }

    fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }
}

/// Which part of the chain a rule inspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reach {
    /// Only the hovered element itself.
    SelfOnly,
    /// The hovered element or any ancestor.
    SelfOrAncestor,
}

pub struct ZoneRule {
    pub zone: Zone,
    pub reach: Reach,
    pub matches: fn(&ElementInfo) -> bool,
}

/// Rules in precedence order; the first rule that matches decides the zone.
pub const ZONE_RULES: &[ZoneRule] = &[
    ZoneRule {
        zone: Zone::Media,
        reach: Reach::SelfOrAncestor,
        matches: |e| e.is_tag("VIDEO"),
    },
    ZoneRule {
        zone: Zone::Media,
        reach: Reach::SelfOrAncestor,
        matches: |e| e.media_glow,
    },
    ZoneRule {
        zone: Zone::Interactive,
        reach: Reach::SelfOrAncestor,
        matches: |e| e.is_tag("A") || e.is_tag("BUTTON"),
    },
    ZoneRule {
        zone: Zone::Interactive,
        reach: Reach::SelfOnly,
        matches: |e| e.hoverable,
    },
];

/// Classify a hovered element. `chain[0]` is the element itself, followed by
/// its ancestors from nearest to the document root.
pub fn classify(chain: &[ElementInfo]) -> Zone {
    for rule in ZONE_RULES {
        let hit = match rule.reach {
            Reach::SelfOnly => chain.first().is_some_and(rule.matches),
            Reach::SelfOrAncestor => chain.iter().any(rule.matches),
        };
        if hit {
            return rule.zone;
        }
    }
    Zone::Default
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeTarget {
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorTargets {
    pub dot: ShapeTarget,
    pub ring: ShapeTarget,
    /// Ring border switches to the accent color.
    pub ring_accent: bool,
}

impl IndicatorTargets {
    pub fn for_zone(zone: Zone) -> Self {
        let (dot, ring) = match zone {
            Zone::Media => ((0.5, 0.3), (2.5, 0.3)),
            Zone::Interactive => ((2.0, 1.0), (1.2, 0.0)),
            Zone::Default => ((1.0, 1.0), (1.0, 0.5)),
        };
        Self {
            dot: ShapeTarget {
                scale: dot.0,
                opacity: dot.1,
            },
            ring: ShapeTarget {
                scale: ring.0,
                opacity: ring.1,
            },
            ring_accent: zone == Zone::Media,
        }
    }
}

/// Pointer position plus the zone it currently occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub zone: Zone,
}

impl PointerState {
    pub fn on_move(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// Pointer entered a new element. Returns `true` when the zone changed.
    pub fn on_over(&mut self, chain: &[ElementInfo]) -> bool {
        let zone = classify(chain);
        let changed = zone != self.zone;
        self.zone = zone;
        changed
    }

    /// Pointer left an element; `related_present` is false when it left the
    /// document entirely.
    pub fn on_out(&mut self, related_present: bool) -> bool {
        if related_present {
            return false;
        }
        let changed = self.zone != Zone::Default;
        self.zone = Zone::Default;
        changed
    }

    pub fn targets(&self) -> IndicatorTargets {
        IndicatorTargets::for_zone(self.zone)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorConfig {
    pub dot: SpringParams,
    pub ring: SpringParams,
    pub dot_half_size: f32,
    pub ring_half_size: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            dot: SpringParams::from_tuple(DOT_SPRING),
            ring: SpringParams::from_tuple(RING_SPRING),
            dot_half_size: DOT_HALF_SIZE_PX,
            ring_half_size: RING_HALF_SIZE_PX,
        }
    }
}

#[derive(Clone, Debug)]
struct ShapeSprings {
    x: Spring,
    y: Spring,
    scale: Spring,
    opacity: Spring,
    half_size: f32,
}

impl ShapeSprings {
    fn new(params: SpringParams, half_size: f32, initial: ShapeTarget) -> Self {
        Self {
            x: Spring::new(-half_size, params),
            y: Spring::new(-half_size, params),
            scale: Spring::new(initial.scale, params),
            opacity: Spring::new(initial.opacity, params),
            half_size,
        }
    }

    fn retarget(&mut self, pos: Vec2, target: ShapeTarget) {
        self.x.set_target(pos.x - self.half_size);
        self.y.set_target(pos.y - self.half_size);
        self.scale.set_target(target.scale);
        self.opacity.set_target(target.opacity);
    }

    fn step(&mut self, dt_sec: f32) {
        self.x.step(dt_sec);
        self.y.step(dt_sec);
        self.scale.step(dt_sec);
        self.opacity.step(dt_sec);
    }

    fn sample(&self) -> ShapeFrame {
        ShapeFrame {
            x: self.x.position(),
            y: self.y.position(),
            scale: self.scale.position(),
            opacity: self.opacity.position().clamp(0.0, 1.0),
        }
    }
}

/// Drawn transform for one indicator shape on the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeFrame {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Springs chasing the dot and ring targets derived from `PointerState`.
#[derive(Clone, Debug)]
pub struct IndicatorAnimator {
    dot: ShapeSprings,
    ring: ShapeSprings,
}

impl IndicatorAnimator {
    pub fn new(config: CursorConfig) -> Self {
        let initial = IndicatorTargets::for_zone(Zone::Default);
        Self {
            dot: ShapeSprings::new(config.dot, config.dot_half_size, initial.dot),
            ring: ShapeSprings::new(config.ring, config.ring_half_size, initial.ring),
        }
    }

    pub fn tick(&mut self, state: &PointerState, dt_sec: f32) -> (ShapeFrame, ShapeFrame) {
        let targets = state.targets();
        self.dot.retarget(state.pos, targets.dot);
        self.ring.retarget(state.pos, targets.ring);
        self.dot.step(dt_sec);
        self.ring.step(dt_sec);
        (self.dot.sample(), self.ring.sample())
    }
}

// Choreography tuning shared by the core components. Values are in CSS pixels,
// seconds, or fractions of the viewport unless noted otherwise.

// Cursor indicator springs (stiffness, damping, mass)
pub const DOT_SPRING: (f32, f32, f32) = (600.0, 30.0, 0.3);
pub const RING_SPRING: (f32, f32, f32) = (200.0, 20.0, 0.5);

// Half the drawn indicator size, so each shape is centered on the pointer
pub const DOT_HALF_SIZE_PX: f32 = 6.0;
pub const RING_HALF_SIZE_PX: f32 = 20.0;

// Hero pin: scroll distance the reveal stays fixed for, in viewport heights
pub const PIN_VIEWPORT_FACTOR: f32 = 1.5;

// Hero timeline
pub const WINDOW_MAX_SCALE: f32 = 12.0;
pub const HINT_LIFT_PX: f32 = -20.0;
pub const CIRCLE_START_TOP_PCT: f32 = 20.0;
pub const CIRCLE_END_TOP_PCT: f32 = 65.0;
pub const CONTENT_START_BLUR_PX: f32 = 8.0;
pub const CONTENT_START_BRIGHTNESS: f32 = 1.2;
pub const CONTENT_START_SCALE: f32 = 1.05;
pub const REVEAL_START_Y_PX: f32 = 30.0;
pub const REVEAL_START_BLUR_PX: f32 = 10.0;
pub const REVEAL_STAGGER: f32 = 0.05;

// Post-pin parallax spans (input distance past the pin, output range)
pub const BG_PARALLAX_SPAN_PX: f32 = 1000.0;
pub const BG_PARALLAX_TRAVEL_PX: f32 = 1000.0;
pub const CIRCLE_PARALLAX_SPAN_PX: f32 = 1000.0;
pub const CIRCLE_PARALLAX_TRAVEL_PX: f32 = -150.0;
pub const TEXT_PARALLAX_SPAN_PX: f32 = 800.0;
pub const TEXT_PARALLAX_TRAVEL_PX: f32 = 650.0;

// "Begin journey" smooth scroll
pub const JOURNEY_SCROLL_SECS: f32 = 2.5;

// Gallery activation band: central 30% of the viewport height
pub const GALLERY_BAND_INSET_TOP: f32 = 0.35;
pub const GALLERY_BAND_INSET_BOTTOM: f32 = 0.35;
pub const GALLERY_ACTIVATION_RATIO: f32 = 0.5;
pub const GALLERY_INACTIVE_SCALE: f32 = 0.9;
pub const GALLERY_INACTIVE_OPACITY: f32 = 0.6;

// Section tracking band: 20% below the top to 50% above the bottom
pub const SECTION_BAND_INSET_TOP: f32 = 0.20;
pub const SECTION_BAND_INSET_BOTTOM: f32 = 0.50;
pub const NAV_VISIBLE_AFTER_PX: f64 = 500.0;
pub const NAV_SPRING: (f32, f32, f32) = (120.0, 20.0, 1.0);
pub const NAV_HIDDEN_OFFSET_PX: f32 = -100.0;

// Starfield
pub const STAR_FIELD_EXTENT: u32 = 3000;
pub const STAR_ACCENT_PROBABILITY: f64 = 0.033;
pub const STAR_DRIFT_PX: f32 = 2000.0;
// (count, drift loop seconds) for the small, medium and large tiers
pub const STAR_TIERS: [(usize, f32); 3] = [(700, 50.0), (200, 100.0), (100, 150.0)];
pub const GALLERY_BACKDROP_TRAVEL_PCT: f32 = 50.0;

// One-shot entrance reveals
pub const ENTRANCE_RISE_PX: f32 = 20.0;
pub const ENTRANCE_SECS: f32 = 0.6;

// DOM contract between the host page and the choreography.

// Page sections, in document order
pub const SECTION_IDS: [&str; 4] = ["home", "work", "services", "contact"];
pub const INITIAL_SECTION: &str = "home";

// Cursor
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const MEDIA_GLOW_CLASS: &str = "glow-card-inner";
pub const HOVERABLE_ATTR: &str = "data-cursor-hover";

// Hero reveal
pub const HERO_CONTAINER_ID: &str = "hero-reveal";
pub const SCROLL_HINT_SELECTOR: &str = ".scroll-hint, .start-text-container";
pub const WINDOW_MASK_ID: &str = "hero-window";
pub const VIGNETTE_ID: &str = "hero-vignette";
pub const HERO_CONTENT_ID: &str = "hero-content";
pub const GLOW_CIRCLE_SELECTOR: &str = ".glowing-circle-layer";
pub const HERO_BACKGROUND_ID: &str = "hero-background";
pub const HERO_TEXT_ID: &str = "hero-text";
pub const REVEAL_SELECTOR: &str = ".hero-reveal-content";
pub const BEGIN_JOURNEY_ID: &str = "begin-journey";

// Gallery
pub const GALLERY_ITEM_SELECTOR: &str = ".gallery-item";
pub const GALLERY_FRAME_SELECTOR: &str = ".gallery-frame";
pub const PLAY_AFFORDANCE_SELECTOR: &str = ".play-affordance";
pub const STARFIELD_ID: &str = "work-starfield";
pub const STAR_TIER_SELECTOR: &str = ".star-tier";

// Navigation
pub const NAV_ID: &str = "site-nav";
pub const NAV_LINK_SELECTOR: &str = "#site-nav a[href^='#']";
pub const NAV_LOGO_ID: &str = "nav-logo";
pub const NAV_ACTIVE_CLASS: &str = "active";

// One-shot entrance reveals
pub const ENTRANCE_SELECTOR: &str = "[data-reveal]";
pub const ENTRANCE_DELAY_ATTR: &str = "data-reveal-delay";
pub const ENTRANCE_RISE_ATTR: &str = "data-reveal-rise";

// Call-to-action affordances
pub const CONTACT_URL: &str = "http://wa.me/7248197932";
pub const CTA_SELECTOR: &str = "[data-cta]";

use crate::constants::*;
use crate::core::{
    style, BandConfig, CursorConfig, HeroConfig, IndicatorAnimator, NavVisibility, OnceReveal,
    PointerState, ScrollChoreographer, SectionConfig, SectionTracker, Starfield, StarfieldConfig,
    ViewportActivation,
};
use crate::dom::{self, set_style, EventListener};
use crate::events;
use crate::frame::{
    self, CursorView, EntranceItem, FrameContext, FrameLoop, GalleryItem, HeroView, NavView,
    StarfieldView,
};
use crate::render::HeroElements;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the page choreography owns. Dropping it detaches all listeners
/// and stops the frame loop.
pub struct Site {
    _listeners: Vec<EventListener>,
    _frame_loop: FrameLoop,
}

pub fn mount(window: &web::Window, document: &web::Document) -> Site {
    let mut listeners = Vec::new();
    let (_, vh) = dom::viewport_size();

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let cursor = mount_cursor(document);
    if cursor.is_some() {
        listeners.extend(events::wire_cursor(window, document, pointer.clone()));
    }

    let scroll_tween = Rc::new(RefCell::new(None));
    let hero = mount_hero(document, vh);
    if let (Some(hero), Some(begin)) = (&hero, dom::by_id(document, BEGIN_JOURNEY_ID)) {
        let pin_end = hero.choreographer.pin().end() as f64;
        listeners.push(events::wire_begin_journey(&begin, pin_end, scroll_tween.clone()));
    }

    let gallery = mount_gallery(document);
    for item in &gallery {
        listeners.push(events::wire_gallery_item(&item.root));
    }

    let stars = mount_starfield(document);

    let nav_visibility = Rc::new(RefCell::new(NavVisibility::default()));
    let nav = mount_nav(document);
    if let Some(nav) = &nav {
        listeners.push(events::wire_nav_visibility(window, nav_visibility.clone()));
        for (id, link) in &nav.links {
            if let Some(section) = dom::by_id(document, id) {
                listeners.push(events::wire_section_link(link, section));
            }
        }
        nav.highlight_active();
    }
    if let Some(logo) = dom::by_id(document, NAV_LOGO_ID) {
        listeners.push(events::wire_scroll_to_top(&logo));
    }

    wire_cta_links(document);
    let entrances = mount_entrances(document);

    log::info!(
        "[site] mounted cursor={} hero={} gallery={} stars={} nav={} entrances={}",
        cursor.is_some(),
        hero.is_some(),
        gallery.len(),
        stars.is_some(),
        nav.is_some(),
        entrances.len()
    );

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        pointer,
        cursor,
        hero,
        gallery,
        stars,
        nav,
        nav_visibility,
        entrances,
        scroll_tween,
        last_instant: Instant::now(),
    }));

    Site {
        _listeners: listeners,
        _frame_loop: frame::start_loop(frame_ctx),
    }
}

fn mount_cursor(document: &web::Document) -> Option<CursorView> {
    let (Some(dot), Some(ring)) = (
        dom::by_id(document, CURSOR_DOT_ID),
        dom::by_id(document, CURSOR_RING_ID),
    ) else {
        log::warn!("[cursor] indicator elements missing; cursor disabled");
        return None;
    };
    Some(CursorView {
        dot,
        ring,
        animator: IndicatorAnimator::new(CursorConfig::default()),
        drawn_zone: None,
    })
}

fn mount_hero(document: &web::Document, viewport_height: f32) -> Option<HeroView> {
    let Some(container) = dom::by_id(document, HERO_CONTAINER_ID) else {
        log::warn!("[hero] #{HERO_CONTAINER_ID} missing; reveal disabled");
        return None;
    };
    let pin_start = (dom::rect_of(&container).top as f64 + dom::scroll_y()) as f32;
    let reveals = dom::query_all(document, REVEAL_SELECTOR);
    let config = HeroConfig {
        reveal_count: reveals.len(),
        ..HeroConfig::default()
    };
    let choreographer = ScrollChoreographer::new(config, pin_start, viewport_height);
    // Spacer so the page keeps its length while the region is held in place.
    set_style(
        &container,
        "margin-bottom",
        &format!("{}px", choreographer.pin().distance),
    );
    log::info!(
        "[hero] pin {:.0}..{:.0}px, {} reveal elements",
        choreographer.pin().start,
        choreographer.pin().end(),
        reveals.len()
    );
    Some(HeroView {
        elements: HeroElements {
            container,
            hints: dom::query_all(document, SCROLL_HINT_SELECTOR),
            window: dom::by_id(document, WINDOW_MASK_ID),
            vignette: dom::by_id(document, VIGNETTE_ID),
            content: dom::by_id(document, HERO_CONTENT_ID),
            circle: dom::query_all(document, GLOW_CIRCLE_SELECTOR).into_iter().next(),
            background: dom::by_id(document, HERO_BACKGROUND_ID),
            text: dom::by_id(document, HERO_TEXT_ID),
            reveals,
        },
        choreographer,
    })
}

fn mount_gallery(document: &web::Document) -> Vec<GalleryItem> {
    dom::query_all(document, GALLERY_ITEM_SELECTOR)
        .into_iter()
        .map(|root| {
            let video = root
                .query_selector("video")
                .ok()
                .flatten()
                .and_then(|v| v.dyn_into::<web::HtmlMediaElement>().ok());
            let frame =
                dom::query_within(&root, GALLERY_FRAME_SELECTOR).unwrap_or_else(|| root.clone());
            let affordance = dom::query_within(&root, PLAY_AFFORDANCE_SELECTOR);
            GalleryItem {
                activation: ViewportActivation::new(BandConfig::gallery(), video.is_some()),
                root,
                frame,
                affordance,
                video,
                drawn_active: None,
            }
        })
        .collect()
}

fn mount_starfield(document: &web::Document) -> Option<StarfieldView> {
    let backdrop = dom::by_id(document, STARFIELD_ID)?;
    let section = backdrop
        .closest("section")
        .ok()
        .flatten()
        .and_then(|s| s.dyn_into::<web::HtmlElement>().ok())
        .unwrap_or_else(|| backdrop.clone());

    let field = Starfield::generate(&mut rand::thread_rng(), &StarfieldConfig::default());
    let tier_els = dom::query_all(document, STAR_TIER_SELECTOR);
    if tier_els.len() < field.layers.len() {
        log::warn!(
            "[stars] {} tier elements for {} tiers",
            tier_els.len(),
            field.layers.len()
        );
    }
    let tiers: Vec<_> = tier_els.into_iter().zip(field.layers).collect();
    for (el, layer) in &tiers {
        set_style(el, "box-shadow", &style::box_shadow(&layer.looped_points()));
    }
    log::info!("[stars] generated {} tiers", tiers.len());
    Some(StarfieldView {
        section,
        backdrop,
        tiers,
        started: Instant::now(),
    })
}

fn mount_nav(document: &web::Document) -> Option<NavView> {
    let nav = dom::by_id(document, NAV_ID)?;
    let links = dom::query_all(document, NAV_LINK_SELECTOR)
        .into_iter()
        .filter_map(|link| {
            let href = link.get_attribute("href")?;
            let id = href.strip_prefix('#')?.to_string();
            (!id.is_empty()).then_some((id, link))
        })
        .collect();
    let sections: Vec<_> = SECTION_IDS
        .iter()
        .filter_map(|id| dom::by_id(document, id).map(|el| (*id, el)))
        .collect();
    let tracker = SectionTracker::new(SectionConfig::default(), sections.iter().map(|(id, _)| *id))
        .with_initial(INITIAL_SECTION);
    Some(NavView::new(
        nav,
        links,
        sections.into_iter().map(|(_, el)| el).collect(),
        tracker,
    ))
}

fn mount_entrances(document: &web::Document) -> Vec<EntranceItem> {
    dom::query_all(document, ENTRANCE_SELECTOR)
        .into_iter()
        .map(|el| {
            let reveal = OnceReveal::from_attributes(
                el.get_attribute(ENTRANCE_DELAY_ATTR).as_deref(),
                el.get_attribute(ENTRANCE_RISE_ATTR).as_deref(),
            );
            set_style(&el, "opacity", "0");
            set_style(&el, "transform", &style::translate_y(reveal.rise_px));
            EntranceItem { el, reveal }
        })
        .collect()
}

fn wire_cta_links(document: &web::Document) {
    for el in dom::query_all(document, CTA_SELECTOR) {
        _ = el.set_attribute("href", CONTACT_URL);
        _ = el.set_attribute("target", "_blank");
        _ = el.set_attribute("rel", "noopener noreferrer");
    }
}

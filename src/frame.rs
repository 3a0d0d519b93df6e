use crate::constants::NAV_ACTIVE_CLASS;
use crate::core::constants::{
    ENTRANCE_SECS, GALLERY_BACKDROP_TRAVEL_PCT, NAV_HIDDEN_OFFSET_PX, NAV_SPRING,
};
use crate::core::style;
use crate::core::{
    backdrop_shift_pct, section_progress, IndicatorAnimator, NavVisibility, OnceReveal, Playback,
    PointerState, ScrollChoreographer, ScrollTween, SectionTracker, Spring, SpringParams,
    StarLayer, ViewportActivation, Zone,
};
use crate::dom::{self, set_style};
use crate::render::{self, HeroElements};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct CursorView {
    pub dot: web::HtmlElement,
    pub ring: web::HtmlElement,
    pub animator: IndicatorAnimator,
    pub drawn_zone: Option<Zone>,
}

pub struct HeroView {
    pub elements: HeroElements,
    pub choreographer: ScrollChoreographer,
}

pub struct GalleryItem {
    pub root: web::HtmlElement,
    pub frame: web::HtmlElement,
    pub affordance: Option<web::HtmlElement>,
    pub video: Option<web::HtmlMediaElement>,
    pub activation: ViewportActivation,
    pub drawn_active: Option<bool>,
}

pub struct StarfieldView {
    pub section: web::HtmlElement,
    pub backdrop: web::HtmlElement,
    pub tiers: Vec<(web::HtmlElement, StarLayer)>,
    pub started: Instant,
}

pub struct NavView {
    pub nav: web::HtmlElement,
    /// (section id, link) pairs; several links may target one section.
    pub links: Vec<(String, web::HtmlElement)>,
    pub sections: Vec<web::HtmlElement>,
    pub tracker: SectionTracker,
    pub y: Spring,
    pub opacity: Spring,
}

impl NavView {
    pub fn new(
        nav: web::HtmlElement,
        links: Vec<(String, web::HtmlElement)>,
        sections: Vec<web::HtmlElement>,
        tracker: SectionTracker,
    ) -> Self {
        let params = SpringParams::from_tuple(NAV_SPRING);
        Self {
            nav,
            links,
            sections,
            tracker,
            y: Spring::new(NAV_HIDDEN_OFFSET_PX, params),
            opacity: Spring::new(0.0, params),
        }
    }

    pub fn highlight_active(&self) {
        let active = self.tracker.active();
        for (id, link) in &self.links {
            let on = active == Some(id.as_str());
            _ = link.class_list().toggle_with_force(NAV_ACTIVE_CLASS, on);
            if on {
                _ = link.set_attribute("aria-current", "page");
            } else {
                _ = link.remove_attribute("aria-current");
            }
        }
    }
}

pub struct EntranceItem {
    pub el: web::HtmlElement,
    pub reveal: OnceReveal,
}

pub struct FrameContext {
    pub pointer: Rc<RefCell<PointerState>>,
    pub cursor: Option<CursorView>,
    pub hero: Option<HeroView>,
    pub gallery: Vec<GalleryItem>,
    pub stars: Option<StarfieldView>,
    pub nav: Option<NavView>,
    pub nav_visibility: Rc<RefCell<NavVisibility>>,
    pub entrances: Vec<EntranceItem>,
    pub scroll_tween: Rc<RefCell<Option<ScrollTween>>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.advance_scroll_tween(dt_sec);

        let scroll = dom::scroll_y();
        let (vw, vh) = dom::viewport_size();

        self.draw_cursor(dt_sec);
        if let Some(hero) = &self.hero {
            let frame = hero.choreographer.frame(scroll as f32);
            render::apply_hero(&hero.elements, &frame);
        }
        self.update_gallery(vw, vh);
        self.draw_stars(vh);
        self.update_nav(dt_sec, vw, vh);
        self.update_entrances(vw, vh);
    }

    fn advance_scroll_tween(&mut self, dt_sec: f32) {
        let mut slot = self.scroll_tween.borrow_mut();
        let Some(tween) = slot.as_mut() else {
            return;
        };
        let y = tween.advance(dt_sec);
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, y);
        }
        if tween.is_finished() {
            *slot = None;
        }
    }

    fn draw_cursor(&mut self, dt_sec: f32) {
        let Some(cursor) = &mut self.cursor else {
            return;
        };
        let state = *self.pointer.borrow();
        let (dot, ring) = cursor.animator.tick(&state, dt_sec);
        render::apply_shape(&cursor.dot, &dot);
        render::apply_shape(&cursor.ring, &ring);
        if cursor.drawn_zone != Some(state.zone) {
            render::apply_ring_accent(&cursor.ring, state.targets().ring_accent);
            cursor.drawn_zone = Some(state.zone);
        }
    }

    fn update_gallery(&mut self, vw: f32, vh: f32) {
        for (i, item) in self.gallery.iter_mut().enumerate() {
            let rect = dom::rect_of(&item.root);
            match item.activation.update(&rect, vw, vh) {
                Some(Playback::Play) => {
                    if let Some(v) = &item.video {
                        // Autoplay may be refused; the item still renders as active.
                        match v.play() {
                            Ok(promise) => spawn_local(async move {
                                if let Err(e) = JsFuture::from(promise).await {
                                    log::warn!("[gallery] play {} refused: {:?}", i, e);
                                }
                            }),
                            Err(e) => log::warn!("[gallery] play {} refused: {:?}", i, e),
                        }
                    }
                }
                Some(Playback::Pause) => {
                    if let Some(v) = &item.video {
                        _ = v.pause();
                    }
                }
                None => {}
            }
            let active = item.activation.is_active();
            if item.drawn_active != Some(active) {
                log::debug!("[gallery] item {} active={}", i, active);
                let look = item.activation.look();
                render::apply_activation(&item.frame, item.affordance.as_ref(), look);
                item.drawn_active = Some(active);
            }
        }
    }

    fn draw_stars(&mut self, vh: f32) {
        let Some(stars) = &self.stars else {
            return;
        };
        let rect = dom::rect_of(&stars.section);
        let progress = section_progress(rect.top, rect.height, vh);
        set_style(
            &stars.backdrop,
            "transform",
            &style::translate_y_pct(backdrop_shift_pct(progress, GALLERY_BACKDROP_TRAVEL_PCT)),
        );
        let elapsed = stars.started.elapsed().as_secs_f64();
        for (el, layer) in &stars.tiers {
            render::apply_star_tier(el, layer, elapsed);
        }
    }

    fn update_nav(&mut self, dt_sec: f32, vw: f32, vh: f32) {
        let Some(nav) = &mut self.nav else {
            return;
        };
        let visible = self.nav_visibility.borrow().is_visible();
        nav.y.set_target(if visible { 0.0 } else { NAV_HIDDEN_OFFSET_PX });
        nav.opacity.set_target(if visible { 1.0 } else { 0.0 });
        nav.y.step(dt_sec);
        nav.opacity.step(dt_sec);
        render::apply_nav(&nav.nav, nav.y.position(), nav.opacity.position().clamp(0.0, 1.0));

        let rects: Vec<_> = nav.sections.iter().map(|s| dom::rect_of(s)).collect();
        if nav.tracker.update(&rects, vw, vh) {
            log::debug!("[nav] active section {:?}", nav.tracker.active());
            nav.highlight_active();
        }
    }

    fn update_entrances(&mut self, vw: f32, vh: f32) {
        for item in &mut self.entrances {
            let rect = dom::rect_of(&item.el);
            if item.reveal.update(&rect, vw, vh) {
                let d = item.reveal.delay_secs;
                let transition = format!(
                    "opacity {ENTRANCE_SECS}s ease-out {d}s, \
                     transform {ENTRANCE_SECS}s ease-out {d}s"
                );
                set_style(&item.el, "transition", &transition);
                set_style(&item.el, "opacity", "1");
                set_style(&item.el, "transform", &style::translate_y(0.0));
            }
        }
    }
}

/// Running `requestAnimationFrame` loop; dropping it cancels the pending frame
/// and releases the callback.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        let next = tick_clone.borrow().as_ref().and_then(request_frame);
        handle_clone.set(next);
    }) as Box<dyn FnMut()>));
    let first = tick.borrow().as_ref().and_then(request_frame);
    handle.set(first);
    FrameLoop { tick, handle }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame error: {:?}", e);
            None
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

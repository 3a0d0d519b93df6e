use crate::core::constants::JOURNEY_SCROLL_SECS;
use crate::core::{Ease, ScrollTween};
use crate::dom::{self, on_click, EventListener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn smooth_into_view(el: &web::Element, block: web::ScrollLogicalPosition) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(block);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Clicking a gallery item centers it in the viewport, active or not.
pub fn wire_gallery_item(item: &web::HtmlElement) -> EventListener {
    let target = item.clone();
    on_click(item, move || {
        smooth_into_view(&target, web::ScrollLogicalPosition::Center);
    })
}

/// Anchor links scroll their section to the top of the viewport.
pub fn wire_section_link(link: &web::HtmlElement, section: web::HtmlElement) -> EventListener {
    on_click(link, move || {
        smooth_into_view(&section, web::ScrollLogicalPosition::Start);
    })
}

/// The logo returns to the very top, before the hero reveal.
pub fn wire_scroll_to_top(el: &web::HtmlElement) -> EventListener {
    on_click(el, || {
        if let Some(w) = web::window() {
            let opts = web::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&opts);
        }
    })
}

/// "Begin journey" plays the pinned reveal by scrolling to its end.
pub fn wire_begin_journey(
    el: &web::HtmlElement,
    pin_end: f64,
    tween: Rc<RefCell<Option<ScrollTween>>>,
) -> EventListener {
    on_click(el, move || {
        let from = dom::scroll_y();
        log::info!("[hero] journey {:.0} -> {:.0}", from, pin_end);
        *tween.borrow_mut() = Some(ScrollTween::new(
            from,
            pin_end,
            JOURNEY_SCROLL_SECS,
            Ease::Power2InOut,
        ));
    })
}

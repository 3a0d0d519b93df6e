use crate::core::NavVisibility;
use crate::dom::{self, EventListener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Show the navigation bar once the page has scrolled past the intro.
pub fn wire_nav_visibility(
    window: &web::Window,
    visibility: Rc<RefCell<NavVisibility>>,
) -> EventListener {
    visibility.borrow_mut().on_scroll(dom::scroll_y());
    EventListener::new(window, "scroll", move |_: web::Event| {
        let mut v = visibility.borrow_mut();
        if v.on_scroll(dom::scroll_y()) {
            log::debug!("[nav] visible={}", v.is_visible());
        }
    })
}

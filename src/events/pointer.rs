use crate::core::PointerState;
use crate::dom::EventListener;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Track pointer position and zone. Returns the subscriptions; dropping them
/// detaches the cursor.
pub fn wire_cursor(
    window: &web::Window,
    document: &web::Document,
    pointer: Rc<RefCell<PointerState>>,
) -> Vec<EventListener> {
    let on_move = {
        let pointer = pointer.clone();
        EventListener::new(window, "mousemove", move |ev: web::MouseEvent| {
            let pos = input::pointer_client_pos(&ev);
            pointer.borrow_mut().on_move(pos.x, pos.y);
        })
    };

    let on_over = {
        let pointer = pointer.clone();
        EventListener::new(document, "mouseover", move |ev: web::MouseEvent| {
            let chain = input::ancestor_chain(ev.target());
            let mut p = pointer.borrow_mut();
            if p.on_over(&chain) {
                log::debug!("[cursor] zone {:?}", p.zone);
            }
        })
    };

    let on_out = EventListener::new(document, "mouseout", move |ev: web::MouseEvent| {
        let mut p = pointer.borrow_mut();
        if p.on_out(ev.related_target().is_some()) {
            log::debug!("[cursor] left document, zone reset");
        }
    });

    vec![on_move, on_over, on_out]
}

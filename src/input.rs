use crate::constants::{HOVERABLE_ATTR, MEDIA_GLOW_CLASS};
use crate::core::ElementInfo;
use glam::Vec2;
use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type AncestorChain = SmallVec<[ElementInfo; 12]>;

#[inline]
pub fn pointer_client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn element_info(el: &web::Element) -> ElementInfo {
    ElementInfo::tag(&el.tag_name())
        .with_media_glow(el.class_list().contains(MEDIA_GLOW_CLASS))
        .with_hoverable(el.has_attribute(HOVERABLE_ATTR))
}

/// The event target followed by its element ancestors up to the root.
pub fn ancestor_chain(target: Option<web::EventTarget>) -> AncestorChain {
    let mut chain = AncestorChain::new();
    let mut cur = target.and_then(|t| t.dyn_into::<web::Element>().ok());
    while let Some(el) = cur {
        chain.push(element_info(&el));
        cur = el.parent_element();
    }
    chain
}

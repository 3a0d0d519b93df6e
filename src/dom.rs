use crate::core::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (read(w.inner_width()), read(w.inner_height()))
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_within(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

pub fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Event subscription that removes itself from its target when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    /// Subscribe `handler` to `kind` events on `target`; events that are not
    /// an `E` are ignored.
    pub fn new<E>(
        target: &web::EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let added = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        if let Err(e) = added {
            log::warn!("[dom] add {kind} listener failed: {:?}", e);
        }
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Listen for clicks on `el`, suppressing the default navigation.
pub fn on_click(el: &web::HtmlElement, mut handler: impl FnMut() + 'static) -> EventListener {
    EventListener::new(el, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        handler();
    })
}

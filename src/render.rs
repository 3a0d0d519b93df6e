use crate::core::style;
use crate::core::{ActivationLook, HeroFrame, Layer, Property, ShapeFrame, StarLayer};
use crate::dom::set_style;
use web_sys as web;

/// DOM nodes the hero choreography writes to. Every layer is optional; a
/// missing node just isn't drawn.
pub struct HeroElements {
    pub container: web::HtmlElement,
    pub hints: Vec<web::HtmlElement>,
    pub window: Option<web::HtmlElement>,
    pub vignette: Option<web::HtmlElement>,
    pub content: Option<web::HtmlElement>,
    pub circle: Option<web::HtmlElement>,
    pub background: Option<web::HtmlElement>,
    pub text: Option<web::HtmlElement>,
    pub reveals: Vec<web::HtmlElement>,
}

pub fn apply_hero(els: &HeroElements, frame: &HeroFrame) {
    let tl = &frame.timeline;
    set_style(&els.container, "transform", &style::translate_y(frame.hold_offset));

    let hint_opacity = style::number(tl.get_or(Layer::ScrollHint, Property::Opacity, 1.0));
    let hint_y = style::translate_y(tl.get_or(Layer::ScrollHint, Property::TranslateY, 0.0));
    for el in &els.hints {
        set_style(el, "opacity", &hint_opacity);
        set_style(el, "transform", &hint_y);
    }

    if let Some(el) = &els.window {
        set_style(el, "transform", &style::scale(tl.get_or(Layer::Window, Property::Scale, 1.0)));
        set_style(el, "opacity", &style::number(tl.get_or(Layer::Window, Property::Opacity, 1.0)));
    }
    if let Some(el) = &els.vignette {
        let opacity = tl.get_or(Layer::Vignette, Property::Opacity, 1.0);
        set_style(el, "opacity", &style::number(opacity));
    }
    if let Some(el) = &els.content {
        let blur = tl.get_or(Layer::HeroContent, Property::Blur, 0.0);
        let brightness = tl.get_or(Layer::HeroContent, Property::Brightness, 1.0);
        set_style(el, "filter", &style::blur_brightness(blur, brightness));
        let scale = tl.get_or(Layer::HeroContent, Property::Scale, 1.0);
        set_style(el, "transform", &style::scale(scale));
    }
    if let Some(el) = &els.circle {
        if let Some(top) = tl.get(Layer::GlowCircle, Property::TopPercent) {
            set_style(el, "top", &style::percent(top));
        }
        set_style(el, "transform", &style::translate_y(frame.parallax.circle_y));
    }
    if let Some(el) = &els.background {
        set_style(el, "transform", &style::translate_y(frame.parallax.background_y));
    }
    if let Some(el) = &els.text {
        set_style(el, "transform", &style::translate_y(frame.parallax.text_y));
        set_style(el, "opacity", &style::number(frame.parallax.text_opacity));
    }

    for (i, el) in els.reveals.iter().enumerate() {
        let layer = Layer::Reveal(i);
        set_style(el, "opacity", &style::number(tl.get_or(layer, Property::Opacity, 1.0)));
        let y = tl.get_or(layer, Property::TranslateY, 0.0);
        set_style(el, "transform", &style::translate_y(y));
        set_style(el, "filter", &style::blur(tl.get_or(layer, Property::Blur, 0.0)));
    }
}

pub fn apply_shape(el: &web::HtmlElement, shape: &ShapeFrame) {
    set_style(el, "transform", &style::translate_scale(shape.x, shape.y, shape.scale));
    set_style(el, "opacity", &style::number(shape.opacity));
}

pub fn apply_ring_accent(ring: &web::HtmlElement, accent: bool) {
    let color = if accent {
        style::RING_BORDER_ACCENT
    } else {
        style::RING_BORDER
    };
    set_style(ring, "border-color", color);
}

pub fn apply_activation(
    frame: &web::HtmlElement,
    affordance: Option<&web::HtmlElement>,
    look: ActivationLook,
) {
    set_style(frame, "transform", &style::scale(look.scale));
    set_style(frame, "opacity", &style::number(look.opacity));
    if let Some(el) = affordance {
        set_style(el, "opacity", if look.play_affordance_visible { "1" } else { "0" });
    }
}

pub fn apply_star_tier(el: &web::HtmlElement, layer: &StarLayer, elapsed_secs: f64) {
    set_style(el, "transform", &style::translate_y(layer.drift_offset(elapsed_secs)));
}

pub fn apply_nav(nav: &web::HtmlElement, y: f32, opacity: f32) {
    set_style(nav, "transform", &style::translate_y(y));
    set_style(nav, "opacity", &style::number(opacity));
    set_style(nav, "pointer-events", if opacity > 0.5 { "auto" } else { "none" });
}

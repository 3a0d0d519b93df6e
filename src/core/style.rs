use super::starfield::{StarColor, StarPoint};
use std::fmt::Write;

pub const STAR_WHITE: &str = "#FFF";
pub const STAR_ACCENT: &str = "rgba(249, 115, 22, 0.8)";
pub const RING_BORDER: &str = "rgba(249, 115, 22, 0.3)";
pub const RING_BORDER_ACCENT: &str = "rgba(249, 115, 22, 0.6)";

// Round to two decimals so style strings stay short and stable between frames.
#[inline]
fn r2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

pub fn translate_scale(x: f32, y: f32, scale: f32) -> String {
    format!(
        "translate3d({}px, {}px, 0) scale({})",
        r2(x),
        r2(y),
        r2(scale)
    )
}

pub fn translate_y(y: f32) -> String {
    format!("translate3d(0, {}px, 0)", r2(y))
}

pub fn translate_y_pct(pct: f32) -> String {
    format!("translate3d(0, {}%, 0)", r2(pct))
}

pub fn scale(s: f32) -> String {
    format!("scale({})", r2(s))
}

pub fn blur(px: f32) -> String {
    format!("blur({}px)", r2(px.max(0.0)))
}

pub fn blur_brightness(px: f32, brightness: f32) -> String {
    format!("blur({}px) brightness({})", r2(px.max(0.0)), r2(brightness))
}

pub fn percent(v: f32) -> String {
    format!("{}%", r2(v))
}

pub fn number(v: f32) -> String {
    format!("{}", r2(v))
}

pub fn star_color(color: StarColor) -> &'static str {
    match color {
        StarColor::White => STAR_WHITE,
        StarColor::Accent => STAR_ACCENT,
    }
}

/// Render points as a CSS `box-shadow` list, one shadow per star.
pub fn box_shadow(points: &[StarPoint]) -> String {
    let mut out = String::with_capacity(points.len() * 24);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        _ = write!(out, "{}px {}px {}", p.x, p.y, star_color(p.color));
    }
    out
}

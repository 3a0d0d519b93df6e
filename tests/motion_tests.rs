// Host-side tests for easing curves, springs and scroll tweens.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod ease {
    include!("../src/core/ease.rs");
}
mod spring {
    include!("../src/core/spring.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use ease::*;
use scroll::*;
use spring::*;

const CURVES: [Ease; 4] = [Ease::Linear, Ease::Power1InOut, Ease::Power2Out, Ease::Power2InOut];

#[test]
fn curves_pin_endpoints_and_clamp() {
    for e in CURVES {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?}");
        assert_eq!(e.apply(-3.0), e.apply(0.0));
        assert_eq!(e.apply(4.0), e.apply(1.0));
    }
}

#[test]
fn curves_are_monotonic() {
    for e in CURVES {
        let mut prev = 0.0;
        for i in 0..=1000 {
            let v = e.apply(i as f32 / 1000.0);
            assert!(v + 1e-6 >= prev, "{e:?} decreased at {i}");
            prev = v;
        }
    }
}

#[test]
fn curve_midpoints() {
    assert!((Ease::Power1InOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!((Ease::Power2Out.apply(0.5) - 0.875).abs() < 1e-6);
    assert_eq!(Ease::default(), Ease::Linear);
}

#[test]
fn remap_clamps_both_ends() {
    assert_eq!(remap_clamped(-5.0, 0.0, 10.0, 100.0, 200.0), 100.0);
    assert_eq!(remap_clamped(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
    assert_eq!(remap_clamped(50.0, 0.0, 10.0, 100.0, 200.0), 200.0);
    assert_eq!(remap_clamped(3.0, 3.0, 3.0, 0.0, 1.0), 1.0);
}

#[test]
fn spring_settles_on_target() {
    let mut s = Spring::new(0.0, SpringParams::new(600.0, 30.0, 0.3));
    s.set_target(1.0);
    for _ in 0..120 {
        s.step(1.0 / 60.0);
    }
    assert!((s.position() - 1.0).abs() < 1e-3);
    assert!(s.is_at_rest());
}

#[test]
fn underdamped_spring_overshoots_then_settles() {
    let mut s = Spring::new(0.0, SpringParams::new(120.0, 5.0, 1.0));
    s.set_target(100.0);
    let mut peak: f32 = 0.0;
    for _ in 0..600 {
        s.step(1.0 / 60.0);
        peak = peak.max(s.position());
    }
    assert!(peak > 100.0);
    assert!((s.position() - 100.0).abs() < 0.5);
}

#[test]
fn spring_survives_long_stall() {
    let mut s = Spring::new(0.0, SpringParams::new(600.0, 30.0, 0.3));
    s.set_target(50.0);
    s.step(10.0);
    assert!(s.position().is_finite());
    assert!(s.position() <= 50.0 + 1.0);
}

#[test]
fn spring_zero_dt_holds_position() {
    let mut s = Spring::new(3.0, SpringParams::new(200.0, 20.0, 0.5));
    assert!(s.is_at_rest());
    s.set_target(10.0);
    s.step(0.0);
    assert_eq!((s.position(), s.target()), (3.0, 10.0));
    assert!(!s.is_at_rest());
}

#[test]
fn tween_follows_ease_and_finishes() {
    let mut t = ScrollTween::new(0.0, 1200.0, 2.5, Ease::Power2InOut);
    assert!(!t.is_finished());
    let mid = t.advance(1.25);
    assert!((mid - 600.0).abs() < 1e-3, "mid={mid}");
    let end = t.advance(2.0);
    assert_eq!(end, 1200.0);
    assert!(t.is_finished());
}

#[test]
fn zero_length_tween_jumps() {
    let mut t = ScrollTween::new(300.0, 0.0, 0.0, Ease::Linear);
    assert_eq!(t.advance(0.016), 0.0);
    assert!(t.is_finished());
}

#[test]
fn section_progress_spans_viewport_entry_to_exit() {
    let vh = 1000.0;
    assert_eq!(section_progress(vh, 2000.0, vh), 0.0);
    assert_eq!(section_progress(-2000.0, 2000.0, vh), 1.0);
    assert!((section_progress(-500.0, 2000.0, vh) - 0.5).abs() < 1e-6);
    assert_eq!(section_progress(5000.0, 2000.0, vh), 0.0);
    assert_eq!(backdrop_shift_pct(0.5, 50.0), 25.0);
    assert_eq!(backdrop_shift_pct(3.0, 50.0), 50.0);
}

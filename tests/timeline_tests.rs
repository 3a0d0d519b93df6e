// Host-side tests for the pinned hero timeline and post-pin parallax.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod ease {
    include!("../src/core/ease.rs");
}
mod timeline {
    include!("../src/core/timeline.rs");
}

use ease::Ease;
use timeline::*;

const EPS: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn all_keys(reveals: usize) -> Vec<(Layer, Property)> {
    let tl = hero_timeline(reveals);
    let mut keys: Vec<_> = tl.segments().iter().map(|s| (s.target, s.property)).collect();
    keys.sort();
    keys.dedup();
    keys
}

#[test]
fn hero_timeline_has_expected_shape() {
    let tl = hero_timeline(5);
    assert_eq!(tl.segments().len(), 2 + 6 + 1 + 3 * 5);
    assert!(approx(tl.duration(), 0.75), "duration {}", tl.duration());
    assert!(approx(hero_timeline(0).duration(), 0.6));
}

#[test]
fn start_of_timeline_holds_initial_values() {
    let f = hero_timeline(3).sample(0.0);
    assert!(approx(f.get(Layer::ScrollHint, Property::Opacity).unwrap(), 1.0));
    assert!(approx(f.get(Layer::Window, Property::Scale).unwrap(), 1.0));
    assert!(approx(f.get(Layer::Window, Property::Opacity).unwrap(), 1.0));
    assert!(approx(f.get(Layer::Vignette, Property::Opacity).unwrap(), 1.0));
    assert!(approx(f.get(Layer::GlowCircle, Property::TopPercent).unwrap(), 20.0));
    assert!(approx(f.get(Layer::HeroContent, Property::Blur).unwrap(), 8.0));
    assert!(approx(f.get(Layer::HeroContent, Property::Brightness).unwrap(), 1.2));
    assert!(approx(f.get(Layer::HeroContent, Property::Scale).unwrap(), 1.05));
    for i in 0..3 {
        assert!(approx(f.get(Layer::Reveal(i), Property::Opacity).unwrap(), 0.0));
        assert!(approx(f.get(Layer::Reveal(i), Property::TranslateY).unwrap(), 30.0));
        assert!(approx(f.get(Layer::Reveal(i), Property::Blur).unwrap(), 10.0));
    }
}

#[test]
fn end_of_timeline_reaches_final_values() {
    let f = hero_timeline(3).sample(1.0);
    assert!(approx(f.get(Layer::ScrollHint, Property::Opacity).unwrap(), 0.0));
    assert!(approx(f.get(Layer::ScrollHint, Property::TranslateY).unwrap(), -20.0));
    assert!(approx(f.get(Layer::Window, Property::Scale).unwrap(), 12.0));
    assert!(approx(f.get(Layer::Window, Property::Opacity).unwrap(), 0.0));
    assert!(approx(f.get(Layer::Vignette, Property::Opacity).unwrap(), 0.0));
    assert!(approx(f.get(Layer::GlowCircle, Property::TopPercent).unwrap(), 65.0));
    assert!(approx(f.get(Layer::HeroContent, Property::Blur).unwrap(), 0.0));
    assert!(approx(f.get(Layer::HeroContent, Property::Brightness).unwrap(), 1.0));
    assert!(approx(f.get(Layer::HeroContent, Property::Scale).unwrap(), 1.0));
    for i in 0..3 {
        assert!(approx(f.get(Layer::Reveal(i), Property::Opacity).unwrap(), 1.0));
        assert!(approx(f.get(Layer::Reveal(i), Property::TranslateY).unwrap(), 0.0));
    }
}

#[test]
fn phases_run_in_order() {
    let tl = hero_timeline(2);
    // Hint is gone before the window finishes zooming.
    let f = tl.sample_time(0.15);
    assert!(approx(f.get(Layer::ScrollHint, Property::Opacity).unwrap(), 0.0));
    assert!(f.get(Layer::Window, Property::Scale).unwrap() < 12.0);
    // Window mask still fully opaque until its fade starts.
    assert!(approx(tl.sample_time(0.44).get(Layer::Window, Property::Opacity).unwrap(), 1.0));
    // Second reveal element trails the first.
    let f = tl.sample_time(0.3);
    let first = f.get(Layer::Reveal(0), Property::Opacity).unwrap();
    let second = f.get(Layer::Reveal(1), Property::Opacity).unwrap();
    assert!(first > second && second > 0.0);
}

#[test]
fn every_property_is_continuous_across_scroll() {
    let choreo = ScrollChoreographer::new(HeroConfig::default(), 0.0, 800.0);
    let keys = all_keys(HeroConfig::default().reveal_count);
    let end = choreo.pin().end();
    let steps = 12_000;
    let mut prev = choreo.frame(0.0);
    for i in 1..=steps {
        let scroll = end * i as f32 / steps as f32;
        let cur = choreo.frame(scroll);
        assert!(cur.progress >= prev.progress, "progress went backwards at {scroll}");
        for &(layer, prop) in &keys {
            let a = prev.timeline.get(layer, prop).unwrap();
            let b = cur.timeline.get(layer, prop).unwrap();
            assert!((a - b).abs() < 0.05, "{layer:?}/{prop:?} jumped {a} -> {b} at {scroll}");
        }
        prev = cur;
    }
}

#[test]
fn progress_is_monotonic_and_bounded() {
    let pin = PinnedScroll::at_mount(0.0, 800.0, 1.5);
    assert!(approx(pin.distance, 1200.0));
    let mut last = -1.0;
    for s in (-200..1600).step_by(7) {
        let p = pin.progress(s as f32);
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= last);
        last = p;
    }
    assert!(approx(pin.progress(600.0), 0.5));
    assert!(pin.is_pinned(0.0));
    assert!(pin.is_pinned(1199.0));
    assert!(!pin.is_pinned(1200.0));
}

#[test]
fn hold_offset_tracks_scroll_only_while_pinned() {
    let pin = PinnedScroll::at_mount(100.0, 800.0, 1.5);
    assert_eq!(pin.hold_offset(0.0), 0.0);
    assert_eq!(pin.hold_offset(700.0), 600.0);
    assert_eq!(pin.hold_offset(1300.0), 1200.0);
    assert_eq!(pin.hold_offset(9000.0), 1200.0);
}

#[test]
fn pin_distance_is_fixed_at_mount() {
    let choreo = ScrollChoreographer::new(HeroConfig::default(), 0.0, 800.0);
    // A later resize does not reach the choreographer; offsets stay as mounted.
    assert!(approx(choreo.pin().end(), 1200.0));
    assert!(approx(choreo.frame(1200.0).progress, 1.0));
}

#[test]
fn zero_pin_distance_jumps_to_end() {
    let pin = PinnedScroll::at_mount(100.0, 0.0, 1.5);
    assert_eq!(pin.progress(99.0), 0.0);
    assert_eq!(pin.progress(100.0), 1.0);
}

#[test]
fn last_registered_segment_wins_on_overlap() {
    let mut tl = ScrollTimeline::new();
    tl.to(Layer::Window, Property::Scale, 0.0, 1.0, 0.0, 10.0, Ease::Linear)
        .to(Layer::Window, Property::Scale, 0.5, 0.5, 100.0, 200.0, Ease::Linear);
    assert!(approx(tl.sample_time(0.25).get(Layer::Window, Property::Scale).unwrap(), 2.5));
    assert!(approx(tl.sample_time(0.75).get(Layer::Window, Property::Scale).unwrap(), 150.0));
}

#[test]
fn property_holds_from_value_before_its_segment() {
    let mut tl = ScrollTimeline::new();
    tl.to(Layer::Vignette, Property::Opacity, 0.0, 1.0, 0.0, 1.0, Ease::Linear)
        .to(Layer::HeroContent, Property::Blur, 0.5, 0.5, 3.0, 4.0, Ease::Linear);
    let f = tl.sample_time(0.2);
    assert!(approx(f.get(Layer::HeroContent, Property::Blur).unwrap(), 3.0));
    assert_eq!(f.len(), 2);
    assert_eq!(f.get(Layer::Window, Property::Scale), None);
    assert!(approx(f.get_or(Layer::Window, Property::Scale, 7.0), 7.0));
}

#[test]
fn parallax_starts_at_pin_end() {
    let end = 1200.0;
    let p = Parallax::at(end - 300.0, end);
    assert_eq!((p.background_y, p.circle_y, p.text_y, p.text_opacity), (0.0, 0.0, 0.0, 1.0));

    let p = Parallax::at(end + 500.0, end);
    assert!(approx(p.background_y, 500.0));
    assert!(approx(p.circle_y, -75.0));
    assert!(approx(p.text_y, 406.25));
    assert!(approx(p.text_opacity, 0.375));

    let p = Parallax::at(end + 5000.0, end);
    assert!(approx(p.background_y, 1000.0));
    assert!(approx(p.circle_y, -150.0));
    assert!(approx(p.text_y, 650.0));
    assert!(approx(p.text_opacity, 0.0));
}

#[test]
fn background_outpaces_text() {
    let end = 1200.0;
    let p = Parallax::at(end + 400.0, end);
    assert!(p.background_y > p.text_y && p.text_y > 0.0);
    assert!(p.circle_y < 0.0);
}

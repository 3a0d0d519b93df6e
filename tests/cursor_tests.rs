// Host-side tests for pointer zone classification and indicator springs.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod spring {
    include!("../src/core/spring.rs");
}
mod cursor {
    include!("../src/core/cursor.rs");
}

use cursor::*;

fn plain(tag: &str) -> ElementInfo {
    ElementInfo::tag(tag)
}

fn page_tail() -> Vec<ElementInfo> {
    vec![plain("section"), plain("main"), plain("body"), plain("html")]
}

fn chain(head: Vec<ElementInfo>) -> Vec<ElementInfo> {
    let mut c = head;
    c.extend(page_tail());
    c
}

#[test]
fn video_descendant_is_media_at_any_depth() {
    for depth in 0..8 {
        let mut head: Vec<ElementInfo> = (0..depth).map(|_| plain("div")).collect();
        head.insert(0, plain("span"));
        head.push(plain("video"));
        assert_eq!(classify(&chain(head)), Zone::Media, "depth {depth}");
    }
}

#[test]
fn video_itself_and_glow_ancestor_are_media() {
    assert_eq!(classify(&chain(vec![plain("video")])), Zone::Media);
    let head = vec![plain("h3"), plain("div"), plain("div").with_media_glow(true)];
    assert_eq!(classify(&chain(head)), Zone::Media);
}

#[test]
fn media_outranks_interactive() {
    let head = vec![plain("video"), plain("a")];
    assert_eq!(classify(&chain(head)), Zone::Media);
    let head = vec![plain("button"), plain("div").with_media_glow(true)];
    assert_eq!(classify(&chain(head)), Zone::Media);
}

#[test]
fn links_buttons_and_hoverable_are_interactive() {
    assert_eq!(classify(&chain(vec![plain("a")])), Zone::Interactive);
    assert_eq!(classify(&chain(vec![plain("svg"), plain("span"), plain("a")])), Zone::Interactive);
    assert_eq!(classify(&chain(vec![plain("span"), plain("button")])), Zone::Interactive);
    assert_eq!(classify(&chain(vec![plain("div").with_hoverable(true)])), Zone::Interactive);
}

#[test]
fn hoverable_marker_only_counts_on_the_hovered_element() {
    let head = vec![plain("span"), plain("div").with_hoverable(true)];
    assert_eq!(classify(&chain(head)), Zone::Default);
}

#[test]
fn tag_matching_ignores_case() {
    assert_eq!(classify(&[ElementInfo {
        tag: "Video".into(),
        ..ElementInfo::default()
    }]), Zone::Media);
}

#[test]
fn unmarked_element_stays_default_with_default_targets() {
    let mut state = PointerState::default();
    let changed = state.on_over(&chain(vec![plain("p"), plain("div")]));
    assert!(!changed);
    assert_eq!(state.zone, Zone::Default);
    let t = state.targets();
    assert_eq!(t, IndicatorTargets::for_zone(Zone::Default));
    assert_eq!((t.dot.scale, t.dot.opacity), (1.0, 1.0));
    assert_eq!((t.ring.scale, t.ring.opacity), (1.0, 0.5));
    assert!(!t.ring_accent);
}

#[test]
fn empty_chain_is_default() {
    assert_eq!(classify(&[]), Zone::Default);
}

#[test]
fn zone_presets_match_design() {
    let media = IndicatorTargets::for_zone(Zone::Media);
    assert_eq!((media.dot.scale, media.dot.opacity), (0.5, 0.3));
    assert_eq!((media.ring.scale, media.ring.opacity), (2.5, 0.3));
    assert!(media.ring_accent);

    let hover = IndicatorTargets::for_zone(Zone::Interactive);
    assert_eq!((hover.dot.scale, hover.dot.opacity), (2.0, 1.0));
    assert_eq!((hover.ring.scale, hover.ring.opacity), (1.2, 0.0));
}

#[test]
fn pointer_out_without_related_target_resets_zone() {
    for start in [Zone::Media, Zone::Interactive, Zone::Default] {
        let mut state = PointerState {
            zone: start,
            ..PointerState::default()
        };
        state.on_out(false);
        assert_eq!(state.zone, Zone::Default);
    }
}

#[test]
fn pointer_out_into_another_element_keeps_zone() {
    let mut state = PointerState::default();
    assert!(state.on_over(&chain(vec![plain("a")])));
    assert!(!state.on_out(true));
    assert_eq!(state.zone, Zone::Interactive);
}

#[test]
fn move_updates_position_only() {
    let mut state = PointerState::default();
    state.on_over(&chain(vec![plain("video")]));
    state.on_move(12.0, 34.0);
    assert_eq!(state.pos, glam::Vec2::new(12.0, 34.0));
    assert_eq!(state.zone, Zone::Media);
}

#[test]
fn indicators_settle_centered_on_pointer() {
    let mut animator = IndicatorAnimator::new(CursorConfig::default());
    let mut state = PointerState::default();
    state.on_move(100.0, 200.0);
    let mut last = None;
    for _ in 0..120 {
        last = Some(animator.tick(&state, 1.0 / 60.0));
    }
    let (dot, ring) = last.unwrap();
    assert!((dot.x - 94.0).abs() < 0.05, "dot.x={}", dot.x);
    assert!((dot.y - 194.0).abs() < 0.05, "dot.y={}", dot.y);
    assert!((ring.x - 80.0).abs() < 0.05, "ring.x={}", ring.x);
    assert!((ring.y - 180.0).abs() < 0.05, "ring.y={}", ring.y);
}

#[test]
fn indicators_chase_zone_targets() {
    let mut animator = IndicatorAnimator::new(CursorConfig::default());
    let mut state = PointerState::default();
    state.on_over(&chain(vec![plain("button")]));
    let mut last = None;
    for _ in 0..120 {
        last = Some(animator.tick(&state, 1.0 / 60.0));
    }
    let (dot, ring) = last.unwrap();
    assert!((dot.scale - 2.0).abs() < 0.01);
    assert!((ring.scale - 1.2).abs() < 0.01);
    assert!(ring.opacity < 0.01);
}

#[test]
fn dot_spring_responds_faster_than_ring() {
    let mut animator = IndicatorAnimator::new(CursorConfig::default());
    let mut state = PointerState::default();
    state.on_move(300.0, 0.0);
    let (dot, ring) = animator.tick(&state, 0.05);
    let dot_progress = (dot.x + 6.0) / 300.0;
    let ring_progress = (ring.x + 20.0) / 300.0;
    assert!(dot_progress > ring_progress);
}

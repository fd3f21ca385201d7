//! Carousel Flow Integration Tests
//!
//! Reel paging, media paging, playback exclusivity and the progress
//! controller, through the widget's input routing.

use crate::helpers::{
    mouse, report_carousel_region, touch, touch_end_holding, Clock, TestWidgetBuilder, VIDEO_DURATION_SECS,
};
use evo_reels::app::WidgetInput;
use evo_reels::data::ProductId;
use evo_reels::media::{MediaElement, SimulatedMedia};
use evo_reels::overlay::OverlayEvent;
use evo_reels::types::Bounds;
use evo_reels::ReelsWidget;

const TRACK: Bounds = Bounds::new(360.0, 700.0, 200.0, 6.0);

fn open_two(clock: &Clock) -> ReelsWidget<SimulatedMedia> {
    let (mut widget, _body) = TestWidgetBuilder::new().with_two_products().build();
    widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse(1200.0, 720.0),
        },
        clock.at(0),
    );
    report_carousel_region(&mut widget, clock);
    widget
}

fn key(name: &str) -> WidgetInput {
    WidgetInput::Key { key: name.to_string() }
}

fn primary_media(widget: &ReelsWidget<SimulatedMedia>) -> &SimulatedMedia {
    widget.overlay().unwrap().carousel().media(0).unwrap()
}

fn advance_primary(widget: &mut ReelsWidget<SimulatedMedia>, clock: &Clock, ms: u64, seconds: f64) -> f64 {
    widget
        .overlay_mut()
        .unwrap()
        .carousel_mut()
        .media_mut(0)
        .unwrap()
        .advance(seconds);
    widget.dispatch(WidgetInput::TimeUpdate { reel: 0 }, clock.at(ms));
    widget.view().overlay.unwrap().carousel.reels[0]
        .progress
        .as_ref()
        .unwrap()
        .fill_percent
}

#[test]
fn test_reel_change_pauses_and_restarts() {
    let clock = Clock::new();
    let mut widget = open_two(&clock);
    advance_primary(&mut widget, &clock, 100, 4.0);

    let routed = widget.dispatch(key("ArrowDown"), clock.at(200));
    assert!(routed.outcome.prevent_default);
    assert_eq!(
        routed.events,
        vec![OverlayEvent::ActiveRecordChanged(ProductId::new("2"))]
    );

    let overlay = widget.overlay().unwrap();
    assert_eq!(overlay.carousel().active_index(), 1);
    assert_eq!(overlay.carousel().playing_count(), 0);
    assert!(primary_media(&widget).is_paused());
    assert_eq!(
        widget.view().overlay.unwrap().detail_panel.unwrap().title,
        "Red Cap"
    );

    widget.dispatch(key("ArrowUp"), clock.at(300));
    let media = primary_media(&widget);
    assert!(!media.is_paused());
    assert_eq!(media.current_time(), 0.0);
    assert_eq!(widget.overlay().unwrap().carousel().playing_count(), 1);
}

#[test]
fn test_vertical_swipe_needs_fifty_pixels() {
    let clock = Clock::new();
    let mut widget = open_two(&clock);

    widget.dispatch(
        WidgetInput::OverlayPointerDown {
            pointer: mouse(540.0, 600.0),
        },
        clock.at(100),
    );
    widget.dispatch(
        WidgetInput::OverlayPointerUp {
            pointer: mouse(540.0, 570.0),
        },
        clock.at(150),
    );
    assert_eq!(widget.overlay().unwrap().carousel().active_index(), 0);

    widget.dispatch(
        WidgetInput::OverlayPointerDown {
            pointer: mouse(540.0, 600.0),
        },
        clock.at(200),
    );
    let routed = widget.dispatch(
        WidgetInput::OverlayPointerUp {
            pointer: mouse(540.0, 520.0),
        },
        clock.at(250),
    );
    assert!(routed.outcome.handled);
    assert_eq!(widget.overlay().unwrap().carousel().active_index(), 1);
    assert!(widget.is_overlay_open());
}

#[test]
fn test_single_record_has_no_outer_navigation() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new().build();
    widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse(1200.0, 720.0),
        },
        clock.at(0),
    );

    let routed = widget.dispatch(key("ArrowDown"), clock.at(100));
    assert!(!routed.outcome.handled);
    assert_eq!(widget.overlay().unwrap().carousel().active_index(), 0);
    assert!(!widget.view().overlay.unwrap().carousel.outer_navigation);
}

#[test]
fn test_media_paging_controls_video() {
    let clock = Clock::new();
    let mut widget = open_two(&clock);

    widget.dispatch(key("ArrowRight"), clock.at(100));
    let view = widget.view().overlay.unwrap();
    let reel = &view.carousel.reels[0];
    assert_eq!(reel.active_slide, 1);
    assert!(!reel.playing);
    assert!(!reel.progress.as_ref().unwrap().track_visible);

    widget.dispatch(WidgetInput::SelectMedia { index: 0 }, clock.at(200));
    let view = widget.view().overlay.unwrap();
    let reel = &view.carousel.reels[0];
    assert_eq!(reel.active_slide, 0);
    assert!(reel.playing);
    assert!(reel.progress.as_ref().unwrap().track_visible);
    assert_eq!(primary_media(&widget).current_time(), 0.0);
}

#[test]
fn test_progress_is_monotonic_and_seekable() {
    let clock = Clock::new();
    let mut widget = open_two(&clock);

    let mut last = 0.0;
    for step in 1..=4u64 {
        let fill = advance_primary(&mut widget, &clock, step * 100, 2.0);
        assert!(fill >= last, "fill went backwards: {fill} < {last}");
        last = fill;
    }
    assert!((last - 40.0).abs() < 1e-9);

    // Mouse click at the middle of the track
    widget.dispatch(
        WidgetInput::TrackClick {
            pointer: mouse(460.0, 703.0),
            track: TRACK,
        },
        clock.at(600),
    );
    assert!((primary_media(&widget).current_time() - VIDEO_DURATION_SECS / 2.0).abs() < 1e-6);
    let fill = widget.view().overlay.unwrap().carousel.reels[0]
        .progress
        .as_ref()
        .unwrap()
        .fill_percent;
    assert!((fill - 50.0).abs() < 1e-6);
}

#[test]
fn test_mute_is_per_video_and_survives_paging() {
    let clock = Clock::new();
    let mut widget = open_two(&clock);

    widget.dispatch(WidgetInput::ToggleMute, clock.at(100));
    assert!(!primary_media(&widget).is_muted());
    let progress = widget.view().overlay.unwrap().carousel.reels[0].progress.clone().unwrap();
    assert_eq!(progress.mute_label, "Volume On");

    widget.dispatch(key("ArrowDown"), clock.at(200));
    widget.dispatch(key("ArrowUp"), clock.at(300));
    assert!(!primary_media(&widget).is_muted());
}

#[test]
fn test_tap_toggles_playback_with_feedback() {
    let clock = Clock::new();
    let mut widget = open_two(&clock);

    widget.dispatch(WidgetInput::TapVideo, clock.at(100));
    assert!(primary_media(&widget).is_paused());
    let progress = widget.view().overlay.unwrap().carousel.reels[0].progress.clone().unwrap();
    assert!(progress.feedback.is_some());

    widget.dispatch(WidgetInput::Tick, clock.at(1000));
    let progress = widget.view().overlay.unwrap().carousel.reels[0].progress.clone().unwrap();
    assert!(progress.feedback.is_none());

    widget.dispatch(WidgetInput::TapVideo, clock.at(1100));
    assert!(!primary_media(&widget).is_paused());
}

#[test]
fn test_tap_on_image_slide_keeps_video_paused() {
    let clock = Clock::new();
    let mut widget = open_two(&clock);

    widget.dispatch(WidgetInput::SelectMedia { index: 1 }, clock.at(100));
    assert!(primary_media(&widget).is_paused());

    widget.dispatch(WidgetInput::TapVideo, clock.at(200));
    assert!(primary_media(&widget).is_paused());
    let view = widget.view().overlay.unwrap();
    assert!(!view.carousel.reels[0].playing);
    assert!(view.carousel.reels[0].progress.as_ref().unwrap().feedback.is_none());
}

#[test]
fn test_touch_seek_reads_lifted_finger() {
    let clock = Clock::new();
    let mut widget = open_two(&clock);

    widget.dispatch(
        WidgetInput::TrackPress {
            pointer: touch(&[(510.0, 703.0)]),
        },
        clock.at(100),
    );
    widget.dispatch(
        WidgetInput::TrackRelease {
            pointer: touch_end_holding(&[(510.0, 703.0)], &[(380.0, 300.0)]),
            track: TRACK,
        },
        clock.at(150),
    );

    let expected = VIDEO_DURATION_SECS * 0.75;
    assert!((primary_media(&widget).current_time() - expected).abs() < 1e-6);
}

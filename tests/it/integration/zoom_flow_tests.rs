//! Zoom Flow Integration Tests
//!
//! Pinch, lock, pan and double-tap reset on image slides, and how zoom gates
//! carousel swiping.

use crate::helpers::{
    mouse, report_carousel_region, touch, touch_end, Clock, TestWidgetBuilder, IMAGE_BOUNDS,
};
use evo_reels::app::WidgetInput;
use evo_reels::media::SimulatedMedia;
use evo_reels::zoom::ZoomView;
use evo_reels::ReelsWidget;

const CENTER: (f32, f32) = (540.0, 240.0);

fn open_on_image(viewport: (f32, f32), clock: &Clock) -> ReelsWidget<SimulatedMedia> {
    let (mut widget, _body) = TestWidgetBuilder::new()
        .with_two_products()
        .with_viewport(viewport.0, viewport.1)
        .build();
    widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse(1200.0, 720.0),
        },
        clock.at(0),
    );
    report_carousel_region(&mut widget, clock);
    widget.dispatch(WidgetInput::SelectMedia { index: 1 }, clock.at(10));
    widget
}

fn pinch(widget: &mut ReelsWidget<SimulatedMedia>, clock: &Clock, ms: u64, from: f32, to: f32) {
    let (cx, cy) = CENTER;
    widget.dispatch(
        WidgetInput::OverlayPointerDown {
            pointer: touch(&[(cx - from / 2.0, cy), (cx + from / 2.0, cy)]),
        },
        clock.at(ms),
    );
    widget.dispatch(
        WidgetInput::OverlayPointerMove {
            pointer: touch(&[(cx - to / 2.0, cy), (cx + to / 2.0, cy)]),
            image: IMAGE_BOUNDS,
        },
        clock.at(ms + 16),
    );
    widget.dispatch(
        WidgetInput::OverlayPointerUp {
            pointer: touch_end(&[(cx - to / 2.0, cy), (cx + to / 2.0, cy)]),
        },
        clock.at(ms + 32),
    );
}

fn tap(widget: &mut ReelsWidget<SimulatedMedia>, clock: &Clock, ms: u64, at: (f32, f32)) {
    widget.dispatch(
        WidgetInput::OverlayPointerDown {
            pointer: touch(&[at]),
        },
        clock.at(ms),
    );
    widget.dispatch(
        WidgetInput::OverlayPointerUp {
            pointer: touch_end(&[at]),
        },
        clock.at(ms + 40),
    );
}

fn image_zoom(widget: &ReelsWidget<SimulatedMedia>, slide: usize) -> ZoomView {
    widget.view().overlay.unwrap().carousel.reels[0].slides[slide]
        .zoom
        .expect("image slides carry a zoom transform")
}

#[test]
fn test_pinch_locks_and_blocks_swipe() {
    let clock = Clock::new();
    let mut widget = open_on_image((390.0, 844.0), &clock);

    pinch(&mut widget, &clock, 100, 100.0, 200.0);
    let zoom = image_zoom(&widget, 1);
    assert_eq!(zoom.scale, 2.0);
    assert!(zoom.locked_for_pan);
    assert!(!zoom.swipe_enabled);
    assert_eq!((zoom.origin_x_percent, zoom.origin_y_percent), (50.0, 50.0));

    let routed = widget.dispatch(WidgetInput::Key { key: "ArrowRight".into() }, clock.at(200));
    assert!(!routed.outcome.handled);

    widget.dispatch(
        WidgetInput::OverlayPointerDown {
            pointer: mouse(600.0, 300.0),
        },
        clock.at(300),
    );
    widget.dispatch(
        WidgetInput::OverlayPointerUp {
            pointer: mouse(450.0, 300.0),
        },
        clock.at(350),
    );
    assert_eq!(widget.view().overlay.unwrap().carousel.reels[0].active_slide, 1);
}

#[test]
fn test_wheel_does_not_page_zoomed_image() {
    let clock = Clock::new();
    let mut widget = open_on_image((390.0, 844.0), &clock);

    pinch(&mut widget, &clock, 100, 100.0, 250.0);
    let routed = widget.dispatch(WidgetInput::Wheel { dx: 0.0, dy: 120.0 }, clock.at(200));
    assert!(!routed.outcome.prevent_default);

    let view = widget.view().overlay.unwrap();
    assert_eq!(view.carousel.active_index, 0);
    assert_eq!(view.carousel.reels[0].active_slide, 1);
    assert_eq!(image_zoom(&widget, 1).scale, 2.5);

    widget.dispatch(WidgetInput::Wheel { dx: 120.0, dy: 0.0 }, clock.at(300));
    assert_eq!(widget.view().overlay.unwrap().carousel.reels[0].active_slide, 1);
}

#[test]
fn test_double_tap_at_two_and_a_half_resets() {
    let clock = Clock::new();
    let mut widget = open_on_image((390.0, 844.0), &clock);

    pinch(&mut widget, &clock, 100, 100.0, 250.0);
    assert_eq!(image_zoom(&widget, 1).scale, 2.5);

    tap(&mut widget, &clock, 1000, (500.0, 300.0));
    tap(&mut widget, &clock, 1200, (500.0, 300.0));

    let zoom = image_zoom(&widget, 1);
    assert_eq!(zoom.scale, 1.0);
    assert_eq!((zoom.origin_x_percent, zoom.origin_y_percent), (50.0, 50.0));
    assert!(zoom.swipe_enabled);

    let routed = widget.dispatch(WidgetInput::Key { key: "ArrowRight".into() }, clock.at(1500));
    assert!(routed.outcome.handled);
    assert_eq!(widget.view().overlay.unwrap().carousel.reels[0].active_slide, 2);
}

#[test]
fn test_slow_taps_do_not_reset() {
    let clock = Clock::new();
    let mut widget = open_on_image((390.0, 844.0), &clock);

    pinch(&mut widget, &clock, 100, 100.0, 250.0);
    tap(&mut widget, &clock, 1000, (500.0, 300.0));
    tap(&mut widget, &clock, 1400, (500.0, 300.0));

    assert_eq!(image_zoom(&widget, 1).scale, 2.5);
}

#[test]
fn test_small_pinch_snaps_back() {
    let clock = Clock::new();
    let mut widget = open_on_image((390.0, 844.0), &clock);

    pinch(&mut widget, &clock, 100, 100.0, 120.0);

    let zoom = image_zoom(&widget, 1);
    assert_eq!(zoom.scale, 1.0);
    assert!(!zoom.locked_for_pan);
    assert!(zoom.swipe_enabled);
}

#[test]
fn test_scale_is_clamped_and_pan_stays_in_bounds() {
    let clock = Clock::new();
    let mut widget = open_on_image((390.0, 844.0), &clock);

    pinch(&mut widget, &clock, 100, 100.0, 600.0);
    assert_eq!(image_zoom(&widget, 1).scale, 4.0);

    widget.dispatch(
        WidgetInput::OverlayPointerDown {
            pointer: touch(&[(440.0, 140.0)]),
        },
        clock.at(1000),
    );
    widget.dispatch(
        WidgetInput::OverlayPointerMove {
            pointer: touch(&[(440.0, 140.0)]),
            image: IMAGE_BOUNDS,
        },
        clock.at(1016),
    );
    let zoom = image_zoom(&widget, 1);
    assert_eq!((zoom.origin_x_percent, zoom.origin_y_percent), (25.0, 25.0));

    widget.dispatch(
        WidgetInput::OverlayPointerMove {
            pointer: touch(&[(100.0, 20.0)]),
            image: IMAGE_BOUNDS,
        },
        clock.at(1032),
    );
    let zoom = image_zoom(&widget, 1);
    assert_eq!((zoom.origin_x_percent, zoom.origin_y_percent), (0.0, 0.0));
    assert_eq!(zoom.scale, 4.0);
}

#[test]
fn test_leaving_slide_resets_zoom() {
    let clock = Clock::new();
    let mut widget = open_on_image((390.0, 844.0), &clock);

    pinch(&mut widget, &clock, 100, 100.0, 200.0);
    widget.dispatch(WidgetInput::SelectMedia { index: 0 }, clock.at(500));

    let zoom = image_zoom(&widget, 1);
    assert_eq!(zoom.scale, 1.0);
    assert!(zoom.swipe_enabled);
}

#[test]
fn test_mouse_hover_magnifies_on_desktop() {
    let clock = Clock::new();
    let mut widget = open_on_image((1280.0, 800.0), &clock);

    widget.dispatch(
        WidgetInput::OverlayPointerMove {
            pointer: mouse(440.0, 140.0),
            image: IMAGE_BOUNDS,
        },
        clock.at(100),
    );
    let view = widget.view().overlay.unwrap();
    assert_eq!(view.carousel.reels[0].slides[1].hover_origin, Some((25.0, 25.0)));

    widget.dispatch(
        WidgetInput::OverlayPointerMove {
            pointer: mouse(10.0, 10.0),
            image: IMAGE_BOUNDS,
        },
        clock.at(200),
    );
    let view = widget.view().overlay.unwrap();
    assert_eq!(view.carousel.reels[0].slides[1].hover_origin, None);
}

//! Mini Player Flow Integration Tests
//!
//! Drag versus tap on the floating player, the close control, and anchoring
//! across viewport changes.

use crate::helpers::{
    mouse, mouse_gesture, mouse_on, touch, touch_gesture, Clock, TestWidgetBuilder, PLAYER_BOUNDS,
};
use evo_reels::app::WidgetInput;
use evo_reels::constants::{CLOSE_CONTROL, MINI_PLAYER_Z_INDEX};
use evo_reels::media::MediaElement;
use evo_reels::player::PlayerPhase;
use evo_reels::types::PositionStyle;

#[test]
fn test_tap_under_threshold_opens_overlay_once() {
    let clock = Clock::new();
    let (mut widget, body) = TestWidgetBuilder::new().with_two_products().build();

    mouse_gesture(&mut widget, &clock, 0, (1200.0, 720.0), (1203.0, 722.0));
    assert!(widget.is_overlay_open());

    // The native click trailing the gesture is swallowed
    let routed = widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse(1203.0, 722.0),
        },
        clock.at(40),
    );
    assert!(routed.outcome.prevent_default);

    assert_eq!(widget.scroll_lock().holders(), 1);
    assert_eq!(body.writes(), vec![true]);
    assert!(widget.player().unwrap().media().is_paused());
}

#[test]
fn test_drag_beyond_threshold_does_not_open() {
    let clock = Clock::new();
    let (mut widget, body) = TestWidgetBuilder::new().build();

    mouse_gesture(&mut widget, &clock, 0, (1200.0, 720.0), (1160.0, 720.0));
    widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse(1160.0, 720.0),
        },
        clock.at(50),
    );

    assert!(!widget.is_overlay_open());
    assert!(body.writes().is_empty());

    let player = widget.player().unwrap();
    assert!(player.has_dragged());
    assert!(player.surface().is_user_placed());
    assert_eq!(
        player.view().unwrap().style,
        PositionStyle {
            left: Some(1140.0),
            top: Some(700.0),
            right: None,
            bottom: None,
        }
    );
}

#[test]
fn test_drag_down_right_follows_pointer() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new().build();

    mouse_gesture(&mut widget, &clock, 0, (1200.0, 720.0), (1240.0, 760.0));

    assert!(!widget.is_overlay_open());
    assert_eq!(
        widget.view().player.unwrap().style,
        PositionStyle {
            left: Some(1220.0),
            top: Some(740.0),
            right: None,
            bottom: None,
        }
    );
}

#[test]
fn test_touch_tap_opens_overlay() {
    let clock = Clock::new();
    let (mut widget, body) = TestWidgetBuilder::new().with_two_products().build();

    touch_gesture(&mut widget, &clock, 0, (1200.0, 720.0), (1202.0, 721.0));
    assert!(widget.is_overlay_open());

    let routed = widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse(1202.0, 721.0),
        },
        clock.at(60),
    );
    assert!(routed.outcome.prevent_default);
    assert_eq!(body.writes(), vec![true]);
}

#[test]
fn test_touch_drag_moves_without_opening() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new().build();

    touch_gesture(&mut widget, &clock, 0, (1200.0, 720.0), (1240.0, 760.0));
    widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse(1240.0, 760.0),
        },
        clock.at(60),
    );

    assert!(!widget.is_overlay_open());
    let player = widget.player().unwrap();
    assert!(player.has_dragged());
    assert_eq!(player.view().unwrap().style.left, Some(1220.0));
    assert_eq!(player.view().unwrap().style.top, Some(740.0));
}

#[test]
fn test_second_finger_abandons_touch_press() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new().build();
    let before = widget.view().player.unwrap().style;

    widget.dispatch(
        WidgetInput::PlayerPointerDown {
            pointer: touch(&[(1200.0, 720.0)]),
            element: PLAYER_BOUNDS,
        },
        clock.at(0),
    );
    widget.dispatch(
        WidgetInput::PlayerPointerDown {
            pointer: touch(&[(1200.0, 720.0), (1230.0, 740.0)]),
            element: PLAYER_BOUNDS,
        },
        clock.at(10),
    );
    widget.dispatch(
        WidgetInput::PlayerPointerMove {
            pointer: touch(&[(1150.0, 700.0)]),
        },
        clock.at(20),
    );

    assert!(!widget.player().unwrap().has_dragged());
    assert_eq!(widget.view().player.unwrap().style, before);
}

#[test]
fn test_five_pixels_counts_as_drag() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new().build();

    mouse_gesture(&mut widget, &clock, 0, (1200.0, 720.0), (1205.0, 720.0));

    assert!(!widget.is_overlay_open());
    assert!(widget.player().unwrap().has_dragged());
}

#[test]
fn test_click_without_gesture_opens() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new().build();

    widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse(1200.0, 720.0),
        },
        clock.at(0),
    );

    assert!(widget.is_overlay_open());
}

#[test]
fn test_later_click_after_drag_opens() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new().build();

    mouse_gesture(&mut widget, &clock, 0, (1200.0, 720.0), (1160.0, 720.0));
    widget.dispatch(WidgetInput::Tick, clock.at(500));
    widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse(1150.0, 720.0),
        },
        clock.at(600),
    );

    assert!(widget.is_overlay_open());
}

#[test]
fn test_close_control_fades_then_stays_closed() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new().build();

    let down = widget.dispatch(
        WidgetInput::PlayerPointerDown {
            pointer: mouse_on(1250.0, 705.0, CLOSE_CONTROL),
            element: PLAYER_BOUNDS,
        },
        clock.at(0),
    );
    assert!(down.outcome.stop_propagation);
    assert!(!widget.player().unwrap().surface().is_dragging());

    widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse_on(1250.0, 705.0, CLOSE_CONTROL),
        },
        clock.at(20),
    );
    assert!(!widget.is_overlay_open());
    assert!(matches!(widget.player().unwrap().phase(), PlayerPhase::Closing { .. }));

    widget.dispatch(WidgetInput::Tick, clock.at(320));
    assert_eq!(widget.player().unwrap().phase(), PlayerPhase::Closed);
    assert!(widget.view().player.is_none());

    // Nothing brings it back for this page view
    mouse_gesture(&mut widget, &clock, 400, (1200.0, 720.0), (1200.0, 720.0));
    assert!(!widget.is_overlay_open());
}

#[test]
fn test_resize_reanchors_until_user_drags() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new().build();

    let view = widget.view().player.unwrap();
    assert_eq!(view.style.right, Some(24.0));
    assert_eq!(view.style.bottom, Some(24.0));
    assert_eq!(view.layer.z_index, MINI_PLAYER_Z_INDEX);
    assert!(view.layer.detached);

    widget.dispatch(
        WidgetInput::Resize {
            width: 390.0,
            height: 844.0,
        },
        clock.at(0),
    );
    let view = widget.view().player.unwrap();
    assert_eq!(view.style.right, Some(12.0));
    assert_eq!(view.style.bottom, Some(90.0));

    widget.dispatch(
        WidgetInput::Resize {
            width: 1280.0,
            height: 800.0,
        },
        clock.at(10),
    );
    mouse_gesture(&mut widget, &clock, 20, (1200.0, 720.0), (1100.0, 600.0));
    let placed = widget.view().player.unwrap().style;

    widget.dispatch(
        WidgetInput::Resize {
            width: 390.0,
            height: 844.0,
        },
        clock.at(200),
    );
    assert_eq!(widget.view().player.unwrap().style, placed);
}

#[test]
fn test_no_video_renders_nothing() {
    let clock = Clock::new();
    let (mut widget, body) = TestWidgetBuilder::new().without_video().build();

    assert!(widget.player().is_none());
    let view = widget.view();
    assert!(view.player.is_none());
    assert!(view.overlay.is_none());

    let routed = widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse(1200.0, 720.0),
        },
        clock.at(0),
    );
    assert!(!routed.outcome.handled);
    assert!(body.writes().is_empty());
}

#[test]
fn test_blocked_autoplay_is_tolerated() {
    let (widget, _body) = TestWidgetBuilder::new().blocking_autoplay().build();

    let player = widget.player().unwrap();
    assert_eq!(player.phase(), PlayerPhase::Visible);
    assert!(player.media().is_paused());
    assert_eq!(player.media().play_requests(), 1);
}

//! Overlay Flow Integration Tests
//!
//! Mounting contract, dismissal, scroll locking, fallback data and the mobile
//! detail sheet, driven end to end through the widget.

use crate::helpers::{mouse, mouse_gesture, report_carousel_region, Clock, TestWidgetBuilder};
use evo_reels::app::WidgetInput;
use evo_reels::data::ProductId;
use evo_reels::media::MediaElement;
use evo_reels::overlay::{OverlayEvent, OverlayLayout, SHEET_CTA_LABEL};
use serde_json::json;

fn open(widget: &mut evo_reels::ReelsWidget<evo_reels::media::SimulatedMedia>, clock: &Clock, ms: u64) {
    widget.dispatch(
        WidgetInput::PlayerClick {
            pointer: mouse(1200.0, 720.0),
        },
        clock.at(ms),
    );
}

#[test]
fn test_open_on_desktop() {
    let clock = Clock::new();
    let (mut widget, body) = TestWidgetBuilder::new().with_two_products().build();
    open(&mut widget, &clock, 0);

    let overlay = widget.overlay().expect("overlay should be open");
    assert_eq!(overlay.layout(), OverlayLayout::Desktop);

    let media = overlay.carousel().media(0).unwrap();
    assert!(!media.is_paused());
    assert!(media.is_muted());
    assert_eq!(overlay.carousel().playing_count(), 1);

    let view = widget.view();
    let overlay_view = view.overlay.unwrap();
    let detail = overlay_view.detail_panel.unwrap();
    assert_eq!(detail.title, "Blue Sneaker");
    assert_eq!(detail.sku.as_deref(), Some("SNK-1"));
    assert!(overlay_view.summaries.is_empty());
    assert!(overlay_view.sheet.is_none());
    assert!(view.scroll_locked);
    assert!(body.is_scroll_locked());
}

#[test]
fn test_backdrop_click_closes_and_restores() {
    let clock = Clock::new();
    let (mut widget, body) = TestWidgetBuilder::new().with_two_products().build();
    open(&mut widget, &clock, 0);
    report_carousel_region(&mut widget, &clock);

    widget.dispatch(
        WidgetInput::OverlayPointerDown {
            pointer: mouse(10.0, 10.0),
        },
        clock.at(100),
    );
    let routed = widget.dispatch(
        WidgetInput::OverlayPointerUp {
            pointer: mouse(12.0, 10.0),
        },
        clock.at(150),
    );

    assert!(routed.events.contains(&OverlayEvent::CloseRequested));
    assert!(!widget.is_overlay_open());
    assert_eq!(body.writes(), vec![true, false]);
    assert!(!widget.view().scroll_locked);
    assert!(!widget.player().unwrap().media().is_paused());
}

#[test]
fn test_press_inside_release_outside_keeps_overlay() {
    let clock = Clock::new();
    let (mut widget, body) = TestWidgetBuilder::new().build();
    open(&mut widget, &clock, 0);
    report_carousel_region(&mut widget, &clock);

    let down = widget.dispatch(
        WidgetInput::OverlayPointerDown {
            pointer: mouse(540.0, 600.0),
        },
        clock.at(100),
    );
    assert!(down.outcome.stop_propagation);
    widget.dispatch(
        WidgetInput::OverlayPointerUp {
            pointer: mouse(10.0, 10.0),
        },
        clock.at(200),
    );

    assert!(widget.is_overlay_open());
    assert!(body.is_scroll_locked());
}

#[test]
fn test_close_control_requests_close() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new().with_two_products().build();
    open(&mut widget, &clock, 0);

    let routed = widget.dispatch(WidgetInput::CloseOverlay, clock.at(100));

    assert_eq!(routed.events, vec![OverlayEvent::CloseRequested]);
    assert!(!widget.is_overlay_open());
    assert!(widget.view().overlay.is_none());
}

#[test]
fn test_repeated_cycles_leave_scroll_restored() {
    let clock = Clock::new();
    let (mut widget, body) = TestWidgetBuilder::new().with_two_products().build();

    let mut sessions = Vec::new();
    for cycle in 0..3u64 {
        open(&mut widget, &clock, cycle * 1000);
        sessions.push(widget.overlay().unwrap().session());
        widget.dispatch(WidgetInput::CloseOverlay, clock.at(cycle * 1000 + 500));
    }

    assert_eq!(body.writes(), vec![true, false, true, false, true, false]);
    assert!(!body.is_scroll_locked());
    assert_eq!(widget.scroll_lock().holders(), 0);
    sessions.dedup();
    assert_eq!(sessions.len(), 3);
}

#[test]
fn test_empty_product_set_uses_page_fallback() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new().build();
    open(&mut widget, &clock, 0);

    let view = widget.view().overlay.expect("fallback primary should render");
    let detail = view.detail_panel.unwrap();
    assert_eq!(detail.id, ProductId::new("1"));
    assert_eq!(detail.title, "Page Product");
    assert_eq!(detail.price.as_deref(), Some("$ 10.00"));
    assert!(!view.carousel.outer_navigation);
    assert_eq!(
        widget.overlay().unwrap().carousel().media(0).unwrap().source(),
        "https://cdn.test/reel.mp4"
    );
}

#[test]
fn test_never_renders_without_video_primary() {
    let clock = Clock::new();
    let (mut widget, body) = TestWidgetBuilder::new()
        .with_product(json!({"title": "Cap", "images": ["https://cdn.test/cap.jpg"]}))
        .build();

    mouse_gesture(&mut widget, &clock, 0, (1200.0, 720.0), (1200.0, 720.0));

    assert!(!widget.is_overlay_open());
    assert!(widget.view().overlay.is_none());
    assert!(body.writes().is_empty());
    assert!(!widget.player().unwrap().media().is_paused());
}

#[test]
fn test_mobile_sheet_flow() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new()
        .with_two_products()
        .with_viewport(390.0, 844.0)
        .build();
    open(&mut widget, &clock, 0);

    let view = widget.view().overlay.unwrap();
    assert_eq!(view.layout, OverlayLayout::Mobile);
    assert!(view.detail_panel.is_none());
    assert_eq!(view.summaries.len(), 2);
    assert_eq!(view.summaries[1].title, "Red Cap");

    let routed = widget.dispatch(WidgetInput::TapSummary, clock.at(100));
    assert_eq!(routed.events, vec![OverlayEvent::SheetOpened(ProductId::new("1"))]);

    let sheet = widget.view().overlay.unwrap().sheet.unwrap();
    assert_eq!(sheet.detail.title, "Blue Sneaker");
    assert_eq!(sheet.image.as_deref(), Some("https://cdn.test/a.jpg"));
    assert_eq!(sheet.cta_label, SHEET_CTA_LABEL);

    // An outside tap closes the sheet, not the overlay
    widget.dispatch(
        WidgetInput::OverlayPointerDown {
            pointer: mouse(5.0, 5.0),
        },
        clock.at(200),
    );
    let routed = widget.dispatch(
        WidgetInput::OverlayPointerUp {
            pointer: mouse(5.0, 5.0),
        },
        clock.at(250),
    );
    assert_eq!(routed.events, vec![OverlayEvent::SheetClosed]);
    assert!(widget.is_overlay_open());
    assert!(widget.overlay().unwrap().active_modal_sheet().is_none());
}

#[test]
fn test_sheet_is_mobile_only() {
    let clock = Clock::new();
    let (mut widget, _body) = TestWidgetBuilder::new()
        .with_two_products()
        .with_viewport(390.0, 844.0)
        .build();
    open(&mut widget, &clock, 0);

    widget.dispatch(WidgetInput::OpenSheet { id: "2".to_string() }, clock.at(50));
    assert_eq!(
        widget.overlay().unwrap().active_modal_sheet(),
        Some(&ProductId::new("2"))
    );

    let routed = widget.dispatch(
        WidgetInput::Resize {
            width: 1280.0,
            height: 800.0,
        },
        clock.at(100),
    );
    assert_eq!(routed.events, vec![OverlayEvent::SheetClosed]);
    assert_eq!(widget.overlay().unwrap().layout(), OverlayLayout::Desktop);

    let routed = widget.dispatch(WidgetInput::OpenSheet { id: "1".to_string() }, clock.at(150));
    assert!(!routed.outcome.handled);
    assert!(widget.overlay().unwrap().active_modal_sheet().is_none());
}

//! The product overlay: carousel, detail panel or sheet, backdrop dismissal.
//!
//! ## Dismissal
//!
//! A press is remembered when it lands outside every interactive region and
//! the overlay closes only if the matching release is outside as well. A
//! swipe that starts on the carousel and ends over the backdrop therefore
//! never closes anything. While the mobile sheet is open the same rule
//! applies to the sheet: an outside tap closes the sheet, not the overlay.
//!
//! ## Lifetime
//!
//! Mounting acquires the body scroll lock; dropping the overlay releases it.
//! Every mounted overlay gets a session id recorded on its tracing span.

use super::detail::{DetailView, SheetView, SummaryView};
use super::events::OverlayEvent;
use super::hit_regions::{HitRegions, RegionKind};
use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use crate::carousel::{CarouselView, NavKey, ReelCarousel, ReelEvent, ReelEvents};
use crate::constants::{BACKDROP_OPACITY, BACKDROP_Z_INDEX, OVERLAY_Z_INDEX, PORTAL_CONTAINER_ID};
use crate::data::{OverlayTemplate, ProductId, ProductSet};
use crate::input::PointerEvent;
use crate::media::MediaElement;
use crate::settings::WidgetSettings;
use crate::types::{Bounds, EventOutcome, Point, StackingLayer, Viewport};
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;
use tracing::{debug, info, info_span, trace, Span};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayLayout {
    /// Carousel plus a persistent side detail panel
    Desktop,
    /// Full-screen carousel, footer summaries, bottom sheet
    Mobile,
}

impl OverlayLayout {
    pub fn for_viewport(viewport: Viewport, mobile_breakpoint: f32) -> Self {
        if viewport.width < mobile_breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// What the host passes when it wants the overlay shown.
#[derive(Debug, Clone, Copy)]
pub struct OverlayProps<'a> {
    pub is_open: bool,
    pub template: OverlayTemplate,
    pub products: &'a ProductSet,
    pub viewport: Viewport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortalView {
    pub container_id: &'static str,
    pub backdrop: StackingLayer,
    pub backdrop_opacity: f32,
    pub content: StackingLayer,
}

impl Default for PortalView {
    fn default() -> Self {
        Self {
            container_id: PORTAL_CONTAINER_ID,
            backdrop: StackingLayer::top_level(BACKDROP_Z_INDEX),
            backdrop_opacity: BACKDROP_OPACITY,
            content: StackingLayer::top_level(OVERLAY_Z_INDEX),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayView {
    pub session: String,
    pub template: OverlayTemplate,
    pub layout: OverlayLayout,
    pub portal: PortalView,
    pub carousel: CarouselView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_panel: Option<DetailView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub summaries: Vec<SummaryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet: Option<SheetView>,
}

pub struct ProductOverlay<M> {
    session: Uuid,
    span: Span,
    template: OverlayTemplate,
    layout: OverlayLayout,
    mobile_breakpoint: f32,
    products: ProductSet,
    carousel: ReelCarousel<M>,
    reel_events: Receiver<ReelEvent>,
    outbound: Sender<OverlayEvent>,
    active_modal_sheet: Option<ProductId>,
    regions: HitRegions,
    pressed_outside: bool,
    _scroll: ScrollLockGuard,
}

impl<M> std::fmt::Debug for ProductOverlay<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductOverlay")
            .field("session", &self.session)
            .field("layout", &self.layout)
            .field("active_modal_sheet", &self.active_modal_sheet)
            .finish_non_exhaustive()
    }
}

impl<M: MediaElement> ProductOverlay<M> {
    /// `None` when closed or when slot 1 has no video: nothing renders.
    pub fn mount(
        props: OverlayProps<'_>,
        settings: &WidgetSettings,
        scroll_lock: &ScrollLock,
        outbound: Sender<OverlayEvent>,
        make_media: impl FnMut(&str) -> M,
    ) -> Option<Self> {
        if !props.is_open {
            return None;
        }
        if !props.products.has_usable_primary() {
            debug!(products = props.products.len(), "No usable primary product, overlay not rendered");
            return None;
        }

        let session = Uuid::new_v4();
        let span = info_span!("overlay", session = %session);
        let layout = OverlayLayout::for_viewport(props.viewport, settings.overlay_mobile_breakpoint_px);

        let (sender, reel_events) = mpsc::channel();
        let mut carousel = ReelCarousel::new(props.products, settings, ReelEvents::new(sender), make_media);
        let scroll = {
            let _entered = span.enter();
            carousel.start();
            info!(?layout, template = ?props.template, products = props.products.len(), "Overlay mounted");
            scroll_lock.acquire()
        };

        Some(Self {
            session,
            span,
            template: props.template,
            layout,
            mobile_breakpoint: settings.overlay_mobile_breakpoint_px,
            products: props.products.clone(),
            carousel,
            reel_events,
            outbound,
            active_modal_sheet: None,
            regions: HitRegions::new(),
            pressed_outside: false,
            _scroll: scroll,
        })
    }

    pub fn session(&self) -> Uuid {
        self.session
    }

    pub fn layout(&self) -> OverlayLayout {
        self.layout
    }

    pub fn active_modal_sheet(&self) -> Option<&ProductId> {
        self.active_modal_sheet.as_ref()
    }

    pub fn carousel(&self) -> &ReelCarousel<M> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut ReelCarousel<M> {
        &mut self.carousel
    }

    /// The host measured where an interactive region is.
    pub fn set_region(&mut self, kind: RegionKind, bounds: Bounds) {
        self.regions.set(kind, bounds);
    }

    pub fn clear_region(&mut self, kind: RegionKind) {
        self.regions.remove(kind);
    }

    // ------------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------------

    fn is_outside(&self, point: Point) -> bool {
        if self.active_modal_sheet.is_some() {
            !self.regions.contains(RegionKind::ModalSheet, point)
        } else {
            self.regions.is_outside(point)
        }
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) -> EventOutcome {
        let _entered = self.span.clone().entered();
        let Some(point) = event.client_point() else {
            return EventOutcome::IGNORED;
        };

        if self.is_outside(point) {
            self.pressed_outside = true;
            return EventOutcome::handled();
        }
        self.pressed_outside = false;

        if self.active_modal_sheet.is_none() && self.regions.contains(RegionKind::Carousel, point) {
            self.carousel.pointer_down(event);
        }
        // Content presses never reach the dismissal handler
        EventOutcome::handled().stop_propagation()
    }

    /// `image` is the active slide's image box, for zoom and hover.
    pub fn pointer_move(&mut self, event: &PointerEvent, image: Bounds) -> EventOutcome {
        if self.active_modal_sheet.is_some() {
            return EventOutcome::IGNORED;
        }
        let over_carousel = event
            .client_point()
            .is_some_and(|point| self.regions.contains(RegionKind::Carousel, point));
        if !event.is_touch() && !over_carousel {
            self.carousel.pointer_leave();
            return EventOutcome::IGNORED;
        }
        self.carousel.pointer_move(event, image)
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> EventOutcome {
        let _entered = self.span.clone().entered();

        if self.active_modal_sheet.is_none() && self.carousel.pointer_up(event).is_some() {
            self.pressed_outside = false;
            self.drain_reel_events();
            return EventOutcome::handled().stop_propagation();
        }

        let pressed_outside = std::mem::take(&mut self.pressed_outside);
        let released_outside = event.release_point().is_some_and(|point| self.is_outside(point));
        if !(pressed_outside && released_outside) {
            self.drain_reel_events();
            return EventOutcome::handled().stop_propagation();
        }

        if self.active_modal_sheet.is_some() {
            self.close_sheet();
        } else {
            self.request_close();
        }
        EventOutcome::handled()
    }

    pub fn wheel(&mut self, delta: Point) -> EventOutcome {
        if self.active_modal_sheet.is_some() {
            return EventOutcome::IGNORED;
        }
        let changed = self.carousel.wheel(delta).is_some();
        self.drain_reel_events();
        if changed {
            EventOutcome::handled().prevent_default()
        } else {
            EventOutcome::handled()
        }
    }

    pub fn key(&mut self, key: NavKey) -> EventOutcome {
        if self.active_modal_sheet.is_some() {
            return EventOutcome::IGNORED;
        }
        let changed = self.carousel.key(key).is_some();
        self.drain_reel_events();
        if changed {
            EventOutcome::handled().prevent_default()
        } else {
            EventOutcome::IGNORED
        }
    }

    // ------------------------------------------------------------------------
    // Controls
    // ------------------------------------------------------------------------

    /// Pagination bullet in the active reel.
    pub fn select_media(&mut self, index: usize) {
        self.carousel.go_to_media(index);
        self.drain_reel_events();
    }

    pub fn toggle_mute(&mut self) -> Option<bool> {
        let muted = self.carousel.toggle_mute();
        self.drain_reel_events();
        muted
    }

    pub fn track_press(&mut self, event: &PointerEvent) -> EventOutcome {
        self.carousel.track_press(event)
    }

    /// `track` is the progress track's bounding box.
    pub fn track_release(&mut self, event: &PointerEvent, track: Bounds) -> EventOutcome {
        self.carousel.track_release(event, track)
    }

    pub fn track_click(&mut self, event: &PointerEvent, track: Bounds) -> EventOutcome {
        self.carousel.track_click(event, track)
    }

    pub fn tap_video(&mut self, now: Instant) {
        self.carousel.tap_video(now);
    }

    /// Footer summary under the active slide (mobile).
    pub fn tap_summary(&mut self) {
        self.carousel.tap_summary();
        self.drain_reel_events();
    }

    /// Open the mobile detail sheet for `id`.
    pub fn open_sheet(&mut self, id: &ProductId) -> bool {
        let _entered = self.span.clone().entered();
        if self.layout != OverlayLayout::Mobile || self.products.get(id).is_none() {
            return false;
        }
        debug!(id = %id, "Sheet opened");
        self.active_modal_sheet = Some(id.clone());
        self.carousel.pointer_leave();
        self.send(OverlayEvent::SheetOpened(id.clone()));
        true
    }

    /// Back control on the sheet.
    pub fn close_sheet(&mut self) -> bool {
        let _entered = self.span.clone().entered();
        if self.active_modal_sheet.take().is_none() {
            return false;
        }
        debug!("Sheet closed");
        self.send(OverlayEvent::SheetClosed);
        true
    }

    /// Ask the owner to unmount this overlay. Videos stop right away.
    pub fn request_close(&mut self) {
        let _entered = self.span.clone().entered();
        info!("Overlay close requested");
        self.carousel.pause_all();
        self.send(OverlayEvent::CloseRequested);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        let layout = OverlayLayout::for_viewport(viewport, self.mobile_breakpoint);
        if layout == self.layout {
            return;
        }
        let _entered = self.span.clone().entered();
        debug!(from = ?self.layout, to = ?layout, "Overlay layout changed");
        self.layout = layout;
        if layout == OverlayLayout::Desktop {
            self.close_sheet();
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.carousel.tick(now);
    }

    // ------------------------------------------------------------------------
    // Media notifications
    // ------------------------------------------------------------------------

    pub fn time_update(&mut self, reel: usize) -> Option<f64> {
        self.carousel.time_update(reel)
    }

    pub fn media_ready(&mut self, reel: usize) {
        self.carousel.media_ready(reel);
    }

    pub fn image_loaded(&mut self, reel: usize, slide: usize) {
        self.carousel.image_loaded(reel, slide);
    }

    // ------------------------------------------------------------------------
    // Events & view
    // ------------------------------------------------------------------------

    fn send(&self, event: OverlayEvent) {
        if self.outbound.send(event).is_err() {
            trace!("Overlay owner gone, event dropped");
        }
    }

    fn drain_reel_events(&mut self) {
        while let Ok(event) = self.reel_events.try_recv() {
            match event {
                ReelEvent::ActiveRecordChanged { index, id } => {
                    debug!(index, id = %id, "Detail panel follows active record");
                    self.send(OverlayEvent::ActiveRecordChanged(id));
                }
                ReelEvent::SummaryTapped(id) => {
                    self.open_sheet(&id);
                }
                ReelEvent::SoundToggled { id, muted } => {
                    trace!(id = %id, muted, "Sound toggled");
                }
            }
        }
    }

    pub fn view(&self) -> OverlayView {
        let active = self.products.get_index(self.carousel.active_index());
        let (detail_panel, summaries) = match self.layout {
            OverlayLayout::Desktop => (active.map(DetailView::from_record), Vec::new()),
            OverlayLayout::Mobile => (None, self.products.iter().map(SummaryView::from_record).collect()),
        };
        let sheet = self
            .active_modal_sheet
            .as_ref()
            .and_then(|id| self.products.get(id))
            .map(SheetView::from_record);

        OverlayView {
            session: self.session.to_string(),
            template: self.template,
            layout: self.layout,
            portal: PortalView::default(),
            carousel: self.carousel.view(),
            detail_panel,
            summaries,
            sheet,
        }
    }
}

impl<M> Drop for ProductOverlay<M> {
    fn drop(&mut self) {
        let _entered = self.span.enter();
        info!("Overlay unmounted");
    }
}

//! Widget state - the ReelsWidget struct and the view it renders.

use crate::data::{OverlayTemplate, ProductSet};
use crate::overlay::{OverlayEvent, OverlayView, ProductOverlay, ScrollLock};
use crate::player::{MiniPlayer, MiniPlayerView};
use crate::settings::WidgetSettings;
use crate::types::Viewport;
use serde::Serialize;
use std::sync::mpsc::{Receiver, Sender};

/// Creates the media element for a video URL (`<video src>`).
pub type MediaFactory<M> = Box<dyn FnMut(&str) -> M>;

/// One page view's widget: at most one mini player, at most one overlay.
pub struct ReelsWidget<M> {
    pub(super) settings: WidgetSettings,
    pub(super) viewport: Viewport,
    pub(super) products: ProductSet,
    pub(super) template: OverlayTemplate,
    /// `None` when the host configured no video
    pub(super) player: Option<MiniPlayer<M>>,
    pub(super) overlay: Option<ProductOverlay<M>>,
    pub(super) scroll_lock: ScrollLock,
    pub(super) overlay_tx: Sender<OverlayEvent>,
    pub(super) overlay_rx: Receiver<OverlayEvent>,
    pub(super) make_media: MediaFactory<M>,
}

impl<M> std::fmt::Debug for ReelsWidget<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReelsWidget")
            .field("viewport", &self.viewport)
            .field("has_player", &self.player.is_some())
            .field("overlay_open", &self.overlay.is_some())
            .field("scroll_lock", &self.scroll_lock)
            .finish_non_exhaustive()
    }
}

/// Everything the host needs to paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetView {
    pub player: Option<MiniPlayerView>,
    pub overlay: Option<OverlayView>,
    pub scroll_locked: bool,
}

impl<M> ReelsWidget<M> {
    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn products(&self) -> &ProductSet {
        &self.products
    }

    pub fn player(&self) -> Option<&MiniPlayer<M>> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut MiniPlayer<M>> {
        self.player.as_mut()
    }

    pub fn overlay(&self) -> Option<&ProductOverlay<M>> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut ProductOverlay<M>> {
        self.overlay.as_mut()
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }
}

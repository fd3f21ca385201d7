//! Widget lifecycle - construction, overlay open/close, timers and resize.

use super::state::{ReelsWidget, WidgetView};
use crate::data::HostConfig;
use crate::media::MediaElement;
use crate::overlay::{DocumentBody, OverlayEvent, OverlayProps, ProductOverlay, ScrollLock};
use crate::player::MiniPlayer;
use crate::settings::WidgetSettings;
use crate::types::Viewport;
use std::sync::mpsc;
use std::time::Instant;
use tracing::{debug, info};

impl<M: MediaElement> ReelsWidget<M> {
    pub fn new(
        host: HostConfig,
        settings: WidgetSettings,
        viewport: Viewport,
        body: impl DocumentBody + 'static,
        make_media: impl FnMut(&str) -> M + 'static,
    ) -> Self {
        let mut make_media: Box<dyn FnMut(&str) -> M> = Box::new(make_media);
        let template = host
            .player
            .as_ref()
            .map(|config| config.overlay_template)
            .unwrap_or_default();

        let player = host.player.map(|config| {
            let media = make_media(&config.video_url);
            let mut player = MiniPlayer::mount(config, media, viewport, &settings);
            player.show();
            player
        });
        if player.is_none() {
            info!("No video configured, widget renders nothing");
        }

        let (overlay_tx, overlay_rx) = mpsc::channel();
        Self {
            settings,
            viewport,
            products: host.products,
            template,
            player,
            overlay: None,
            scroll_lock: ScrollLock::new(body),
            overlay_tx,
            overlay_rx,
            make_media,
        }
    }

    /// Mount the overlay if it is not already open. Returns true if it mounted.
    pub fn open_overlay(&mut self) -> bool {
        if self.overlay.is_some() {
            return false;
        }
        let props = OverlayProps {
            is_open: true,
            template: self.template,
            products: &self.products,
            viewport: self.viewport,
        };
        let Some(overlay) = ProductOverlay::mount(
            props,
            &self.settings,
            &self.scroll_lock,
            self.overlay_tx.clone(),
            &mut self.make_media,
        ) else {
            return false;
        };

        if let Some(player) = self.player.as_mut() {
            player.overlay_opened();
        }
        self.overlay = Some(overlay);
        true
    }

    /// Unmount the overlay, restoring page scroll and the mini player loop.
    pub fn close_overlay(&mut self) -> bool {
        let Some(overlay) = self.overlay.take() else {
            return false;
        };
        drop(overlay);
        if let Some(player) = self.player.as_mut() {
            player.overlay_closed();
        }
        true
    }

    /// Drain events from the overlay, acting on close requests.
    pub fn poll_overlay_events(&mut self) -> Vec<OverlayEvent> {
        let events: Vec<OverlayEvent> = self.overlay_rx.try_iter().collect();
        for event in &events {
            debug!(?event, "Overlay event");
            if *event == OverlayEvent::CloseRequested {
                self.close_overlay();
            }
        }
        events
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(player) = self.player.as_mut() {
            player.tick(now);
        }
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.tick(now);
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(player) = self.player.as_mut() {
            player.resize(viewport);
        }
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.resize(viewport);
        }
    }

    pub fn view(&self) -> WidgetView {
        WidgetView {
            player: self.player.as_ref().and_then(MiniPlayer::view),
            overlay: self.overlay.as_ref().map(ProductOverlay::view),
            scroll_locked: self.scroll_lock.is_locked(),
        }
    }
}

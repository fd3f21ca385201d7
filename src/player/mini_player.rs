//! The floating mini player.
//!
//! ## State Transitions
//!
//! ```text
//! Hidden  -> Visible  (show: autoplay muted, looped, inline)
//! Visible -> Closing  (close control)
//! Closing -> Closed   (fade elapsed; terminal for the page view)
//! ```
//!
//! Dragging happens inside `Visible`. Opening the overlay pauses the loop;
//! closing it resumes playback only if the player is still `Visible`.

use super::anchor::Anchor;
use crate::constants::{CLOSE_CONTROL, MINI_PLAYER_Z_INDEX};
use crate::data::{AnchorSide, PlayerConfig, PlayerShape};
use crate::input::{ClickDisposition, DraggableSurface, DragRelease, PointerEvent};
use crate::media::{play_or_ignore, MediaElement};
use crate::settings::WidgetSettings;
use crate::types::{Bounds, EventOutcome, PositionStyle, StackingLayer, Viewport};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPhase {
    #[default]
    Hidden,
    Visible,
    /// Fading out after the close control
    Closing { until: Instant },
    Closed,
}

/// What an input on the player asks the owner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    None,
    OpenOverlay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoAttributes {
    pub src: String,
    pub muted: bool,
    pub looping: bool,
    pub autoplay: bool,
    pub plays_inline: bool,
    pub playing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiniPlayerView {
    pub shape: PlayerShape,
    pub anchor_side: AnchorSide,
    pub style: PositionStyle,
    pub layer: StackingLayer,
    pub opacity: f32,
    pub dragging: bool,
    pub video: VideoAttributes,
}

#[derive(Debug)]
pub struct MiniPlayer<M> {
    config: PlayerConfig,
    phase: PlayerPhase,
    surface: DraggableSurface,
    media: M,
    overlay_open: bool,
    close_fade: Duration,
}

impl<M: MediaElement> MiniPlayer<M> {
    pub fn mount(config: PlayerConfig, media: M, viewport: Viewport, settings: &WidgetSettings) -> Self {
        let anchor = Anchor::new(config.shape, config.anchor_side, settings.safe_zone_breakpoint_px);
        let surface = DraggableSurface::new(anchor, viewport, settings).exclude(CLOSE_CONTROL);
        Self {
            config,
            phase: PlayerPhase::Hidden,
            surface,
            media,
            overlay_open: false,
            close_fade: settings.close_fade(),
        }
    }

    /// Hidden -> Visible and start the muted loop.
    pub fn show(&mut self) {
        if self.phase != PlayerPhase::Hidden {
            return;
        }
        self.media.set_muted(true);
        self.media.set_looping(true);
        play_or_ignore(&mut self.media);
        self.phase = PlayerPhase::Visible;
        info!(src = %self.config.video_url, shape = ?self.config.shape, "Mini player shown");
    }

    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == PlayerPhase::Visible
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn surface(&self) -> &DraggableSurface {
        &self.surface
    }

    pub fn has_dragged(&self) -> bool {
        self.surface.has_dragged()
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    // ------------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------------

    pub fn pointer_down(&mut self, event: &PointerEvent, element: Bounds) -> EventOutcome {
        if !self.is_visible() {
            return EventOutcome::IGNORED;
        }
        if event.target.closest(CLOSE_CONTROL) {
            return EventOutcome::handled().stop_propagation();
        }
        self.surface.start(event, element)
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> EventOutcome {
        if !self.is_visible() {
            return EventOutcome::IGNORED;
        }
        self.surface.move_to(event)
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> PlayerAction {
        if !self.is_visible() {
            return PlayerAction::None;
        }
        match self.surface.end(event) {
            DragRelease::Activate => self.activate(),
            DragRelease::Dragged | DragRelease::Ignored => PlayerAction::None,
        }
    }

    /// Native click. The close control closes; a click with no preceding
    /// gesture activates; trailing gesture clicks are swallowed.
    pub fn click(&mut self, event: &PointerEvent) -> (EventOutcome, PlayerAction) {
        if !self.is_visible() {
            return (EventOutcome::IGNORED, PlayerAction::None);
        }
        if event.target.closest(CLOSE_CONTROL) {
            self.close(event.at);
            return (EventOutcome::handled().stop_propagation(), PlayerAction::None);
        }
        match self.surface.click(event) {
            ClickDisposition::Activate => (EventOutcome::handled(), self.activate()),
            ClickDisposition::Suppressed => (EventOutcome::handled().prevent_default(), PlayerAction::None),
            ClickDisposition::Excluded => (EventOutcome::IGNORED, PlayerAction::None),
        }
    }

    fn activate(&self) -> PlayerAction {
        if self.overlay_open {
            return PlayerAction::None;
        }
        debug!("Mini player activated");
        PlayerAction::OpenOverlay
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Close control pressed. Permanent for this page view.
    pub fn close(&mut self, now: Instant) {
        if !self.is_visible() {
            return;
        }
        self.media.pause();
        self.phase = PlayerPhase::Closing {
            until: now + self.close_fade,
        };
        info!("Mini player closing");
    }

    pub fn tick(&mut self, now: Instant) {
        self.surface.tick(now);
        if let PlayerPhase::Closing { until } = self.phase {
            if now >= until {
                self.phase = PlayerPhase::Closed;
                debug!("Mini player closed");
            }
        }
    }

    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.surface.resize(viewport)
    }

    pub fn overlay_opened(&mut self) {
        self.overlay_open = true;
        self.media.pause();
    }

    pub fn overlay_closed(&mut self) {
        self.overlay_open = false;
        if self.is_visible() {
            play_or_ignore(&mut self.media);
        }
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// `None` when nothing is on screen.
    pub fn view(&self) -> Option<MiniPlayerView> {
        let opacity = match self.phase {
            PlayerPhase::Hidden | PlayerPhase::Closed => return None,
            PlayerPhase::Visible => 1.0,
            PlayerPhase::Closing { .. } => 0.0,
        };
        Some(MiniPlayerView {
            shape: self.config.shape,
            anchor_side: self.config.anchor_side,
            style: self.surface.style(),
            layer: StackingLayer::top_level(MINI_PLAYER_Z_INDEX),
            opacity,
            dragging: self.surface.is_dragging(),
            video: VideoAttributes {
                src: self.config.video_url.clone(),
                muted: self.media.is_muted(),
                looping: true,
                autoplay: true,
                plays_inline: true,
                playing: !self.media.is_paused(),
            },
        })
    }
}

//! Host inputs and where each one is delivered.
//!
//! The host translates DOM listeners into `WidgetInput` values. Mini player
//! inputs go to the player, everything else to the open overlay. Inputs for a
//! component that is not on screen are ignored.

use super::state::ReelsWidget;
use crate::carousel::NavKey;
use crate::data::ProductId;
use crate::input::{PointerEvent, PointerKind, TargetPath};
use crate::media::MediaElement;
use crate::overlay::{OverlayEvent, ProductOverlay, RegionKind};
use crate::player::PlayerAction;
use crate::types::{Bounds, EventOutcome, Point, Viewport};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::trace;

/// Wire form of a mouse or touch event.
///
/// Any touch list present makes it a touch event; otherwise `x`/`y` are the
/// mouse's client coordinates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PointerInput {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub touches: Vec<Point>,
    pub changed_touches: Vec<Point>,
    /// Class names from the target up to the listener
    pub target: Vec<String>,
}

impl PointerInput {
    pub fn to_event(&self, at: Instant) -> PointerEvent {
        let is_touch = !self.touches.is_empty() || !self.changed_touches.is_empty();
        PointerEvent {
            kind: if is_touch { PointerKind::Touch } else { PointerKind::Mouse },
            position: if is_touch {
                None
            } else {
                self.x.zip(self.y).map(|(x, y)| Point::new(x, y))
            },
            touches: self.touches.clone(),
            changed_touches: self.changed_touches.clone(),
            target: TargetPath::new(self.target.iter().cloned()),
            at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetInput {
    PlayerPointerDown { pointer: PointerInput, element: Bounds },
    PlayerPointerMove { pointer: PointerInput },
    PlayerPointerUp { pointer: PointerInput },
    PlayerClick { pointer: PointerInput },
    OverlayPointerDown { pointer: PointerInput },
    OverlayPointerMove { pointer: PointerInput, image: Bounds },
    OverlayPointerUp { pointer: PointerInput },
    TrackPress { pointer: PointerInput },
    TrackRelease { pointer: PointerInput, track: Bounds },
    TrackClick { pointer: PointerInput, track: Bounds },
    Wheel { dx: f32, dy: f32 },
    Key { key: String },
    SelectMedia { index: usize },
    ToggleMute,
    TapVideo,
    TapSummary,
    OpenSheet { id: String },
    CloseSheet,
    CloseOverlay,
    Region { kind: RegionKind, bounds: Bounds },
    Resize { width: f32, height: f32 },
    TimeUpdate { reel: usize },
    MediaReady { reel: usize },
    ImageLoaded { reel: usize, slide: usize },
    Tick,
}

/// Result of one routed input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Routed {
    pub outcome: EventOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<OverlayEvent>,
}

impl<M: MediaElement> ReelsWidget<M> {
    pub fn dispatch(&mut self, input: WidgetInput, at: Instant) -> Routed {
        trace!(?input, "Routing input");
        let outcome = self.route(input, at);
        Routed {
            outcome,
            events: self.poll_overlay_events(),
        }
    }

    fn route(&mut self, input: WidgetInput, at: Instant) -> EventOutcome {
        match input {
            WidgetInput::PlayerPointerDown { pointer, element } => self
                .player
                .as_mut()
                .map_or(EventOutcome::IGNORED, |p| p.pointer_down(&pointer.to_event(at), element)),
            WidgetInput::PlayerPointerMove { pointer } => self
                .player
                .as_mut()
                .map_or(EventOutcome::IGNORED, |p| p.pointer_move(&pointer.to_event(at))),
            WidgetInput::PlayerPointerUp { pointer } => {
                let action = self
                    .player
                    .as_mut()
                    .map_or(PlayerAction::None, |p| p.pointer_up(&pointer.to_event(at)));
                self.apply(action)
            }
            WidgetInput::PlayerClick { pointer } => {
                let Some(player) = self.player.as_mut() else {
                    return EventOutcome::IGNORED;
                };
                let (outcome, action) = player.click(&pointer.to_event(at));
                self.apply(action);
                outcome
            }
            WidgetInput::OverlayPointerDown { pointer } => {
                self.with_overlay(|o| o.pointer_down(&pointer.to_event(at)))
            }
            WidgetInput::OverlayPointerMove { pointer, image } => {
                self.with_overlay(|o| o.pointer_move(&pointer.to_event(at), image))
            }
            WidgetInput::OverlayPointerUp { pointer } => {
                self.with_overlay(|o| o.pointer_up(&pointer.to_event(at)))
            }
            WidgetInput::TrackPress { pointer } => self.with_overlay(|o| o.track_press(&pointer.to_event(at))),
            WidgetInput::TrackRelease { pointer, track } => {
                self.with_overlay(|o| o.track_release(&pointer.to_event(at), track))
            }
            WidgetInput::TrackClick { pointer, track } => {
                self.with_overlay(|o| o.track_click(&pointer.to_event(at), track))
            }
            WidgetInput::Wheel { dx, dy } => self.with_overlay(|o| o.wheel(Point::new(dx, dy))),
            WidgetInput::Key { key } => match NavKey::parse(&key) {
                Some(key) => self.with_overlay(|o| o.key(key)),
                None => EventOutcome::IGNORED,
            },
            WidgetInput::SelectMedia { index } => self.with_overlay(|o| {
                o.select_media(index);
                EventOutcome::handled()
            }),
            WidgetInput::ToggleMute => self.with_overlay(|o| {
                o.toggle_mute();
                EventOutcome::handled().stop_propagation()
            }),
            WidgetInput::TapVideo => self.with_overlay(|o| {
                o.tap_video(at);
                EventOutcome::handled()
            }),
            WidgetInput::TapSummary => self.with_overlay(|o| {
                o.tap_summary();
                EventOutcome::handled().stop_propagation()
            }),
            WidgetInput::OpenSheet { id } => self.with_overlay(|o| {
                if o.open_sheet(&ProductId::new(id)) {
                    EventOutcome::handled()
                } else {
                    EventOutcome::IGNORED
                }
            }),
            WidgetInput::CloseSheet => self.with_overlay(|o| {
                if o.close_sheet() {
                    EventOutcome::handled().stop_propagation()
                } else {
                    EventOutcome::IGNORED
                }
            }),
            WidgetInput::CloseOverlay => self.with_overlay(|o| {
                o.request_close();
                EventOutcome::handled().stop_propagation()
            }),
            WidgetInput::Region { kind, bounds } => self.with_overlay(|o| {
                o.set_region(kind, bounds);
                EventOutcome::handled()
            }),
            WidgetInput::Resize { width, height } => {
                self.resize(Viewport::new(width, height));
                EventOutcome::handled()
            }
            WidgetInput::TimeUpdate { reel } => self.with_overlay(|o| {
                o.time_update(reel);
                EventOutcome::handled()
            }),
            WidgetInput::MediaReady { reel } => self.with_overlay(|o| {
                o.media_ready(reel);
                EventOutcome::handled()
            }),
            WidgetInput::ImageLoaded { reel, slide } => self.with_overlay(|o| {
                o.image_loaded(reel, slide);
                EventOutcome::handled()
            }),
            WidgetInput::Tick => {
                self.tick(at);
                EventOutcome::handled()
            }
        }
    }

    fn with_overlay(&mut self, f: impl FnOnce(&mut ProductOverlay<M>) -> EventOutcome) -> EventOutcome {
        self.overlay.as_mut().map_or(EventOutcome::IGNORED, f)
    }

    fn apply(&mut self, action: PlayerAction) -> EventOutcome {
        match action {
            PlayerAction::OpenOverlay => {
                self.open_overlay();
                EventOutcome::handled()
            }
            PlayerAction::None => EventOutcome::IGNORED,
        }
    }
}

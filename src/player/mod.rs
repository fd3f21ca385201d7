//! Floating mini player and its corner anchoring.

mod anchor;
mod mini_player;

pub use anchor::Anchor;
pub use mini_player::{MiniPlayer, MiniPlayerView, PlayerAction, PlayerPhase, VideoAttributes};

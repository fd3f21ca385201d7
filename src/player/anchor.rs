//! Corner anchoring for the floating player.

use crate::constants::{CIRCLE_OFFSET_PX, RECTANGLE_OFFSET_PX, SAFE_ZONE_BOTTOM_PX, SAFE_ZONE_SIDE_PX};
use crate::data::{AnchorSide, PlayerShape};
use crate::types::{PositionStyle, Viewport};

/// Which bottom corner the player sits in and how far from the edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub shape: PlayerShape,
    pub side: AnchorSide,
    /// Viewport width at or below which the safe zone offsets apply
    pub safe_zone_breakpoint: f32,
}

impl Anchor {
    pub fn new(shape: PlayerShape, side: AnchorSide, safe_zone_breakpoint: f32) -> Self {
        Self {
            shape,
            side,
            safe_zone_breakpoint,
        }
    }

    pub fn in_safe_zone(&self, viewport: Viewport) -> bool {
        viewport.width <= self.safe_zone_breakpoint
    }

    /// (side, bottom) offsets in px for this viewport.
    pub fn offsets(&self, viewport: Viewport) -> (f32, f32) {
        if self.in_safe_zone(viewport) {
            return (SAFE_ZONE_SIDE_PX, SAFE_ZONE_BOTTOM_PX);
        }
        let offset = match self.shape {
            PlayerShape::Circle => CIRCLE_OFFSET_PX,
            PlayerShape::Rectangle => RECTANGLE_OFFSET_PX,
        };
        (offset, offset)
    }

    pub fn style_for(&self, viewport: Viewport) -> PositionStyle {
        let (side, bottom) = self.offsets(viewport);
        match self.side {
            AnchorSide::Left => PositionStyle {
                left: Some(side),
                bottom: Some(bottom),
                ..Default::default()
            },
            AnchorSide::Right => PositionStyle {
                right: Some(side),
                bottom: Some(bottom),
                ..Default::default()
            },
        }
    }
}

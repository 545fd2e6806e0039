// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Reserved anchor elements.
//!
//! The backend pads some results with fixed-id placeholder vertices/edges used
//! as layout anchors. They are not query data: no label derivation, fixed
//! sizing, and anchor vertices are hidden.

/// Reserved placeholder vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorVertex {
    /// `hiddenNodeOne`.
    One,
    /// `hiddenNodeTwo`.
    Two,
    /// `hiddenNodeThree`.
    Three,
}

impl AnchorVertex {
    /// Every anchor vertex.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];
    /// Size every anchor vertex is drawn with, regardless of style mapping.
    pub const SIZE: u32 = 40;

    /// Reserved id.
    pub const fn id(self) -> &'static str {
        match self {
            Self::One => "hiddenNodeOne",
            Self::Two => "hiddenNodeTwo",
            Self::Three => "hiddenNodeThree",
        }
    }

    /// Anchor role of a vertex id, if reserved.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

/// Reserved placeholder edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorEdge {
    /// `hiddenEdgeOne`.
    One,
    /// `hiddenEdgeTwo`.
    Two,
}

impl AnchorEdge {
    /// Every anchor edge.
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// Reserved id.
    pub const fn id(self) -> &'static str {
        match self {
            Self::One => "hiddenEdgeOne",
            Self::Two => "hiddenEdgeTwo",
        }
    }

    /// Anchor role of an edge id, if reserved.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    /// Fixed width, when the anchor has one; otherwise the thickness table applies.
    pub const fn width_override(self) -> Option<u32> {
        match self {
            Self::One => Some(35),
            Self::Two => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_ids_round_trip() {
        for a in AnchorVertex::ALL {
            assert_eq!(AnchorVertex::from_id(a.id()), Some(a));
        }
        for a in AnchorEdge::ALL {
            assert_eq!(AnchorEdge::from_id(a.id()), Some(a));
        }
        assert_eq!(AnchorVertex::from_id("hiddenEdgeOne"), None);
        assert_eq!(AnchorEdge::from_id("hiddenNodeOne"), None);
    }

    #[test]
    fn only_first_anchor_edge_has_fixed_width() {
        assert_eq!(AnchorEdge::One.width_override(), Some(35));
        assert_eq!(AnchorEdge::Two.width_override(), None);
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Visual element types handed to the surface.

use serde::Serialize;
use vista_graph::{EdgeId, Properties, VertexId};

/// Arrow rendering on an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowStyle {
    /// Plain line.
    None,
    /// Arrow head at the target end.
    To,
}

/// Vertex ready to be drawn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualVertex {
    /// Vertex id.
    pub id: VertexId,
    /// Vertex type name.
    pub type_label: String,
    /// Raw properties in backend order.
    pub properties: Properties,
    /// Truncated display label (may be empty).
    pub display_label: String,
    /// Truncated id, shown as a secondary label.
    pub id_label: String,
    /// Hover tooltip text.
    pub tooltip: String,
    /// Size value derived from the size class.
    pub size: u32,
    /// Fill/border color (`#rrggbb`).
    pub color: String,
    /// Anchor vertices are inserted hidden.
    pub hidden: bool,
}

/// Edge ready to be drawn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualEdge {
    /// Edge id.
    pub id: EdgeId,
    /// Edge type name.
    pub type_label: String,
    /// Raw properties in backend order.
    pub properties: Properties,
    /// Truncated display label (may be empty).
    pub display_label: String,
    /// Hover tooltip text.
    pub tooltip: String,
    /// Source vertex id.
    pub source: VertexId,
    /// Target vertex id.
    pub target: VertexId,
    /// Thickness value derived from the thickness class.
    pub width: u32,
    /// Line color (`#rrggbb`).
    pub color: String,
    /// Arrow style.
    pub arrow: ArrowStyle,
}

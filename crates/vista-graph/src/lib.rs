// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Graph records as returned by the query backend (`graph_view`).
//! Pure data: vertices, edges and their ordered property bags.

mod properties;
mod view;

pub use properties::{Properties, PropertyValue};
pub use view::{EdgeRecord, ElementKind, GraphView, VertexRecord};

/// Vertex identifier (unique among vertices).
pub type VertexId = String;
/// Edge identifier (unique among edges).
pub type EdgeId = String;

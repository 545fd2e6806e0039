// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vertex/edge records and the `graph_view` match set.

use crate::{EdgeId, Properties, VertexId};
use serde::{Deserialize, Serialize};

/// Which half of the graph an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A vertex (node).
    Vertex,
    /// An edge (link).
    Edge,
}

/// Vertex as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    /// Vertex identifier.
    pub id: VertexId,
    /// Vertex type name.
    pub label: String,
    /// Properties in backend order.
    #[serde(default)]
    pub properties: Properties,
}

/// Edge as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Edge identifier.
    pub id: EdgeId,
    /// Edge type name.
    pub label: String,
    /// Source vertex id.
    pub source: VertexId,
    /// Target vertex id.
    pub target: VertexId,
    /// Properties in backend order.
    #[serde(default)]
    pub properties: Properties,
}

/// Match set: the vertices and edges a query returned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphView {
    /// Matched vertices.
    #[serde(default)]
    pub vertices: Vec<VertexRecord>,
    /// Matched edges.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphView {
    /// True when neither vertices nor edges were matched.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Vertex ids in match order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|v| v.id.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_graph_view() {
        let json = r#"{
            "vertices": [
                {"id": "1:marko", "label": "person", "properties": {"name": "marko", "age": 29}},
                {"id": "2:lop", "label": "software"}
            ],
            "edges": [
                {"id": "S1:marko>1>>S2:lop", "label": "created",
                 "source": "1:marko", "target": "2:lop", "properties": {"weight": 0.4}}
            ]
        }"#;
        let view: GraphView = serde_json::from_str(json).unwrap();
        assert_eq!(view.vertex_ids().collect::<Vec<_>>(), vec!["1:marko", "2:lop"]);
        assert!(view.vertices[1].properties.is_empty());
        assert_eq!(view.edges[0].source, "1:marko");
        assert_eq!(
            view.vertices[0].properties.names().collect::<Vec<_>>(),
            vec!["name", "age"]
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let view: GraphView = serde_json::from_str("{}").unwrap();
        assert!(view.is_empty());
    }
}

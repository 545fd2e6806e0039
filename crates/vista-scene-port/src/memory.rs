// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory surface adapter (headless hosts, the CLI, tests).

use crate::{HighlightState, SurfaceError, VisualEdge, VisualVertex, VisualizationSurface};
use serde::Serialize;
use std::collections::HashSet;
use vista_graph::VertexId;

/// Surface that keeps elements in insertion order.
#[derive(Debug, Default, Serialize)]
pub struct MemorySurface {
    vertices: Vec<VisualVertex>,
    edges: Vec<VisualEdge>,
    highlight: HighlightState,
    #[serde(skip)]
    vertex_ids: HashSet<String>,
    #[serde(skip)]
    edge_ids: HashSet<String>,
}

impl MemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[VisualVertex] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[VisualEdge] {
        &self.edges
    }

    /// Look up a vertex.
    pub fn vertex(&self, id: &str) -> Option<&VisualVertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    /// Look up an edge.
    pub fn edge(&self, id: &str) -> Option<&VisualEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Current selection.
    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    /// Remove every element and the selection.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.vertex_ids.clear();
        self.edge_ids.clear();
        self.highlight.clear();
    }
}

impl VisualizationSurface for MemorySurface {
    fn has_vertex(&self, id: &str) -> bool {
        self.vertex_ids.contains(id)
    }

    fn has_edge(&self, id: &str) -> bool {
        self.edge_ids.contains(id)
    }

    fn add_vertex(&mut self, vertex: VisualVertex) -> Result<(), SurfaceError> {
        if !self.vertex_ids.insert(vertex.id.clone()) {
            return Err(SurfaceError::DuplicateVertex(vertex.id));
        }
        self.vertices.push(vertex);
        Ok(())
    }

    fn add_edge(&mut self, edge: VisualEdge) -> Result<(), SurfaceError> {
        if !self.edge_ids.insert(edge.id.clone()) {
            return Err(SurfaceError::DuplicateEdge(edge.id));
        }
        self.edges.push(edge);
        Ok(())
    }

    fn select_nodes(&mut self, ids: &[VertexId], additive: bool) {
        self.highlight.select(ids, additive);
    }

    fn unselect_all(&mut self) {
        self.highlight.clear();
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Surface port trait defining the renderer contract.

use crate::{SurfaceError, VisualEdge, VisualVertex};
use vista_graph::VertexId;

/// Visualization surface port.
///
/// Implementors hold an incremental node/edge multiset and a selection.
/// The filter merge engine and explicit user selection are the only writers.
///
/// # Design
///
/// This trait is a hexagonal port: the filter pipeline emits fully styled
/// elements; adapters (vis-network bridge, native canvas) implement this trait
/// to show them.
pub trait VisualizationSurface {
    /// True when a vertex with `id` is on the surface.
    fn has_vertex(&self, id: &str) -> bool;

    /// True when an edge with `id` is on the surface.
    fn has_edge(&self, id: &str) -> bool;

    /// Insert a vertex. Fails with [`SurfaceError::DuplicateVertex`] if the id is taken.
    fn add_vertex(&mut self, vertex: VisualVertex) -> Result<(), SurfaceError>;

    /// Insert an edge. Fails with [`SurfaceError::DuplicateEdge`] if the id is taken.
    fn add_edge(&mut self, edge: VisualEdge) -> Result<(), SurfaceError>;

    /// Select vertices; `additive = false` replaces the current selection.
    fn select_nodes(&mut self, ids: &[VertexId], additive: bool);

    /// Clear the selection.
    fn unselect_all(&mut self);
}

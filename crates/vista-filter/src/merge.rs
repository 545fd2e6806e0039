// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Idempotent merge of a query match set onto a visualization surface.
//!
//! Elements whose id is already on the surface are skipped silently, so
//! merging the same view twice leaves the surface unchanged. After the
//! merge the matched vertices and the origin become the selection.

use crate::anchor::{AnchorEdge, AnchorVertex};
use crate::label::{format_id_label, format_label, format_tooltip};
use crate::style::{resolve_edge_style, resolve_vertex_style, StyleSource};
use serde::Serialize;
use tracing::{debug, instrument};
use vista_graph::{EdgeRecord, ElementKind, GraphView, VertexId, VertexRecord};
use vista_scene_port::{ArrowStyle, SurfaceError, VisualEdge, VisualVertex, VisualizationSurface};

/// What one merge did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Vertex ids inserted.
    pub added_vertices: Vec<VertexId>,
    /// Edge ids inserted.
    pub added_edges: Vec<String>,
    /// Vertices skipped because their id was already present.
    pub skipped_vertices: usize,
    /// Edges skipped because their id was already present.
    pub skipped_edges: usize,
    /// Selection applied after the merge.
    pub selected: Vec<VertexId>,
}

/// Visual form of a vertex record.
pub fn build_visual_vertex<S: StyleSource + ?Sized>(styles: &S, record: &VertexRecord) -> VisualVertex {
    let style = resolve_vertex_style(styles, &record.label);
    let anchor = AnchorVertex::from_id(&record.id).is_some();
    let display_label = if anchor {
        String::new()
    } else {
        format_label(
            ElementKind::Vertex,
            &record.label,
            &record.id,
            &record.properties,
            &style.label_fields,
        )
    };
    VisualVertex {
        id: record.id.clone(),
        type_label: record.label.clone(),
        properties: record.properties.clone(),
        display_label,
        id_label: format_id_label(&record.id),
        tooltip: format_tooltip(ElementKind::Vertex, &record.label, &record.id, &record.properties),
        size: if anchor { AnchorVertex::SIZE } else { style.size.value() },
        color: style.color.clone(),
        hidden: anchor,
    }
}

/// Visual form of an edge record.
pub fn build_visual_edge<S: StyleSource + ?Sized>(styles: &S, record: &EdgeRecord) -> VisualEdge {
    let style = resolve_edge_style(styles, &record.label);
    let anchor = AnchorEdge::from_id(&record.id);
    let display_label = if anchor.is_some() {
        String::new()
    } else {
        format_label(
            ElementKind::Edge,
            &record.label,
            &record.id,
            &record.properties,
            &style.label_fields,
        )
    };
    VisualEdge {
        id: record.id.clone(),
        type_label: record.label.clone(),
        properties: record.properties.clone(),
        display_label,
        tooltip: format_tooltip(ElementKind::Edge, &record.label, &record.id, &record.properties),
        source: record.source.clone(),
        target: record.target.clone(),
        width: anchor
            .and_then(AnchorEdge::width_override)
            .unwrap_or_else(|| style.thickness.width()),
        color: style.color.clone(),
        arrow: if style.arrow_enabled {
            ArrowStyle::To
        } else {
            ArrowStyle::None
        },
    }
}

/// Merge `view` onto `surface` and select the matched vertices plus `origin`.
///
/// Vertices go in before edges. Anchor vertices are inserted hidden but are
/// selected like any other match. The selection replaces whatever was
/// selected before.
#[instrument(skip_all, fields(vertices = view.vertices.len(), edges = view.edges.len()))]
pub fn merge_graph_view<V, S>(
    surface: &mut V,
    styles: &S,
    view: &GraphView,
    origin: Option<&str>,
) -> Result<MergeReport, SurfaceError>
where
    V: VisualizationSurface + ?Sized,
    S: StyleSource + ?Sized,
{
    let mut report = MergeReport::default();

    for record in &view.vertices {
        if surface.has_vertex(&record.id) {
            debug!(id = %record.id, "vertex already on surface; skipped");
            report.skipped_vertices += 1;
            continue;
        }
        surface.add_vertex(build_visual_vertex(styles, record))?;
        report.added_vertices.push(record.id.clone());
    }

    for record in &view.edges {
        if surface.has_edge(&record.id) {
            debug!(id = %record.id, "edge already on surface; skipped");
            report.skipped_edges += 1;
            continue;
        }
        surface.add_edge(build_visual_edge(styles, record))?;
        report.added_edges.push(record.id.clone());
    }

    let mut selected: Vec<VertexId> = Vec::with_capacity(view.vertices.len() + 1);
    for id in view.vertex_ids().chain(origin) {
        if !selected.iter().any(|s| s == id) {
            selected.push(id.to_owned());
        }
    }
    surface.select_nodes(&selected, false);
    report.selected = selected;

    Ok(report)
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Graph view builder for backend responses.

use vista_graph::{EdgeRecord, GraphView, Properties, PropertyValue, VertexRecord};

/// Builder for [`GraphView`] match sets.
///
/// # Example
///
/// ```
/// use vista_dry_tests::GraphViewBuilder;
///
/// let view = GraphViewBuilder::new()
///     .vertex_with("v1", "person", &[("name", "alice".into())])
///     .vertex("v2", "person")
///     .edge("e1", "knows", "v1", "v2")
///     .build();
///
/// assert_eq!(view.vertices.len(), 2);
/// assert_eq!(view.edges[0].source, "v1");
/// ```
#[derive(Default)]
pub struct GraphViewBuilder {
    view: GraphView,
}

impl GraphViewBuilder {
    /// Empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex without properties.
    pub fn vertex(self, id: &str, label: &str) -> Self {
        self.vertex_with(id, label, &[])
    }

    /// Add a vertex with properties in the given order.
    pub fn vertex_with(mut self, id: &str, label: &str, properties: &[(&str, PropertyValue)]) -> Self {
        self.view.vertices.push(VertexRecord {
            id: id.to_owned(),
            label: label.to_owned(),
            properties: bag(properties),
        });
        self
    }

    /// Add an edge without properties.
    pub fn edge(self, id: &str, label: &str, source: &str, target: &str) -> Self {
        self.edge_with(id, label, source, target, &[])
    }

    /// Add an edge with properties in the given order.
    pub fn edge_with(
        mut self,
        id: &str,
        label: &str,
        source: &str,
        target: &str,
        properties: &[(&str, PropertyValue)],
    ) -> Self {
        self.view.edges.push(EdgeRecord {
            id: id.to_owned(),
            label: label.to_owned(),
            source: source.to_owned(),
            target: target.to_owned(),
            properties: bag(properties),
        });
        self
    }

    /// Finish.
    pub fn build(self) -> GraphView {
        self.view
    }
}

fn bag(properties: &[(&str, PropertyValue)]) -> Properties {
    properties
        .iter()
        .map(|(k, v)| (*k, v.clone()))
        .collect()
}

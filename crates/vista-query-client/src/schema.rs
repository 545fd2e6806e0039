// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Wire records of the schema endpoints and their mapping onto the filter
//! pipeline's [`SchemaCatalog`] and [`StyleMappings`].

use serde::Deserialize;
use vista_filter::{EdgeThickness, SchemaCatalog, SizeClass, StyleMappings, StyleRule, FALLBACK_COLOR};

/// One page of schema records.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Records on this page.
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

/// A property key and its declared data type.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyKeyRecord {
    /// Key name.
    pub name: String,
    /// Declared kind, e.g. `INT`, `TEXT`, `BOOLEAN`.
    pub data_type: String,
}

/// Property reference inside a label record.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelProperty {
    /// Key name.
    pub name: String,
}

/// Display style of a vertex label.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VertexLabelStyle {
    /// `#rrggbb`.
    pub color: Option<String>,
    /// Size class.
    pub size: SizeClass,
    /// Fields joined into the display label.
    pub display_fields: Vec<String>,
}

/// Display style of an edge label.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EdgeLabelStyle {
    /// `#rrggbb`.
    pub color: Option<String>,
    /// Draw an arrow head at the target.
    pub with_arrow: bool,
    /// Thickness class.
    pub thickness: EdgeThickness,
    /// Fields joined into the display label.
    pub display_fields: Vec<String>,
}

/// A vertex label (type) record.
#[derive(Debug, Clone, Deserialize)]
pub struct VertexLabelRecord {
    /// Type name.
    pub name: String,
    /// Display style.
    #[serde(default)]
    pub style: VertexLabelStyle,
}

/// An edge label (type) record.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeLabelRecord {
    /// Type name.
    pub name: String,
    /// Properties in schema order.
    #[serde(default)]
    pub properties: Vec<LabelProperty>,
    /// Display style.
    #[serde(default)]
    pub style: EdgeLabelStyle,
}

fn color_or_fallback(color: Option<String>) -> String {
    color
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| FALLBACK_COLOR.to_owned())
}

/// Schema catalog from property keys and edge labels.
pub fn build_catalog(keys: &[PropertyKeyRecord], edges: &[EdgeLabelRecord]) -> SchemaCatalog {
    let catalog = edges.iter().fold(SchemaCatalog::new(), |catalog, edge| {
        catalog.with_edge_type(edge.name.as_str(), edge.properties.iter().map(|p| p.name.as_str()))
    });
    keys.iter().fold(catalog, |catalog, key| {
        catalog.with_property_kind(key.name.as_str(), key.data_type.as_str())
    })
}

/// Style tables from vertex and edge label records.
pub fn build_styles(vertices: Vec<VertexLabelRecord>, edges: Vec<EdgeLabelRecord>) -> StyleMappings {
    let mut styles = StyleMappings::new();
    for v in vertices {
        styles = styles.with_vertex(
            v.name,
            StyleRule {
                label_fields: v.style.display_fields,
                size: v.style.size,
                color: color_or_fallback(v.style.color),
                ..StyleRule::default()
            },
        );
    }
    for e in edges {
        styles = styles.with_edge(
            e.name,
            StyleRule {
                label_fields: e.style.display_fields,
                thickness: e.style.thickness,
                color: color_or_fallback(e.style.color),
                arrow_enabled: e.style.with_arrow,
                ..StyleRule::default()
            },
        );
    }
    styles
}

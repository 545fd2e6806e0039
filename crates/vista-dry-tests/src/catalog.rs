// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Schema catalog and style mapping fixtures.

use vista_filter::{EdgeThickness, SchemaCatalog, SizeClass, StyleMappings, StyleRule};

/// Builds a [`SchemaCatalog`] one edge type at a time, declaring each
/// property's kind alongside it.
///
/// # Example
///
/// ```
/// use vista_dry_tests::CatalogBuilder;
/// use vista_filter::PropertyKind;
///
/// let catalog = CatalogBuilder::new()
///     .edge_type("knows", &[("since", "date"), ("weight", "double")])
///     .build();
/// assert_eq!(catalog.edge_properties("knows"), ["since", "weight"]);
/// assert_eq!(catalog.property_kind("weight"), Some(PropertyKind::Double));
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    catalog: SchemaCatalog,
}

impl CatalogBuilder {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge type with `(property, kind)` pairs in order.
    pub fn edge_type(mut self, name: &str, properties: &[(&str, &str)]) -> Self {
        self.catalog = self
            .catalog
            .with_edge_type(name, properties.iter().map(|(p, _)| *p));
        for (property, kind) in properties {
            self.catalog = self.catalog.with_property_kind(*property, *kind);
        }
        self
    }

    /// Declare a property kind without tying it to an edge type.
    pub fn property(mut self, name: &str, kind: &str) -> Self {
        self.catalog = self.catalog.with_property_kind(name, kind);
        self
    }

    /// Finish.
    pub fn build(self) -> SchemaCatalog {
        self.catalog
    }
}

/// Small social graph schema.
///
/// `knows` carries `age` (int), `since` (date), `active` (boolean) and
/// `weight` (double); `created` carries `weight` and `lang` (text).
pub fn modern_catalog() -> SchemaCatalog {
    CatalogBuilder::new()
        .edge_type(
            "knows",
            &[
                ("age", "int"),
                ("since", "date"),
                ("active", "boolean"),
                ("weight", "double"),
            ],
        )
        .edge_type("created", &[("weight", "double"), ("lang", "text")])
        .property("name", "text")
        .build()
}

/// Style mappings matching [`modern_catalog`].
pub fn modern_styles() -> StyleMappings {
    StyleMappings::new()
        .with_vertex(
            "person",
            StyleRule {
                label_fields: vec!["name".into(), "~id".into()],
                size: SizeClass::Big,
                color: "#2b65ff".into(),
                ..StyleRule::default()
            },
        )
        .with_vertex(
            "software",
            StyleRule {
                label_fields: vec!["name".into()],
                size: SizeClass::Small,
                color: "#ed5736".into(),
                ..StyleRule::default()
            },
        )
        .with_edge(
            "knows",
            StyleRule {
                label_fields: vec!["~id".into()],
                thickness: EdgeThickness::Normal,
                color: "#5c73e6".into(),
                arrow_enabled: true,
                ..StyleRule::default()
            },
        )
}

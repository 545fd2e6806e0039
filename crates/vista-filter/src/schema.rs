// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Schema catalog: which properties an edge type carries and what kind each
//! property key was declared with.

use std::collections::BTreeMap;
use std::fmt;

/// Declared kind of a property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// 8-bit integer.
    Byte,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Date/time.
    Date,
    /// Opaque object.
    Object,
    /// Text.
    Text,
    /// Binary blob.
    Blob,
    /// UUID.
    Uuid,
    /// Boolean.
    Boolean,
}

impl PropertyKind {
    /// Parse a declared kind name, ignoring ASCII case. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        let kind = match name.to_ascii_lowercase().as_str() {
            "float" => Self::Float,
            "double" => Self::Double,
            "byte" => Self::Byte,
            "int" => Self::Int,
            "long" => Self::Long,
            "date" => Self::Date,
            "object" => Self::Object,
            "text" => Self::Text,
            "blob" => Self::Blob,
            "uuid" => Self::Uuid,
            "boolean" => Self::Boolean,
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Double => "double",
            Self::Byte => "byte",
            Self::Int => "int",
            Self::Long => "long",
            Self::Date => "date",
            Self::Object => "object",
            Self::Text => "text",
            Self::Blob => "blob",
            Self::Uuid => "uuid",
            Self::Boolean => "boolean",
        }
    }

    /// Integral kinds take whole-number values.
    pub const fn is_integral(self) -> bool {
        matches!(self, Self::Byte | Self::Int | Self::Long)
    }

    /// Real-number kinds.
    pub const fn is_fractional(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties declared on one edge type, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeTypeSchema {
    /// Edge type name.
    pub name: String,
    /// Property names.
    pub properties: Vec<String>,
}

/// Read-only schema view used while a filter session is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaCatalog {
    edge_types: Vec<EdgeTypeSchema>,
    // Raw declared kind per property key; unknown kind names stay here and
    // parse to `None` on lookup.
    kinds: BTreeMap<String, String>,
}

impl SchemaCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an edge type with its property list (replaces an existing entry).
    pub fn with_edge_type<I, P>(mut self, name: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.insert_edge_type(EdgeTypeSchema {
            name: name.into(),
            properties: properties.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Declare the kind of a property key.
    pub fn with_property_kind(mut self, property: impl Into<String>, kind: impl Into<String>) -> Self {
        self.kinds.insert(property.into(), kind.into());
        self
    }

    /// Insert or replace an edge type.
    pub fn insert_edge_type(&mut self, schema: EdgeTypeSchema) {
        if let Some(slot) = self.edge_types.iter_mut().find(|e| e.name == schema.name) {
            *slot = schema;
        } else {
            self.edge_types.push(schema);
        }
    }

    /// Edge type names in registration order.
    pub fn edge_type_names(&self) -> impl Iterator<Item = &str> {
        self.edge_types.iter().map(|e| e.name.as_str())
    }

    /// Look up an edge type.
    pub fn edge_type(&self, name: &str) -> Option<&EdgeTypeSchema> {
        self.edge_types.iter().find(|e| e.name == name)
    }

    /// Property names of an edge type; empty for unknown or unset types.
    pub fn edge_properties(&self, name: &str) -> &[String] {
        self.edge_type(name).map_or(&[], |e| e.properties.as_slice())
    }

    /// Declared kind name of a property key, verbatim.
    pub fn declared_kind(&self, property: &str) -> Option<&str> {
        self.kinds.get(property).map(String::as_str)
    }

    /// Parsed kind of a property key; `None` when undeclared or unknown.
    pub fn property_kind(&self, property: &str) -> Option<PropertyKind> {
        self.declared_kind(property).and_then(PropertyKind::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_case_insensitive() {
        assert_eq!(PropertyKind::parse("INT"), Some(PropertyKind::Int));
        assert_eq!(PropertyKind::parse("Boolean"), Some(PropertyKind::Boolean));
        assert_eq!(PropertyKind::parse("geo_point"), None);
    }

    #[test]
    fn unknown_edge_type_has_no_properties() {
        let catalog = SchemaCatalog::new().with_edge_type("knows", ["since", "weight"]);
        assert_eq!(catalog.edge_properties("knows"), ["since", "weight"]);
        assert!(catalog.edge_properties("created").is_empty());
        assert!(catalog.edge_properties("").is_empty());
    }

    #[test]
    fn undeclared_and_unknown_kinds_parse_to_none() {
        let catalog = SchemaCatalog::new()
            .with_property_kind("age", "int")
            .with_property_kind("shape", "geo");
        assert_eq!(catalog.property_kind("age"), Some(PropertyKind::Int));
        assert_eq!(catalog.property_kind("shape"), None);
        assert_eq!(catalog.declared_kind("shape"), Some("geo"));
        assert_eq!(catalog.property_kind("missing"), None);
    }

    #[test]
    fn re_registering_an_edge_type_replaces_it() {
        let catalog = SchemaCatalog::new()
            .with_edge_type("knows", ["a"])
            .with_edge_type("knows", ["b", "c"]);
        assert_eq!(catalog.edge_type_names().count(), 1);
        assert_eq!(catalog.edge_properties("knows"), ["b", "c"]);
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-type style rules and their resolution.
//!
//! A type without a mapping is not an error: it resolves to
//! [`StyleRule::default`].

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Color used for types without a mapping.
pub const FALLBACK_COLOR: &str = "#5c73e6";

/// Vertex size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SizeClass {
    /// Smallest.
    Tiny,
    /// Small.
    Small,
    /// Default size.
    #[default]
    Normal,
    /// Big.
    Big,
    /// Largest.
    Huge,
}

impl SizeClass {
    /// Size value handed to the surface.
    pub const fn value(self) -> u32 {
        match self {
            Self::Tiny => 1,
            Self::Small => 10,
            Self::Normal => 20,
            Self::Big => 30,
            Self::Huge => 40,
        }
    }
}

/// Edge thickness class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EdgeThickness {
    /// Hairline; also what unmapped edge types get.
    #[default]
    Fine,
    /// Medium.
    Normal,
    /// Thick.
    Thick,
}

impl EdgeThickness {
    /// Width value handed to the surface.
    pub const fn width(self) -> u32 {
        match self {
            Self::Fine => 1,
            Self::Normal => 15,
            Self::Thick => 35,
        }
    }
}

fn fallback_color() -> String {
    FALLBACK_COLOR.to_owned()
}

/// Display policy of one vertex or edge type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRule {
    /// Properties concatenated into the display label, in order.
    #[serde(default)]
    pub label_fields: Vec<String>,
    /// Vertex size class.
    #[serde(default)]
    pub size: SizeClass,
    /// Edge thickness class.
    #[serde(default)]
    pub thickness: EdgeThickness,
    /// `#rrggbb` color.
    #[serde(default = "fallback_color")]
    pub color: String,
    /// Edges only: draw an arrow head at the target.
    #[serde(default)]
    pub arrow_enabled: bool,
}

impl Default for StyleRule {
    fn default() -> Self {
        Self {
            label_fields: Vec::new(),
            size: SizeClass::Normal,
            thickness: EdgeThickness::Fine,
            color: fallback_color(),
            arrow_enabled: false,
        }
    }
}

/// Read-only style-mapping collaborator.
pub trait StyleSource {
    /// Mapping for a vertex type, if any.
    fn vertex_style(&self, type_label: &str) -> Option<&StyleRule>;
    /// Mapping for an edge type, if any.
    fn edge_style(&self, type_label: &str) -> Option<&StyleRule>;
}

impl<T: StyleSource + ?Sized> StyleSource for &T {
    fn vertex_style(&self, type_label: &str) -> Option<&StyleRule> {
        (**self).vertex_style(type_label)
    }

    fn edge_style(&self, type_label: &str) -> Option<&StyleRule> {
        (**self).edge_style(type_label)
    }
}

/// Resolve a vertex type's style, falling back to the default rule.
pub fn resolve_vertex_style<'a, S>(source: &'a S, type_label: &str) -> Cow<'a, StyleRule>
where
    S: StyleSource + ?Sized,
{
    source
        .vertex_style(type_label)
        .map_or_else(|| Cow::Owned(StyleRule::default()), Cow::Borrowed)
}

/// Resolve an edge type's style, falling back to the default rule.
pub fn resolve_edge_style<'a, S>(source: &'a S, type_label: &str) -> Cow<'a, StyleRule>
where
    S: StyleSource + ?Sized,
{
    source
        .edge_style(type_label)
        .map_or_else(|| Cow::Owned(StyleRule::default()), Cow::Borrowed)
}

/// Plain in-memory style tables keyed by type name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleMappings {
    /// Vertex type → rule.
    #[serde(default)]
    pub vertices: BTreeMap<String, StyleRule>,
    /// Edge type → rule.
    #[serde(default)]
    pub edges: BTreeMap<String, StyleRule>,
}

impl StyleMappings {
    /// Empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a vertex type rule.
    pub fn with_vertex(mut self, type_label: impl Into<String>, rule: StyleRule) -> Self {
        self.vertices.insert(type_label.into(), rule);
        self
    }

    /// Add or replace an edge type rule.
    pub fn with_edge(mut self, type_label: impl Into<String>, rule: StyleRule) -> Self {
        self.edges.insert(type_label.into(), rule);
        self
    }
}

impl StyleSource for StyleMappings {
    fn vertex_style(&self, type_label: &str) -> Option<&StyleRule> {
        self.vertices.get(type_label)
    }

    fn edge_style(&self, type_label: &str) -> Option<&StyleRule> {
        self.edges.get(type_label)
    }
}

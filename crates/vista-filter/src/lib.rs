// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Incremental graph filter-and-merge pipeline.
//!
//! A user right-clicks a vertex, opens the filter board and builds an
//! expression: an edge type, a direction and a chain of property predicates.
//! [`FilterSession`] holds that expression and gates it ([`Gate`]);
//! [`FilterEngine`] sends it to a [`QueryBackend`] and merges the returned
//! vertices/edges onto a [`vista_scene_port::VisualizationSurface`], styled
//! through [`StyleSource`] and the label formatter, without duplicating ids.
//!
//! # Modules
//!
//! - [`schema`] - edge-type property lists and declared property kinds
//! - [`rules`] - rule vocabulary per property kind
//! - [`style`] - per-type style rules and their defaults
//! - [`label`] - display label, id label and tooltip formatting
//! - [`expression`] - the filter expression data model
//! - [`validator`] - `can_submit` / `can_add_predicate` derivations
//! - [`session`] - one open filter interaction
//! - [`merge`] - idempotent merge of a match set onto the surface
//! - [`query`] - backend port and wire query
//! - [`engine`] - submit lifecycle (prepare, execute, complete, cancel)

pub mod anchor;
pub mod engine;
mod error;
pub mod expression;
pub mod label;
pub mod merge;
pub mod query;
pub mod rules;
pub mod schema;
pub mod session;
pub mod style;
pub mod validator;

pub use anchor::{AnchorEdge, AnchorVertex};
pub use engine::{FilterEngine, FilterOutcome, PendingFilter};
pub use error::FilterError;
pub use expression::{Direction, EdgeFilter, FilterExpression, PredicateValue, PropertyPredicate};
pub use merge::{merge_graph_view, MergeReport};
pub use query::{AdjacencyQuery, Condition, QueryBackend, QueryError};
pub use rules::{rule_options, FilterRule, KindFamily};
pub use schema::{EdgeTypeSchema, PropertyKind, SchemaCatalog};
pub use session::{FilterSession, OriginVertex, PredicateEdit};
pub use style::{
    resolve_edge_style, resolve_vertex_style, EdgeThickness, SizeClass, StyleMappings, StyleRule,
    StyleSource, FALLBACK_COLOR,
};
pub use validator::Gate;

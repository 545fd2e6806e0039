// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Visualization surface port contract for vista.
//!
//! The surface is the rendered node/link model the user sees. Adapters (a
//! vis-network bridge, an egui canvas, the in-memory [`MemorySurface`])
//! implement [`VisualizationSurface`]; the filter pipeline only ever talks to
//! the trait.
//!
//! # Design Principles
//!
//! - **Surfaces are dumb**: they store what they are given. Labels, sizes and
//!   colors arrive precomputed.
//! - **Ids are unique per kind**: a vertex id and an edge id live in separate
//!   namespaces; inserting a duplicate is an invariant violation.

use thiserror::Error;

/// Error type for surface mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// A vertex with this id is already on the surface.
    #[error("duplicate vertex: {0}")]
    DuplicateVertex(String),
    /// An edge with this id is already on the surface.
    #[error("duplicate edge: {0}")]
    DuplicateEdge(String),
    /// A backend-specific error occurred.
    #[error("backend error: {0}")]
    Backend(String),
}

mod highlight;
mod memory;
mod port;
mod types;

pub use highlight::HighlightState;
pub use memory::MemorySurface;
pub use port::VisualizationSurface;
pub use types::{ArrowStyle, VisualEdge, VisualVertex};

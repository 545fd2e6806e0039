// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::query::QueryError;
use thiserror::Error;
use vista_scene_port::SurfaceError;

/// Errors surfaced by the filter session and engine.
///
/// None of these are fatal: the session stays usable and the user can edit
/// and resubmit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Submit attempted while the gate is closed.
    #[error("filter cannot be submitted: {reason}")]
    ValidationBlocked {
        /// What is missing.
        reason: String,
    },
    /// The query backend failed; message is the backend's, verbatim.
    #[error(transparent)]
    Backend(#[from] QueryError),
    /// A submit for this session is still pending.
    #[error("a filter request is already in flight")]
    SubmitInFlight,
    /// The session was not opened on an origin vertex.
    #[error("no origin vertex for this filter")]
    NoOrigin,
    /// Edge type not in the schema catalog.
    #[error("unknown edge type: {0}")]
    UnknownEdgeType(String),
    /// No predicate at this index.
    #[error("no predicate at index {0}")]
    PredicateIndex(usize),
    /// Property not offered for this predicate (unknown or already used).
    #[error("property not offered: {0}")]
    PropertyNotOffered(String),
    /// Rule not offered for the predicate's property.
    #[error("rule not offered for this property")]
    RuleNotOffered,
    /// The predicate takes no value (no property yet, or a boolean rule).
    #[error("predicate does not take a value")]
    ValueNotAccepted,
    /// The surface rejected an insert.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl FilterError {
    /// True when the backend reported an expired/invalid session (401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Backend(e) if e.is_unauthorized())
    }
}

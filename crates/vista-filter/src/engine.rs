// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Submit lifecycle: prepare, execute, complete, cancel.
//!
//! [`FilterEngine::submit`] runs the three steps back to back. Hosts that keep
//! the UI live while a request is pending call them separately: `prepare`
//! snapshots the expression and marks the session in flight, `execute` talks
//! to the backend, and `complete` merges the result only if the session is
//! still the one that asked.

use crate::error::FilterError;
use crate::expression::FilterExpression;
use crate::merge::{merge_graph_view, MergeReport};
use crate::query::{AdjacencyQuery, QueryBackend, QueryError};
use crate::session::FilterSession;
use crate::style::StyleSource;
use crate::validator;
use tracing::{info, instrument, warn};
use vista_graph::{GraphView, VertexId};
use vista_scene_port::VisualizationSurface;

/// A submitted filter awaiting its response.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFilter {
    /// Session generation at submit time.
    pub generation: u64,
    /// Origin vertex id at submit time.
    pub origin_id: VertexId,
    /// Wire query.
    pub query: AdjacencyQuery,
    /// Expression as it was when submitted.
    pub expression: FilterExpression,
}

/// Result of completing a pending filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The match set was merged and the board closed.
    Merged(MergeReport),
    /// The session moved on (cancelled or reopened); the response was dropped.
    Stale,
}

/// Runs filters against a backend and merges results onto a surface.
#[derive(Debug, Clone)]
pub struct FilterEngine<B, S> {
    backend: B,
    styles: S,
}

impl<B, S> FilterEngine<B, S>
where
    B: QueryBackend,
    S: StyleSource,
{
    /// Engine over a query backend and a style source.
    pub const fn new(backend: B, styles: S) -> Self {
        Self { backend, styles }
    }

    /// Query backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Style source.
    pub const fn styles(&self) -> &S {
        &self.styles
    }

    /// Check the gate, snapshot the expression and mark the session in flight.
    #[instrument(skip_all, fields(generation = session.generation()))]
    pub fn prepare(&self, session: &mut FilterSession) -> Result<PendingFilter, FilterError> {
        if !session.is_open() {
            return Err(FilterError::ValidationBlocked {
                reason: "filter board is closed".into(),
            });
        }
        if session.is_submitting() {
            return Err(FilterError::SubmitInFlight);
        }
        let expression = session.expression().clone();
        if expression.line.edge_type.is_empty() {
            return Err(FilterError::ValidationBlocked {
                reason: "no edge type chosen".into(),
            });
        }
        if !validator::can_submit(&expression) {
            return Err(FilterError::ValidationBlocked {
                reason: format!("predicate {} is incomplete", expression.properties.len()),
            });
        }
        let origin = session.origin().ok_or(FilterError::NoOrigin)?;
        let query = AdjacencyQuery::build(origin, &expression);
        let origin_id = origin.id.clone();
        let generation = session.begin_submit();
        Ok(PendingFilter {
            generation,
            origin_id,
            query,
            expression,
        })
    }

    /// Send the pending query to the backend.
    #[instrument(skip_all, fields(generation = pending.generation, edge = %pending.query.edge_label))]
    pub async fn execute(&self, pending: &PendingFilter) -> Result<GraphView, QueryError> {
        self.backend.query_adjacency(&pending.query).await
    }

    /// Apply a backend response to the session and surface.
    ///
    /// Responses for a session that was closed or reopened since `prepare`
    /// are dropped. On failure the surface is untouched, the session stays
    /// open with its expression, and the backend error is returned.
    #[instrument(skip_all, fields(generation = pending.generation))]
    pub fn complete<V>(
        &self,
        session: &mut FilterSession,
        surface: &mut V,
        pending: &PendingFilter,
        result: Result<GraphView, QueryError>,
    ) -> Result<FilterOutcome, FilterError>
    where
        V: VisualizationSurface + ?Sized,
    {
        if !session.is_current(pending.generation) {
            warn!(
                generation = pending.generation,
                current = session.generation(),
                "dropping stale filter response"
            );
            return Ok(FilterOutcome::Stale);
        }
        let view = match result {
            Ok(view) => view,
            Err(err) => {
                session.abort_submit();
                warn!(status = ?err.status, "filter query failed: {}", err.message);
                return Err(err.into());
            }
        };
        let report = match merge_graph_view(surface, &self.styles, &view, Some(&pending.origin_id)) {
            Ok(report) => report,
            Err(err) => {
                session.abort_submit();
                return Err(err.into());
            }
        };
        info!(
            added_vertices = report.added_vertices.len(),
            added_edges = report.added_edges.len(),
            skipped_vertices = report.skipped_vertices,
            skipped_edges = report.skipped_edges,
            "filter merged"
        );
        session.close();
        Ok(FilterOutcome::Merged(report))
    }

    /// Prepare, execute and complete in one call.
    pub async fn submit<V>(
        &self,
        session: &mut FilterSession,
        surface: &mut V,
    ) -> Result<FilterOutcome, FilterError>
    where
        V: VisualizationSurface + ?Sized,
    {
        let pending = self.prepare(session)?;
        let result = self.execute(&pending).await;
        self.complete(session, surface, &pending, result)
    }

    /// Close the board without submitting and clear the surface selection.
    pub fn cancel<V>(&self, session: &mut FilterSession, surface: &mut V)
    where
        V: VisualizationSurface + ?Sized,
    {
        session.close();
        surface.unselect_all();
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scripted query backend that replays queued responses.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use vista_filter::{AdjacencyQuery, QueryBackend, QueryError};
use vista_graph::GraphView;

/// [`QueryBackend`] fake: answers each query with the next queued result and
/// records every query it receives.
///
/// An empty queue answers with an empty [`GraphView`]. Clones share state.
///
/// # Example
///
/// ```
/// use vista_dry_tests::{GraphViewBuilder, ScriptedBackend};
/// use vista_filter::QueryError;
///
/// let backend = ScriptedBackend::new()
///     .then_ok(GraphViewBuilder::new().vertex("v1", "person").build())
///     .then_err(QueryError::new(401, "session expired"));
/// assert_eq!(backend.pending(), 2);
/// ```
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    replies: VecDeque<Result<GraphView, QueryError>>,
    seen: Vec<AdjacencyQuery>,
}

impl ScriptedBackend {
    /// Backend with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a successful response.
    pub fn then_ok(self, view: GraphView) -> Self {
        self.lock().replies.push_back(Ok(view));
        self
    }

    /// Queue a failure.
    pub fn then_err(self, err: QueryError) -> Self {
        self.lock().replies.push_back(Err(err));
        self
    }

    /// Queue a response on a shared handle.
    pub fn push(&self, reply: Result<GraphView, QueryError>) {
        self.lock().replies.push_back(reply);
    }

    /// Responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.lock().replies.len()
    }

    /// Every query received, in order.
    pub fn queries(&self) -> Vec<AdjacencyQuery> {
        self.lock().seen.clone()
    }

    /// Number of queries received.
    pub fn call_count(&self) -> usize {
        self.lock().seen.len()
    }
}

impl QueryBackend for ScriptedBackend {
    async fn query_adjacency(&self, query: &AdjacencyQuery) -> Result<GraphView, QueryError> {
        let mut inner = self.lock();
        inner.seen.push(query.clone());
        inner
            .replies
            .pop_front()
            .unwrap_or_else(|| Ok(GraphView::default()))
    }
}

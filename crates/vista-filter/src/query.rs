// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Query backend port and the adjacency query sent through it.

use crate::expression::{Direction, FilterExpression, PropertyPredicate};
use crate::session::OriginVertex;
use serde::Serialize;
use std::future::Future;
use thiserror::Error;
use vista_graph::GraphView;

/// Backend failure with its message, verbatim, and the status when known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct QueryError {
    /// HTTP-like status code; `None` for transport failures.
    pub status: Option<u16>,
    /// Human-readable message for display.
    pub message: String,
}

impl QueryError {
    /// Error reported by the backend with a status code.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Error that never reached the backend (network, decoding).
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// 401: the session is no longer valid and the user must start over.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

/// One predicate on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    /// Property name.
    pub key: String,
    /// `gt`, `gte`, `lt`, `lte` or `eq`.
    pub operator: String,
    /// Comparison value; `true`/`false` for boolean rules.
    pub value: serde_json::Value,
}

impl Condition {
    /// Wire form of a complete predicate; `None` when the rule is missing.
    pub fn from_predicate(predicate: &PropertyPredicate) -> Option<Self> {
        let rule = predicate.rule?;
        let value = rule
            .boolean_value()
            .map_or_else(|| predicate.value.to_json(), serde_json::Value::Bool);
        Some(Self {
            key: predicate.property.clone(),
            operator: rule.operator().to_owned(),
            value,
        })
    }
}

/// Expand-from-origin query: edges of one type around the origin vertex,
/// filtered by property conditions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyQuery {
    /// Origin vertex id.
    pub vertex_id: String,
    /// Origin vertex type.
    pub vertex_label: String,
    /// Edge type to follow.
    pub edge_label: String,
    /// Direction to follow.
    pub direction: Direction,
    /// Conditions, all of which must hold.
    pub conditions: Vec<Condition>,
}

impl AdjacencyQuery {
    /// Build the wire query from an origin and a snapshot of the expression.
    /// Predicates without a rule are left out.
    pub fn build(origin: &OriginVertex, expr: &FilterExpression) -> Self {
        Self {
            vertex_id: origin.id.clone(),
            vertex_label: origin.label.clone(),
            edge_label: expr.line.edge_type.clone(),
            direction: expr.line.direction,
            conditions: expr
                .properties
                .iter()
                .filter_map(Condition::from_predicate)
                .collect(),
        }
    }
}

/// Query-execution collaborator.
pub trait QueryBackend {
    /// Run an adjacency query and return the matched vertices/edges.
    fn query_adjacency(
        &self,
        query: &AdjacencyQuery,
    ) -> impl Future<Output = Result<GraphView, QueryError>> + Send;
}

impl<T: QueryBackend + ?Sized> QueryBackend for &T {
    fn query_adjacency(
        &self,
        query: &AdjacencyQuery,
    ) -> impl Future<Output = Result<GraphView, QueryError>> + Send {
        (**self).query_adjacency(query)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::expression::{EdgeFilter, PredicateValue};
    use crate::rules::FilterRule;

    #[test]
    fn query_serializes_to_wire_shape() {
        let origin = OriginVertex {
            id: "1:marko".into(),
            label: "person".into(),
        };
        let expr = FilterExpression {
            line: EdgeFilter {
                edge_type: "knows".into(),
                direction: Direction::Out,
            },
            properties: vec![
                PropertyPredicate {
                    property: "age".into(),
                    rule: Some(FilterRule::Gte),
                    value: PredicateValue::Integer(30),
                },
                PropertyPredicate {
                    property: "active".into(),
                    rule: Some(FilterRule::False),
                    value: PredicateValue::default(),
                },
            ],
        };
        let json = serde_json::to_value(AdjacencyQuery::build(&origin, &expr)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "vertex_id": "1:marko",
                "vertex_label": "person",
                "edge_label": "knows",
                "direction": "OUT",
                "conditions": [
                    {"key": "age", "operator": "gte", "value": 30},
                    {"key": "active", "operator": "eq", "value": false}
                ]
            })
        );
    }

    #[test]
    fn predicates_without_rule_are_dropped() {
        let p = PropertyPredicate {
            property: "age".into(),
            rule: None,
            value: PredicateValue::Integer(1),
        };
        assert!(Condition::from_predicate(&p).is_none());
    }

    #[test]
    fn unauthorized_is_status_401_only() {
        assert!(QueryError::new(401, "expired").is_unauthorized());
        assert!(!QueryError::new(500, "boom").is_unauthorized());
        assert!(!QueryError::transport("refused").is_unauthorized());
        assert_eq!(QueryError::new(400, "bad edge").to_string(), "bad edge");
    }
}

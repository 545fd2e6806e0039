// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One filter round driven through the session API, step by step as the
//! filter board would: edge type, direction, then per predicate add, pick
//! property, pick rule, enter value.

use crate::cli::{FilterArgs, WhereClause};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use vista_filter::{
    merge_graph_view, Direction, FilterEngine, FilterOutcome, FilterSession, OriginVertex,
    PredicateEdit, PredicateValue, QueryBackend, SchemaCatalog, StyleMappings,
};
use vista_graph::{GraphView, Properties, VertexRecord};
use vista_scene_port::{MemorySurface, VisualizationSurface};

/// What `vista filter` prints.
#[derive(Debug, Serialize)]
pub struct FilterReport {
    /// Surface after the round.
    pub surface: MemorySurface,
    /// Vertices the round added.
    pub added_vertices: usize,
    /// Edges the round added.
    pub added_edges: usize,
}

/// Surface holding only the origin vertex, as if it had been drawn earlier.
fn seed_surface(styles: &StyleMappings, origin: &OriginVertex) -> Result<MemorySurface> {
    let mut surface = MemorySurface::new();
    let seed = GraphView {
        vertices: vec![VertexRecord {
            id: origin.id.clone(),
            label: origin.label.clone(),
            properties: Properties::new(),
        }],
        edges: Vec::new(),
    };
    merge_graph_view(&mut surface, styles, &seed, None)?;
    surface.unselect_all();
    Ok(surface)
}

fn author_predicate(session: &mut FilterSession, index: usize, clause: &WhereClause) -> Result<()> {
    if !session.add_predicate() {
        return Err(anyhow!(
            "cannot add a predicate on `{}`: previous predicate incomplete or no properties left",
            clause.property
        ));
    }
    session
        .edit_predicate(index, PredicateEdit::Property(clause.property.clone()))
        .with_context(|| format!("predicate {}", index + 1))?;
    session
        .edit_predicate(index, PredicateEdit::Rule(clause.rule))
        .with_context(|| format!("predicate {} on `{}`", index + 1, clause.property))?;
    if let Some(raw) = &clause.value {
        let kind = session.predicate_kind(index);
        let value = PredicateValue::parse_for(kind, raw).ok_or_else(|| {
            anyhow!(
                "`{raw}` is not a valid {} value for `{}`",
                kind.map_or("property", |k| k.as_str()),
                clause.property
            )
        })?;
        session.edit_predicate(index, PredicateEdit::Value(value))?;
    }
    Ok(())
}

/// Run one round and return the resulting surface.
pub async fn run_filter<B: QueryBackend>(
    backend: B,
    catalog: SchemaCatalog,
    styles: StyleMappings,
    args: &FilterArgs,
    default_direction: Direction,
) -> Result<FilterReport> {
    let origin = OriginVertex {
        id: args.origin_id.clone(),
        label: args.origin_label.clone(),
    };
    let mut surface = seed_surface(&styles, &origin)?;
    let mut session = FilterSession::new(Arc::new(catalog)).with_default_direction(default_direction);
    session.open(origin);

    session.set_edge_type(&args.edge_type)?;
    if let Some(direction) = args.direction {
        session.set_direction(direction);
    }
    for (index, clause) in args.predicates.iter().enumerate() {
        author_predicate(&mut session, index, clause)?;
    }

    let engine = FilterEngine::new(backend, styles);
    match engine.submit(&mut session, &mut surface).await? {
        FilterOutcome::Merged(report) => {
            info!(
                added_vertices = report.added_vertices.len(),
                added_edges = report.added_edges.len(),
                "filter applied"
            );
            Ok(FilterReport {
                added_vertices: report.added_vertices.len(),
                added_edges: report.added_edges.len(),
                surface,
            })
        }
        FilterOutcome::Stale => Err(anyhow!("filter response arrived for a closed session")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vista_dry_tests::{modern_catalog, modern_styles, GraphViewBuilder, ScriptedBackend};
    use vista_filter::{FilterError, QueryError};

    fn args(predicates: &[&str]) -> FilterArgs {
        FilterArgs {
            origin_id: "1:marko".into(),
            origin_label: "person".into(),
            edge_type: "knows".into(),
            direction: None,
            predicates: predicates.iter().map(|p| p.parse().unwrap()).collect(),
            save_direction: false,
        }
    }

    #[tokio::test]
    async fn round_merges_onto_seeded_surface() {
        let backend = ScriptedBackend::new().then_ok(
            GraphViewBuilder::new()
                .vertex_with("v1", "person", &[("name", "vadas".into())])
                .edge("e1", "knows", "1:marko", "v1")
                .build(),
        );
        let report = run_filter(
            backend.clone(),
            modern_catalog(),
            modern_styles(),
            &args(&["age:>=:30", "active:False"]),
            Direction::Out,
        )
        .await
        .unwrap();

        assert_eq!(report.added_vertices, 1);
        assert_eq!(report.surface.vertices().len(), 2);
        assert!(report.surface.highlight().is_selected("1:marko"));

        let queries = backend.queries();
        let query = &queries[0];
        assert_eq!(query.direction, Direction::Out);
        assert_eq!(query.conditions.len(), 2);
        assert_eq!(query.conditions[1].value, serde_json::Value::Bool(false));
    }

    #[tokio::test]
    async fn non_numeric_value_for_int_is_rejected_before_sending() {
        let backend = ScriptedBackend::new();
        let err = run_filter(
            backend.clone(),
            modern_catalog(),
            modern_styles(),
            &args(&["age:>:thirty"]),
            Direction::Both,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("thirty"));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn unauthorized_stays_detectable_through_anyhow() {
        let backend = ScriptedBackend::new().then_err(QueryError::new(401, "expired"));
        let err = run_filter(backend, modern_catalog(), modern_styles(), &args(&[]), Direction::Both)
            .await
            .unwrap_err();
        let filter_err = err.downcast_ref::<FilterError>().unwrap();
        assert!(filter_err.is_unauthorized());
    }

    #[tokio::test]
    async fn rule_outside_kind_vocabulary_is_rejected() {
        let err = run_filter(
            ScriptedBackend::new(),
            modern_catalog(),
            modern_styles(),
            &args(&["active:>:1"]),
            Direction::Both,
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FilterError>(),
            Some(FilterError::RuleNotOffered)
        ));
    }
}

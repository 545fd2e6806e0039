// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filter session: the lifecycle of one open filter board.
//!
//! The session owns the expression being authored, the selectable-property
//! list of the chosen edge type, and a generation counter. Every close bumps
//! the generation, so a response that arrives for an older generation is
//! recognised as stale and dropped by the engine.

use crate::error::FilterError;
use crate::expression::{Direction, FilterExpression, PredicateValue, PropertyPredicate};
use crate::rules::{rule_options, FilterRule};
use crate::schema::{PropertyKind, SchemaCatalog};
use crate::validator::{self, Gate};
use std::sync::Arc;
use vista_graph::VertexId;

/// The right-clicked vertex a filter expands from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginVertex {
    /// Vertex id.
    pub id: VertexId,
    /// Vertex type.
    pub label: String,
}

/// A single-field edit of one predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateEdit {
    /// Choose the property; resets rule and value.
    Property(String),
    /// Choose the rule.
    Rule(FilterRule),
    /// Set the comparison value.
    Value(PredicateValue),
}

/// State of one filter interaction.
#[derive(Debug, Clone)]
pub struct FilterSession {
    catalog: Arc<SchemaCatalog>,
    expression: FilterExpression,
    selectable: Vec<String>,
    origin: Option<OriginVertex>,
    open: bool,
    generation: u64,
    in_flight: Option<u64>,
    default_direction: Direction,
}

impl FilterSession {
    /// Closed session over a schema catalog.
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        Self {
            catalog,
            expression: FilterExpression::default(),
            selectable: Vec::new(),
            origin: None,
            open: false,
            generation: 0,
            in_flight: None,
            default_direction: Direction::default(),
        }
    }

    /// Direction every fresh expression starts with.
    pub fn with_default_direction(mut self, direction: Direction) -> Self {
        self.default_direction = direction;
        self.expression.line.direction = direction;
        self
    }

    /// Open the board for `origin`, starting from an empty expression.
    pub fn open(&mut self, origin: OriginVertex) {
        self.generation += 1;
        self.reset();
        self.origin = Some(origin);
        self.open = true;
        self.in_flight = None;
    }

    /// Close the board: clear the expression and forget any pending submit.
    pub fn close(&mut self) {
        self.generation += 1;
        self.reset();
        self.origin = None;
        self.open = false;
        self.in_flight = None;
    }

    /// Clear to an empty expression. The board stays open.
    pub fn reset(&mut self) {
        self.expression = FilterExpression::default();
        self.expression.line.direction = self.default_direction;
        self.selectable.clear();
    }

    /// True while the board is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Origin vertex, when open.
    pub fn origin(&self) -> Option<&OriginVertex> {
        self.origin.as_ref()
    }

    /// Current expression.
    pub fn expression(&self) -> &FilterExpression {
        &self.expression
    }

    /// Schema catalog the session validates against.
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    /// Session generation; changes on every open/close.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a submit is awaiting its response.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Every property of the chosen edge type.
    pub fn selectable_properties(&self) -> &[String] {
        &self.selectable
    }

    /// Choose the edge type (empty to unset) and refresh the selectable list.
    ///
    /// Existing predicates are kept even when the new type lacks their
    /// property; they simply stop being offered.
    pub fn set_edge_type(&mut self, edge_type: &str) -> Result<(), FilterError> {
        if !edge_type.is_empty() && self.catalog.edge_type(edge_type).is_none() {
            return Err(FilterError::UnknownEdgeType(edge_type.to_owned()));
        }
        edge_type.clone_into(&mut self.expression.line.edge_type);
        self.refresh_selectable();
        Ok(())
    }

    /// Choose the direction and refresh the selectable list.
    pub fn set_direction(&mut self, direction: Direction) {
        self.expression.line.direction = direction;
        self.refresh_selectable();
    }

    fn refresh_selectable(&mut self) {
        self.selectable = self
            .catalog
            .edge_properties(&self.expression.line.edge_type)
            .to_vec();
    }

    /// Both derived flags for the current state.
    pub fn gate(&self) -> Gate {
        Gate::evaluate(&self.expression, &self.selectable)
    }

    /// Submit is enabled.
    pub fn can_submit(&self) -> bool {
        validator::can_submit(&self.expression)
    }

    /// "Add predicate" is enabled.
    pub fn can_add_predicate(&self) -> bool {
        validator::can_add_predicate(&self.expression, &self.selectable)
    }

    /// Properties pickable for the predicate at `index` (`None` for a new one).
    pub fn offered_properties(&self, index: Option<usize>) -> Vec<&str> {
        validator::offered_properties(&self.expression, &self.selectable, index)
    }

    /// Declared kind of the property chosen at `index`.
    pub fn predicate_kind(&self, index: usize) -> Option<PropertyKind> {
        let predicate = self.expression.properties.get(index)?;
        self.catalog.property_kind(&predicate.property)
    }

    /// Rules pickable for the predicate at `index`.
    pub fn rule_options(&self, index: usize) -> &'static [FilterRule] {
        rule_options(self.predicate_kind(index))
    }

    /// Append a blank predicate. No-op returning `false` when not allowed.
    pub fn add_predicate(&mut self) -> bool {
        if !self.can_add_predicate() {
            return false;
        }
        self.expression.properties.push(PropertyPredicate::empty());
        true
    }

    /// Apply one edit to the predicate at `index`.
    pub fn edit_predicate(&mut self, index: usize, edit: PredicateEdit) -> Result<(), FilterError> {
        if index >= self.expression.properties.len() {
            return Err(FilterError::PredicateIndex(index));
        }
        match edit {
            PredicateEdit::Property(name) => {
                if !self.offered_properties(Some(index)).contains(&name.as_str()) {
                    return Err(FilterError::PropertyNotOffered(name));
                }
                let initial = PredicateValue::initial_for(self.catalog.property_kind(&name));
                let predicate = &mut self.expression.properties[index];
                predicate.property = name;
                predicate.rule = None;
                predicate.value = initial;
            }
            PredicateEdit::Rule(rule) => {
                if !self.rule_options(index).contains(&rule) {
                    return Err(FilterError::RuleNotOffered);
                }
                let predicate = &mut self.expression.properties[index];
                predicate.rule = Some(rule);
                if rule.is_boolean() {
                    predicate.value = PredicateValue::default();
                }
            }
            PredicateEdit::Value(value) => {
                let kind = self.predicate_kind(index);
                let predicate = &mut self.expression.properties[index];
                let boolean = kind == Some(PropertyKind::Boolean)
                    || predicate.rule.is_some_and(FilterRule::is_boolean);
                if predicate.property.is_empty() || boolean {
                    return Err(FilterError::ValueNotAccepted);
                }
                predicate.value = value;
            }
        }
        Ok(())
    }

    /// Remove and return the predicate at `index`.
    pub fn delete_predicate(&mut self, index: usize) -> Result<PropertyPredicate, FilterError> {
        if index >= self.expression.properties.len() {
            return Err(FilterError::PredicateIndex(index));
        }
        Ok(self.expression.properties.remove(index))
    }

    pub(crate) fn begin_submit(&mut self) -> u64 {
        self.in_flight = Some(self.generation);
        self.generation
    }

    pub(crate) fn abort_submit(&mut self) {
        self.in_flight = None;
    }

    /// True when a response for `generation` still applies to this session.
    pub fn is_current(&self, generation: u64) -> bool {
        self.open && self.generation == generation && self.in_flight == Some(generation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog() -> Arc<SchemaCatalog> {
        Arc::new(
            SchemaCatalog::new()
                .with_edge_type("knows", ["age", "active", "note"])
                .with_edge_type("created", ["weight"])
                .with_property_kind("age", "int")
                .with_property_kind("active", "boolean")
                .with_property_kind("note", "text")
                .with_property_kind("weight", "double"),
        )
    }

    fn open_session() -> FilterSession {
        let mut s = FilterSession::new(catalog());
        s.open(OriginVertex {
            id: "1:marko".into(),
            label: "person".into(),
        });
        s
    }

    #[test]
    fn open_and_close_bump_generation() {
        let mut s = FilterSession::new(catalog());
        assert!(!s.is_open());
        let g0 = s.generation();
        s.open(OriginVertex {
            id: "v".into(),
            label: "t".into(),
        });
        assert!(s.is_open());
        assert!(s.generation() > g0);
        let g1 = s.generation();
        s.close();
        assert!(!s.is_open());
        assert!(s.origin().is_none());
        assert!(s.generation() > g1);
    }

    #[test]
    fn unknown_edge_type_is_rejected() {
        let mut s = open_session();
        assert_eq!(
            s.set_edge_type("likes"),
            Err(FilterError::UnknownEdgeType("likes".into()))
        );
        assert!(s.expression().line.edge_type.is_empty());
        s.set_edge_type("knows").unwrap();
        assert_eq!(s.selectable_properties(), ["age", "active", "note"]);
    }

    #[test]
    fn add_predicate_is_noop_when_gate_closed() {
        let mut s = open_session();
        assert!(!s.add_predicate());
        s.set_edge_type("knows").unwrap();
        assert!(s.add_predicate());
        s.edit_predicate(0, PredicateEdit::Property("age".into())).unwrap();
        assert!(!s.can_submit());
        assert!(!s.add_predicate());
        assert_eq!(s.expression().properties.len(), 1);
    }

    #[test]
    fn property_change_resets_rule_and_value() {
        let mut s = open_session();
        s.set_edge_type("knows").unwrap();
        s.add_predicate();
        s.edit_predicate(0, PredicateEdit::Property("age".into())).unwrap();
        assert_eq!(s.expression().properties[0].value, PredicateValue::Integer(0));
        s.edit_predicate(0, PredicateEdit::Rule(FilterRule::Gt)).unwrap();
        s.edit_predicate(0, PredicateEdit::Property("note".into())).unwrap();
        let p = &s.expression().properties[0];
        assert_eq!(p.rule, None);
        assert_eq!(p.value, PredicateValue::default());
    }

    #[test]
    fn rules_must_be_offered_for_the_kind() {
        let mut s = open_session();
        s.set_edge_type("knows").unwrap();
        s.add_predicate();
        // No property yet: nothing is offered.
        assert_eq!(
            s.edit_predicate(0, PredicateEdit::Rule(FilterRule::Eq)),
            Err(FilterError::RuleNotOffered)
        );
        s.edit_predicate(0, PredicateEdit::Property("note".into())).unwrap();
        assert_eq!(
            s.edit_predicate(0, PredicateEdit::Rule(FilterRule::Gt)),
            Err(FilterError::RuleNotOffered)
        );
        s.edit_predicate(0, PredicateEdit::Rule(FilterRule::Eq)).unwrap();
    }

    #[test]
    fn boolean_predicate_completes_without_value() {
        let mut s = open_session();
        s.set_edge_type("knows").unwrap();
        s.add_predicate();
        s.edit_predicate(0, PredicateEdit::Property("active".into())).unwrap();
        let symbols: Vec<&str> = s.rule_options(0).iter().map(|r| r.symbol()).collect();
        assert_eq!(symbols, vec!["True", "False"]);
        s.edit_predicate(0, PredicateEdit::Rule(FilterRule::True)).unwrap();
        assert!(s.can_submit());
        assert_eq!(
            s.edit_predicate(0, PredicateEdit::Value(PredicateValue::Text("x".into()))),
            Err(FilterError::ValueNotAccepted)
        );
    }

    #[test]
    fn used_properties_are_not_offered_twice() {
        let mut s = open_session();
        s.set_edge_type("knows").unwrap();
        s.add_predicate();
        s.edit_predicate(0, PredicateEdit::Property("active".into())).unwrap();
        s.edit_predicate(0, PredicateEdit::Rule(FilterRule::False)).unwrap();
        assert!(s.add_predicate());
        assert_eq!(s.offered_properties(Some(1)), vec!["age", "note"]);
        assert_eq!(
            s.edit_predicate(1, PredicateEdit::Property("active".into())),
            Err(FilterError::PropertyNotOffered("active".into()))
        );
    }

    #[test]
    fn add_stops_at_property_count() {
        let mut s = open_session();
        s.set_edge_type("created").unwrap();
        assert!(s.add_predicate());
        s.edit_predicate(0, PredicateEdit::Property("weight".into())).unwrap();
        s.edit_predicate(0, PredicateEdit::Rule(FilterRule::Lt)).unwrap();
        // double properties start without a value
        assert!(!s.can_submit());
        s.edit_predicate(0, PredicateEdit::Value(PredicateValue::Float(0.5)))
            .unwrap();
        assert!(s.can_submit());
        assert!(!s.can_add_predicate());
        assert!(!s.add_predicate());
    }

    #[test]
    fn changing_edge_type_keeps_stale_predicates() {
        let mut s = open_session();
        s.set_edge_type("knows").unwrap();
        s.add_predicate();
        s.edit_predicate(0, PredicateEdit::Property("age".into())).unwrap();
        s.edit_predicate(0, PredicateEdit::Rule(FilterRule::Gte)).unwrap();
        s.set_edge_type("created").unwrap();
        assert_eq!(s.expression().properties.len(), 1);
        assert_eq!(s.offered_properties(Some(0)), vec!["weight"]);
        // The stale predicate is still complete; the gate only looks at shape.
        assert!(s.can_submit());
    }

    #[test]
    fn default_direction_survives_reopen() {
        let mut s = FilterSession::new(catalog()).with_default_direction(Direction::Out);
        s.open(OriginVertex {
            id: "v".into(),
            label: "t".into(),
        });
        s.set_direction(Direction::In);
        s.close();
        s.open(OriginVertex {
            id: "v".into(),
            label: "t".into(),
        });
        assert_eq!(s.expression().line.direction, Direction::Out);
    }

    #[test]
    fn delete_and_bad_indexes() {
        let mut s = open_session();
        s.set_edge_type("knows").unwrap();
        s.add_predicate();
        assert_eq!(s.delete_predicate(3), Err(FilterError::PredicateIndex(3)));
        assert_eq!(
            s.edit_predicate(5, PredicateEdit::Rule(FilterRule::Eq)),
            Err(FilterError::PredicateIndex(5))
        );
        assert_eq!(s.delete_predicate(0), Ok(PropertyPredicate::empty()));
        assert!(s.can_submit());
    }

    #[test]
    fn reset_clears_expression_but_stays_open() {
        let mut s = open_session();
        s.set_edge_type("knows").unwrap();
        s.set_direction(Direction::In);
        s.add_predicate();
        s.reset();
        assert_eq!(s.expression(), &FilterExpression::default());
        assert_eq!(s.expression().line.direction, Direction::Both);
        assert!(s.selectable_properties().is_empty());
        assert!(s.is_open());
    }
}

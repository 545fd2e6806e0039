// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure derivations over a [`FilterExpression`].
//!
//! Nothing here is cached: callers recompute the gate from the current
//! expression and the selectable-property list after every mutation.

use crate::expression::FilterExpression;

/// True when the expression may be sent.
///
/// Either no predicates and an edge type is chosen, or the last predicate is
/// complete (property, rule, and a value unless the rule is `True`/`False`).
pub fn can_submit(expr: &FilterExpression) -> bool {
    match expr.last_predicate() {
        None => !expr.line.edge_type.is_empty(),
        Some(last) => last.is_complete(),
    }
}

/// True when another predicate may be appended.
///
/// `selectable` is every property of the current edge type; one predicate per
/// property at most.
pub fn can_add_predicate(expr: &FilterExpression, selectable: &[String]) -> bool {
    can_submit(expr) && !selectable.is_empty() && expr.properties.len() < selectable.len()
}

/// Properties that may be picked for the predicate at `editing` (or a new one
/// when `None`): the selectable list minus properties used by other predicates.
pub fn offered_properties<'a>(
    expr: &FilterExpression,
    selectable: &'a [String],
    editing: Option<usize>,
) -> Vec<&'a str> {
    let used: Vec<&str> = expr.used_properties(editing).collect();
    selectable
        .iter()
        .map(String::as_str)
        .filter(|p| !used.contains(p))
        .collect()
}

/// Snapshot of both derived flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gate {
    /// The submit action is enabled.
    pub can_submit: bool,
    /// The "add predicate" action is enabled.
    pub can_add_predicate: bool,
}

impl Gate {
    /// Derive the gate from the current expression.
    pub fn evaluate(expr: &FilterExpression, selectable: &[String]) -> Self {
        Self {
            can_submit: can_submit(expr),
            can_add_predicate: can_add_predicate(expr, selectable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{Direction, EdgeFilter, PredicateValue, PropertyPredicate};
    use crate::rules::FilterRule;

    fn expr(edge_type: &str, properties: Vec<PropertyPredicate>) -> FilterExpression {
        FilterExpression {
            line: EdgeFilter {
                edge_type: edge_type.into(),
                direction: Direction::Out,
            },
            properties,
        }
    }

    fn pred(property: &str, rule: Option<FilterRule>, value: PredicateValue) -> PropertyPredicate {
        PropertyPredicate {
            property: property.into(),
            rule,
            value,
        }
    }

    fn selectable(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn empty_expression_needs_an_edge_type() {
        assert!(!can_submit(&expr("", vec![])));
        assert!(can_submit(&expr("knows", vec![])));
    }

    #[test]
    fn last_predicate_decides() {
        let complete = pred("age", Some(FilterRule::Gte), PredicateValue::Integer(30));
        assert!(can_submit(&expr("knows", vec![complete.clone()])));

        let no_rule = pred("age", None, PredicateValue::Integer(0));
        assert!(!can_submit(&expr("knows", vec![complete.clone(), no_rule])));

        let blank = PropertyPredicate::empty();
        assert!(!can_submit(&expr("knows", vec![complete, blank])));
    }

    #[test]
    fn boolean_rule_submits_regardless_of_value() {
        for rule in [FilterRule::True, FilterRule::False] {
            let p = pred("active", Some(rule), PredicateValue::default());
            assert!(can_submit(&expr("knows", vec![p])));
        }
    }

    #[test]
    fn add_requires_submit_and_spare_properties() {
        let props = selectable(&["age", "since"]);
        assert!(can_add_predicate(&expr("knows", vec![]), &props));
        assert!(!can_add_predicate(&expr("knows", vec![]), &[]));
        assert!(!can_add_predicate(&expr("", vec![]), &props));

        let a = pred("age", Some(FilterRule::Lt), PredicateValue::Integer(3));
        let b = pred("since", Some(FilterRule::Eq), PredicateValue::Integer(2010));
        assert!(can_add_predicate(&expr("knows", vec![a.clone()]), &props));
        assert!(!can_add_predicate(&expr("knows", vec![a, b]), &props));
    }

    #[test]
    fn offered_list_excludes_other_predicates_properties() {
        let props = selectable(&["age", "since", "weight"]);
        let e = expr(
            "knows",
            vec![
                pred("age", None, PredicateValue::default()),
                pred("weight", None, PredicateValue::default()),
            ],
        );
        assert_eq!(offered_properties(&e, &props, None), vec!["since"]);
        assert_eq!(offered_properties(&e, &props, Some(0)), vec!["age", "since"]);
    }

    #[test]
    fn gate_bundles_both_flags() {
        let props = selectable(&["age"]);
        let gate = Gate::evaluate(&expr("knows", vec![]), &props);
        assert_eq!(
            gate,
            Gate {
                can_submit: true,
                can_add_predicate: true
            }
        );
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filter expression data model: edge filter plus an ordered predicate chain.

use crate::rules::FilterRule;
use crate::schema::PropertyKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Edge direction relative to the origin vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Incoming edges.
    In,
    /// Outgoing edges.
    Out,
    /// Both directions.
    #[default]
    Both,
}

impl Direction {
    /// Every direction, in picker order.
    pub const ALL: [Self; 3] = [Self::In, Self::Out, Self::Both];

    /// Wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
            Self::Both => "BOTH",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown direction `{s}` (expected IN, OUT or BOTH)"))
    }
}

/// Edge part of the expression. An empty `edge_type` means unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeFilter {
    /// Edge type name.
    #[serde(rename = "type")]
    pub edge_type: String,
    /// Direction.
    pub direction: Direction,
}

/// Predicate value, typed by the property's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredicateValue {
    /// Whole number (byte/int/long).
    Integer(i64),
    /// Real number (float/double).
    Float(f64),
    /// Text, date or uuid; the empty string means unset.
    Text(String),
}

impl Default for PredicateValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl PredicateValue {
    /// Value a predicate starts with after its property is chosen: `0` for
    /// byte/int/long, the empty string for everything else.
    pub fn initial_for(kind: Option<PropertyKind>) -> Self {
        match kind {
            Some(k) if k.is_integral() => Self::Integer(0),
            _ => Self::default(),
        }
    }

    /// Parse user input for a property of `kind`. Numbers that fail to parse yield `None`.
    pub fn parse_for(kind: Option<PropertyKind>, raw: &str) -> Option<Self> {
        match kind {
            Some(k) if k.is_integral() => raw.trim().parse().ok().map(Self::Integer),
            Some(k) if k.is_fractional() => raw.trim().parse().ok().map(Self::Float),
            _ => Some(Self::Text(raw.to_owned())),
        }
    }

    /// Only the empty string counts as "no value".
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    /// JSON form for the wire query.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Integer(n) => serde_json::Value::from(*n),
            Self::Float(x) => serde_json::Value::from(*x),
            Self::Text(s) => serde_json::Value::from(s.as_str()),
        }
    }
}

/// One property predicate. An empty `property` means unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyPredicate {
    /// Property name.
    pub property: String,
    /// Chosen rule.
    pub rule: Option<FilterRule>,
    /// Comparison value (unused by boolean rules).
    pub value: PredicateValue,
}

impl PropertyPredicate {
    /// A freshly appended, blank predicate.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Property and rule chosen, and a value present unless the rule is boolean.
    pub fn is_complete(&self) -> bool {
        !self.property.is_empty()
            && self
                .rule
                .is_some_and(|r| r.is_boolean() || !self.value.is_empty())
    }
}

/// The user-authored filter expression.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterExpression {
    /// Edge type + direction.
    pub line: EdgeFilter,
    /// Predicate chain in authoring order.
    pub properties: Vec<PropertyPredicate>,
}

impl FilterExpression {
    /// Last predicate in the chain.
    pub fn last_predicate(&self) -> Option<&PropertyPredicate> {
        self.properties.last()
    }

    /// Properties already referenced by a predicate, skipping `except`.
    pub fn used_properties(&self, except: Option<usize>) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != except)
            .map(|(_, p)| p.property.as_str())
            .filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("out".parse::<Direction>(), Ok(Direction::Out));
        assert_eq!("BOTH".parse::<Direction>(), Ok(Direction::Both));
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn initial_values_follow_kind() {
        assert_eq!(
            PredicateValue::initial_for(Some(PropertyKind::Int)),
            PredicateValue::Integer(0)
        );
        assert_eq!(
            PredicateValue::initial_for(Some(PropertyKind::Long)),
            PredicateValue::Integer(0)
        );
        assert!(PredicateValue::initial_for(Some(PropertyKind::Double)).is_empty());
        assert!(PredicateValue::initial_for(Some(PropertyKind::Float)).is_empty());
        assert!(PredicateValue::initial_for(Some(PropertyKind::Date)).is_empty());
        assert!(PredicateValue::initial_for(Some(PropertyKind::Text)).is_empty());
        assert!(PredicateValue::initial_for(None).is_empty());
    }

    #[test]
    fn zero_is_a_value() {
        assert!(!PredicateValue::Integer(0).is_empty());
        assert!(!PredicateValue::Text("0".into()).is_empty());
    }

    #[test]
    fn parse_for_respects_kind() {
        assert_eq!(
            PredicateValue::parse_for(Some(PropertyKind::Long), " 30 "),
            Some(PredicateValue::Integer(30))
        );
        assert_eq!(PredicateValue::parse_for(Some(PropertyKind::Int), "3.5"), None);
        assert_eq!(
            PredicateValue::parse_for(Some(PropertyKind::Float), "3.5"),
            Some(PredicateValue::Float(3.5))
        );
        assert_eq!(
            PredicateValue::parse_for(Some(PropertyKind::Date), "2020-01-01"),
            Some(PredicateValue::Text("2020-01-01".into()))
        );
    }

    #[test]
    fn boolean_rule_completes_without_value() {
        let p = PropertyPredicate {
            property: "active".into(),
            rule: Some(FilterRule::True),
            value: PredicateValue::default(),
        };
        assert!(p.is_complete());
    }

    #[test]
    fn missing_rule_or_value_is_incomplete() {
        let mut p = PropertyPredicate {
            property: "age".into(),
            rule: None,
            value: PredicateValue::Integer(3),
        };
        assert!(!p.is_complete());
        p.rule = Some(FilterRule::Gte);
        assert!(p.is_complete());
        p.value = PredicateValue::default();
        assert!(!p.is_complete());
    }

    #[test]
    fn used_properties_skip_blank_and_excepted() {
        let expr = FilterExpression {
            line: EdgeFilter::default(),
            properties: vec![
                PropertyPredicate {
                    property: "a".into(),
                    ..PropertyPredicate::empty()
                },
                PropertyPredicate::empty(),
                PropertyPredicate {
                    property: "c".into(),
                    ..PropertyPredicate::empty()
                },
            ],
        };
        assert_eq!(expr.used_properties(None).collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(expr.used_properties(Some(0)).collect::<Vec<_>>(), vec!["c"]);
    }
}

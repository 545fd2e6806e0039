// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rule vocabulary offered for a property predicate, derived from the
//! property's declared kind.

use crate::schema::PropertyKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule families by property kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFamily {
    /// Numbers and dates: ordered comparisons.
    Ordered,
    /// Strings and opaque values: equality only.
    Opaque,
    /// Booleans: the rule itself is the value.
    Boolean,
}

impl KindFamily {
    /// Family of a declared kind.
    pub const fn of(kind: PropertyKind) -> Self {
        match kind {
            PropertyKind::Float
            | PropertyKind::Double
            | PropertyKind::Byte
            | PropertyKind::Int
            | PropertyKind::Long
            | PropertyKind::Date => Self::Ordered,
            PropertyKind::Object | PropertyKind::Text | PropertyKind::Blob | PropertyKind::Uuid => {
                Self::Opaque
            }
            PropertyKind::Boolean => Self::Boolean,
        }
    }
}

/// A predicate rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterRule {
    /// Greater than.
    #[serde(rename = ">")]
    Gt,
    /// Greater than or equal.
    #[serde(rename = ">=")]
    Gte,
    /// Less than.
    #[serde(rename = "<")]
    Lt,
    /// Less than or equal.
    #[serde(rename = "<=")]
    Lte,
    /// Equal.
    #[serde(rename = "=")]
    Eq,
    /// Boolean property is true.
    True,
    /// Boolean property is false.
    False,
}

const ORDERED_RULES: [FilterRule; 5] = [
    FilterRule::Gt,
    FilterRule::Gte,
    FilterRule::Lt,
    FilterRule::Lte,
    FilterRule::Eq,
];
const OPAQUE_RULES: [FilterRule; 1] = [FilterRule::Eq];
const BOOLEAN_RULES: [FilterRule; 2] = [FilterRule::True, FilterRule::False];

/// Rules selectable for a property of the given kind; empty for unknown kinds.
pub fn rule_options(kind: Option<PropertyKind>) -> &'static [FilterRule] {
    match kind.map(KindFamily::of) {
        Some(KindFamily::Ordered) => &ORDERED_RULES,
        Some(KindFamily::Opaque) => &OPAQUE_RULES,
        Some(KindFamily::Boolean) => &BOOLEAN_RULES,
        None => &[],
    }
}

impl FilterRule {
    /// Symbol shown in the rule picker.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Eq => "=",
            Self::True => "True",
            Self::False => "False",
        }
    }

    /// Parse a picker symbol.
    pub fn parse(symbol: &str) -> Option<Self> {
        let rule = match symbol {
            ">" => Self::Gt,
            ">=" => Self::Gte,
            "<" => Self::Lt,
            "<=" => Self::Lte,
            "=" => Self::Eq,
            "True" => Self::True,
            "False" => Self::False,
            _ => return None,
        };
        Some(rule)
    }

    /// Operator name on the wire.
    pub const fn operator(self) -> &'static str {
        match self {
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Eq | Self::True | Self::False => "eq",
        }
    }

    /// `True`/`False` carry their own value.
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// The value encoded by a boolean rule.
    pub const fn boolean_value(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            _ => None,
        }
    }
}

impl fmt::Display for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

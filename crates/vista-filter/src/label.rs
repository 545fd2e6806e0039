// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Display label, id label and tooltip text for visual elements.

use vista_graph::{ElementKind, Properties, PropertyValue};

/// Maximum label length (in chars) before truncation.
pub const LABEL_BUDGET: usize = 15;
/// Suffix appended to truncated labels.
pub const ELLIPSIS: &str = "...";
/// Pseudo label field: the vertex id for vertices, the type name for edges.
pub const ID_FIELD: &str = "~id";
/// Separator between label field values.
pub const FIELD_SEPARATOR: &str = "-";

/// Cut `text` to [`LABEL_BUDGET`] chars, appending [`ELLIPSIS`] when cut.
pub fn truncate_label(text: &str) -> String {
    match text.char_indices().nth(LABEL_BUDGET) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&text[..cut]);
            out.push_str(ELLIPSIS);
            out
        }
        None => text.to_owned(),
    }
}

fn field_value(
    kind: ElementKind,
    type_label: &str,
    id: &str,
    properties: &Properties,
    field: &str,
) -> Option<String> {
    if field == ID_FIELD {
        let pseudo = match kind {
            ElementKind::Vertex => id,
            ElementKind::Edge => type_label,
        };
        return Some(pseudo.to_owned());
    }
    match properties.get(field)? {
        PropertyValue::Null => None,
        PropertyValue::Text(s) if s.is_empty() => None,
        value => Some(value.to_string()),
    }
}

/// Join the values of `label_fields` found on the element with `-`, then truncate.
///
/// Fields missing from `properties`, `null` values and empty strings are skipped.
pub fn format_label(
    kind: ElementKind,
    type_label: &str,
    id: &str,
    properties: &Properties,
    label_fields: &[String],
) -> String {
    let joined = label_fields
        .iter()
        .filter_map(|field| field_value(kind, type_label, id, properties, field))
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR);
    truncate_label(&joined)
}

/// Secondary vertex label: the id under the same truncation rule.
pub fn format_id_label(id: &str) -> String {
    truncate_label(id)
}

/// Hover text: type, id, then every property in backend order, one per line.
pub fn format_tooltip(kind: ElementKind, type_label: &str, id: &str, properties: &Properties) -> String {
    let noun = match kind {
        ElementKind::Vertex => "Vertex",
        ElementKind::Edge => "Edge",
    };
    let mut lines = Vec::with_capacity(properties.len() + 2);
    lines.push(format!("{noun} type: {type_label}"));
    lines.push(format!("{noun} ID: {id}"));
    lines.extend(properties.iter().map(|(k, v)| format!("{k}: {v}")));
    lines.join("\n")
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Selection state.

use serde::Serialize;
use vista_graph::VertexId;

/// Selected vertices, in selection order.
///
/// Renderers use this to apply visual emphasis (shadow, enlarged radius)
/// to the selected nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HighlightState {
    /// Currently selected vertex ids.
    pub selected_nodes: Vec<VertexId>,
}

impl HighlightState {
    /// Replace the selection, or extend it when `additive` is set.
    /// Ids already selected are not repeated.
    pub fn select(&mut self, ids: &[VertexId], additive: bool) {
        if !additive {
            self.selected_nodes.clear();
        }
        for id in ids {
            if !self.selected_nodes.contains(id) {
                self.selected_nodes.push(id.clone());
            }
        }
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        self.selected_nodes.clear();
    }

    /// True when `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_nodes.iter().any(|s| s == id)
    }
}

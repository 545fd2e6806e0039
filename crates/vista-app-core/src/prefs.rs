// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved explorer preferences (backend connection + filter defaults).

use serde::{Deserialize, Serialize};
use vista_filter::Direction;

/// Config key the explorer preferences are stored under.
pub const EXPLORER_PREFS_KEY: &str = "explorer";

/// Saved preferences for the graph explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExplorerPrefs {
    /// Where queries go.
    pub backend: BackendPrefs,
    /// Filter board defaults.
    pub filter: FilterPrefs,
}

/// Query backend connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendPrefs {
    /// Server root, e.g. `http://localhost:8088`.
    pub base_url: String,
    /// Graph connection id on the server.
    pub connection_id: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendPrefs {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8088".into(),
            connection_id: 1,
            timeout_secs: 30,
        }
    }
}

/// Filter board defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterPrefs {
    /// Direction a fresh expression starts with.
    pub default_direction: Direction,
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for vista crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`backend`] - Scripted query backend that replays queued responses
//! - [`catalog`] - Schema catalog and style mapping fixtures
//! - [`view`] - Graph view builder for backend responses

pub mod backend;
pub mod catalog;
pub mod config;
pub mod view;

// Re-export commonly used items at crate root for convenience
pub use backend::ScriptedBackend;
pub use catalog::{modern_catalog, modern_styles, CatalogBuilder};
pub use config::InMemoryConfigStore;
pub use view::GraphViewBuilder;

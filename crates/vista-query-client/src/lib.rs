// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! HTTP adapter for the graph query backend.
//!
//! Every endpoint answers with a `{ status, data, message }` envelope;
//! [`decode_envelope`] turns it into data or a [`vista_filter::QueryError`]
//! carrying the server's status and message verbatim.

mod client;
mod envelope;
pub mod schema;

pub use client::{ClientError, HttpQueryClient, SchemaBundle};
pub use envelope::decode_envelope;

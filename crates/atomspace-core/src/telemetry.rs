// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Optional tracing instrumentation for atom insertion.
//!
//! Off by default — a single-threaded, in-memory store has no failure
//! modes worth instrumenting in production, but callers embedding this
//! crate in a larger service may want a record of what was inserted.
//! Enable with the `telemetry` feature.

#![cfg(feature = "telemetry")]

use crate::ident::Handle;

fn short(handle: &Handle) -> String {
    hex::encode(&handle.as_bytes()[..8])
}

/// Emit a `tracing` event for a newly created node.
pub fn node_inserted(id: &Handle, named_type: &str, name: &str) {
    tracing::info!(id = %short(id), named_type, name, "atom node inserted");
}

/// Emit a `tracing` event for a newly created link.
pub fn link_inserted(id: &Handle, named_type: &str, arity: usize, is_toplevel: bool) {
    tracing::info!(id = %short(id), named_type, arity, is_toplevel, "atom link inserted");
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory, content-addressed atom database.
//!
//! An [`AtomSpace`] holds two kinds of atom: a `node`, a terminal
//! identified by its `(type, name)` pair, and a `link`, a non-terminal
//! identified by its type and an ordered list of target atoms (which
//! may themselves be nodes or nested links). Every atom's identity is
//! a BLAKE3 digest computed from its own content, never assigned by
//! the store — inserting the same atom twice yields the same
//! [`Handle`] and is a no-op on the second call.
//!
//! # Hash Domain Policy
//!
//! Every identifier is content-only: a node's id depends on its type
//! and name, a link's id depends on its type and its targets' ids, and
//! nothing else. Two atoms with identical content always produce
//! identical handles, and a one-byte domain tag (`"T"`/`"N"`/`"E"`/`"C"`
//! in [`hash`]) keeps a type's hash, a node's hash, and a link's hash
//! from ever colliding with each other.
//!
//! # Determinism Invariant
//!
//! Re-inserting an atom is idempotent: the first insert's extras win,
//! a later insert's extras are discarded, and a link's `is_toplevel`
//! flag is only ever set `true` by an outermost `add_link` call, never
//! promoted afterward by a nested re-insertion.
//!
//! # Concurrency
//!
//! [`AtomSpace`] is plain owned state with no interior mutability or
//! synchronization of its own — callers needing concurrent access wrap
//! it in a `Mutex`/`RwLock` themselves, the same way [`AtomSpace`]'s
//! single-writer insertion methods assume exclusive `&mut self` access.

#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

pub mod error;
pub mod hash;
pub mod ident;
pub mod index;
pub mod pattern;
pub mod query;
pub mod record;
pub mod spec;
pub mod store;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use error::AtomError;
pub use ident::{Arity, Handle};
pub use query::TypeTemplate;
pub use record::{CompositeType, LinkRecord, NodeRecord, TypeDefRecord};
pub use spec::{AtomSpec, LinkSpec, NodeSpec};
pub use store::{AtomSpace, AtomSpaceConfig};

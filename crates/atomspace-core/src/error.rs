// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error signals raised by the atom store.
//!
//! All four are synchronous, caller-visible, never retried, and never
//! logged internally — the store fails fast and lets the caller decide
//! how to react (`node_exists`/`link_exists` swallow the corresponding
//! `*Missing` variant into a `bool`).

use thiserror::Error;

/// Errors produced by [`crate::AtomSpace`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtomError {
    /// `add_node` was called without a `type` or `name`.
    #[error("add_node requires 'type' and 'name': {details}")]
    BadNode {
        /// The input that failed validation, for diagnostics.
        details: String,
    },
    /// `add_link` was called without a `type` or `targets`.
    #[error("add_link requires 'type' and 'targets': {details}")]
    BadLink {
        /// The input that failed validation, for diagnostics.
        details: String,
    },
    /// A lookup referenced a node that does not exist.
    #[error("node does not exist: {details}")]
    NodeMissing {
        /// The lookup key that did not resolve.
        details: String,
    },
    /// A lookup referenced a link that does not exist.
    #[error("link does not exist: {details}")]
    LinkMissing {
        /// The lookup key that did not resolve.
        details: String,
    },
}

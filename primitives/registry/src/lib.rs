#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Definition Registry — canonical storage and multi-key retrieval for trace
//! definitions.
//!
//! The registry stores every definition exactly once, keyed by its reference
//! number, and layers independently-typed secondary key spaces on top so a
//! definition created under one key (say, a CPU id) can later be found by
//! that key, by another key, or by its raw reference number. Secondary
//! indices are pure aliases: how a definition was found never changes how
//! many distinct definitions exist.
//!
//! Pieces, bottom up:
//!
//! - [`DefinitionStore`] — the canonical per-category map from reference
//!   number to shared handle.
//! - [`LookupStore`] — one category's canonical store plus its secondary
//!   indices.
//! - [`Registry`] — one lookup store per definition kind and the reference
//!   allocator that keeps new numbers collision-free.
//!
//! All operations are synchronous in-memory computations; errors surface at
//! the call that triggered them and nothing is retried internally.

pub mod lookup;
pub mod registry;
pub mod store;

use thiserror::Error;

pub use lookup::{LookupKey, LookupStore};
pub use registry::{HasStore, Registry};
pub use store::DefinitionStore;

/// Errors surfaced by registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A definition with the same reference number already exists in the
    /// category; nothing is overwritten.
    #[error("duplicate {kind} definition for reference number {reference}")]
    DuplicateReference {
        /// Diagnostic name of the definition kind.
        kind: &'static str,
        /// The contested reference number.
        reference: u64,
    },

    /// No definition with the given reference number exists in the category.
    #[error("no {kind} definition for reference number {reference}")]
    NotFound {
        /// Diagnostic name of the definition kind.
        kind: &'static str,
        /// The reference number that was looked up.
        reference: u64,
    },

    /// No definition is indexed under the given key.
    #[error("no {kind} definition indexed under the given key")]
    KeyNotFound {
        /// Diagnostic name of the definition kind.
        kind: &'static str,
    },

    /// The category's reference-number space is exhausted.
    #[error(transparent)]
    Allocator(#[from] reference::AllocatorError),
}

/// Result alias for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

//! Error types for the driftboard-model crate.
//!
//! This module defines the error types that can occur when working with
//! board model types, including serialization failures, missing entities,
//! and ordering invariant violations surfaced by validation.

use thiserror::Error;

use crate::card::CardId;
use crate::column::ColumnId;

/// Errors that can occur during board model operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failed to serialize a model type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a model type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// A card with the given ID was not found in the snapshot.
    #[error("card not found: {0}")]
    CardNotFound(CardId),

    /// A column with the given ID was not found in the snapshot.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// The `order` values of a group are not a dense `0..n-1` sequence.
    ///
    /// This indicates corrupted input collections; the engine never
    /// produces such a state itself.
    #[error("order values in {scope} are not dense: {detail}")]
    DensityViolation {
        /// Human-readable description of the collection at fault.
        scope: String,
        /// What exactly is wrong with the sequence.
        detail: String,
    },
}

/// A specialized Result type for board model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

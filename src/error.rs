//! Errors for the strict editor operations.
//!
//! The core operations never fail: unknown targets are ignored. Only the
//! opt-in checks report errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// An inserted row's identity is already present in the table.
    #[error("row id {id} is already present in the table")]
    DuplicateRowId { id: String },

    /// The same identity appears twice in one insert batch.
    #[error("row id {id} appears more than once in the insert batch")]
    DuplicateInBatch { id: String },
}

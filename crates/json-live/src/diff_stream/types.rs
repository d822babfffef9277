//! Error type shared by the stream adapters.

use thiserror::Error;

use crate::json_patch::PatchError;

/// A fatal synchronization failure, terminal to the affected stream.
///
/// Generic over `E`, the error type of the underlying channel or value
/// source. There is no retry path: recovery (e.g. resubscribing) belongs to
/// the surrounding system.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyncError<E> {
    /// The underlying channel or value source failed.
    #[error("CHANNEL: {0}")]
    Channel(E),
    /// The diff/patch engine rejected a patch against the current state.
    #[error("PATCH: {0}")]
    Patch(#[from] PatchError),
    /// A patch-only envelope arrived before any initial snapshot; the
    /// producer violated the stream ordering contract.
    #[error("PATCH_WITHOUT_SNAPSHOT")]
    PatchWithoutSnapshot,
}

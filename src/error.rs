//! Error type for the strict list API boundary.

use thiserror::Error;

/// Failures reported by the `*_strict` list operations. The default
/// operations treat the same conditions as silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("position {pos} out of range for list of length {len}")]
    PositionOutOfRange { pos: usize, len: usize },
}

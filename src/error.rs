//! Mount errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MountError {
    /// No element with the requested id exists in the host document.
    ///
    /// This is a static configuration mismatch between the host markup and the
    /// configured target. Callers should abort startup rather than retry.
    #[error("mount target '#{target_id}' not found in host document")]
    MountTargetNotFound { target_id: String },
}

pub type MountResult<T> = Result<T, MountError>;

//! Error taxonomy for the portal services.
//!
//! Every variant is recoverable: each failure path returns the caller to a
//! well-defined prior state and the message is what the user should see.
//! There is no fatal class.

use db::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Unknown username or role mismatch. Deliberately generic so failed
    /// logins cannot be used to enumerate accounts.
    #[error("Invalid username or role")]
    AuthenticationFailure,

    #[error("{0}")]
    Capture(#[from] CaptureError),

    #[error("{0}")]
    Claim(#[from] ClaimRejected),

    #[error("attendance store failure: {0}")]
    Store(#[from] StoreError),
}

/// Categorized failures from the camera capture pipeline. The pipeline itself
/// is a black box; these arrive at the scan intake already classified.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    #[error("Camera access denied. Please allow camera permissions in your browser settings.")]
    PermissionDenied,
    #[error("No camera found on this device.")]
    DeviceNotFound,
    #[error("Camera error. Please check permissions and try again.")]
    Other,
}

/// Reasons a claim is turned away. `AlreadyClaimedToday` keeps rejecting
/// until the next calendar day; the others clear on retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ClaimRejected {
    #[error("Attendance already marked today")]
    AlreadyClaimedToday,
    #[error("Please scan the QR code first")]
    MissingToken,
    #[error("Only members are allowed to mark attendance")]
    NotAMember,
}

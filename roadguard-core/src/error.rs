use thiserror::Error;

/// Failures surfaced by the two-step login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("mobile number must be 9-15 digits with an optional leading +")]
    InvalidPhone,
    #[error("one-time passcode did not match")]
    CodeMismatch,
    #[error("no passcode has been sent yet")]
    NoPendingCode,
}

/// Platform location-provider failures. Every variant is terminal for the
/// triggering action; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("geolocation is not supported on this platform")]
    Unsupported,
    #[error("location permission was denied")]
    Denied,
    #[error("position is currently unavailable")]
    Unavailable,
    #[error("location request timed out")]
    TimedOut,
}

//! Error types for layout and address queries.

use thiserror::Error;

/// Errors returned by the engine.
///
/// Everything here is a per-call verdict about the request; none of these
/// poison the engine instance. Internal invariant violations (equation
/// coverage, table bounds) are debug assertions instead — continuing past
/// one would hand the GPU a corrupt address.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AddrError {
    /// The configuration register carries an encoding this engine does not
    /// know. The device description is unusable; not retryable.
    #[error("unsupported hardware configuration register encoding")]
    UnsupportedConfig,

    /// The parameter combination violates a hardware legality rule.
    /// Recoverable by requesting a different swizzle mode.
    #[error("parameter combination violates a hardware legality rule")]
    InvalidParams,

    /// The request falls outside this fast path; the caller must go through
    /// the full surface-info based path instead.
    #[error("request is not supported by this derived-address path")]
    NotSupported,

    /// A documented gap: the operation has no implementation for this
    /// request shape and callers must not rely on it.
    #[error("operation is not implemented for this request")]
    NotImplemented,
}

/// Convenience alias for engine results.
pub type AddrResult<T> = Result<T, AddrError>;

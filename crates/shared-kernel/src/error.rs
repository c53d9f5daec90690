// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Errors surfaced by domain registries.
///
/// Every variant names the offending domain so a failure in one type's
/// declaration can be traced without a debugger. The enum is `Clone` and
/// `Eq` because a generation failure is cached per type and handed back
/// verbatim to every later caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A lookup asked for a value the domain does not define.
    #[error("no member of `{domain}` has value {value}")]
    NotFound { domain: &'static str, value: i64 },

    /// A declaration produced the same value twice.
    #[error("domain `{domain}` defines value {value} more than once")]
    DuplicateValue { domain: &'static str, value: i64 },

    /// A range declaration cannot terminate or spans nothing.
    #[error("domain `{domain}` has an invalid range: {reason}")]
    InvalidRange {
        domain: &'static str,
        reason: String,
    },

    /// A declaration produced no members at all.
    #[error("domain `{domain}` produced no members")]
    EmptyDomain { domain: &'static str },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

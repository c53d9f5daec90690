#![allow(clippy::multiple_crate_versions)]

//! Typed, lazily cached labeled-value domains.
//!
//! A *domain* is a fixed or rule-generated set of labeled constants (hours,
//! months, sexes, prefectures) declared as a marker type and materialized
//! exactly once, on first access, by a process-wide registry. Members carry
//! a raw value and a display label, compare by value within their own domain
//! only, and cannot be constructed outside the registry.
//!
//! ```
//! use codeset::{Domain, catalog::Hour};
//!
//! let five = Hour::of(5)?;
//! assert_eq!(five.label(), "05");
//! assert_eq!(Hour::values()?.len(), 24);
//! assert!(!Hour::exists(24));
//! # Ok::<(), codeset::DomainError>(())
//! ```
//!
//! Declaring a domain takes a name and a source, either a literal list or
//! an arithmetic range:
//!
//! ```
//! use codeset::{Domain, RangeSpec, Source};
//!
//! struct Quarter;
//!
//! impl Domain for Quarter {
//!     const NAME: &'static str = "quarter";
//!
//!     fn source() -> Source {
//!         Source::Range(RangeSpec::new(1, 1, 4, |i| format!("Q{i}")))
//!     }
//! }
//!
//! assert_eq!(Quarter::of(3)?.label(), "Q3");
//! # Ok::<(), codeset::DomainError>(())
//! ```

pub use codeset_domain::{Domain, DomainRegistry, Member, Members, RangeSpec, Source, catalog, registry};
pub use codeset_shared_kernel::{DomainError, DomainResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

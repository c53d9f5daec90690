// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use member::Member;
pub use registry::{Domain, DomainRegistry, Members, registry};
pub use source::{RangeSpec, Source};

pub mod catalog;
pub mod member;
pub mod registry;
pub mod source;

// crates/domain/src/catalog/mod.rs
//! Sample catalog of concrete domains: the clock-style range domains and the
//! fixed master-data sets. Declarations only; all behavior lives in the
//! registry.

pub mod clock;
pub mod master;

pub use clock::{Hour, Minute, Month};
pub use master::{PageSize, Prefecture, Sex};

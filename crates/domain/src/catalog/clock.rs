// crates/domain/src/catalog/clock.rs
use crate::registry::Domain;
use crate::source::{RangeSpec, Source};

fn two_digit(i: i64) -> String {
    format!("{i:02}")
}

/// Hour of day, values 0..=23, labels "00".."23".
#[derive(Debug, Clone, Copy)]
pub struct Hour;

impl Domain for Hour {
    const NAME: &'static str = "hour";

    fn source() -> Source {
        Source::Range(RangeSpec::new(0, 1, 23, two_digit))
    }
}

/// Minute of hour, values 0..=59, labels "00".."59".
#[derive(Debug, Clone, Copy)]
pub struct Minute;

impl Domain for Minute {
    const NAME: &'static str = "minute";

    fn source() -> Source {
        Source::Range(RangeSpec::new(0, 1, 59, two_digit))
    }
}

/// Month of year, values 1..=12, labels "1月".."12月".
#[derive(Debug, Clone, Copy)]
pub struct Month;

impl Domain for Month {
    const NAME: &'static str = "month";

    fn source() -> Source {
        Source::Range(RangeSpec::new(1, 1, 12, |i| format!("{i}月")))
    }
}

// crates/domain/src/source.rs
use codeset_shared_kernel::{DomainError, DomainResult};

/// How a domain produces its member list.
///
/// A declaration is plain data: either the literal `(value, label)` pairs,
/// or an arithmetic progression with a label formatter. The registry expands
/// it at most once per type.
#[derive(Debug, Clone)]
pub enum Source {
    /// Literal member list, kept in declared order.
    Fixed(Vec<(i64, String)>),
    /// Arithmetic progression, ascending.
    Range(RangeSpec),
}

impl Source {
    /// Literal list from anything iterable, accepting `&str` labels.
    pub fn fixed<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        Self::Fixed(
            entries
                .into_iter()
                .map(|(value, label)| (value, label.into()))
                .collect(),
        )
    }
}

/// Inclusive arithmetic progression `start, start+step, ..., end` with a
/// per-value label formatter.
///
/// `step` must be positive and `start` must not exceed `end`; both
/// misdeclarations are rejected when the owning domain is first built, so a
/// typo in a declaration can never loop forever or quietly yield an empty
/// domain. `format` must be total over the range; a panicking formatter is a
/// bug in the declaration.
#[derive(Debug, Clone, Copy)]
pub struct RangeSpec {
    start: i64,
    step: i64,
    end: i64,
    format: fn(i64) -> String,
}

impl RangeSpec {
    pub const fn new(start: i64, step: i64, end: i64, format: fn(i64) -> String) -> Self {
        Self {
            start,
            step,
            end,
            format,
        }
    }

    pub const fn start(&self) -> i64 {
        self.start
    }

    pub const fn step(&self) -> i64 {
        self.step
    }

    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Expand the progression into `(value, label)` pairs, ascending.
    ///
    /// Pure: fixed fields always produce the same pairs. `domain` is only
    /// used to name the offender in errors.
    pub fn expand(&self, domain: &'static str) -> DomainResult<Vec<(i64, String)>> {
        if self.step <= 0 {
            return Err(DomainError::InvalidRange {
                domain,
                reason: format!("step must be positive, got {}", self.step),
            });
        }
        if self.start > self.end {
            return Err(DomainError::InvalidRange {
                domain,
                reason: format!("start {} exceeds end {}", self.start, self.end),
            });
        }

        let mut entries = Vec::new();
        let mut i = self.start;
        while i <= self.end {
            entries.push((i, (self.format)(i)));
            // Next value past i64::MAX also lies past `end`.
            match i.checked_add(self.step) {
                Some(next) => i = next,
                None => break,
            }
        }
        Ok(entries)
    }
}

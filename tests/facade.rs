// tests/facade.rs
//! Smoke test exercising the public surface end to end through the facade.

use codeset::{Domain, DomainError, RangeSpec, Source, catalog::Sex, registry};

struct Weekday;

impl Domain for Weekday {
    const NAME: &'static str = "weekday";

    fn source() -> Source {
        Source::fixed([
            (1, "月"),
            (2, "火"),
            (3, "水"),
            (4, "木"),
            (5, "金"),
            (6, "土"),
            (7, "日"),
        ])
    }
}

struct HalfHour;

impl Domain for HalfHour {
    const NAME: &'static str = "half_hour";

    fn source() -> Source {
        Source::Range(RangeSpec::new(0, 30, 59, |i| format!("{i:02}")))
    }
}

#[test]
fn declared_domains_resolve_through_the_global_registry() {
    assert_eq!(Weekday::values().expect("weekday builds").len(), 7);
    assert_eq!(Weekday::of(6).expect("exists").label(), "土");
    assert!(!Weekday::exists(8));

    let halves = HalfHour::values().expect("half_hour builds");
    let values: Vec<i64> = halves.iter().map(|m| m.value()).collect();
    assert_eq!(values, [0, 30]);

    // Trait methods and direct registry calls hit the same cache.
    assert!(registry().exists::<Weekday>(1));
}

#[test]
fn catalog_and_errors_are_reachable_from_the_facade() {
    assert_eq!(Sex::of(2).expect("exists").label(), "女性");
    assert_eq!(
        Sex::of(9).expect_err("unknown code"),
        DomainError::NotFound { domain: "sex", value: 9 }
    );
}

#[test]
fn version_is_stamped() {
    assert!(!codeset::VERSION.is_empty());
}

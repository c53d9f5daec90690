// crates/domain/tests/range_lookup.rs
use codeset_domain::Domain;
use codeset_domain::catalog::Hour;
use codeset_shared_kernel::DomainError;

#[test]
fn hour_covers_the_full_day_in_order() {
    let hours = Hour::values().expect("hour builds");
    assert_eq!(hours.len(), 24);
    for (i, member) in hours.iter().enumerate() {
        assert_eq!(member.value(), i as i64);
        assert_eq!(member.label(), format!("{i:02}"));
    }
}

#[test]
fn lookup_returns_the_matching_member() {
    let five = Hour::of(5).expect("5 o'clock exists");
    assert_eq!(five.value(), 5);
    assert_eq!(five.label(), "05");
}

#[test]
fn lookup_misses_with_not_found() {
    assert_eq!(
        Hour::of(24).expect_err("no 24th hour"),
        DomainError::NotFound { domain: "hour", value: 24 }
    );
}

#[test]
fn exists_never_panics() {
    assert!(Hour::exists(0));
    assert!(Hour::exists(23));
    assert!(!Hour::exists(24));
    assert!(!Hour::exists(-1));
}

#[test]
fn members_of_one_domain_compare_by_value() {
    let a = Hour::of(7).expect("exists");
    let b = Hour::of(7).expect("exists");
    let c = Hour::of(8).expect("exists");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a < c);
}

// crates/domain/tests/registry_concurrent.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use codeset_domain::{Domain, DomainRegistry, Source};

static GENERATIONS: AtomicUsize = AtomicUsize::new(0);

struct Raced;

impl Domain for Raced {
    const NAME: &'static str = "raced";

    fn source() -> Source {
        GENERATIONS.fetch_add(1, Ordering::SeqCst);
        Source::fixed([(1, "一"), (2, "二"), (3, "三")])
    }
}

#[test]
fn racing_first_access_generates_exactly_once() {
    const THREADS: usize = 8;

    let registry = Arc::new(DomainRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.values::<Raced>().expect("generation succeeds")
            })
        })
        .collect();

    let lists: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread completes"))
        .collect();

    assert_eq!(GENERATIONS.load(Ordering::SeqCst), 1);
    for list in &lists[1..] {
        // Not just equal: every caller holds the one cached allocation.
        assert!(Arc::ptr_eq(&lists[0], list));
    }
}

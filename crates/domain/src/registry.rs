// crates/domain/src/registry.rs
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, LazyLock, OnceLock};

use parking_lot::Mutex;
use tracing::debug;

use codeset_shared_kernel::{DomainError, DomainResult};

use crate::member::Member;
use crate::source::Source;

/// Cached member list of one domain, cheap to hand out.
pub type Members<D> = Arc<[Member<D>]>;

/// A typed enumeration of labeled constant values.
///
/// Implementors are marker types that declare a stable name and a member
/// source; everything else rides on the process-wide [`DomainRegistry`].
///
/// ```
/// use codeset_domain::{Domain, Source};
///
/// struct Sex;
///
/// impl Domain for Sex {
///     const NAME: &'static str = "sex";
///
///     fn source() -> Source {
///         Source::fixed([(1, "男性"), (2, "女性")])
///     }
/// }
///
/// assert_eq!(Sex::of(1)?.label(), "男性");
/// assert!(!Sex::exists(3));
/// # Ok::<(), codeset_shared_kernel::DomainError>(())
/// ```
pub trait Domain: Sized + 'static {
    /// Stable name used in error reports and logs.
    const NAME: &'static str;

    /// How the member list is produced. Invoked at most once per type per
    /// registry instance.
    fn source() -> Source;

    /// All members, in generation order, from the process-wide registry.
    fn values() -> DomainResult<Members<Self>> {
        registry().values::<Self>()
    }

    /// The unique member with the given value.
    fn of(value: i64) -> DomainResult<Member<Self>> {
        registry().of::<Self>(value)
    }

    /// Whether [`Domain::of`] would succeed. Never panics.
    fn exists(value: i64) -> bool {
        registry().exists::<Self>(value)
    }
}

type Cell<D> = OnceLock<DomainResult<Members<D>>>;

/// Lazily built, per-type member caches behind one explicit object.
///
/// Each domain type owns a `TypeId`-keyed cell; the cell is a [`OnceLock`],
/// so concurrent first accesses race to a single [`Domain::source`] call and
/// every caller sees the same finished list (or the same error; failures
/// are cached too, since a static declaration cannot get better on retry).
/// The map lock is held only to fetch the cell, never across a build, so
/// one domain's generation cannot stall another's lookup.
///
/// The process-wide instance behind [`registry`] is what the [`Domain`]
/// convenience methods use; fresh instances are mainly useful in tests.
#[derive(Default)]
pub struct DomainRegistry {
    cells: Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl DomainRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full cached member list of `D`, built on first access.
    pub fn values<D: Domain>(&self) -> DomainResult<Members<D>> {
        self.cell::<D>().get_or_init(build::<D>).clone()
    }

    /// The unique member of `D` whose value equals `value`.
    ///
    /// Goes through [`DomainRegistry::values`], so the first lookup also
    /// populates the cache.
    pub fn of<D: Domain>(&self, value: i64) -> DomainResult<Member<D>> {
        self.values::<D>()?
            .iter()
            .find(|member| member.value() == value)
            .cloned()
            .ok_or(DomainError::NotFound {
                domain: D::NAME,
                value,
            })
    }

    /// Whether `D` defines `value`. A domain whose generation failed
    /// defines nothing.
    pub fn exists<D: Domain>(&self, value: i64) -> bool {
        self.of::<D>(value).is_ok()
    }

    fn cell<D: Domain>(&self) -> Arc<Cell<D>> {
        let cell = self
            .cells
            .lock()
            .entry(TypeId::of::<D>())
            .or_insert_with(|| Arc::new(Cell::<D>::new()) as Arc<dyn Any + Send + Sync>)
            .clone();
        // Infallible: the map is keyed by the cell's own domain type.
        cell.downcast::<Cell<D>>()
            .expect("registry cell keyed by TypeId of its domain")
    }
}

impl fmt::Debug for DomainRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainRegistry")
            .field("domains", &self.cells.lock().len())
            .finish()
    }
}

fn build<D: Domain>() -> DomainResult<Members<D>> {
    let entries = match D::source() {
        Source::Fixed(entries) => entries,
        Source::Range(spec) => spec.expand(D::NAME)?,
    };
    if entries.is_empty() {
        return Err(DomainError::EmptyDomain { domain: D::NAME });
    }

    let mut seen = HashSet::with_capacity(entries.len());
    let mut members = Vec::with_capacity(entries.len());
    for (value, label) in entries {
        if !seen.insert(value) {
            return Err(DomainError::DuplicateValue {
                domain: D::NAME,
                value,
            });
        }
        members.push(Member::new(value, label));
    }
    debug!(domain = D::NAME, members = members.len(), "built domain member list");
    Ok(members.into())
}

static GLOBAL: LazyLock<DomainRegistry> = LazyLock::new(DomainRegistry::new);

/// The process-wide registry used by the [`Domain`] convenience methods.
pub fn registry() -> &'static DomainRegistry {
    &GLOBAL
}

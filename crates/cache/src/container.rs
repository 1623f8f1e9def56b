//! Generic cached-resource container.
//!
//! A [`CachedResourceContainer`] memoizes construction of one kind of
//! resource by key and tracks which entries were used in the current
//! evaluation. The manager sweeps every container between evaluations: an
//! entry that was not looked up since the previous sweep is dropped, and the
//! survivors have their needed flag cleared so the next evaluation starts
//! from a clean slate. See [`crate::manager::StaticCacheManager`] for the
//! orchestration protocol.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::Result;

/// Trait for cache keys.
pub trait CacheKey: Hash + Eq + Clone {}

// Implement CacheKey for common types
impl<T: Hash + Eq + Clone> CacheKey for T {}

/// Lookup and reclamation counters for one container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerStats {
    /// Lookups that found an existing entry.
    pub hits: u64,
    /// Lookups that invoked the constructor.
    pub misses: u64,
    /// Entries dropped by sweeps because they were not needed.
    pub evictions: u64,
}

/// A cached resource alongside its per-evaluation liveness flag.
#[derive(Debug)]
struct Slot<V> {
    resource: Arc<V>,
    needed: bool,
}

/// A keyed collection of cached resources of one kind.
///
/// Lookups go through [`get_or_create`](Self::get_or_create), which marks the
/// entry as needed for the current evaluation. [`sweep`](Self::sweep) drops
/// every entry whose flag was never set and clears the flag on the rest.
///
/// Returned handles are `Arc` clones. A handle stays valid for the caller as
/// long as it is held, but callers must not retain handles across evaluation
/// boundaries: once a sweep drops an entry the resource is gone from the
/// cache and a retained handle would keep a stale copy alive.
#[derive(Debug)]
pub struct CachedResourceContainer<K, V> {
    /// Conventional kind name, used in logs.
    label: &'static str,
    entries: HashMap<K, Slot<V>>,
    stats: ContainerStats,
}

impl<K: CacheKey, V> CachedResourceContainer<K, V> {
    /// Create an empty container labelled with its resource kind name.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            entries: HashMap::new(),
            stats: ContainerStats::default(),
        }
    }

    /// Look up the resource for `key`, constructing it on a miss.
    ///
    /// On a hit the entry is marked as needed for the current evaluation and
    /// the existing handle is returned; `construct` is not invoked. On a
    /// miss `construct` produces the resource, which is inserted with its
    /// needed flag set. If `construct` fails the error propagates to the
    /// caller and the container is left unchanged, so a later lookup on the
    /// same key will attempt construction again.
    pub fn get_or_create<F>(&mut self, key: K, construct: F) -> Result<Arc<V>>
    where
        F: FnOnce() -> Result<V>,
    {
        if let Some(slot) = self.entries.get_mut(&key) {
            slot.needed = true;
            self.stats.hits += 1;
            trace!(container = self.label, "cache hit");
            return Ok(Arc::clone(&slot.resource));
        }

        let resource = Arc::new(construct()?);
        self.stats.misses += 1;
        trace!(container = self.label, "cache miss, constructed resource");
        self.entries.insert(
            key,
            Slot {
                resource: Arc::clone(&resource),
                needed: true,
            },
        );
        Ok(resource)
    }

    /// Drop every entry that was not needed in the previous evaluation, then
    /// clear the needed flag of the survivors.
    ///
    /// Drop order between entries is unspecified. After this returns the
    /// container holds exactly the entries that were looked up since the
    /// previous sweep, all unmarked.
    pub fn sweep(&mut self) {
        let before = self.entries.len();
        self.entries.retain(|_, slot| slot.needed);
        let evicted = before - self.entries.len();
        self.stats.evictions += evicted as u64;

        for slot in self.entries.values_mut() {
            slot.needed = false;
        }

        if evicted > 0 {
            debug!(
                container = self.label,
                evicted,
                retained = self.entries.len(),
                "swept unused cached resources"
            );
        }
    }

    /// Whether the entry at `key` is marked needed, or `None` if absent.
    #[must_use]
    pub fn is_needed(&self, key: &K) -> Option<bool> {
        self.entries.get(key).map(|slot| slot.needed)
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookup and reclamation counters since the container was created.
    #[must_use]
    pub fn stats(&self) -> ContainerStats {
        self.stats
    }
}

/// Stamp out a per-kind container newtype around [`CachedResourceContainer`].
///
/// Generates the struct, a `Default` impl wiring in the kind label, and the
/// delegation methods shared by every kind. The typed `get` convenience
/// method differs per kind and is written by hand next to the invocation.
macro_rules! cached_resource_container {
    ($(#[$meta:meta])* $container:ident, $key:ty, $resource:ty, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $container {
            cache: $crate::container::CachedResourceContainer<$key, $resource>,
        }

        impl Default for $container {
            fn default() -> Self {
                Self {
                    cache: $crate::container::CachedResourceContainer::new($label),
                }
            }
        }

        impl $container {
            /// Reclaim entries unused in the previous evaluation.
            pub(crate) fn sweep(&mut self) {
                self.cache.sweep();
            }

            /// Number of cached entries.
            #[must_use]
            pub fn len(&self) -> usize {
                self.cache.len()
            }

            /// Whether the container holds no entries.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.cache.is_empty()
            }

            /// Lookup and reclamation counters.
            #[must_use]
            pub fn stats(&self) -> $crate::container::ContainerStats {
                self.cache.stats()
            }
        }
    };
}

pub(crate) use cached_resource_container;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Payload that records when it is dropped.
    struct Tracked {
        value: u32,
        drops: Rc<Cell<u32>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn tracked(value: u32, drops: &Rc<Cell<u32>>) -> Tracked {
        Tracked {
            value,
            drops: Rc::clone(drops),
        }
    }

    #[test]
    fn hit_returns_same_instance_without_invoking_constructor() {
        let drops = Rc::new(Cell::new(0));
        let mut container = CachedResourceContainer::new("test");

        let first = container.get_or_create(5u32, || Ok(tracked(1, &drops))).unwrap();
        let second = container
            .get_or_create(5u32, || -> Result<Tracked> {
                panic!("constructor must not run on a hit")
            })
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.value, 1);
        assert_eq!(container.stats().hits, 1);
        assert_eq!(container.stats().misses, 1);
    }

    #[test]
    fn lookup_marks_entry_needed() {
        let drops = Rc::new(Cell::new(0));
        let mut container = CachedResourceContainer::new("test");

        container.get_or_create(5u32, || Ok(tracked(1, &drops))).unwrap();
        assert_eq!(container.is_needed(&5), Some(true));

        container.sweep();
        assert_eq!(container.is_needed(&5), Some(false));

        container.get_or_create(5u32, || Ok(tracked(2, &drops))).unwrap();
        assert_eq!(container.is_needed(&5), Some(true));
    }

    #[test]
    fn sweep_drops_unneeded_entries_and_clears_flags() {
        let drops = Rc::new(Cell::new(0));
        let mut container = CachedResourceContainer::new("test");

        container.get_or_create(1u32, || Ok(tracked(1, &drops))).unwrap();
        container.get_or_create(2u32, || Ok(tracked(2, &drops))).unwrap();

        // First sweep: both entries were needed, both survive unmarked.
        container.sweep();
        assert_eq!(container.len(), 2);
        assert_eq!(drops.get(), 0);

        // Touch only key 1, then sweep again: key 2 is reclaimed.
        container.get_or_create(1u32, || Ok(tracked(1, &drops))).unwrap();
        container.sweep();
        assert_eq!(container.len(), 1);
        assert_eq!(container.is_needed(&1), Some(false));
        assert_eq!(container.is_needed(&2), None);
        assert_eq!(drops.get(), 1);
        assert_eq!(container.stats().evictions, 1);
    }

    #[test]
    fn failed_construction_inserts_nothing() {
        let drops = Rc::new(Cell::new(0));
        let mut container = CachedResourceContainer::new("test");

        let result = container.get_or_create(7u32, || -> Result<Tracked> {
            Err(CacheError::construction("test", "deliberate failure"))
        });
        assert!(result.is_err());
        assert!(container.is_empty());
        assert_eq!(container.stats().misses, 0);

        // The same key constructs normally afterwards.
        let resource = container.get_or_create(7u32, || Ok(tracked(9, &drops))).unwrap();
        assert_eq!(resource.value, 9);
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn swept_resource_is_dropped_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        let mut container = CachedResourceContainer::new("test");

        container.get_or_create(1u32, || Ok(tracked(1, &drops))).unwrap();
        container.sweep(); // survives, flag cleared
        container.sweep(); // unneeded, dropped
        assert_eq!(drops.get(), 1);

        container.sweep();
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn handle_outlives_sweep_until_released() {
        let drops = Rc::new(Cell::new(0));
        let mut container = CachedResourceContainer::new("test");

        let handle = container.get_or_create(1u32, || Ok(tracked(1, &drops))).unwrap();
        container.sweep();
        container.sweep();

        // The container dropped its entry but the caller's handle keeps the
        // payload alive until it is released.
        assert_eq!(drops.get(), 0);
        drop(handle);
        assert_eq!(drops.get(), 1);
    }
}

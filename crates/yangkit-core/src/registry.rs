//! Process-wide single-instance construction.
//!
//! Some toolkit components must exist at most once per process (for
//! example, the empty schema pattern, or a schema-context registry).
//! Instead of hiding that behind construction magic, this module exposes
//! an explicit registry keyed by type identity: the first
//! [`instance_of`] call for a type constructs and caches the instance,
//! and every later call returns the cached one, regardless of the
//! factory it passes.
//!
//! Entries live for the lifetime of the process; there is no teardown.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

static INSTANCES: LazyLock<Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns the process-wide instance of `T`, constructing it with
/// `factory` on the first call.
///
/// First call wins: concurrent callers racing on the first construction
/// are serialized, and exactly one factory runs. Later calls ignore their
/// factory entirely.
///
/// The factory runs while the registry lock is held, so it must not call
/// back into the registry.
///
/// ```
/// use yangkit_core::registry::instance_of;
///
/// #[derive(Debug)]
/// struct Counter(u32);
///
/// let first = instance_of(|| Counter(1));
/// let second = instance_of(|| Counter(2));
/// assert_eq!(second.0, 1);
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
pub fn instance_of<T, F>(factory: F) -> Arc<T>
where
    T: Any + Send + Sync,
    F: FnOnce() -> T,
{
    let mut instances = INSTANCES.lock().unwrap_or_else(PoisonError::into_inner);
    let entry = instances
        .entry(TypeId::of::<T>())
        .or_insert_with(|| Arc::new(factory()));
    match Arc::clone(entry).downcast::<T>() {
        Ok(instance) => instance,
        // The entry was inserted under TypeId::of::<T>.
        Err(_) => unreachable!("registry entry has a mismatched type"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own types: the registry is shared process-wide,
    // so reusing a type across tests would leak state between them.

    #[test]
    fn first_construction_wins() {
        struct Alpha(&'static str);

        let a1 = instance_of(|| Alpha("first"));
        let a2 = instance_of(|| Alpha("second"));
        assert_eq!(a2.0, "first");
        assert!(Arc::ptr_eq(&a1, &a2));
    }

    #[test]
    fn distinct_types_get_distinct_instances() {
        struct Left(&'static str);
        struct Right(&'static str);

        let left = instance_of(|| Left("left"));
        let right = instance_of(|| Right("right"));
        assert_eq!(left.0, "left");
        assert_eq!(right.0, "right");
    }

    #[test]
    fn concurrent_first_construction_is_serialized() {
        struct Gamma(u64);

        let handles: Vec<_> = (0..8)
            .map(|i| std::thread::spawn(move || instance_of(|| Gamma(i))))
            .collect();
        let instances: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();
        for pair in instances.windows(2) {
            assert!(Arc::ptr_eq(&pair[0], &pair[1]));
        }
    }
}

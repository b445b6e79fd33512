use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rf_utils::TypeIdMap;

use crate::info::TypeDescriptor;
use crate::registry::{Schema, SchemaBuilder};

type ErasedDescriptor = Arc<dyn Any + Send + Sync>;

/// One registered type. The cell is filled by the first caller to reach it;
/// concurrent callers for the same type block until it is filled.
struct Slot {
    type_name: &'static str,
    descriptor: OnceLock<ErasedDescriptor>,
}

/// Maps each schema type to its [`TypeDescriptor`].
///
/// Descriptors are built lazily, exactly once per registry, and shared as
/// `Arc`s. Callers on different threads always receive the same descriptor.
///
/// The process-wide instance is [`SchemaRegistry::global`], which is what
/// [`Schema::descriptor`] and all encode/decode paths use.
pub struct SchemaRegistry {
    slots: RwLock<TypeIdMap<Arc<Slot>>>,
}

impl Default for SchemaRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: RwLock::new(TypeIdMap::new()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Self {
        static GLOBAL: SchemaRegistry = SchemaRegistry::new();
        &GLOBAL
    }

    #[inline]
    fn read(&self) -> RwLockReadGuard<'_, TypeIdMap<Arc<Slot>>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn write(&self) -> RwLockWriteGuard<'_, TypeIdMap<Arc<Slot>>> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the descriptor of `T`, running [`Schema::register`] if this
    /// registry has not built it yet.
    pub fn get_or_build<T: Schema>(&self) -> Arc<TypeDescriptor<T>> {
        let slot = self.slot::<T>();
        let erased = slot.descriptor.get_or_init(|| {
            let descriptor = SchemaBuilder::<T>::build();
            log::debug!(
                "registered schema `{}` with {} field(s)",
                descriptor.type_name(),
                descriptor.len()
            );
            Arc::new(descriptor) as ErasedDescriptor
        });
        downcast::<T>(slot.type_name, erased)
    }

    fn slot<T: Schema>(&self) -> Arc<Slot> {
        if let Some(slot) = self.read().get_type::<T>() {
            return Arc::clone(slot);
        }

        let mut slots = self.write();
        let slot = slots.get_or_insert(TypeId::of::<T>(), || {
            Arc::new(Slot {
                type_name: T::type_name(),
                descriptor: OnceLock::new(),
            })
        });
        Arc::clone(slot)
    }

    /// Returns the descriptor of `T` if it has been built.
    pub fn get<T: Schema>(&self) -> Option<Arc<TypeDescriptor<T>>> {
        let slots = self.read();
        let slot = slots.get_type::<T>()?;
        let erased = slot.descriptor.get()?;
        Some(downcast::<T>(slot.type_name, erased))
    }

    /// Returns `true` if the descriptor of `T` has been built.
    #[inline]
    pub fn contains<T: Schema>(&self) -> bool {
        self.contains_id(TypeId::of::<T>())
    }

    /// Returns `true` if a descriptor for `type_id` has been built.
    pub fn contains_id(&self, type_id: TypeId) -> bool {
        self.read()
            .get(&type_id)
            .is_some_and(|slot| slot.descriptor.get().is_some())
    }

    /// Number of built descriptors.
    pub fn len(&self) -> usize {
        self.read()
            .values()
            .filter(|slot| slot.descriptor.get().is_some())
            .count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the built descriptors, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .read()
            .values()
            .filter(|slot| slot.descriptor.get().is_some())
            .map(|slot| slot.type_name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Drop every registered descriptor.
    ///
    /// Descriptors still held elsewhere stay valid; the next lookup of a
    /// type builds a new one.
    pub fn clear(&self) {
        let mut slots = self.write();
        log::debug!("clearing {} schema slot(s)", slots.len());
        slots.clear();
    }

    /// Build the descriptors of every type derived with
    /// `#[schema(auto_register)]`.
    ///
    /// Returns the number of registration entries visited; always zero
    /// without the `auto_register` feature.
    pub fn auto_register(&self) -> usize {
        #[cfg(feature = "auto_register")]
        {
            let mut count = 0_usize;
            for entry in inventory::iter::<crate::__macro_exports::auto_register::AutoRegister> {
                (entry.0)(self);
                count += 1;
            }
            log::debug!("auto-registered {count} schema type(s)");
            count
        }

        #[cfg(not(feature = "auto_register"))]
        {
            0
        }
    }
}

fn downcast<T: Schema>(type_name: &'static str, erased: &ErasedDescriptor) -> Arc<TypeDescriptor<T>> {
    match Arc::clone(erased).downcast::<TypeDescriptor<T>>() {
        Ok(descriptor) => descriptor,
        Err(_) => unreachable!("registry slot of `{type_name}` holds a foreign descriptor"),
    }
}

impl core::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use core::any::TypeId;
    use core::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;

    use super::SchemaRegistry;
    use crate::accessor;
    use crate::registry::{Schema, SchemaBuilder};

    static COUNTED_BUILDS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Default)]
    struct Counted {
        value: i32,
    }

    impl Schema for Counted {
        fn register(builder: &mut SchemaBuilder<Self>) {
            COUNTED_BUILDS.fetch_add(1, Ordering::SeqCst);
            builder.field("value", accessor!(Self, value));
        }

        fn type_name() -> &'static str {
            "Counted"
        }
    }

    #[derive(Default)]
    struct Other {
        flag: bool,
    }

    impl Schema for Other {
        fn register(builder: &mut SchemaBuilder<Self>) {
            builder.field("flag", accessor!(Self, flag));
        }

        fn type_name() -> &'static str {
            "Other"
        }
    }

    #[test]
    fn lazy_build() {
        let registry = SchemaRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get::<Other>().is_none());
        assert!(!registry.contains::<Other>());

        let first = registry.get_or_build::<Other>();
        let second = registry.get_or_build::<Other>();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &registry.get::<Other>().unwrap()));
        assert!(registry.contains_id(TypeId::of::<Other>()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.type_names(), ["Other"]);
        assert_eq!(first.field_names().collect::<Vec<_>>(), ["flag"]);
    }

    #[test]
    fn concurrent_first_use_builds_once() {
        const THREADS: usize = 8;

        let registry = SchemaRegistry::new();
        let barrier = Barrier::new(THREADS);
        let before = COUNTED_BUILDS.load(Ordering::SeqCst);

        let descriptors: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        registry.get_or_build::<Counted>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(COUNTED_BUILDS.load(Ordering::SeqCst) - before, 1);
        for descriptor in &descriptors[1..] {
            assert!(Arc::ptr_eq(&descriptors[0], descriptor));
        }
    }

    #[test]
    fn clear_keeps_outstanding_descriptors() {
        let registry = SchemaRegistry::new();
        let held = registry.get_or_build::<Other>();
        assert_eq!(registry.type_names(), ["Other"]);

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(held.len(), 1);
        assert!(held.field("flag").is_some());

        let rebuilt = registry.get_or_build::<Other>();
        assert!(!Arc::ptr_eq(&held, &rebuilt));
    }
}

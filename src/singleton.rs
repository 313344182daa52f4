// Singleton Pattern - guarded lazy initialization
// The slot is private; callers only ever see the accessor.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use tracing::info;

/// A value built on first access, at most once, even when first accesses race.
///
/// Usable in a `static`: `static SLOT: LazySlot<T> = LazySlot::new(build);`
pub struct LazySlot<T> {
    cell: OnceLock<T>,
    init: fn() -> T,
}

impl<T> LazySlot<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    /// Racing first callers block until the single construction finishes.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(self.init)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);
static INSTANCE: LazySlot<Singleton> = LazySlot::new(Singleton::create);

#[derive(Debug)]
pub struct Singleton {
    serial: usize,
}

impl Singleton {
    fn create() -> Self {
        let serial = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        info!(serial, "Singleton instance created.");
        Singleton { serial }
    }

    pub fn instance() -> &'static Singleton {
        INSTANCE.get()
    }

    /// How many times the constructor has run in this process.
    pub fn construction_count() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    pub fn serial(&self) -> usize {
        self.serial
    }
}

// ============================================================================
// Tests
// ============================================================================

use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use tracing::{debug, trace};
use utils::map::Map;

use crate::error::Result;
use crate::field::Field;
use crate::poly_modulus::PolyModulus;
use crate::ring::RingDescriptor;

type Key = (usize, u64);

/// Memo table from (m, q) to the remainder structure of Phi_m(X) over Z_q.
///
/// Lookups take a shared read guard on the table, so concurrent readers do
/// not block each other and never touch the build mutex. A miss serializes
/// on the build mutex, checks again, builds and publishes. Entries are never
/// evicted; the cache owns them for its own lifetime, which for
/// [ModulusCache::global] is the process lifetime.
pub struct ModulusCache {
    table: RwLock<Map<Key, Arc<PolyModulus>>>,
    build: Mutex<()>,
}

impl ModulusCache {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Map::new()),
            build: Mutex::new(()),
        }
    }

    pub fn global() -> &'static ModulusCache {
        static GLOBAL: OnceLock<ModulusCache> = OnceLock::new();
        GLOBAL.get_or_init(ModulusCache::new)
    }

    /// Looks up (m, q) under the shared read guard.
    pub fn get(&self, m: usize, field: &Field) -> Option<Arc<PolyModulus>> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(m, field.q()))
            .cloned()
    }

    /// Returns the structure for the ring over `field`, building it on
    /// first request.
    pub fn get_or_build<R: RingDescriptor + ?Sized>(
        &self,
        ring: &R,
        field: &Field,
    ) -> Result<Arc<PolyModulus>> {
        if let Some(modulus) = self.get(ring.m(), field) {
            trace!(m = ring.m(), q = field.q(), "modulus cache hit");
            return Ok(modulus);
        }

        let _guard = self.build.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(modulus) = self.get(ring.m(), field) {
            return Ok(modulus);
        }

        debug!(m = ring.m(), phi_m = ring.phi_m(), q = field.q(), "building modulus");
        let modulus: PolyModulus = PolyModulus::new(*field, ring.phi_m_x())?;
        Ok(self.publish(ring.m(), Arc::new(modulus)))
    }

    /// Inserts `modulus` under (m, q) unless an entry is already present.
    /// Returns the entry that ends up in the table; a losing candidate is
    /// dropped.
    pub fn publish(&self, m: usize, modulus: Arc<PolyModulus>) -> Arc<PolyModulus> {
        let key: Key = (m, modulus.field().q());
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = table.get(&key) {
            trace!(m, q = key.1, "discarding concurrently built modulus");
            return existing.clone();
        }
        table.insert(key, modulus.clone());
        modulus
    }

    pub fn len(&self) -> usize {
        self.table.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ModulusCache {
    fn default() -> Self {
        Self::new()
    }
}

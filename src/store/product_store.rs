//! In-memory product collection.
//!
//! Exclusive owner of the authoritative product map, keyed by id. All data is
//! lost when the store is dropped. Thread-safe via RwLock: reads take a
//! snapshot, every per-id mutation happens under a single write-lock
//! acquisition so concurrent writers cannot interleave on the same entry.

use std::collections::BTreeMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::models::Product;

pub struct ProductStore {
    inner: RwLock<BTreeMap<Uuid, Product>>,
}

impl ProductStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    /// Snapshot of every stored product, in id order. Repeated reads over an
    /// unchanged collection see the same sequence.
    pub fn get_all(&self) -> Vec<Product> {
        let map = self.inner.read().unwrap();
        map.values().cloned().collect()
    }

    pub fn get(&self, id: &Uuid) -> Option<Product> {
        let map = self.inner.read().unwrap();
        map.get(id).cloned()
    }

    /// Insert or fully overwrite the entry at `product.id`.
    pub fn put(&self, product: Product) {
        let mut map = self.inner.write().unwrap();
        map.insert(product.id, product);
    }

    /// Delete the entry if present. Absent ids are a no-op.
    pub fn remove(&self, id: &Uuid) {
        let mut map = self.inner.write().unwrap();
        map.remove(id);
    }

    /// Atomically replace the entry at `id` with `f(existing)`, returning the
    /// previous record. Returns `None` (and writes nothing) when absent.
    pub fn replace_with<F>(&self, id: &Uuid, f: F) -> Option<Product>
    where
        F: FnOnce(&Product) -> Product,
    {
        let mut map = self.inner.write().unwrap();
        let previous = map.get(id).cloned()?;
        map.insert(*id, f(&previous));
        Some(previous)
    }

    /// Overwrite only the stock quantity of the entry at `id`, leaving every
    /// other field untouched. Absent ids are a no-op.
    pub fn set_quantity(&self, id: &Uuid, quantity: u32) {
        let mut map = self.inner.write().unwrap();
        if let Some(product) = map.get_mut(id) {
            product.quantity_in_stock = quantity;
        }
    }

    pub fn len(&self) -> usize {
        let map = self.inner.read().unwrap();
        map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

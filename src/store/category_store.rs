//! In-memory category collection with auto-assigned integer ids.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::models::Category;

pub struct CategoryStore {
    inner: RwLock<CategoryStoreInner>,
}

struct CategoryStoreInner {
    next_id: u64,
    categories: BTreeMap<u64, Category>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CategoryStoreInner {
                next_id: 1,
                categories: BTreeMap::new(),
            }),
        }
    }

    pub fn get_all(&self) -> Vec<Category> {
        let inner = self.inner.read().unwrap();
        inner.categories.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<Category> {
        let inner = self.inner.read().unwrap();
        inner.categories.get(&id).cloned()
    }

    /// Assign the next id to `name` and store the category.
    pub fn insert(&self, name: String) -> Category {
        let mut inner = self.inner.write().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;

        let category = Category { id, name };
        inner.categories.insert(id, category.clone());
        category
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap();
        inner.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

//! Product query-and-mutation engine.
//!
//! Every read pulls a snapshot from the store, filters conjunctively, sorts
//! with the selected comparator and slices a page window. Mutations go
//! through the store's atomic per-id operations.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    models::{Product, ProductPayload, ProductQuery},
    store::ProductStore,
};

pub fn list_products(store: &ProductStore, params: &ProductQuery) -> Vec<Product> {
    let mut products = store.get_all();

    products.retain(|product| matches_filters(product, params));

    // Stable sort; equal keys keep their snapshot order across calls.
    products.sort_by(|a, b| params.sort_by.compare(a, b));

    let from = params.page.saturating_mul(params.size).min(products.len());
    let to = from.saturating_add(params.size).min(products.len());

    products[from..to].to_vec()
}

fn matches_filters(product: &Product, params: &ProductQuery) -> bool {
    let name_matches = params.name.as_deref().is_none_or(|name| {
        product
            .name
            .to_lowercase()
            .contains(&name.to_lowercase())
    });

    let category_matches = params
        .category
        .as_deref()
        .is_none_or(|category| product.category.to_lowercase() == category.to_lowercase());

    let stock_matches = params.in_stock.is_none_or(|in_stock| {
        if in_stock {
            product.quantity_in_stock > 0
        } else {
            product.quantity_in_stock == 0
        }
    });

    name_matches && category_matches && stock_matches
}

pub fn create_product(store: &ProductStore, payload: ProductPayload) -> Product {
    let product = Product {
        id: Uuid::new_v4(),
        name: payload.name,
        category: payload.category,
        unit_price: payload.unit_price,
        quantity_in_stock: payload.quantity_in_stock,
        expiration_date: payload.expiration_date,
        creation_date: Utc::now(),
        update_date: None,
    };

    store.put(product.clone());
    product
}

/// Replace the product at `id` wholesale, returning the previous record.
/// `None` means the id is unknown and nothing was written.
pub fn update_product(
    store: &ProductStore,
    id: Uuid,
    payload: ProductPayload,
) -> Option<Product> {
    let now = Utc::now();
    store.replace_with(&id, |existing| merge_update(existing, payload, now))
}

/// Merge rule for updates: the id and creationDate survive from the existing
/// record, updateDate is stamped, every other field comes from the payload.
fn merge_update(existing: &Product, payload: ProductPayload, now: DateTime<Utc>) -> Product {
    Product {
        id: existing.id,
        name: payload.name,
        category: payload.category,
        unit_price: payload.unit_price,
        quantity_in_stock: payload.quantity_in_stock,
        expiration_date: payload.expiration_date,
        creation_date: existing.creation_date,
        update_date: Some(now),
    }
}

/// Zero out the stock of the product at `id`. Quantity-only write: unlike a
/// full update this does not stamp updateDate. Absent ids are a no-op.
pub fn mark_out_of_stock(store: &ProductStore, id: &Uuid) {
    store.set_quantity(id, 0);
}

/// Restock the product at `id` to `restock_quantity`. Quantity-only write,
/// same as [`mark_out_of_stock`]. Absent ids are a no-op.
pub fn mark_in_stock(store: &ProductStore, id: &Uuid, restock_quantity: u32) {
    store.set_quantity(id, restock_quantity);
}

pub fn delete_product(store: &ProductStore, id: &Uuid) {
    store.remove(id);
}

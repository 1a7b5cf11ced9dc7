mod category_store;
mod product_store;

pub use category_store::CategoryStore;
pub use product_store::ProductStore;

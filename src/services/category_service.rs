use crate::{
    models::{Category, CreateCategoryRequest},
    store::CategoryStore,
};

pub fn list_categories(store: &CategoryStore) -> Vec<Category> {
    store.get_all()
}

pub fn create_category(store: &CategoryStore, request: CreateCategoryRequest) -> Category {
    store.insert(request.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_categories_come_back_from_the_listing() {
        let store = CategoryStore::new();

        let dairy = create_category(
            &store,
            CreateCategoryRequest {
                name: "Dairy".to_string(),
            },
        );

        let listed = list_categories(&store);
        assert_eq!(listed, vec![dairy]);
    }
}

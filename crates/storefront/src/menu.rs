//! Menu view over the catalog.

use tabletap_core::{Category, Product};
use tabletap_store::CatalogStore;

/// One displayed menu section: a category and its products.
#[derive(Debug, Clone)]
pub struct MenuSection {
    pub category: Category,
    pub products: Vec<Product>,
}

/// Build the menu: sections in preferred category order, products grouped
/// under them in catalog order.
///
/// Unavailable products are included - they render with a sold-out badge,
/// and the cart is what refuses them. Sections whose category has no
/// products yet are included too, so a freshly added category shows up.
#[must_use]
pub fn menu(catalog: &CatalogStore) -> Vec<MenuSection> {
    let products = catalog.products();
    catalog
        .ordered_categories()
        .into_iter()
        .map(|category| {
            let products = products
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect();
            MenuSection { category, products }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tabletap_store::{
        ChangeNotifier, KeyValueStorage, MemoryStorage, SequentialGenerator,
    };

    fn seeded_catalog() -> CatalogStore {
        CatalogStore::new(
            Arc::new(MemoryStorage::new()) as Arc<dyn KeyValueStorage>,
            ChangeNotifier::new(),
            Arc::new(SequentialGenerator::starting_after_seed(23)),
        )
    }

    #[test]
    fn test_sections_follow_preferred_order() {
        let catalog = seeded_catalog();
        let sections = menu(&catalog);

        let names: Vec<&str> = sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, ["Starters", "Main Courses", "Desserts", "Beverages"]);
    }

    #[test]
    fn test_every_product_lands_in_its_section() {
        let catalog = seeded_catalog();
        let sections = menu(&catalog);

        let grouped: usize = sections.iter().map(|s| s.products.len()).sum();
        assert_eq!(grouped, catalog.products().len());

        for section in &sections {
            assert!(section.products.iter().all(|p| p.category == section.category));
        }
    }

    #[test]
    fn test_new_empty_category_gets_a_section() {
        let catalog = seeded_catalog();
        catalog.add_category("soups").unwrap();

        let sections = menu(&catalog);
        let soups = sections
            .iter()
            .find(|s| s.category.as_str() == "Soups")
            .unwrap();
        assert!(soups.products.is_empty());
    }
}

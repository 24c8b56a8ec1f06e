//! Catalog management.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use tabletap_core::{Category, Price, Product, ProductId, ProductKind};
use tabletap_store::{CatalogStore, CategoryError, NewProduct, ProductPatch};

use crate::session::AdminSession;

/// Raw add-product form input, validated before it reaches the store.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    /// Raw price text as typed.
    pub price: String,
    pub image: Option<String>,
    pub category: String,
    pub kind: ProductKind,
}

/// Form validation failures, surfaced as inline messages in the UI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductFormError {
    #[error("product name is required")]
    MissingName,
    #[error("category is required")]
    MissingCategory,
    #[error("\"{input}\" is not a valid price")]
    InvalidPrice { input: String },
    #[error("price cannot be negative")]
    NegativePrice,
}

impl ProductForm {
    /// Validate the form into store input.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: missing name, missing category,
    /// unparseable price, or a negative price.
    pub fn validate(self) -> Result<NewProduct, ProductFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductFormError::MissingName);
        }
        let category =
            Category::normalized(&self.category).ok_or(ProductFormError::MissingCategory)?;

        let amount = Decimal::from_str(self.price.trim()).map_err(|_| {
            ProductFormError::InvalidPrice {
                input: self.price.trim().to_owned(),
            }
        })?;
        let price = Price::new(amount);
        if price.is_negative() {
            return Err(ProductFormError::NegativePrice);
        }

        Ok(NewProduct {
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
            price,
            image: self.image.filter(|i| !i.trim().is_empty()),
            category,
            kind: self.kind,
        })
    }
}

/// Capability-gated catalog operations.
///
/// Reads go straight to the [`CatalogStore`]; this wrapper exists so every
/// mutation demands an [`AdminSession`].
pub struct CatalogAdmin {
    catalog: Arc<CatalogStore>,
}

impl CatalogAdmin {
    /// Wrap a catalog store.
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Validate the form and create the product.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductFormError`] when validation fails.
    pub fn add_product(
        &self,
        _session: &AdminSession,
        form: ProductForm,
    ) -> Result<Product, ProductFormError> {
        let new = form.validate()?;
        Ok(self.catalog.add_product(new))
    }

    /// Patch a product. Returns false if the id is not present.
    pub fn update_product(
        &self,
        _session: &AdminSession,
        id: &ProductId,
        patch: ProductPatch,
    ) -> bool {
        self.catalog.update_product(id, patch)
    }

    /// Delete a product. Returns false if the id is not present.
    pub fn delete_product(&self, _session: &AdminSession, id: &ProductId) -> bool {
        self.catalog.delete_product(id)
    }

    /// Flip a product's availability. Returns false if the id is not present.
    pub fn toggle_availability(&self, _session: &AdminSession, id: &ProductId) -> bool {
        self.catalog.toggle_availability(id)
    }

    /// Add a category.
    ///
    /// # Errors
    ///
    /// Propagates [`CategoryError`] from the store so the UI can show the
    /// duplicate's canonical name.
    pub fn add_category(
        &self,
        _session: &AdminSession,
        name: &str,
    ) -> Result<Category, CategoryError> {
        self.catalog.add_category(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tabletap_store::{
        ChangeNotifier, KeyValueStorage, MemoryStorage, SequentialGenerator,
    };

    fn admin() -> (CatalogAdmin, Arc<CatalogStore>, AdminSession) {
        let catalog = Arc::new(CatalogStore::new(
            Arc::new(MemoryStorage::new()) as Arc<dyn KeyValueStorage>,
            ChangeNotifier::new(),
            Arc::new(SequentialGenerator::starting_after_seed(23)),
        ));
        let guard = crate::session::SessionGuard::new(
            Arc::new(MemoryStorage::new()) as Arc<dyn KeyValueStorage>,
            ChangeNotifier::new(),
        );
        let session = guard.login();
        (CatalogAdmin::new(Arc::clone(&catalog)), catalog, session)
    }

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Tomato Soup".to_owned(),
            description: "Slow-roasted tomatoes with cream".to_owned(),
            price: "110".to_owned(),
            image: None,
            category: "soups".to_owned(),
            kind: ProductKind::Veg,
        }
    }

    #[test]
    fn test_valid_form_creates_product() {
        let (admin, catalog, session) = admin();

        let product = admin.add_product(&session, valid_form()).unwrap();
        assert_eq!(product.name, "Tomato Soup");
        assert_eq!(product.category, Category::from("Soups"));
        assert!(product.available);
        assert!(catalog.find(&product.id).is_some());
    }

    #[test]
    fn test_form_rejects_blank_name() {
        let (admin, _, session) = admin();
        let form = ProductForm {
            name: "  ".to_owned(),
            ..valid_form()
        };
        assert_eq!(
            admin.add_product(&session, form),
            Err(ProductFormError::MissingName)
        );
    }

    #[test]
    fn test_form_rejects_bad_price() {
        let (admin, _, session) = admin();

        let form = ProductForm {
            price: "eleven".to_owned(),
            ..valid_form()
        };
        assert!(matches!(
            admin.add_product(&session, form),
            Err(ProductFormError::InvalidPrice { .. })
        ));

        let form = ProductForm {
            price: "-5".to_owned(),
            ..valid_form()
        };
        assert_eq!(
            admin.add_product(&session, form),
            Err(ProductFormError::NegativePrice)
        );
    }

    #[test]
    fn test_mutations_pass_through_to_the_store() {
        let (admin, catalog, session) = admin();
        let id = ProductId::new("PROD-001");

        assert!(admin.toggle_availability(&session, &id));
        assert!(!catalog.find(&id).unwrap().available);

        assert!(admin.delete_product(&session, &id));
        assert!(catalog.find(&id).is_none());

        assert!(!admin.update_product(&session, &id, ProductPatch::default()));
    }
}

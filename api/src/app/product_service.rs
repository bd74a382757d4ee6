//! Product service
//!
//! Validation, name uniqueness and existence-checked lookup for products.

use std::sync::Arc;

use crate::domain::entities::{Product, ProductDraft, ProductId};
use crate::domain::ports::ProductRepository;
use crate::domain::validation::{length_within, PRODUCT_DESCRIPTION_LEN, PRODUCT_NAME_LEN};
use crate::error::AppError;

/// Service for managing products
pub struct ProductService<PR>
where
    PR: ProductRepository + ?Sized,
{
    products: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository + ?Sized,
{
    pub fn new(products: Arc<PR>) -> Self {
        Self { products }
    }

    /// List products, optionally narrowed to those whose name or description
    /// contains `keyword`
    pub async fn list_all(&self, keyword: Option<&str>) -> Result<Vec<Product>, AppError> {
        match keyword.filter(|k| !k.is_empty()) {
            Some(keyword) => Ok(self.products.search(keyword).await?),
            None => Ok(self.products.find_all().await?),
        }
    }

    /// Name must be 1-10 characters and description 1-50 characters
    pub fn is_valid(&self, name: &str, description: &str) -> bool {
        length_within(name, &PRODUCT_NAME_LEN)
            && length_within(description, &PRODUCT_DESCRIPTION_LEN)
    }

    /// Check no other product already uses this name
    pub async fn check_unique(&self, product: &ProductDraft) -> Result<bool, AppError> {
        let existing = self.products.find_by_name(&product.name).await?;

        Ok(match existing {
            None => true,
            Some(found) => product.id == Some(found.id),
        })
    }

    /// Get a product by id, failing with NotFound when it does not exist
    pub async fn get(&self, id: &ProductId) -> Result<Product, AppError> {
        let count = self.products.count_by_id(id).await?;
        if count.unwrap_or(0) == 0 {
            return Err(AppError::not_found(format!("Product {}", id)));
        }

        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {}", id)))
    }

    /// Persist a product
    pub async fn save(&self, product: &ProductDraft) -> Result<Product, AppError> {
        if let Some(id) = &product.id {
            self.get(id).await?;
        }

        let saved = self.products.save(product).await?;
        tracing::info!(product_id = %saved.id, name = %saved.name, "Saved product");

        Ok(saved)
    }

    /// Delete a product by id, failing with NotFound when it does not exist
    pub async fn delete(&self, id: &ProductId) -> Result<(), AppError> {
        let count = self.products.count_by_id(id).await?;
        if count.unwrap_or(0) == 0 {
            return Err(AppError::not_found(format!("Product {}", id)));
        }

        self.products.delete(id).await?;
        tracing::info!(product_id = %id, "Deleted product");

        Ok(())
    }
}

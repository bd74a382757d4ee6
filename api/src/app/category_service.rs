//! Category service
//!
//! Validation, name uniqueness and existence-checked lookup for categories.

use std::sync::Arc;

use crate::domain::entities::{Category, CategoryDraft, CategoryId};
use crate::domain::ports::CategoryRepository;
use crate::domain::validation::{length_within, CATEGORY_NAME_LEN};
use crate::error::AppError;

/// Service for managing categories
pub struct CategoryService<CR>
where
    CR: CategoryRepository + ?Sized,
{
    categories: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository + ?Sized,
{
    pub fn new(categories: Arc<CR>) -> Self {
        Self { categories }
    }

    /// List categories, optionally narrowed to names containing `keyword`
    pub async fn list_all(&self, keyword: Option<&str>) -> Result<Vec<Category>, AppError> {
        match keyword.filter(|k| !k.is_empty()) {
            Some(keyword) => Ok(self.categories.search(keyword).await?),
            None => Ok(self.categories.find_all().await?),
        }
    }

    /// Check the category name is between 1 and 32 characters
    pub fn is_valid(&self, category: &CategoryDraft) -> bool {
        length_within(&category.name, &CATEGORY_NAME_LEN)
    }

    /// Check no other category already uses this name
    ///
    /// A draft that carries an id does not collide with its own stored record.
    pub async fn check_unique(&self, category: &CategoryDraft) -> Result<bool, AppError> {
        let existing = self.categories.find_by_name(&category.name).await?;

        Ok(match existing {
            None => true,
            Some(found) => category.id == Some(found.id),
        })
    }

    /// Get a category by id, failing with NotFound when it does not exist
    pub async fn get(&self, id: &CategoryId) -> Result<Category, AppError> {
        let count = self.categories.count_by_id(id).await?;
        if count.unwrap_or(0) == 0 {
            return Err(AppError::not_found(format!("Category {}", id)));
        }

        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {}", id)))
    }

    /// Persist a category
    ///
    /// Drafts with an id must refer to an existing category.
    pub async fn save(&self, category: &CategoryDraft) -> Result<Category, AppError> {
        if let Some(id) = &category.id {
            self.get(id).await?;
        }

        let saved = self.categories.save(category).await?;
        tracing::info!(category_id = %saved.id, name = %saved.name, "Saved category");

        Ok(saved)
    }

    /// Delete a category by id, failing with NotFound when it does not exist
    pub async fn delete(&self, id: &CategoryId) -> Result<(), AppError> {
        let count = self.categories.count_by_id(id).await?;
        if count.unwrap_or(0) == 0 {
            return Err(AppError::not_found(format!("Category {}", id)));
        }

        self.categories.delete(id).await?;
        tracing::info!(category_id = %id, "Deleted category");

        Ok(())
    }
}

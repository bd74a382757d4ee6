//! PostgreSQL adapter for CategoryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::map_db_err;
use crate::domain::entities::{Category, CategoryDraft, CategoryId};
use crate::domain::ports::CategoryRepository;
use crate::entity::categories;
use crate::error::DomainError;

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let results = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Category>, DomainError> {
        let results = categories::Entity::find()
            .filter(categories::Column::Name.contains(keyword))
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find()
            .filter(categories::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn count_by_id(&self, id: &CategoryId) -> Result<Option<u64>, DomainError> {
        let count = categories::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(count))
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn save(&self, category: &CategoryDraft) -> Result<Category, DomainError> {
        let result = match category.id {
            Some(id) => {
                categories::ActiveModel {
                    id: Set(id.0),
                    name: Set(category.name.clone()),
                }
                .update(&self.db)
                .await
            }
            None => {
                categories::ActiveModel {
                    name: Set(category.name.clone()),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
            }
        }
        .map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), DomainError> {
        categories::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Category {
            id: CategoryId(model.id),
            name: model.name,
        }
    }
}

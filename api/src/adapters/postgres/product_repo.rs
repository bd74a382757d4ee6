//! PostgreSQL adapter for ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::map_db_err;
use crate::domain::entities::{CategoryId, Product, ProductDraft, ProductId};
use crate::domain::ports::ProductRepository;
use crate::entity::products;
use crate::error::DomainError;

/// PostgreSQL implementation of ProductRepository
pub struct PostgresProductRepository {
    db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .filter(
                Condition::any()
                    .add(products::Column::Name.contains(keyword))
                    .add(products::Column::Description.contains(keyword)),
            )
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find()
            .filter(products::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn count_by_id(&self, id: &ProductId) -> Result<Option<u64>, DomainError> {
        let count = products::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(count))
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn save(&self, product: &ProductDraft) -> Result<Product, DomainError> {
        let mut model = products::ActiveModel {
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            category_id: Set(product.category_id.map(|c| c.0)),
            ..Default::default()
        };

        let result = match product.id {
            Some(id) => {
                model.id = Set(id.0);
                model.update(&self.db).await
            }
            None => model.insert(&self.db).await,
        }
        .map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
        products::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: ProductId(model.id),
            name: model.name,
            description: model.description,
            category_id: model.category_id.map(CategoryId),
        }
    }
}

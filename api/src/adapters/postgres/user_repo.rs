//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::map_db_err;
use crate::domain::entities::{User, UserDraft, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let results = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<User>, DomainError> {
        let results = users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Email.contains(keyword))
                    .add(users::Column::Name.contains(keyword)),
            )
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn count_by_id(&self, id: &UserId) -> Result<Option<u64>, DomainError> {
        let count = users::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(count))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn save(&self, user: &UserDraft) -> Result<User, DomainError> {
        let mut model = users::ActiveModel {
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            ..Default::default()
        };

        let result = match user.id {
            Some(id) => {
                model.id = Set(id.0);
                model.update(&self.db).await
            }
            None => model.insert(&self.db).await,
        }
        .map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        users::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: UserId(model.id),
            email: model.email,
            name: model.name,
        }
    }
}

//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Category, CategoryDraft, CategoryId, Product, ProductDraft, ProductId, User, UserDraft, UserId,
};
use crate::error::DomainError;

/// Repository for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List every category ordered by id
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    /// List categories whose name contains `keyword`
    async fn search(&self, keyword: &str) -> Result<Vec<Category>, DomainError>;

    /// Find a category by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;

    /// Count categories with this id. `None` means the count is unknown.
    async fn count_by_id(&self, id: &CategoryId) -> Result<Option<u64>, DomainError>;

    /// Find a category by ID
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError>;

    /// Insert a new category, or update the existing one when the draft has an id
    async fn save(&self, category: &CategoryDraft) -> Result<Category, DomainError>;

    /// Delete a category by ID
    async fn delete(&self, id: &CategoryId) -> Result<(), DomainError>;
}

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product ordered by id
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// List products whose name or description contains `keyword`
    async fn search(&self, keyword: &str) -> Result<Vec<Product>, DomainError>;

    /// Find a product by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;

    /// Count products with this id. `None` means the count is unknown.
    async fn count_by_id(&self, id: &ProductId) -> Result<Option<u64>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Insert a new product, or update the existing one when the draft has an id
    async fn save(&self, product: &ProductDraft) -> Result<Product, DomainError>;

    /// Delete a product by ID
    async fn delete(&self, id: &ProductId) -> Result<(), DomainError>;
}

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user ordered by id
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// List users whose email or name contains `keyword`
    async fn search(&self, keyword: &str) -> Result<Vec<User>, DomainError>;

    /// Find a user by exact email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Count users with this id. `None` means the count is unknown.
    async fn count_by_id(&self, id: &UserId) -> Result<Option<u64>, DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Insert a new user, or update the existing one when the draft has an id
    async fn save(&self, user: &UserDraft) -> Result<User, DomainError>;

    /// Delete a user by ID
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}

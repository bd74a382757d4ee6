//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and count lookups so tests can verify how the
//! services talk to the store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Category, CategoryDraft, CategoryId, Product, ProductDraft, ProductId, User, UserDraft, UserId,
};
use crate::domain::ports::{CategoryRepository, ProductRepository, UserRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Category Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<CategoryId, Category>>>,
    next_id: AtomicI64,
    unknown_counts: bool,
    count_calls: AtomicUsize,
    find_by_id_calls: AtomicUsize,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a category for testing
    pub fn with_category(self, category: Category) -> Self {
        self.next_id.fetch_max(category.id.0, Ordering::SeqCst);
        self.categories
            .write()
            .unwrap()
            .insert(category.id, category);
        self
    }

    /// Make `count_by_id` report an unknown (null) count
    pub fn with_unknown_counts(mut self) -> Self {
        self.unknown_counts = true;
        self
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    pub fn find_by_id_calls(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> usize {
        self.categories.read().unwrap().len()
    }

    pub fn get(&self, id: CategoryId) -> Option<Category> {
        self.categories.read().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.read().unwrap();
        Ok(categories.values().cloned().collect())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.read().unwrap();
        Ok(categories
            .values()
            .filter(|c| c.name.contains(keyword))
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().unwrap();
        Ok(categories.values().find(|c| c.name == name).cloned())
    }

    async fn count_by_id(&self, id: &CategoryId) -> Result<Option<u64>, DomainError> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        if self.unknown_counts {
            return Ok(None);
        }
        let categories = self.categories.read().unwrap();
        Ok(Some(u64::from(categories.contains_key(id))))
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        let categories = self.categories.read().unwrap();
        Ok(categories.get(id).cloned())
    }

    async fn save(&self, draft: &CategoryDraft) -> Result<Category, DomainError> {
        let mut categories = self.categories.write().unwrap();

        let existing = match draft.id {
            Some(id) if categories.contains_key(&id) => Some(id),
            Some(id) => return Err(DomainError::NotFound(format!("Category {}", id))),
            None => None,
        };

        // Mirrors the unique index on categories.name
        if categories
            .values()
            .any(|c| c.name == draft.name && Some(c.id) != existing)
        {
            return Err(DomainError::AlreadyExists(draft.name.clone()));
        }

        let id = existing
            .unwrap_or_else(|| CategoryId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1));

        let category = Category {
            id,
            name: draft.name.clone(),
        };
        categories.insert(id, category.clone());

        Ok(category)
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), DomainError> {
        self.categories.write().unwrap().remove(id);
        Ok(())
    }
}

// ============================================================================
// In-Memory Product Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
    next_id: AtomicI64,
    unknown_counts: bool,
    count_calls: AtomicUsize,
    find_by_id_calls: AtomicUsize,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        self.next_id.fetch_max(product.id.0, Ordering::SeqCst);
        self.products.write().unwrap().insert(product.id, product);
        self
    }

    /// Make `count_by_id` report an unknown (null) count
    pub fn with_unknown_counts(mut self) -> Self {
        self.unknown_counts = true;
        self
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    pub fn find_by_id_calls(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> usize {
        self.products.read().unwrap().len()
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.products.read().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().unwrap();
        Ok(products.values().cloned().collect())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().unwrap();
        Ok(products
            .values()
            .filter(|p| p.name.contains(keyword) || p.description.contains(keyword))
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().unwrap();
        Ok(products.values().find(|p| p.name == name).cloned())
    }

    async fn count_by_id(&self, id: &ProductId) -> Result<Option<u64>, DomainError> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        if self.unknown_counts {
            return Ok(None);
        }
        let products = self.products.read().unwrap();
        Ok(Some(u64::from(products.contains_key(id))))
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        let products = self.products.read().unwrap();
        Ok(products.get(id).cloned())
    }

    async fn save(&self, draft: &ProductDraft) -> Result<Product, DomainError> {
        let mut products = self.products.write().unwrap();

        let existing = match draft.id {
            Some(id) if products.contains_key(&id) => Some(id),
            Some(id) => return Err(DomainError::NotFound(format!("Product {}", id))),
            None => None,
        };

        if products
            .values()
            .any(|p| p.name == draft.name && Some(p.id) != existing)
        {
            return Err(DomainError::AlreadyExists(draft.name.clone()));
        }

        let id = existing
            .unwrap_or_else(|| ProductId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1));

        let product = Product {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            category_id: draft.category_id,
        };
        products.insert(id, product.clone());

        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
        self.products.write().unwrap().remove(id);
        Ok(())
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    next_id: AtomicI64,
    unknown_counts: bool,
    count_calls: AtomicUsize,
    find_by_id_calls: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.next_id.fetch_max(user.id.0, Ordering::SeqCst);
        self.users.write().unwrap().insert(user.id, user);
        self
    }

    /// Make `count_by_id` report an unknown (null) count
    pub fn with_unknown_counts(mut self) -> Self {
        self.unknown_counts = true;
        self
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    pub fn find_by_id_calls(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> usize {
        self.users.read().unwrap().len()
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.read().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().cloned().collect())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users
            .values()
            .filter(|u| u.email.contains(keyword) || u.name.contains(keyword))
            .cloned()
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn count_by_id(&self, id: &UserId) -> Result<Option<u64>, DomainError> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        if self.unknown_counts {
            return Ok(None);
        }
        let users = self.users.read().unwrap();
        Ok(Some(u64::from(users.contains_key(id))))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        let users = self.users.read().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn save(&self, draft: &UserDraft) -> Result<User, DomainError> {
        let mut users = self.users.write().unwrap();

        let existing = match draft.id {
            Some(id) if users.contains_key(&id) => Some(id),
            Some(id) => return Err(DomainError::NotFound(format!("User {}", id))),
            None => None,
        };

        if users
            .values()
            .any(|u| u.email == draft.email && Some(u.id) != existing)
        {
            return Err(DomainError::AlreadyExists(draft.email.clone()));
        }

        let id = existing
            .unwrap_or_else(|| UserId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1));

        let user = User {
            id,
            email: draft.email.clone(),
            name: draft.name.clone(),
        };
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        self.users.write().unwrap().remove(id);
        Ok(())
    }
}

// ============================================================================
// Failing repository
// ============================================================================

/// Category repository whose every call fails with a database error
pub struct FailingCategoryRepository;

#[async_trait]
impl CategoryRepository for FailingCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn search(&self, _keyword: &str) -> Result<Vec<Category>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Category>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn count_by_id(&self, _id: &CategoryId) -> Result<Option<u64>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: &CategoryId) -> Result<Option<Category>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn save(&self, _category: &CategoryDraft) -> Result<Category, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn delete(&self, _id: &CategoryId) -> Result<(), DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }
}

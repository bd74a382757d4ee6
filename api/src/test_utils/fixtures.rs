//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Category, CategoryId, Product, ProductId, User, UserId};

/// A string of `n` hiragana characters (three bytes each in UTF-8)
pub fn kana(n: usize) -> String {
    "あ".repeat(n)
}

/// Create a test category with default values
pub fn test_category() -> Category {
    test_category_named(1, "カテゴリーA")
}

/// Create a test category with a specific id and name
pub fn test_category_named(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId(id),
        name: name.to_string(),
    }
}

/// Create a test product with default values
pub fn test_product() -> Product {
    test_product_named(1, "商品A")
}

/// Create an uncategorised test product with a specific id and name
pub fn test_product_named(id: i64, name: &str) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        description: format!("{}の説明", name),
        category_id: None,
    }
}

/// Create a test user with default values
pub fn test_user() -> User {
    test_user_with_email(1, "admin@example.com")
}

/// Create a test user with a specific id and email
pub fn test_user_with_email(id: i64, email: &str) -> User {
    User {
        id: UserId(id),
        email: email.to_string(),
        name: "管理者".to_string(),
    }
}

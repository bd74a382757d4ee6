//! HTTP handlers
//!
//! Axum request handlers for the back-office pages.

pub mod categories;
pub mod products;
pub mod users;
pub mod view;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use categories::{
    category_detail, delete_category, edit_category, list_categories, new_category, save_category,
};
pub use products::{
    delete_product, edit_product, list_products, new_product, product_detail, save_product,
};
pub use users::{delete_user, edit_user, list_users, new_user, save_user, user_detail};

/// Every page route. Deletion is a plain GET link from the listing pages.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Categories
        .route("/categories", get(list_categories))
        .route("/categories/new", get(new_category))
        .route("/categories/save", post(save_category))
        .route("/categories/detail/:id", get(category_detail))
        .route("/categories/edit/:id", get(edit_category))
        .route("/categories/delete/:id", get(delete_category))
        // Products
        .route("/products", get(list_products))
        .route("/products/new", get(new_product))
        .route("/products/save", post(save_product))
        .route("/products/detail/:id", get(product_detail))
        .route("/products/edit/:id", get(edit_product))
        .route("/products/delete/:id", get(delete_product))
        // Users
        .route("/users", get(list_users))
        .route("/users/new", get(new_user))
        .route("/users/save", post(save_user))
        .route("/users/detail/:id", get(user_detail))
        .route("/users/edit/:id", get(edit_user))
        .route("/users/delete/:id", get(delete_user))
}

//! Product handlers
//!
//! Back-office pages for the product catalogue. The form and edit pages
//! also list the categories a product can be filed under.

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use super::view::{redirect_with_flash, take_flash, Flash, View};
use crate::domain::entities::{Category, Product, ProductDraft, ProductId};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Query parameters for the listing page
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductListModel {
    #[serde(rename = "listProducts")]
    pub list_products: Vec<Product>,
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductFormModel<P> {
    pub product: P,
    #[serde(rename = "listCategories")]
    pub list_categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct ProductModel {
    pub product: Product,
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    jar: CookieJar,
) -> Result<(CookieJar, View<ProductListModel>), AppError> {
    let products = state
        .product_service
        .list_all(query.keyword.as_deref())
        .await?;
    let (jar, flash) = take_flash(jar);

    let view = View::new(
        "products/products",
        ProductListModel {
            list_products: products,
            keyword: query.keyword,
        },
    )
    .with_flash(flash);

    Ok((jar, view))
}

/// GET /products/new
pub async fn new_product(
    State(state): State<AppState>,
) -> Result<View<ProductFormModel<ProductDraft>>, AppError> {
    let list_categories = state.category_service.list_all(None).await?;

    Ok(View::new(
        "products/product_form",
        ProductFormModel {
            product: ProductDraft::default(),
            list_categories,
        },
    ))
}

/// POST /products/save
///
/// Create or update a product, then return to the listing.
pub async fn save_product(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(draft): Form<ProductDraft>,
) -> Result<Response, AppError> {
    let service = &state.product_service;

    if !service.is_valid(&draft.name, &draft.description) {
        return Err(AppError::BadRequest(
            "Product name must be 1-10 characters and description 1-50 characters".to_string(),
        ));
    }

    if !service.check_unique(&draft).await? {
        return Err(AppError::Domain(DomainError::AlreadyExists(format!(
            "Product with name '{}' already exists",
            draft.name
        ))));
    }

    if let Some(category_id) = &draft.category_id {
        state.category_service.get(category_id).await?;
    }

    service.save(&draft).await?;

    Ok(redirect_with_flash(jar, "/products", Flash::Saved))
}

/// GET /products/detail/:id
pub async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<View<ProductModel>, AppError> {
    let product = state.product_service.get(&ProductId(id)).await?;

    Ok(View::new("products/product_detail", ProductModel { product }))
}

/// GET /products/edit/:id
pub async fn edit_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<View<ProductFormModel<Product>>, AppError> {
    let product = state.product_service.get(&ProductId(id)).await?;
    let list_categories = state.category_service.list_all(None).await?;

    Ok(View::new(
        "products/product_edit",
        ProductFormModel {
            product,
            list_categories,
        },
    ))
}

/// GET /products/delete/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    state.product_service.delete(&ProductId(id)).await?;

    Ok(redirect_with_flash(jar, "/products", Flash::Deleted))
}

//! Category handlers
//!
//! Back-office pages for browsing and editing categories.

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use super::view::{redirect_with_flash, take_flash, Flash, View};
use crate::domain::entities::{Category, CategoryDraft, CategoryId};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Query parameters for the listing page
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListModel {
    #[serde(rename = "listCategories")]
    pub list_categories: Vec<Category>,
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryModel<C> {
    pub category: C,
}

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    jar: CookieJar,
) -> Result<(CookieJar, View<CategoryListModel>), AppError> {
    let categories = state
        .category_service
        .list_all(query.keyword.as_deref())
        .await?;
    let (jar, flash) = take_flash(jar);

    let view = View::new(
        "categories/categories",
        CategoryListModel {
            list_categories: categories,
            keyword: query.keyword,
        },
    )
    .with_flash(flash);

    Ok((jar, view))
}

/// GET /categories/new
pub async fn new_category() -> View<CategoryModel<CategoryDraft>> {
    View::new(
        "categories/category_form",
        CategoryModel {
            category: CategoryDraft::default(),
        },
    )
}

/// POST /categories/save
///
/// Create or update a category, then return to the listing.
pub async fn save_category(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(draft): Form<CategoryDraft>,
) -> Result<Response, AppError> {
    let service = &state.category_service;

    if !service.is_valid(&draft) {
        return Err(AppError::BadRequest(
            "Category name must be between 1 and 32 characters".to_string(),
        ));
    }

    if !service.check_unique(&draft).await? {
        return Err(AppError::Domain(DomainError::AlreadyExists(format!(
            "Category with name '{}' already exists",
            draft.name
        ))));
    }

    service.save(&draft).await?;

    Ok(redirect_with_flash(jar, "/categories", Flash::Saved))
}

/// GET /categories/detail/:id
pub async fn category_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<View<CategoryModel<Category>>, AppError> {
    let category = state.category_service.get(&CategoryId(id)).await?;

    Ok(View::new(
        "categories/category_detail",
        CategoryModel { category },
    ))
}

/// GET /categories/edit/:id
pub async fn edit_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<View<CategoryModel<Category>>, AppError> {
    let category = state.category_service.get(&CategoryId(id)).await?;

    Ok(View::new("categories/category_edit", CategoryModel { category }))
}

/// GET /categories/delete/:id
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    state.category_service.delete(&CategoryId(id)).await?;

    Ok(redirect_with_flash(jar, "/categories", Flash::Deleted))
}

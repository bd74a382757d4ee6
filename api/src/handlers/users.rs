//! User handlers
//!
//! Back-office pages for administrator accounts.

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use super::view::{redirect_with_flash, take_flash, Flash, View};
use crate::domain::entities::{User, UserDraft, UserId};
use crate::error::{AppError, DomainError};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserListModel {
    #[serde(rename = "listUsers")]
    pub list_users: Vec<User>,
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserModel<U> {
    pub user: U,
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    jar: CookieJar,
) -> Result<(CookieJar, View<UserListModel>), AppError> {
    let users = state.user_service.list_all(query.keyword.as_deref()).await?;
    let (jar, flash) = take_flash(jar);

    let view = View::new(
        "users/users",
        UserListModel {
            list_users: users,
            keyword: query.keyword,
        },
    )
    .with_flash(flash);

    Ok((jar, view))
}

/// GET /users/new
pub async fn new_user() -> View<UserModel<UserDraft>> {
    View::new(
        "users/user_form",
        UserModel {
            user: UserDraft::default(),
        },
    )
}

/// POST /users/save
pub async fn save_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(draft): Form<UserDraft>,
) -> Result<Response, AppError> {
    let service = &state.user_service;

    if !service.is_valid(&draft.email, &draft.name) {
        return Err(AppError::BadRequest(
            "Email must be 1-50 characters and name 1-10 characters".to_string(),
        ));
    }

    if !service.check_unique(&draft).await? {
        return Err(AppError::Domain(DomainError::AlreadyExists(format!(
            "User with email '{}' already exists",
            draft.email
        ))));
    }

    service.save(&draft).await?;

    Ok(redirect_with_flash(jar, "/users", Flash::Saved))
}

/// GET /users/detail/:id
pub async fn user_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<View<UserModel<User>>, AppError> {
    let user = state.user_service.get(&UserId(id)).await?;

    Ok(View::new("users/user_detail", UserModel { user }))
}

/// GET /users/edit/:id
pub async fn edit_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<View<UserModel<User>>, AppError> {
    let user = state.user_service.get(&UserId(id)).await?;

    Ok(View::new("users/user_edit", UserModel { user }))
}

/// GET /users/delete/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    state.user_service.delete(&UserId(id)).await?;

    Ok(redirect_with_flash(jar, "/users", Flash::Deleted))
}

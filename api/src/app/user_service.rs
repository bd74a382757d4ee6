//! User service
//!
//! Administrator accounts: validation, email uniqueness and
//! existence-checked lookup.

use std::sync::Arc;

use crate::domain::entities::{User, UserDraft, UserId};
use crate::domain::ports::UserRepository;
use crate::domain::validation::{length_within, USER_EMAIL_LEN, USER_NAME_LEN};
use crate::error::AppError;

/// Service for managing users
pub struct UserService<UR>
where
    UR: UserRepository + ?Sized,
{
    users: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository + ?Sized,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    pub async fn list_all(&self, keyword: Option<&str>) -> Result<Vec<User>, AppError> {
        match keyword.filter(|k| !k.is_empty()) {
            Some(keyword) => Ok(self.users.search(keyword).await?),
            None => Ok(self.users.find_all().await?),
        }
    }

    /// Email must be 1-50 characters and name 1-10 characters
    pub fn is_valid(&self, email: &str, name: &str) -> bool {
        length_within(email, &USER_EMAIL_LEN) && length_within(name, &USER_NAME_LEN)
    }

    /// Check no other user is registered with this email
    pub async fn check_unique(&self, user: &UserDraft) -> Result<bool, AppError> {
        let existing = self.users.find_by_email(&user.email).await?;

        Ok(match existing {
            None => true,
            Some(found) => user.id == Some(found.id),
        })
    }

    /// Get a user by id, failing with NotFound when it does not exist
    pub async fn get(&self, id: &UserId) -> Result<User, AppError> {
        let count = self.users.count_by_id(id).await?;
        if count.unwrap_or(0) == 0 {
            return Err(AppError::not_found(format!("User {}", id)));
        }

        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {}", id)))
    }

    pub async fn save(&self, user: &UserDraft) -> Result<User, AppError> {
        if let Some(id) = &user.id {
            self.get(id).await?;
        }

        let saved = self.users.save(user).await?;
        tracing::info!(user_id = %saved.id, "Saved user");

        Ok(saved)
    }

    pub async fn delete(&self, id: &UserId) -> Result<(), AppError> {
        let count = self.users.count_by_id(id).await?;
        if count.unwrap_or(0) == 0 {
            return Err(AppError::not_found(format!("User {}", id)));
        }

        self.users.delete(id).await?;
        tracing::info!(user_id = %id, "Deleted user");

        Ok(())
    }
}

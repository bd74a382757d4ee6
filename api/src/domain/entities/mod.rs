//! Domain entities
//!
//! Pure domain models for the shop back office.
//! These are separate from the SeaORM entities in the `entity` module.

use serde::{de, Deserialize, Deserializer};

pub mod category;
pub mod product;
pub mod user;

pub use category::{Category, CategoryDraft, CategoryId};
pub use product::{Product, ProductDraft, ProductId};
pub use user::{User, UserDraft, UserId};

/// Read an optional id from a form field, treating a blank value as absent
pub(crate) fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<i64>,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<i64>().map(T::from).map(Some).map_err(de::Error::custom),
    }
}

//! SeaORM entities
//!
//! Table definitions for the PostgreSQL adapters. Domain code uses the
//! types in `domain::entities` instead.

pub mod categories;
pub mod products;
pub mod users;

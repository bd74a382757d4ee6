//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for the shop catalogue and its administrators
//! - `ports`: Trait definitions for persistence
//! - `validation`: Field length rules shared by the services

pub mod entities;
pub mod ports;
pub mod validation;

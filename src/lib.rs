//! Core library exports for the school library administration backend.
//!
//! The crate tracks media items, their categories, sites and types, and the
//! students borrowing them. It exposes the domain types, Diesel models and
//! repositories, admin forms and the service layer used by the admin UI.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "server")]
pub mod settings;

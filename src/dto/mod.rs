//! Flattened read models handed to the admin UI.

pub mod borrowers;
pub mod categories;

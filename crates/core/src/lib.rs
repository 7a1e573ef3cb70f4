//! Domain logic for the trivia service.
//!
//! Pure functions and types with no database or HTTP dependencies, shared by
//! the repository layer (`trivia-db`) and the API server (`trivia-api`).

pub mod error;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod types;

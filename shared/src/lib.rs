//! Shared types and models for the Hoa Cương agricultural traceability dashboard
//!
//! This crate contains the in-memory data model, its mutation surface and the
//! dashboard computations shared between the backend and the browser (via WASM).

pub mod dashboard;
pub mod models;
pub mod seed;
pub mod types;
pub mod validation;
pub mod views;

pub use dashboard::*;
pub use models::*;
pub use types::*;
pub use validation::*;
pub use views::*;

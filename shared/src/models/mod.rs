//! Domain models for the traceability dashboard

mod app_data;
mod area;
mod farmer;
mod purchase;

pub use app_data::*;
pub use area::*;
pub use farmer::*;
pub use purchase::*;

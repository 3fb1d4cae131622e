//! HTTP handlers for the traceability dashboard

pub mod area;
pub mod dashboard;
pub mod farmer;
pub mod health;
pub mod purchase;
pub mod report;

pub use area::*;
pub use dashboard::*;
pub use farmer::*;
pub use health::*;
pub use purchase::*;
pub use report::*;

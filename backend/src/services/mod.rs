//! Business logic services for the traceability dashboard

pub mod area;
pub mod dashboard;
pub mod farmer;
pub mod purchase;
pub mod report;

pub use area::AreaService;
pub use dashboard::DashboardService;
pub use farmer::FarmerService;
pub use purchase::PurchaseService;
pub use report::ReportService;

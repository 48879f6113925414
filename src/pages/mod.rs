//! Pages
//!
//! Top-level page components for each route.

pub mod anomalies;
pub mod dashboard;

pub use anomalies::Anomalies;
pub use dashboard::Dashboard;

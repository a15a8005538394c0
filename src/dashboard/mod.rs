//! Dashboard reads — intermediary profile, commission credits, and monthly
//! portfolio performance, served to the (read-only) analysis pages.

pub mod format;
pub mod model;
pub mod provider;
pub mod routes;

pub use model::{CommissionCredit, Intermediary, PerformanceMetric};
pub use provider::{DataProvider, MockDataProvider};
pub use routes::{DashboardRouteState, dashboard_routes};

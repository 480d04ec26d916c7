//! State Management
//!
//! Global dashboard state, refresh orchestration, and page lifecycle hooks.

pub mod global;
pub mod lifecycle;
pub mod refresh;

pub use global::{provide_dashboard_state, AnalyticsSnapshot, ChartSeries, DashboardState, StatsSummary};
pub use lifecycle::init_lifecycle;
pub use refresh::RefreshScheduler;

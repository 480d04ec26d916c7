//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod ask_ai;
pub mod chart;
pub mod header;
pub mod insights;
pub mod loading;
pub mod stats;
pub mod toast;

pub use ask_ai::AskAiPanel;
pub use chart::{provide_chart_context, ChartsPanel};
pub use header::Header;
pub use insights::InsightsPanel;
pub use stats::StatsRow;
pub use toast::Toast;

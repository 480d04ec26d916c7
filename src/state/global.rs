//! Global Dashboard State
//!
//! One explicit context object, constructed at startup and provided to every
//! component. Holds the last-known analytics payloads, the refresh in-flight
//! guard, and the transient message channel.

use leptos::*;

use crate::insights::Insight;
use crate::theme::ThemeName;

/// How long a transient toast message stays visible
const MESSAGE_DURATION_MS: u32 = 3_000;

/// Engagement or distribution series from the chart-data endpoint
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// A single dataset within a series
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Dataset {
    #[serde(default)]
    pub label: Option<String>,
    pub data: Vec<f64>,
}

impl ChartSeries {
    /// Values of the first (and only) dataset
    pub fn values(&self) -> &[f64] {
        self.datasets.first().map(|d| d.data.as_slice()).unwrap_or(&[])
    }
}

/// Payload of the chart-data endpoint; replaced wholesale each refresh and
/// cached so theme toggles can re-render without a refetch
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AnalyticsSnapshot {
    pub engagement: ChartSeries,
    pub distribution: ChartSeries,
}

/// Payload of the analytics endpoint
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StatsSummary {
    pub engagement_rate: f64,
    pub total_interactions: u64,
    pub best_performing: String,
}

/// Global dashboard state provided to all components
#[derive(Clone)]
pub struct DashboardState {
    /// Last-known chart payload; charts redraw from this on theme changes
    pub snapshot: RwSignal<Option<AnalyticsSnapshot>>,
    /// Current stats summary
    pub stats: RwSignal<Option<StatsSummary>>,
    /// Current insight list
    pub insights: RwSignal<Vec<Insight>>,
    /// Refresh in-flight guard; one cycle at a time, overlapping calls drop
    pub refreshing: RwSignal<bool>,
    /// Network connectivity as reported by online/offline events
    pub online: RwSignal<bool>,
    /// Timestamp (ms) of the last successful refresh
    pub last_updated: RwSignal<Option<i64>>,
    /// Active theme
    pub theme: RwSignal<ThemeName>,
    /// Insight search query
    pub search: RwSignal<String>,
    /// Transient message shown in the toast, auto-dismissed
    pub message: RwSignal<Option<String>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            snapshot: create_rw_signal(None),
            stats: create_rw_signal(None),
            insights: create_rw_signal(Vec::new()),
            refreshing: create_rw_signal(false),
            online: create_rw_signal(true),
            last_updated: create_rw_signal(None),
            theme: create_rw_signal(ThemeName::Dark),
            search: create_rw_signal(String::new()),
            message: create_rw_signal(None),
        }
    }

    /// Show a transient message (auto-clears after timeout)
    pub fn show_message(&self, message: &str) {
        self.message.set(Some(message.to_string()));

        let message_signal = self.message;
        gloo_timers::callback::Timeout::new(MESSAGE_DURATION_MS, move || {
            message_signal.set(None);
        })
        .forget();
    }

    /// Claim the refresh guard. Returns false if a cycle is already in
    /// flight, in which case the caller must drop its request.
    pub fn begin_refresh(&self) -> bool {
        if self.refreshing.get_untracked() {
            return false;
        }
        self.refreshing.set(true);
        true
    }

    /// Release the refresh guard. Called on success and failure paths alike.
    pub fn end_refresh(&self) {
        self.refreshing.set(false);
    }

    /// Whether a refresh cycle currently holds the guard
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.get_untracked()
    }

    /// Present a stats summary. Skips while a refresh cycle is in flight so
    /// an outside write cannot interleave with the cycle's own; the
    /// orchestrator applies its results through [`apply_stats`].
    ///
    /// [`apply_stats`]: DashboardState::apply_stats
    pub fn present_stats(&self, summary: StatsSummary) -> bool {
        if self.is_refreshing() {
            return false;
        }
        self.apply_stats(summary);
        true
    }

    /// Present an insight list, replacing the rendered set wholesale. Same
    /// guard semantics as [`present_stats`](DashboardState::present_stats).
    pub fn present_insights(&self, insights: Vec<Insight>) -> bool {
        if self.is_refreshing() {
            return false;
        }
        self.apply_insights(insights);
        true
    }

    /// Unguarded write path owned by the refresh orchestrator
    pub(crate) fn apply_stats(&self, summary: StatsSummary) {
        self.stats.set(Some(summary));
    }

    /// Unguarded write path owned by the refresh orchestrator
    pub(crate) fn apply_insights(&self, insights: Vec<Insight>) {
        self.insights.set(insights);
    }

    /// Record the completion time of a successful refresh
    pub fn touch_updated(&self) {
        self.last_updated
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the dashboard state to the component tree
pub fn provide_dashboard_state() {
    provide_context(DashboardState::new());
}

/// Fetch the dashboard state from context
pub fn expect_state() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_snapshot() -> AnalyticsSnapshot {
        serde_json::from_str(
            r#"{
                "engagement": {
                    "labels": ["Images", "Videos", "Text"],
                    "datasets": [{ "data": [4500.0, 7200.0, 2100.0] }]
                },
                "distribution": {
                    "labels": ["Images", "Videos", "Text"],
                    "datasets": [{ "data": [45.0, 35.0, 20.0] }]
                }
            }"#,
        )
        .expect("fixture snapshot parses")
    }

    fn fixture_stats() -> StatsSummary {
        serde_json::from_str(
            r#"{
                "engagement_rate": 42.567,
                "total_interactions": 1234567,
                "best_performing": "Videos"
            }"#,
        )
        .expect("fixture stats parse")
    }

    #[test]
    fn test_snapshot_fixture_shape() {
        let snapshot = fixture_snapshot();
        assert_eq!(snapshot.engagement.labels, ["Images", "Videos", "Text"]);
        assert_eq!(snapshot.engagement.values(), [4500.0, 7200.0, 2100.0]);
        assert_eq!(snapshot.distribution.values().len(), 3);
    }

    #[test]
    fn test_series_without_datasets_has_no_values() {
        let series = ChartSeries {
            labels: vec!["a".to_string()],
            datasets: Vec::new(),
        };
        assert!(series.values().is_empty());
    }

    #[test]
    fn test_refresh_guard_blocks_reentry() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        assert!(state.begin_refresh());
        assert!(!state.begin_refresh());
        state.end_refresh();
        assert!(state.begin_refresh());
        state.end_refresh();

        runtime.dispose();
    }

    #[test]
    fn test_presenters_skip_while_refreshing() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        assert!(state.begin_refresh());
        assert!(!state.present_stats(fixture_stats()));
        assert!(!state.present_insights(vec![Insight {
            icon: "fa-heart".to_string(),
            text: "dropped".to_string(),
        }]));
        assert!(state.stats.get_untracked().is_none());
        assert!(state.insights.get_untracked().is_empty());

        state.end_refresh();
        assert!(state.present_stats(fixture_stats()));
        assert_eq!(
            state.stats.get_untracked().unwrap().best_performing,
            "Videos"
        );

        runtime.dispose();
    }

    #[test]
    fn test_fixture_stats_format_as_presented() {
        use crate::format::{format_compact, format_percent};

        let stats = fixture_stats();
        assert_eq!(format_percent(stats.engagement_rate), "42.6%");
        assert_eq!(format_compact(stats.total_interactions), "1.2M");
        assert_eq!(stats.best_performing, "Videos");
    }
}

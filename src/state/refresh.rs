//! Refresh Orchestration
//!
//! One full cycle fetches chart data and the stats summary concurrently,
//! then renders charts and presents stats and insights. Cycles are
//! serialized by the in-flight guard on [`DashboardState`]: a refresh
//! requested while one is running is dropped, not queued. The periodic
//! timer ticks every five minutes and only while the page is visible.

use leptos::{spawn_local, SignalSet};
use std::cell::RefCell;
use std::rc::Rc;

use futures_util::future;

use crate::api;
use crate::error::DashboardError;
use crate::insights::{IllustrativeInsights, InsightSource};
use crate::state::global::{AnalyticsSnapshot, DashboardState, StatsSummary};

/// Periodic refresh interval: 5 minutes
pub const REFRESH_INTERVAL_MS: u32 = 300_000;

/// Initial load. Runs once at startup, outside the refresh guard.
pub async fn initialize(state: DashboardState) {
    match fetch_pair(&state).await {
        Ok((snapshot, stats)) => {
            let insights = IllustrativeInsights::new().synthesize(&stats.best_performing);
            state.snapshot.set(Some(snapshot));
            state.present_stats(stats);
            state.present_insights(insights);
            state.touch_updated();
            state.show_message("Dashboard initialized successfully");
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Initialization failed: {}", e.detail()).into());
            state.show_message("Failed to initialize dashboard");
        }
    }
}

/// One refresh cycle: manual trigger, timer tick, or reconnect.
///
/// Dropped entirely if a cycle is already in flight. The guard is released
/// on success and failure alike.
pub async fn refresh(state: DashboardState) {
    if !state.begin_refresh() {
        return;
    }

    match run_cycle(&state).await {
        Ok(()) => {
            state.show_message("Dashboard updated successfully!");
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Dashboard update failed: {}", e.detail()).into());
            state.show_message("Failed to update dashboard. Please try again.");
        }
    }

    state.end_refresh();
}

async fn run_cycle(state: &DashboardState) -> Result<(), DashboardError> {
    let (snapshot, stats) = fetch_pair(state).await?;

    let insights = IllustrativeInsights::new().synthesize(&stats.best_performing);
    state.snapshot.set(Some(snapshot));
    state.apply_stats(stats);
    state.apply_insights(insights);
    state.touch_updated();

    Ok(())
}

/// Fetch both endpoints concurrently; both must succeed before any
/// rendering happens (join semantics, not pipeline).
async fn fetch_pair(
    state: &DashboardState,
) -> Result<(AnalyticsSnapshot, StatsSummary), DashboardError> {
    let (snapshot, stats) = future::join(
        api::fetch_chart_data(state),
        api::fetch_analytics(state),
    )
    .await;

    Ok((snapshot?, stats?))
}

/// Whether the page is currently foreground-visible
pub fn page_visible() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.visibility_state() == web_sys::VisibilityState::Visible)
        .unwrap_or(false)
}

/// Periodic refresh schedule, armed and cancelled by visibility state.
///
/// Cheap to clone; clones share the same underlying timer slot.
#[derive(Clone)]
pub struct RefreshScheduler {
    state: DashboardState,
    interval: Rc<RefCell<Option<gloo_timers::callback::Interval>>>,
}

impl RefreshScheduler {
    pub fn new(state: DashboardState) -> Self {
        Self {
            state,
            interval: Rc::new(RefCell::new(None)),
        }
    }

    /// Start the periodic timer. No-op if already armed.
    pub fn arm(&self) {
        let mut slot = self.interval.borrow_mut();
        if slot.is_some() {
            return;
        }

        let state = self.state.clone();
        *slot = Some(gloo_timers::callback::Interval::new(
            REFRESH_INTERVAL_MS,
            move || {
                if page_visible() {
                    spawn_local(refresh(state.clone()));
                }
            },
        ));
    }

    /// Tear the timer down. Dropping the interval cancels it.
    pub fn cancel(&self) {
        self.interval.borrow_mut().take();
    }

    /// Re-arm or tear down based on a visibility transition
    pub fn on_visibility(&self, visible: bool) {
        if visible {
            self.arm();
        } else {
            self.cancel();
        }
    }
}

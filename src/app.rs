//! App Root Component
//!
//! Constructs the dashboard context, wires lifecycle hooks and the periodic
//! refresh schedule, and kicks off the initial load.

use leptos::*;

use crate::components::{
    provide_chart_context, AskAiPanel, ChartsPanel, Header, InsightsPanel, StatsRow, Toast,
};
use crate::state::global::{expect_state, provide_dashboard_state};
use crate::state::lifecycle::init_lifecycle;
use crate::state::refresh::{self, RefreshScheduler};
use crate::theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // One context object for the whole tree, constructed here
    provide_dashboard_state();
    provide_chart_context();

    let state = expect_state();
    theme::apply_palette(state.theme.get_untracked());

    let scheduler = RefreshScheduler::new(state.clone());
    scheduler.arm();
    init_lifecycle(state.clone(), scheduler);

    // Initial load
    spawn_local(refresh::initialize(state));

    view! {
        <div class="app">
            <Header />

            <main class="dashboard">
                <StatsRow />
                <ChartsPanel />

                <div class="panel-grid">
                    <InsightsPanel />
                    <AskAiPanel />
                </div>
            </main>

            <Footer />
            <Toast />
        </div>
    }
}

/// Footer showing connectivity and the last successful refresh
#[component]
fn Footer() -> impl IntoView {
    let state = expect_state();

    view! {
        <footer class="footer">
            // Connectivity status
            <div class="footer-status">
                {
                    let online = state.online;
                    move || {
                        if online.get() {
                            view! {
                                <span class="status-online">
                                    <span class="status-dot" />
                                    "Online"
                                </span>
                            }
                            .into_view()
                        } else {
                            view! {
                                <span class="status-offline">
                                    <span class="status-dot" />
                                    "Offline"
                                </span>
                            }
                            .into_view()
                        }
                    }
                }
            </div>

            // Last update time
            <div class="footer-updated">
                {
                    let last_updated = state.last_updated;
                    move || {
                        last_updated
                            .get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Last updated: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not updated yet".to_string())
                    }
                }
            </div>

            // Refresh-in-flight indicator
            {move || {
                if state.refreshing.get() {
                    view! {
                        <div class="footer-loading">
                            <div class="loading-spinner w-4 h-4" />
                            <span>"Updating..."</span>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </footer>
    }
}

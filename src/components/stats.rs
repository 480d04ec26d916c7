//! Stats Cards
//!
//! Formatted numeric summaries from the analytics endpoint: engagement
//! rate, total interactions, and the best-performing category.

use leptos::*;

use crate::format::{format_compact, format_percent};
use crate::state::global::expect_state;

/// Summary row with the three stat cards
#[component]
pub fn StatsRow() -> impl IntoView {
    let state = expect_state();

    let stats_for_rate = state.clone();
    let engagement_rate = create_memo(move |_| {
        stats_for_rate
            .stats
            .get()
            .map(|s| format_percent(s.engagement_rate))
    });

    let stats_for_total = state.clone();
    let total_interactions = create_memo(move |_| {
        stats_for_total
            .stats
            .get()
            .map(|s| format_compact(s.total_interactions))
    });

    let best_performing = create_memo(move |_| state.stats.get().map(|s| s.best_performing));

    view! {
        <section class="stats-grid">
            <StatCard label="Engagement Rate" icon="📈" value=engagement_rate />
            <StatCard label="Total Interactions" icon="🤝" value=total_interactions />
            <StatCard label="Best Performing" icon="🏆" value=best_performing />
        </section>
    }
}

/// A single stat card
#[component]
fn StatCard(
    label: &'static str,
    icon: &'static str,
    #[prop(into)] value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-header">
                <span class="stat-label">{label}</span>
                <span class="stat-icon">{icon}</span>
            </div>
            <div class="stat-value">
                {move || value.get().unwrap_or_else(|| "—".to_string())}
            </div>
        </div>
    }
}

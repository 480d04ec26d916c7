//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader for a chart card
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="chart-card animate-pulse">
            <div class="h-6 bg-gray-700 rounded w-1/4 mb-4" />
            <div class="h-64 bg-gray-700 rounded" />
        </div>
    }
}

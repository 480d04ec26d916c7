//! Insights Panel
//!
//! The insight list and its search filter. Filtering hides non-matching
//! items in place; it never removes them or touches the backend.

use leptos::*;

use crate::insights::{matches_query, Insight};
use crate::state::global::expect_state;

/// Insight list with a search box
#[component]
pub fn InsightsPanel() -> impl IntoView {
    let state = expect_state();
    let search = state.search;

    view! {
        <section class="insights-panel">
            <h2 class="panel-title">"Insights"</h2>

            <input
                type="text"
                class="search-input"
                placeholder="Search insights..."
                aria-label="Search insights"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <div class="insights-list">
                {move || {
                    state
                        .insights
                        .get()
                        .into_iter()
                        .map(|insight| {
                            view! { <InsightItem insight=insight query=search /> }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

/// One insight row; hidden (not removed) when it fails the query filter
#[component]
fn InsightItem(insight: Insight, query: RwSignal<String>) -> impl IntoView {
    let text = insight.text.clone();
    let visible = create_memo(move |_| matches_query(&text, &query.get()));

    view! {
        <div
            class="insight-item"
            style:display=move || if visible.get() { "flex" } else { "none" }
        >
            <i class=format!("fas {}", insight.icon)></i>
            <span>{insight.text}</span>
        </div>
    }
}

//! Header Component
//!
//! Brand, manual refresh, and the theme toggle.

use leptos::*;

use crate::state::global::expect_state;
use crate::state::refresh;
use crate::theme;

/// Header bar with brand and controls
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_state();
    let refreshing = state.refreshing;
    let theme_signal = state.theme;

    let state_for_refresh = state.clone();
    let on_refresh = move |_| {
        spawn_local(refresh::refresh(state_for_refresh.clone()));
    };

    let on_toggle_theme = move |_| {
        let next = theme_signal.get_untracked().toggled();
        theme_signal.set(next);
        theme::apply_palette(next);
    };

    view! {
        <header class="header">
            <div class="brand">
                <span class="brand-icon">"📊"</span>
                <span class="brand-name">"Pulseboard"</span>
            </div>

            <div class="header-controls">
                <button
                    on:click=on_refresh
                    disabled=move || refreshing.get()
                    class="refresh-btn"
                    aria-label="Refresh dashboard"
                >
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
                </button>

                <button
                    on:click=on_toggle_theme
                    class="theme-btn"
                    aria-label="Toggle theme"
                >
                    {move || theme_signal.get().toggle_icon()}
                </button>
            </div>
        </header>
    }
}

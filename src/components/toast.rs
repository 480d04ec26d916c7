//! Toast Notification Component
//!
//! Shows the transient dashboard message. The message signal auto-clears,
//! so this only renders whatever is currently set.

use leptos::*;

use crate::state::global::expect_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_state();

    view! {
        <div class="toast-container">
            {move || {
                state.message.get().map(|msg| {
                    view! {
                        <div class="toast show">
                            <span class="toast-text">{msg}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}

//! Ask-AI Panel
//!
//! Free-text question form. Empty input is flagged transiently and never
//! leaves the page; everything else is forwarded to the backend and the
//! answer is injected as trusted content. The processing indicator clears
//! on success and failure alike.

use leptos::*;

use crate::api;
use crate::components::loading::InlineLoading;
use crate::error::validate_question;
use crate::state::global::expect_state;

/// How long the invalid-input flag stays on
const INVALID_FLASH_MS: u32 = 500;

/// Question form with processing indicator and answer area
#[component]
pub fn AskAiPanel() -> impl IntoView {
    let state = expect_state();

    let (question, set_question) = create_signal(String::new());
    let (answer, set_answer) = create_signal(None::<String>);
    let (processing, set_processing) = create_signal(false);
    let (invalid, set_invalid) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Ok(q) = validate_question(&question.get()) else {
            set_invalid.set(true);
            gloo_timers::callback::Timeout::new(INVALID_FLASH_MS, move || {
                set_invalid.set(false);
            })
            .forget();
            return;
        };

        set_processing.set(true);
        state.show_message("Analyzing your question...");

        let state_clone = state.clone();
        spawn_local(async move {
            match api::ask_ai(&q).await {
                Ok(response) => {
                    set_answer.set(Some(response));
                    state_clone.show_message("Analysis complete!");
                    set_question.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Question processing failed: {}", e.detail()).into(),
                    );
                    state_clone.show_message("Failed to process question. Please try again.");
                }
            }
            set_processing.set(false);
        });
    };

    view! {
        <section class="ask-ai-panel">
            <h2 class="panel-title">"Ask AI"</h2>

            <form on:submit=on_submit class="ask-form">
                <input
                    type="text"
                    placeholder="Ask about your analytics..."
                    prop:value=move || question.get()
                    on:input=move |ev| set_question.set(event_target_value(&ev))
                    class=move || {
                        if invalid.get() {
                            "question-input error"
                        } else {
                            "question-input"
                        }
                    }
                />
                <button type="submit" disabled=move || processing.get() class="ask-button">
                    {move || {
                        if processing.get() {
                            view! { <InlineLoading /> }.into_view()
                        } else {
                            view! { "Ask" }.into_view()
                        }
                    }}
                </button>
            </form>

            // Answer area, revealed once a response arrives. The backend
            // response is trusted renderable content.
            {move || {
                answer.get().map(|a| {
                    view! {
                        <div class="ai-response-area show">
                            <div class="ai-response-content" inner_html=a></div>
                        </div>
                    }
                })
            }}
        </section>
    }
}

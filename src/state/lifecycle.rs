//! Page Lifecycle Hooks
//!
//! Window and document listeners: last-resort error backstops, network
//! connectivity transitions, and visibility-driven scheduling. In-flight
//! fetches are never cancelled; the refresh guard serializes whatever
//! resolves late against future cycles.

use leptos::{spawn_local, SignalSet};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::global::DashboardState;
use super::refresh::{self, page_visible, RefreshScheduler};

/// Backstop message for uncaught errors and unhandled rejections
const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please refresh the page.";

/// Register all window/document listeners. Call once from the app root.
pub fn init_lifecycle(state: DashboardState, scheduler: RefreshScheduler) {
    let Some(window) = web_sys::window() else {
        return;
    };

    // Uncaught errors and unhandled promise rejections: log, show the
    // generic message, stay interactive
    for event in ["error", "unhandledrejection"] {
        let state_clone = state.clone();
        let on_error = Closure::wrap(Box::new(move |e: web_sys::Event| {
            web_sys::console::error_2(&"Dashboard error:".into(), e.as_ref());
            state_clone.show_message(GENERIC_ERROR_MESSAGE);
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = window.add_event_listener_with_callback(event, on_error.as_ref().unchecked_ref());
        on_error.forget();
    }

    // Connection restored: note it and refresh immediately
    let state_clone = state.clone();
    let on_online = Closure::wrap(Box::new(move |_: web_sys::Event| {
        state_clone.online.set(true);
        state_clone.show_message("Connection restored");
        spawn_local(refresh::refresh(state_clone.clone()));
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = window.add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref());
    on_online.forget();

    // Connection lost: passive status only
    let state_clone = state.clone();
    let on_offline = Closure::wrap(Box::new(move |_: web_sys::Event| {
        state_clone.online.set(false);
        state_clone.show_message("Connection lost");
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = window.add_event_listener_with_callback("offline", on_offline.as_ref().unchecked_ref());
    on_offline.forget();

    // No refresh work while hidden; re-arm on return to foreground
    if let Some(document) = window.document() {
        let scheduler_clone = scheduler.clone();
        let on_visibility = Closure::wrap(Box::new(move |_: web_sys::Event| {
            scheduler_clone.on_visibility(page_visible());
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = document.add_event_listener_with_callback(
            "visibilitychange",
            on_visibility.as_ref().unchecked_ref(),
        );
        on_visibility.forget();
    }

    // Tear the timer down on page teardown
    let on_unload = Closure::wrap(Box::new(move |_: web_sys::Event| {
        scheduler.cancel();
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ =
        window.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref());
    on_unload.forget();
}

//! Pulseboard
//!
//! Social engagement analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Bar/pie charts of engagement and content distribution
//! - Summary stats and illustrative insights
//! - AI question answering via the backend
//! - Theme toggle, insight search, periodic refresh
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All analytics are precomputed by the backend HTTP API; this
//! crate is the presentation layer.

use leptos::*;

mod api;
mod app;
mod components;
mod error;
mod format;
mod insights;
mod state;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

//! HTTP API
//!
//! Client for the analytics backend.

pub mod client;

pub use client::{ask_ai, fetch_analytics, fetch_chart_data};

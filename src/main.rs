//! AirMap Dashboard
//!
//! Air-quality map frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Pollution readings plotted over a geographic bounding box
//! - Anomaly inspection for a time range
//! - Region density queries for the visible rectangle
//! - Dark/light theme persisted across sessions
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the AirMap API via plain HTTP GET
//! requests.

use leptos::*;

mod api;
mod app;
mod components;
mod icons;
mod pages;
mod platform;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Icons must be in the registry before the first render
    icons::register_builtin_icons();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

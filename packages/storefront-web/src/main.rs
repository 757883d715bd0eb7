//! Storefront - Dioxus Web Application
//!
//! Client-side storefront over the REST backend: category browsing, search,
//! cart, addresses, checkout and seller ad management. Every page is gated
//! by `storefront-access`.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! STOREFRONT_API_URL=http://localhost:5000/api dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod config;
mod pages;
mod routes;
mod state;
mod types;

use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = config::init() {
        tracing::error!(error = %e, "Invalid storefront configuration");
        return;
    }

    dioxus::launch(app::App);
}

//! Startup configuration shared by every component

use std::sync::OnceLock;

use anyhow::{Context, Result};
use storefront_access::storefront::{self, Page};
use storefront_access::{AccessGate, GateConfig, RouteTable};

use crate::api;

static ACCESS: OnceLock<Access> = OnceLock::new();

struct Access {
    table: RouteTable<Page>,
    gate: AccessGate,
}

/// Build the route table and gate and record the API URL. Call this once
/// before launching the app.
pub fn init() -> Result<()> {
    let api_url = option_env!("STOREFRONT_API_URL").unwrap_or(api::DEFAULT_API_URL);
    api::init_api_url(api_url.trim_end_matches('/').to_string());

    let gate_config = GateConfig::from_env().context("Failed to load gate configuration")?;
    let table = storefront::routes().context("Storefront route table is misconfigured")?;

    tracing::info!(
        api_url,
        routes = table.len(),
        sign_in = %gate_config.sign_in_path,
        "Storefront configured"
    );

    ACCESS
        .set(Access {
            table,
            gate: AccessGate::new(gate_config),
        })
        .map_err(|_| anyhow::anyhow!("Storefront configuration initialised twice"))
}

fn access() -> &'static Access {
    ACCESS
        .get()
        .expect("config::init must run before the app launches")
}

pub fn route_table() -> &'static RouteTable<Page> {
    &access().table
}

pub fn gate() -> &'static AccessGate {
    &access().gate
}

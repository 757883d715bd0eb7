//! Session restore and sign-in for the storefront

mod api;
mod context;

pub use api::*;
pub use context::*;

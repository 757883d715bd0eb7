//! REST client for communicating with the storefront backend

mod addresses;
mod ads;
mod cart;
mod client;
mod orders;

pub use addresses::*;
pub use ads::*;
pub use cart::*;
pub use client::*;
pub use orders::*;

//! Shopping pages: ad details, cart, checkout, addresses and search

mod ad_details;
mod addresses;
mod cart;
mod checkout;
mod search;

pub use ad_details::*;
pub use addresses::*;
pub use cart::*;
pub use checkout::*;
pub use search::*;

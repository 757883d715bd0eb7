//! Reusable UI components

mod access_guard;
mod ad_card;
mod confirm;
mod layouts;
mod loading;
mod nav;
mod notice;
mod price_bar;
mod redirect;

pub use access_guard::*;
pub use ad_card::*;
pub use confirm::*;
pub use layouts::*;
pub use loading::*;
pub use nav::*;
pub use notice::*;
pub use price_bar::*;
pub use redirect::*;

//! Pages under `/dashboard`

mod account;
mod category_ads;
mod home;
mod my_ads;
mod upload_ad;

pub use account::*;
pub use category_ads::*;
pub use home::*;
pub use my_ads::*;
pub use upload_ad::*;

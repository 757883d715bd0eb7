//! Pages reachable without signing in

mod landing;
mod not_found;
mod sign_in;
mod sign_up;
mod unauthorized;

pub use landing::*;
pub use not_found::*;
pub use sign_in::*;
pub use sign_up::*;
pub use unauthorized::*;

//! Access control for the storefront
//!
//! Decides, for every navigation, whether a page may render or the visitor
//! must be redirected:
//!
//! ```rust
//! use storefront_access::{storefront, AccessGate, Decision, Identity, Role, SessionState};
//!
//! let table = storefront::routes().unwrap();
//! let gate = AccessGate::default();
//!
//! let resolution = table.resolve("/dashboard/cart");
//! let session = SessionState::Authenticated(Identity::new("u-1", "Asha", Role::User));
//!
//! assert!(matches!(
//!     gate.evaluate(&session, &resolution.policy, "/dashboard/cart"),
//!     Decision::Render { .. }
//! ));
//! ```
//!
//! The table, the gates and the navigation state machine are pure; the only
//! asynchronous piece is waiting for [`SessionStore`] to finish restoring a
//! prior session.

pub mod config;
pub mod error;
pub mod gate;
pub mod identity;
pub mod navigation;
pub mod policy;
pub mod role;
pub mod routes;
pub mod session;
pub mod storefront;

pub use config::GateConfig;
pub use error::{Denial, IdentityError, RouteConfigError};
pub use gate::{AccessGate, Decision, RedirectReason, RedirectTarget};
pub use identity::{Identity, ProfilePayload};
pub use navigation::{AccessController, Navigation, NavigationState, Navigator, RedirectOptions};
pub use policy::{EffectivePolicy, RoutePolicy};
pub use role::{Role, RoleSet};
pub use routes::{Resolution, RouteParams, RouteTable, RouteTableBuilder};
pub use session::{SessionProvider, SessionState, SessionStore};

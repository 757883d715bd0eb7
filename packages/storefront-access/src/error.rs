use thiserror::Error;

use crate::role::Role;

/// Why the gate refused to render a page.
///
/// Both kinds are recovered locally by redirecting; they are never surfaced
/// to page code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Role '{role}' is not permitted on this page")]
    ForbiddenRole { role: Role },
}

/// Errors raised at the session boundary when a backend profile cannot be
/// turned into an [`Identity`](crate::Identity)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Profile is missing an id")]
    MissingId,
}

/// Route table declarations that can never be satisfied or are ambiguous.
///
/// Returned by [`RouteTableBuilder::build`](crate::RouteTableBuilder::build)
/// so misconfigured tables fail at registration time rather than producing
/// surprising redirects at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteConfigError {
    #[error("Route '{pattern}' declares an empty role set")]
    EmptyRoleSet { pattern: String },

    #[error("Route '{pattern}' has no role satisfying every enclosing policy")]
    UnsatisfiableRoles { pattern: String },

    #[error("Route '{pattern}' is guest-only inside a role-restricted section")]
    GuestOnlyConflict { pattern: String },

    #[error("Route '{pattern}' is declared more than once")]
    DuplicateRoute { pattern: String },

    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },
}

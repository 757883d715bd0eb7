//! Route policies and their conjunction along a route's ancestry

use serde::Serialize;

use crate::role::{Role, RoleSet};

/// Access rule declared on a route or a route group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Anyone may render
    Public,
    /// Only visitors without an identity may render (sign-in, sign-up)
    GuestOnly,
    /// Only identities whose role is in the set may render
    Roles(RoleSet),
}

impl RoutePolicy {
    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        RoutePolicy::Roles(roles.into_iter().collect())
    }

    pub fn authenticated() -> Self {
        RoutePolicy::Roles(RoleSet::all())
    }
}

/// The policy that actually gates a route once every enclosing group's
/// policy has been combined with the route's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "roles", rename_all = "snake_case")]
pub enum EffectivePolicy {
    Public,
    GuestOnly,
    Restricted(#[serde(serialize_with = "serialize_roles")] RoleSet),
}

impl EffectivePolicy {
    pub fn allowed_roles(&self) -> Option<RoleSet> {
        match self {
            EffectivePolicy::Restricted(roles) => Some(*roles),
            _ => None,
        }
    }
}

/// Why a chain of declared policies could not be combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PolicyConflict {
    EmptyRoleSet,
    UnsatisfiableRoles,
    GuestOnlyConflict,
}

/// Combine declared policies, outermost first. Role sets intersect; a
/// guest-only declaration cannot coexist with any role restriction.
pub(crate) fn combine(chain: &[RoutePolicy]) -> Result<EffectivePolicy, PolicyConflict> {
    let mut guest_only = false;
    let mut allowed: Option<RoleSet> = None;

    for policy in chain {
        match policy {
            RoutePolicy::Public => {}
            RoutePolicy::GuestOnly => guest_only = true,
            RoutePolicy::Roles(roles) => {
                if roles.is_empty() {
                    return Err(PolicyConflict::EmptyRoleSet);
                }
                allowed = Some(match allowed {
                    Some(current) => current.intersection(roles),
                    None => *roles,
                });
            }
        }
    }

    match (guest_only, allowed) {
        (true, Some(_)) => Err(PolicyConflict::GuestOnlyConflict),
        (true, None) => Ok(EffectivePolicy::GuestOnly),
        (false, Some(roles)) if roles.is_empty() => Err(PolicyConflict::UnsatisfiableRoles),
        (false, Some(roles)) => Ok(EffectivePolicy::Restricted(roles)),
        (false, None) => Ok(EffectivePolicy::Public),
    }
}

fn serialize_roles<S: serde::Serializer>(roles: &RoleSet, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(roles.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_is_public() {
        assert_eq!(combine(&[]), Ok(EffectivePolicy::Public));
        assert_eq!(combine(&[RoutePolicy::Public]), Ok(EffectivePolicy::Public));
    }

    #[test]
    fn nested_role_sets_intersect() {
        let chain = [
            RoutePolicy::authenticated(),
            RoutePolicy::Public,
            RoutePolicy::roles([Role::User, Role::Advertiser]),
        ];
        assert_eq!(
            combine(&chain),
            Ok(EffectivePolicy::Restricted(RoleSet::from([Role::User, Role::Advertiser])))
        );
    }

    #[test]
    fn disjoint_role_sets_are_unsatisfiable() {
        let chain = [RoutePolicy::roles([Role::Admin]), RoutePolicy::roles([Role::User])];
        assert_eq!(combine(&chain), Err(PolicyConflict::UnsatisfiableRoles));
    }

    #[test]
    fn declared_empty_set_is_rejected() {
        let chain = [RoutePolicy::Roles(RoleSet::empty())];
        assert_eq!(combine(&chain), Err(PolicyConflict::EmptyRoleSet));
    }

    #[test]
    fn guest_only_inside_restricted_section_conflicts() {
        let chain = [RoutePolicy::authenticated(), RoutePolicy::GuestOnly];
        assert_eq!(combine(&chain), Err(PolicyConflict::GuestOnlyConflict));
    }

    #[test]
    fn effective_policy_serializes_roles_as_names() {
        let policy = EffectivePolicy::Restricted(RoleSet::from([Role::User]));
        assert_eq!(
            serde_json::to_value(policy).unwrap(),
            serde_json::json!({ "kind": "restricted", "roles": ["user"] })
        );
    }
}

//! Roles and role sets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;

/// Permission level carried by an authenticated identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Advertiser,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Advertiser, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Advertiser => "advertiser",
            Role::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Advertiser => "Seller",
            Role::User => "Shopper",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Role::Admin => 1 << 0,
            Role::Advertiser => 1 << 1,
            Role::User => 1 << 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| IdentityError::UnknownRole(s.to_string()))
    }
}

/// A set of roles drawn from the closed [`Role`] enumeration
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet {
    bits: u8,
}

impl RoleSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn all() -> Self {
        Role::ALL.into_iter().collect()
    }

    pub fn only(role: Role) -> Self {
        Self { bits: role.bit() }
    }

    pub fn with(mut self, role: Role) -> Self {
        self.bits |= role.bit();
        self
    }

    pub fn contains(&self, role: Role) -> bool {
        self.bits & role.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn intersection(&self, other: &RoleSet) -> RoleSet {
        RoleSet {
            bits: self.bits & other.bits,
        }
    }

    /// Roles in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|role| self.contains(*role))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(RoleSet::empty(), RoleSet::with)
    }
}

impl<const N: usize> From<[Role; N]> for RoleSet {
    fn from(roles: [Role; N]) -> Self {
        roles.into_iter().collect()
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|role| role.as_str()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roles_case_insensitively() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" Advertiser ".parse::<Role>().unwrap(), Role::Advertiser);
        assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_eq!(err, IdentityError::UnknownRole("superuser".to_string()));
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Advertiser).unwrap(), "\"advertiser\"");
    }

    #[test]
    fn set_membership_and_intersection() {
        let shoppers = RoleSet::from([Role::User, Role::Admin]);
        let sellers = RoleSet::only(Role::Advertiser);

        assert!(shoppers.contains(Role::User));
        assert!(!shoppers.contains(Role::Advertiser));
        assert_eq!(shoppers.len(), 2);
        assert!(shoppers.intersection(&sellers).is_empty());
        assert_eq!(shoppers.intersection(&RoleSet::all()), shoppers);
    }

    #[test]
    fn iterates_in_declaration_order() {
        let set = RoleSet::from([Role::User, Role::Admin]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Role::Admin, Role::User]);
        assert_eq!(set.to_string(), "{admin, user}");
    }
}

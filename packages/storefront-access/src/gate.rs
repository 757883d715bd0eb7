//! Access and guest gates
//!
//! Both gates turn `(identity, policy)` into a [`Decision`]. They are pure:
//! no I/O, no clocks, and the same inputs always give the same decision.

use serde::Serialize;
use tracing::debug;

use crate::config::GateConfig;
use crate::error::Denial;
use crate::identity::Identity;
use crate::policy::EffectivePolicy;
use crate::role::RoleSet;
use crate::session::SessionState;

/// Reason code attached to a redirect issued by the access gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedirectReason {
    Unauthenticated,
    ForbiddenRole,
}

impl From<Denial> for RedirectReason {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::Unauthenticated => RedirectReason::Unauthenticated,
            Denial::ForbiddenRole { .. } => RedirectReason::ForbiddenRole,
        }
    }
}

/// Where to send a visitor the gate refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectTarget {
    pub path: String,
    pub reason: Option<RedirectReason>,
    /// Originally requested path, resumed after sign-in
    pub return_to: Option<String>,
    #[serde(skip)]
    return_param: String,
}

impl RedirectTarget {
    /// Path including the percent-encoded return-to query parameter
    pub fn href(&self) -> String {
        match &self.return_to {
            Some(return_to) => format!(
                "{}?{}={}",
                self.path,
                self.return_param,
                urlencoding::encode(return_to)
            ),
            None => self.path.clone(),
        }
    }
}

/// Outcome of evaluating a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Session still being restored; show a neutral loading state
    Pending,
    /// The page may render, with the identity when there is one
    Render { identity: Option<Identity> },
    Redirect(RedirectTarget),
}

impl Decision {
    /// Denial kind behind a redirect, if the access gate issued it
    pub fn denial(&self) -> Option<RedirectReason> {
        match self {
            Decision::Redirect(target) => target.reason,
            _ => None,
        }
    }

    pub fn is_render(&self) -> bool {
        matches!(self, Decision::Render { .. })
    }
}

/// Evaluates route policies against session state
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    config: GateConfig,
}

impl AccessGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Check an identity against a role-restricted page
    pub fn check(&self, identity: Option<&Identity>, allowed: &RoleSet) -> Result<(), Denial> {
        let identity = identity.ok_or(Denial::Unauthenticated)?;

        if !allowed.contains(identity.role) {
            return Err(Denial::ForbiddenRole { role: identity.role });
        }

        Ok(())
    }

    /// Role-restricted guard
    pub fn authorize(
        &self,
        identity: Option<&Identity>,
        allowed: &RoleSet,
        requested_path: &str,
    ) -> Decision {
        match self.check(identity, allowed) {
            Ok(()) => Decision::Render {
                identity: identity.cloned(),
            },
            Err(Denial::Unauthenticated) => {
                debug!(requested_path, "unauthenticated, redirecting to sign-in");
                Decision::Redirect(self.target(
                    &self.config.sign_in_path,
                    Some(RedirectReason::Unauthenticated),
                    Some(requested_path.to_string()),
                ))
            }
            Err(denial @ Denial::ForbiddenRole { role }) => {
                debug!(requested_path, %role, %allowed, "role not permitted");
                Decision::Redirect(self.target(
                    &self.config.unauthorized_path,
                    Some(denial.into()),
                    None,
                ))
            }
        }
    }

    /// Guest-only guard: authenticated visitors go to the landing page
    pub fn authorize_guest(&self, identity: Option<&Identity>) -> Decision {
        match identity {
            Some(identity) => {
                debug!(user_id = %identity.id, "already signed in, leaving guest page");
                Decision::Redirect(self.target(&self.config.landing_path, None, None))
            }
            None => Decision::Render { identity: None },
        }
    }

    /// Evaluate an effective policy against the current session snapshot
    pub fn evaluate(
        &self,
        session: &SessionState,
        policy: &EffectivePolicy,
        requested_path: &str,
    ) -> Decision {
        if !session.is_resolved() {
            return Decision::Pending;
        }

        let identity = session.identity();
        match policy {
            EffectivePolicy::Public => Decision::Render {
                identity: identity.cloned(),
            },
            EffectivePolicy::GuestOnly => self.authorize_guest(identity),
            EffectivePolicy::Restricted(allowed) => {
                self.authorize(identity, allowed, requested_path)
            }
        }
    }

    /// Where to go after a successful sign-in.
    ///
    /// Only local absolute paths are resumed; anything else, and the gate's
    /// own sign-in/sign-up pages, fall back to the landing path.
    pub fn resume_path(&self, return_to: Option<&str>) -> String {
        return_to
            .map(str::trim)
            .filter(|path| is_local_path(path))
            .filter(|path| !self.is_guest_path(path))
            .map(str::to_string)
            .unwrap_or_else(|| self.config.landing_path.clone())
    }

    /// Extract and decode the return-to parameter from a query string
    pub fn return_to_from_query(&self, query: &str) -> Option<String> {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == self.config.return_param)
            .and_then(|(_, value)| urlencoding::decode(value).ok())
            .map(|value| value.into_owned())
            .filter(|value| !value.is_empty())
    }

    fn is_guest_path(&self, path: &str) -> bool {
        let bare = path.split(['?', '#']).next().unwrap_or(path);
        bare == self.config.sign_in_path || bare == self.config.sign_up_path
    }

    fn target(
        &self,
        path: &str,
        reason: Option<RedirectReason>,
        return_to: Option<String>,
    ) -> RedirectTarget {
        RedirectTarget {
            path: path.to_string(),
            reason,
            return_to,
            return_param: self.config.return_param.clone(),
        }
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    fn gate() -> AccessGate {
        AccessGate::default()
    }

    #[test]
    fn href_encodes_return_to() {
        let decision = gate().authorize(None, &RoleSet::only(Role::User), "/ad/7?qty=2");
        let Decision::Redirect(target) = decision else {
            panic!("expected redirect");
        };
        assert_eq!(target.href(), "/signin?return_to=%2Fad%2F7%3Fqty%3D2");
    }

    #[test]
    fn forbidden_redirect_has_no_return_to() {
        let seller = Identity::new("s-1", "Mira", Role::Advertiser);
        let decision = gate().authorize(Some(&seller), &RoleSet::only(Role::User), "/cart");
        let Decision::Redirect(target) = decision else {
            panic!("expected redirect");
        };
        assert_eq!(target.href(), "/unauthorized");
        assert_eq!(target.reason, Some(RedirectReason::ForbiddenRole));
    }

    #[test]
    fn check_reports_denial_kind() {
        let admin = Identity::new("a-1", "Root", Role::Admin);
        assert_eq!(
            gate().check(Some(&admin), &RoleSet::only(Role::User)),
            Err(Denial::ForbiddenRole { role: Role::Admin })
        );
        assert_eq!(gate().check(None, &RoleSet::all()), Err(Denial::Unauthenticated));
    }

    #[test]
    fn public_page_renders_with_optional_identity() {
        let decision = gate().evaluate(&SessionState::Anonymous, &EffectivePolicy::Public, "/");
        assert_eq!(decision, Decision::Render { identity: None });
    }

    #[test]
    fn resume_path_accepts_local_paths_only() {
        let gate = gate();
        assert_eq!(gate.resume_path(Some("/dashboard/cart")), "/dashboard/cart");
        assert_eq!(gate.resume_path(Some("https://evil.example")), "/dashboard");
        assert_eq!(gate.resume_path(Some("//evil.example")), "/dashboard");
        assert_eq!(gate.resume_path(Some("/signin?return_to=%2F")), "/dashboard");
        assert_eq!(gate.resume_path(None), "/dashboard");
    }

    #[test]
    fn reads_return_to_from_query() {
        let gate = gate();
        assert_eq!(
            gate.return_to_from_query("?foo=1&return_to=%2Fad%2F7"),
            Some("/ad/7".to_string())
        );
        assert_eq!(gate.return_to_from_query("return_to="), None);
        assert_eq!(gate.return_to_from_query(""), None);
    }
}

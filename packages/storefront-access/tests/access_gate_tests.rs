//! Access and guest gate behaviour over the storefront route table
//!
//! Each restricted path is checked three ways:
//! 1. no identity - redirected to sign-in with the requested path preserved
//! 2. identity with a role outside the effective set - sent to unauthorized
//! 3. identity with a permitted role - rendered with that identity

mod common;

use crate::common::{identity, table, GUEST_PATHS, RESTRICTED_PATHS};
use storefront_access::storefront::Page;
use storefront_access::{
    AccessGate, Decision, EffectivePolicy, GateConfig, RedirectReason, Role, RoleSet, SessionState,
};

fn decide(session: &SessionState, path: &str) -> Decision {
    let resolution = table().resolve(path);
    AccessGate::default().evaluate(session, &resolution.policy, path)
}

fn allowed(path: &str) -> RoleSet {
    match table().resolve(path).policy {
        EffectivePolicy::Restricted(roles) => roles,
        other => panic!("{path} should be role-restricted, got {other:?}"),
    }
}

// ============================================================================
// Role-restricted routes
// ============================================================================

#[test]
fn anonymous_visitor_always_goes_to_sign_in() {
    for path in RESTRICTED_PATHS {
        let Decision::Redirect(target) = decide(&SessionState::Anonymous, path) else {
            panic!("{path} rendered for an anonymous visitor");
        };
        assert_eq!(target.path, "/signin", "{path}");
        assert_eq!(target.reason, Some(RedirectReason::Unauthenticated), "{path}");
        assert_eq!(target.return_to.as_deref(), Some(*path));
    }
}

#[test]
fn wrong_role_always_goes_to_unauthorized() {
    for path in RESTRICTED_PATHS {
        let roles = allowed(path);
        for role in Role::ALL.into_iter().filter(|role| !roles.contains(*role)) {
            let session = SessionState::Authenticated(identity(role));
            let Decision::Redirect(target) = decide(&session, path) else {
                panic!("{path} rendered for {role}");
            };
            assert_eq!(target.path, "/unauthorized", "{path} as {role}");
            assert_eq!(target.reason, Some(RedirectReason::ForbiddenRole));
            assert_eq!(target.return_to, None);
        }
    }
}

#[test]
fn permitted_role_renders_with_identity() {
    for path in RESTRICTED_PATHS {
        for role in allowed(path).iter() {
            let visitor = identity(role);
            let session = SessionState::Authenticated(visitor.clone());
            assert_eq!(
                decide(&session, path),
                Decision::Render {
                    identity: Some(visitor)
                },
                "{path} as {role}"
            );
        }
    }
}

#[test]
fn nested_sections_intersect_roles() {
    let seller = SessionState::Authenticated(identity(Role::Advertiser));
    assert_eq!(
        decide(&seller, "/dashboard/cart").denial(),
        Some(RedirectReason::ForbiddenRole)
    );
    assert!(decide(&seller, "/dashboard/my-ads").is_render());
    assert!(decide(&seller, "/dashboard/account").is_render());

    let admin = SessionState::Authenticated(identity(Role::Admin));
    assert!(decide(&admin, "/dashboard").is_render());
    assert_eq!(
        decide(&admin, "/dashboard/upload").denial(),
        Some(RedirectReason::ForbiddenRole)
    );
}

// ============================================================================
// Guest-only routes
// ============================================================================

#[test]
fn guest_pages_render_for_anonymous_visitors() {
    for path in GUEST_PATHS {
        assert_eq!(
            decide(&SessionState::Anonymous, path),
            Decision::Render { identity: None }
        );
    }
}

#[test]
fn guest_pages_send_signed_in_visitors_to_landing() {
    for path in GUEST_PATHS {
        for role in Role::ALL {
            let session = SessionState::Authenticated(identity(role));
            let Decision::Redirect(target) = decide(&session, path) else {
                panic!("{path} rendered for {role}");
            };
            assert_eq!(target.path, "/dashboard");
            assert_eq!(target.reason, None);
        }
    }
}

// ============================================================================
// Resolution and idempotence
// ============================================================================

#[test]
fn resolving_session_suspends_every_page() {
    for path in RESTRICTED_PATHS.iter().chain(GUEST_PATHS).chain(&["/", "/nope"]) {
        assert_eq!(decide(&SessionState::Resolving, path), Decision::Pending, "{path}");
    }
}

#[test]
fn evaluation_is_idempotent() {
    let sessions = [
        SessionState::Anonymous,
        SessionState::Authenticated(identity(Role::User)),
        SessionState::Authenticated(identity(Role::Advertiser)),
    ];
    for session in &sessions {
        for path in RESTRICTED_PATHS.iter().chain(GUEST_PATHS) {
            assert_eq!(decide(session, path), decide(session, path));
        }
    }
}

#[test]
fn unknown_paths_outside_dashboard_render_not_found() {
    let resolution = table().resolve("/nope/at/all");
    assert_eq!(resolution.page, Page::NotFound);
    assert!(decide(&SessionState::Anonymous, "/nope/at/all").is_render());
}

#[test]
fn unknown_dashboard_paths_send_anonymous_visitors_to_sign_in() {
    let resolution = table().resolve("/dashboard/stats");
    assert_eq!(resolution.page, Page::NotFound);

    let Decision::Redirect(target) = decide(&SessionState::Anonymous, "/dashboard/stats") else {
        panic!("undeclared dashboard path rendered for an anonymous visitor");
    };
    assert_eq!(target.path, "/signin");
    assert_eq!(target.return_to.as_deref(), Some("/dashboard/stats"));

    let shopper = SessionState::Authenticated(identity(Role::User));
    assert!(decide(&shopper, "/dashboard/stats").is_render());
}

#[test]
fn wallet_is_for_sellers_only() {
    let shopper = SessionState::Authenticated(identity(Role::User));
    assert_eq!(
        decide(&shopper, "/dashboard/wallet").denial(),
        Some(RedirectReason::ForbiddenRole)
    );
    let seller = SessionState::Authenticated(identity(Role::Advertiser));
    assert!(decide(&seller, "/dashboard/wallet").is_render());
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_no_identity_on_user_route() {
    let decision = AccessGate::default().authorize(None, &RoleSet::only(Role::User), "/cart");
    assert_eq!(decision.denial(), Some(RedirectReason::Unauthenticated));
    let Decision::Redirect(target) = decision else {
        unreachable!()
    };
    assert_eq!(target.href(), "/signin?return_to=%2Fcart");
}

#[test]
fn scenario_advertiser_on_user_route() {
    let seller = identity(Role::Advertiser);
    let decision = AccessGate::default().authorize(Some(&seller), &RoleSet::only(Role::User), "/cart");
    assert_eq!(decision.denial(), Some(RedirectReason::ForbiddenRole));
}

#[test]
fn scenario_user_on_user_or_admin_route() {
    let shopper = identity(Role::User);
    let decision = AccessGate::default().authorize(
        Some(&shopper),
        &RoleSet::from([Role::User, Role::Admin]),
        "/orders",
    );
    assert_eq!(
        decision,
        Decision::Render {
            identity: Some(shopper)
        }
    );
}

#[test]
fn scenario_admin_on_guest_route() {
    let admin = identity(Role::Admin);
    let Decision::Redirect(target) = AccessGate::default().authorize_guest(Some(&admin)) else {
        panic!("expected redirect");
    };
    assert_eq!(target.href(), "/dashboard");
}

#[test]
fn custom_paths_are_honoured() {
    let gate = AccessGate::new(GateConfig {
        sign_in_path: "/login".to_string(),
        return_param: "next".to_string(),
        ..Default::default()
    });
    let Decision::Redirect(target) = gate.authorize(None, &RoleSet::all(), "/dashboard") else {
        panic!("expected redirect");
    };
    assert_eq!(target.href(), "/login?next=%2Fdashboard");
    assert_eq!(gate.resume_path(gate.return_to_from_query("next=%2Fcheckout").as_deref()), "/checkout");
}

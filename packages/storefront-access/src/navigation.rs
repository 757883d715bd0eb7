//! Per-navigation state machine
//!
//! Every navigation starts in [`NavigationState::Resolving`] and leaves it
//! exactly once, either to `Authorized` or to `Redirecting`. Both are
//! terminal for that attempt; navigating again starts a new [`Navigation`].

use std::sync::Arc;

use tracing::{debug, info};

use crate::gate::{AccessGate, Decision, RedirectTarget};
use crate::identity::Identity;
use crate::routes::{Resolution, RouteTable};
use crate::session::{wait_resolved, SessionProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RedirectOptions {
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

/// Navigation service the controller issues redirects through
pub trait Navigator {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str, options: RedirectOptions);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    Resolving,
    Authorized { identity: Option<Identity> },
    Redirecting(RedirectTarget),
}

/// One navigation attempt
#[derive(Debug, Clone)]
pub struct Navigation<P> {
    pub path: String,
    pub resolution: Resolution<P>,
    state: NavigationState,
}

impl<P> Navigation<P> {
    pub fn new(path: impl Into<String>, resolution: Resolution<P>) -> Self {
        Self {
            path: path.into(),
            resolution,
            state: NavigationState::Resolving,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self.state, NavigationState::Resolving)
    }

    /// Apply a gate decision. Returns whether the state changed: pending
    /// decisions keep the attempt resolving, and settled attempts ignore
    /// further decisions.
    pub fn apply(&mut self, decision: Decision) -> bool {
        if self.is_settled() {
            return false;
        }

        self.state = match decision {
            Decision::Pending => return false,
            Decision::Render { identity } => NavigationState::Authorized { identity },
            Decision::Redirect(target) => NavigationState::Redirecting(target),
        };
        true
    }
}

/// Wires the route table and gate to a session provider and a navigator
pub struct AccessController<P, S, N> {
    table: Arc<RouteTable<P>>,
    gate: AccessGate,
    session: S,
    navigator: N,
}

impl<P, S, N> AccessController<P, S, N>
where
    P: Clone,
    S: SessionProvider,
    N: Navigator,
{
    pub fn new(table: Arc<RouteTable<P>>, gate: AccessGate, session: S, navigator: N) -> Self {
        Self {
            table,
            gate,
            session,
            navigator,
        }
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn table(&self) -> &RouteTable<P> {
        &self.table
    }

    /// Resolve `path` and evaluate it against the current session snapshot
    /// without waiting or redirecting
    pub fn begin(&self, path: &str) -> Navigation<P> {
        let mut navigation = Navigation::new(path, self.table.resolve(path));
        let decision = self
            .gate
            .evaluate(&self.session.current(), &navigation.resolution.policy, path);
        navigation.apply(decision);
        navigation
    }

    /// Run a navigation to completion: wait for the session to resolve if
    /// needed, then either authorize or issue the redirect.
    pub async fn navigate(&self, path: &str) -> Navigation<P> {
        let mut receiver = self.session.subscribe();
        let snapshot = receiver.borrow_and_update().clone();

        let mut navigation = Navigation::new(path, self.table.resolve(path));
        let policy = navigation.resolution.policy;

        if !navigation.apply(self.gate.evaluate(&snapshot, &policy, path)) {
            debug!(path, "waiting for session before deciding");
            let resolved = wait_resolved(&mut receiver).await;
            navigation.apply(self.gate.evaluate(&resolved, &policy, path));
        }

        if let NavigationState::Redirecting(target) = navigation.state() {
            let href = target.href();
            info!(from = path, to = %href, reason = ?target.reason, "Redirecting");
            self.navigator.redirect(&href, RedirectOptions { replace: true });
        }

        navigation
    }

    /// Evaluate whatever the navigator is currently showing
    pub async fn navigate_current(&self) -> Navigation<P> {
        let path = self.navigator.current_path();
        self.navigate(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::RedirectReason;
    use crate::policy::EffectivePolicy;
    use crate::role::Role;
    use crate::routes::RouteParams;

    fn navigation() -> Navigation<&'static str> {
        Navigation::new(
            "/cart",
            Resolution {
                page: "cart",
                params: RouteParams::default(),
                policy: EffectivePolicy::Public,
                pattern: Some("/cart".to_string()),
            },
        )
    }

    #[test]
    fn pending_keeps_resolving() {
        let mut navigation = navigation();
        assert!(!navigation.apply(Decision::Pending));
        assert_eq!(navigation.state(), &NavigationState::Resolving);
    }

    #[test]
    fn leaves_resolving_exactly_once() {
        let mut navigation = navigation();
        let identity = Identity::new("u", "U", Role::User);

        assert!(navigation.apply(Decision::Render {
            identity: Some(identity.clone())
        }));
        let gate = AccessGate::default();
        let redirect = gate.authorize(None, &Role::ALL.into(), "/cart");
        assert!(!navigation.apply(redirect));

        assert_eq!(
            navigation.state(),
            &NavigationState::Authorized {
                identity: Some(identity)
            }
        );
    }

    #[test]
    fn redirect_is_terminal() {
        let mut navigation = navigation();
        let gate = AccessGate::default();
        navigation.apply(gate.authorize(None, &Role::ALL.into(), "/cart"));

        assert!(!navigation.apply(Decision::Render { identity: None }));
        let NavigationState::Redirecting(target) = navigation.state() else {
            panic!("expected redirect");
        };
        assert_eq!(target.reason, Some(RedirectReason::Unauthenticated));
    }
}

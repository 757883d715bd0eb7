//! Session state and the store that owns it
//!
//! The auth flow is the only writer; gates and pages read snapshots or
//! subscribe to changes.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::identity::{Identity, ProfilePayload};

/// What is currently known about the visitor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// A prior session is still being restored
    #[default]
    Resolving,
    Anonymous,
    Authenticated(Identity),
}

impl SessionState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Resolving)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }
}

impl From<Option<Identity>> for SessionState {
    fn from(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => SessionState::Authenticated(identity),
            None => SessionState::Anonymous,
        }
    }
}

/// Read/subscribe contract the gates depend on
pub trait SessionProvider {
    /// Consistent snapshot of the current session
    fn current(&self) -> SessionState;

    /// Receiver notified on every change
    fn subscribe(&self) -> watch::Receiver<SessionState>;
}

/// Wait until `receiver` reports a resolved session and return it
pub async fn wait_resolved(receiver: &mut watch::Receiver<SessionState>) -> SessionState {
    match receiver.wait_for(SessionState::is_resolved).await {
        Ok(state) => state.clone(),
        // Writer gone while still resolving; nobody can sign in anymore
        Err(_) => SessionState::Anonymous,
    }
}

/// Single-writer session store backed by a watch channel
#[derive(Debug, Clone)]
pub struct SessionStore {
    sender: Arc<watch::Sender<SessionState>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// A store that is still restoring a prior session
    pub fn new() -> Self {
        Self::with_state(SessionState::Resolving)
    }

    pub fn with_state(state: SessionState) -> Self {
        let (sender, _) = watch::channel(state);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Finish restoring: `Some` means a prior session was found
    pub fn resolve(&self, identity: Option<Identity>) {
        self.sender.send_replace(identity.into());
    }

    /// Finish restoring from a backend profile. Profiles with an unknown
    /// role or no id are treated as no session at all.
    pub fn restore_from_profile(&self, profile: Option<ProfilePayload>) -> Option<Identity> {
        let identity = profile.and_then(|profile| match Identity::try_from(profile) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!(error = %e, "Rejected restored profile");
                None
            }
        });

        self.resolve(identity.clone());
        identity
    }

    pub fn sign_in(&self, identity: Identity) {
        info!(user_id = %identity.id, role = %identity.role, "Signed in");
        self.sender.send_replace(SessionState::Authenticated(identity));
    }

    pub fn sign_out(&self) {
        let previous = self.sender.send_replace(SessionState::Anonymous);
        if let Some(identity) = previous.identity() {
            info!(user_id = %identity.id, "Signed out");
        }
    }

    /// Current session once restoration has finished
    pub async fn resolved(&self) -> SessionState {
        let mut receiver = self.sender.subscribe();
        wait_resolved(&mut receiver).await
    }
}

impl SessionProvider for SessionStore {
    fn current(&self) -> SessionState {
        self.sender.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    fn shopper() -> Identity {
        Identity::new("u-1", "Asha", Role::User)
    }

    #[test]
    fn starts_resolving() {
        let store = SessionStore::new();
        assert_eq!(store.current(), SessionState::Resolving);
        assert!(!store.current().is_resolved());
    }

    #[test]
    fn sign_in_and_out() {
        let store = SessionStore::with_state(SessionState::Anonymous);
        store.sign_in(shopper());
        assert_eq!(store.current().identity(), Some(&shopper()));

        store.sign_out();
        assert_eq!(store.current(), SessionState::Anonymous);
    }

    #[test]
    fn unknown_profile_role_resolves_anonymous() {
        let store = SessionStore::new();
        let restored = store.restore_from_profile(Some(ProfilePayload {
            id: Some("x".to_string()),
            role: "root".to_string(),
            ..Default::default()
        }));

        assert_eq!(restored, None);
        assert_eq!(store.current(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = SessionStore::new();
        let mut receiver = store.subscribe();

        store.resolve(Some(shopper()));
        receiver.changed().await.unwrap();
        assert!(receiver.borrow().is_authenticated());
    }

    #[tokio::test]
    async fn resolved_waits_for_restore() {
        let store = SessionStore::new();
        let writer = store.clone();

        let waiter = tokio::spawn(async move { store.resolved().await });
        tokio::task::yield_now().await;
        writer.resolve(None);

        assert_eq!(waiter.await.unwrap(), SessionState::Anonymous);
    }
}

//! Session context provider

use dioxus::prelude::*;
use storefront_access::{Identity, IdentityError, ProfilePayload, SessionProvider, SessionState, SessionStore};

use super::api::fetch_profile;

/// Session context shared by the entire app
///
/// `store` is the source of truth; `session` mirrors it so components
/// re-render when it changes.
#[derive(Clone)]
pub struct AuthContext {
    pub session: Signal<SessionState>,
    store: SessionStore,
}

impl AuthContext {
    pub fn identity(&self) -> Option<Identity> {
        self.session.read().identity().cloned()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Restore the session from the backend profile
    pub async fn refresh(&self) {
        match fetch_profile().await {
            Ok(profile) => {
                self.store.restore_from_profile(profile);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session restore failed, continuing signed out");
                self.store.resolve(None);
            }
        }
    }

    /// Record a successful sign-in or sign-up
    pub fn sign_in(&self, profile: ProfilePayload) -> Result<Identity, IdentityError> {
        let identity = Identity::try_from(profile)?;
        self.store.sign_in(identity.clone());
        self.sync();
        Ok(identity)
    }

    pub fn sign_out(&self) {
        self.store.sign_out();
        self.sync();
    }

    // Callers navigate right after signing in or out, so the next render
    // must already see the new state rather than wait for the mirror task.
    fn sync(&self) {
        let mut session = self.session;
        session.set(self.store.current());
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let store = use_hook(SessionStore::new);
    let session = use_signal(SessionState::default);

    let auth = AuthContext {
        session,
        store: store.clone(),
    };
    use_context_provider(|| auth.clone());

    // Mirror store changes into the signal
    use_future(move || {
        let store = store.clone();
        let mut session = session;
        async move {
            let mut receiver = store.subscribe();
            loop {
                let state = receiver.borrow_and_update().clone();
                session.set(state);
                if receiver.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    // Resolve the session once on load
    use_effect(move || {
        let auth = auth.clone();
        spawn(async move {
            auth.refresh().await;
        });
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

//! Navigation controller wired to a session store and a recording navigator

mod common;

use std::time::Duration;

use crate::common::{identity, table, RecordingNavigator};
use storefront_access::storefront::Page;
use storefront_access::{
    AccessController, AccessGate, NavigationState, Navigator, ProfilePayload, RedirectOptions, Role,
    SessionState, SessionStore,
};

fn controller(
    store: &SessionStore,
    navigator: &RecordingNavigator,
) -> AccessController<Page, SessionStore, RecordingNavigator> {
    AccessController::new(table(), AccessGate::default(), store.clone(), navigator.clone())
}

#[test]
fn begin_stays_resolving_while_session_restores() {
    let store = SessionStore::new();
    let navigator = RecordingNavigator::at("/dashboard/cart");

    let navigation = controller(&store, &navigator).begin("/dashboard/cart");

    assert_eq!(navigation.state(), &NavigationState::Resolving);
    assert_eq!(navigation.resolution.page, Page::Cart);
    assert!(navigator.redirects().is_empty());
}

#[tokio::test]
async fn restored_session_is_not_bounced_to_sign_in() {
    let store = SessionStore::new();
    let navigator = RecordingNavigator::at("/dashboard/cart");
    let controller = controller(&store, &navigator);

    let writer = store.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        writer.resolve(Some(identity(Role::User)));
    });

    let navigation = controller.navigate_current().await;

    assert_eq!(
        navigation.state(),
        &NavigationState::Authorized {
            identity: Some(identity(Role::User))
        }
    );
    assert!(navigator.redirects().is_empty());
}

#[tokio::test]
async fn anonymous_visitor_is_redirected_with_return_to() {
    let store = SessionStore::new();
    let navigator = RecordingNavigator::at("/checkout");
    let controller = controller(&store, &navigator);

    let writer = store.clone();
    tokio::spawn(async move {
        writer.restore_from_profile(None);
    });

    let navigation = controller.navigate("/checkout").await;

    assert!(matches!(navigation.state(), NavigationState::Redirecting(_)));
    assert_eq!(
        navigator.redirects(),
        vec![(
            "/signin?return_to=%2Fcheckout".to_string(),
            RedirectOptions { replace: true }
        )]
    );
    assert_eq!(navigator.current_path(), "/signin?return_to=%2Fcheckout");
}

#[tokio::test]
async fn sign_in_then_resume_requested_page() {
    let store = SessionStore::with_state(SessionState::Anonymous);
    let navigator = RecordingNavigator::at("/ad/42");
    let controller = controller(&store, &navigator);

    controller.navigate("/ad/42").await;
    let return_to = controller
        .gate()
        .return_to_from_query(navigator.current_path().split_once('?').unwrap().1);
    assert_eq!(return_to.as_deref(), Some("/ad/42"));

    let profile: ProfilePayload =
        serde_json::from_str(r#"{"_id":"u-9","name":"Asha","role":"user"}"#).unwrap();
    store.sign_in(profile.try_into().unwrap());

    let resumed = controller.gate().resume_path(return_to.as_deref());
    let navigation = controller.navigate(&resumed).await;
    assert!(matches!(navigation.state(), NavigationState::Authorized { .. }));
    assert_eq!(navigation.resolution.params.get("id"), Some("42"));
}

#[tokio::test]
async fn signed_in_visitor_leaves_sign_in_page() {
    let store = SessionStore::with_state(SessionState::Authenticated(identity(Role::Admin)));
    let navigator = RecordingNavigator::at("/signin");

    let navigation = controller(&store, &navigator).navigate_current().await;

    assert!(matches!(navigation.state(), NavigationState::Redirecting(_)));
    assert_eq!(navigator.redirects()[0].0, "/dashboard");
}

#[tokio::test]
async fn sign_out_starts_fresh_evaluation() {
    let store = SessionStore::with_state(SessionState::Authenticated(identity(Role::User)));
    let navigator = RecordingNavigator::at("/addresses");
    let controller = controller(&store, &navigator);

    let first = controller.navigate("/addresses").await;
    assert!(first.is_settled());
    assert!(matches!(first.state(), NavigationState::Authorized { .. }));

    store.sign_out();
    let second = controller.navigate("/addresses").await;
    assert!(matches!(second.state(), NavigationState::Redirecting(_)));

    // The earlier attempt is untouched
    assert!(matches!(first.state(), NavigationState::Authorized { .. }));
}

//! Sign-in page

use dioxus::prelude::*;

use crate::auth::{sign_in, use_auth};
use crate::config;
use crate::routes::Route;
use crate::types::SignInRequest;

/// Sign-in form. After success the visitor resumes the page that sent
/// them here, or lands on the dashboard.
#[component]
pub fn SignIn(return_to: String) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let request = SignInRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        if request.email.is_empty() || request.password.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        let auth = auth.clone();
        let return_to = urlencoding::decode(&return_to)
            .map(|value| value.into_owned())
            .ok();

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match sign_in(&request).await {
                Ok(profile) => match auth.sign_in(profile) {
                    Ok(identity) => {
                        let target = config::gate().resume_path(return_to.as_deref());
                        tracing::info!(user_id = %identity.id, to = %target, "Signed in");
                        navigator.replace(Route::from_href(&target));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                },
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "flex items-center justify-center px-4 py-16",
            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                h1 { class: "text-2xl font-bold text-gray-900 mb-6 text-center", "Sign in" }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Email" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Password" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-indigo-600 text-white py-2 rounded-md hover:bg-indigo-700 disabled:opacity-50",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "mt-6 text-center text-sm text-gray-600",
                    "New here? "
                    Link { to: Route::SignUp {}, class: "text-indigo-700 hover:underline", "Create an account" }
                }
            }
        }
    }
}

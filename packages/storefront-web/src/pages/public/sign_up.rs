//! Sign-up page

use dioxus::prelude::*;
use storefront_access::Role;

use crate::auth::{sign_up, use_auth};
use crate::config;
use crate::routes::Route;
use crate::types::SignUpRequest;

/// Roles a visitor may pick for themselves
const SELF_SERVICE_ROLES: [Role; 2] = [Role::User, Role::Advertiser];

#[component]
pub fn SignUp() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::User);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let request = SignUpRequest {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            role: role(),
        };
        if request.name.is_empty() || request.email.is_empty() {
            error.set(Some("Please enter your name and email".to_string()));
            return;
        }
        if request.password.len() < 6 {
            error.set(Some("Password must be at least 6 characters".to_string()));
            return;
        }

        let auth = auth.clone();
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match sign_up(&request).await {
                Ok(profile) => match auth.sign_in(profile) {
                    Ok(identity) => {
                        tracing::info!(user_id = %identity.id, role = %identity.role, "Account created");
                        let landing = &config::gate().config().landing_path;
                        navigator.replace(Route::from_href(landing));
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

                h1 { class: "text-2xl font-bold text-gray-900 mb-6 text-center", "Create an account" }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    TextField { label: "Name", kind: "text", value: name(), disabled: is_pending(), on_input: move |v| name.set(v) }
                    TextField { label: "Email", kind: "email", value: email(), disabled: is_pending(), on_input: move |v| email.set(v) }
                    TextField { label: "Password", kind: "password", value: password(), disabled: is_pending(), on_input: move |v| password.set(v) }

                    fieldset {
                        class: "mb-6",
                        legend { class: "block text-sm font-medium text-gray-700 mb-2", "I want to" }
                        for option in SELF_SERVICE_ROLES {
                            label {
                                key: "{option}",
                                class: "flex items-center gap-2 text-sm text-gray-700 mb-1",
                                input {
                                    r#type: "radio",
                                    name: "role",
                                    checked: role() == option,
                                    onchange: move |_| role.set(option),
                                }
                                "{choice_label(option)}"
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full bg-indigo-600 text-white py-2 rounded-md hover:bg-indigo-700 disabled:opacity-50",
                        disabled: is_pending(),
                        if is_pending() { "Creating account..." } else { "Sign up" }
                    }
                }

                p {
                    class: "mt-6 text-center text-sm text-gray-600",
                    "Already have an account? "
                    Link {
                        to: Route::SignIn { return_to: String::new() },
                        class: "text-indigo-700 hover:underline",
                        "Sign in"
                    }
                }
            }
        }
    }
}

fn choice_label(role: Role) -> &'static str {
    match role {
        Role::Advertiser => "Sell items",
        _ => "Shop",
    }
}

#[component]
fn TextField(
    label: &'static str,
    kind: &'static str,
    value: String,
    disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "mb-4",
            label { class: "block text-sm font-medium text-gray-700 mb-2", "{label}" }
            input {
                r#type: kind,
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                disabled: disabled
            }
        }
    }
}

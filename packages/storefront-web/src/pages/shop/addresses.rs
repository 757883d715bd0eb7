//! Saved addresses: list, add, edit, delete

use dioxus::prelude::*;

use crate::api::{add_address, delete_address, fetch_addresses, update_address};
use crate::components::{ConfirmDialog, EmptyState, ErrorNotice, LoadingSpinner};
use crate::state::PendingDelete;
use crate::types::{Address, AddressForm};

const FIELDS: [(&str, &str); 5] = [
    ("label", "Label (Home, Work...)"),
    ("city", "City"),
    ("state", "State"),
    ("postalCode", "Postal Code"),
    ("mobileNo", "Mobile Number"),
];

fn field_mut<'a>(form: &'a mut AddressForm, name: &str) -> Option<&'a mut String> {
    match name {
        "label" => Some(&mut form.label),
        "city" => Some(&mut form.city),
        "state" => Some(&mut form.state),
        "postalCode" => Some(&mut form.postal_code),
        "mobileNo" => Some(&mut form.mobile_no),
        _ => None,
    }
}

fn field_value(form: &AddressForm, name: &str) -> String {
    match name {
        "label" => form.label.clone(),
        "city" => form.city.clone(),
        "state" => form.state.clone(),
        "postalCode" => form.postal_code.clone(),
        "mobileNo" => form.mobile_no.clone(),
        _ => String::new(),
    }
}

#[component]
pub fn Addresses() -> Element {
    let mut addresses = use_resource(fetch_addresses);
    let mut form = use_signal(AddressForm::default);
    // Id of the address being edited; `None` adds a new one
    let mut editing = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let current = form();
        if let Err(message) = current.validate() {
            error.set(Some(message.to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            let result = match editing() {
                Some(id) => update_address(&id, &current).await,
                None => add_address(&current).await,
            };
            match result {
                Ok(()) => {
                    form.set(AddressForm::default());
                    editing.set(None);
                    addresses.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Saving address failed");
                    error.set(Some(e.to_string()));
                }
            }

            is_pending.set(false);
        });
    };

    let handle_edit = move |address: Address| {
        form.set(AddressForm::from(&address));
        editing.set(Some(address.id));
    };

    let mut pending_delete = use_signal(PendingDelete::default);
    let handle_delete = move |id: String| {
        spawn(async move {
            match delete_address(&id).await {
                Ok(()) => addresses.restart(),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let list = match &*addresses.read() {
        None => rsx! { div { class: "py-12 flex justify-center", LoadingSpinner {} } },
        Some(Err(e)) => rsx! { ErrorNotice { message: e.to_string() } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { title: "No saved addresses".to_string() }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                for address in list.iter().cloned() {
                    AddressCard {
                        key: "{address.id}",
                        address: address,
                        on_edit: handle_edit,
                        on_delete: move |id: String| pending_delete.write().ask(id)
                    }
                }
            }
        },
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Your addresses" }

            if let Some(err) = error() {
                ErrorNotice { message: err }
            }

            form {
                class: "bg-white rounded-lg border border-gray-200 p-6 mb-8 grid grid-cols-1 md:grid-cols-2 gap-4",
                onsubmit: handle_submit,
                for (name, placeholder) in FIELDS {
                    input {
                        key: "{name}",
                        r#type: "text",
                        placeholder: placeholder,
                        value: field_value(&form.read(), name),
                        oninput: move |e| {
                            if let Some(field) = field_mut(&mut form.write(), name) {
                                *field = e.value();
                            }
                        },
                        class: "px-3 py-2 border border-gray-300 rounded-md",
                    }
                }
                div {
                    class: "md:col-span-2 flex gap-2",
                    button {
                        r#type: "submit",
                        class: "bg-indigo-600 text-white px-5 py-2 rounded-md hover:bg-indigo-700 disabled:opacity-50",
                        disabled: is_pending(),
                        if editing().is_some() { "Update address" } else { "Add address" }
                    }
                    if editing().is_some() {
                        button {
                            r#type: "button",
                            class: "px-5 py-2 rounded-md border border-gray-300",
                            onclick: move |_| {
                                form.set(AddressForm::default());
                                editing.set(None);
                            },
                            "Cancel"
                        }
                    }
                }
            }

            {list}

            if pending_delete.read().is_open() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this address?".to_string(),
                    on_confirm: move |_| {
                        let id = pending_delete.write().confirm();
                        if let Some(id) = id {
                            handle_delete(id);
                        }
                    },
                    on_cancel: move |_| pending_delete.write().cancel()
                }
            }
        }
    }
}

#[component]
fn AddressCard(address: Address, on_edit: EventHandler<Address>, on_delete: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-4",
            p { class: "font-semibold text-lg text-gray-800", "{address.label}" }
            p { class: "text-gray-600", "{address.summary()}" }
            p { class: "text-gray-600", "\u{1F4DE} {address.mobile_no}" }
            div {
                class: "mt-3 flex gap-3 text-sm",
                button {
                    class: "text-indigo-700 hover:underline",
                    onclick: {
                        let address = address.clone();
                        move |_| on_edit.call(address.clone())
                    },
                    "Edit"
                }
                button {
                    class: "text-red-700 hover:underline",
                    onclick: {
                        let id = address.id.clone();
                        move |_| on_delete.call(id.clone())
                    },
                    "Delete"
                }
            }
        }
    }
}

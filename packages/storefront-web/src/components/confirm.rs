//! Yes/no prompt shown before destructive actions

use dioxus::prelude::*;

#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/40",
            role: "dialog",
            div {
                class: "bg-white rounded-lg shadow-lg p-6 max-w-sm w-full mx-4",
                p { class: "text-gray-900 mb-6", "{message}" }
                div {
                    class: "flex justify-end gap-2",
                    button {
                        class: "text-sm px-4 py-2 rounded border border-gray-300 hover:bg-gray-50",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "text-sm px-4 py-2 rounded bg-red-600 text-white hover:bg-red-700",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

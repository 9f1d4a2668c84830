// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

#[component]
pub fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "error-container",
            p { class: "error-message", "{message}" }
            p {
                "The hosting page must define "
                code { "window.__APP_CONFIG" }
                " before this application loads."
            }
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! SSO entry button.
//!
//! Composes the login URL on the API and renders it as an anchor-wrapped
//! button. When the current page carries an `invite_token` query parameter
//! the whole query string is forwarded so the external SSO flow can tie the
//! resulting session back to the pending invitation.

use dioxus::prelude::*;
use web_sys::UrlSearchParams;

use crate::components::icons::lock::LockIcon;
use crate::constants::sso_login_url;
use crate::i18n::use_translator;
use crate::utils::{current_query_string, purify_href};

/// Query parameter identifying a pending invitation.
const INVITE_TOKEN_PARAM: &str = "invite_token";

/// Compose the href for the SSO entry point.
///
/// The base URL is purified before any query string is appended. The query
/// string is forwarded in full, not just the invite token, so the SSO flow
/// sees every parameter the sign-in page was opened with.
pub fn sso_entry_href(login_url: &str, search: &str) -> String {
    let url = purify_href(login_url);
    let search = search.strip_prefix('?').unwrap_or(search);
    if search.is_empty() {
        return url;
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return url;
    };
    if params.has(INVITE_TOKEN_PARAM) {
        format!("{url}?{}", String::from(params.to_string()))
    } else {
        url
    }
}

#[component]
pub fn SsoSignInButton(#[props(default = false)] disabled: bool) -> Element {
    let t = use_translator();

    let href = match sso_login_url() {
        Ok(login_url) => sso_entry_href(&login_url, &current_query_string()),
        Err(e) => {
            log::error!("Failed to build the SSO login URL: {e}");
            String::new()
        }
    };
    // An unusable link renders the same as an explicitly disabled button.
    let disabled = disabled || href.is_empty();
    let class = if disabled {
        "sso-auth-link disabled"
    } else {
        "sso-auth-link"
    };
    let label = t.translated_text("login.withSso");

    rsx! {
        div { class: "sso-auth",
            a {
                class: class,
                href: if !disabled { href },
                aria_disabled: if disabled { "true" },
                onclick: move |evt: MouseEvent| {
                    if disabled {
                        evt.prevent_default();
                    }
                },
                button {
                    class: "sso-sign-in-button",
                    disabled: disabled,
                    LockIcon {}
                    span { class: "sso-sign-in-button-label", "{label}" }
                }
            }
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sign-in page.
//!
//! Hosts the SSO entry button. The button is disabled when the deployment
//! has not enabled SSO, so the page stays rendered (and translated) either
//! way instead of blanking out.

use dioxus::prelude::*;

use crate::components::sso_sign_in_button::SsoSignInButton;
use crate::constants::sso_enabled;
use crate::context::{save_language_to_storage, LanguageCtx};
use crate::i18n::{use_translator, Language};

#[component]
pub fn SignIn() -> Element {
    let t = use_translator();
    let mut language_ctx = use_context::<LanguageCtx>();

    let sso_available = sso_enabled().unwrap_or_else(|e| {
        log::error!("Failed to read SSO availability from the runtime config: {e}");
        false
    });

    let title = t.translated_text("login.title");
    let unavailable = t.translated_text("login.ssoUnavailable");
    let agreement = t.translated_text("login.agreement");
    let terms = t.translated_text("login.terms");
    let and = t.translated_text("login.and");
    let privacy = t.translated_text("login.privacy");

    rsx! {
        div { class: "signin-container",
            div { class: "signin-card",
                h1 { class: "signin-title", "{title}" }

                SsoSignInButton { disabled: !sso_available }

                if !sso_available {
                    p { class: "signin-hint", "{unavailable}" }
                }

                p { class: "signin-footer",
                    "{agreement} "
                    a { href: "/terms", "{terms}" }
                    " {and} "
                    a { href: "/privacy", "{privacy}" }
                }

                select {
                    class: "signin-language",
                    onchange: move |evt: FormEvent| {
                        if let Some(language) = Language::from_tag(&evt.value()) {
                            save_language_to_storage(language);
                            language_ctx.set(language);
                        }
                    },
                    for language in [Language::En, Language::Es, Language::Fr] {
                        option {
                            value: language.tag(),
                            selected: language == t.language,
                            "{language.label()}"
                        }
                    }
                }
            }
        }
    }
}

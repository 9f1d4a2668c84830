// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! This module centralises shared state that needs to be accessed across
//! the component tree through Dioxus's context system.

use dioxus::prelude::*;

use crate::constants::default_language;
use crate::i18n::Language;

/// Type alias used throughout the app when accessing the language context.
///
/// `Signal<Language>` allows both read-only access and mutation (the
/// sign-in page's language selector writes it).
pub type LanguageCtx = Signal<Language>;

const STORAGE_KEY: &str = "signin_language";

/// Read the language preference from `window.localStorage` (if present).
pub fn load_language_from_storage() -> Option<Language> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|tag| Language::from_tag(&tag))
}

/// Persist the language preference to `localStorage` so that it survives
/// page reloads.
pub fn save_language_to_storage(language: Language) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, language.tag());
    }
}

/// Resolve the language for this session: stored preference first, then the
/// browser's reported language, then the configured default, then English.
pub fn detect_language() -> Language {
    load_language_from_storage()
        .or_else(|| {
            web_sys::window()
                .and_then(|w| w.navigator().language())
                .and_then(|tag| Language::from_tag(&tag))
        })
        .or_else(|| default_language().and_then(|tag| Language::from_tag(&tag)))
        .unwrap_or(Language::En)
}

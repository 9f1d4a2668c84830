// SPDX-License-Identifier: MIT OR Apache-2.0

//! Translation lookup.
//!
//! Phrases are keyed by stable dotted ids. Lookups fall back to the English
//! phrase, then to the id itself, so an incomplete translation never breaks
//! rendering.

use dioxus::prelude::*;

use crate::context::LanguageCtx;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// How to display the language in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
        }
    }

    /// Parse a BCP 47-ish tag, tolerating case and region subtags
    /// (`es-MX` resolves to `Es`).
    pub fn from_tag(tag: &str) -> Option<Language> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Translator {
    pub language: Language,
}

impl Translator {
    pub fn translated_text(&self, id: &str) -> String {
        lookup(self.language, id)
            .or_else(|| lookup(Language::En, id))
            .unwrap_or(id)
            .to_string()
    }
}

/// Resolve the translator from the language context. Components rendered
/// outside a provider get English.
pub fn use_translator() -> Translator {
    let language = try_use_context::<LanguageCtx>()
        .map(|language| *language.read())
        .unwrap_or_default();
    Translator { language }
}

fn lookup(language: Language, id: &str) -> Option<&'static str> {
    let phrases: &[(&str, &str)] = match language {
        Language::En => EN,
        Language::Es => ES,
        Language::Fr => FR,
    };
    phrases
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, phrase)| *phrase)
}

const EN: &[(&str, &str)] = &[
    ("login.title", "Sign in"),
    ("login.withSso", "Sign in with SSO"),
    ("login.ssoUnavailable", "Single sign-on is not available"),
    ("login.agreement", "By signing in, you agree to our"),
    ("login.terms", "Terms of Service"),
    ("login.and", "and"),
    ("login.privacy", "Privacy Policy"),
];

const ES: &[(&str, &str)] = &[
    ("login.title", "Iniciar sesión"),
    ("login.withSso", "Iniciar sesión con SSO"),
    ("login.ssoUnavailable", "El inicio de sesión único no está disponible"),
    ("login.agreement", "Al iniciar sesión, aceptas nuestros"),
    ("login.terms", "Términos del servicio"),
    ("login.and", "y la"),
    ("login.privacy", "Política de privacidad"),
];

// TODO: have login.ssoUnavailable reviewed by a native speaker before adding
// it here; until then it falls back to English.
const FR: &[(&str, &str)] = &[
    ("login.title", "Connexion"),
    ("login.withSso", "Se connecter avec SSO"),
    ("login.agreement", "En vous connectant, vous acceptez nos"),
    ("login.terms", "Conditions d'utilisation"),
    ("login.and", "et notre"),
    ("login.privacy", "Politique de confidentialité"),
];

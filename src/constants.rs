// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
    #[serde(rename = "ssoEnabled")]
    pub sso_enabled: String,
    #[serde(rename = "defaultLanguage")]
    #[serde(default)]
    pub default_language: Option<String>,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().expect("window");
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Route on the API through which the external SSO flow is entered.
const SSO_LOGIN_ROUTE: &str = "/oauth/login/sso";

pub fn api_base_url() -> Result<String, String> {
    app_config().map(|c| c.api_base_url)
}

pub fn sso_login_url() -> Result<String, String> {
    api_base_url().map(|url| format!("{url}{SSO_LOGIN_ROUTE}"))
}

pub fn sso_enabled() -> Result<bool, String> {
    app_config().map(|c| truthy(Some(c.sso_enabled.as_str())))
}

pub fn default_language() -> Option<String> {
    app_config()
        .ok()
        .and_then(|c| c.default_language)
        .filter(|s| !s.is_empty())
}

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}

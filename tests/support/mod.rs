// Shared test harness for signin-ui component tests.
//
// Provides mount/cleanup helpers, runtime-config injection, and Dioxus
// rendering helpers so that individual test files stay focused on
// assertions rather than boilerplate.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Dioxus rendering helper
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element and wait one
/// animation frame for the renderer to flush its initial mutations.
///
/// Use this in `#[wasm_bindgen_test] async fn` tests:
///
/// ```ignore
/// let mount = create_mount_point();
/// render_into(&mount, || rsx! { MyComponent { prop: "value" } });
/// yield_now().await;
/// // assert on mount.query_selector(...)
/// cleanup(&mount);
/// ```
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Yield to the browser event loop so Dioxus can process its initial render.
pub async fn yield_now() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        // requestAnimationFrame fires after the current microtask queue is
        // drained and before the next paint, giving Dioxus time to apply its
        // mutations.
        gloo_utils::window()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
    // Second yield to ensure mutations are flushed
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        gloo_utils::window()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` object with all required `RuntimeConfig`
/// fields and SSO enabled.
pub fn inject_app_config() {
    inject_app_config_with("http://test:8080", "true", "en");
}

/// Inject a `window.__APP_CONFIG` with explicit values.
pub fn inject_app_config_with(api_base_url: &str, sso_enabled: &str, default_language: &str) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("apiBaseUrl", &api_base_url.into());
    set("ssoEnabled", &sso_enabled.into());
    set("defaultLanguage", &default_language.into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Query-string control
// ---------------------------------------------------------------------------

/// Point the page at the given query string (e.g. `"?invite_token=abc"`)
/// without navigating, so components reading `location.search` see it.
pub fn set_query_string(search: &str) {
    let path = format!("/{search}");
    gloo_utils::window()
        .history()
        .unwrap()
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
        .unwrap();
}

/// Reset the page URL to `/` with no query string.
pub fn clear_query_string() {
    set_query_string("");
}

// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;
use log::Level;

use signin_ui::components::config_error::ConfigError;
use signin_ui::constants::app_config;
use signin_ui::context::detect_language;
use signin_ui::routing::Route;

/// Route switch component that handles routing
#[component]
fn RouteSwitch() -> Element {
    // Check config validity
    if let Err(e) = app_config() {
        return rsx! {
            ConfigError { message: e }
        };
    }

    rsx! {
        Router::<Route> {}
    }
}

/// App root component
#[component]
fn App() -> Element {
    // Initialize language state from localStorage / navigator / config
    let language = use_signal(detect_language);

    // Provide language context to the entire app
    use_context_provider(|| language);

    rsx! {
        RouteSwitch {}
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    let _ = console_log::init_with_level(level);

    console_error_panic_hook::set_once();
    dioxus::launch(App);
}

//! Web UI for ott-tagger
//!
//! A Yew-based page for uploading a CSV metadata file and viewing it as a
//! table.

mod app;
mod components;
mod view_model;

pub use view_model::{Status, ViewModel};

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}

//! Lab Dashboard - Frontend Rust/Leptos Application
//!
//! A WebAssembly dashboard for sending instrument data files to the
//! OriginPro plotting backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title)                                              │
//! │  OptionsPanel (Create PowerPoint / Save Origin Project)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Dashboard                                                   │
//! │  ├── DewarDualForm                                           │
//! │  ├── Merged data group (collapsible ExperimentForm)          │
//! │  ├── Current effect                                          │
//! │  ├── PPMS Measurements (ExperimentForm x4)                   │
//! │  └── MPMS Measurements (ExperimentForm x3)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Form state, validation and reply handling live in the `labdash` core
//! crate; this crate renders it and talks to the browser.
//!
//! # Modules
//!
//! - [`config`] - Backend address
//! - [`components`] - UI components
//! - [`services`] - Browser file reading and upload

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use components::*;
pub use config::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🧪 Lab Dashboard - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=PAGE_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Dashboard/>
                </Routes>
            </main>
        </Router>
    }
}

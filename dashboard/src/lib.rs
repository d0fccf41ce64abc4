//! ==============================================================================
//! lib.rs - Expense Tracker Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front-end for a personal expense tracker. lists expenses
//!     from the server, summarises spend per category and submits new
//!     entries through a small form.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - all flow logic lives in shared::Controller; this crate supplies
//!       the http client (api.rs) and the reactive page state (state.rs)
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod config;
mod state;

use api::HttpClient;
use components::{ExpenseForm, ExpenseList, Header, SummaryList};
use config::AppConfig;
use shared::Controller;
use state::{new_expense_id, DashboardState};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    _ = console_log::init_with_level(config.log_level);
    log::info!(
        "expense dashboard starting (api base: {:?}, level: {})",
        config.api_base,
        config.log_level
    );

    mount_to_body(move || view! { <App config=config /> });
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let state = DashboardState::new();
    let controller = Controller::new(HttpClient::new(config.api_base), state, new_expense_id);

    // initial load on mount
    let initial = controller.clone();
    Effect::new(move || {
        let controller = initial.clone();
        leptos::task::spawn_local(async move {
            controller.load_and_render().await;
        });
    });

    view! {
        <Title text="Expense Tracker" />
        <Header />
        <div class="container">
            <ExpenseForm controller=controller.clone() />
            <ExpenseList controller=controller currency=config.currency.clone() />
            <SummaryList state=state currency=config.currency />
        </div>
    }
}

//! Pedidos admin console UI
//!
//! Leptos CSR front end over the `pedidos` core:
//! - `console`: context wiring the core's `OrderManager` into signals
//! - `web`: browser `HttpClient` / `TokenStore` implementations
//! - `components`: views, rendered from `ConsoleState` only

mod console;
mod components {
    pub mod confirm_delete;
    pub mod dashboard;
    pub mod detail_modal;
    mod icons;
    pub mod login;
    pub mod order_form;
    pub mod order_table;
}
pub mod panic_hook;
pub(crate) mod web;

use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::console::provide_console;

use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let console = provide_console();
    let state = console.state;

    // The whole UI is gated on the session; there is no routing.
    view! {
        <Show
            when=move || state.with(|s| s.authenticated)
            fallback=|| view! { <LoginPage /> }
        >
            <DashboardPage />
        </Show>
    }
}

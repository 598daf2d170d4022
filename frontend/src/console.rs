//! Console context
//!
//! One `OrderManager` per page, shared through Leptos context. The manager
//! pushes every state change into an `RwSignal`, so views only read the
//! signal and never hold their own copies of orders or session state.

use crate::web::{BrowserTokenStore, FetchHttpClient};
use leptos::prelude::*;
use leptos::task::spawn_local;
use pedidos::{ApiConfig, ConsoleResult, ConsoleState, OrderForm, OrderManager, PedidosApi, Session};
use std::future::Future;

pub type Manager = OrderManager<FetchHttpClient, BrowserTokenStore>;

#[derive(Clone, Copy)]
pub struct ConsoleContext {
    manager: StoredValue<Manager>,
    /// Latest snapshot of the manager's state
    pub state: RwSignal<ConsoleState>,
}

impl ConsoleContext {
    fn new(manager: Manager) -> Self {
        let state = RwSignal::new(manager.snapshot());
        manager.subscribe(move |snapshot| state.set(snapshot.clone()));
        Self {
            manager: StoredValue::new(manager),
            state,
        }
    }

    /// Runs a synchronous manager operation.
    pub fn with<R>(&self, f: impl FnOnce(&Manager) -> R) -> R {
        self.manager.with_value(f)
    }

    /// Spawns an asynchronous manager operation on the browser event loop.
    ///
    /// Outcomes are already reflected in `state`; the returned error is only
    /// logged here.
    pub fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(Manager) -> Fut + 'static,
        Fut: Future<Output = ConsoleResult<()>> + 'static,
    {
        let manager = self.manager.get_value();
        spawn_local(async move {
            if let Err(e) = op(manager).await {
                log::debug!("{}", e);
            }
        });
    }

    pub fn edit_form(&self, f: impl FnOnce(&mut OrderForm)) {
        self.with(|m| m.edit_form(f));
    }
}

/// Builds the manager from the persisted session and provides it as context.
///
/// A token left in storage by a previous visit unlocks the console and
/// triggers the initial load right away.
pub fn provide_console() -> ConsoleContext {
    let api = PedidosApi::new(FetchHttpClient, ApiConfig::resolve(None));
    log::info!("backend: {}", api.config().base_url);

    let ctx = ConsoleContext::new(OrderManager::new(api, Session::restore(BrowserTokenStore)));
    provide_context(ctx);
    ctx.run(|m| async move { m.start().await });
    ctx
}

pub fn use_console() -> ConsoleContext {
    expect_context::<ConsoleContext>()
}

//! Order manager
//!
//! Owns the console state (list, average, filter, form, selection) and keeps
//! it in sync with the backend. Every mutation is followed by a full
//! list + average refresh; nothing is patched locally.

use crate::api::PedidosApi;
use crate::error::{ConsoleError, ConsoleResult};
use crate::form::OrderForm;
use crate::request::HttpClient;
use crate::session::{Session, TokenStore};
use pedidos_shared::{Estado, Pedido, PedidoId, format_total};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

// =========================================================
// User-visible messages
// =========================================================

pub const MSG_INVALID_CREDENTIALS: &str = "Credenciales inválidas";
pub const MSG_CONNECTION_ERROR: &str = "Error de conexión con el backend.";
pub const MSG_SAVE_ERROR: &str = "Error al guardar registro.";
pub const MSG_DELETE_ERROR: &str = "Error al eliminar registro.";

// =========================================================
// Console state
// =========================================================

/// Everything the UI renders. Views derive from this only.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleState {
    pub authenticated: bool,
    /// Header name of the active session
    pub username: String,
    pub pedidos: Vec<Pedido>,
    pub promedio: f64,
    pub loading: bool,
    /// Single transient error banner
    pub banner: Option<String>,
    pub filter: Option<Estado>,
    pub form: OrderForm,
    /// Record being edited; `None` means the form creates
    pub editing: Option<PedidoId>,
    /// Record shown in the detail view
    pub selected: Option<Pedido>,
    /// Record awaiting delete confirmation
    pub pending_delete: Option<PedidoId>,
}

impl ConsoleState {
    fn locked() -> Self {
        Self {
            authenticated: false,
            username: String::new(),
            pedidos: Vec::new(),
            promedio: 0.0,
            loading: false,
            banner: None,
            filter: None,
            form: OrderForm::blank(),
            editing: None,
            selected: None,
            pending_delete: None,
        }
    }

    pub fn count(&self) -> usize {
        self.pedidos.len()
    }

    pub fn display_promedio(&self) -> String {
        format_total(self.promedio)
    }

    pub fn find(&self, id: PedidoId) -> Option<&Pedido> {
        self.pedidos.iter().find(|p| p.id == id)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::locked()
    }
}

type Listener = Arc<dyn Fn(&ConsoleState) + Send + Sync>;

// =========================================================
// Manager
// =========================================================

/// Session-guarded CRUD orchestration over `PedidosApi`.
///
/// Cheap to clone; clones share state, session and subscribers.
pub struct OrderManager<C: HttpClient, S: TokenStore> {
    api: Arc<PedidosApi<C>>,
    session: Session<S>,
    state: Arc<Mutex<ConsoleState>>,
    /// Ticket of the latest refresh; older results are dropped
    refresh_seq: Arc<AtomicU64>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl<C: HttpClient, S: TokenStore> Clone for OrderManager<C, S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session.clone(),
            state: self.state.clone(),
            refresh_seq: self.refresh_seq.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

impl<C: HttpClient, S: TokenStore> OrderManager<C, S> {
    pub fn new(api: PedidosApi<C>, session: Session<S>) -> Self {
        let mut state = ConsoleState::locked();
        if session.is_active() {
            state.authenticated = true;
            state.username = session.display_name();
            // The initial load is on its way once `start` runs.
            state.loading = true;
        }

        Self {
            api: Arc::new(api),
            session,
            state: Arc::new(Mutex::new(state)),
            refresh_seq: Arc::new(AtomicU64::new(0)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn api(&self) -> &PedidosApi<C> {
        &self.api
    }

    // --- State plumbing ---

    fn lock(&self) -> MutexGuard<'_, ConsoleState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn snapshot(&self) -> ConsoleState {
        self.lock().clone()
    }

    /// Registers an observer called with a fresh snapshot after every change.
    pub fn subscribe(&self, listener: impl Fn(&ConsoleState) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Arc::new(listener));
    }

    /// Applies `f` to the state, then notifies subscribers outside the lock.
    fn update<R>(&self, f: impl FnOnce(&mut ConsoleState) -> R) -> R {
        let (out, snapshot) = {
            let mut state = self.lock();
            let out = f(&mut state);
            (out, state.clone())
        };

        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        for listener in listeners {
            listener(&snapshot);
        }
        out
    }

    fn require_token(&self, operation: &str) -> ConsoleResult<String> {
        self.session
            .token()
            .ok_or_else(|| ConsoleError::locked().in_op(operation))
    }

    /// Routes a backend failure: authorization errors end the session,
    /// everything else becomes the given banner.
    fn fail(&self, err: ConsoleError, banner: &str) -> ConsoleError {
        if err.is_unauthorized() {
            log::warn!("backend rejected the session, logging out: {}", err);
            self.logout();
        } else {
            log::warn!("{}", err);
            self.update(|s| s.banner = Some(banner.to_string()));
        }
        err
    }

    // =========================================================
    // Session gate
    // =========================================================

    /// Loads data for a session restored from storage.
    pub async fn start(&self) -> ConsoleResult<()> {
        if self.session.is_active() {
            self.refresh().await
        } else {
            Ok(())
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> ConsoleResult<()> {
        let username = username.trim();
        let token = match self.api.login(username, password).await {
            Ok(token) => token,
            Err(e) => {
                log::warn!("login failed for '{}': {}", username, e);
                self.update(|s| s.banner = Some(MSG_INVALID_CREDENTIALS.to_string()));
                return Err(e.in_op("session.login"));
            }
        };

        self.session.begin(username, &token);
        let display = self.session.display_name();
        self.update(|s| {
            s.authenticated = true;
            s.username = display;
            s.banner = None;
        });
        log::info!("session opened for '{}'", username);

        // A failed first load is reported through the banner; the login stands.
        let _ = self.refresh().await;
        Ok(())
    }

    /// Clears the token and every piece of order state.
    pub fn logout(&self) {
        self.session.end();
        // Invalidate in-flight refreshes so they cannot repopulate the list.
        self.refresh_seq.fetch_add(1, Ordering::SeqCst);
        self.update(|s| *s = ConsoleState::locked());
        log::info!("session closed");
    }

    // =========================================================
    // Reads
    // =========================================================

    /// Fetches list (current filter) and average concurrently.
    ///
    /// Either failing fails the whole refresh and leaves the last list in
    /// place. Only the most recently issued refresh may write its result.
    pub async fn refresh(&self) -> ConsoleResult<()> {
        let token = self.require_token("orders.refresh")?;
        let ticket = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let filter = self.update(|s| {
            s.loading = true;
            s.filter
        });

        let result = futures::try_join!(
            self.api.list_pedidos(&token, filter),
            self.api.promedio(&token)
        );

        let detail = filter.map_or("all", |estado| estado.as_wire());

        if self.refresh_seq.load(Ordering::SeqCst) != ticket {
            // A superseded refresh still ends the session its token belongs to.
            if let Err(e) = result {
                if e.is_unauthorized() && self.session.token().as_deref() == Some(token.as_str()) {
                    return Err(self.fail(e.in_op_with("orders.refresh", detail), MSG_CONNECTION_ERROR));
                }
            }
            log::debug!("dropping stale refresh #{}", ticket);
            return Ok(());
        }

        match result {
            Ok((pedidos, promedio)) => {
                log::debug!("refresh #{}: {} pedidos, promedio {}", ticket, pedidos.len(), promedio);
                self.update(|s| {
                    s.selected = s
                        .selected
                        .take()
                        .and_then(|sel| pedidos.iter().find(|p| p.id == sel.id).cloned());
                    s.pedidos = pedidos;
                    s.promedio = promedio;
                    s.loading = false;
                    s.banner = None;
                });
                Ok(())
            }
            Err(e) => {
                self.update(|s| s.loading = false);
                Err(self.fail(e.in_op_with("orders.refresh", detail), MSG_CONNECTION_ERROR))
            }
        }
    }

    /// Changes the status filter and re-fetches immediately.
    pub async fn set_filter(&self, filter: Option<Estado>) -> ConsoleResult<()> {
        self.update(|s| s.filter = filter);
        self.refresh().await
    }

    // =========================================================
    // Form & writes
    // =========================================================

    pub fn edit_form(&self, f: impl FnOnce(&mut OrderForm)) {
        self.update(|s| f(&mut s.form));
    }

    /// Loads a listed record into the form. Returns `false` if it is not listed.
    pub fn begin_edit(&self, id: PedidoId) -> bool {
        self.update(|s| {
            let form = s.find(id).map(OrderForm::from_pedido);
            match form {
                Some(form) => {
                    s.form = form;
                    s.editing = Some(id);
                    true
                }
                None => false,
            }
        })
    }

    pub fn cancel_edit(&self) {
        self.update(|s| {
            s.form.reset();
            s.editing = None;
            s.banner = None;
        });
    }

    /// Creates, or replaces the record under edit, from the current form.
    ///
    /// Invalid forms never reach the network. On failure the form is kept
    /// so the user can retry.
    pub async fn submit(&self) -> ConsoleResult<()> {
        let (form, editing) = {
            let s = self.lock();
            (s.form.clone(), s.editing)
        };

        let input = match form.validate() {
            Ok(input) => input,
            Err(v) => {
                self.update(|s| s.banner = Some(v.message().to_string()));
                return Err(ConsoleError::validation(v).in_op("orders.submit"));
            }
        };

        let token = self.require_token("orders.submit")?;
        let result = match editing {
            Some(id) => self.api.update_pedido(&token, id, input).await,
            None => self.api.create_pedido(&token, input).await,
        };

        match result {
            Ok(ack) => {
                match ack.id.or(editing) {
                    Some(id) => log::info!("pedido {} saved", id),
                    None => log::info!("pedido saved"),
                }
                self.update(|s| {
                    s.form.reset();
                    s.editing = None;
                    s.banner = None;
                });
                let _ = self.refresh().await;
                Ok(())
            }
            Err(e) => Err(self.fail(e.in_op("orders.submit"), MSG_SAVE_ERROR)),
        }
    }

    // =========================================================
    // Deletion (two-phase)
    // =========================================================

    /// Asks for confirmation; nothing is sent yet.
    pub fn request_delete(&self, id: PedidoId) {
        self.update(|s| s.pending_delete = Some(id));
    }

    pub fn cancel_delete(&self) {
        self.update(|s| s.pending_delete = None);
    }

    /// Deletes the record awaiting confirmation, if any.
    pub async fn confirm_delete(&self) -> ConsoleResult<()> {
        let Some(id) = self.update(|s| s.pending_delete.take()) else {
            return Ok(());
        };
        let token = self.require_token("orders.delete")?;

        match self.api.delete_pedido(&token, id).await {
            Ok(_) => {
                log::info!("pedido {} deleted", id);
                self.update(|s| {
                    if s.editing == Some(id) {
                        s.form.reset();
                        s.editing = None;
                    }
                    if s.selected.as_ref().is_some_and(|p| p.id == id) {
                        s.selected = None;
                    }
                });
                let _ = self.refresh().await;
                Ok(())
            }
            Err(e) => Err(self.fail(e.in_op_with("orders.delete", id.to_string()), MSG_DELETE_ERROR)),
        }
    }

    // =========================================================
    // Local view state
    // =========================================================

    /// Opens the detail view for a listed record. No request is made.
    pub fn select(&self, id: PedidoId) -> bool {
        self.update(|s| {
            s.selected = s.find(id).cloned();
            s.selected.is_some()
        })
    }

    pub fn close_detail(&self) {
        self.update(|s| s.selected = None);
    }

    pub fn dismiss_banner(&self) {
        self.update(|s| s.banner = None);
    }
}

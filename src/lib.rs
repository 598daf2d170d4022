//! Client core for the orders admin console.
//!
//! Platform-neutral: the HTTP transport and token persistence are traits,
//! implemented over `fetch`/`localStorage` by the frontend crate and by
//! in-memory fakes in tests.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod orders;
pub mod request;
pub mod session;

pub use api::PedidosApi;
pub use config::ApiConfig;
pub use error::{ConsoleError, ConsoleErrorKind, ConsoleResult, ValidationError};
pub use form::OrderForm;
pub use orders::{
    ConsoleState, MSG_CONNECTION_ERROR, MSG_DELETE_ERROR, MSG_INVALID_CREDENTIALS, MSG_SAVE_ERROR,
    OrderManager,
};
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use session::{MemoryTokenStore, Session, TokenStore};

pub use pedidos_shared as shared;

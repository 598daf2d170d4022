use crate::{Estado, LoginRequest, LoginResponse, Pedido, PedidoId, PedidoInput, WriteAck};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The JSON body sent with the request. `()` for body-less requests.
    type Body: Serialize;
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request carries the bearer token.
    const AUTHENTICATED: bool = true;

    /// The URL path relative to the API base, including any query string.
    fn path(&self) -> String;

    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for LoginRequest {
    type Body = LoginRequest;
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

/// List orders, optionally narrowed to one status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPedidosRequest {
    pub estado: Option<Estado>,
}

impl ApiRequest for ListPedidosRequest {
    type Body = ();
    type Response = Vec<Pedido>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        match self.estado {
            Some(estado) => format!("/pedidos?estado={}", estado.as_wire()),
            None => "/pedidos".to_string(),
        }
    }
}

/// Backend-computed average total. `null` when there are no orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromedioRequest;

impl ApiRequest for PromedioRequest {
    type Body = ();
    type Response = Option<f64>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/pedidos/promedio".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct CreatePedidoRequest {
    pub pedido: PedidoInput,
}

impl ApiRequest for CreatePedidoRequest {
    type Body = PedidoInput;
    type Response = WriteAck;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/pedidos".to_string()
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(&self.pedido)
    }
}

/// Full replace of an existing order.
#[derive(Debug, Clone)]
pub struct UpdatePedidoRequest {
    pub id: PedidoId,
    pub pedido: PedidoInput,
}

impl ApiRequest for UpdatePedidoRequest {
    type Body = PedidoInput;
    type Response = WriteAck;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/pedidos/{}", self.id)
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(&self.pedido)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeletePedidoRequest {
    pub id: PedidoId,
}

impl ApiRequest for DeletePedidoRequest {
    type Body = ();
    type Response = WriteAck; // usually 204 No Content
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/pedidos/{}", self.id)
    }
}

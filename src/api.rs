use crate::config::ApiConfig;
use crate::error::{ConsoleError, ConsoleResult};
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use pedidos_shared::protocol::{
    ApiRequest, CreatePedidoRequest, DeletePedidoRequest, ListPedidosRequest, PromedioRequest,
    UpdatePedidoRequest,
};
use pedidos_shared::{
    CONTENT_TYPE_JSON, Estado, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, LoginRequest, Pedido,
    PedidoId, PedidoInput, WriteAck,
};

/// REST client for the orders backend.
///
/// Stateless apart from its configuration: the bearer token is passed per
/// call by the session owner. One request per call, never retried.
pub struct PedidosApi<C: HttpClient> {
    client: C,
    config: ApiConfig,
}

impl<C: HttpClient> PedidosApi<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Sends any declared endpoint and decodes its response.
    ///
    /// 401/403 become `Unauthorized`, other non-2xx statuses `Http(status)`.
    pub async fn execute<R: ApiRequest>(
        &self,
        request: &R,
        token: Option<&str>,
    ) -> ConsoleResult<R::Response> {
        let resp = self.dispatch(request, token).await?;
        resp.json::<R::Response>()
            .map_err(|e| e.in_op_with("api.decode", request.path()))
    }

    /// Sends a write. Any 2xx counts as done, whatever its body holds.
    pub async fn execute_write<R>(&self, request: &R, token: Option<&str>) -> ConsoleResult<WriteAck>
    where
        R: ApiRequest<Response = WriteAck>,
    {
        let resp = self.dispatch(request, token).await?;
        Ok(resp.json::<WriteAck>().unwrap_or_else(|e| {
            log::debug!("{} {}: unreadable ack body: {}", R::METHOD.as_str(), request.path(), e);
            WriteAck::default()
        }))
    }

    async fn dispatch<R: ApiRequest>(&self, request: &R, token: Option<&str>) -> ConsoleResult<HttpResponse> {
        let path = request.path();
        let mut req = HttpRequest::new(&self.config.url(&path), R::METHOD);

        if R::AUTHENTICATED {
            let token = token.ok_or_else(|| ConsoleError::locked().in_op_with("api.execute", &path))?;
            req = req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }

        if let Some(body) = request.body() {
            let body = serde_json::to_string(body)
                .map_err(|e| ConsoleError::from(e).in_op_with("api.encode", &path))?;
            req = req
                .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
                .with_body(body);
        }

        let resp = self
            .client
            .send(req)
            .await
            .map_err(|e| e.in_op_with("api.send", format!("{} {}", R::METHOD.as_str(), path)))?;

        if !resp.is_success() {
            log::debug!("{} {} -> {}", R::METHOD.as_str(), path, resp.status);
            return Err(ConsoleError::status(
                resp.status,
                format!("{} {} failed with status {}", R::METHOD.as_str(), path, resp.status),
            ));
        }
        Ok(resp)
    }

    /// Exchanges credentials for a bearer token.
    ///
    /// A 2xx answer without a token is treated as rejected credentials.
    pub async fn login(&self, username: &str, password: &str) -> ConsoleResult<String> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp = self.execute(&req, None).await?;
        resp.token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConsoleError::unauthorized("login response carried no token").in_op("api.login"))
    }

    pub async fn list_pedidos(&self, token: &str, estado: Option<Estado>) -> ConsoleResult<Vec<Pedido>> {
        self.execute(&ListPedidosRequest { estado }, Some(token)).await
    }

    /// Average total across orders; a `null` answer reads as zero.
    pub async fn promedio(&self, token: &str) -> ConsoleResult<f64> {
        let avg = self.execute(&PromedioRequest, Some(token)).await?;
        Ok(avg.unwrap_or(0.0))
    }

    pub async fn create_pedido(&self, token: &str, pedido: PedidoInput) -> ConsoleResult<WriteAck> {
        self.execute_write(&CreatePedidoRequest { pedido }, Some(token))
            .await
    }

    pub async fn update_pedido(
        &self,
        token: &str,
        id: PedidoId,
        pedido: PedidoInput,
    ) -> ConsoleResult<WriteAck> {
        self.execute_write(&UpdatePedidoRequest { id, pedido }, Some(token))
            .await
    }

    pub async fn delete_pedido(&self, token: &str, id: PedidoId) -> ConsoleResult<WriteAck> {
        self.execute_write(&DeletePedidoRequest { id }, Some(token))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleErrorKind;
    use crate::request::MockHttpClient;
    use pedidos_shared::NaiveDate;
    use pedidos_shared::protocol::HttpMethod;
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn api() -> PedidosApi<MockHttpClient> {
        PedidosApi::new(MockHttpClient::new(), ApiConfig::new(BASE))
    }

    #[tokio::test]
    async fn login_posts_credentials_without_auth_header() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Post,
            "http://api.test/auth/login",
            200,
            json!({ "token": "abc" }),
        );

        let token = api.login("admin", "admin").await.unwrap();
        assert_eq!(token, "abc");

        let reqs = api.client().requests.borrow();
        let (url, method, headers, body) = &reqs[0];
        assert_eq!(url, "http://api.test/auth/login");
        assert_eq!(method, "POST");
        assert!(!headers.contains_key(HEADER_AUTHORIZATION));
        assert_eq!(headers.get(HEADER_CONTENT_TYPE).unwrap(), CONTENT_TYPE_JSON);
        let body: serde_json::Value = serde_json::from_str(body.as_ref().unwrap()).unwrap();
        assert_eq!(body, json!({ "username": "admin", "password": "admin" }));
    }

    #[tokio::test]
    async fn login_without_token_is_rejected() {
        let api = api();
        api.client()
            .mock_response(HttpMethod::Post, "http://api.test/auth/login", 200, json!({}));
        let err = api.login("admin", "admin").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn list_sends_bearer_and_filter() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            "http://api.test/pedidos?estado=PAGADO",
            200,
            json!([{ "id": 1, "cliente": "Ana", "total": 10.0, "estado": "PAGADO", "fecha": "2024-01-01" }]),
        );

        let list = api.list_pedidos("tok", Some(Estado::Pagado)).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].estado, Estado::Pagado);

        let reqs = api.client().requests.borrow();
        assert_eq!(reqs[0].2.get(HEADER_AUTHORIZATION).unwrap(), "Bearer tok");
    }

    #[tokio::test]
    async fn forbidden_maps_to_unauthorized() {
        let api = api();
        api.client()
            .mock_response(HttpMethod::Get, "http://api.test/pedidos", 403, json!({}));
        let err = api.list_pedidos("tok", None).await.unwrap_err();
        assert_eq!(err.kind, ConsoleErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn server_error_keeps_status() {
        let api = api();
        api.client()
            .mock_response(HttpMethod::Get, "http://api.test/pedidos/promedio", 500, json!({}));
        let err = api.promedio("tok").await.unwrap_err();
        assert_eq!(err.kind, ConsoleErrorKind::Http(500));
    }

    #[tokio::test]
    async fn null_average_reads_as_zero() {
        let api = api();
        api.client()
            .mock_raw(HttpMethod::Get, "http://api.test/pedidos/promedio", 200, "null");
        assert_eq!(api.promedio("tok").await.unwrap(), 0.0);

        api.client()
            .mock_raw(HttpMethod::Get, "http://api.test/pedidos/promedio", 200, "37.5");
        assert_eq!(api.promedio("tok").await.unwrap(), 37.5);
    }

    #[tokio::test]
    async fn delete_accepts_empty_body() {
        let api = api();
        api.client()
            .mock_raw(HttpMethod::Delete, "http://api.test/pedidos/9", 204, "");
        api.delete_pedido("tok", PedidoId(9)).await.unwrap();
    }

    #[tokio::test]
    async fn update_puts_full_record_without_id() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Put,
            "http://api.test/pedidos/3",
            200,
            json!({ "id": 3, "cliente": "Eva", "total": 5.0, "estado": "CANCELADO", "fecha": "2024-05-01" }),
        );
        let input = PedidoInput {
            cliente: "Eva".into(),
            total: 5.0,
            estado: Estado::Cancelado,
            fecha: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        let ack = api.update_pedido("tok", PedidoId(3), input).await.unwrap();
        assert_eq!(ack.id, Some(PedidoId(3)));

        let reqs = api.client().requests.borrow();
        let body: serde_json::Value = serde_json::from_str(reqs[0].3.as_ref().unwrap()).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["estado"], json!("CANCELADO"));
    }

    #[tokio::test]
    async fn write_acks_are_not_held_to_a_record_shape() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Delete,
            "http://api.test/pedidos/9",
            200,
            json!({ "message": "deleted" }),
        );
        assert_eq!(api.delete_pedido("tok", PedidoId(9)).await.unwrap(), WriteAck::default());

        api.client()
            .mock_raw(HttpMethod::Post, "http://api.test/pedidos", 201, "");
        let input = PedidoInput {
            cliente: "Ana".into(),
            total: 50.0,
            estado: Estado::Pendiente,
            fecha: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(api.create_pedido("tok", input.clone()).await.unwrap().id, None);

        api.client()
            .mock_raw(HttpMethod::Post, "http://api.test/pedidos", 201, "Created");
        assert!(api.create_pedido("tok", input).await.is_ok());
    }

    #[tokio::test]
    async fn write_rejection_still_fails() {
        let api = api();
        api.client()
            .mock_response(HttpMethod::Delete, "http://api.test/pedidos/9", 500, json!({}));
        let err = api.delete_pedido("tok", PedidoId(9)).await.unwrap_err();
        assert_eq!(err.kind, ConsoleErrorKind::Http(500));
    }

    #[tokio::test]
    async fn transport_failure_is_network_error() {
        let api = api();
        api.client()
            .mock_network_error(HttpMethod::Get, "http://api.test/pedidos");
        let err = api.list_pedidos("tok", None).await.unwrap_err();
        assert_eq!(err.kind, ConsoleErrorKind::Network);
        assert_eq!(err.spans()[0].operation, "api.send");
    }

    #[tokio::test]
    async fn malformed_body_is_serialization_error() {
        let api = api();
        api.client()
            .mock_raw(HttpMethod::Get, "http://api.test/pedidos", 200, "<html>");
        let err = api.list_pedidos("tok", None).await.unwrap_err();
        assert_eq!(err.kind, ConsoleErrorKind::Serialization);
    }

    #[tokio::test]
    async fn authenticated_call_without_token_sends_nothing() {
        let api = api();
        let err = api.execute(&PromedioRequest, None).await.unwrap_err();
        assert_eq!(err.kind, ConsoleErrorKind::Locked);
        assert!(api.client().requests.borrow().is_empty());
    }
}

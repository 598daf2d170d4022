use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod date;
pub mod protocol;

pub use chrono::NaiveDate;

// =========================================================
// Constants
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// LocalStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

// =========================================================
// Domain Models
// =========================================================

/// Backend-assigned order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PedidoId(pub u64);

impl fmt::Display for PedidoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Estado {
    #[default]
    Pendiente,
    Pagado,
    Cancelado,
}

impl Estado {
    pub const ALL: [Estado; 3] = [Estado::Pendiente, Estado::Pagado, Estado::Cancelado];

    /// Name used on the wire and in the `estado` query parameter.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Estado::Pendiente => "PENDIENTE",
            Estado::Pagado => "PAGADO",
            Estado::Cancelado => "CANCELADO",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_wire() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Estado::Pendiente => "Pendiente",
            Estado::Pagado => "Pagado",
            Estado::Cancelado => "Cancelado",
        }
    }

    /// Plural label used by the list filter.
    pub fn filter_label(&self) -> &'static str {
        match self {
            Estado::Pendiente => "Pendientes",
            Estado::Pagado => "Pagados",
            Estado::Cancelado => "Cancelados",
        }
    }

    pub fn badge_class(&self) -> String {
        format!("badge badge-{}", self.as_wire().to_lowercase())
    }
}

impl fmt::Display for Estado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Body of create and update requests. Carries no id by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoInput {
    pub cliente: String,
    pub total: f64,
    #[serde(default)]
    pub estado: Estado,
    pub fecha: NaiveDate,
}

/// A persisted order as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    pub id: PedidoId,
    pub cliente: String,
    pub total: f64,
    #[serde(default)]
    pub estado: Estado,
    pub fecha: NaiveDate,
}

impl Pedido {
    pub fn from_input(id: PedidoId, input: PedidoInput) -> Self {
        Self {
            id,
            cliente: input.cliente,
            total: input.total,
            estado: input.estado,
            fecha: input.fecha,
        }
    }

    pub fn to_input(&self) -> PedidoInput {
        PedidoInput {
            cliente: self.cliente.clone(),
            total: self.total,
            estado: self.estado,
            fecha: self.fecha,
        }
    }

    pub fn display_total(&self) -> String {
        format_total(self.total)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
}

/// Answer to a create, update or delete.
///
/// Backends echo the record, send a short message, or nothing at all; only
/// the id is picked up, when one is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteAck {
    pub id: Option<PedidoId>,
}

impl<'de> Deserialize<'de> for WriteAck {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Echo {
            id: Option<PedidoId>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Echo(Echo),
            Other(IgnoredAny),
        }

        Ok(match Shape::deserialize(deserializer)? {
            Shape::Echo(echo) => WriteAck { id: echo.id },
            Shape::Other(_) => WriteAck::default(),
        })
    }
}

/// Renders a monetary amount with two decimals, e.g. `$50.00`.
pub fn format_total(total: f64) -> String {
    format!("${:.2}", total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn estado_uses_uppercase_wire_names() {
        assert_eq!(serde_json::to_value(Estado::Pagado).unwrap(), json!("PAGADO"));
        let e: Estado = serde_json::from_value(json!("CANCELADO")).unwrap();
        assert_eq!(e, Estado::Cancelado);
        assert_eq!(Estado::from_wire("PENDIENTE"), Some(Estado::Pendiente));
        assert_eq!(Estado::from_wire("pagado"), None);
        assert_eq!(Estado::Pagado.badge_class(), "badge badge-pagado");
    }

    #[test]
    fn pedido_parses_backend_payload() {
        let p: Pedido = serde_json::from_value(json!({
            "id": 7,
            "cliente": "Ana",
            "total": 50,
            "estado": "PENDIENTE",
            "fecha": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(p.id, PedidoId(7));
        assert_eq!(p.fecha, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(p.display_total(), "$50.00");
    }

    #[test]
    fn missing_estado_defaults_to_pendiente() {
        let p: Pedido = serde_json::from_value(json!({
            "id": 1, "cliente": "Luis", "total": 3.5, "fecha": "2024-02-10"
        }))
        .unwrap();
        assert_eq!(p.estado, Estado::Pendiente);
    }

    #[test]
    fn input_never_serializes_an_id() {
        let input = PedidoInput {
            cliente: "Ana".into(),
            total: 12.0,
            estado: Estado::Pagado,
            fecha: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        };
        let v = serde_json::to_value(&input).unwrap();
        assert!(v.get("id").is_none());
        assert_eq!(v["fecha"], json!("2024-03-05"));
    }

    #[test]
    fn write_ack_accepts_any_acknowledgement() {
        let echoed: WriteAck = serde_json::from_value(json!({
            "id": 9, "cliente": "Ana", "total": 1.0, "estado": "PAGADO", "fecha": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(echoed.id, Some(PedidoId(9)));

        for body in [json!({ "message": "deleted" }), json!(null), json!("OK"), json!({ "id": "x" })] {
            let ack: WriteAck = serde_json::from_value(body.clone()).unwrap();
            assert_eq!(ack, WriteAck::default(), "{}", body);
        }
    }

    #[test]
    fn format_total_rounds_to_cents() {
        assert_eq!(format_total(0.0), "$0.00");
        assert_eq!(format_total(1234.5), "$1234.50");
        assert_eq!(format_total(9.999), "$10.00");
    }
}

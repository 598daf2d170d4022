//! Order form state
//!
//! Controlled-form fields kept as the strings the inputs produce, converted
//! into a `PedidoInput` only on submission.

use crate::error::ValidationError;
use pedidos_shared::date::{format_fecha, parse_fecha, today};
use pedidos_shared::{Estado, Pedido, PedidoInput};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub cliente: String,
    pub total: String,
    pub estado: Estado,
    pub fecha: String,
}

impl OrderForm {
    /// Blank form: empty client and total, `PENDIENTE`, dated today.
    pub fn blank() -> Self {
        Self {
            cliente: String::new(),
            total: String::new(),
            estado: Estado::default(),
            fecha: format_fecha(today()),
        }
    }

    /// Prefills the form from a persisted record for editing.
    pub fn from_pedido(pedido: &Pedido) -> Self {
        Self {
            cliente: pedido.cliente.clone(),
            total: pedido.total.to_string(),
            estado: pedido.estado,
            fecha: format_fecha(pedido.fecha),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::blank();
    }

    /// Checks required fields, then parses amount and date.
    pub fn validate(&self) -> Result<PedidoInput, ValidationError> {
        let cliente = self.cliente.trim();
        let total = self.total.trim();
        let fecha = self.fecha.trim();

        if cliente.is_empty() || total.is_empty() || fecha.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let total: f64 = total.parse().map_err(|_| ValidationError::InvalidTotal)?;
        if !total.is_finite() || total < 0.0 {
            return Err(ValidationError::InvalidTotal);
        }

        let fecha = parse_fecha(fecha).ok_or(ValidationError::InvalidDate)?;

        Ok(PedidoInput {
            cliente: cliente.to_string(),
            total,
            estado: self.estado,
            fecha,
        })
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::blank()
    }
}

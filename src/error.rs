use std::fmt;

// =========================================================
// Validation errors
// =========================================================

/// Client-side form validation failures. No request is issued when one occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `cliente`, `total` or `fecha` is empty
    MissingFields,
    /// `total` is not a finite, non-negative number
    InvalidTotal,
    /// `fecha` is not `yyyy-MM-dd`
    InvalidDate,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Todos los campos con (*) son obligatorios.",
            ValidationError::InvalidTotal => {
                "El monto total debe ser un número mayor o igual a 0."
            }
            ValidationError::InvalidDate => "La fecha debe tener el formato AAAA-MM-DD.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

// =========================================================
// Error kinds
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleErrorKind {
    /// 401 / 403 from the backend. Ends the session.
    Unauthorized,
    /// Transport failure, no HTTP status available
    Network,
    /// Any other non-2xx status
    Http(u16),
    /// Response body could not be decoded (or request body encoded)
    Serialization,
    /// Form rejected before submission
    Validation(ValidationError),
    /// Operation attempted without an active session
    Locked,
}

impl ConsoleErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConsoleErrorKind::Unauthorized => "UNAUTHORIZED",
            ConsoleErrorKind::Network => "NETWORK_ERROR",
            ConsoleErrorKind::Http(_) => "HTTP_ERROR",
            ConsoleErrorKind::Serialization => "JSON_PARSE_ERROR",
            ConsoleErrorKind::Validation(_) => "INVALID_INPUT",
            ConsoleErrorKind::Locked => "NO_SESSION",
        }
    }

    /// Maps a non-success HTTP status to its kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ConsoleErrorKind::Unauthorized,
            other => ConsoleErrorKind::Http(other),
        }
    }
}

// =========================================================
// Error context
// =========================================================

/// One step of the operation trail attached to an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSpan {
    /// e.g. "api.list", "orders.refresh"
    pub operation: String,
    pub detail: Option<String>,
}

impl ErrorSpan {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: None,
        }
    }

    pub fn with_detail(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: Some(detail.into()),
        }
    }
}

// =========================================================
// Core error type
// =========================================================

#[derive(Debug, Clone)]
pub struct ConsoleError {
    pub kind: ConsoleErrorKind,
    pub message: String,
    spans: Vec<ErrorSpan>,
}

impl ConsoleError {
    pub fn new(kind: ConsoleErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ConsoleErrorKind::Unauthorized, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ConsoleErrorKind::Network, message)
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::new(ConsoleErrorKind::from_status(status), message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ConsoleErrorKind::Serialization, message)
    }

    pub fn validation(err: ValidationError) -> Self {
        Self::new(ConsoleErrorKind::Validation(err), err.message())
    }

    pub fn locked() -> Self {
        Self::new(ConsoleErrorKind::Locked, "no active session")
    }

    // --- Context builders ---

    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::new(operation));
        self
    }

    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::with_detail(operation, detail));
        self
    }

    // --- Accessors ---

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ConsoleErrorKind::Unauthorized
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)?;

        if !self.spans.is_empty() {
            write!(f, " | trace: ")?;
            for (i, span) in self.spans.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", span.operation)?;
                if let Some(detail) = &span.detail {
                    write!(f, "({})", detail)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConsoleError {}

impl From<serde_json::Error> for ConsoleError {
    fn from(e: serde_json::Error) -> Self {
        ConsoleError::serialization(e.to_string())
    }
}

impl From<ValidationError> for ConsoleError {
    fn from(e: ValidationError) -> Self {
        ConsoleError::validation(e)
    }
}

pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;

//! Domain-level error taxonomy.
//!
//! Every failure surfaced by the services maps onto a fixed table of error
//! kinds, each carrying a stable numeric code, an associated HTTP status, and
//! a default human-readable message. Inbound adapters translate the kind into
//! a transport response; the numeric code stays stable across transports.

use std::fmt;

/// One entry in the fixed code/status/message taxonomy used for all failure
/// responses.
///
/// Declaration order doubles as lookup order for [`ErrorKind::from_http_status`]:
/// the first kind whose status matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Success marker used by the data envelope.
    Ok,
    /// Generic client error raised by application code.
    BadRequest,
    /// Client error detected by the web framework (malformed body, bad
    /// query or path parameter) rather than by application code.
    FrameworkBadRequest,
    /// Request payload failed validation.
    ValidationError,
    /// The requested resource does not exist.
    NotFound,
    /// Generic server-side failure.
    InternalError,
    /// Server-side failure detected by the web framework.
    FrameworkInternalError,
    /// Storage-layer failure wrapped at the service boundary.
    DataAccessError,
}

impl ErrorKind {
    /// All kinds in declaration order.
    pub const TABLE: [Self; 8] = [
        Self::Ok,
        Self::BadRequest,
        Self::FrameworkBadRequest,
        Self::ValidationError,
        Self::NotFound,
        Self::InternalError,
        Self::FrameworkInternalError,
        Self::DataAccessError,
    ];

    /// Stable numeric code reported in the response envelope.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Ok => 0,
            Self::BadRequest => 10000,
            Self::FrameworkBadRequest => 10001,
            Self::ValidationError => 10002,
            Self::NotFound => 10003,
            Self::InternalError => 20000,
            Self::FrameworkInternalError => 20001,
            Self::DataAccessError => 20002,
        }
    }

    /// HTTP status associated with this kind.
    ///
    /// `NotFound` deliberately answers 400: a missing resource is treated as
    /// a client-input error, matching the established response contract.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest
            | Self::FrameworkBadRequest
            | Self::ValidationError
            | Self::NotFound => 400,
            Self::InternalError | Self::FrameworkInternalError | Self::DataAccessError => 500,
        }
    }

    /// Default human-readable message for this kind.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad request",
            Self::FrameworkBadRequest => "Framework-detected bad request",
            Self::ValidationError => "Validation error",
            Self::NotFound => "Requested resource is not found",
            Self::InternalError => "Internal error",
            Self::FrameworkInternalError => "Framework-detected internal error",
            Self::DataAccessError => "Data access error",
        }
    }

    /// Map an arbitrary HTTP status back to the nearest matching kind.
    ///
    /// Exact status matches (in table order) win; otherwise any 4xx collapses
    /// to [`ErrorKind::BadRequest`], any 5xx to [`ErrorKind::InternalError`],
    /// and anything else to [`ErrorKind::Ok`].
    #[must_use]
    pub fn from_http_status(status: u16) -> Self {
        if let Some(kind) = Self::TABLE
            .iter()
            .copied()
            .find(|kind| kind.http_status() == status)
        {
            return kind;
        }
        match status {
            400..=499 => Self::BadRequest,
            500..=599 => Self::InternalError,
            _ => Self::Ok,
        }
    }

    /// Whether this kind represents a client-input failure.
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        self.http_status() >= 400 && self.http_status() < 500
    }

    /// Whether this kind represents a server-side failure.
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        self.http_status() >= 500
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?} ({})", self.code())
    }
}

/// Domain error payload: a kind, an optional custom message, and an optional
/// underlying cause retained for diagnostics.
///
/// The resolved [`Error::message`] is the custom override when non-blank,
/// otherwise the kind's default, suffixed with `" - <cause>"` when a cause is
/// attached. Raw storage errors are never leaked: services wrap them with
/// [`Error::data_access`] before they cross the service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    cause: Option<String>,
}

impl Error {
    /// Error of the given kind carrying only the default message.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            cause: None,
        }
    }

    /// Error with a custom message overriding the kind's default.
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            cause: None,
        }
    }

    /// Error wrapping an underlying failure whose message is kept for
    /// diagnostics.
    pub fn from_cause(kind: ErrorKind, cause: impl fmt::Display) -> Self {
        Self {
            kind,
            message: None,
            cause: Some(cause.to_string()),
        }
    }

    /// Convenience constructor wrapping a storage failure into
    /// [`ErrorKind::DataAccessError`].
    pub fn data_access(cause: impl fmt::Display) -> Self {
        Self::from_cause(ErrorKind::DataAccessError, cause)
    }

    /// Convenience constructor for [`ErrorKind::NotFound`].
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// Convenience constructor for [`ErrorKind::ValidationError`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::ValidationError, message)
    }

    /// The error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Stable numeric code of the kind.
    #[must_use]
    pub fn code(&self) -> u32 {
        self.kind.code()
    }

    /// Resolved human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        let base = self
            .message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| self.kind.default_message());
        match &self.cause {
            Some(cause) => format!("{base} - {cause}"),
            None => base.to_owned(),
        }
    }

    /// Message of the wrapped failure, when one is attached.
    #[must_use]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for Error {}

//! Error types returned by the upstream adapter and by the gateway operations.
//! The gateway errors survive a round trip over gRPC, see
//! [`GatewayError::into_status`] and [`GatewayError::from_status`].
use derive_more::Display;
use thiserror::Error;

/// Name of the response metadata entry carrying the [`ErrorKind`] of a failed
/// gateway call.
pub const ERROR_KIND_METADATA: &str = "gateway-error-kind";

#[derive(Error, Debug)]
/// Failure of a single call to the upstream node.
pub enum UpstreamError {
    #[error("Cannot reach the upstream node: {0}")]
    /// The channel to the upstream node could not be established, was lost,
    /// or the call did not finish within the configured timeout.
    Connection(String),
    #[error("Upstream call failed: {0}")]
    /// The upstream node answered with a non-success status.
    Rpc(tonic::Status),
    #[error("Unexpected upstream response: {0}")]
    /// The response did not have the expected shape.
    Decode(String),
}

/// Whether the status was produced because no answer arrived, as opposed to
/// an answer carrying an error. Tonic reports an expired request timeout,
/// client or server side, as `Cancelled`.
fn is_connection_failure(status: &tonic::Status) -> bool {
    matches!(
        status.code(),
        tonic::Code::Unavailable | tonic::Code::DeadlineExceeded | tonic::Code::Cancelled
    )
}

impl From<tonic::Status> for UpstreamError {
    fn from(s: tonic::Status) -> Self {
        if is_connection_failure(&s) {
            Self::Connection(s.message().to_string())
        } else {
            Self::Rpc(s)
        }
    }
}

impl From<tonic::transport::Error> for UpstreamError {
    fn from(e: tonic::transport::Error) -> Self { Self::Connection(e.to_string()) }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            Self::Rpc(status_from_http(status, e.to_string()))
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            // connect, timeout, and request construction failures all mean we
            // never got an answer from the node.
            Self::Connection(e.to_string())
        }
    }
}

/// Map an HTTP status code of the node's JSON-RPC endpoint to the closest gRPC
/// code, so that callers can treat both transports uniformly.
pub(crate) fn status_from_http(
    status: reqwest::StatusCode,
    message: impl Into<String>,
) -> tonic::Status {
    let code = match status.as_u16() {
        400 => tonic::Code::InvalidArgument,
        401 => tonic::Code::Unauthenticated,
        403 => tonic::Code::PermissionDenied,
        404 => tonic::Code::NotFound,
        408 | 504 => tonic::Code::DeadlineExceeded,
        429 => tonic::Code::ResourceExhausted,
        501 => tonic::Code::Unimplemented,
        502 | 503 => tonic::Code::Unavailable,
        500..=599 => tonic::Code::Internal,
        _ => tonic::Code::Unknown,
    };
    tonic::Status::new(code, message)
}

/// Result of a call to the upstream node.
pub type UpstreamResult<A> = Result<A, UpstreamError>;

/// Machine readable kind of a [`GatewayError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum ErrorKind {
    #[display(fmt = "validation")]
    Validation,
    #[display(fmt = "connection")]
    Connection,
    #[display(fmt = "upstream-rpc")]
    UpstreamRpc,
    #[display(fmt = "schema-mismatch")]
    SchemaMismatch,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Connection => "connection",
            ErrorKind::UpstreamRpc => "upstream-rpc",
            ErrorKind::SchemaMismatch => "schema-mismatch",
        }
    }
}

impl std::str::FromStr for ErrorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "validation" => Ok(ErrorKind::Validation),
            "connection" => Ok(ErrorKind::Connection),
            "upstream-rpc" => Ok(ErrorKind::UpstreamRpc),
            "schema-mismatch" => Ok(ErrorKind::SchemaMismatch),
            other => anyhow::bail!("Unknown gateway error kind '{other}'."),
        }
    }
}

#[derive(Error, Debug)]
/// Errors returned by the gateway operations. Every variant is reported to the
/// caller of the failing operation only.
pub enum GatewayError {
    #[error("Invalid argument: {0}")]
    /// A caller supplied argument violates a precondition. Detected before
    /// the upstream node is contacted.
    Validation(String),
    #[error("Upstream node unavailable: {0}")]
    Connection(String),
    #[error("Upstream node returned an error: {0}")]
    /// The upstream node rejected the query. The original status is kept so
    /// that e.g. "not found" can be told apart from other failures.
    UpstreamRpc(tonic::Status),
    #[error("Upstream response does not match the expected schema: {0}")]
    SchemaMismatch(String),
}

impl From<UpstreamError> for GatewayError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Connection(msg) => Self::Connection(msg),
            UpstreamError::Rpc(status) => Self::UpstreamRpc(status),
            UpstreamError::Decode(msg) => Self::SchemaMismatch(msg),
        }
    }
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Validation(_) => ErrorKind::Validation,
            GatewayError::Connection(_) => ErrorKind::Connection,
            GatewayError::UpstreamRpc(_) => ErrorKind::UpstreamRpc,
            GatewayError::SchemaMismatch(_) => ErrorKind::SchemaMismatch,
        }
    }

    /// Whether this error indicates the requested object does not exist at
    /// the upstream node, e.g., a block above the current height.
    pub fn is_not_found(&self) -> bool {
        match self {
            GatewayError::UpstreamRpc(s) => s.code() == tonic::Code::NotFound,
            _ => false,
        }
    }

    /// Convert to a status to be returned by the gRPC service. The kind is
    /// attached as [`ERROR_KIND_METADATA`].
    pub fn into_status(self) -> tonic::Status {
        let kind = self.kind();
        let mut status = match self {
            GatewayError::Validation(msg) => tonic::Status::invalid_argument(msg),
            GatewayError::Connection(msg) => tonic::Status::unavailable(msg),
            GatewayError::UpstreamRpc(s) => tonic::Status::new(s.code(), s.message()),
            GatewayError::SchemaMismatch(msg) => tonic::Status::internal(msg),
        };
        status.metadata_mut().insert(
            ERROR_KIND_METADATA,
            tonic::metadata::MetadataValue::from_static(kind.as_str()),
        );
        status
    }

    /// Reconstruct the error from a status returned by the gateway service.
    /// Statuses without a recognizable kind, e.g., produced by the transport
    /// itself, are classified by their code.
    pub fn from_status(status: tonic::Status) -> Self {
        let kind = status
            .metadata()
            .get(ERROR_KIND_METADATA)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<ErrorKind>().ok());
        match kind {
            Some(ErrorKind::Validation) => Self::Validation(status.message().to_string()),
            Some(ErrorKind::Connection) => Self::Connection(status.message().to_string()),
            Some(ErrorKind::SchemaMismatch) => Self::SchemaMismatch(status.message().to_string()),
            Some(ErrorKind::UpstreamRpc) => Self::UpstreamRpc(status),
            None if is_connection_failure(&status) => {
                Self::Connection(status.message().to_string())
            }
            None => Self::UpstreamRpc(status),
        }
    }
}

impl From<GatewayError> for tonic::Status {
    fn from(e: GatewayError) -> Self { e.into_status() }
}

/// Result of a gateway operation. This is a simple alias for [std::Result](https://doc.rust-lang.org/std/result/enum.Result.html)
/// that fixes the error type to be [`GatewayError`].
pub type GatewayResult<A> = Result<A, GatewayError>;

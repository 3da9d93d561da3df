use serde::Deserialize;
use std::fmt;
use std::io;

/// Represents errors that can occur during an RPC call from the perspective of the caller.
#[derive(Debug)]
pub enum RpcCallerError {
    /// A transport-level or I/O error occurred during the call.
    Io(io::Error),
    /// The remote handler executed but explicitly returned an application-level error.
    /// The payload contains the raw error body sent by the server.
    RemoteError { payload: Vec<u8> },
    /// The remote endpoint indicated a system-level failure (e.g., unknown service or method).
    RemoteSystemError(String),
    /// The operation was aborted before a result could be determined.
    Aborted,
}

/// The JSON error body a remote handler attaches to an application-level failure.
#[derive(Deserialize)]
struct RemoteErrorBody {
    message: String,
}

impl RpcCallerError {
    /// Extracts the `message` field from a remote error payload, when the
    /// payload carries the protocol's JSON error object. Returns `None` for
    /// other error variants or for payloads in any other shape.
    pub fn remote_message(&self) -> Option<String> {
        match self {
            RpcCallerError::RemoteError { payload } => {
                serde_json::from_slice::<RemoteErrorBody>(payload)
                    .ok()
                    .map(|body| body.message)
            }
            _ => None,
        }
    }
}

impl fmt::Display for RpcCallerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcCallerError::Io(e) => write!(f, "I/O error: {}", e),
            RpcCallerError::RemoteError { payload } => match self.remote_message() {
                Some(message) => write!(f, "Remote handler failed: {}", message),
                None => write!(f, "Remote handler failed with payload: {:?}", payload),
            },
            RpcCallerError::RemoteSystemError(msg) => write!(f, "Remote system error: {}", msg),
            RpcCallerError::Aborted => write!(f, "RPC call aborted"),
        }
    }
}

impl std::error::Error for RpcCallerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpcCallerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RpcCallerError {
    fn from(e: io::Error) -> Self {
        RpcCallerError::Io(e)
    }
}

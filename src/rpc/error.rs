//! RPC error types.

use thiserror::Error;

use crate::{error::ErrorKind, rpc::frame::MAX_BODY_LEN};

/// Errors that can occur while talking to or serving the calculator.
#[derive(Error, Debug)]
pub enum RpcError {
    /// I/O error on the TCP connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer closed the connection between frames.
    #[error("Connection closed")]
    ConnectionClosed,

    /// A frame could not be decoded.
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    /// A frame body is larger than the protocol allows.
    #[error("Frame body of {0} bytes exceeds maximum {max}", max = MAX_BODY_LEN)]
    FrameTooLarge(usize),

    /// A reply did not answer the call that was sent.
    #[error("Expected reply to call {expected}, got {found}")]
    SequenceMismatch {
        /// Sequence id of the outstanding call.
        expected: u32,
        /// Sequence id found in the reply.
        found: u32,
    },

    /// A message of the wrong type for this side of the connection.
    #[error("Unexpected message: {0}")]
    UnexpectedMessage(String),

    /// The server evaluated the call and reported an error.
    #[error("{message}")]
    Remote {
        /// Classification of the remote error.
        kind: ErrorKind,
        /// The remote error message.
        message: String,
    },
}

/// Result type for RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;

//! TCP server for calculation requests.
//!
//! Accepts connections in a loop and spawns a task per client. Each
//! connection carries any number of sequential calls.

use std::net::SocketAddr;

use tokio::{
    io::BufReader,
    net::{TcpListener, TcpStream, ToSocketAddrs},
};

use crate::{
    calculate,
    rpc::{
        error::{RpcError, RpcResult},
        frame::{Message, read_message, write_message},
    },
};

/// Binds a listener on `addr`.
pub async fn bind<A: ToSocketAddrs>(addr: A) -> RpcResult<TcpListener> {
    Ok(TcpListener::bind(addr).await?)
}

/// Serves calls on `listener` until the task is dropped.
///
/// Accept failures are logged and the loop continues. A connection that
/// sends a malformed frame is logged and closed; other connections are not
/// affected.
pub async fn serve(listener: TcpListener) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                tracing::info!(peer = %peer_addr, "connection accepted");
                tokio::spawn(async move {
                    match handle_connection(stream, peer_addr).await {
                        Ok(()) | Err(RpcError::ConnectionClosed) => {
                            tracing::info!(peer = %peer_addr, "connection closed");
                        },
                        Err(e) => {
                            tracing::warn!(peer = %peer_addr, error = %e, "connection dropped");
                        },
                    }
                });
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to accept connection");
            },
        }
    }
}

/// Answers a single call.
///
/// # Example
/// ```
/// use calculus::{error::ErrorKind, rpc::{Message, server::answer_call}};
///
/// assert_eq!(answer_call(1, "1 + 2"), Message::Reply { seq: 1, value: 3.0 });
/// assert!(matches!(answer_call(2, "1 / 0"),
///                  Message::Exception { seq: 2, kind: ErrorKind::InvalidRpn, .. }));
/// ```
#[must_use]
pub fn answer_call(seq: u32, expression: &str) -> Message {
    match calculate(expression) {
        Ok(value) => {
            tracing::debug!(seq, expression = %expression.trim_end(), value, "calculated");
            Message::Reply { seq, value }
        },
        Err(e) => {
            tracing::debug!(seq, expression = %expression.trim_end(), error = %e, "calculation failed");
            Message::Exception { seq,
                                 kind: e.kind(),
                                 message: e.to_string() }
        },
    }
}

async fn handle_connection(stream: TcpStream, peer_addr: SocketAddr) -> RpcResult<()> {
    stream.set_nodelay(true)?;
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);

    loop {
        let response = match read_message(&mut reader).await? {
            Message::Call { seq, expression } => answer_call(seq, &expression),
            other => {
                tracing::warn!(peer = %peer_addr, seq = other.seq(), "client sent a non-call message");
                return Err(RpcError::UnexpectedMessage(format!("expected a call, got {other:?}")));
            },
        };
        write_message(&mut writer, &response).await?;
    }
}

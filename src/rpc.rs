/// Async client for the calculation service.
pub mod client;
/// RPC error types.
pub mod error;
/// Frame parsing and serialization.
pub mod frame;
/// Async TCP server dispatching calls to [`calculate`](crate::calculate).
pub mod server;

pub use client::Client;
pub use error::{RpcError, RpcResult};
pub use frame::Message;

/// Address used by both binaries when none is given.
pub const DEFAULT_ADDR: &str = "localhost:9090";

//! Client side of the calculation protocol.

use tokio::{
    io::BufReader,
    net::{
        TcpStream, ToSocketAddrs,
        tcp::{OwnedReadHalf, OwnedWriteHalf},
    },
};

use crate::rpc::{
    error::{RpcError, RpcResult},
    frame::{Message, read_message, write_message},
};

/// A connection to a calculation server.
///
/// Calls are sequential: each one waits for its reply before returning.
pub struct Client {
    reader:   BufReader<OwnedReadHalf>,
    writer:   OwnedWriteHalf,
    next_seq: u32,
}

impl Client {
    /// Connects to the server at `addr`.
    pub async fn connect<A: ToSocketAddrs>(addr: A) -> RpcResult<Self> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        let (reader, writer) = stream.into_split();

        Ok(Self { reader: BufReader::new(reader),
                  writer,
                  next_seq: 0 })
    }

    /// Asks the server to evaluate `expression`.
    ///
    /// # Errors
    /// `Remote` carries the server's classification and message when the
    /// expression is rejected; any other variant is a transport problem.
    pub async fn calculate(&mut self, expression: &str) -> RpcResult<f64> {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        let call = Message::Call { seq,
                                   expression: expression.to_string() };
        write_message(&mut self.writer, &call).await?;

        match read_message(&mut self.reader).await? {
            Message::Reply { seq: found, value } if found == seq => Ok(value),
            Message::Exception { seq: found,
                                 kind,
                                 message, } if found == seq => Err(RpcError::Remote { kind, message }),
            Message::Call { .. } => Err(RpcError::UnexpectedMessage("server sent a call".to_string())),
            other => Err(RpcError::SequenceMismatch { expected: seq,
                                                      found:    other.seq(), }),
        }
    }
}

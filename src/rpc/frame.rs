//! Frame parsing and serialization.
//!
//! Every message travels in one frame: a 4-byte length followed by a body
//! made of a type byte, a sequence id and the payload.
//!
//! ```text
//! Offset  Len  Field
//! 0       4    Body length N (big-endian, excludes these 4 bytes)
//! 4       1    Message type: 1 = call, 2 = reply, 3 = exception
//! 5       4    Sequence id (big-endian)
//! 9       N-5  Payload
//! ```
//!
//! Payloads: a call carries the UTF-8 expression, a reply the big-endian
//! `f64` result, an exception one [`ErrorKind`] code byte and a UTF-8
//! message.

use bytes::{Buf, BufMut, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::{
    error::ErrorKind,
    rpc::error::{RpcError, RpcResult},
};

/// Length of the length prefix.
pub const FRAME_HEADER_LEN: usize = 4;
/// Smallest valid body: type byte plus sequence id.
pub const MIN_BODY_LEN: usize = 5;
/// Largest accepted body.
pub const MAX_BODY_LEN: usize = 64 * 1024;

const MESSAGE_CALL: u8 = 1;
const MESSAGE_REPLY: u8 = 2;
const MESSAGE_EXCEPTION: u8 = 3;

/// A decoded protocol message.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Client request to evaluate an expression.
    Call {
        /// Sequence id chosen by the client.
        seq:        u32,
        /// The expression text.
        expression: String,
    },
    /// Successful result of a call.
    Reply {
        /// Sequence id of the call.
        seq:   u32,
        /// The computed value.
        value: f64,
    },
    /// Failed call.
    Exception {
        /// Sequence id of the call.
        seq:     u32,
        /// Classification of the error.
        kind:    ErrorKind,
        /// Human-readable description.
        message: String,
    },
}

impl Message {
    /// The sequence id of the message.
    #[must_use]
    pub const fn seq(&self) -> u32 {
        match self {
            Self::Call { seq, .. } | Self::Reply { seq, .. } | Self::Exception { seq, .. } => *seq,
        }
    }

    /// Serializes the message into a complete frame.
    ///
    /// # Errors
    /// `FrameTooLarge` if the body would exceed [`MAX_BODY_LEN`].
    ///
    /// # Example
    /// ```
    /// use calculus::rpc::Message;
    ///
    /// let frame = Message::Reply { seq: 7, value: 0.5 }.encode().unwrap();
    /// assert_eq!(&frame[..4], &[0, 0, 0, 13]);
    /// assert_eq!(Message::decode(&frame[4..]).unwrap(),
    ///            Message::Reply { seq: 7, value: 0.5 });
    /// ```
    pub fn encode(&self) -> RpcResult<BytesMut> {
        let mut body = BytesMut::new();
        match self {
            Self::Call { seq, expression } => {
                body.put_u8(MESSAGE_CALL);
                body.put_u32(*seq);
                body.put_slice(expression.as_bytes());
            },
            Self::Reply { seq, value } => {
                body.put_u8(MESSAGE_REPLY);
                body.put_u32(*seq);
                body.put_f64(*value);
            },
            Self::Exception { seq, kind, message } => {
                body.put_u8(MESSAGE_EXCEPTION);
                body.put_u32(*seq);
                body.put_u8(kind.code());
                body.put_slice(message.as_bytes());
            },
        }

        if body.len() > MAX_BODY_LEN {
            return Err(RpcError::FrameTooLarge(body.len()));
        }

        let mut frame = BytesMut::with_capacity(FRAME_HEADER_LEN + body.len());
        #[allow(clippy::cast_possible_truncation)]
        frame.put_u32(body.len() as u32);
        frame.extend_from_slice(&body);
        Ok(frame)
    }

    /// Parses a frame body (everything after the length prefix).
    ///
    /// # Errors
    /// `InvalidFrame` for short bodies, unknown message types, unknown error
    /// kinds, a reply payload that is not exactly 8 bytes and text that is
    /// not UTF-8.
    pub fn decode(body: &[u8]) -> RpcResult<Self> {
        if body.len() < MIN_BODY_LEN {
            return Err(RpcError::InvalidFrame(format!("body of {} bytes is shorter than {MIN_BODY_LEN}",
                                                      body.len())));
        }

        let mut buf = body;
        let message_type = buf.get_u8();
        let seq = buf.get_u32();

        match message_type {
            MESSAGE_CALL => Ok(Self::Call { seq,
                                            expression: decode_text(buf)? }),
            MESSAGE_REPLY => {
                if buf.remaining() != 8 {
                    return Err(RpcError::InvalidFrame(format!("reply payload is {} bytes, expected 8",
                                                              buf.remaining())));
                }
                Ok(Self::Reply { seq,
                                 value: buf.get_f64() })
            },
            MESSAGE_EXCEPTION => {
                if !buf.has_remaining() {
                    return Err(RpcError::InvalidFrame("exception without error kind".to_string()));
                }
                let kind = ErrorKind::try_from(buf.get_u8()).map_err(|code| {
                               RpcError::InvalidFrame(format!("unknown error kind {code}"))
                           })?;
                Ok(Self::Exception { seq,
                                     kind,
                                     message: decode_text(buf)? })
            },
            other => Err(RpcError::InvalidFrame(format!("unknown message type {other}"))),
        }
    }
}

fn decode_text(payload: &[u8]) -> RpcResult<String> {
    String::from_utf8(payload.to_vec()).map_err(|_| {
                                           RpcError::InvalidFrame("payload is not valid UTF-8".to_string())
                                       })
}

/// Reads one message from `reader`.
///
/// # Errors
/// `ConnectionClosed` if the stream ends before a new frame starts,
/// `FrameTooLarge` or `InvalidFrame` for bad frames and `Io` otherwise.
pub async fn read_message<R: AsyncReadExt + Unpin>(reader: &mut R) -> RpcResult<Message> {
    let mut header = [0u8; FRAME_HEADER_LEN];
    match reader.read_exact(&mut header).await {
        Ok(_) => {},
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            return Err(RpcError::ConnectionClosed);
        },
        Err(e) => return Err(RpcError::Io(e)),
    }

    let length = u32::from_be_bytes(header) as usize;
    if length > MAX_BODY_LEN {
        return Err(RpcError::FrameTooLarge(length));
    }
    if length < MIN_BODY_LEN {
        return Err(RpcError::InvalidFrame(format!("body length {length} is shorter than {MIN_BODY_LEN}")));
    }

    let mut body = BytesMut::zeroed(length);
    reader.read_exact(&mut body).await?;

    Message::decode(&body)
}

/// Writes one message to `writer` and flushes it.
pub async fn write_message<W: AsyncWriteExt + Unpin>(writer: &mut W,
                                                     message: &Message)
                                                     -> RpcResult<()> {
    let frame = message.encode()?;
    writer.write_all(&frame).await?;
    writer.flush().await?;
    Ok(())
}

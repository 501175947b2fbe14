//! Message codec contract
//!
//! Every message type owns its fields and implements [`Message`]. The framing
//! layer uses [`Message::command`] to route a payload to a decoder and
//! [`Message::max_payload_length`] to reject oversized frames before reading
//! them.

use std::fmt::Debug;
use std::io::{Read, Write};

use super::{MessageError, MsgPong, WireResult, CMD_PONG, COMMAND_SIZE};

/// Operations every wire message implements.
pub trait Message: Debug + Send + Sync {
    /// Short ASCII identifier the framing layer uses to route the payload.
    fn command(&self) -> &'static str;

    /// Upper bound on the encoded payload at protocol version `pver`.
    fn max_payload_length(&self, pver: u32) -> u32;

    /// Write the message fields to `w` in wire order.
    ///
    /// Field validation happens before anything is written; a validation
    /// failure is a [`WireError::Message`](super::WireError::Message). Stream
    /// failures are returned unchanged and may leave a partial write behind.
    fn encode(&self, w: &mut dyn Write, pver: u32) -> WireResult<()>;

    /// Read the message fields from `r`, replacing the current values.
    ///
    /// Reads exactly the bytes the layout at `pver` requires. On failure the
    /// message and stream position are unspecified.
    fn decode(&mut self, r: &mut dyn Read, pver: u32) -> WireResult<()>;
}

/// Create a zero-valued message for `command`, ready to be decoded into.
///
/// Commands longer than [`COMMAND_SIZE`] bytes cannot come from a valid frame
/// header and are rejected before lookup.
pub fn make_empty_message(command: &str) -> Result<Box<dyn Message>, MessageError> {
    if command.len() > COMMAND_SIZE {
        return Err(MessageError::new(
            "make_empty_message",
            format!(
                "command [{}] is too long [max {}]",
                command.escape_debug(),
                COMMAND_SIZE
            ),
        ));
    }

    match command {
        CMD_PONG => Ok(Box::new(MsgPong::default())),
        _ => {
            tracing::debug!("No decoder registered for command {:?}", command);
            Err(MessageError::new(
                "make_empty_message",
                format!("unhandled command [{}]", command),
            ))
        }
    }
}

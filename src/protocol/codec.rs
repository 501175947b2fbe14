//! Payload codec helpers for the framing layer
//!
//! Wraps the per-message [`Message`] contract with the length checks a frame
//! reader needs: the declared payload length is compared against the command's
//! ceiling before any field is decoded.

use bytes::{BufMut, BytesMut};

use super::{make_empty_message, Message, WireError, WireResult, MAX_MESSAGE_PAYLOAD};

/// Encode `msg` at protocol version `pver` into a fresh buffer.
///
/// Fails with a message error if the encoding exceeds the message's own
/// ceiling or [`MAX_MESSAGE_PAYLOAD`].
pub fn encode_payload(msg: &dyn Message, pver: u32) -> WireResult<BytesMut> {
    let max_payload = msg.max_payload_length(pver);
    let mut writer = BytesMut::with_capacity(max_payload as usize).writer();
    msg.encode(&mut writer, pver)?;
    let buf = writer.into_inner();

    let len = buf.len();
    if len > max_payload as usize || len > MAX_MESSAGE_PAYLOAD as usize {
        return Err(WireError::message(
            "encode_payload",
            format!(
                "message payload is too large - encoded {} bytes, but maximum \
                 message payload size for messages of type [{}] is {}",
                len,
                msg.command(),
                max_payload.min(MAX_MESSAGE_PAYLOAD)
            ),
        ));
    }

    tracing::trace!("Encoded {} ({} bytes, pver {})", msg.command(), len, pver);
    Ok(buf)
}

/// Decode a payload received for `command` at protocol version `pver`.
///
/// The length checks run before decoding so an oversized frame is rejected
/// without touching its contents. The payload must be consumed exactly.
pub fn decode_payload(command: &str, payload: &[u8], pver: u32) -> WireResult<Box<dyn Message>> {
    let len = payload.len();
    if len > MAX_MESSAGE_PAYLOAD as usize {
        return Err(WireError::message(
            "decode_payload",
            format!(
                "message payload is too large - header indicates {} bytes, \
                 but max message payload is {} bytes",
                len, MAX_MESSAGE_PAYLOAD
            ),
        ));
    }

    let mut msg = make_empty_message(command)?;

    let max_payload = msg.max_payload_length(pver);
    if len > max_payload as usize {
        tracing::debug!(
            "Rejecting {} payload of {} bytes (max {} at pver {})",
            command,
            len,
            max_payload,
            pver
        );
        return Err(WireError::message(
            "decode_payload",
            format!(
                "payload exceeds max length - header indicates {} bytes, \
                 but max payload size for messages of type [{}] is {}",
                len, command, max_payload
            ),
        ));
    }

    let mut reader = payload;
    msg.decode(&mut reader, pver)?;

    if !reader.is_empty() {
        return Err(WireError::message(
            "decode_payload",
            format!(
                "{} trailing bytes after [{}] payload",
                reader.len(),
                command
            ),
        ));
    }

    tracing::trace!("Decoded {} ({} bytes, pver {})", command, len, pver);
    Ok(msg)
}

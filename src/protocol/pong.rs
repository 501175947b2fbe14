//! Liveness reply message

use std::io::{Read, Write};

use super::{read_u64_le, write_u64_le, Message, WireResult, CMD_PONG};

/// Reply to a ping, echoing the ping's nonce.
///
/// Wire layout (all protocol versions):
/// - 0..8 nonce (u64 LE)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MsgPong {
    /// Value copied from the ping being answered
    pub nonce: u64,
}

impl MsgPong {
    /// Encoded size in bytes.
    pub const PAYLOAD_LEN: u32 = 8;

    pub fn new(nonce: u64) -> Self {
        Self { nonce }
    }
}

impl Message for MsgPong {
    fn command(&self) -> &'static str {
        CMD_PONG
    }

    fn max_payload_length(&self, _pver: u32) -> u32 {
        Self::PAYLOAD_LEN
    }

    fn encode(&self, w: &mut dyn Write, _pver: u32) -> WireResult<()> {
        write_u64_le(w, self.nonce)
    }

    fn decode(&mut self, r: &mut dyn Read, _pver: u32) -> WireResult<()> {
        self.nonce = read_u64_le(r)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::PROTOCOL_VERSION;
    use std::io::ErrorKind;

    const NONCE_123123_LE: [u8; 8] = [0xf3, 0xe0, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00];

    #[test]
    fn test_pong_latest() {
        let pver = PROTOCOL_VERSION;
        let nonce: u64 = rand::random();

        let msg = MsgPong::new(nonce);
        assert_eq!(msg.nonce, nonce);
        assert_eq!(msg.command(), "pong");
        assert_eq!(msg.max_payload_length(pver), 8);

        let mut buf = Vec::new();
        msg.encode(&mut buf, pver).unwrap();
        assert_eq!(buf.len() as u32, msg.max_payload_length(pver));

        let mut read = MsgPong::new(0);
        read.decode(&mut &buf[..], pver).unwrap();
        assert_eq!(read, msg);
    }

    #[test]
    fn test_pong_wire() {
        let msg = MsgPong { nonce: 123123 };

        let mut buf = Vec::new();
        msg.encode(&mut buf, PROTOCOL_VERSION).unwrap();
        assert_eq!(buf, NONCE_123123_LE);

        let mut decoded = MsgPong::default();
        decoded.decode(&mut &NONCE_123123_LE[..], PROTOCOL_VERSION).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_pong_roundtrip_edge_nonces() {
        for pver in 1..=PROTOCOL_VERSION {
            for nonce in [0, 1, 123123, u64::MAX - 1, u64::MAX] {
                let msg = MsgPong::new(nonce);
                let mut buf = Vec::new();
                msg.encode(&mut buf, pver).unwrap();

                let mut decoded = MsgPong::default();
                decoded.decode(&mut &buf[..], pver).unwrap();
                assert_eq!(decoded, msg, "nonce {} pver {}", nonce, pver);
            }
        }
    }

    #[test]
    fn test_pong_max_payload_is_version_invariant() {
        let msg = MsgPong::default();
        for pver in 0..=PROTOCOL_VERSION + 1 {
            assert_eq!(msg.max_payload_length(pver), 8);
        }
    }

    #[test]
    fn test_pong_wire_errors() {
        let msg = MsgPong::new(123123);

        // A sink with no room fails on the nonce.
        let mut sink = [0u8; 0];
        let mut w = &mut sink[..];
        let err = msg.encode(&mut w, PROTOCOL_VERSION).unwrap_err();
        assert!(!err.is_message_error());
        assert_eq!(err.io_kind(), Some(ErrorKind::WriteZero));

        // An empty source fails on the nonce.
        let mut decoded = MsgPong::default();
        let err = decoded.decode(&mut &[0u8; 0][..], PROTOCOL_VERSION).unwrap_err();
        assert!(!err.is_message_error());
        assert_eq!(err.io_kind(), Some(ErrorKind::UnexpectedEof));

        // So does a truncated one.
        let err = decoded
            .decode(&mut &NONCE_123123_LE[..7], PROTOCOL_VERSION)
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_pong_equality() {
        assert_eq!(MsgPong::new(5), MsgPong { nonce: 5 });
        assert_ne!(MsgPong::new(5), MsgPong::new(6));
    }
}

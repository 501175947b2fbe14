//! dcrwire - wire message codec for a peer-to-peer node
//!
//! Turns typed protocol messages into exact byte sequences and back, and owns
//! the tables that identify networks and advertised peer services.

pub mod config;
pub mod protocol;

pub use protocol::{
    decode_payload, encode_payload, make_empty_message, CurrencyNet, Message, MessageError,
    MsgPong, ServiceFlag, WireError, WireResult, PROTOCOL_VERSION,
};

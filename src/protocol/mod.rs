//! Protocol module - Defines the wire codec contract for peer messages
//!
//! Every message on the wire is a fixed-order sequence of fields:
//! - fixed-size integers are little-endian
//! - the layout may depend on the negotiated protocol version
//! - the outer envelope (magic, command, length, checksum) belongs to the
//!   framing layer and is not produced here

mod codec;
mod common;
mod error;
mod message;
mod network;
mod pong;
mod service;

pub use codec::*;
pub use common::*;
pub use error::*;
pub use message::*;
pub use network::*;
pub use pong::*;
pub use service::*;

/// Latest protocol version this crate fully supports.
///
/// Callers pass the version negotiated for a connection into every encode and
/// decode call; this constant is only the upper bound they may choose.
pub const PROTOCOL_VERSION: u32 = 1;

/// Maximum number of bytes a command name may occupy in a frame header.
pub const COMMAND_SIZE: usize = 12;

/// Maximum payload size of any single message (32 MiB).
pub const MAX_MESSAGE_PAYLOAD: u32 = 1024 * 1024 * 32;

/// Command name of the liveness reply message.
pub const CMD_PONG: &str = "pong";

use crate::types::GameState;
use serde::{Deserialize, Serialize};

/// Version string sent in the welcome message.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Messages pushed from the server to WebSocket clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        protocol: String,
        revision: u64,
        state: GameState,
        server_now: String,
    },
    /// Full state after a committed mutation.
    State { revision: u64, state: GameState },
    Heartbeat { server_now: String },
}

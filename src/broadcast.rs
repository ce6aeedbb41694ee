use crate::protocol::ServerMessage;
use crate::state::GameStore;
use std::time::Duration;

/// Spawn a background task that pings WebSocket clients so idle presenter
/// screens notice a dead connection
pub fn spawn_heartbeat(store: GameStore, interval: Duration) {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;

            let msg = ServerMessage::Heartbeat {
                server_now: chrono::Utc::now().to_rfc3339(),
            };

            // Ignore send errors (no receivers connected is fine)
            let _ = store.broadcast.send(msg);
        }
    });
}

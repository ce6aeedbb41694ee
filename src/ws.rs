//! Read-only WebSocket push channel.
//!
//! Presenter screens can subscribe here instead of polling: every committed
//! mutation is forwarded as a full `State` message.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt, Sink};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

use crate::api::AppState;
use crate::protocol::{ServerMessage, PROTOCOL_VERSION};

/// WebSocket upgrade handler
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    tracing::info!("WebSocket connection request");
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    // Subscribe before taking the snapshot so no update falls in between
    let mut broadcast_rx = state.store.broadcast.subscribe();

    let (revision, game) = state.store.snapshot().await;
    let welcome = ServerMessage::Welcome {
        protocol: PROTOCOL_VERSION.to_string(),
        revision,
        state: game,
        server_now: chrono::Utc::now().to_rfc3339(),
    };

    if send_json(&mut sender, &welcome).await.is_err() {
        tracing::error!("Failed to send welcome message");
        return;
    }

    loop {
        tokio::select! {
            broadcast_msg = broadcast_rx.recv() => {
                let msg = match broadcast_msg {
                    Ok(msg) => msg,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("WebSocket client lagged by {} messages, resyncing", skipped);
                        let (revision, game) = state.store.snapshot().await;
                        ServerMessage::State { revision, state: game }
                    }
                    Err(RecvError::Closed) => break,
                };
                if send_json(&mut sender, &msg).await.is_err() {
                    break;
                }
            }

            ws_msg = receiver.next() => {
                match ws_msg {
                    Some(Ok(Message::Text(text))) => {
                        tracing::debug!("Ignoring client message: {}", text);
                    }
                    Some(Ok(Message::Close(_))) => {
                        tracing::info!("WebSocket closed");
                        break;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if sender.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("WebSocket error: {}", e);
                        break;
                    }
                    None => break,
                }
            }
        }
    }

    tracing::info!("WebSocket connection closed");
}

async fn send_json<S>(sender: &mut S, msg: &ServerMessage) -> Result<(), ()>
where
    S: Sink<Message> + Unpin,
{
    let json = serde_json::to_string(msg).map_err(|e| {
        tracing::error!("Failed to serialize message: {}", e);
    })?;
    sender.send(Message::Text(json.into())).await.map_err(|_| ())
}

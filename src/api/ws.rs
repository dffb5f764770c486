use crate::notify::EventEnvelope;
use crate::state::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

// GET /events handler: push every created transaction to the client
pub async fn events_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let mut events = state.notifier.subscribe();
    let (mut sender, mut receiver) = socket.split();

    debug!("Notification subscriber connected");

    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Ok(transaction) => {
                        let envelope = EventEnvelope::created(transaction);
                        let payload = match serde_json::to_string(&envelope) {
                            Ok(payload) => payload,
                            Err(e) => {
                                warn!("Failed to serialize notification: {}", e);
                                continue;
                            }
                        };
                        if sender.send(Message::Text(payload.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        // Best-effort delivery: the client reconciles on its
                        // next full list fetch.
                        warn!("Notification subscriber lagged, skipped {} events", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    // Inbound frames carry nothing we act on
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                }
            }
        }
    }

    debug!("Notification subscriber disconnected");
}

//! WebSocket subscriber endpoint
//!
//! `GET /ws/notifications/{post_id}` upgrades to a WebSocket, joins the
//! post's topic and forwards every notification published there as a
//! JSON text frame. Delivery is at-most-once: a subscriber sees only
//! what is published while its connection is live, and a slow consumer
//! that falls behind the broadcast buffer silently skips the overwritten
//! messages. Inbound frames other than close are ignored.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::domain::notification::Topic;

/// GET /ws/notifications/{post_id}
pub async fn subscribe(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| run_subscriber(state, post_id, socket))
}

async fn run_subscriber(state: AppState, post_id: Uuid, socket: WebSocket) {
    let topic = Topic::for_post(post_id);
    let mut rx = state.notification_bus.subscribe(&topic).await;
    debug!(%topic, "subscriber joined");

    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Ok(message) => {
                    let payload = match serde_json::to_string(&message) {
                        Ok(payload) => payload,
                        Err(e) => {
                            warn!(%topic, error = %e, "dropping unserializable notification");
                            continue;
                        }
                    };
                    if sink.send(Message::Text(payload.into())).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(%topic, skipped, "subscriber lagged, notifications skipped");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    // Drop our receiver before pruning so an otherwise-empty topic goes away.
    drop(rx);
    state.notification_bus.leave(&topic).await;
    debug!(%topic, "subscriber left");
}

//! SSE event stream for real-time client updates
//!
//! Every bus event is forwarded to connected clients as a named SSE event
//! with a JSON payload. Slow clients that lag behind the broadcast buffer
//! miss events rather than blocking the producers.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::{Stream, StreamExt};
use tokio_stream::wrappers::BroadcastStream;
use tracing::{info, warn};

use crate::state::SharedState;

/// GET /api/v1/events - subscribe to the event stream
pub async fn sse_handler(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!(
        "SSE client connected ({} already subscribed)",
        state.events.subscriber_count()
    );

    let rx = state.events.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|result| async move {
        match result {
            Ok(focus_event) => {
                let name = focus_event.event_type().to_string();
                Event::default()
                    .event(name)
                    .json_data(&focus_event)
                    .ok()
                    .map(Ok)
            }
            Err(e) => {
                // Lagged receiver; log and continue
                warn!("SSE client error: {:?}", e);
                None
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

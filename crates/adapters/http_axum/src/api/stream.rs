//! Server-Sent Events (SSE) stream of presented frames.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::{Stream, StreamExt};

use terratrack_domain::frame::DashboardFrame;

use crate::state::AppState;

/// `GET /api/stream`: one `frame` event per refresh cycle.
///
/// The latest frame (if any) is sent immediately so a new client has
/// something to show, followed by every frame presented afterwards. The
/// stream continues until the client disconnects or the bus is closed.
pub async fn stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // Subscribe first so no frame falls between `latest` and the subscription.
    let frame_rx = state.frames.subscribe();
    let events = frame_stream(frame_rx, state.frames.latest())
        .filter_map(|frame| to_event(&frame).map(Ok::<_, Infallible>));

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// The replayed frame followed by live frames newer than it.
fn frame_stream(
    frame_rx: broadcast::Receiver<DashboardFrame>,
    replayed: Option<DashboardFrame>,
) -> impl Stream<Item = DashboardFrame> {
    let replayed_sequence = replayed.as_ref().map_or(0, |frame| frame.sequence);

    let live = BroadcastStream::new(frame_rx).filter_map(move |result| match result {
        Ok(frame) if frame.sequence > replayed_sequence => Some(frame),
        Ok(_) => None,
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!(skipped, "SSE subscriber lagged, some frames were dropped");
            None
        }
    });

    tokio_stream::iter(replayed).chain(live)
}

fn to_event(frame: &DashboardFrame) -> Option<Event> {
    match serde_json::to_string(frame) {
        Ok(json) => Some(
            Event::default()
                .event("frame")
                .id(frame.sequence.to_string())
                .data(json),
        ),
        Err(err) => {
            tracing::warn!(%err, sequence = frame.sequence, "failed to serialize frame for SSE");
            None
        }
    }
}

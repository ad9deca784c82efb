use axum::response::{
    IntoResponse, Response, Sse,
    sse::{Event, KeepAlive},
};
use futures::stream::{self, Stream, StreamExt};
use std::{convert::Infallible, time::Duration};

use crate::application::services::{RelayStep, relay::into_event_stream};

pub const UI_MESSAGE_STREAM_HEADER: &str = "x-vercel-ai-ui-message-stream";
const DONE_MARKER: &str = "[DONE]";

/// Streams planned relay steps as a UI message stream: one JSON `data:`
/// line per event, then `[DONE]`.
pub fn relay_response(steps: Vec<RelayStep>) -> Response {
    let events = into_event_stream(steps)
        .map(|event| {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Ok::<_, Infallible>(Event::default().data(data))
        })
        .chain(stream::once(async {
            Ok::<_, Infallible>(Event::default().data(DONE_MARKER))
        }));

    ([(UI_MESSAGE_STREAM_HEADER, "v1")], create_sse_response(events)).into_response()
}

pub fn create_sse_response<S>(stream: S) -> Response
where
    S: Stream<Item = Result<Event, Infallible>> + Send + 'static,
{
    Sse::new(stream)
        .keep_alive(
            KeepAlive::new()
                .interval(Duration::from_secs(30))
                .text("keep-alive"),
        )
        .into_response()
}

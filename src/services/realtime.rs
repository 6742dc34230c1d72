//! Standing subscription to row-insert events on the backend's realtime
//! socket. One channel per topic; the socket task owns both halves of the
//! split websocket and multiplexes reads with heartbeat/leave commands.

use futures::channel::mpsc::{self, UnboundedSender};
use futures::{FutureExt, SinkExt, StreamExt};
use gloo::net::websocket::futures::WebSocket;
use gloo::net::websocket::Message as WsMessage;
use gloo::timers::callback::Interval;
use serde_json::{json, Value};
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use crate::config;
use crate::services::api::ApiError;

const HEARTBEAT_MILLIS: u32 = 30_000;

enum Command {
    Heartbeat,
    Leave,
}

/// Handle to one realtime subscription. Dropping it (or calling [`close`])
/// sends the leave frame and tears the socket down, so a consumer that goes
/// away cannot keep a duplicate listener alive.
///
/// [`close`]: RealtimeChannel::close
pub struct RealtimeChannel {
    commands: UnboundedSender<Command>,
    _heartbeat: Interval,
}

impl RealtimeChannel {
    /// Subscribes to INSERT events on `table` rows matching `filter`
    /// (e.g. `booking_id=eq.<id>`). Each inserted row is delivered to
    /// `on_insert` as raw JSON.
    pub fn subscribe_inserts(
        table: &str,
        filter: &str,
        on_insert: Callback<Value>,
    ) -> Result<RealtimeChannel, ApiError> {
        let socket = WebSocket::open(&config::realtime_url())
            .map_err(|error| ApiError::Network(error.to_string()))?;
        let topic = format!("realtime:public:{table}:{filter}");

        let (commands, mut command_rx) = mpsc::unbounded::<Command>();
        let heartbeat = {
            let commands = commands.clone();
            Interval::new(HEARTBEAT_MILLIS, move || {
                let _ = commands.unbounded_send(Command::Heartbeat);
            })
        };

        spawn_local(async move {
            let (mut sink, mut stream) = socket.split();
            let mut frame_ref: u64 = 1;
            if let Err(error) = sink.send(WsMessage::Text(join_frame(&topic, frame_ref))).await {
                log::error!("realtime join failed for {topic}: {error:?}");
                return;
            }

            loop {
                futures::select! {
                    incoming = stream.next().fuse() => match incoming {
                        Some(Ok(WsMessage::Text(text))) => {
                            if let Some(record) = parse_insert_record(&text, &topic) {
                                on_insert.emit(record);
                            }
                        }
                        Some(Ok(WsMessage::Bytes(_))) => {}
                        Some(Err(error)) => {
                            log::warn!("realtime socket error on {topic}: {error:?}");
                            break;
                        }
                        None => break,
                    },
                    command = command_rx.next() => match command {
                        Some(Command::Heartbeat) => {
                            frame_ref += 1;
                            let frame = heartbeat_frame(frame_ref);
                            if sink.send(WsMessage::Text(frame)).await.is_err() {
                                break;
                            }
                        }
                        Some(Command::Leave) | None => {
                            frame_ref += 1;
                            let _ = sink.send(WsMessage::Text(leave_frame(&topic, frame_ref))).await;
                            break;
                        }
                    },
                }
            }
            log::debug!("realtime channel closed: {topic}");
        });

        Ok(RealtimeChannel {
            commands,
            _heartbeat: heartbeat,
        })
    }

    pub fn close(&self) {
        let _ = self.commands.unbounded_send(Command::Leave);
    }
}

impl Drop for RealtimeChannel {
    fn drop(&mut self) {
        self.close();
    }
}

fn join_frame(topic: &str, frame_ref: u64) -> String {
    json!({
        "topic": topic,
        "event": "phx_join",
        "payload": {},
        "ref": frame_ref.to_string(),
    })
    .to_string()
}

fn heartbeat_frame(frame_ref: u64) -> String {
    json!({
        "topic": "phoenix",
        "event": "heartbeat",
        "payload": {},
        "ref": frame_ref.to_string(),
    })
    .to_string()
}

fn leave_frame(topic: &str, frame_ref: u64) -> String {
    json!({
        "topic": topic,
        "event": "phx_leave",
        "payload": {},
        "ref": frame_ref.to_string(),
    })
    .to_string()
}

/// Extracts the inserted row from an INSERT frame on our topic; anything else
/// (acks, heartbeats, other topics) yields `None`.
fn parse_insert_record(text: &str, topic: &str) -> Option<Value> {
    let frame: Value = serde_json::from_str(text).ok()?;
    if frame.get("topic").and_then(Value::as_str) != Some(topic) {
        return None;
    }
    if frame.get("event").and_then(Value::as_str) != Some("INSERT") {
        return None;
    }
    frame.get("payload")?.get("record").cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPIC: &str = "realtime:public:messages:booking_id=eq.b-1";

    #[test]
    fn parses_insert_frame_for_the_topic() {
        let frame = json!({
            "topic": TOPIC,
            "event": "INSERT",
            "payload": {
                "record": { "id": "m-1", "booking_id": "b-1", "message": "oi" }
            },
            "ref": null,
        })
        .to_string();
        let record = parse_insert_record(&frame, TOPIC).unwrap();
        assert_eq!(record["id"], "m-1");
        assert_eq!(record["message"], "oi");
    }

    #[test]
    fn ignores_other_topics_and_events() {
        let other_topic = json!({
            "topic": "realtime:public:messages:booking_id=eq.b-2",
            "event": "INSERT",
            "payload": { "record": { "id": "m-2" } },
        })
        .to_string();
        assert!(parse_insert_record(&other_topic, TOPIC).is_none());

        let ack = json!({
            "topic": TOPIC,
            "event": "phx_reply",
            "payload": { "status": "ok" },
        })
        .to_string();
        assert!(parse_insert_record(&ack, TOPIC).is_none());

        assert!(parse_insert_record("not json", TOPIC).is_none());
    }

    #[test]
    fn control_frames_carry_the_ref() {
        let join: Value = serde_json::from_str(&join_frame(TOPIC, 1)).unwrap();
        assert_eq!(join["event"], "phx_join");
        assert_eq!(join["topic"], TOPIC);
        assert_eq!(join["ref"], "1");

        let leave: Value = serde_json::from_str(&leave_frame(TOPIC, 3)).unwrap();
        assert_eq!(leave["event"], "phx_leave");

        let beat: Value = serde_json::from_str(&heartbeat_frame(2)).unwrap();
        assert_eq!(beat["topic"], "phoenix");
        assert_eq!(beat["event"], "heartbeat");
    }
}

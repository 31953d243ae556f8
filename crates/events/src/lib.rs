//! Gameplay analytics events.
//!
//! [`GameEvent`]s produced by the core are translated here into named
//! events with JSON parameters and handed to an [`EventSink`]. Sinks are
//! best-effort: a sink that cannot record an event logs a warning and the
//! game carries on.
//!
//! | event name            | parameters                                   |
//! |-----------------------|----------------------------------------------|
//! | `game_start`          | high_score                                   |
//! | `food_eaten`          | score, snake_length                          |
//! | `score_milestone`     | milestone                                    |
//! | `high_score_achieved` | new_high_score, previous_high_score, improvement |
//! | `game_over`           | final_score, high_score, snake_length, game_duration_ms, is_new_high_score |

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::{json, Map, Value};

use tui_snake_types::GameEvent;

/// Parameters attached to a named analytics event.
pub type EventParams = Map<String, Value>;

/// Destination for analytics events.
pub trait EventSink {
    fn log_event(&self, name: &str, params: &EventParams);
}

/// Translate a [`GameEvent`] into a named event and deliver it.
pub fn emit(sink: &dyn EventSink, event: &GameEvent) {
    let (name, value) = match *event {
        GameEvent::GameStart { high_score } => ("game_start", json!({ "high_score": high_score })),
        GameEvent::FoodEaten { score, snake_length } => (
            "food_eaten",
            json!({ "score": score, "snake_length": snake_length }),
        ),
        GameEvent::ScoreMilestone { milestone } => {
            ("score_milestone", json!({ "milestone": milestone }))
        }
        GameEvent::HighScore {
            new_high_score,
            previous_high_score,
        } => (
            "high_score_achieved",
            json!({
                "new_high_score": new_high_score,
                "previous_high_score": previous_high_score,
                "improvement": new_high_score.saturating_sub(previous_high_score),
            }),
        ),
        GameEvent::GameOver {
            final_score,
            high_score,
            snake_length,
            game_duration_ms,
            is_new_high_score,
        } => (
            "game_over",
            json!({
                "final_score": final_score,
                "high_score": high_score,
                "snake_length": snake_length,
                "game_duration_ms": game_duration_ms,
                "is_new_high_score": is_new_high_score,
            }),
        ),
    };

    if let Value::Object(params) = value {
        sink.log_event(name, &params);
    }
}

/// Sink that discards everything.
pub struct NullSink;

impl EventSink for NullSink {
    fn log_event(&self, _name: &str, _params: &EventParams) {}
}

/// Sink that appends one JSON object per line to a file.
///
/// Write failures are logged and swallowed; analytics must never take the
/// game down with it.
pub struct JsonlSink {
    path: PathBuf,
    file: Mutex<Option<std::fs::File>>,
}

impl JsonlSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: Mutex::new(None),
        }
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *guard = Some(file);
        }
        if let Some(file) = guard.as_mut() {
            file.write_all(line.as_bytes())?;
            file.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl EventSink for JsonlSink {
    fn log_event(&self, name: &str, params: &EventParams) {
        let record = json!({ "event": name, "params": params });
        if let Err(err) = self.write_line(&record.to_string()) {
            log::warn!("failed to record event {name}: {err}");
        }
    }
}

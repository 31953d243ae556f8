//! Terminal snake runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! The tick interval follows the current score, so the loop polls with a
//! deadline instead of a fixed cadence.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::events::{emit, EventSink, JsonlSink};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::store::{FileStore, HighScoreStore};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameEvent, Phase};

/// Poll timeout while no game is running.
const IDLE_POLL: Duration = Duration::from_millis(250);

const LOG_FILE: &str = "tui-snake.log";
const EVENTS_FILE: &str = "tui-snake-events.jsonl";

fn main() -> Result<()> {
    init_logging();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() {
    // Logging is best-effort; play on without it.
    let Ok(file) = std::fs::File::create(LOG_FILE) else {
        return;
    };
    let _ = simplelog::WriteLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        file,
    );
}

fn seed_from_clock() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ (elapsed.as_secs() as u32),
        Err(_) => 1,
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = FileStore::in_home_dir();
    let sink = JsonlSink::new(EVENTS_FILE);

    let mut state = GameState::new(seed_from_clock(), store.load());
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut next_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        state.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick deadline.
        let timeout = if state.phase() == Phase::Running {
            next_tick.saturating_duration_since(Instant::now())
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let was_running = state.phase() == Phase::Running;
                        state.apply_action(action);
                        if !was_running && state.phase() == Phase::Running {
                            next_tick =
                                Instant::now() + Duration::from_millis(state.tick_interval_ms());
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if state.phase() == Phase::Running && Instant::now() >= next_tick {
            state.tick();
            next_tick = Instant::now() + Duration::from_millis(state.tick_interval_ms());
        }

        drain_events(&mut state, &sink, &store);
    }
}

/// Deliver pending analytics events and mirror high-score updates into the
/// persistent store.
fn drain_events(state: &mut GameState, sink: &dyn EventSink, store: &dyn HighScoreStore) {
    for event in state.take_events() {
        if let GameEvent::HighScore { new_high_score, .. } = event {
            store.save(new_high_score);
        }
        emit(sink, &event);
    }
}

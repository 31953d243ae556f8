//! Integration tests for the game loop: core state machine plus the
//! analytics and persistence plumbing the runner wires around it.

use std::cell::RefCell;

use tui_snake::core::GameState;
use tui_snake::events::{emit, EventParams, EventSink};
use tui_snake::store::{HighScoreStore, MemoryStore};
use tui_snake::types::{Direction, GameAction, GameEvent, Phase, FOOD_SCORE, GRID_COUNT};

struct CollectingSink {
    seen: RefCell<Vec<(String, EventParams)>>,
}

impl CollectingSink {
    fn new() -> Self {
        Self {
            seen: RefCell::new(Vec::new()),
        }
    }

    fn names(&self) -> Vec<String> {
        self.seen.borrow().iter().map(|(n, _)| n.clone()).collect()
    }
}

impl EventSink for CollectingSink {
    fn log_event(&self, name: &str, params: &EventParams) {
        self.seen
            .borrow_mut()
            .push((name.to_string(), params.clone()));
    }
}

/// What the runner does after every loop iteration.
fn drain(state: &mut GameState, sink: &CollectingSink, store: &dyn HighScoreStore) {
    for event in state.take_events() {
        if let GameEvent::HighScore { new_high_score, .. } = event {
            store.save(new_high_score);
        }
        emit(sink, &event);
    }
}

/// Steer one tick toward the current food, never reversing.
fn steer_toward_food(state: &mut GameState) {
    let snap = state.snapshot();
    let head = match snap.head() {
        Some(head) => head,
        None => return,
    };
    let food = match snap.food {
        Some(food) => food,
        None => return,
    };

    let mut wanted = Vec::new();
    if food.x > head.x {
        wanted.push(Direction::Right);
    } else if food.x < head.x {
        wanted.push(Direction::Left);
    }
    if food.y > head.y {
        wanted.push(Direction::Down);
    } else if food.y < head.y {
        wanted.push(Direction::Up);
    }
    wanted.extend([
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]);

    let current = state.direction();
    if let Some(dir) = wanted.into_iter().find(|d| !d.is_opposite(current)) {
        state.request_turn(dir);
    }
    state.tick();
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345, 0);
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.snake_len(), 3);

    state.start();
    assert_eq!(state.phase(), Phase::Running);
    assert!(state.food().is_some());
    assert_eq!(state.score(), 0);

    // Moving right from the center hits the wall eventually.
    for _ in 0..GRID_COUNT {
        if state.phase() != Phase::Running {
            break;
        }
        state.tick();
    }
    assert_eq!(state.phase(), Phase::Over);
}

#[test]
fn test_turn_key_starts_an_idle_game() {
    let mut state = GameState::new(7, 0);
    state.apply_action(GameAction::Turn(Direction::Up));
    assert_eq!(state.phase(), Phase::Running);
    // The first run always opens moving right.
    assert_eq!(state.direction(), Direction::Right);
}

#[test]
fn test_snake_stays_on_board_until_game_over() {
    let mut state = GameState::new(99, 0);
    state.start();

    for _ in 0..5000 {
        if state.phase() != Phase::Running {
            break;
        }
        steer_toward_food(&mut state);
        for cell in state.snake() {
            assert!(cell.in_bounds());
        }
        // Score and length move together.
        assert_eq!(
            state.snake_len() as u32,
            3 + state.score() / FOOD_SCORE
        );
    }
}

#[test]
fn test_event_and_store_flow_through_a_run() {
    let sink = CollectingSink::new();
    let store = MemoryStore::new(0);

    let mut state = GameState::new(4242, store.load());
    state.start();
    drain(&mut state, &sink, &store);
    assert_eq!(sink.names(), vec!["game_start"]);

    // Chase food until the first bite.
    for _ in 0..2000 {
        if state.score() > 0 || state.phase() != Phase::Running {
            break;
        }
        steer_toward_food(&mut state);
        drain(&mut state, &sink, &store);
    }

    assert!(state.score() >= FOOD_SCORE, "steering should reach the food");
    let names = sink.names();
    assert!(names.contains(&"food_eaten".to_string()));
    // First point beats a zero high score, and the store sees it.
    assert!(names.contains(&"high_score_achieved".to_string()));
    assert_eq!(store.load(), state.score());
}

#[test]
fn test_stored_high_score_feeds_the_start_event() {
    let sink = CollectingSink::new();
    let store = MemoryStore::new(230);

    let mut state = GameState::new(1, store.load());
    assert_eq!(state.high_score(), 230);

    state.start();
    drain(&mut state, &sink, &store);

    let seen = sink.seen.borrow();
    assert_eq!(seen[0].0, "game_start");
    assert_eq!(seen[0].1["high_score"], serde_json::json!(230));
    // No save happens until the stored score is actually beaten.
    assert_eq!(store.load(), 230);
}

#[test]
fn test_game_over_event_reports_duration_and_high_score_flag() {
    let sink = CollectingSink::new();
    let store = MemoryStore::new(500);

    let mut state = GameState::new(12345, store.load());
    state.start();
    while state.phase() == Phase::Running {
        state.tick();
    }
    drain(&mut state, &sink, &store);

    let seen = sink.seen.borrow();
    let (name, params) = seen.last().unwrap();
    assert_eq!(name, "game_over");
    assert_eq!(params["final_score"], serde_json::json!(0));
    assert_eq!(params["high_score"], serde_json::json!(500));
    assert_eq!(params["is_new_high_score"], serde_json::json!(false));
    // Running straight into the wall takes a handful of 150ms ticks.
    let duration = params["game_duration_ms"].as_u64().unwrap();
    assert!(duration > 0 && duration % 150 == 0);
}

#[test]
fn test_restart_after_game_over() {
    let mut state = GameState::new(2, 0);
    state.start();
    while state.phase() == Phase::Running {
        state.tick();
    }
    assert_eq!(state.phase(), Phase::Over);

    state.apply_action(GameAction::Start);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.score(), 0);
    assert_eq!(state.snake_len(), 3);
}

#[test]
fn test_same_seed_same_run() {
    let mut a = GameState::new(777, 0);
    let mut b = GameState::new(777, 0);
    a.start();
    b.start();

    for _ in 0..200 {
        steer_toward_food(&mut a);
        steer_toward_food(&mut b);
        assert_eq!(a.snapshot(), b.snapshot());
        if a.phase() != Phase::Running {
            break;
        }
    }
}

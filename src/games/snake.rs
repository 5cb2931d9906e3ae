//! Snake — the 20×20 DOM-grid game behind `/api/games/snake`.
//!
//! Pure grid simulation: the route layer renders the grid fragment, the
//! bridge only forwards key presses and a fixed-interval tick. Food placement
//! rejection-samples the injected RNG so it never lands on the body.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

use crate::profile::{self, ScoredGame};

pub const GRID_SIZE: i32 = 20;
pub const FOOD_POINTS: u32 = 10;

const START_CELL: Cell = Cell { x: 10, y: 10 };
const START_FOOD: Cell = Cell { x: 15, y: 15 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Dir::Left | Dir::Right)
    }

    /// Parse a direction from a form value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "up" => Some(Dir::Up),
            "down" => Some(Dir::Down),
            "left" => Some(Dir::Left),
            "right" => Some(Dir::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SnakeState {
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub dir: Dir,
    pub running: bool,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
}

impl SnakeState {
    pub fn new() -> Self {
        Self {
            snake: vec![START_CELL],
            food: START_FOOD,
            dir: Dir::Up,
            running: false,
            paused: false,
            game_over: false,
            score: 0,
        }
    }

    pub fn start(&mut self) {
        *self = Self::new();
        self.running = true;
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }
}

impl Default for SnakeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Steer the snake. Reversal into the body is rejected: a horizontal turn is
/// only honored while moving vertically, and vice versa.
pub fn turn(state: &mut SnakeState, dir: Dir) {
    if !state.running || state.game_over {
        return;
    }
    if dir.is_horizontal() == state.dir.is_horizontal() {
        return;
    }
    state.dir = dir;
}

pub fn toggle_pause(state: &mut SnakeState) {
    if state.running && !state.game_over {
        state.paused = !state.paused;
    }
}

/// Advance one step. No-op before start, while paused, or after game over.
/// Returns true when this step ended the run.
pub fn tick(state: &mut SnakeState, rng: &mut impl Rng) -> bool {
    if !state.running || state.paused || state.game_over {
        return false;
    }

    let (dx, dy) = state.dir.delta();
    let head = Cell {
        x: state.head().x + dx,
        y: state.head().y + dy,
    };

    // Wall contact ends the run.
    if head.x < 0 || head.x >= GRID_SIZE || head.y < 0 || head.y >= GRID_SIZE {
        state.game_over = true;
        state.running = false;
        return true;
    }
    // So does biting any current segment.
    if state.snake.contains(&head) {
        state.game_over = true;
        state.running = false;
        return true;
    }

    state.snake.insert(0, head);

    if head == state.food {
        state.score += FOOD_POINTS;
        state.food = spawn_food(&state.snake, rng);
    } else {
        state.snake.pop();
    }
    false
}

/// Pick a food cell uniformly among cells not covered by the snake.
fn spawn_food(snake: &[Cell], rng: &mut impl Rng) -> Cell {
    loop {
        let candidate = Cell {
            x: rng.gen_range(0..GRID_SIZE),
            y: rng.gen_range(0..GRID_SIZE),
        };
        if !snake.contains(&candidate) {
            return candidate;
        }
    }
}

// ── Session ────────────────────────────────────────────────────────

pub const DEFAULT_SEED: u64 = 0x534e_414b_4532_3032;

struct Session {
    state: SnakeState,
    rng: SmallRng,
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session {
        state: SnakeState::new(),
        rng: SmallRng::seed_from_u64(DEFAULT_SEED),
    });
}

pub fn session_start(seed: u64) {
    SESSION.with(|s| {
        let mut session = s.borrow_mut();
        session.rng = SmallRng::seed_from_u64(seed);
        session.state.start();
    });
}

pub fn session_turn(dir: Dir) {
    SESSION.with(|s| turn(&mut s.borrow_mut().state, dir));
}

pub fn session_toggle_pause() {
    SESSION.with(|s| toggle_pause(&mut s.borrow_mut().state));
}

/// Advance the live game; records the high score on the terminal step.
pub fn session_tick() {
    SESSION.with(|s| {
        let session = &mut *s.borrow_mut();
        if tick(&mut session.state, &mut session.rng) {
            profile::record_score(ScoredGame::Snake, session.state.score);
        }
    });
}

pub fn session_reset() {
    SESSION.with(|s| {
        s.borrow_mut().state = SnakeState::new();
    });
}

pub fn with_session_state<F, R>(f: F) -> R
where
    F: FnOnce(&SnakeState) -> R,
{
    SESSION.with(|s| f(&s.borrow().state))
}

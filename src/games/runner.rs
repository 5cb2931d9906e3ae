//! Network runner — the snake-variant arcade game behind `/api/games/runner`.
//!
//! A data stream runs on a 20×20 grid that wraps at the edges (no wall
//! deaths). Every packet collected grows the stream, scores, and raises a
//! firewall block somewhere on the free grid; touching a firewall or the
//! stream's own body ends the run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

use crate::games::snake::{Cell, Dir};
use crate::profile::{self, ScoredGame};

pub const GRID_SIZE: i32 = 20;
pub const PACKET_POINTS: u32 = 10;

const START_CELL: Cell = Cell { x: 10, y: 10 };
const START_PACKET: Cell = Cell { x: 15, y: 15 };

#[derive(Debug, Clone)]
pub struct RunnerState {
    /// Head first.
    pub stream: Vec<Cell>,
    pub packet: Cell,
    pub firewalls: Vec<Cell>,
    pub dir: Dir,
    pub running: bool,
    pub game_over: bool,
    pub score: u32,
}

impl RunnerState {
    pub fn new() -> Self {
        Self {
            stream: vec![START_CELL],
            packet: START_PACKET,
            firewalls: Vec::new(),
            dir: Dir::Up,
            running: false,
            game_over: false,
            score: 0,
        }
    }

    pub fn start(&mut self) {
        *self = Self::new();
        self.running = true;
    }

    pub fn head(&self) -> Cell {
        self.stream[0]
    }
}

impl Default for RunnerState {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap(coord: i32) -> i32 {
    coord.rem_euclid(GRID_SIZE)
}

/// Steer the stream; reversals are rejected as in snake.
pub fn turn(state: &mut RunnerState, dir: Dir) {
    if !state.running || state.game_over {
        return;
    }
    if dir.is_horizontal() == state.dir.is_horizontal() {
        return;
    }
    state.dir = dir;
}

/// Advance one step. Returns true when this step ended the run.
pub fn tick(state: &mut RunnerState, rng: &mut impl Rng) -> bool {
    if !state.running || state.game_over {
        return false;
    }

    let (dx, dy) = state.dir.delta();
    let head = Cell {
        x: wrap(state.head().x + dx),
        y: wrap(state.head().y + dy),
    };

    if state.firewalls.contains(&head) || state.stream.contains(&head) {
        state.game_over = true;
        state.running = false;
        return true;
    }

    state.stream.insert(0, head);

    if head == state.packet {
        state.score += PACKET_POINTS;
        // Raise a firewall first, then drop the next packet clear of it.
        let block = spawn_free_cell(state, None, rng);
        state.firewalls.push(block);
        state.packet = spawn_free_cell(state, Some(block), rng);
    } else {
        state.stream.pop();
    }
    false
}

/// Pick a cell not covered by the stream, packet, or firewalls (plus an
/// optional extra exclusion for the just-raised block).
fn spawn_free_cell(state: &RunnerState, also_avoid: Option<Cell>, rng: &mut impl Rng) -> Cell {
    loop {
        let candidate = Cell {
            x: rng.gen_range(0..GRID_SIZE),
            y: rng.gen_range(0..GRID_SIZE),
        };
        let blocked = state.stream.contains(&candidate)
            || state.firewalls.contains(&candidate)
            || candidate == state.packet
            || also_avoid == Some(candidate);
        if !blocked {
            return candidate;
        }
    }
}

// ── Session ────────────────────────────────────────────────────────

pub const DEFAULT_SEED: u64 = 0x4e45_5452_554e_3230;

struct Session {
    state: RunnerState,
    rng: SmallRng,
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session {
        state: RunnerState::new(),
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

pub fn session_tick() {
    SESSION.with(|s| {
        let session = &mut *s.borrow_mut();
        if tick(&mut session.state, &mut session.rng) {
            profile::record_score(ScoredGame::Runner, session.state.score);
        }
    });
}

pub fn session_reset() {
    SESSION.with(|s| {
        s.borrow_mut().state = RunnerState::new();
    });
}

pub fn with_session_state<F, R>(f: F) -> R
where
    F: FnOnce(&RunnerState) -> R,
{
    SESSION.with(|s| f(&s.borrow().state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{replace_profile, Profile};

    fn running_state() -> RunnerState {
        let mut state = RunnerState::new();
        state.start();
        state
    }

    #[test]
    fn edges_wrap_instead_of_killing() {
        let mut state = running_state();
        let mut rng = SmallRng::seed_from_u64(1);
        // Heading up from y=10: 10 steps reach y=0, the 11th wraps to 19.
        for _ in 0..11 {
            tick(&mut state, &mut rng);
        }
        assert!(!state.game_over);
        assert_eq!(state.head(), Cell { x: 10, y: 19 });
    }

    #[test]
    fn wrap_is_total_over_a_full_lap() {
        let mut state = running_state();
        let mut rng = SmallRng::seed_from_u64(1);
        // A single-cell stream can never self-collide; a full vertical lap
        // returns to the start (no firewalls yet on the column except by
        // packet luck — the start column holds no packet).
        for _ in 0..GRID_SIZE {
            tick(&mut state, &mut rng);
        }
        assert_eq!(state.head(), START_CELL);
        assert!(!state.game_over);
    }

    #[test]
    fn eating_a_packet_scores_grows_and_raises_a_firewall() {
        let mut state = running_state();
        let mut rng = SmallRng::seed_from_u64(5);
        state.packet = Cell { x: 10, y: 9 };
        tick(&mut state, &mut rng);
        assert_eq!(state.score, PACKET_POINTS);
        assert_eq!(state.stream.len(), 2);
        assert_eq!(state.firewalls.len(), 1);
        // The new packet landed on a free cell.
        assert!(!state.stream.contains(&state.packet));
        assert!(!state.firewalls.contains(&state.packet));
    }

    #[test]
    fn firewall_contact_ends_the_run() {
        let mut state = running_state();
        let mut rng = SmallRng::seed_from_u64(5);
        state.firewalls.push(Cell { x: 10, y: 9 });
        tick(&mut state, &mut rng);
        assert!(state.game_over);
        assert!(!state.running);
    }

    #[test]
    fn self_collision_ends_the_run() {
        let mut state = running_state();
        let mut rng = SmallRng::seed_from_u64(5);
        state.stream = vec![
            Cell { x: 5, y: 5 },
            Cell { x: 5, y: 6 },
            Cell { x: 6, y: 6 },
            Cell { x: 6, y: 5 },
            Cell { x: 6, y: 4 },
        ];
        state.dir = Dir::Right;
        tick(&mut state, &mut rng);
        assert!(state.game_over);
    }

    #[test]
    fn spawned_cells_avoid_every_occupied_cell() {
        let mut state = running_state();
        let mut rng = SmallRng::seed_from_u64(13);
        // Crowd the board to stress rejection sampling.
        state.stream = (0..GRID_SIZE).map(|x| Cell { x, y: 0 }).collect();
        state.firewalls = (0..GRID_SIZE).map(|x| Cell { x, y: 1 }).collect();
        for _ in 0..100 {
            let cell = spawn_free_cell(&state, None, &mut rng);
            assert!(!state.stream.contains(&cell));
            assert!(!state.firewalls.contains(&cell));
            assert_ne!(cell, state.packet);
        }
    }

    #[test]
    fn session_records_high_score_on_terminal_step() {
        replace_profile(Profile::default());
        session_start(7);
        SESSION.with(|s| {
            let session = &mut *s.borrow_mut();
            session.state.score = 60;
            session.state.firewalls.push(Cell { x: 10, y: 9 });
        });
        session_tick(); // runs straight into the firewall
        assert!(with_session_state(|s| s.game_over));
        assert_eq!(profile::high_score(ScoredGame::Runner), 60);
        session_reset();
        replace_profile(Profile::default());
    }
}

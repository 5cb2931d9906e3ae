//! Snake & ladder — the 10×10 board game behind `/api/games/ladder`.
//!
//! One player, one die. Reaching cell 100 wins; burning 50 moves without
//! getting there loses. Both are designed terminal states, not errors.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

pub const WIN_CELL: u32 = 100;
pub const MOVE_LIMIT: u32 = 50;
pub const BOARD_SIDE: u32 = 10;

/// Snake heads and the tails they slide to.
const SNAKES: [(u32, u32); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Ladder feet and the rungs they climb to.
const LADDERS: [(u32, u32); 9] = [
    (1, 38),
    (4, 14),
    (9, 21),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

pub fn snake_at(cell: u32) -> Option<u32> {
    SNAKES.iter().find(|(from, _)| *from == cell).map(|(_, to)| *to)
}

pub fn ladder_at(cell: u32) -> Option<u32> {
    LADDERS.iter().find(|(from, _)| *from == cell).map(|(_, to)| *to)
}

/// Board numbering is boustrophedon: cell 1 sits bottom-left, each row
/// reverses direction. `row`/`col` count from the top-left of the rendered
/// grid.
pub fn cell_number(row: u32, col: u32) -> u32 {
    if row % 2 == 0 {
        (BOARD_SIDE - 1 - row) * BOARD_SIDE + col + 1
    } else {
        (BOARD_SIDE - 1 - row) * BOARD_SIDE + (BOARD_SIDE - col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LadderStatus {
    Playing,
    Won,
    Lost,
}

/// What a single roll did, for the status panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Snake { from: u32, to: u32 },
    Ladder { from: u32, to: u32 },
}

#[derive(Debug, Clone, Copy)]
pub struct RollOutcome {
    pub die: u32,
    pub landed: u32,
    pub transport: Option<Transport>,
}

#[derive(Debug, Clone)]
pub struct LadderState {
    /// 0 = off-board start; 100 = home.
    pub position: u32,
    /// Last die face, for the dice panel.
    pub die: u32,
    pub moves: u32,
    pub status: LadderStatus,
    pub last_outcome: Option<RollOutcome>,
}

impl LadderState {
    pub fn new() -> Self {
        Self {
            position: 0,
            die: 1,
            moves: 0,
            status: LadderStatus::Playing,
            last_outcome: None,
        }
    }
}

impl Default for LadderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Roll the die and move. Returns the outcome, or `None` once the game has
/// already ended.
pub fn roll(state: &mut LadderState, rng: &mut impl Rng) -> Option<RollOutcome> {
    if state.status != LadderStatus::Playing {
        return None;
    }

    state.moves += 1;
    let die = rng.gen_range(1..=6);
    state.die = die;

    // Overshooting the final cell clamps to it.
    let landed = (state.position + die).min(WIN_CELL);

    let transport = if let Some(to) = snake_at(landed) {
        Some(Transport::Snake { from: landed, to })
    } else if let Some(to) = ladder_at(landed) {
        Some(Transport::Ladder { from: landed, to })
    } else {
        None
    };

    state.position = match transport {
        Some(Transport::Snake { to, .. }) | Some(Transport::Ladder { to, .. }) => to,
        None => landed,
    };

    state.status = if state.position == WIN_CELL {
        LadderStatus::Won
    } else if state.moves >= MOVE_LIMIT {
        LadderStatus::Lost
    } else {
        LadderStatus::Playing
    };

    let outcome = RollOutcome {
        die,
        landed,
        transport,
    };
    state.last_outcome = Some(outcome);
    Some(outcome)
}

// ── Session ────────────────────────────────────────────────────────

pub const DEFAULT_SEED: u64 = 0x4c41_4444_4552_3130;

struct Session {
    state: LadderState,
    rng: SmallRng,
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session {
        state: LadderState::new(),
        rng: SmallRng::seed_from_u64(DEFAULT_SEED),
    });
}

pub fn session_roll() -> Option<RollOutcome> {
    SESSION.with(|s| {
        let session = &mut *s.borrow_mut();
        roll(&mut session.state, &mut session.rng)
    })
}

pub fn session_reset(seed: u64) {
    SESSION.with(|s| {
        let mut session = s.borrow_mut();
        session.state = LadderState::new();
        session.rng = SmallRng::seed_from_u64(seed);
    });
}

pub fn with_session_state<F, R>(f: F) -> R
where
    F: FnOnce(&LadderState) -> R,
{
    SESSION.with(|s| f(&s.borrow().state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn boustrophedon_numbering_matches_the_board() {
        // Top row runs 100 → 91 left to right.
        assert_eq!(cell_number(0, 0), 91);
        assert_eq!(cell_number(0, 9), 100);
        // Second row reverses.
        assert_eq!(cell_number(1, 0), 90);
        assert_eq!(cell_number(1, 9), 81);
        // Bottom row starts at 1.
        assert_eq!(cell_number(9, 0), 10);
        assert_eq!(cell_number(9, 9), 1);
    }

    #[test]
    fn every_cell_number_appears_exactly_once() {
        let mut seen = [false; (WIN_CELL + 1) as usize];
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                let n = cell_number(row, col) as usize;
                assert!((1..=100).contains(&n));
                assert!(!seen[n], "duplicate cell {}", n);
                seen[n] = true;
            }
        }
    }

    #[test]
    fn roll_advances_by_the_die() {
        let mut state = LadderState::new();
        // StepRng yields the range minimum: every die comes up 1.
        let mut rng = StepRng::new(0, 0);
        let outcome = roll(&mut state, &mut rng).unwrap();
        assert_eq!(outcome.die, 1);
        // Cell 1 is a ladder foot → climbs to 38.
        assert_eq!(
            outcome.transport,
            Some(Transport::Ladder { from: 1, to: 38 })
        );
        assert_eq!(state.position, 38);
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn snake_head_slides_down() {
        let mut state = LadderState::new();
        state.position = 15;
        let mut rng = StepRng::new(0, 0); // die = 1 → lands on 16
        let outcome = roll(&mut state, &mut rng).unwrap();
        assert_eq!(outcome.landed, 16);
        assert_eq!(outcome.transport, Some(Transport::Snake { from: 16, to: 6 }));
        assert_eq!(state.position, 6);
    }

    #[test]
    fn overshoot_clamps_to_the_final_cell() {
        let mut state = LadderState::new();
        state.position = 99;
        let mut rng = SmallRng::seed_from_u64(1);
        // Any die ≥ 1 clamps to 100 and wins.
        roll(&mut state, &mut rng).unwrap();
        assert_eq!(state.position, WIN_CELL);
        assert_eq!(state.status, LadderStatus::Won);
    }

    #[test]
    fn move_limit_loses_the_game() {
        let mut state = LadderState::new();
        let mut rng = StepRng::new(0, 0); // all ones
        for _ in 0..MOVE_LIMIT {
            if roll(&mut state, &mut rng).is_none() {
                break;
            }
        }
        // With all-1 rolls the player cycles well short of 100.
        assert_eq!(state.moves, MOVE_LIMIT);
        assert_eq!(state.status, LadderStatus::Lost);
        // Finished games refuse further rolls.
        assert!(roll(&mut state, &mut rng).is_none());
        assert_eq!(state.moves, MOVE_LIMIT);
    }

    #[test]
    fn fixed_seed_reproduces_the_same_game() {
        let play = |seed: u64| {
            let mut state = LadderState::new();
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut trace = Vec::new();
            while state.status == LadderStatus::Playing {
                let outcome = roll(&mut state, &mut rng).unwrap();
                trace.push((outcome.die, state.position));
            }
            (trace, state.status)
        };
        assert_eq!(play(21), play(21));
    }

    #[test]
    fn no_cell_is_both_snake_and_ladder() {
        for (from, _) in SNAKES {
            assert!(ladder_at(from).is_none(), "cell {} doubles up", from);
        }
    }
}

//! Mini-game engines — pure `(state, input) -> state` simulations plus a
//! per-game session wrapper (state + seeded RNG) for the live worker.
//!
//! All randomness flows through an injected `rand::Rng`, seeded by the bridge
//! on `action=start`; tests supply fixed seeds for deterministic runs. The
//! terminal transition of each score-bearing game records into the profile's
//! monotonic high-score table.

pub mod geometry;
pub mod jetpack;
pub mod ladder;
pub mod runner;
pub mod snake;

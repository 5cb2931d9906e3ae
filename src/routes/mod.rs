//! Route handlers — one module per section or feature. Each handler takes
//! the raw query/body string and returns an HTML fragment (for HTMX swaps)
//! or JSON (jetpack frames, voice playlist).

pub mod achievements;
pub mod contact;
pub mod experience;
pub mod gallery;
pub mod games;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod schedule;
pub mod skills;
pub mod storage;
pub mod theme;
pub mod util;
pub mod voice;

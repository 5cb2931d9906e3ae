//! Visitor profile — the only cross-section mutable state.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in single-threaded
//! WASM. The Web Worker keeps the module alive, so the profile persists across
//! `handle_request` calls for the browser session; the storage routes mirror
//! it into localStorage between sessions.
//!
//! Holds exactly two concerns: the theme flag and the per-game high-score
//! table. Everything else on the site is either static content or per-game
//! session state owned by the game modules.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Site-wide color scheme flag, persisted under the `theme` localStorage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored theme string. Unknown values fall back to light.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Games that persist a high score, each under its own localStorage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoredGame {
    Jetpack,
    Snake,
    Runner,
}

impl ScoredGame {
    /// The localStorage key the bridge reads and writes for this game.
    pub fn storage_key(self) -> &'static str {
        match self {
            ScoredGame::Jetpack => "jetpack-high-score",
            ScoredGame::Snake => "snakeHighScore",
            ScoredGame::Runner => "netrun-high-score",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoredGame::Jetpack => "Jetpack Engineer",
            ScoredGame::Snake => "Snake",
            ScoredGame::Runner => "Network Runner",
        }
    }
}

pub const SCORED_GAMES: [ScoredGame; 3] =
    [ScoredGame::Jetpack, ScoredGame::Snake, ScoredGame::Runner];

/// Everything mirrored into localStorage between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub theme: Theme,
    pub jetpack_high_score: u32,
    pub snake_high_score: u32,
    pub runner_high_score: u32,
}

impl Profile {
    pub fn high_score(&self, game: ScoredGame) -> u32 {
        match game {
            ScoredGame::Jetpack => self.jetpack_high_score,
            ScoredGame::Snake => self.snake_high_score,
            ScoredGame::Runner => self.runner_high_score,
        }
    }

    fn high_score_mut(&mut self, game: ScoredGame) -> &mut u32 {
        match game {
            ScoredGame::Jetpack => &mut self.jetpack_high_score,
            ScoredGame::Snake => &mut self.snake_high_score,
            ScoredGame::Runner => &mut self.runner_high_score,
        }
    }
}

thread_local! {
    static PROFILE: RefCell<Profile> = RefCell::new(Profile::default());
}

/// Execute a closure with read access to the profile.
pub fn with_profile<F, R>(f: F) -> R
where
    F: FnOnce(&Profile) -> R,
{
    PROFILE.with(|p| f(&p.borrow()))
}

/// Execute a closure with mutable access to the profile.
pub fn with_profile_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Profile) -> R,
{
    PROFILE.with(|p| f(&mut p.borrow_mut()))
}

/// Replace the entire profile (used by restore/import and tests).
pub fn replace_profile(profile: Profile) {
    PROFILE.with(|p| {
        *p.borrow_mut() = profile;
    });
}

// ── Theme ──────────────────────────────────────────────────────────

pub fn current_theme() -> Theme {
    with_profile(|p| p.theme)
}

pub fn set_theme(theme: Theme) {
    with_profile_mut(|p| p.theme = theme);
}

pub fn toggle_theme() -> Theme {
    with_profile_mut(|p| {
        p.theme = p.theme.toggled();
        p.theme
    })
}

// ── High scores ────────────────────────────────────────────────────

pub fn high_score(game: ScoredGame) -> u32 {
    with_profile(|p| p.high_score(game))
}

/// Record a finished run. The stored value only ever increases; returns
/// whether the run set a new record.
pub fn record_score(game: ScoredGame, score: u32) -> bool {
    with_profile_mut(|p| {
        let best = p.high_score_mut(game);
        if score > *best {
            *best = score;
            true
        } else {
            false
        }
    })
}

// ── Snapshot / export ──────────────────────────────────────────────

/// Export the profile as JSON.
pub fn export_profile_json() -> String {
    with_profile(|p| serde_json::to_string(p).unwrap_or_else(|_| "{}".to_string()))
}

/// Import a profile from JSON, replacing the current one.
pub fn import_profile_json(json: &str) -> Result<(), String> {
    let profile: Profile =
        serde_json::from_str(json).map_err(|e| format!("Invalid profile JSON: {}", e))?;
    replace_profile(profile);
    Ok(())
}

/// Encode the profile as a URL-safe base64 blob for the file-download export.
pub fn encode_export_blob() -> String {
    URL_SAFE_NO_PAD.encode(export_profile_json())
}

/// Restore the profile from a previously exported base64 blob.
pub fn restore_from_blob(blob: &str) -> Result<(), String> {
    if blob.is_empty() {
        return Ok(());
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(blob)
        .map_err(|e| format!("base64 decode error: {}", e))?;
    let json = String::from_utf8(bytes).map_err(|e| format!("utf-8 decode error: {}", e))?;
    import_profile_json(&json)
}

//! `/api/games/*` routes — shells and action dispatch for the mini-games.
//!
//! The grid games (snake, ladder, runner) render their whole board as an
//! HTML fragment per action, exactly like every other section. The jetpack
//! game draws on a canvas, so its POST handler answers with a JSON frame and
//! the bridge paints it; only the shell around the canvas is HTML.

use crate::games::{jetpack, ladder, runner, snake};
use crate::profile::{self, ScoredGame};
use crate::routes::util::{get_param, get_u64_param, parse_form_body};

// ── Jetpack ────────────────────────────────────────────────────────

/// Handle GET /api/games/jetpack — the canvas shell with the phase overlay.
pub fn handle_jetpack_get(_query: &str) -> String {
    let (phase, score) = jetpack::with_session_state(|s| (s.phase, s.score));
    let best = profile::high_score(ScoredGame::Jetpack);

    let mut html = String::with_capacity(2048);
    html.push_str(&format!(
        r#"<div class="relative" id="jetpack-game"><canvas id="jetpack-canvas" width="{w}" height="{h}" class="border-2 border-primary/20 rounded-lg shadow-lg cursor-pointer touch-none" data-tick-url="/api/games/jetpack"></canvas>"#,
        w = jetpack::CANVAS_W as u32,
        h = jetpack::CANVAS_H as u32,
    ));

    match phase {
        jetpack::Phase::Menu => {
            html.push_str(r#"<div class="absolute inset-0 flex items-center justify-center bg-black/50 rounded-lg"><div class="text-center bg-background/95 backdrop-blur-sm p-6 rounded-xl border border-primary/20 shadow-xl">"#);
            html.push_str(r#"<h3 class="text-xl font-bold mb-2 text-primary">Jetpack Engineer</h3><p class="text-sm text-muted-foreground mb-4">Tap or press Space to fly!</p>"#);
            html.push_str(r#"<button onclick="folioJetpack.start()" class="inline-flex items-center px-4 py-2 bg-primary text-primary-foreground rounded-lg shadow">Start Game</button>"#);
            html.push_str(r#"</div></div>"#);
        }
        jetpack::Phase::GameOver => {
            html.push_str(r#"<div class="absolute inset-0 flex items-center justify-center bg-black/50 rounded-lg"><div class="text-center bg-background/95 backdrop-blur-sm p-6 rounded-xl border border-primary/20 shadow-xl">"#);
            html.push_str(&format!(
                r#"<h3 class="text-xl font-bold mb-2 text-destructive">Game Over!</h3><div class="space-y-2 mb-4"><p class="text-sm">Score: <span class="font-bold text-primary">{score}</span></p><p class="text-sm">Best: <span class="font-bold text-yellow-600">{best}</span></p></div>"#,
                score = score,
                best = best,
            ));
            html.push_str(r##"<button hx-post="/api/games/jetpack" hx-vals='{"action":"reset"}' hx-target="#jetpack-section" hx-swap="none" onclick="folioJetpack.reset()" class="inline-flex items-center px-4 py-2 bg-primary text-primary-foreground rounded-lg shadow">Play Again</button>"##);
            html.push_str(r#"</div></div>"#);
        }
        jetpack::Phase::Playing => {
            html.push_str(&format!(
                r#"<div class="absolute top-4 left-4 bg-background/90 backdrop-blur-sm px-3 py-1 rounded-lg border border-primary/20 shadow"><span class="text-sm font-bold text-primary">Score: {}</span></div>"#,
                score
            ));
        }
    }

    html.push_str(r#"</div>"#);
    html
}

/// Handle POST /api/games/jetpack
///
/// Body params:
///   - `action=start[&seed=N]` → reseed and begin a run
///   - `action=jump`            → jetpack impulse
///   - `action=tick`            → advance one frame
///   - `action=reset`           → back to the menu
///
/// Always answers with the current frame as JSON for the canvas bridge.
pub fn handle_jetpack_post(body: &str) -> String {
    let params = parse_form_body(body);
    match get_param(&params, "action") {
        Some("start") => {
            jetpack::session_start(get_u64_param(&params, "seed", jetpack::DEFAULT_SEED));
        }
        Some("jump") => jetpack::session_jump(),
        Some("tick") => jetpack::session_tick(),
        Some("reset") => jetpack::session_reset(),
        _ => {}
    }
    jetpack::session_frame_json()
}

// ── Snake ──────────────────────────────────────────────────────────

fn render_snake_board() -> String {
    snake::with_session_state(|state| {
        let mut html = String::with_capacity(16384);
        html.push_str(r#"<div id="snake-board">"#);
        html.push_str(&format!(
            r#"<div class="grid border-4 border-green-500/20 rounded-lg overflow-hidden mx-auto" style="grid-template-columns:repeat({n},1fr)" data-tick-url="/api/games/snake">"#,
            n = snake::GRID_SIZE
        ));
        for i in 0..snake::GRID_SIZE * snake::GRID_SIZE {
            let cell = snake::Cell {
                x: i % snake::GRID_SIZE,
                y: i / snake::GRID_SIZE,
            };
            let class = if state.head() == cell {
                "bg-gradient-to-br from-green-600 to-emerald-700 shadow-lg"
            } else if state.snake[1..].contains(&cell) {
                "bg-gradient-to-br from-green-500 to-emerald-600"
            } else if state.food == cell {
                "bg-gradient-to-br from-red-500 to-pink-600 animate-pulse"
            } else {
                ""
            };
            html.push_str(&format!(
                r#"<div class="border border-green-100/20 aspect-square {}"></div>"#,
                class
            ));
        }
        html.push_str(r#"</div>"#);

        // Overlays
        if state.game_over {
            html.push_str(r#"<div class="text-center mt-4 text-xl font-bold">Game Over!</div>"#);
        } else if state.paused {
            html.push_str(r#"<div class="text-center mt-4 text-xl font-bold">Paused &#x23F8;</div>"#);
        }

        // Score panel
        html.push_str(&format!(
            r#"<div class="flex justify-center gap-6 mt-4 text-sm"><span>Current: <strong>{score}</strong></span><span>High Score: <strong>{best}</strong></span><span>Length: <strong>{len}</strong></span></div>"#,
            score = state.score,
            best = profile::high_score(ScoredGame::Snake),
            len = state.snake.len(),
        ));

        // Controls
        html.push_str(r#"<div class="flex justify-center gap-2 mt-4">"#);
        if !state.running {
            html.push_str(r##"<button hx-post="/api/games/snake" hx-vals='{"action":"start"}' hx-target="#snake-board" hx-swap="outerHTML" class="px-4 py-2 bg-green-500 text-white rounded-lg">Start Game</button>"##);
        } else {
            let label = if state.paused { "Resume" } else { "Pause" };
            html.push_str(&format!(
                r##"<button hx-post="/api/games/snake" hx-vals='{{"action":"pause"}}' hx-target="#snake-board" hx-swap="outerHTML" class="px-4 py-2 border rounded-lg">{}</button>"##,
                label
            ));
        }
        html.push_str(r##"<button hx-post="/api/games/snake" hx-vals='{"action":"reset"}' hx-target="#snake-board" hx-swap="outerHTML" class="px-4 py-2 border rounded-lg">Reset</button>"##);
        html.push_str(r#"</div>"#);

        html.push_str(r#"</div>"#);
        html
    })
}

/// Handle GET /api/games/snake
pub fn handle_snake_get(_query: &str) -> String {
    render_snake_board()
}

/// Handle POST /api/games/snake
///
/// Body params:
///   - `action=start[&seed=N]`
///   - `action=turn&dir=up|down|left|right`
///   - `action=tick` (bridge interval, every 150 ms)
///   - `action=pause`
///   - `action=reset`
pub fn handle_snake_post(body: &str) -> String {
    let params = parse_form_body(body);
    match get_param(&params, "action") {
        Some("start") => {
            snake::session_start(get_u64_param(&params, "seed", snake::DEFAULT_SEED));
        }
        Some("turn") => {
            if let Some(dir) = get_param(&params, "dir").and_then(snake::Dir::parse) {
                snake::session_turn(dir);
            }
        }
        Some("tick") => snake::session_tick(),
        Some("pause") => snake::session_toggle_pause(),
        Some("reset") => snake::session_reset(),
        _ => {}
    }
    render_snake_board()
}

// ── Snake & ladder ─────────────────────────────────────────────────

fn render_ladder_board() -> String {
    ladder::with_session_state(|state| {
        let mut html = String::with_capacity(16384);
        html.push_str(r#"<div id="ladder-board">"#);

        html.push_str(r#"<div class="grid grid-cols-10 gap-1 max-w-[520px] mx-auto">"#);
        for row in 0..ladder::BOARD_SIDE {
            for col in 0..ladder::BOARD_SIDE {
                let n = ladder::cell_number(row, col);
                let is_player = state.position == n;
                let class = if is_player {
                    "bg-gradient-to-br from-primary to-accent text-white shadow-lg scale-110"
                } else if ladder::snake_at(n).is_some() {
                    "bg-red-100 dark:bg-red-900/20"
                } else if ladder::ladder_at(n).is_some() {
                    "bg-green-100 dark:bg-green-900/20"
                } else {
                    "bg-background hover:bg-secondary/50"
                };
                html.push_str(&format!(
                    r#"<div class="w-12 h-12 border-2 border-primary/20 flex items-center justify-center text-xs font-bold relative {class}">{n}"#,
                    class = class,
                    n = n,
                ));
                if ladder::snake_at(n).is_some() {
                    html.push_str(r#"<span class="absolute -top-1 -right-1 text-red-500">&#x1F40D;</span>"#);
                }
                if ladder::ladder_at(n).is_some() {
                    html.push_str(r#"<span class="absolute -top-1 -right-1 text-green-500">&#x1FA9C;</span>"#);
                }
                if is_player {
                    html.push_str(r#"<span class="absolute -bottom-2 text-lg">&#x1F3AE;</span>"#);
                }
                html.push_str(r#"</div>"#);
            }
        }
        html.push_str(r#"</div>"#);

        // Status panel
        let status_label = match state.status {
            ladder::LadderStatus::Won => "Won!",
            ladder::LadderStatus::Lost => "Lost",
            ladder::LadderStatus::Playing => "Playing",
        };
        html.push_str(&format!(
            r#"<div class="flex justify-center gap-6 mt-4 text-sm"><span>Position: <strong>{pos}</strong></span><span>Moves: <strong>{moves}/{limit}</strong></span><span>Status: <strong>{status}</strong></span><span>Die: <strong>{die}</strong></span></div>"#,
            pos = state.position,
            moves = state.moves,
            limit = ladder::MOVE_LIMIT,
            status = status_label,
            die = state.die,
        ));

        // What the last roll did
        if let Some(outcome) = state.last_outcome {
            match outcome.transport {
                Some(ladder::Transport::Snake { from, to }) => {
                    html.push_str(&format!(
                        r#"<div class="text-center mt-2 text-sm text-red-500">Snake bite! Slid down from {} to {}</div>"#,
                        from, to
                    ));
                }
                Some(ladder::Transport::Ladder { from, to }) => {
                    html.push_str(&format!(
                        r#"<div class="text-center mt-2 text-sm text-green-600">Ladder climb! Climbed up from {} to {}</div>"#,
                        from, to
                    ));
                }
                None => {}
            }
        }

        // Controls
        html.push_str(r#"<div class="flex justify-center gap-2 mt-4">"#);
        if state.status == ladder::LadderStatus::Playing {
            html.push_str(r##"<button hx-post="/api/games/ladder" hx-vals='{"action":"roll"}' hx-target="#ladder-board" hx-swap="outerHTML" class="px-4 py-2 bg-primary text-primary-foreground rounded-lg">Roll Dice</button>"##);
        } else {
            html.push_str(r##"<button hx-post="/api/games/ladder" hx-vals='{"action":"reset"}' hx-target="#ladder-board" hx-swap="outerHTML" class="px-4 py-2 border rounded-lg">Play Again</button>"##);
        }
        html.push_str(r#"</div>"#);

        html.push_str(r#"</div>"#);
        html
    })
}

/// Handle GET /api/games/ladder
pub fn handle_ladder_get(_query: &str) -> String {
    render_ladder_board()
}

/// Handle POST /api/games/ladder
///
/// Body params:
///   - `action=roll`
///   - `action=reset[&seed=N]`
pub fn handle_ladder_post(body: &str) -> String {
    let params = parse_form_body(body);
    match get_param(&params, "action") {
        Some("roll") => {
            ladder::session_roll();
        }
        Some("reset") => {
            ladder::session_reset(get_u64_param(&params, "seed", ladder::DEFAULT_SEED));
        }
        _ => {}
    }
    render_ladder_board()
}

// ── Network runner ─────────────────────────────────────────────────

fn render_runner_board() -> String {
    runner::with_session_state(|state| {
        let mut html = String::with_capacity(16384);
        html.push_str(r#"<div id="runner-board">"#);
        html.push_str(&format!(
            r#"<div class="grid border-4 border-cyan-500/20 rounded-lg overflow-hidden mx-auto" style="grid-template-columns:repeat({n},1fr)" data-tick-url="/api/games/runner">"#,
            n = runner::GRID_SIZE
        ));
        for i in 0..runner::GRID_SIZE * runner::GRID_SIZE {
            let cell = snake::Cell {
                x: i % runner::GRID_SIZE,
                y: i / runner::GRID_SIZE,
            };
            let class = if state.head() == cell {
                "bg-gradient-to-br from-cyan-500 to-blue-700 shadow-lg"
            } else if state.stream[1..].contains(&cell) {
                "bg-gradient-to-br from-cyan-400 to-blue-600"
            } else if state.packet == cell {
                "bg-gradient-to-br from-amber-400 to-orange-500 animate-pulse"
            } else if state.firewalls.contains(&cell) {
                "bg-gradient-to-br from-red-600 to-rose-800"
            } else {
                ""
            };
            html.push_str(&format!(
                r#"<div class="border border-cyan-100/20 aspect-square {}"></div>"#,
                class
            ));
        }
        html.push_str(r#"</div>"#);

        if state.game_over {
            html.push_str(r#"<div class="text-center mt-4 text-xl font-bold">Connection Lost!</div>"#);
        }

        html.push_str(&format!(
            r#"<div class="flex justify-center gap-6 mt-4 text-sm"><span>Score: <strong>{score}</strong></span><span>High Score: <strong>{best}</strong></span><span>Firewalls: <strong>{walls}</strong></span></div>"#,
            score = state.score,
            best = profile::high_score(ScoredGame::Runner),
            walls = state.firewalls.len(),
        ));

        html.push_str(r#"<div class="flex justify-center gap-2 mt-4">"#);
        if !state.running {
            html.push_str(r##"<button hx-post="/api/games/runner" hx-vals='{"action":"start"}' hx-target="#runner-board" hx-swap="outerHTML" class="px-4 py-2 bg-cyan-600 text-white rounded-lg">Start Run</button>"##);
        }
        html.push_str(r##"<button hx-post="/api/games/runner" hx-vals='{"action":"reset"}' hx-target="#runner-board" hx-swap="outerHTML" class="px-4 py-2 border rounded-lg">Reset</button>"##);
        html.push_str(r#"</div>"#);

        html.push_str(r#"</div>"#);
        html
    })
}

/// Handle GET /api/games/runner
pub fn handle_runner_get(_query: &str) -> String {
    render_runner_board()
}

/// Handle POST /api/games/runner
///
/// Body params:
///   - `action=start[&seed=N]`
///   - `action=turn&dir=up|down|left|right`
///   - `action=tick`
///   - `action=reset`
pub fn handle_runner_post(body: &str) -> String {
    let params = parse_form_body(body);
    match get_param(&params, "action") {
        Some("start") => {
            runner::session_start(get_u64_param(&params, "seed", runner::DEFAULT_SEED));
        }
        Some("turn") => {
            if let Some(dir) = get_param(&params, "dir").and_then(snake::Dir::parse) {
                runner::session_turn(dir);
            }
        }
        Some("tick") => runner::session_tick(),
        Some("reset") => runner::session_reset(),
        _ => {}
    }
    render_runner_board()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{replace_profile, Profile};

    fn reset_all() {
        replace_profile(Profile::default());
        jetpack::session_reset();
        snake::session_reset();
        ladder::session_reset(ladder::DEFAULT_SEED);
        runner::session_reset();
    }

    #[test]
    fn jetpack_shell_shows_menu_overlay() {
        reset_all();
        let html = handle_jetpack_get("");
        assert!(html.contains("Jetpack Engineer"));
        assert!(html.contains("Start Game"));
        assert!(html.contains("jetpack-canvas"));
        reset_all();
    }

    #[test]
    fn jetpack_start_answers_with_a_playing_frame() {
        reset_all();
        let json = handle_jetpack_post("action=start&seed=5");
        assert!(json.contains("\"phase\":\"playing\""));
        assert!(json.contains("\"obstacles\""));
        reset_all();
    }

    #[test]
    fn jetpack_ticks_advance_the_frame() {
        reset_all();
        handle_jetpack_post("action=start&seed=5");
        let first = handle_jetpack_post("action=tick");
        let second = handle_jetpack_post("action=tick");
        assert_ne!(first, second);
        reset_all();
    }

    #[test]
    fn jetpack_shell_shows_game_over_overlay_after_a_crash() {
        reset_all();
        handle_jetpack_post("action=start&seed=5");
        // Free fall until the run ends.
        for _ in 0..400 {
            handle_jetpack_post("action=tick");
        }
        let html = handle_jetpack_get("");
        assert!(html.contains("Game Over!"));
        assert!(html.contains("Play Again"));
        reset_all();
    }

    #[test]
    fn snake_board_renders_full_grid() {
        reset_all();
        let html = handle_snake_get("");
        let cells = html.matches("aspect-square").count();
        assert_eq!(cells, (snake::GRID_SIZE * snake::GRID_SIZE) as usize);
        assert!(html.contains("Start Game"));
        reset_all();
    }

    #[test]
    fn snake_start_turn_and_tick_move_the_snake() {
        reset_all();
        handle_snake_post("action=start&seed=3");
        handle_snake_post("action=turn&dir=left");
        let html = handle_snake_post("action=tick");
        assert!(html.contains("from-green-600")); // head cell present
        assert!(html.contains("Pause"));
        reset_all();
    }

    #[test]
    fn snake_pause_shows_the_overlay() {
        reset_all();
        handle_snake_post("action=start");
        let html = handle_snake_post("action=pause");
        assert!(html.contains("Paused"));
        assert!(html.contains("Resume"));
        reset_all();
    }

    #[test]
    fn ladder_board_numbers_all_hundred_cells() {
        reset_all();
        let html = handle_ladder_get("");
        assert!(html.contains(">100"));
        assert!(html.contains(">1<") || html.contains(">1&"));
        assert!(html.contains("Roll Dice"));
        reset_all();
    }

    #[test]
    fn ladder_roll_moves_and_reports() {
        reset_all();
        let html = handle_ladder_post("action=roll");
        assert!(html.contains("Moves: <strong>1/50</strong>"));
        reset_all();
    }

    #[test]
    fn ladder_finished_game_offers_play_again() {
        reset_all();
        // Burn through the move limit.
        for _ in 0..ladder::MOVE_LIMIT + 5 {
            handle_ladder_post("action=roll");
        }
        let html = handle_ladder_get("");
        // Either the run was lost at the cap or won on a lucky ladder chain.
        assert!(html.contains("Play Again") || html.contains("Roll Dice"));
        let moves = ladder::with_session_state(|s| s.moves);
        assert!(moves <= ladder::MOVE_LIMIT);
        reset_all();
    }

    #[test]
    fn runner_board_marks_packet_and_start() {
        reset_all();
        let html = handle_runner_get("");
        assert!(html.contains("from-amber-400")); // packet cell
        assert!(html.contains("Start Run"));
        reset_all();
    }

    #[test]
    fn runner_survives_a_wall_crossing() {
        reset_all();
        handle_runner_post("action=start&seed=3");
        let mut html = String::new();
        for _ in 0..15 {
            html = handle_runner_post("action=tick");
        }
        assert!(!html.contains("Connection Lost"));
        reset_all();
    }

    #[test]
    fn unknown_actions_fall_through_to_a_render() {
        reset_all();
        assert!(handle_snake_post("action=dance").contains("snake-board"));
        assert!(handle_ladder_post("").contains("ladder-board"));
        assert!(handle_jetpack_post("action=???").contains("phase"));
        reset_all();
    }
}

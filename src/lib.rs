//! Folio in-browser WASM server.
//!
//! Exports `handle_request(method, path, query, body)` for the Service
//! Worker bridge to call. Uses `matchit` for URL routing — the same router
//! engine that powers Axum.
//!
//! Every section of the portfolio page and every mini-game action goes
//! through this one entry point. Handlers return HTML fragments for HTMX to
//! swap into the DOM, except the jetpack frame and voice playlist routes,
//! which return JSON for their bridges.

use wasm_bindgen::prelude::*;

pub mod content;
pub mod games;
pub mod profile;
pub mod routes;

/// Process an HTTP-like request and return an HTML fragment (or JSON).
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method` — HTTP method (e.g., "GET", "POST")
/// * `path`   — URL path (e.g., "/api/projects")
/// * `query`  — Query string (e.g., "?category=Mobile")
/// * `body`   — Request body (POST form data). Empty string for GET requests.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    // Build the router. matchit compiles route patterns into a radix tree.
    let mut router = matchit::Router::new();

    // Register routes — the value is a &str tag we match on below
    router.insert("/api/nav", "nav").ok();
    router.insert("/api/hero", "hero").ok();
    router.insert("/api/experience", "experience").ok();
    router.insert("/api/projects", "projects").ok();
    router.insert("/api/achievements", "achievements").ok();
    router.insert("/api/skills", "skills").ok();
    router.insert("/api/gallery", "gallery").ok();
    router.insert("/api/schedule", "schedule").ok();
    router.insert("/api/contact", "contact").ok();
    router.insert("/api/contact/failed", "contact_failed").ok();

    // Accessibility + chrome
    router.insert("/api/voice/playlist", "voice_playlist").ok();
    router.insert("/api/voice/controls", "voice_controls").ok();
    router.insert("/api/voice/unsupported", "voice_unsupported").ok();
    router.insert("/api/theme", "theme").ok();

    // Profile persistence (localStorage mirror)
    router.insert("/api/scores", "scores").ok();
    router.insert("/api/profile/persist", "profile_persist").ok();
    router.insert("/api/profile/restore", "profile_restore").ok();
    router.insert("/api/profile/export", "profile_export").ok();
    router.insert("/api/profile/import", "profile_import").ok();

    // Mini-games
    router.insert("/api/games/jetpack", "jetpack").ok();
    router.insert("/api/games/snake", "snake").ok();
    router.insert("/api/games/ladder", "ladder").ok();
    router.insert("/api/games/runner", "runner").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            // GET routes
            ("nav", "GET") => routes::nav::handle(query),
            ("hero", "GET") => routes::hero::handle(query),
            ("experience", "GET") => routes::experience::handle(query),
            ("projects", "GET") => routes::projects::handle(query),
            ("achievements", "GET") => routes::achievements::handle(query),
            ("skills", "GET") => routes::skills::handle(query),
            ("gallery", "GET") => routes::gallery::handle(query),
            ("schedule", "GET") => routes::schedule::handle(query),
            ("contact", "GET") => routes::contact::handle_get(query),
            ("voice_playlist", "GET") => routes::voice::handle_playlist(query),
            ("voice_controls", "GET") => routes::voice::handle_controls(query),
            ("voice_unsupported", "GET") => routes::voice::handle_unsupported(query),
            ("theme", "GET") => routes::theme::handle_get(query),
            ("scores", "GET") => routes::storage::handle_scores_get(query),
            ("profile_export", "GET") => routes::storage::handle_export_get(query),

            // POST routes
            ("contact", "POST") => routes::contact::handle_post(body),
            ("contact_failed", "POST") => routes::contact::handle_failed_post(body),
            ("theme", "POST") => routes::theme::handle_post(body),
            ("profile_persist", "POST") => routes::storage::handle_persist_post(body),
            ("profile_restore", "POST") => routes::storage::handle_restore_post(body),
            ("profile_import", "POST") => routes::storage::handle_import_post(body),

            // Mini-games: GET renders the shell, POST dispatches an action
            ("jetpack", "GET") => routes::games::handle_jetpack_get(query),
            ("jetpack", "POST") => routes::games::handle_jetpack_post(body),
            ("snake", "GET") => routes::games::handle_snake_get(query),
            ("snake", "POST") => routes::games::handle_snake_post(body),
            ("ladder", "GET") => routes::games::handle_ladder_get(query),
            ("ladder", "POST") => routes::games::handle_ladder_post(body),
            ("runner", "GET") => routes::games::handle_runner_get(query),
            ("runner", "POST") => routes::games::handle_runner_post(body),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> String {
    r#"<span class="text-destructive">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-destructive">405 — method not allowed</span>"#.to_string()
}

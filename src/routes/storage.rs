//! `/api/profile/*` routes — mirroring the profile into localStorage.
//!
//! The WASM module can't touch localStorage itself; persistence runs through
//! script fragments the main thread executes, and restoration through a form
//! body the bridge builds from the stored keys on page load. Export/import
//! move the whole profile as a base64 text file for carrying between
//! browsers.

use crate::profile::{self, Theme, SCORED_GAMES};
use crate::routes::util::{get_param, parse_form_body};

/// Handle POST /api/profile/persist
///
/// Returns a script writing every profile key under its own localStorage
/// entry: the theme string plus one integer per game.
pub fn handle_persist_post(_body: &str) -> String {
    profile::with_profile(|p| {
        let mut script = String::with_capacity(512);
        script.push_str("<script>");
        script.push_str(&format!(
            "localStorage.setItem('theme','{}');",
            p.theme.as_str()
        ));
        for game in SCORED_GAMES {
            script.push_str(&format!(
                "localStorage.setItem('{}','{}');",
                game.storage_key(),
                p.high_score(game)
            ));
        }
        script.push_str("console.log('[folio] profile persisted');");
        script.push_str("</script>");
        script
    })
}

/// Handle POST /api/profile/restore
///
/// The bridge reads each localStorage key on page load and posts them back
/// as form fields keyed by the storage key. Missing or malformed values keep
/// their defaults.
pub fn handle_restore_post(body: &str) -> String {
    let params = parse_form_body(body);

    profile::with_profile_mut(|p| {
        if let Some(theme) = get_param(&params, "theme") {
            p.theme = Theme::parse(theme);
        }
    });
    for game in SCORED_GAMES {
        if let Some(score) = get_param(&params, game.storage_key())
            .and_then(|v| v.parse::<u32>().ok())
        {
            profile::record_score(game, score);
        }
    }
    "ok".to_string()
}

/// Handle GET /api/profile/export
///
/// Returns a script that downloads the profile as a base64 text file.
pub fn handle_export_get(_query: &str) -> String {
    let blob = profile::encode_export_blob();
    format!(
        r#"<script>
(function() {{
  var b = new Blob(['{blob}'], {{type: 'text/plain'}});
  var a = document.createElement('a');
  a.href = URL.createObjectURL(b);
  a.download = 'folio-profile.txt';
  a.click();
  URL.revokeObjectURL(a.href);
  console.log('[folio] profile exported');
}})();
</script>"#,
        blob = blob
    )
}

/// Handle POST /api/profile/import
///
/// Accepts a previously exported base64 blob (form field `blob`, or the raw
/// body) and replaces the profile.
pub fn handle_import_post(body: &str) -> String {
    let params = parse_form_body(body);
    let blob = get_param(&params, "blob").unwrap_or(body.trim());
    match profile::restore_from_blob(blob) {
        Ok(()) => {
            r#"<span class="text-emerald-600">Profile imported successfully</span>"#.to_string()
        }
        Err(e) => format!(r#"<span class="text-destructive">Import failed: {}</span>"#, e),
    }
}

/// Handle GET /api/scores — arcade scoreboard fragment.
pub fn handle_scores_get(_query: &str) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<div class="glass-card p-6"><h3 class="text-xl font-semibold mb-4">Arcade Records</h3><div class="space-y-4">"#);
    for game in SCORED_GAMES {
        html.push_str(&format!(
            r#"<div class="flex justify-between items-center"><span>{label}</span><span class="px-2 py-1 text-lg font-bold rounded bg-secondary" data-key="{key}">{score}</span></div>"#,
            label = game.label(),
            key = game.storage_key(),
            score = profile::high_score(game),
        ));
    }
    html.push_str(r#"</div></div>"#);
    html
}

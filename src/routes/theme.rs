//! `/api/theme` routes — color-scheme toggle.
//!
//! GET renders the toggle button for the current theme. POST mutates it
//! (`action=toggle`, or `action=set&value=dark` on page load when the bridge
//! restores the stored preference) and returns the refreshed button plus a
//! one-line script that swaps the class on the document root and mirrors the
//! value into localStorage.

use crate::profile::{self, Theme};
use crate::routes::util::{get_param, parse_form_body};

fn render_toggle(theme: Theme) -> String {
    // Shows the icon for the scheme a click switches TO.
    let glyph = match theme {
        Theme::Light => "&#x1F319;", // moon: switch to dark
        Theme::Dark => "&#x2600;",   // sun: switch to light
    };
    format!(
        r##"<button hx-post="/api/theme" hx-vals='{{"action":"toggle"}}' hx-target="#theme-toggle" hx-swap="innerHTML" class="h-10 w-10 rounded-full bg-secondary/50 hover:bg-secondary" aria-label="Toggle color scheme">{}</button>"##,
        glyph
    )
}

fn apply_script(theme: Theme) -> String {
    format!(
        r#"<script>document.documentElement.classList.remove('light','dark');document.documentElement.classList.add('{theme}');localStorage.setItem('theme','{theme}');</script>"#,
        theme = theme.as_str()
    )
}

/// Handle GET /api/theme
pub fn handle_get(_query: &str) -> String {
    render_toggle(profile::current_theme())
}

/// Handle POST /api/theme
pub fn handle_post(body: &str) -> String {
    let params = parse_form_body(body);
    let theme = match get_param(&params, "action") {
        Some("set") => {
            let value = Theme::parse(get_param(&params, "value").unwrap_or(""));
            profile::set_theme(value);
            value
        }
        _ => profile::toggle_theme(),
    };
    format!("{}{}", render_toggle(theme), apply_script(theme))
}

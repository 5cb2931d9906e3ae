//! `/api/nav` route — fixed navbar fragment.
//!
//! Query parameters:
//! - `menu` — "open" renders the mobile menu expanded (default collapsed)

use crate::content::{CALENDLY_URL, MONOGRAM, NAV_LINKS};
use crate::routes::util::{get_param, parse_query};

/// Handle GET /api/nav
pub fn handle(query: &str) -> String {
    let params = parse_query(query);
    let menu_open = get_param(&params, "menu") == Some("open");

    let mut html = String::with_capacity(4096);

    html.push_str(r#"<div class="container mx-auto px-4 flex items-center justify-between w-full">"#);

    // Brand monogram
    html.push_str(&format!(
        r##"<a href="#home" class="text-xl font-bold tracking-tight hover:scale-110 transition-all duration-300">{}</a>"##,
        MONOGRAM
    ));

    // Desktop links with staggered entrance
    html.push_str(r#"<nav class="hidden md:flex items-center space-x-1">"#);
    for (i, link) in NAV_LINKS.iter().enumerate() {
        html.push_str(&format!(
            r#"<a href="{href}" class="nav-link hover-scale" style="animation-delay:{delay}ms">{name}</a>"#,
            href = link.anchor,
            delay = i * 100,
            name = link.name,
        ));
    }
    // Schedule button opens the external booking page in a new tab.
    html.push_str(&format!(
        r#"<button class="ml-2 px-3 py-2 border rounded-lg flex items-center" onclick="window.open('{}', '_blank')" aria-label="Schedule a call">Schedule</button>"#,
        CALENDLY_URL
    ));
    // Voice + theme controls load their own fragments.
    html.push_str(r#"<div id="voice-controls" class="ml-2" hx-get="/api/voice/controls" hx-trigger="load" hx-swap="innerHTML"></div>"#);
    html.push_str(r#"<div id="theme-toggle" class="ml-2" hx-get="/api/theme" hx-trigger="load" hx-swap="innerHTML"></div>"#);
    html.push_str(r#"</nav>"#);

    // Mobile menu toggle swaps this whole fragment with the opposite state.
    let (toggle_target, toggle_glyph) = if menu_open {
        ("/api/nav", "&#x2715;")
    } else {
        ("/api/nav?menu=open", "&#x2630;")
    };
    html.push_str(&format!(
        r##"<button class="ml-4 p-2 rounded-md md:hidden" hx-get="{target}" hx-target="#navbar" hx-swap="innerHTML" aria-label="Toggle menu">{glyph}</button>"##,
        target = toggle_target,
        glyph = toggle_glyph,
    ));
    html.push_str(r#"</div>"#);

    // Mobile menu body
    if menu_open {
        html.push_str(r#"<nav class="md:hidden flex flex-col space-y-4 px-4 py-4">"#);
        for link in &NAV_LINKS {
            html.push_str(&format!(
                r##"<a href="{href}" class="px-4 py-2 rounded-md hover:bg-secondary transition-colors duration-200 text-center font-medium" hx-get="/api/nav" hx-target="#navbar" hx-swap="innerHTML">{name}</a>"##,
                href = link.anchor,
                name = link.name,
            ));
        }
        html.push_str(&format!(
            r#"<button class="mt-2 w-full px-3 py-2 border rounded-lg" onclick="window.open('{}', '_blank')">Schedule a Call</button>"#,
            CALENDLY_URL
        ));
        html.push_str(r#"</nav>"#);
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_section_links() {
        let html = handle("");
        for link in &NAV_LINKS {
            assert!(html.contains(link.name));
            assert!(html.contains(link.anchor));
        }
        assert!(html.contains(MONOGRAM));
    }

    #[test]
    fn schedule_button_opens_booking_page() {
        let html = handle("");
        assert!(html.contains(CALENDLY_URL));
        assert!(html.contains("_blank"));
    }

    #[test]
    fn collapsed_by_default() {
        let html = handle("");
        assert!(html.contains("menu=open"));
        assert!(!html.contains("Schedule a Call")); // mobile body hidden
    }

    #[test]
    fn open_menu_renders_mobile_body() {
        let html = handle("?menu=open");
        assert!(html.contains("Schedule a Call"));
        // The toggle now collapses.
        assert!(html.contains(r#"hx-get="/api/nav""#));
    }

    #[test]
    fn embeds_voice_and_theme_mounts() {
        let html = handle("");
        assert!(html.contains("/api/voice/controls"));
        assert!(html.contains("/api/theme"));
    }
}

//! `/api/gallery` route — image carousel with wrap-around navigation.
//!
//! Query parameters:
//! - `index`  — active image (defaults to 0, reduced modulo the image count)
//! - `action` — `next`/`prev` step relative to `index`
//!
//! The auto-advance interval lives in the bridge; it simply re-requests this
//! route with `action=next` every few seconds unless the visitor is
//! interacting.

use crate::content::GALLERY_IMAGES;
use crate::routes::util::{get_param, parse_query};

fn resolve_index(query: &str) -> usize {
    let params = parse_query(query);
    let len = GALLERY_IMAGES.len();
    let index = get_param(&params, "index")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0)
        % len;
    match get_param(&params, "action") {
        Some("next") => (index + 1) % len,
        Some("prev") => (index + len - 1) % len,
        _ => index,
    }
}

/// Handle GET /api/gallery
pub fn handle(query: &str) -> String {
    let active = resolve_index(query);

    let mut html = String::with_capacity(8192);
    html.push_str(r#"<div class="text-center mb-16"><h2 class="section-title">Gallery</h2><p class="section-subtitle">Visual journey through my technical projects and innovations</p></div>"#);

    html.push_str(r#"<div class="relative max-w-6xl mx-auto">"#);

    // Prev/next arrows re-render the section relative to the active index.
    html.push_str(&format!(
        r##"<button hx-get="/api/gallery?index={i}&action=prev" hx-target="#gallery-section" hx-swap="innerHTML" class="absolute left-4 top-1/2 transform -translate-y-1/2 z-10 p-2 rounded-full bg-background/80 backdrop-blur-sm shadow-md" aria-label="Previous image">&lsaquo;</button>"##,
        i = active
    ));
    html.push_str(&format!(
        r##"<button hx-get="/api/gallery?index={i}&action=next" hx-target="#gallery-section" hx-swap="innerHTML" class="absolute right-4 top-1/2 transform -translate-y-1/2 z-10 p-2 rounded-full bg-background/80 backdrop-blur-sm shadow-md" aria-label="Next image">&rsaquo;</button>"##,
        i = active
    ));

    // Film strip: all slides rendered, the strip translates to the active one.
    html.push_str(&format!(
        r#"<div class="overflow-hidden rounded-xl shadow-lg"><div class="flex transition-transform duration-700 ease-in-out" style="transform:translateX(-{}%)">"#,
        active * 100
    ));
    for (i, image) in GALLERY_IMAGES.iter().enumerate() {
        let brightness = if i == active {
            "brightness(1.1) contrast(1.1)"
        } else {
            "brightness(0.9)"
        };
        html.push_str(&format!(
            r#"<div class="min-w-full relative group"><div class="relative h-[50vh] overflow-hidden"><img src="{url}" alt="{alt}" class="w-full h-full object-cover transition-all duration-700" style="filter:{brightness}"><div class="absolute bottom-8 left-8 right-8"><div class="mb-2"><span class="inline-block px-3 py-1 text-xs font-semibold bg-primary/80 text-primary-foreground rounded-full backdrop-blur-sm">{category}</span></div><p class="text-white text-lg font-medium drop-shadow-lg">{alt}</p></div></div></div>"#,
            url = image.url,
            alt = image.alt,
            brightness = brightness,
            category = image.category,
        ));
    }
    html.push_str(r#"</div></div>"#);

    // Indicator dots
    html.push_str(r#"<div class="flex justify-center mt-8 gap-3">"#);
    for (i, image) in GALLERY_IMAGES.iter().enumerate() {
        let dot_class = if i == active {
            "w-12 h-3 bg-primary shadow-lg"
        } else {
            "w-3 h-3 bg-muted-foreground/40 hover:bg-muted-foreground/80"
        };
        html.push_str(&format!(
            r##"<button hx-get="/api/gallery?index={i}" hx-target="#gallery-section" hx-swap="innerHTML" class="transition-all duration-500 rounded-full {class}" aria-label="Go to {category}: {alt}"></button>"##,
            i = i,
            class = dot_class,
            category = image.category,
            alt = image.alt,
        ));
    }
    html.push_str(r#"</div>"#);

    html.push_str(r#"</div>"#);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_first_image() {
        let html = handle("");
        assert!(html.contains("translateX(-0%)"));
    }

    #[test]
    fn index_selects_the_active_slide() {
        let html = handle("?index=3");
        assert!(html.contains("translateX(-300%)"));
    }

    #[test]
    fn next_and_prev_step_relative_to_index() {
        assert!(handle("?index=2&action=next").contains("translateX(-300%)"));
        assert!(handle("?index=2&action=prev").contains("translateX(-100%)"));
    }

    #[test]
    fn navigation_wraps_around() {
        let last = GALLERY_IMAGES.len() - 1;
        let html = handle(&format!("?index={}&action=next", last));
        assert!(html.contains("translateX(-0%)"));
        let html = handle("?index=0&action=prev");
        assert!(html.contains(&format!("translateX(-{}%)", last * 100)));
    }

    #[test]
    fn out_of_range_index_is_reduced() {
        let html = handle("?index=999");
        // 999 % 8 = 7
        assert!(html.contains("translateX(-700%)"));
    }

    #[test]
    fn renders_one_dot_per_image() {
        let html = handle("");
        let dots = html.matches("Go to ").count();
        assert_eq!(dots, GALLERY_IMAGES.len());
        for image in &GALLERY_IMAGES {
            assert!(html.contains(image.url));
            assert!(html.contains(image.category));
        }
    }
}

//! `/api/hero` route — landing section fragment.
//!
//! The typewriter effect is computed server-side: one span per character of
//! the site name, each with a staggered `animation-delay`, plus a blinking
//! caret. The profile image carousel renders all images stacked; the bridge
//! cross-fades them on a fixed interval.

use crate::content::{PROFILE_IMAGES, SITE_HANDLE, SITE_NAME, TAGLINE};

/// Milliseconds between typed characters.
const TYPE_SPEED_MS: usize = 100;
/// Pause before the first character appears.
const TYPE_DELAY_MS: usize = 500;

/// Handle GET /api/hero
pub fn handle(_query: &str) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(r#"<div class="container mx-auto px-4 flex flex-col lg:flex-row items-center">"#);
    html.push_str(r#"<div class="w-full lg:w-1/2 stagger-animation">"#);

    // Handle badge
    html.push_str(&format!(
        r#"<div class="mb-2 inline-block"><span class="inline-block px-3 py-1 text-sm font-medium bg-accent/20 rounded-full">{}</span></div>"#,
        SITE_HANDLE
    ));

    // Typewriter name
    html.push_str(r#"<h1 class="text-4xl md:text-6xl font-bold mb-6 relative">"#);
    for (i, ch) in SITE_NAME.chars().enumerate() {
        let delay = TYPE_DELAY_MS + i * TYPE_SPEED_MS;
        if ch == ' ' {
            html.push_str(&format!(
                r#"<span class="typed-char inline-block w-3" style="animation-delay:{}ms"></span>"#,
                delay
            ));
        } else {
            html.push_str(&format!(
                r#"<span class="typed-char inline-block" style="animation-delay:{}ms">{}</span>"#,
                delay, ch
            ));
        }
    }
    html.push_str(r#"<span class="inline-block w-1 h-8 md:h-12 bg-primary animate-blink ml-1"></span>"#);
    html.push_str(r#"</h1>"#);

    html.push_str(&format!(
        r#"<p class="text-lg md:text-xl text-muted-foreground mb-8 max-w-xl">{}</p>"#,
        TAGLINE
    ));

    // Calls to action
    html.push_str(r#"<div class="flex flex-wrap gap-4">"#);
    html.push_str(r##"<a href="#projects" class="btn-primary">View Projects &rarr;</a>"##);
    html.push_str(r##"<a href="#contact" class="btn-secondary">Get in Touch</a>"##);
    html.push_str(r#"</div>"#);
    html.push_str(r#"</div>"#);

    // Cross-fade profile carousel; the bridge rotates `.hero-slide` opacity.
    html.push_str(r#"<div class="w-full lg:w-1/2 mt-16 lg:mt-0"><div class="relative h-80 md:h-96 w-full max-w-md mx-auto" data-carousel-interval="3000">"#);
    for (i, src) in PROFILE_IMAGES.iter().enumerate() {
        let opacity = if i == 0 { "opacity-100" } else { "opacity-0" };
        html.push_str(&format!(
            r#"<img src="{src}" alt="Profile {n}" class="hero-slide absolute inset-0 w-full h-full object-cover rounded-3xl shadow-xl transition-opacity duration-1000 {opacity}">"#,
            src = src,
            n = i + 1,
            opacity = opacity,
        ));
    }
    html.push_str(r#"<div class="absolute inset-0 bg-gradient-to-t from-background/80 to-transparent rounded-3xl"></div>"#);
    html.push_str(r#"</div></div>"#);

    html.push_str(r#"</div>"#);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typewriter_spans_cover_every_character() {
        let html = handle("");
        let span_count = html.matches("typed-char").count();
        assert_eq!(span_count, SITE_NAME.chars().count());
    }

    #[test]
    fn typewriter_delays_are_staggered() {
        let html = handle("");
        assert!(html.contains(&format!("animation-delay:{}ms", TYPE_DELAY_MS)));
        assert!(html.contains(&format!(
            "animation-delay:{}ms",
            TYPE_DELAY_MS + (SITE_NAME.chars().count() - 1) * TYPE_SPEED_MS
        )));
    }

    #[test]
    fn carousel_shows_first_image_only() {
        let html = handle("");
        for src in PROFILE_IMAGES {
            assert!(html.contains(src));
        }
        assert_eq!(html.matches("opacity-100").count(), 1);
        assert_eq!(html.matches(r#"class="hero-slide"#).count(), PROFILE_IMAGES.len());
    }

    #[test]
    fn renders_badge_and_tagline() {
        let html = handle("");
        assert!(html.contains(SITE_HANDLE));
        assert!(html.contains(TAGLINE));
    }
}

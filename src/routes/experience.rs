//! `/api/experience` route — work-history timeline fragment.
//!
//! Entries alternate sides of a vertical rule, each with a slide-in delay
//! proportional to its index, mirroring the scroll-triggered entrance the
//! page wrapper gates on viewport visibility.

use crate::content::{EXPERIENCES, RESUME_URL};

/// Handle GET /api/experience
pub fn handle(_query: &str) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(r#"<div class="text-center mb-16"><h2 class="section-title">Experience</h2><p class="section-subtitle">Professional journey and expertise</p></div>"#);

    html.push_str(r#"<div class="relative max-w-4xl mx-auto">"#);
    // Timeline rule
    html.push_str(r#"<div class="absolute left-0 md:left-1/2 top-0 bottom-0 w-px bg-border"></div>"#);

    for (i, exp) in EXPERIENCES.iter().enumerate() {
        let (side_class, slide) = if i % 2 == 0 {
            ("md:flex-row-reverse", "animate-slide-left md:mr-8")
        } else {
            ("", "animate-slide-right md:ml-8")
        };

        html.push_str(&format!(
            r#"<div class="mb-12 flex flex-col md:flex-row {side}"><div class="md:w-1/2 mb-8 md:mb-0"><div class="glass-card p-6 {slide}" style="animation-delay:{delay}ms">"#,
            side = side_class,
            slide = slide,
            delay = i * 200,
        ));

        html.push_str(&format!(
            r#"<div class="flex items-center mb-4"><div class="w-12 h-12 rounded-full overflow-hidden mr-4 flex-shrink-0"><img src="{logo}" alt="{company}" class="w-full h-full object-cover"></div><div><h3 class="text-xl font-bold">{title}</h3><p class="text-muted-foreground">{company}</p></div></div>"#,
            logo = exp.logo,
            company = exp.company,
            title = exp.title,
        ));

        html.push_str(&format!(
            r#"<div class="flex items-center text-sm text-muted-foreground mb-4"><span>{}</span></div>"#,
            exp.period
        ));
        html.push_str(&format!(r#"<p class="mb-4">{}</p>"#, exp.description));

        html.push_str(r#"</div></div>"#);

        // Timeline dot
        html.push_str(&format!(
            r#"<div class="hidden md:block absolute left-1/2 transform -translate-x-1/2" style="top:{}rem"><div class="w-5 h-5 rounded-full border-4 border-background bg-primary"></div></div>"#,
            i * 12 + 2
        ));
        html.push_str(r#"</div>"#);
    }
    html.push_str(r#"</div>"#);

    html.push_str(&format!(
        r#"<div class="text-center mt-8"><a href="{}" target="_blank" rel="noopener noreferrer" class="inline-flex items-center text-primary font-medium hover:underline">View Full Resume &rarr;</a></div>"#,
        RESUME_URL
    ));

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_entry() {
        let html = handle("");
        for exp in &EXPERIENCES {
            assert!(html.contains(exp.title));
            assert!(html.contains(exp.company));
            assert!(html.contains(exp.period));
        }
    }

    #[test]
    fn entries_alternate_sides() {
        let html = handle("");
        assert!(html.contains("animate-slide-left"));
        assert!(html.contains("animate-slide-right"));
        assert_eq!(
            html.matches("md:flex-row-reverse").count(),
            EXPERIENCES.len().div_ceil(2)
        );
    }

    #[test]
    fn entrance_delays_grow_with_index() {
        let html = handle("");
        assert!(html.contains("animation-delay:0ms"));
        assert!(html.contains(&format!("animation-delay:{}ms", (EXPERIENCES.len() - 1) * 200)));
    }

    #[test]
    fn links_to_the_resume() {
        let html = handle("");
        assert!(html.contains(RESUME_URL));
    }
}

//! `/api/achievements` route — tabbed honors/volunteer/certification panels.
//!
//! Query parameters:
//! - `tab` — `honors` (default), `volunteer`, `certifications`, `additional`

use crate::content::{AWARDS, CERTIFICATIONS, INTERESTS, LANGUAGES, VOLUNTEER_ROLES};
use crate::routes::util::{get_param, parse_query};

const TABS: [(&str, &str); 4] = [
    ("honors", "Honors & Awards"),
    ("volunteer", "Volunteer"),
    ("certifications", "Certifications"),
    ("additional", "Additional"),
];

fn render_tab_bar(active: &str) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<div class="grid grid-cols-4 mb-8 w-full rounded-lg bg-muted p-1">"#);
    for (key, label) in TABS {
        let state_class = if key == active {
            "bg-background shadow-sm"
        } else {
            "opacity-70 hover:opacity-100"
        };
        html.push_str(&format!(
            r##"<button hx-get="/api/achievements?tab={key}" hx-target="#achievements-section" hx-swap="innerHTML" class="flex items-center justify-center gap-2 rounded-md py-1.5 text-sm font-medium {class}">{label}</button>"##,
            key = key,
            class = state_class,
            label = label,
        ));
    }
    html.push_str(r#"</div>"#);
    html
}

fn render_honors() -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="space-y-6">"#);
    for award in &AWARDS {
        html.push_str(&format!(
            r#"<div class="bg-card rounded-lg p-6 shadow-sm"><h3 class="font-semibold text-xl mb-4">{title}</h3><p class="text-muted-foreground mb-2">{org}</p><ul class="list-disc list-inside space-y-2 text-sm">"#,
            title = award.title,
            org = award.org,
        ));
        for point in award.points {
            html.push_str(&format!(r#"<li>{}</li>"#, point));
        }
        html.push_str(r#"</ul></div>"#);
    }
    html.push_str(r#"</div>"#);
    html
}

fn render_volunteer() -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div class="space-y-6">"#);
    for role in &VOLUNTEER_ROLES {
        html.push_str(&format!(
            r#"<div class="bg-card rounded-lg p-6 shadow-sm"><div class="flex justify-between items-start mb-2"><h3 class="font-semibold text-xl">{title}</h3><span class="text-sm text-muted-foreground">{period}</span></div><p class="text-muted-foreground mb-2">{org}</p><ul class="list-disc list-inside space-y-2 text-sm">"#,
            title = role.title,
            period = role.period,
            org = role.org,
        ));
        for point in role.points {
            html.push_str(&format!(r#"<li>{}</li>"#, point));
        }
        html.push_str(r#"</ul></div>"#);
    }
    html.push_str(r#"</div>"#);
    html
}

fn render_certifications() -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-4">"#);
    for cert in &CERTIFICATIONS {
        html.push_str(&format!(
            r#"<div class="bg-card rounded-lg p-4 flex items-start"><div><h3 class="font-medium">{title}</h3><p class="text-sm text-muted-foreground">{date}</p></div></div>"#,
            title = cert.title,
            date = cert.date,
        ));
    }
    html.push_str(r#"</div>"#);
    html
}

fn render_additional() -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<div class="bg-card rounded-lg p-6 shadow-sm"><div class="space-y-4">"#);

    html.push_str(r#"<div><h3 class="font-semibold mb-2">Languages</h3><div class="flex flex-wrap gap-2">"#);
    for lang in LANGUAGES {
        html.push_str(&format!(
            r#"<span class="px-2 py-1 text-xs font-medium bg-secondary rounded-full">{}</span>"#,
            lang
        ));
    }
    html.push_str(r#"</div></div>"#);

    html.push_str(r#"<div><h3 class="font-semibold mb-2">Interests</h3><div class="flex flex-wrap gap-2">"#);
    for interest in INTERESTS {
        html.push_str(&format!(
            r#"<span class="px-2 py-1 text-xs font-medium bg-secondary rounded-full">{}</span>"#,
            interest
        ));
    }
    html.push_str(r#"</div></div>"#);

    html.push_str(r#"</div></div>"#);
    html
}

/// Handle GET /api/achievements
pub fn handle(query: &str) -> String {
    let params = parse_query(query);
    let requested = get_param(&params, "tab").unwrap_or("honors");
    let active = TABS
        .iter()
        .find(|(key, _)| *key == requested)
        .map(|(key, _)| *key)
        .unwrap_or("honors");

    let mut html = String::with_capacity(8192);
    html.push_str(r#"<h2 class="text-3xl md:text-4xl font-bold text-center mb-12">Achievements &amp; Experience</h2>"#);
    html.push_str(r#"<div class="w-full max-w-4xl mx-auto">"#);
    html.push_str(&render_tab_bar(active));
    match active {
        "volunteer" => html.push_str(&render_volunteer()),
        "certifications" => html.push_str(&render_certifications()),
        "additional" => html.push_str(&render_additional()),
        _ => html.push_str(&render_honors()),
    }
    html.push_str(r#"</div>"#);
    html
}

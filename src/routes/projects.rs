//! `/api/projects` route — filterable project grid.
//!
//! Query parameters:
//! - `category` — one of the filter tabs; unknown or missing falls back to
//!   "All". Tabs re-request this route with their own category and swap the
//!   whole section.

use crate::content::{Project, PROJECTS, PROJECT_CATEGORIES};
use crate::routes::util::{get_param, parse_query};

fn active_category(query: &str) -> &'static str {
    let params = parse_query(query);
    let requested = get_param(&params, "category").unwrap_or("All");
    PROJECT_CATEGORIES
        .iter()
        .find(|c| **c == requested)
        .copied()
        .unwrap_or("All")
}

fn matches(project: &Project, category: &str) -> bool {
    category == "All" || project.category == category
}

fn render_card(project: &Project, index: usize) -> String {
    format!(
        r#"<div class="glass-card overflow-hidden group transition-all duration-500" style="transition-delay:{delay}ms">
  <div class="relative h-48 overflow-hidden">
    <img src="{image}" alt="{title}" class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110">
    <div class="absolute bottom-4 right-4 flex space-x-2">
      <a href="{github}" class="p-2 bg-background/80 backdrop-blur-sm rounded-full" aria-label="View GitHub Repository">GitHub</a>
      <a href="{link}" class="p-2 bg-background/80 backdrop-blur-sm rounded-full" aria-label="View Live Project">Live</a>
    </div>
  </div>
  <div class="p-6">
    <div class="mb-2"><span class="inline-block px-2 py-1 text-xs font-medium bg-secondary/50 rounded-full">{category}</span></div>
    <h3 class="text-xl font-bold mb-2">{title}</h3>
    <p class="text-muted-foreground">{description}</p>
  </div>
</div>"#,
        delay = index * 100,
        image = project.image,
        github = project.github,
        link = project.link,
        category = project.category,
        title = project.title,
        description = project.description,
    )
}

/// Handle GET /api/projects
pub fn handle(query: &str) -> String {
    let active = active_category(query);

    let mut html = String::with_capacity(8192);
    html.push_str(r#"<div class="text-center mb-16"><h2 class="section-title">Projects</h2><p class="section-subtitle">Showcasing my best work and designs</p></div>"#);

    // Filter tabs
    html.push_str(r#"<div class="flex flex-wrap justify-center gap-2 mb-12">"#);
    for category in PROJECT_CATEGORIES {
        let tab_class = if category == active {
            "bg-primary text-primary-foreground shadow-md"
        } else {
            "bg-secondary/70 text-secondary-foreground hover:bg-secondary"
        };
        html.push_str(&format!(
            r##"<button hx-get="/api/projects?category={cat}" hx-target="#projects-section" hx-swap="innerHTML" class="px-4 py-2 rounded-full text-sm transition-all duration-300 {class}">{cat}</button>"##,
            cat = category,
            class = tab_class,
        ));
    }
    html.push_str(r#"</div>"#);

    // Card grid
    html.push_str(r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">"#);
    for (i, project) in PROJECTS.iter().filter(|p| matches(p, active)).enumerate() {
        html.push_str(&render_card(project, i));
    }
    html.push_str(r#"</div>"#);

    html
}

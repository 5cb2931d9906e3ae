//! `/api/skills` route — skill category cards with chip lists.

use crate::content::SKILL_CATEGORIES;

/// Handle GET /api/skills
pub fn handle(_query: &str) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(r#"<div class="text-center mb-16"><h2 class="section-title">Skills</h2><p class="section-subtitle">Technical expertise and capabilities</p></div>"#);

    html.push_str(r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">"#);
    for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
        html.push_str(&format!(
            r#"<div class="glass-card p-6 transition-all duration-500" style="transition-delay:{delay}ms"><div class="flex items-center mb-4"><h3 class="text-xl font-semibold">{title}</h3></div><div class="flex flex-wrap gap-2">"#,
            delay = i * 100,
            title = category.title,
        ));
        for skill in category.skills {
            html.push_str(&format!(
                r#"<span class="px-3 py-1.5 bg-background/50 border border-border rounded-full text-sm font-medium transition-all duration-300 hover:bg-primary/10">{}</span>"#,
                skill
            ));
        }
        html.push_str(r#"</div></div>"#);
    }
    html.push_str(r#"</div>"#);

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_category_and_skill() {
        let html = handle("");
        for category in &SKILL_CATEGORIES {
            assert!(html.contains(category.title));
            for skill in category.skills {
                assert!(html.contains(skill), "missing skill chip: {}", skill);
            }
        }
    }

    #[test]
    fn cards_stagger_their_entrance() {
        let html = handle("");
        assert!(html.contains("transition-delay:0ms"));
        assert!(html.contains(&format!(
            "transition-delay:{}ms",
            (SKILL_CATEGORIES.len() - 1) * 100
        )));
    }
}

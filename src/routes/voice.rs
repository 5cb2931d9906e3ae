//! `/api/voice/*` routes — narration playlist for the voice-reader bridge.
//!
//! The SpeechSynthesis engine lives in the browser; the server's job is the
//! narration itself. `/playlist` composes spoken text for every section from
//! the content records and returns it as JSON; the bridge walks the list,
//! scrolling each section into view as it reads. `/controls` renders the
//! navbar buttons for the bridge's current playback state, and
//! `/unsupported` is the one-shot notice shown when the speech API is
//! missing — after that the feature is simply inert.

use serde::Serialize;

use crate::content::{
    AWARDS, CONTACT_EMAIL, CONTACT_LOCATION, EXPERIENCES, GALLERY_IMAGES, PROJECTS,
    SITE_NAME, SKILL_CATEGORIES, TAGLINE,
};

#[derive(Serialize)]
struct NarrationSection {
    id: &'static str,
    title: &'static str,
    text: String,
}

#[derive(Serialize)]
struct Playlist {
    sections: Vec<NarrationSection>,
}

fn intro_text() -> String {
    format!(
        "Welcome to {}'s portfolio website. I will guide you through each section. Let's start with a brief introduction. {}",
        title_case(SITE_NAME),
        TAGLINE
    )
}

// The hero name is stored upper-case for the typewriter; speech wants it
// title-cased so the voice doesn't spell it out.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn experience_text() -> String {
    let mut text = String::from("Now viewing the Experience section. ");
    for exp in &EXPERIENCES {
        text.push_str(&format!(
            "{} at {}, {}. {} ",
            exp.title, exp.company, exp.period, exp.description
        ));
    }
    text.trim_end().to_string()
}

fn projects_text() -> String {
    let mut text = String::from("Now viewing the Projects section. ");
    for project in &PROJECTS {
        text.push_str(&format!("{}. {} ", project.title, project.description));
    }
    text.trim_end().to_string()
}

fn achievements_text() -> String {
    let mut text = String::from("Now viewing the Achievements section. ");
    for award in &AWARDS {
        text.push_str(&format!("{}, {}. ", award.title, award.org));
    }
    text.trim_end().to_string()
}

fn gallery_text() -> String {
    let mut text = String::from("Now viewing the Gallery section. ");
    for image in &GALLERY_IMAGES {
        text.push_str(&format!("{}. ", image.alt));
    }
    text.trim_end().to_string()
}

fn skills_text() -> String {
    let mut text = String::from("Now viewing the Skills section. ");
    for category in &SKILL_CATEGORIES {
        text.push_str(&format!("{}: {}. ", category.title, category.skills.join(", ")));
    }
    text.trim_end().to_string()
}

fn contact_text() -> String {
    format!(
        "Now viewing the Contact section. You can reach me by email at {}, or find me at {}. Thanks for listening.",
        CONTACT_EMAIL, CONTACT_LOCATION
    )
}

/// Handle GET /api/voice/playlist — the full narration as JSON.
pub fn handle_playlist(_query: &str) -> String {
    let playlist = Playlist {
        sections: vec![
            NarrationSection { id: "home", title: "Introduction", text: intro_text() },
            NarrationSection { id: "experience", title: "Experience", text: experience_text() },
            NarrationSection { id: "projects", title: "Projects", text: projects_text() },
            NarrationSection { id: "achievements", title: "Achievements", text: achievements_text() },
            NarrationSection { id: "gallery", title: "Gallery", text: gallery_text() },
            NarrationSection { id: "skills", title: "Skills", text: skills_text() },
            NarrationSection { id: "contact", title: "Contact", text: contact_text() },
        ],
    };
    serde_json::to_string(&playlist).unwrap_or_else(|_| r#"{"sections":[]}"#.to_string())
}

/// Handle GET /api/voice/controls?state=idle|reading|paused
/// Renders the navbar buttons for the bridge's playback state.
pub fn handle_controls(query: &str) -> String {
    let params = crate::routes::util::parse_query(query);
    let state = crate::routes::util::get_param(&params, "state").unwrap_or("idle");

    let mut html = String::with_capacity(1024);
    html.push_str(r#"<div class="flex items-center gap-1">"#);
    match state {
        "reading" | "paused" => {
            let (label, glyph) = if state == "paused" {
                ("Resume reading", "&#x25B6;")
            } else {
                ("Pause reading", "&#x23F8;")
            };
            html.push_str(&format!(
                r#"<button onclick="folioVoice.togglePause()" class="h-10 w-10 rounded-full bg-secondary/50 hover:bg-secondary" aria-label="{label}">{glyph}</button>"#,
                label = label,
                glyph = glyph,
            ));
            html.push_str(r#"<button onclick="folioVoice.stop()" class="h-10 w-10 rounded-full bg-secondary/50 hover:bg-secondary" aria-label="Stop reading">&#x1F507;</button>"#);
        }
        _ => {
            html.push_str(r#"<button onclick="folioVoice.start()" class="h-10 w-10 rounded-full bg-secondary/50 hover:bg-secondary" aria-label="Start reading website content">&#x1F50A;</button>"#);
        }
    }
    html.push_str(r#"</div>"#);
    html
}

/// Handle GET /api/voice/unsupported — shown once when SpeechSynthesis is
/// missing; the feature stays inert afterwards.
pub fn handle_unsupported(_query: &str) -> String {
    r#"<div class="bg-destructive/10 text-destructive px-4 py-2 rounded-lg text-sm">Voice narration isn't available in this browser.</div>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_covers_every_section_in_page_order() {
        let json = handle_playlist("");
        let order = [
            "Introduction",
            "Experience",
            "Projects",
            "Achievements",
            "Gallery",
            "Skills",
            "Contact",
        ];
        let mut last = 0;
        for title in order {
            let pos = json.find(&format!("\"title\":\"{}\"", title));
            assert!(pos.is_some(), "missing section {}", title);
            assert!(pos.unwrap() > last || last == 0);
            last = pos.unwrap();
        }
    }

    #[test]
    fn playlist_is_valid_json() {
        let json = handle_playlist("");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sections"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn intro_greets_with_a_spoken_name() {
        let json = handle_playlist("");
        assert!(json.contains("Welcome to Aman Chauhan's portfolio website"));
    }

    #[test]
    fn narration_draws_from_the_content_records() {
        let json = handle_playlist("");
        assert!(json.contains("Chief AI Officer at Cropsky"));
        assert!(json.contains("Minimalist Dashboard"));
        assert!(json.contains("Reboot Hackathon 1st Prize"));
        assert!(json.contains(CONTACT_EMAIL));
    }

    #[test]
    fn controls_reflect_playback_state() {
        let idle = handle_controls("");
        assert!(idle.contains("folioVoice.start()"));
        assert!(!idle.contains("folioVoice.stop()"));

        let reading = handle_controls("?state=reading");
        assert!(reading.contains("Pause reading"));
        assert!(reading.contains("folioVoice.stop()"));

        let paused = handle_controls("?state=paused");
        assert!(paused.contains("Resume reading"));
    }

    #[test]
    fn unsupported_notice_mentions_the_limitation() {
        let html = handle_unsupported("");
        assert!(html.contains("isn't available"));
    }
}

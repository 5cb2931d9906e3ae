//! `/api/schedule` route — meeting-scheduling section.
//!
//! The calendar itself is an external hosted page; every booking button
//! opens it in a new tab. Nothing here talks to the booking API.

use crate::content::CALENDLY_URL;

/// Handle GET /api/schedule
pub fn handle(_query: &str) -> String {
    let mut html = String::with_capacity(2048);

    html.push_str(r#"<div class="text-center mb-16"><h2 class="section-title">Schedule a Meeting</h2><p class="section-subtitle">Book a time slot that works for you</p></div>"#);

    html.push_str(r#"<div class="max-w-4xl mx-auto glass-card p-8"><div class="grid grid-cols-1 md:grid-cols-2 gap-8">"#);

    html.push_str(r#"<div><div class="flex items-center mb-6"><h3 class="text-xl font-semibold">Easy Scheduling</h3></div>"#);
    html.push_str(r#"<p class="text-muted-foreground mb-6">Select a convenient time from my availability and receive an immediate confirmation. No back-and-forth emails required.</p>"#);
    html.push_str(r#"<div class="flex items-center mb-6"><h3 class="text-xl font-semibold">Flexible Options</h3></div>"#);
    html.push_str(r#"<p class="text-muted-foreground mb-8">Choose from different meeting durations and formats based on your needs, from quick consultations to in-depth discussions.</p>"#);
    html.push_str(&format!(
        r#"<button onclick="window.open('{}', '_blank')" class="btn-primary flex items-center">Schedule Now &rarr;</button>"#,
        CALENDLY_URL
    ));
    html.push_str(r#"</div>"#);

    html.push_str(r#"<div><div class="aspect-video bg-background rounded-lg shadow-lg overflow-hidden flex items-center justify-center"><div class="text-center p-8">"#);
    html.push_str(r#"<h3 class="text-xl font-semibold mb-2">My Calendar</h3><p class="text-muted-foreground mb-6">Click the button below to view my availability and schedule a meeting.</p>"#);
    html.push_str(&format!(
        r#"<button onclick="window.open('{}', '_blank')" class="btn-primary">Open Calendly</button>"#,
        CALENDLY_URL
    ));
    html.push_str(r#"</div></div></div>"#);

    html.push_str(r#"</div></div>"#);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_buttons_open_the_external_page() {
        let html = handle("");
        assert_eq!(html.matches(CALENDLY_URL).count(), 2);
        assert!(html.contains("_blank"));
    }

    #[test]
    fn renders_both_panels() {
        let html = handle("");
        assert!(html.contains("Easy Scheduling"));
        assert!(html.contains("Flexible Options"));
        assert!(html.contains("My Calendar"));
    }
}

//! `/api/contact` routes — contact form rendering, validation, and the
//! hand-off to the client-side mail bridge.
//!
//! The mail API itself is a hosted third-party service called from the
//! browser; this module validates the submission, returns the confirmation
//! fragment with a script that forwards the payload to the bridge, and
//! renders the transient failure notice when the bridge reports a rejection.
//! There is no retry path.

use crate::content::{CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, GITHUB_URL, LINKEDIN_URL};
use crate::routes::util::{get_param, parse_form_body};

/// Render the full contact section (form + contact info panel).
pub fn render_section() -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(r#"<div class="text-center mb-16"><h2 class="section-title">Contact</h2><p class="section-subtitle">Get in touch for collaborations and inquiries</p></div>"#);

    html.push_str(r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-12 max-w-6xl mx-auto">"#);

    // The form posts through HTMX; the response swaps in the confirmation or
    // the field errors.
    html.push_str(r#"<div class="glass-card p-8" id="contact-form"><h3 class="text-2xl font-bold mb-6">Send a Message</h3>"#);
    html.push_str(r##"<form hx-post="/api/contact" hx-target="#contact-form" hx-swap="innerHTML" class="space-y-6">"##);
    html.push_str(r#"<div><label for="name" class="block text-sm font-medium mb-2">Your Name</label><input type="text" id="name" name="name" required placeholder="John Doe" class="w-full px-4 py-3 rounded-lg border border-border bg-background/50"></div>"#);
    html.push_str(r#"<div><label for="email" class="block text-sm font-medium mb-2">Email Address</label><input type="email" id="email" name="email" required placeholder="john@example.com" class="w-full px-4 py-3 rounded-lg border border-border bg-background/50"></div>"#);
    html.push_str(r#"<div><label for="message" class="block text-sm font-medium mb-2">Your Message</label><textarea id="message" name="message" required rows="5" placeholder="How can I help you?" class="w-full px-4 py-3 rounded-lg border border-border bg-background/50 resize-none"></textarea></div>"#);
    html.push_str(r#"<button type="submit" class="btn-primary w-full flex items-center justify-center">Send Message</button>"#);
    html.push_str(r#"</form></div>"#);

    // Contact information panel
    html.push_str(r#"<div class="glass-card p-8 h-full"><h3 class="text-2xl font-bold mb-6">Contact Information</h3><div class="space-y-6">"#);
    html.push_str(&format!(
        r#"<div class="flex items-start"><div><h4 class="text-sm font-medium text-muted-foreground mb-1">Email</h4><a href="mailto:{email}" class="text-lg hover:text-primary">{email}</a></div></div>"#,
        email = CONTACT_EMAIL
    ));
    html.push_str(&format!(
        r#"<div class="flex items-start"><div><h4 class="text-sm font-medium text-muted-foreground mb-1">Phone</h4><a href="tel:{tel}" class="text-lg hover:text-primary">{phone}</a></div></div>"#,
        tel = CONTACT_PHONE.replace(' ', ""),
        phone = CONTACT_PHONE
    ));
    html.push_str(&format!(
        r#"<div class="flex items-start"><div><h4 class="text-sm font-medium text-muted-foreground mb-1">Location</h4><p class="text-lg">{}</p></div></div>"#,
        CONTACT_LOCATION
    ));
    html.push_str(&format!(
        r#"<div class="pt-8"><h4 class="text-sm font-medium text-muted-foreground mb-4">Connect on social media</h4><div class="flex space-x-4"><a href="{linkedin}" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn" class="p-3 rounded-full bg-background hover:bg-primary">LinkedIn</a><a href="{github}" target="_blank" rel="noopener noreferrer" aria-label="GitHub" class="p-3 rounded-full bg-background hover:bg-primary">GitHub</a></div></div>"#,
        linkedin = LINKEDIN_URL,
        github = GITHUB_URL
    ));
    html.push_str(r#"</div></div>"#);

    html.push_str(r#"</div>"#);
    html
}

/// Handle GET /api/contact
pub fn handle_get(_query: &str) -> String {
    render_section()
}

fn validation_error(message: &str) -> String {
    format!(
        r#"<div class="bg-destructive/10 text-destructive p-4 rounded-lg mb-4">{}</div>{}"#,
        message,
        render_form_only()
    )
}

// Re-render just the form under a validation notice, keeping the section
// header and info panel untouched in the DOM.
fn render_form_only() -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<h3 class="text-2xl font-bold mb-6">Send a Message</h3>"#);
    html.push_str(r##"<form hx-post="/api/contact" hx-target="#contact-form" hx-swap="innerHTML" class="space-y-6">"##);
    html.push_str(r#"<div><label for="name" class="block text-sm font-medium mb-2">Your Name</label><input type="text" id="name" name="name" required placeholder="John Doe" class="w-full px-4 py-3 rounded-lg border border-border bg-background/50"></div>"#);
    html.push_str(r#"<div><label for="email" class="block text-sm font-medium mb-2">Email Address</label><input type="email" id="email" name="email" required placeholder="john@example.com" class="w-full px-4 py-3 rounded-lg border border-border bg-background/50"></div>"#);
    html.push_str(r#"<div><label for="message" class="block text-sm font-medium mb-2">Your Message</label><textarea id="message" name="message" required rows="5" placeholder="How can I help you?" class="w-full px-4 py-3 rounded-lg border border-border bg-background/50 resize-none"></textarea></div>"#);
    html.push_str(r#"<button type="submit" class="btn-primary w-full flex items-center justify-center">Send Message</button>"#);
    html.push_str(r#"</form>"#);
    html
}

/// Handle POST /api/contact
///
/// Body params: `name`, `email`, `message`. On success the fragment carries
/// the confirmation plus a script that forwards the payload to the mail
/// bridge (`folioMail.send`). The bridge posts `/api/contact/failed` if the
/// hosted API rejects the send.
pub fn handle_post(body: &str) -> String {
    let params = parse_form_body(body);
    let name = get_param(&params, "name").unwrap_or("").trim().to_string();
    let email = get_param(&params, "email").unwrap_or("").trim().to_string();
    let message = get_param(&params, "message").unwrap_or("").trim().to_string();

    if name.is_empty() || message.is_empty() {
        return validation_error("Please fill in every field before sending.");
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return validation_error("Please enter a valid email address.");
    }

    let mut html = String::with_capacity(1024);
    html.push_str(r#"<div class="bg-accent/20 p-6 rounded-lg animate-fade-in"><p class="font-medium text-lg mb-2">Message Sent Successfully!</p><p>Thank you for reaching out. I'll get back to you as soon as possible.</p></div>"#);
    html.push_str(&format!(
        r#"<script>folioMail.send({});</script>"#,
        serde_json::json!({ "name": name, "email": email, "message": message })
    ));
    html
}

/// Handle POST /api/contact/failed — the bridge reports a mail-API rejection.
/// Surfaced as a transient notice over a fresh form; no retry.
pub fn handle_failed_post(_body: &str) -> String {
    validation_error("Sending failed. The mail service rejected the message — please try again later or use the email address on the right.")
}

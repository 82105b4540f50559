//! # Profile View
//!
//! The logged-in user's identity, membership date, and their own stored
//! decryption code (this is the one place the client redisplays it; the
//! user was told to keep it at login).

use chrono::DateTime;

use crate::app::App;

/// "member since" formatting for an ISO-8601 timestamp; tolerant of an
/// absent or unparseable value.
pub fn member_since(created_at: Option<&str>) -> String {
    created_at
        .and_then(|iso| DateTime::parse_from_rfc3339(iso).ok())
        .map(|date| date.format("%B %Y").to_string())
        .unwrap_or_else(|| "not provided".to_string())
}

/// Render the profile block, or a logged-out notice.
pub fn render_profile(app: &App) -> String {
    let Some(identity) = &app.identity else {
        return "Not logged in. Use `versus login` first.\n".to_string();
    };

    let code_line = match app.credentials.code() {
        Some(code) => format!("Decryption code: {}", code),
        None => "Decryption code: not stored on this device".to_string(),
    };

    format!(
        "Email:           {}\nMember since:    {}\n{}\n",
        identity.email,
        member_since(identity.created_at.as_deref()),
        code_line,
    )
}

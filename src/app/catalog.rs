//! # Poll Catalog View
//!
//! Lists every poll with its disclosure-safe title, option split and vote
//! total. Titles come exclusively from the disclosure engine, so a poll
//! revealed elsewhere in the session shows its plaintext here too — and
//! only that poll.

use anyhow::Result;

use crate::app::App;
use crate::models::Versus;

/// Render one catalog line per poll.
pub fn render_catalog(app: &App, polls: &[Versus]) -> String {
    if polls.is_empty() {
        return "No polls yet. Use `versus create` to add one.\n".to_string();
    }

    let mut out = String::new();
    for poll in polls {
        let title = app.disclosure.display_title(poll);
        out.push_str(&format!(
            "#{:<4} [{}] {}\n       {} {}%  vs  {} {}%   ({} votes)\n",
            poll.id,
            poll.category,
            title,
            poll.option_a.text,
            poll.option_a.percentage,
            poll.option_b.text,
            poll.option_b.percentage,
            poll.total_votes,
        ));
    }
    out
}

/// Fetch and print the catalog.
pub async fn show(app: &mut App) -> Result<()> {
    let polls = app.polls.list().await?;
    print!("{}", render_catalog(app, &polls));
    Ok(())
}

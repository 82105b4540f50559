//! # Poll Detail View
//!
//! Shows one poll with its two options and handles voting. There is no
//! vote endpoint on the backend; a vote mutates the local copy of the poll
//! (tally, percentages and total move together) and the result view
//! renders the updated aggregate.

use anyhow::Result;
use log::info;

use crate::app::{results, App};
use crate::models::{Choice, Versus};

/// Render the pre-vote detail block for one poll.
pub fn render_detail(app: &App, poll: &Versus) -> String {
    let title = app.disclosure.display_title(poll);
    format!(
        "[{}] {}\n\nWhich do you prefer?\n  (a) {}\n  (b) {}\n\nTotal votes: {}\n",
        poll.category, title, poll.option_a.text, poll.option_b.text, poll.total_votes,
    )
}

/// Fetch and print one poll. Prints a plain message for an unknown id.
pub async fn show(app: &mut App, id: u64) -> Result<()> {
    match app.polls.get(id).await? {
        Some(poll) => print!("{}", render_detail(app, &poll)),
        None => println!("poll {} not found", id),
    }
    Ok(())
}

/// Fetch a poll, record the viewer's vote on the local copy, and print the
/// aggregated results.
pub async fn vote(app: &mut App, id: u64, choice: Choice) -> Result<()> {
    let Some(mut poll) = app.polls.get(id).await? else {
        println!("poll {} not found", id);
        return Ok(());
    };

    poll.record_vote(choice);
    info!("vote recorded on poll {}", id);
    print!("{}", results::render_results(app, &poll, Some(choice)));
    Ok(())
}

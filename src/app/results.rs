//! # Poll Results View
//!
//! Aggregated outcome of one poll: percentage bars, raw tallies, vote
//! total, and a marker on the option the viewer picked.

use crate::app::App;
use crate::models::{Choice, Versus};

const BAR_WIDTH: usize = 40;

fn bar(percentage: u64) -> String {
    let filled = (percentage as usize * BAR_WIDTH) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Render the result block for one poll.
pub fn render_results(app: &App, poll: &Versus, user_choice: Option<Choice>) -> String {
    let title = app.disclosure.display_title(poll);
    let mark = |c: Choice| {
        if user_choice == Some(c) {
            "  <- your choice"
        } else {
            ""
        }
    };

    format!(
        "[{}] {}\n\n  {}  {:>3}%  {}{}\n  ({} votes)\n\n  {}  {:>3}%  {}{}\n  ({} votes)\n\nTotal votes: {}\n",
        poll.category,
        title,
        bar(poll.option_a.percentage),
        poll.option_a.percentage,
        poll.option_a.text,
        mark(Choice::A),
        poll.option_a.votes,
        bar(poll.option_b.percentage),
        poll.option_b.percentage,
        poll.option_b.text,
        mark(Choice::B),
        poll.option_b.votes,
        poll.total_votes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::AppConfig;
    use crate::models::VersusOption;

    fn poll() -> Versus {
        let mut v = Versus {
            id: 1,
            category: "Anime".to_string(),
            title: None,
            title_masked: Some("Na**********".to_string()),
            is_encrypted: true,
            option_a: VersusOption {
                text: "Naruto".to_string(),
                votes: 3,
                percentage: 0,
            },
            option_b: VersusOption {
                text: "One Piece".to_string(),
                votes: 1,
                percentage: 0,
            },
            total_votes: 4,
        };
        v.recompute_percentages();
        v
    }

    fn test_app(dir: &tempfile::TempDir) -> App {
        let config = AppConfig {
            credentials_path: dir
                .path()
                .join("credentials.json")
                .to_string_lossy()
                .into_owned(),
            ..AppConfig::default()
        };
        App::bootstrap(config).unwrap()
    }

    #[test]
    fn test_results_show_percentages_and_choice_marker() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);
        let rendered = render_results(&app, &poll(), Some(Choice::A));
        assert!(rendered.contains("75%"));
        assert!(rendered.contains("25%"));
        assert!(rendered.contains("Naruto  <- your choice"));
        assert!(!rendered.contains("One Piece  <- your choice"));
        assert!(rendered.contains("Total votes: 4"));
    }

    #[test]
    fn test_results_keep_title_masked() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);
        let rendered = render_results(&app, &poll(), None);
        assert!(rendered.contains("Na**********"));
    }

    #[test]
    fn test_bar_widths() {
        assert_eq!(bar(0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(bar(100).chars().filter(|c| *c == '█').count(), BAR_WIDTH);
        assert_eq!(bar(50).chars().count(), BAR_WIDTH);
    }
}

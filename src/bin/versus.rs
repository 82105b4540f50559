//! # Versus CLI Entry Point
//!
//! Terminal front end for the Versus poll service.
//!
//! ## Usage
//!
//! ```bash
//! versus register --email you@example.com --password 'Str0ngPass'
//! versus list
//! versus show 7
//! versus reveal 7            # uses your stored code
//! versus reveal 7 --code AB12CD34
//! versus vote 7 a
//! versus search naruto
//! versus create --category Anime --option-a Naruto --option-b "One Piece"
//! versus whoami
//! versus logout
//! ```
//!
//! Every invocation reconstructs the session from persisted credentials
//! before doing anything else; no network is touched for that step.

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

use versus_client::app::{authoring, catalog, detail, profile, App};
use versus_client::common::config::AppConfig;
use versus_client::models::Choice;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the client configuration file (TOML format)
    #[arg(short, long, default_value = "versus.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account and receive your decryption code
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and receive your decryption code
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored token and decryption code
    Logout,
    /// Show the current session and stored decryption code
    Whoami,
    /// List all polls (titles masked unless revealed)
    List,
    /// Show one poll
    Show { id: u64 },
    /// Vote on a poll and see the results
    Vote { id: u64, choice: Choice },
    /// Reveal a poll's title with a decryption code
    Reveal {
        id: u64,
        /// Code to use; defaults to your stored code
        #[arg(long)]
        code: Option<String>,
    },
    /// Search the anime catalog for option labels
    Search { query: String },
    /// Create a new poll
    Create {
        #[arg(long, default_value = "Anime")]
        category: String,
        /// Optional title; defaults to "<A> vs <B>"
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        option_a: String,
        #[arg(long)]
        option_b: String,
    },
}

/// Initialize the logging system with timestamp, level, and message
/// formatting. Format: `[HH:MM:SS] [LEVEL] message`
fn init_logger() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();
    let config = AppConfig::from_file_or_default(&args.config)?;
    let mut app = App::bootstrap(config)?;

    match args.command {
        Command::Register { email, password } => match app.register(&email, &password).await {
            Ok(auth) => {
                println!("Account created for {}.", auth.user.email);
                println!();
                println!("Your decryption code: {}", auth.decryption_code);
                println!("Keep it! You need it to reveal poll titles.");
            }
            Err(e) => println!("registration failed: {}", e),
        },
        Command::Login { email, password } => match app.login(&email, &password).await {
            Ok(auth) => {
                println!("Logged in as {}.", auth.user.email);
                println!();
                println!("Your decryption code: {}", auth.decryption_code);
                println!("Keep it! You need it to reveal poll titles.");
            }
            Err(e) => println!("login failed: {}", e),
        },
        Command::Logout => {
            app.logout();
            println!("Logged out.");
        }
        Command::Whoami => {
            print!("{}", profile::render_profile(&app));
        }
        Command::List => {
            if let Err(e) = catalog::show(&mut app).await {
                println!("could not load polls: {}", e);
            }
        }
        Command::Show { id } => {
            if let Err(e) = detail::show(&mut app, id).await {
                println!("could not load poll: {}", e);
            }
        }
        Command::Vote { id, choice } => {
            if let Err(e) = detail::vote(&mut app, id, choice).await {
                println!("could not vote: {}", e);
            }
        }
        Command::Reveal { id, code } => {
            let code = match code {
                Some(code) => code,
                None => {
                    if !app.disclosure.autofill(id, &app.credentials) {
                        println!("no stored code; pass one with --code");
                        return Ok(());
                    }
                    app.disclosure.entered_code(id)
                }
            };

            let polls = app.polls.clone();
            let state = app.disclosure.submit_code(&polls, id, &code).await;
            match state {
                versus_client::DisclosureState::Revealed { title } => {
                    println!("poll {}: {}", id, title)
                }
                versus_client::DisclosureState::Masked { error } => println!(
                    "could not reveal poll {}: {}",
                    id,
                    error.unwrap_or_else(|| "unknown error".to_string())
                ),
                versus_client::DisclosureState::Submitting => {
                    // Unreachable for a single CLI submission.
                }
            }
        }
        Command::Search { query } => match app.search.search(&query).await {
            Ok(results) if results.data.is_empty() => println!("no results"),
            Ok(results) => {
                for hit in results.data {
                    match hit.id {
                        Some(id) => println!("#{:<6} {}", id, hit.title),
                        None => println!("       {}", hit.title),
                    }
                }
            }
            Err(e) => println!("search failed: {}", e),
        },
        Command::Create {
            category,
            title,
            option_a,
            option_b,
        } => {
            let draft = authoring::PollDraft {
                category,
                title,
                option_a,
                option_b,
            };
            match authoring::submit(&app, &draft).await {
                Ok(Some(created)) => {
                    println!("created poll #{}: {}", created.id, created.masked_label());
                    println!("(the title is stored encrypted; reveal it with your code)");
                }
                Ok(None) => {
                    if !app.is_authenticated() {
                        println!("log in first: `versus login`");
                    } else {
                        println!("both options are required");
                    }
                }
                Err(e) => {
                    println!("could not create poll: {}", e);
                    println!(
                        "draft kept: {} vs {}",
                        draft.option_a, draft.option_b
                    );
                }
            }
        }
    }

    Ok(())
}

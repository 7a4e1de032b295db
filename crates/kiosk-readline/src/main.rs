//! The kiosk binary: an interactive catalog-browsing REPL.
//!
//! Each accepted input triggers one synchronous pass: re-read the memoized
//! catalog, recompute the active view (re-filter or re-sample), re-render.
//! All session state lives in memory and dies with the process.

mod command;
mod render;

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing_subscriber::EnvFilter;

use kiosk_core::Result as KioskResult;
use kiosk_core::catalog::CatalogRepository;
use kiosk_core::recommend::RecommendParams;
use kiosk_core::search::SearchFilter;
use kiosk_core::session::{SessionState, View};
use kiosk_infrastructure::{ConfigService, CsvCatalogRepository, PartialRatioScorer};

use command::Command;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: ["/browse", "/search", "/toggle", "/selected", "/picks", "/help"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // ===== Backend Initialization =====
    // Load configuration and the catalog; both failures are fatal here, no
    // partial session ever starts.
    let config = ConfigService::new().get_config()?;
    let repository = CsvCatalogRepository::new(&config.catalog);
    let catalog = repository.load()?;

    let filter = SearchFilter::with_limit(PartialRatioScorer::new(), config.search.limit);
    let params = config.recommendations.params();
    let mut session = SessionState::new();

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Kiosk Catalog Browser ===".bright_magenta().bold());
    println!(
        "{}",
        format!("{} products loaded.", catalog.len()).bright_black()
    );
    println!(
        "{}",
        "Type to search, '/toggle <id>' to select, '/picks' for recommendations, 'quit' to exit."
            .bright_black()
    );

    render::view(&catalog, &session, &filter, &params);

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                let command = Command::parse(trimmed);
                if let Err(e) = dispatch(command, &repository, &filter, &params, &mut session) {
                    eprintln!("{}", format!("Error: {e}").red());
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

/// Applies one parsed input to the session, then re-renders the active view.
fn dispatch(
    command: Command,
    repository: &CsvCatalogRepository,
    filter: &SearchFilter<PartialRatioScorer>,
    params: &RecommendParams,
    session: &mut SessionState,
) -> KioskResult<()> {
    tracing::debug!(?command, "dispatching input");

    // Every interaction re-reads the catalog; the repository memoizes, so
    // this is a cache hit after startup.
    let catalog = repository.load()?;

    match command {
        Command::Browse => {
            session.set_view(View::Browse);
            session.set_query(String::new());
        }
        Command::Search(query) => {
            session.set_view(View::Browse);
            session.set_query(query);
        }
        Command::Freeform(text) => {
            if session.view() != View::Browse {
                render::freeform_hint();
                return Ok(());
            }
            session.set_query(text);
        }
        Command::Toggle(id) => match session.toggle(&catalog, &id) {
            Ok(outcome) => {
                let title = catalog.get(&id).map(|r| r.title.as_str()).unwrap_or(&id);
                render::toggle_feedback(outcome, title);
            }
            Err(e) if e.is_unknown_product() => {
                // Recovered locally; the session state is untouched.
                render::unknown_product(&id);
                return Ok(());
            }
            Err(e) => return Err(e),
        },
        Command::Selected => session.set_view(View::Selected),
        Command::Picks => session.set_view(View::Picks),
        Command::Help => {
            render::help();
            return Ok(());
        }
        Command::Unknown(input) => {
            render::unknown_command(&input);
            return Ok(());
        }
    }

    render::view(&catalog, session, filter, params);
    Ok(())
}

//! Colored rendering for the three session views.
//!
//! Each interaction re-renders the active view from scratch: the browse
//! view re-filters the catalog, the picks view re-samples. Image references
//! are rendered as dimmed text; the terminal shows no images.

use colored::Colorize;

use kiosk_core::catalog::{Catalog, ProductRecord};
use kiosk_core::recommend::{Recommendation, RecommendParams, recommend};
use kiosk_core::search::SearchFilter;
use kiosk_core::session::{SessionState, ToggleOutcome, View};
use kiosk_infrastructure::PartialRatioScorer;

/// Renders the session's active view.
pub fn view(
    catalog: &Catalog,
    session: &SessionState,
    filter: &SearchFilter<PartialRatioScorer>,
    params: &RecommendParams,
) {
    match session.view() {
        View::Browse => browse(catalog, session, filter),
        View::Selected => selected(catalog, session),
        View::Picks => picks(catalog, session, params),
    }
}

fn browse(catalog: &Catalog, session: &SessionState, filter: &SearchFilter<PartialRatioScorer>) {
    println!();
    println!("{}", "Browse and Select Products".bright_magenta().bold());

    let query = session.query();
    if !query.trim().is_empty() {
        println!("{}", format!("Showing matches for '{query}'").bright_black());
    }

    let records = filter.filter(query, catalog);
    if records.is_empty() {
        println!("{}", "No products match your search.".yellow());
        return;
    }

    for record in &records {
        product_line(record, session.is_selected(&record.id));
    }
}

fn selected(catalog: &Catalog, session: &SessionState) {
    println!();
    println!("{}", "Your Selected Items".bright_magenta().bold());

    let records = session.selected_records(catalog);
    if records.is_empty() {
        println!(
            "{}",
            "You have not selected any products yet. Use '/browse' to choose.".bright_black()
        );
        return;
    }

    println!(
        "{}",
        format!("You have selected {} items:", records.len()).bold()
    );
    for record in records {
        product_line(record, true);
    }
}

fn picks(catalog: &Catalog, session: &SessionState, params: &RecommendParams) {
    println!();
    println!("{}", "Recommended Products".bright_magenta().bold());

    match recommend(catalog, session, params) {
        Recommendation::Insufficient { selected, required } => {
            println!(
                "{}",
                format!(
                    "Please select at least {required} products to view recommendations \
                     ({selected} selected so far)."
                )
                .yellow()
            );
        }
        Recommendation::Batch(batch) if batch.is_empty() => {
            println!(
                "{}",
                "Nothing left to recommend: every product is already selected.".yellow()
            );
        }
        Recommendation::Batch(batch) => {
            println!(
                "{}",
                format!("Here are {} products recommended for you:", batch.len()).bold()
            );
            for record in &batch {
                product_line(record, false);
            }
        }
    }
}

fn product_line(record: &ProductRecord, selected: bool) {
    let id = format!("[{}]", record.id).cyan();
    if selected {
        println!("  {id} {} {}", record.title.green().bold(), "✓".green());
    } else {
        println!("  {id} {}", record.title);
    }
    println!("      {}", record.image_url.bright_black());
}

/// Echoes the outcome of a toggle, mirroring the original app's feedback.
pub fn toggle_feedback(outcome: ToggleOutcome, title: &str) {
    match outcome {
        ToggleOutcome::Selected => println!("{}", format!("Selected '{title}'!").green()),
        ToggleOutcome::Deselected => println!("{}", format!("Deselected '{title}'!").yellow()),
    }
}

/// Warns about a toggle against an id the catalog does not hold.
pub fn unknown_product(id: &str) {
    println!(
        "{}",
        format!("No product with id '{id}' in the catalog.").yellow()
    );
}

/// Hints that bare text only searches inside the browse view.
pub fn freeform_hint() {
    println!(
        "{}",
        "Switch to '/browse' to search, or use a command ('/help' lists them).".bright_black()
    );
}

/// Reports an unrecognized command.
pub fn unknown_command(input: &str) {
    println!("{}", format!("Unknown command: {input}").bright_black());
    println!("{}", "Type '/help' for the command overview.".bright_black());
}

/// Prints the command overview.
pub fn help() {
    println!("{}", "Commands".bright_magenta().bold());
    println!("  {}  browse the catalog (clears the search)", "/browse".cyan());
    println!("  {}  search product titles, e.g. '/search red shoe'", "/search <query>".cyan());
    println!("  {}  select or deselect a product", "/toggle <id>".cyan());
    println!("  {}  list what you have selected", "/selected".cyan());
    println!("  {}  show recommendations", "/picks".cyan());
    println!("  {}  this overview", "/help".cyan());
    println!("  {}  leave the session", "quit".cyan());
    println!();
    println!(
        "{}",
        "Bare text in the browse view searches titles directly.".bright_black()
    );
}

//! Slash-command parsing for the REPL.

/// One parsed line of user input.
///
/// Bare text is not a command: in the browse view it becomes the search
/// query, elsewhere it earns a hint. The dispatcher decides, because the
/// parser does not know the active view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch to the browse view and clear the query.
    Browse,
    /// Switch to the selected-items view.
    Selected,
    /// Switch to the recommendations view.
    Picks,
    /// Select or deselect a product by id.
    Toggle(String),
    /// Search in the browse view.
    Search(String),
    /// Show the command overview.
    Help,
    /// Bare text without a leading slash.
    Freeform(String),
    /// An unrecognized or malformed slash command.
    Unknown(String),
}

impl Command {
    /// Parses one trimmed, non-empty input line.
    pub fn parse(input: &str) -> Self {
        if !input.starts_with('/') {
            return Command::Freeform(input.to_string());
        }

        let (name, rest) = match input.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (input, ""),
        };

        match name {
            "/browse" => Command::Browse,
            "/selected" => Command::Selected,
            "/picks" => Command::Picks,
            "/help" => Command::Help,
            "/search" => Command::Search(rest.to_string()),
            "/toggle" if !rest.is_empty() => Command::Toggle(rest.to_string()),
            _ => Command::Unknown(input.to_string()),
        }
    }
}

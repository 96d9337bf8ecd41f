// src/client/command.rs
//! Terminal input: one event per line.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// New contents of the search box.
    Input(String),
    /// Pick the suggestion at a 1-based position.
    Pick(usize),
    Page(i64),
    Next,
    Previous,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Input(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let arg = parts.next();
        match (verb, arg) {
            ("pick", Some(n)) => n.parse().map(Command::Pick).unwrap_or_else(|_| Command::Unknown(line.to_string())),
            ("page", Some(n)) => n.parse().map(Command::Page).unwrap_or_else(|_| Command::Unknown(line.to_string())),
            ("next", None) => Command::Next,
            ("prev", None) => Command::Previous,
            ("quit", None) | ("q", None) => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

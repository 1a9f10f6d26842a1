//! Line editing for the REPL.
//!
//! Completes slash commands, the form names taken by `/set` and `/submit`,
//! and the field names of the form given to `/set`.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use scribe_application::FormKind;

use crate::command::COMMANDS;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone, Default)]
pub struct CliHelper;

impl CliHelper {
    pub fn new() -> Self {
        Self
    }
}

/// Start of the word being typed and the words it can still become.
fn candidates(line: &str) -> (usize, Vec<&'static str>) {
    let start = line.rfind(' ').map_or(0, |i| i + 1);
    let prefix = &line[start..];
    let words: Vec<&str> = line[..start].split_whitespace().collect();

    let pool: Vec<&'static str> = match words.as_slice() {
        [] if prefix.starts_with('/') => COMMANDS.to_vec(),
        ["/set"] | ["/submit"] => FormKind::ALL.iter().map(FormKind::as_str).collect(),
        ["/set", form] => form
            .parse::<FormKind>()
            .map(|kind| kind.field_names().to_vec())
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    let matches = pool
        .into_iter()
        .filter(|word| word.starts_with(prefix))
        .collect();
    (start, matches)
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
        let (start, words) = candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        let end = line.find(' ').unwrap_or(line.len());
        let (command, rest) = line.split_at(end);
        Owned(format!("{}{}", command.bright_cyan(), rest))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (start, words) = candidates(line);
        let typed = line.len() - start;
        if typed == 0 {
            return None;
        }
        words
            .into_iter()
            .find(|word| word.len() > typed)
            .map(|word| word[typed..].to_string())
    }
}

impl Validator for CliHelper {}

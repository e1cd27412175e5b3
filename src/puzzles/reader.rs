//! Puzzle record reader
//!
//! Each line holds `game_id,initial_pattern,target_word`. Fields are trimmed,
//! uppercased and stripped of surrounding double quotes. Bad lines are
//! collected as [`RecordIssue`]s and never stop the rest of the file from
//! loading.

use super::Puzzle;
use crate::core::{Pattern, PatternError, Word, WordError, normalize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Why a record line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    EmptyLine,
    /// Fewer than three fields; holds the count found
    MissingFields(usize),
    EmptyField(&'static str),
    InvalidPattern(PatternError),
    InvalidTarget(WordError),
    LengthMismatch { pattern: usize, target: usize },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLine => write!(f, "empty line"),
            Self::MissingFields(count) => {
                write!(f, "expected 3 fields, found {count}")
            }
            Self::EmptyField(name) => write!(f, "field {name} is empty"),
            Self::InvalidPattern(err) => write!(f, "invalid pattern: {err}"),
            Self::InvalidTarget(err) => write!(f, "invalid target word: {err}"),
            Self::LengthMismatch { pattern, target } => write!(
                f,
                "pattern has {pattern} positions but target word has {target} letters"
            ),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(err) => Some(err),
            Self::InvalidTarget(err) => Some(err),
            _ => None,
        }
    }
}

/// A rejected line and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    /// 1-based line number
    pub line: usize,
    pub error: RecordError,
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// Valid puzzles plus the issues found while reading them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleSet {
    pub puzzles: Vec<Puzzle>,
    pub issues: Vec<RecordIssue>,
}

/// Read puzzle records from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read. Malformed records are not
/// errors; they are reported in [`PuzzleSet::issues`].
pub fn read_puzzles<P: AsRef<Path>>(path: P) -> io::Result<PuzzleSet> {
    let content = fs::read_to_string(path)?;
    Ok(parse_puzzles(&content))
}

/// Parse puzzle records from text
///
/// A first line starting with the `game_id` column name is treated as a
/// header and skipped.
///
/// # Examples
/// ```
/// use hangman_solver::puzzles::parse_puzzles;
///
/// let set = parse_puzzles("game_id,pattern,word\n1,**t,cat\n2,**,cat\n");
/// assert_eq!(set.puzzles.len(), 1);
/// assert_eq!(set.puzzles[0].target.text(), "CAT");
/// assert_eq!(set.issues.len(), 1);
/// assert_eq!(set.issues[0].line, 3);
/// ```
#[must_use]
pub fn parse_puzzles(content: &str) -> PuzzleSet {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut set = PuzzleSet::default();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        if line_number == 1 && is_header(line) {
            continue;
        }

        match parse_record(line) {
            Ok(puzzle) => set.puzzles.push(puzzle),
            Err(error) => set.issues.push(RecordIssue {
                line: line_number,
                error,
            }),
        }
    }

    set
}

fn is_header(line: &str) -> bool {
    split_fields(line)
        .first()
        .is_some_and(|field| field.eq_ignore_ascii_case("GAME_ID"))
}

/// Parse one `game_id,initial_pattern,target_word` line
///
/// # Errors
///
/// Returns the first problem found with the line.
pub fn parse_record(line: &str) -> Result<Puzzle, RecordError> {
    if line.trim().is_empty() {
        return Err(RecordError::EmptyLine);
    }

    let fields = split_fields(line);
    let [game_id, pattern, target, ..] = fields.as_slice() else {
        return Err(RecordError::MissingFields(fields.len()));
    };

    for (name, value) in [
        ("game_id", game_id),
        ("initial_pattern", pattern),
        ("target_word", target),
    ] {
        if value.is_empty() {
            return Err(RecordError::EmptyField(name));
        }
    }

    let pattern = Pattern::parse(pattern).map_err(RecordError::InvalidPattern)?;
    let target = Word::new(target).map_err(RecordError::InvalidTarget)?;
    if pattern.len() != target.len() {
        return Err(RecordError::LengthMismatch {
            pattern: pattern.len(),
            target: target.len(),
        });
    }

    Ok(Puzzle {
        game_id: game_id.clone(),
        pattern,
        target,
    })
}

/// Split a line on commas, honoring double-quoted fields
///
/// Every field is normalized after its quotes are removed. A doubled quote
/// inside a quoted field stands for one quote character.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(normalize(&std::mem::take(&mut current))),
            c => current.push(c),
        }
    }
    fields.push(normalize(&current));

    fields
}

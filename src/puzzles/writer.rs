//! Result rows

use super::PuzzleResult;
use std::fs;
use std::io;
use std::path::Path;

/// Column names of the results file
pub const RESULTS_HEADER: &str = "game_id,attempt_count,final_pattern,status,attempt_sequence";

/// Render results as CSV text, header first
#[must_use]
pub fn format_results(results: &[PuzzleResult]) -> String {
    let mut out = String::new();
    out.push_str(RESULTS_HEADER);
    out.push('\n');

    for result in results {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            escape_field(&result.game_id),
            result.outcome.attempt_count(),
            escape_field(&result.outcome.final_pattern.to_string()),
            result.status_label(),
            escape_field(&result.attempt_sequence()),
        ));
    }

    out
}

/// Write results to `path`, creating parent directories as needed
///
/// # Errors
///
/// Returns an I/O error if a directory cannot be created or the file cannot be
/// written.
pub fn write_results<P: AsRef<Path>>(path: P, results: &[PuzzleResult]) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format_results(results))
}

/// Quote a field when it holds a comma, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

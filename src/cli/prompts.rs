//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use crossterm::style::Stylize;

use passcraft::Category;
use passcraft::error::CorpusError;

use super::quiet;
use crate::terminal::format_number;

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", msg.yellow());
    }
}

/// Red error on stderr. Never suppressed.
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn corpus_fallback(err: &CorpusError) {
    warn(&format!("Warning: {err}. Using internal word lists."));
}

pub fn seeded_output() {
    warn("Warning: --seed output is reproducible. Do not use it for real passwords.");
}

/// The length cut removed guaranteed characters or word fragments.
pub fn shortfall(length: usize, dropped: &[Category], cut_words: usize) {
    let missing: Vec<String> = dropped.iter().map(ToString::to_string).collect();
    if !missing.is_empty() {
        warn(&format!(
            "Warning: length {length} is too short to keep every category; may be missing: {}",
            missing.join(", ")
        ));
    }
    if cut_words > 0 {
        warn(&format!(
            "Warning: length {length} cut {cut_words} dictionary word(s) short"
        ));
    }
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {}", path.display());
    }
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Asks whether to print instead when the clipboard is unavailable. Returns true to fall
/// back to the terminal. Non-interactive and quiet runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_written(count: usize, path: &Path) {
    if !quiet::enabled() {
        let full_path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        println!(
            "{} password(s) \u{2192} {}",
            format_number(count),
            full_path.display()
        );
    }
}

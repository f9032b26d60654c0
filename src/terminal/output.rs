//! Terminal output utilities.

use crossterm::style::Stylize;

use passcraft::Report;

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {title} ");
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Bits of entropy for `length` independent draws from `charset_size` characters.
pub fn calculate_entropy(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Rough entropy of one generated password.
///
/// Words count as draws from the corpus, randomly cased letters as one bit each, and every
/// other character as a draw from the filler pool. Unit shuffling is ignored.
pub fn estimate_entropy(report: &Report) -> f64 {
    let words = calculate_entropy(report.words, report.corpus_size);
    let others = report.length.saturating_sub(report.word_chars);
    words + report.cased_letters as f64 + calculate_entropy(others, report.pool_size)
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// Summary box printed by `--stats`.
pub fn print_summary(report: &Report, source: &str, count: usize) {
    let bits = estimate_entropy(report);
    let strength = entropy_strength(bits);
    let strength = match strength {
        "Weak" => strength.red().to_string(),
        "Fair" => strength.yellow().to_string(),
        _ => strength.green().to_string(),
    };

    println!();
    box_top("Entropy");
    box_line(&format!("{bits:.1} bits ({strength})"));
    box_line(&format!(
        "Source: {source} \u{2022} Pool: {} chars",
        report.pool_size
    ));
    if report.words > 0 {
        box_line(&format!(
            "Words: {} of {} \u{2022} Filler: {} chars",
            report.words,
            format_number(report.corpus_size),
            report.filler
        ));
    }
    box_line(&format!(
        "Generated: {} \u{2022} Length: {}",
        format_number(count),
        report.length
    ));
    box_bottom();
}

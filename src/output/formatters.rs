//! Formatting utilities for terminal output

/// Spread letters out for display ("lowyel" -> "L O W Y E L")
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(done: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        width
    } else {
        (done * width / total).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lay words out in left-aligned columns
///
/// Column width follows the longest word; `per_row` must be non-zero.
#[must_use]
pub fn format_columns(words: &[String], per_row: usize) -> Vec<String> {
    let per_row = per_row.max(1);
    let width = words.iter().map(String::len).max().unwrap_or(0);

    words
        .chunks(per_row)
        .map(|row| {
            row.iter()
                .map(|word| format!("{word:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

use std::sync::OnceLock;

use regex::Regex;

fn enumeration_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| Regex::new(r"^\d+[).]\s*").expect("enumeration pattern is valid"))
}

/// Turns a raw model response into at most `max_points` discussion points.
///
/// Per line: skip blanks, strip leading `-`/`•` markers and surrounding
/// whitespace, then strip one `1)` / `1.` enumeration prefix. Lines left empty
/// are dropped. Trailing punctuation is kept as the model wrote it.
pub fn parse_points(raw: &str, max_points: usize) -> Vec<String> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(clean_line)
        .filter(|point| !point.is_empty())
        .take(max_points)
        .collect()
}

fn clean_line(line: &str) -> String {
    let unbulleted = line
        .trim()
        .trim_start_matches(|c: char| c == '-' || c == '•' || c.is_whitespace());
    enumeration_prefix()
        .replace(unbulleted, "")
        .trim()
        .to_string()
}

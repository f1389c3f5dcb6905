// Prompt template for discussion-point extraction.

/// Replace `{max_points}` and `{notes}` before sending.
pub const POINTS_PROMPT_TEMPLATE: &str = "\
You are analyzing multiple team discussion notes.\n\
Summarize the following into at most {max_points} high-level, generic discussion points, \
or fewer if the notes do not support that many.\n\
- Only use the information provided under Notes.\n\
- Avoid specific solutions, names, or numbers.\n\
- Keep points broad and neutral to spark further discussion.\n\
- Use 3-6 words per point.\n\
- Do not end points with a period.\n\
- Put each point on its own line.\n\
\n\
Notes:\n\
{notes}";

pub fn build_points_prompt(notes: &str, max_points: usize) -> String {
    // Substitute notes last so braces inside the notes are never re-expanded.
    POINTS_PROMPT_TEMPLATE
        .replace("{max_points}", &max_points.to_string())
        .replace("{notes}", notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_cap_and_notes() {
        let prompt = build_points_prompt("Sirens failed in the north district", 5);
        assert!(prompt.contains("at most 5 high-level"));
        assert!(prompt.contains("Notes:\nSirens failed in the north district"));
        assert!(prompt.contains("Only use the information provided under Notes"));
        assert!(prompt.contains("Avoid specific solutions, names, or numbers"));
        assert!(prompt.contains("3-6 words"));
        assert!(prompt.contains("Do not end points with a period"));
    }

    #[test]
    fn test_notes_with_placeholder_text_are_left_alone() {
        let prompt = build_points_prompt("literal {max_points} in notes", 3);
        assert!(prompt.ends_with("literal {max_points} in notes"));
    }
}

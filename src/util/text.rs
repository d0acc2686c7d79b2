// src/util/text.rs

const ELLIPSIS: char = '…';

/// Shorten a title to at most `max_chars` characters, ending in an ellipsis
/// when something was cut.
///
/// # Examples
///
/// ```
/// use notesview::util::text::truncate_title;
///
/// assert_eq!(truncate_title("Groceries", 20), "Groceries");
/// assert_eq!(truncate_title("Groceries for the week", 10), "Groceries…");
/// ```
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if max_chars == 0 || title.chars().count() <= max_chars {
        return title.to_string();
    }

    let mut shortened: String = title.chars().take(max_chars - 1).collect();
    shortened.truncate(shortened.trim_end().len());
    shortened.push(ELLIPSIS);
    shortened
}

/// Collapse all whitespace runs, newlines included, into single spaces
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_short_title_when_truncating_then_returns_unchanged() {
        assert_eq!(truncate_title("Tree", 10), "Tree");
    }

    #[test]
    fn given_exact_width_title_when_truncating_then_returns_unchanged() {
        assert_eq!(truncate_title("0123456789", 10), "0123456789");
    }

    #[test]
    fn given_long_title_when_truncating_then_ends_with_ellipsis() {
        let result = truncate_title("What is a Tree?", 8);

        assert_eq!(result, "What is…");
        assert_eq!(result.chars().count(), 8);
    }

    #[test]
    fn given_cyrillic_title_when_truncating_then_counts_characters() {
        assert_eq!(truncate_title("Список покупок", 7), "Список…");
    }

    #[test]
    fn given_zero_width_when_truncating_then_disables_truncation() {
        assert_eq!(truncate_title("Anything goes", 0), "Anything goes");
    }

    #[test]
    fn given_multiline_text_when_collapsing_then_returns_single_line() {
        assert_eq!(single_line("first\n\nsecond\t third "), "first second third");
    }

    #[test]
    fn given_empty_text_when_collapsing_then_returns_empty_string() {
        assert_eq!(single_line("  \n "), "");
    }
}

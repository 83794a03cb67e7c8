//! Reusable string helpers for views.

/// Greedy word wrap. Explicit newlines are kept; words longer than `width`
/// are placed on their own line rather than split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };

            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

/// Pluralised count, e.g. `1 event`, `3 events`
pub fn count_label(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}s", count, singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_wrap_keeps_newlines_and_long_words() {
        let lines = wrap_text("1. short\n2. extraordinarily", 6);
        assert_eq!(lines, vec!["1.", "short", "2.", "extraordinarily"]);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "event"), "0 events");
        assert_eq!(count_label(1, "event"), "1 event");
    }
}

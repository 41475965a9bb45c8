//! Comment priority tokens.
//!
//! A comment may carry a leading `"<1-5>. "` marker. Picking a priority
//! prepends its token; picking the one already present removes it (toggle).

/// Lowest selectable priority.
pub const PRIORITY_MIN: u8 = 1;
/// Highest selectable priority.
pub const PRIORITY_MAX: u8 = 5;

fn token(priority: u8) -> String {
    format!("{priority}. ")
}

/// Priority encoded at the head of `comment`, if any.
#[must_use]
pub fn parse_priority(comment: &str) -> Option<u8> {
    for priority in PRIORITY_MIN..=PRIORITY_MAX {
        if comment.starts_with(&token(priority)) {
            return Some(priority);
        }
    }
    None
}

/// Comment with any leading priority token removed.
#[must_use]
pub fn strip_priority(comment: &str) -> &str {
    match parse_priority(comment) {
        Some(priority) => comment.strip_prefix(&token(priority)).unwrap_or(comment),
        None => comment,
    }
}

/// Toggle `priority` on the comment: removes the token when it is already
/// the active one, otherwise replaces whatever token was there.
#[must_use]
pub fn toggle_priority(comment: &str, priority: u8) -> String {
    let priority = priority.clamp(PRIORITY_MIN, PRIORITY_MAX);
    if parse_priority(comment) == Some(priority) {
        strip_priority(comment).to_owned()
    } else {
        format!("{}{}", token(priority), strip_priority(comment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("3. call back", Some(3); "tagged")]
    #[test_case("call back", None; "untagged")]
    #[test_case("6. call back", None; "out of range")]
    #[test_case("3.call back", None; "missing space")]
    #[test_case("", None; "empty")]
    fn parses_leading_token(comment: &str, expected: Option<u8>) {
        assert_eq!(parse_priority(comment), expected);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let tagged = toggle_priority("call back", 2);
        assert_eq!(tagged, "2. call back");
        assert_eq!(toggle_priority(&tagged, 2), "call back");
    }

    #[test]
    fn toggle_replaces_other_priority() {
        assert_eq!(toggle_priority("4. call back", 1), "1. call back");
    }

    #[test]
    fn toggle_on_empty_comment() {
        assert_eq!(toggle_priority("", 5), "5. ");
        assert_eq!(toggle_priority("5. ", 5), "");
    }
}

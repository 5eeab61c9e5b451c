//! Tag parsing.

/// Split operator input on runs of whitespace into ordered tags.
///
/// Every run is one separator, and the segments before the first run and
/// after the last are kept even when empty: `""` yields `[""]` and
/// `" a b "` yields `["", "a", "b", ""]`.
pub fn split_tags(input: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut current = String::new();
    let mut in_run = false;

    for c in input.chars() {
        if c.is_whitespace() {
            if !in_run {
                tags.push(std::mem::take(&mut current));
                in_run = true;
            }
        } else {
            current.push(c);
            in_run = false;
        }
    }
    tags.push(current);
    tags
}

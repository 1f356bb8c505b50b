//! Line-sequence helpers shared by every stage of the merge.
//!
//! Lines are opaque text: two lines are equal only when their bytes are
//! equal after carriage returns have been stripped.

use std::collections::HashSet;

/// Normalize line endings and split text into lines.
///
/// Every `\r` is removed before splitting on `\n`, so both CRLF files and
/// stray carriage returns collapse to plain lines. Empty text has no lines.
///
/// # Examples
///
/// ```
/// use npmignore::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b", ""]);
/// assert!(split_lines("").is_empty());
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    text.replace('\r', "")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Remove unwanted lines from a sequence.
///
/// An absent source yields nothing and an absent removal set leaves the
/// source untouched. Surviving lines keep their order and duplicates.
///
/// # Examples
///
/// ```
/// use npmignore::difference;
///
/// let source = vec!["a".to_string(), "b".to_string(), "a".to_string()];
/// let remove = vec!["b".to_string()];
/// assert_eq!(difference(Some(source.as_slice()), Some(remove.as_slice())), vec!["a", "a"]);
/// assert!(difference(None, Some(remove.as_slice())).is_empty());
/// assert_eq!(difference(Some(source.as_slice()), None), source);
/// ```
pub fn difference(source: Option<&[String]>, remove: Option<&[String]>) -> Vec<String> {
    match (source, remove) {
        (None, _) => Vec::new(),
        (Some(source), None) => source.to_vec(),
        (Some(source), Some(remove)) => without(source.to_vec(), remove),
    }
}

/// Drop every line of `lines` that appears in `remove`.
pub(crate) fn without<S: AsRef<str>>(mut lines: Vec<String>, remove: &[S]) -> Vec<String> {
    if remove.is_empty() {
        return lines;
    }

    let remove: HashSet<&str> = remove.iter().map(|line| line.as_ref()).collect();
    lines.retain(|line| !remove.contains(line.as_str()));
    lines
}

/// Remove repeated lines, keeping the first occurrence of each.
///
/// # Examples
///
/// ```
/// use npmignore::dedupe;
///
/// let lines = vec!["b".into(), "a".into(), "b".into()];
/// assert_eq!(dedupe(lines), vec!["b", "a"]);
/// ```
pub fn dedupe(lines: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(lines.len());
    lines
        .into_iter()
        .filter(|line| seen.insert(line.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_plain_text() {
        assert_eq!(split_lines("a\nb"), lines(&["a", "b"]));
    }

    #[test]
    fn split_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\nb\n"), lines(&["a", "b", ""]));
    }

    #[test]
    fn split_strips_all_carriage_returns() {
        assert_eq!(split_lines("a\r\nb\rc\r\n"), lines(&["a", "bc", ""]));
    }

    #[test]
    fn split_empty_text() {
        assert_eq!(split_lines(""), Vec::<String>::new());
    }

    #[test]
    fn split_only_newline() {
        assert_eq!(split_lines("\n"), lines(&["", ""]));
    }

    #[test]
    fn difference_keeps_order_and_duplicates() {
        let source = lines(&["c", "a", "b", "a", "c"]);
        let remove = lines(&["c"]);
        assert_eq!(
            difference(Some(source.as_slice()), Some(remove.as_slice())),
            lines(&["a", "b", "a"])
        );
    }

    #[test]
    fn difference_with_absent_source() {
        let remove = lines(&["a"]);
        assert_eq!(difference(None, Some(remove.as_slice())), Vec::<String>::new());
        assert_eq!(difference(None, None), Vec::<String>::new());
    }

    #[test]
    fn difference_with_absent_removal_set() {
        let source = lines(&["a", "b"]);
        assert_eq!(difference(Some(source.as_slice()), None), source);
    }

    #[test]
    fn difference_is_exact_match() {
        // Substrings and case variants are different lines
        let source = lines(&["node_modules", "node_modules/", "Node_modules"]);
        let remove = lines(&["node_modules"]);
        assert_eq!(
            difference(Some(source.as_slice()), Some(remove.as_slice())),
            lines(&["node_modules/", "Node_modules"])
        );
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        assert_eq!(
            dedupe(lines(&["x", "y", "x", "", "y", ""])),
            lines(&["x", "y", ""])
        );
    }

    #[test]
    fn dedupe_empty() {
        assert_eq!(dedupe(Vec::new()), Vec::<String>::new());
    }
}

//! Merging git ignore sources into an npm ignore file.
//!
//! The output has two zones separated by the marker banner:
//!
//! ```text
//! <rules from .gitignore / .gitattributes>
//!
//! # npmignore - content above this line is automatically generated and modifications may be omitted
//! # see npmjs.com/npmignore for more details.
//! <custom rules carried over from the previous .npmignore>
//! ```
//!
//! The top zone is rebuilt from the git sources on every merge. The bottom
//! zone keeps whatever the user added below the banner last time.

use crate::attributes::parse_attributes;
use crate::extract::split_zones;
use crate::lines::{dedupe, split_lines, without};
use crate::marker::{BANNER, is_marker_text};

/// Ignore rules given either as raw text or as lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rules {
    /// Newline-delimited text, split when merged
    Text(String),
    /// Lines used as they are
    Lines(Vec<String>),
}

impl Rules {
    fn to_lines(&self) -> Vec<String> {
        match self {
            Rules::Text(text) => split_lines(text),
            Rules::Lines(lines) => lines.clone(),
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::Lines(Vec::new())
    }
}

impl From<&str> for Rules {
    fn from(text: &str) -> Self {
        Rules::Text(text.to_string())
    }
}

impl From<String> for Rules {
    fn from(text: String) -> Self {
        Rules::Text(text)
    }
}

impl From<Vec<String>> for Rules {
    fn from(lines: Vec<String>) -> Self {
        Rules::Lines(lines)
    }
}

/// Where the generated zone comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitSource {
    /// Contents of a `.gitignore`
    Text(String),
    /// Rules that are already split into lines
    Lines(Vec<String>),
    /// `.gitignore` rules followed by the `export-ignore` entries of a
    /// `.gitattributes`
    Structured { ignore: Rules, attributes: String },
}

impl GitSource {
    /// Combine `.gitignore` rules with `.gitattributes` content.
    pub fn structured(ignore: impl Into<Rules>, attributes: impl Into<String>) -> Self {
        GitSource::Structured {
            ignore: ignore.into(),
            attributes: attributes.into(),
        }
    }

    /// The generated-zone lines, in order.
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            GitSource::Text(text) => split_lines(text),
            GitSource::Lines(lines) => lines.clone(),
            GitSource::Structured { ignore, attributes } => {
                let mut lines = ignore.to_lines();
                lines.extend(parse_attributes(attributes));
                lines
            }
        }
    }
}

impl Default for GitSource {
    fn default() -> Self {
        GitSource::Lines(Vec::new())
    }
}

impl From<&str> for GitSource {
    fn from(text: &str) -> Self {
        GitSource::Text(text.to_string())
    }
}

impl From<String> for GitSource {
    fn from(text: String) -> Self {
        GitSource::Text(text)
    }
}

impl From<Vec<String>> for GitSource {
    fn from(lines: Vec<String>) -> Self {
        GitSource::Lines(lines)
    }
}

/// Options controlling a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Lines removed from both zones
    pub unignore: Vec<String>,
    /// Lines appended to the custom zone
    pub ignore: Vec<String>,
    /// Keep the whole previous file as custom rules, even the part above
    /// the marker
    pub keepdest: bool,
}

impl MergeOptions {
    /// Options with nothing forced in or out
    pub fn new() -> Self {
        Self::default()
    }

    /// Add lines to remove from both zones
    pub fn with_unignore<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unignore.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Add lines to append to the custom zone
    pub fn with_ignore<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Keep the lines above the marker of the previous file as custom rules
    pub fn with_keepdest(mut self, keepdest: bool) -> Self {
        self.keepdest = keepdest;
        self
    }
}

/// Custom lines carried over from a previous `.npmignore`.
///
/// A file with no marker was never generated, so all of it is custom.
fn previous_custom_lines(npm: Option<&str>, keepdest: bool) -> Vec<String> {
    let Some(npm) = npm else {
        return Vec::new();
    };

    let zones = split_zones(npm, keepdest);
    if zones.marker_found || keepdest {
        zones.preserved
    } else {
        zones.generated
    }
}

/// Join both zones around the marker banner.
///
/// # Examples
///
/// ```
/// use npmignore::{BANNER, format_document};
///
/// let doc = format_document(&["dist".to_string()], &[]);
/// assert_eq!(doc, format!("dist\n\n{BANNER}\n"));
/// ```
pub fn format_document(generated: &[String], preserved: &[String]) -> String {
    format!(
        "{}\n\n{}\n{}",
        generated.join("\n"),
        BANNER,
        preserved.join("\n")
    )
}

/// Merge git ignore rules into the previous contents of an `.npmignore`.
///
/// `npm` is the previous file, or `None` when there is none yet. Custom
/// lines below its marker are kept, minus blank lines, anything the git
/// source already covers, anything in `options.unignore`, and repeats.
///
/// # Examples
///
/// ```
/// use npmignore::{BANNER, GitSource, MergeOptions, merge};
///
/// let previous = format!("old\n\n{BANNER}\n*.test.js");
/// let merged = merge(
///     Some(previous.as_str()),
///     &GitSource::from("node_modules\ncoverage"),
///     &MergeOptions::new().with_ignore([".github"]),
/// );
/// assert_eq!(merged, format!("node_modules\ncoverage\n\n{BANNER}\n*.test.js\n.github"));
/// ```
pub fn merge(npm: Option<&str>, git: &GitSource, options: &MergeOptions) -> String {
    let git = without(git.to_lines(), &options.unignore);

    let mut npm = without(
        previous_custom_lines(npm, options.keepdest),
        &options.unignore,
    );
    npm.extend(options.ignore.iter().cloned());
    npm.retain(|line| !line.is_empty() && !is_marker_text(line));
    let npm = dedupe(without(npm, &git));

    tracing::debug!(
        generated = git.len(),
        preserved = npm.len(),
        keepdest = options.keepdest,
        "Merged ignore rules"
    );

    format_document(&git, &npm)
}

/// Merge with no git source: only the custom zone carries content.
pub fn merge_without_git(npm: Option<&str>, options: &MergeOptions) -> String {
    merge(npm, &GitSource::default(), options)
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Rule-like line content, including comments that mention the marker
    fn arb_line() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => prop::collection::vec(prop::char::range('a', 'f'), 0..3)
                .prop_map(|chars| chars.into_iter().collect()),
            1 => Just("node_modules".to_string()),
            1 => Just("*.log".to_string()),
            2 => Just(String::new()),
            1 => Just("# npmignore handled separately".to_string()),
            1 => Just("x #npmignore".to_string()),
            1 => Just("#npmignore".to_string()),
        ]
    }

    fn arb_text() -> impl Strategy<Value = String> {
        prop::collection::vec(arb_line(), 0..8).prop_map(|lines| lines.join("\n"))
    }

    /// Split merged output into its generated and custom zones
    fn zones(merged: &str) -> (Vec<String>, Vec<String>) {
        let (generated, preserved) = merged.split_once(&format!("\n\n{BANNER}\n")).unwrap();
        (split_lines(generated), split_lines(preserved))
    }

    proptest! {
        /// The banner appears exactly once
        #[test]
        fn banner_appears_once(npm in arb_text(), git in arb_text()) {
            let merged = merge(Some(npm.as_str()), &git.as_str().into(), &MergeOptions::new());
            prop_assert_eq!(merged.matches(BANNER).count(), 1);
        }

        /// Re-merging the output changes nothing
        #[test]
        fn merge_is_idempotent(npm in arb_text(), git in arb_text()) {
            let git = GitSource::from(git);
            let once = merge(Some(npm.as_str()), &git, &MergeOptions::new());
            let twice = merge(Some(once.as_str()), &git, &MergeOptions::new());
            prop_assert_eq!(once, twice);
        }

        /// Also with the same unignore list applied on both runs
        #[test]
        fn merge_with_unignore_is_idempotent(
            npm in arb_text(),
            git in arb_text(),
            unignore in prop::collection::vec(arb_line(), 0..3),
        ) {
            let git = GitSource::from(git);
            let options = MergeOptions::new().with_unignore(unignore);
            let once = merge(Some(npm.as_str()), &git, &options);
            let twice = merge(Some(once.as_str()), &git, &options);
            prop_assert_eq!(once, twice);
        }

        /// Keeping the previous file whole is stable across runs too
        #[test]
        fn merge_with_keepdest_is_idempotent(npm in arb_text(), git in arb_text()) {
            let git = GitSource::from(git);
            let options = MergeOptions::new().with_keepdest(true);
            let once = merge(Some(npm.as_str()), &git, &options);
            let twice = merge(Some(once.as_str()), &git, &options);
            prop_assert_eq!(once, twice);
        }

        /// No line ends up in both zones, and custom lines are unique
        #[test]
        fn zones_are_disjoint_and_custom_lines_unique(
            npm in arb_text(),
            git in arb_text(),
            ignore in prop::collection::vec(arb_line(), 0..3),
        ) {
            let options = MergeOptions::new().with_ignore(ignore);
            let merged = merge(Some(npm.as_str()), &git.as_str().into(), &options);
            let (generated, preserved) = zones(&merged);

            let generated: HashSet<&String> = generated.iter().collect();
            prop_assert!(preserved.iter().all(|line| !generated.contains(line)));

            let unique: HashSet<&String> = preserved.iter().collect();
            prop_assert_eq!(unique.len(), preserved.len());
            prop_assert!(preserved.iter().all(|line| !line.is_empty()));
        }
    }
}

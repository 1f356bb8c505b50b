//! Parsing `.gitattributes` content into ignore rules.
//!
//! Paths marked `export-ignore` are left out of `git archive` exports, so
//! they are unlikely to belong in a published package either. Comment lines
//! of the form `# Rules from: <source>` are passed through so the merged file
//! keeps track of where rules came from.
//!
//! # Examples
//!
//! ```
//! use npmignore::parse_attributes;
//!
//! let attributes = "\
//! ## Rules from: .gitattributes
//! /tests export-ignore
//! *.sh text eol=lf
//! docs/ export-ignore
//! ";
//! assert_eq!(
//!     parse_attributes(attributes),
//!     vec!["# Rules from: .gitattributes", "/tests", "docs/"]
//! );
//! ```

use crate::lines::split_lines;
use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::anychar,
    combinator::{eof, peek, recognize, verify},
    multi::many_till,
    sequence::delimited,
};

/// Any Unicode whitespace, including vertical tab, form feed and NBSP
fn whitespace0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace).parse(input)
}

fn whitespace1(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace).parse(input)
}

/// Whitespace, `export-ignore`, optional whitespace, end of line
fn export_ignore_suffix(input: &str) -> IResult<&str, &str> {
    recognize((whitespace1, tag("export-ignore"), whitespace0, eof)).parse(input)
}

/// Parse `<path> export-ignore`, returning the path.
///
/// The path is the shortest prefix followed by the suffix, so paths with
/// inner spaces survive intact.
fn export_ignore_entry(input: &str) -> IResult<&str, &str> {
    delimited(
        whitespace0,
        verify(
            recognize(many_till(anychar, peek(export_ignore_suffix))),
            |path: &str| !path.is_empty(),
        ),
        export_ignore_suffix,
    )
    .parse(input)
}

/// `# Rules from:` followed by at least one character
fn rules_from_comment(input: &str) -> IResult<&str, &str> {
    recognize((tag("# Rules from:"), anychar)).parse(input)
}

/// Extract ignore rules from attributes text.
///
/// Each `export-ignore` entry contributes its path and each
/// `# Rules from:` comment is kept verbatim. Other lines are discarded.
/// Order is preserved and nothing is deduplicated.
pub fn parse_attributes(text: &str) -> Vec<String> {
    split_lines(text)
        .into_iter()
        .filter_map(|line| {
            if let Ok((_, path)) = export_ignore_entry(&line) {
                Some(path.to_string())
            } else if rules_from_comment(&line).is_ok() {
                Some(line)
            } else {
                None
            }
        })
        .collect()
}

//! The marker comment separating generated rules from custom rules.
//!
//! Everything above the banner is rebuilt on every merge. Everything from
//! the first marker line down belongs to the user.

use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{char, multispace0},
    combinator::recognize,
};

/// The two banner lines written between the zones.
pub const BANNER_LINES: [&str; 2] = [
    "# npmignore - content above this line is automatically generated and modifications may be omitted",
    "# see npmjs.com/npmignore for more details.",
];

/// The banner as it appears in a merged document.
pub const BANNER: &str = "# npmignore - content above this line is automatically generated and modifications may be omitted\n# see npmjs.com/npmignore for more details.";

/// Bare marker lines a user may have typed by hand.
pub(crate) const MARKER_TOKENS: [&str; 2] = ["#npmignore", "# npmignore"];

/// `#`, optional whitespace, then `npmignore`
fn marker_token(input: &str) -> IResult<&str, &str> {
    recognize((char('#'), multispace0, tag("npmignore"))).parse(input)
}

/// Check whether a line carries the marker.
///
/// The token may appear anywhere in the line, so a trailing comment such as
/// `dist # npmignore` also counts. Matching is case-sensitive.
///
/// # Examples
///
/// ```
/// use npmignore::is_marker;
///
/// assert!(is_marker("# npmignore"));
/// assert!(is_marker("dist #npmignore"));
/// assert!(!is_marker("npmignore"));
/// assert!(!is_marker("# NPMIGNORE"));
/// ```
pub fn is_marker(line: &str) -> bool {
    line.match_indices('#')
        .any(|(at, _)| marker_token(&line[at..]).is_ok())
}

/// Whether a line is part of the marker text itself and must not be carried
/// over into the custom zone.
pub(crate) fn is_marker_text(line: &str) -> bool {
    BANNER_LINES.contains(&line) || MARKER_TOKENS.contains(&line)
}

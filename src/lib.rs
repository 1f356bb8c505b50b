//! Keep an `.npmignore` in sync with `.gitignore`.
//!
//! [`merge`] rebuilds the top of an `.npmignore` from git ignore rules (and
//! optionally the `export-ignore` entries of a `.gitattributes`) while
//! keeping the custom rules a user wrote below the marker banner.
//!
//! Reading and writing the files is left to the caller: everything here works
//! on strings.
//!
//! # Examples
//!
//! ```
//! use npmignore::{BANNER, GitSource, MergeOptions, merge};
//!
//! let gitignore = "node_modules\ncoverage";
//! let attributes = "/test export-ignore";
//! let npmignore = "*.tgz";
//!
//! let merged = merge(
//!     Some(npmignore),
//!     &GitSource::structured(gitignore, attributes),
//!     &MergeOptions::default(),
//! );
//! assert_eq!(
//!     merged,
//!     format!("node_modules\ncoverage\n/test\n\n{BANNER}\n*.tgz")
//! );
//! ```

mod attributes;
mod extract;
mod lines;
mod marker;
mod merge;

pub use attributes::parse_attributes;
pub use extract::{ExtractError, ExtractOptions, Zones, extract_preserved_zone, split_zones};
pub use lines::{dedupe, difference, split_lines};
pub use marker::{BANNER, BANNER_LINES, is_marker};
pub use merge::{GitSource, MergeOptions, Rules, format_document, merge, merge_without_git};

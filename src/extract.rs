//! Isolating the custom zone of a previously merged ignore file.

use crate::lines::split_lines;
use crate::marker::is_marker;
use error_set::error_set;

error_set! {
    /// Errors from extracting the preserved zone
    ExtractError := {
        /// No text was supplied
        #[display("npmignore expects a string")]
        InvalidInput,
    }
}

/// Options for [`extract_preserved_zone`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Treat the text as starting inside the preserved zone, even when no
    /// marker line is present.
    pub already_preserved: bool,
}

/// A previously merged file split at its marker line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Zones {
    /// Lines above the marker
    pub generated: Vec<String>,
    /// The marker line and everything below it
    pub preserved: Vec<String>,
    /// Whether a marker line was seen
    pub marker_found: bool,
}

/// Split text at the first marker line.
///
/// The marker line itself opens the preserved zone. With
/// `already_preserved` set every line is preserved.
pub fn split_zones(text: &str, already_preserved: bool) -> Zones {
    let mut zones = Zones::default();
    let mut preserving = already_preserved;

    for line in split_lines(text) {
        if !zones.marker_found && is_marker(&line) {
            zones.marker_found = true;
            preserving = true;
        }

        if preserving {
            zones.preserved.push(line);
        } else {
            zones.generated.push(line);
        }
    }

    zones
}

/// Return the preserved zone of a previously merged file.
///
/// Lines above the marker are dropped: the generated zone of the output is
/// always rebuilt from the git sources.
///
/// # Examples
///
/// ```
/// use npmignore::{ExtractOptions, extract_preserved_zone};
///
/// let text = "dist\n\n# npmignore\ntest/";
/// let zone = extract_preserved_zone(Some(text), &ExtractOptions::default()).unwrap();
/// assert_eq!(zone, vec!["# npmignore", "test/"]);
///
/// assert!(extract_preserved_zone(None, &ExtractOptions::default()).is_err());
/// ```
///
/// # Errors
///
/// Returns [`ExtractError::InvalidInput`] when `text` is `None`.
pub fn extract_preserved_zone(
    text: Option<&str>,
    options: &ExtractOptions,
) -> Result<Vec<String>, ExtractError> {
    let text = text.ok_or(ExtractError::InvalidInput)?;
    let zones = split_zones(text, options.already_preserved);

    tracing::trace!(
        generated = zones.generated.len(),
        preserved = zones.preserved.len(),
        marker_found = zones.marker_found,
        "Extracted preserved zone"
    );

    Ok(zones.preserved)
}

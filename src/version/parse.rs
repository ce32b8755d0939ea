//! Tag-to-version parsing.

use semver::Version;

use crate::error::VersionError;

/// Parse a release tag as a semantic version.
///
/// Release tags commonly carry a `v` prefix (`v1.2.3`); surrounding
/// whitespace and one leading `v` are stripped before handing the rest to
/// the semver grammar. Build metadata is kept on the parsed version but
/// plays no part in ordering.
pub fn parse_tag(raw: &str) -> Result<Version, VersionError> {
    let trimmed = raw.trim();
    let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);

    Version::parse(bare).map_err(|e| VersionError::ParseFailed(raw.to_string(), e))
}

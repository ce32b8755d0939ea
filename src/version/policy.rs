//! Since-policy matching over semantic versions.

use std::str::FromStr;

use semver::Version;

use crate::error::PolicyError;
use crate::version::parse::parse_tag;

/// Rule selecting which prior release qualifies as the changelog baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SincePolicy {
    /// Any release, prereleases included.
    Any,
    /// A final release of any patch level.
    Patch,
    /// A final `x.y.0` release.
    Minor,
    /// A final `x.0.0` release.
    Major,
    /// A release at or above an explicit version.
    Release(Version),
}

impl SincePolicy {
    /// Whether `candidate` qualifies as the release boundary.
    pub fn matches(&self, candidate: &Version) -> bool {
        match self {
            Self::Any => true,
            Self::Patch => candidate.pre.is_empty(),
            Self::Minor => candidate.patch == 0 && candidate.pre.is_empty(),
            Self::Major => {
                candidate.minor == 0 && candidate.patch == 0 && candidate.pre.is_empty()
            }
            Self::Release(floor) => candidate >= floor,
        }
    }
}

impl FromStr for SincePolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Any),
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            other => parse_tag(other)
                .map(Self::Release)
                .map_err(|e| PolicyError::Invalid(other.to_string(), e)),
        }
    }
}

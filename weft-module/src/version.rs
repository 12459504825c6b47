// Module version numbers
// Three dotted numeric fields; ordering follows field order

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid version '{input}': expected MAJOR.MINOR.PATCH")]
pub struct VersionParseError {
    pub input: String,
}

/// Version a module carries in its metadata (major.minor.patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    /// Accepts `1.2.3` and the `v1.2.3` spelling used in build metadata.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix('v').unwrap_or(s);
        let mut fields = trimmed.split('.');

        let mut next_field = || -> Result<u32, VersionParseError> {
            fields
                .next()
                .and_then(|part| part.parse().ok())
                .ok_or_else(|| VersionParseError {
                    input: s.to_string(),
                })
        };

        let major = next_field()?;
        let minor = next_field()?;
        let patch = next_field()?;
        if fields.next().is_some() {
            return Err(VersionParseError {
                input: s.to_string(),
            });
        }

        Ok(Self::new(major, minor, patch))
    }
}

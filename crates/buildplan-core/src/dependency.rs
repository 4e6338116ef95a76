use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration name that feeds the core library desugaring transform.
pub const DESUGARING_CONFIGURATION: &str = "coreLibraryDesugaring";

/// Maven coordinates parsed from a `group:artifact:version` string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinate {
    /// Parse `"group:artifact:version"` into coordinates.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group, artifact, version]
                if !group.is_empty() && !artifact.is_empty() && !version.is_empty() =>
            {
                Some(Self {
                    group: group.to_string(),
                    artifact: artifact.to_string(),
                    version: version.to_string(),
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// One dependency bound to a configuration such as `implementation`.
///
/// The coordinate is passed through to the external package fetcher as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DependencyDeclaration {
    pub configuration: String,
    pub coordinate: Coordinate,
}

impl DependencyDeclaration {
    pub fn is_desugaring(&self) -> bool {
        self.configuration == DESUGARING_CONFIGURATION
    }
}

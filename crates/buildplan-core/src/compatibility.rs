use serde::{Deserialize, Serialize};
use std::fmt;

use buildplan_util::errors::BuildError;

/// A Java language level such as `1.8`, `11` or `17`.
///
/// Accepts integers and the spellings `"1.8"`, `"8"`, `"17"`, `"VERSION_17"`
/// and `"VERSION_1_8"`. Levels up to 8 keep their legacy `1.x` display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "JavaVersionRepr", into = "String")]
pub struct JavaVersion(u32);

#[derive(Deserialize)]
#[serde(untagged)]
enum JavaVersionRepr {
    Int(u32),
    Str(String),
}

impl JavaVersion {
    pub fn new(level: u32) -> Self {
        Self(level)
    }

    /// Parse a Java level from any of the accepted spellings.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix("VERSION_").unwrap_or(s);
        let s = s.replace('_', ".");
        let s = s.strip_prefix("1.").unwrap_or(&s);
        match s.parse::<u32>() {
            Ok(n) if n > 0 => Some(Self(n)),
            _ => None,
        }
    }
}

impl TryFrom<JavaVersionRepr> for JavaVersion {
    type Error = String;

    fn try_from(repr: JavaVersionRepr) -> Result<Self, Self::Error> {
        match repr {
            JavaVersionRepr::Int(0) => Err("Java level must be positive".to_string()),
            JavaVersionRepr::Int(n) => Ok(Self(n)),
            JavaVersionRepr::Str(s) => {
                Self::parse(&s).ok_or_else(|| format!("invalid Java level '{s}'"))
            }
        }
    }
}

impl From<JavaVersion> for String {
    fn from(v: JavaVersion) -> Self {
        v.to_string()
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 <= 8 {
            write!(f, "1.{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A (source-level, target-level) pair for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilitySetting {
    pub source: JavaVersion,
    pub target: JavaVersion,
}

impl CompatibilitySetting {
    /// Both levels set to `level`.
    pub fn uniform(level: JavaVersion) -> Self {
        Self {
            source: level,
            target: level,
        }
    }

    /// Check `source <= target` for the named project.
    pub fn validate(&self, project: &str) -> Result<(), BuildError> {
        if self.source > self.target {
            return Err(BuildError::Compatibility {
                project: project.to_string(),
                message: format!(
                    "source level {} is newer than target level {}",
                    self.source, self.target
                ),
            });
        }
        Ok(())
    }
}

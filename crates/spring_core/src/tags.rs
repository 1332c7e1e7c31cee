//! Object tags

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Tags the host can attach to scene objects
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tag {
    /// Object can be picked up by a grab controller
    Grabbable,
}

impl Tag {
    pub const ALL: [Tag; 1] = [Tag::Grabbable];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::Grabbable => "grabbable",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::UnknownTag(s.to_string()))
    }
}

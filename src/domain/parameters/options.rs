use super::{ParameterGroup, QueryPairs};
use std::fmt;
use std::str::FromStr;

pub const KEY_PATH_LENGTH: &str = "pathLength";

/// Short-code generation strategy requested from the shortener.
///
/// Serialized as the literal `SHORT` / `UNGUESSABLE`, never as an ordinal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PathLength {
    #[default]
    Unguessable,
    Short,
}

impl PathLength {
    pub fn as_wire_str(self) -> &'static str {
        match self {
            PathLength::Short => "SHORT",
            PathLength::Unguessable => "UNGUESSABLE",
        }
    }
}

impl fmt::Display for PathLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown path length '{0}', expected 'short' or 'unguessable'")]
pub struct UnknownPathLength(String);

impl FromStr for PathLength {
    type Err = UnknownPathLength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("short") {
            Ok(PathLength::Short)
        } else if s.eq_ignore_ascii_case("unguessable") {
            Ok(PathLength::Unguessable)
        } else {
            Err(UnknownPathLength(s.to_string()))
        }
    }
}

/// Link options. Always applied last during encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsParameters {
    pub path_length: PathLength,
}

impl OptionsParameters {
    pub fn new(path_length: PathLength) -> Self {
        Self { path_length }
    }
}

impl ParameterGroup for OptionsParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .literal(KEY_PATH_LENGTH, self.path_length.as_wire_str())
            .finish()
    }
}

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of a post, unique within the list that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|err| format!("Invalid PostId '{s}': {err}"))
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_segments() {
        assert_eq!("42".parse::<PostId>(), Ok(PostId::new(42)));
        assert_eq!(" 7 ".parse::<PostId>(), Ok(PostId::new(7)));
        assert!("abc".parse::<PostId>().is_err());
        assert!("-1".parse::<PostId>().is_err());
    }
}

use anyhow::Context;
use serde_with::DeserializeFromStr;

use std::{
    fmt::{Debug, Display},
    ops::AddAssign,
    str::FromStr,
};

/// A non-negative count of product views.
///
/// Parsing accepts a plain decimal integer, optionally padded with
/// whitespace, and rejects everything else. A blank or malformed cell in
/// the input therefore fails the load instead of being silently counted
/// as zero.
#[derive(Clone, Copy, Default, DeserializeFromStr, Eq, PartialEq, Ord, PartialOrd)]
pub struct Views(u64);

impl Views {
    /// Returns the raw count.
    #[must_use]
    pub fn count(self) -> u64 {
        self.0
    }
}

impl From<u64> for Views {
    fn from(count: u64) -> Self {
        Self(count)
    }
}

impl Debug for Views {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Views {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Views {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let count = s
            .trim()
            .parse()
            .with_context(|| format!("invalid view count {s:?}"))?;
        Ok(Self(count))
    }
}

impl AddAssign for Views {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_parse_accepts_padded_integers() {
        assert_eq!("  42 ".parse::<Views>().unwrap(), Views::from(42));
        assert_eq!("0".parse::<Views>().unwrap(), Views::default());
    }

    #[test]
    fn views_parse_rejects_non_integer_values() {
        for bad in ["", " ", "ten", "-3", "1.5", "1e3"] {
            assert!(bad.parse::<Views>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn add_assign_sums_counts() {
        let mut total = Views::from(10);
        total += Views::from(30);
        assert_eq!(total, Views::from(40));
    }

    #[test]
    fn views_display_is_the_plain_count() {
        assert_eq!(Views::from(120).to_string(), "120");
    }
}

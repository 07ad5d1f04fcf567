//! Result ordering criterion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown sort criterion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort criterion: {0}")]
pub struct InvalidSortBy(String);

/// How search results are ordered: ascending by price or by distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Price,
    Distance,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Price => "price",
            SortBy::Distance => "distance",
        }
    }
}

impl FromStr for SortBy {
    type Err = InvalidSortBy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortBy::Price),
            "distance" => Ok(SortBy::Distance),
            other => Err(InvalidSortBy(other.to_string())),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_values() {
        assert_eq!("price".parse::<SortBy>().unwrap(), SortBy::Price);
        assert_eq!("distance".parse::<SortBy>().unwrap(), SortBy::Distance);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("name".parse::<SortBy>().is_err());
        assert!("PRICE".parse::<SortBy>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&SortBy::Distance).unwrap(), "\"distance\"");
        let sort: SortBy = serde_json::from_str("\"price\"").unwrap();
        assert_eq!(sort, SortBy::Price);
    }
}

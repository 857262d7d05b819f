use std::{
    fmt,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::ConsultaError;

pub const FIRST_YEAR: u16 = 2004;
pub const LAST_YEAR: u16 = 2025;

/// An admission year inside the range the lookup service publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Year(u16);

impl Year {
    pub fn new(value: u16) -> Result<Self, ConsultaError> {
        if (FIRST_YEAR..=LAST_YEAR).contains(&value) {
            Ok(Year(value))
        } else {
            Err(ConsultaError::InvalidYear(value.to_string()))
        }
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Newest first, the order the year selector shows.
    pub fn all_descending() -> Vec<Year> {
        (FIRST_YEAR..=LAST_YEAR).rev().map(Year).collect()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = ConsultaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            s.trim().parse::<u16>().map_err(|_| ConsultaError::InvalidYear(s.to_string()))?;
        Year::new(value)
    }
}

impl TryFrom<String> for Year {
    type Error = ConsultaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Year> for String {
    fn from(year: Year) -> Self {
        year.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_are_descending_and_complete() {
        let years = Year::all_descending();
        assert_eq!(years.len(), 22);
        assert_eq!(years.first().map(|y| y.value()), Some(2025));
        assert_eq!(years.last().map(|y| y.value()), Some(2004));
        assert!(years.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_year_parsing() {
        assert_eq!("2023".parse::<Year>().unwrap().value(), 2023);
        assert_eq!(" 2004 ".parse::<Year>().unwrap().to_string(), "2004");
        assert!(matches!("2003".parse::<Year>(), Err(ConsultaError::InvalidYear(_))));
        assert!(matches!("2026".parse::<Year>(), Err(ConsultaError::InvalidYear(_))));
        assert!("dos mil".parse::<Year>().is_err());
    }

    #[test]
    fn test_year_serializes_as_token() {
        let year = Year::new(2010).unwrap();
        assert_eq!(serde_json::to_string(&year).unwrap(), "\"2010\"");
        let back: Year = serde_json::from_str("\"2010\"").unwrap();
        assert_eq!(back, year);
    }
}

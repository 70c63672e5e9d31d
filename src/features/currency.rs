use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// ISO 4217 codes of the currencies an account can be held in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Pln,
    Eur,
    Usd,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unsupported currency code: {0}")]
pub struct UnknownCurrency(String);

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Pln, Currency::Eur, Currency::Usd];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Pln => "PLN",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("PLN", Currency::Pln ; "polish zloty")]
    #[test_case("eur", Currency::Eur ; "lowercase euro")]
    #[test_case(" USD ", Currency::Usd ; "padded dollar")]
    fn parses_iso_codes(input: &str, expected: Currency) {
        assert_eq!(input.parse::<Currency>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_code() {
        assert!("GBP".parse::<Currency>().is_err());
    }

    #[test]
    fn serializes_as_uppercase_code() {
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"EUR\"");
        let parsed: Currency = serde_json::from_str("\"PLN\"").unwrap();
        assert_eq!(parsed, Currency::Pln);
    }
}

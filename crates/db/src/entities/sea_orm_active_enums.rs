//! Database enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Classification of a loan's origin: institutional bank or informal
/// self-help group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "loan_source")]
#[serde(rename_all = "lowercase")]
pub enum LoanSource {
    /// Institutional bank loan.
    #[sea_orm(string_value = "bank")]
    Bank,
    /// Self-help group borrowing.
    #[sea_orm(string_value = "shg")]
    Shg,
}

impl LoanSource {
    /// Parses the wire value, accepting exactly `bank` or `shg`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bank" => Some(Self::Bank),
            "shg" => Some(Self::Shg),
            _ => None,
        }
    }

    /// Returns the wire value for this source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bank => "bank",
            Self::Shg => "shg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        assert_eq!(LoanSource::parse("bank"), Some(LoanSource::Bank));
        assert_eq!(LoanSource::parse("shg"), Some(LoanSource::Shg));
        assert_eq!(LoanSource::Bank.as_str(), "bank");
        assert_eq!(LoanSource::Shg.as_str(), "shg");
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(LoanSource::parse("credit_union"), None);
        assert_eq!(LoanSource::parse("BANK"), None);
        assert_eq!(LoanSource::parse(""), None);
    }
}

// 🏷️ Asset Category - The canonical type taxonomy
//
// Every account in the report, manual or linked, lands in exactly one of
// these ten categories. The declaration order below IS the display order.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ASSET CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Checking, savings, cash on hand
    Cash,

    /// Credit cards and credit lines
    Credit,

    /// Brokerage, retirement, other securities
    Investment,

    /// Houses, land
    RealEstate,

    /// Mortgages, student loans, car loans
    Loan,

    /// Cars, boats
    Vehicle,

    /// Wallets and exchange balances
    Cryptocurrency,

    /// Stock options, RSUs, deferred comp
    EmployeeCompensation,

    /// Catch-all for anything the provider can't classify
    OtherAsset,

    /// Catch-all for debts
    OtherLiability,
}

impl AssetCategory {
    /// All categories, in declaration order
    pub const ALL: [AssetCategory; 10] = [
        AssetCategory::Cash,
        AssetCategory::Credit,
        AssetCategory::Investment,
        AssetCategory::RealEstate,
        AssetCategory::Loan,
        AssetCategory::Vehicle,
        AssetCategory::Cryptocurrency,
        AssetCategory::EmployeeCompensation,
        AssetCategory::OtherAsset,
        AssetCategory::OtherLiability,
    ];

    /// Canonical snake_case name (also used for report headers)
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Cash => "cash",
            AssetCategory::Credit => "credit",
            AssetCategory::Investment => "investment",
            AssetCategory::RealEstate => "real_estate",
            AssetCategory::Loan => "loan",
            AssetCategory::Vehicle => "vehicle",
            AssetCategory::Cryptocurrency => "cryptocurrency",
            AssetCategory::EmployeeCompensation => "employee_compensation",
            AssetCategory::OtherAsset => "other_asset",
            AssetCategory::OtherLiability => "other_liability",
        }
    }

    /// Header label: "REAL_ESTATE", "CASH", ...
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a type name outside the canonical taxonomy
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown asset type: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for AssetCategory {
    type Err = UnknownCategory;

    /// Accepts "real_estate", "real estate", "Real Estate", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(' ', "_");

        AssetCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// Provider payloads spell multi-word types with spaces, so serde goes
// through FromStr instead of a derived rename.
impl<'de> Deserialize<'de> for AssetCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TESTS
// ============================================================================

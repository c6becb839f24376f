// 💳 Account Records - The two source shapes and the unified shape
//
// ManualAsset   → user-entered record, type already canonical
// PlaidAccount  → provider-linked record, coarser provider type
// UnifiedAccount → what the rest of the pipeline sees
//
// Balances stay TEXT end to end. Only the report turns them into numbers,
// and only for display.

use super::category::AssetCategory;
use serde::{Deserialize, Deserializer};
use std::fmt;

// ============================================================================
// MANUAL ASSET (source A)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManualAsset {
    pub id: u64,

    /// Already one of the canonical categories
    pub type_name: AssetCategory,

    #[serde(default)]
    pub subtype_name: Option<String>,

    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    /// Decimal string, e.g. "1500.4000"
    #[serde(deserialize_with = "balance_text")]
    pub balance: String,

    #[serde(default)]
    pub balance_as_of: Option<String>,

    /// ISO 4217 code, lowercase as the provider sends it
    pub currency: String,

    #[serde(default)]
    pub institution_name: Option<String>,

    #[serde(default)]
    pub closed_on: Option<String>,
}

// ============================================================================
// PLAID ACCOUNT (source B)
// ============================================================================

/// Provider account type. Open: anything the provider adds later lands in
/// `Other` with its raw text. Matching is exact, so "Depository" is `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderAccountType {
    Depository,
    Credit,
    Loan,
    Investment,
    Brokerage,
    Other(String),
}

impl ProviderAccountType {
    pub fn as_str(&self) -> &str {
        match self {
            ProviderAccountType::Depository => "depository",
            ProviderAccountType::Credit => "credit",
            ProviderAccountType::Loan => "loan",
            ProviderAccountType::Investment => "investment",
            ProviderAccountType::Brokerage => "brokerage",
            ProviderAccountType::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for ProviderAccountType {
    fn from(raw: &str) -> Self {
        match raw {
            "depository" => ProviderAccountType::Depository,
            "credit" => ProviderAccountType::Credit,
            "loan" => ProviderAccountType::Loan,
            "investment" => ProviderAccountType::Investment,
            "brokerage" => ProviderAccountType::Brokerage,
            _ => ProviderAccountType::Other(raw.to_string()),
        }
    }
}

impl Default for ProviderAccountType {
    fn default() -> Self {
        ProviderAccountType::Other(String::new())
    }
}

impl fmt::Display for ProviderAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderAccountType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().map(ProviderAccountType::from).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaidAccount {
    /// Own id namespace; may collide with ManualAsset ids
    pub id: u64,

    #[serde(rename = "type", default)]
    pub account_type: ProviderAccountType,

    #[serde(default)]
    pub subtype: Option<String>,

    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    /// Last 4 digits
    #[serde(default)]
    pub mask: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(deserialize_with = "balance_text")]
    pub balance: String,

    #[serde(default)]
    pub balance_last_update: Option<String>,

    pub currency: String,

    #[serde(default)]
    pub institution_name: Option<String>,
}

// ============================================================================
// UNIFIED ACCOUNT
// ============================================================================

/// Provenance is not kept: once unified, a manual asset and a linked
/// account are indistinguishable apart from their fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedAccount {
    pub id: u64,
    pub category: AssetCategory,
    pub name: String,
    pub display_name: Option<String>,
    pub balance: String,
    pub currency: String,
    pub institution_name: Option<String>,
}

// ============================================================================
// HELPERS
// ============================================================================

/// Balances are decimal strings, but tolerate a bare JSON number too.
/// Numbers keep their JSON text so nothing is lost to f64.
fn balance_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected balance as string or number, got {}",
            other
        ))),
    }
}

// ============================================================================
// TESTS
// ============================================================================

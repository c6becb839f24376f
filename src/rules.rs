// 🏷️ Classification Rules - Rules as Data
// Provider account type → canonical asset category
//
// The mapping is a table, not a match chain. Anything the table doesn't
// know falls back to OtherAsset, so new provider types never break the run.

use crate::entities::{AssetCategory, ProviderAccountType};

// ============================================================================
// RULE TABLE
// ============================================================================

/// Category for provider types missing from `TYPE_RULES`
pub const FALLBACK_CATEGORY: AssetCategory = AssetCategory::OtherAsset;

/// (provider type, canonical category)
pub const TYPE_RULES: [(&str, AssetCategory); 5] = [
    ("depository", AssetCategory::Cash),
    ("credit", AssetCategory::Credit),
    ("loan", AssetCategory::Loan),
    ("investment", AssetCategory::Investment),
    ("brokerage", AssetCategory::Investment),
];

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Classify a provider account type. Total: never fails.
pub fn classify(provider_type: &ProviderAccountType) -> AssetCategory {
    let key = provider_type.as_str();

    TYPE_RULES
        .iter()
        .find(|(pattern, _)| *pattern == key)
        .map(|(_, category)| *category)
        .unwrap_or_else(|| {
            log::debug!("no rule for provider type {:?}, using {}", key, FALLBACK_CATEGORY);
            FALLBACK_CATEGORY
        })
}

// ============================================================================
// TESTS
// ============================================================================

// ⚖️ Reconciliation - Two source shapes, one unified shape
//
// Manual assets already speak the canonical taxonomy.
// Linked accounts go through the classification rules.
// Every other field is copied verbatim: no parsing, no validation.

use crate::entities::{ManualAsset, PlaidAccount, UnifiedAccount};
use crate::rules;

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Manual asset → unified. Category passes through unchanged.
pub fn from_manual(asset: ManualAsset) -> UnifiedAccount {
    UnifiedAccount {
        id: asset.id,
        category: asset.type_name,
        name: asset.name,
        display_name: asset.display_name,
        balance: asset.balance,
        currency: asset.currency,
        institution_name: asset.institution_name,
    }
}

/// Linked account → unified. Category comes from the rule table.
pub fn from_linked(account: PlaidAccount) -> UnifiedAccount {
    UnifiedAccount {
        id: account.id,
        category: rules::classify(&account.account_type),
        name: account.name,
        display_name: account.display_name,
        balance: account.balance,
        currency: account.currency,
        institution_name: account.institution_name,
    }
}

/// Unify both collections: manual assets first, then linked accounts
pub fn unify(assets: Vec<ManualAsset>, linked: Vec<PlaidAccount>) -> Vec<UnifiedAccount> {
    let mut unified = Vec::with_capacity(assets.len() + linked.len());
    unified.extend(assets.into_iter().map(from_manual));
    unified.extend(linked.into_iter().map(from_linked));
    unified
}

// ============================================================================
// TESTS
// ============================================================================

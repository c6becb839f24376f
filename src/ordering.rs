// 📊 Ordering Policy - Category rank first, then name
//
// Rank comes from a fixed table (CATEGORY_ORDER). Names compare the way a
// person alphabetizes: case and accents only matter when everything else
// is equal.

use crate::entities::{AssetCategory, UnifiedAccount};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// CATEGORY RANK
// ============================================================================

pub const CATEGORY_ORDER: [AssetCategory; 10] = [
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

/// Zero-based position in CATEGORY_ORDER; unlisted categories rank last
pub fn rank(category: AssetCategory) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_ORDER.len())
}

// ============================================================================
// NAME COLLATION
// ============================================================================

/// Three-level sort key, compared level by level:
/// 1. base letters (case and accents folded away)
/// 2. accents
/// 3. case (lowercase before uppercase)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<u32>,
    tertiary: Vec<u8>,
}

/// Separators sort before digits, digits before letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Separator,
    Digit,
    Letter,
}

fn char_class(c: char) -> CharClass {
    if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Separator
    }
}

/// Letters with no canonical decomposition still fold to a base letter.
/// Ligatures expand to two.
fn fold(c: char) -> (char, Option<char>) {
    let base = match c {
        'đ' => 'd',
        'ħ' => 'h',
        'ı' => 'i',
        'ŀ' | 'ł' => 'l',
        'ø' => 'o',
        'ŧ' => 't',
        'ß' => return ('s', Some('s')),
        'æ' => return ('a', Some('e')),
        'œ' => return ('o', Some('e')),
        other => other,
    };
    (base, None)
}

/// Build the key from the NFD form: combining marks go to the secondary
/// level of the letter they follow, never to the primary level.
pub fn collation_key(name: &str) -> CollationKey {
    let mut key = CollationKey {
        primary: Vec::with_capacity(name.len()),
        secondary: Vec::with_capacity(name.len()),
        tertiary: Vec::with_capacity(name.len()),
    };

    for d in name.nfd() {
        if is_combining_mark(d) {
            // First mark wins; a leading mark has no letter to attach to
            if let Some(accent) = key.secondary.last_mut() {
                if *accent == 0 {
                    *accent = d as u32;
                }
            }
            continue;
        }

        let case = u8::from(d.is_uppercase());

        for lower in d.to_lowercase() {
            let (base, extra) = fold(lower);

            key.primary.push((char_class(base), base));
            if let Some(second) = extra {
                key.primary.push((char_class(second), second));
            }

            let folded = extra.is_some() || base != lower;
            key.secondary.push(if folded { lower as u32 } else { 0 });
            key.tertiary.push(case);
        }
    }

    key
}

/// Human alphabetical order. Falls back to code points so that only
/// identical strings compare Equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

// ============================================================================
// ACCOUNT ORDER
// ============================================================================

/// Comparator: category rank, then name
pub fn compare_accounts(a: &UnifiedAccount, b: &UnifiedAccount) -> Ordering {
    rank(a.category)
        .cmp(&rank(b.category))
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Sort in place. Relative order of records with equal keys is unspecified.
pub fn sort_accounts(accounts: &mut [UnifiedAccount]) {
    accounts.sort_unstable_by(compare_accounts);
}

// ============================================================================
// TESTS
// ============================================================================

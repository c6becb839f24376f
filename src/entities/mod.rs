// Entity Models
// Value objects only: built once per run, never mutated, then dropped.

pub mod category;
pub mod account;

pub use category::{AssetCategory, UnknownCategory};
pub use account::{ManualAsset, PlaidAccount, ProviderAccountType, UnifiedAccount};

// Asset Report - Core Library
// Unifies manual assets and linked accounts into one grouped, ordered report

pub mod entities;
pub mod rules;          // Provider type → canonical category
pub mod reconciliation; // Source records → unified records
pub mod ordering;       // Category rank + name collation
pub mod report;         // Grouped, styled report lines
pub mod client;         // Lunch Money HTTP client
pub mod pipeline;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use entities::{
    AssetCategory, UnknownCategory,
    ManualAsset, PlaidAccount, ProviderAccountType, UnifiedAccount,
};
pub use rules::classify;
pub use reconciliation::{from_linked, from_manual, unify};
pub use ordering::{compare_accounts, compare_names, rank, sort_accounts, CATEGORY_ORDER};
pub use report::{render_grouped, format_balance, ColorMode, ReportLine, Tone};
pub use client::{AccountSource, FetchError, LunchMoneyClient};
pub use pipeline::{build_report, generate_report, write_report};
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

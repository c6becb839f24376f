// 🔁 Pipeline - fetch → unify → sort → group → write
//
// Everything after the fetch is a pure function of the two collections.
// The source and the output sink are parameters, never globals.

use crate::client::AccountSource;
use crate::entities::{ManualAsset, PlaidAccount};
use crate::ordering;
use crate::reconciliation;
use crate::report::{self, ColorMode, ReportLine};
use anyhow::{Context, Result};
use std::io::Write;

/// Pure part: two source collections in, report lines out
pub fn build_report(assets: Vec<ManualAsset>, linked: Vec<PlaidAccount>) -> Vec<ReportLine> {
    let mut accounts = reconciliation::unify(assets, linked);
    ordering::sort_accounts(&mut accounts);

    for (category, count) in report::category_runs(&accounts) {
        log::debug!("{}: {} account(s)", category, count);
    }

    report::render_grouped(&accounts)
}

/// Fetch both collections concurrently, then build the report.
/// The first fetch error aborts the whole run.
pub async fn generate_report<S: AccountSource>(source: &S) -> Result<Vec<ReportLine>> {
    let (assets, linked) = tokio::try_join!(
        source.fetch_manual_assets(),
        source.fetch_linked_accounts()
    )
    .context("Failed to fetch accounts")?;

    log::info!(
        "unifying {} manual asset(s) and {} linked account(s)",
        assets.len(),
        linked.len()
    );

    Ok(build_report(assets, linked))
}

/// One write per line, in order
pub fn write_report<W: Write>(out: &mut W, lines: &[ReportLine], mode: ColorMode) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line.render(mode)).context("Failed to write report line")?;
    }
    out.flush().context("Failed to flush report")?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

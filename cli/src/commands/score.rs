use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use mander::{EfficiencyGap, Plan, load_region};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ScoreArgs) -> Result<()> {
    println!("[score] loading tables from {}", args.tables.demographics.display());
    let region = Arc::new(load_region(
        &args.tables.demographics,
        &args.tables.adjacency,
        &args.tables.hierarchy,
    )?);

    println!("[score] loading plan from {}", args.plan.display());
    let plan = Plan::from_csv(region, args.districts, &args.plan)?;

    let report = plan.efficiency_gap()?;
    print_report(&report, args.report.as_deref())
}

/// Print the per-district breakdown and the gap; optionally write the report
/// as JSON.
pub fn print_report(report: &EfficiencyGap, json_path: Option<&Path>) -> Result<()> {
    for d in &report.districts {
        println!("[score] district {}: D {:.0} / R {:.0}, wasted D {:.1} / R {:.1} (net {:+.1})",
            d.district, d.dem_votes, d.rep_votes, d.dem_wasted, d.rep_wasted, d.net_wasted);
    }
    println!("[score] efficiency gap: {:+.4}", report.gap);

    if let Some(path) = json_path {
        std::fs::write(path, serde_json::to_string_pretty(report)?)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("[score] report written to {}", path.display());
    }
    Ok(())
}

use std::sync::Arc;

use anyhow::Result;
use mander::{EqualizeStatus, Party, Plan, load_region};

use crate::commands::score::print_report;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RedistrictArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("./plan.csv".into());
    let party: Party = args.party.parse()?;

    println!("[redistrict] loading tables from {}", args.tables.demographics.display());
    let region = Arc::new(load_region(
        &args.tables.demographics,
        &args.tables.adjacency,
        &args.tables.hierarchy,
    )?);
    println!("[redistrict] region has {} leaf blocks, {} adjacencies",
        region.len(), region.graph().edge_count() / 2);

    println!("[redistrict] packing {} districts for party {}", args.districts, party);
    let mut plan = Plan::pack(region, args.districts, party)?;
    if !plan.unassigned().is_empty() {
        eprintln!("[redistrict] {} blocks left unassigned by packing", plan.unassigned().len());
    }

    println!("[redistrict] equalizing with tolerance {} for up to {} passes",
        args.tolerance, args.max_passes);
    match plan.equalize(args.tolerance, args.max_passes) {
        EqualizeStatus::Converged { passes } =>
            println!("[redistrict] converged after {} passes", passes),
        EqualizeStatus::BudgetExhausted =>
            eprintln!("[redistrict] pass budget exhausted before convergence"),
    }

    if cli.verbose > 0 {
        for district in 0..plan.num_districts() {
            eprintln!("[redistrict] district {}: population {:.0}, democrats {:.0}, blocks {:?}",
                district,
                plan.district_population(district),
                plan.district_democrats(district),
                plan.district_blocks(district));
        }
    }

    let report = plan.efficiency_gap()?;
    print_report(&report, args.report.as_deref())?;

    println!("[redistrict] writing plan to {}", out_path.display());
    plan.to_csv(out_path)?;

    Ok(())
}

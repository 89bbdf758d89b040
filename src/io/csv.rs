use std::{fs::File, path::Path};

use ahash::AHashSet;
use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReader, DataType}};

use crate::{block::BlockRecord, error::Error, region::Region};

/// Reads a Polars DataFrame from a CSV file at `path`.
fn read_from_csv_file(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
    let df = CsvReader::new(file)
        .finish()
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;
    Ok(df)
}

/// Extract an i64 column by name, casting from whatever width it was inferred as.
fn i64_column(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    Ok(df.column(name)?
        .cast(&DataType::Int64)?
        .i64()?
        .into_no_null_iter()
        .collect())
}

/// Extract an f64 column by name.
fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    Ok(df.column(name)?
        .cast(&DataType::Float64)?
        .f64()?
        .into_no_null_iter()
        .collect())
}

/// Load a region from the three relation tables produced by the census
/// generator.
///
/// - `demographics`: `block,population,num_positive`
/// - `adjacency`: `blockA,blockB` (undirected; symmetrized here)
/// - `hierarchy`: `parent_block,child_block`
///
/// Only leaf blocks (ids that never appear as `parent_block`) enter the
/// region: contiguity is only meaningful at the finest granularity, so
/// demographic rows for internal hierarchy nodes and adjacency edges touching
/// them are dropped. An adjacency id absent from the demographic table
/// entirely is malformed input.
pub fn load_region(demographics: &Path, adjacency: &Path, hierarchy: &Path) -> Result<Region> {
    let demo_df = read_from_csv_file(demographics)?;
    let adj_df = read_from_csv_file(adjacency)?;
    let hier_df = read_from_csv_file(hierarchy)?;

    // Any id used as a parent is an internal node; everything else is a leaf.
    let parents: AHashSet<i64> = i64_column(&hier_df, "parent_block")?.into_iter().collect();

    let ids = i64_column(&demo_df, "block")?;
    let populations = f64_column(&demo_df, "population")?;
    let democrats = f64_column(&demo_df, "num_positive")?;
    let known: AHashSet<i64> = ids.iter().copied().collect();

    let records = ids.iter()
        .zip(populations.iter().zip(democrats.iter()))
        .filter(|(id, _)| !parents.contains(id))
        .map(|(&id, (&population, &democrats))| BlockRecord { id, population, democrats })
        .collect::<Vec<_>>();

    let mut edges = Vec::new();
    for (a, b) in i64_column(&adj_df, "blockA")?.into_iter()
        .zip(i64_column(&adj_df, "blockB")?.into_iter())
    {
        if !known.contains(&a) || !known.contains(&b) {
            return Err(Error::MalformedInput(format!(
                "adjacency edge ({a}, {b}) references a block missing from the demographic table"
            ))
            .into());
        }
        // Edges into internal hierarchy nodes are excluded, not errors.
        if parents.contains(&a) || parents.contains(&b) {
            continue;
        }
        edges.push((a, b));
    }

    Ok(Region::new(&records, &edges)?)
}

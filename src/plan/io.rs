use std::{fs::File, io::BufWriter, path::Path, sync::Arc};

use anyhow::{Context, Result, bail};
use polars::{frame::DataFrame, io::{SerReader, SerWriter}, prelude::{CsvReader, CsvWriter, DataType, NamedFrom}, series::Series};

use crate::{plan::Plan, region::Region};

/// District value written for unassigned blocks.
const UNASSIGNED: i64 = -1;

impl Plan {
    /// Write the plan as a `block,district` CSV, one row per block in the
    /// region, with `-1` marking unassigned blocks.
    pub fn to_csv(&self, path: &Path) -> Result<()> {
        let blocks = (0..self.region.len())
            .map(|node| self.region.blocks().id(node))
            .collect::<Vec<_>>();
        let districts = (0..self.region.len())
            .map(|node| self.assignment(node).map_or(UNASSIGNED, |d| d as i64))
            .collect::<Vec<_>>();

        let mut df = DataFrame::new(vec![
            Series::new("block".into(), blocks).into(),
            Series::new("district".into(), districts).into(),
        ])?;

        let file = File::create(path)
            .with_context(|| format!("[Plan.to_csv] Failed to create CSV file: {}", path.display()))?;
        CsvWriter::new(BufWriter::new(file)).finish(&mut df)?;
        Ok(())
    }

    /// Load a plan from a `block,district` CSV assignment file.
    ///
    /// Every block of the region must appear exactly once; districts must be
    /// in `[0, num_districts)`, or `-1` for unassigned.
    pub fn from_csv(region: Arc<Region>, num_districts: u32, path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[Plan.from_csv] Failed to open CSV file: {}", path.display()))?;
        let df: DataFrame = CsvReader::new(file)
            .finish()
            .with_context(|| format!("[Plan.from_csv] Failed to read CSV file: {}", path.display()))?;

        if df.width() < 2 {
            bail!("[Plan.from_csv] CSV file must have two columns: block,district");
        }
        if df.height() != region.len() {
            bail!("[Plan.from_csv] CSV file has {} rows, expected {}", df.height(), region.len());
        }

        let mut plan = Self::new(region, num_districts)?;

        let blocks = df.column("block")?.cast(&DataType::Int64)?;
        let districts = df.column("district")?.cast(&DataType::Int64)?;
        for (id, district) in blocks.i64()?.into_no_null_iter()
            .zip(districts.i64()?.into_no_null_iter())
        {
            let Some(node) = plan.region.blocks().node(id) else {
                bail!("[Plan.from_csv] Block {} in CSV not found in region", id);
            };
            if plan.assignment(node).is_some() {
                bail!("[Plan.from_csv] Block {} appears more than once", id);
            }
            match district {
                UNASSIGNED => {}
                d if (0..num_districts as i64).contains(&d) => plan.assign(node, d as u32),
                d => bail!("[Plan.from_csv] Block {} has invalid district {}", id, d),
            }
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{block::BlockRecord, party::Party, plan::Plan, region::Region};

    fn make_test_region() -> Arc<Region> {
        let records = (1..=4)
            .map(|id| BlockRecord { id, population: 10.0, democrats: 2.0 + id as f64 })
            .collect::<Vec<_>>();
        Arc::new(Region::new(&records, &[(1, 2), (2, 3), (3, 4)]).unwrap())
    }

    #[test]
    fn csv_round_trip_preserves_assignments() {
        let region = make_test_region();
        let plan = Plan::pack(region.clone(), 2, Party::Democratic).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        plan.to_csv(&path).unwrap();

        let restored = Plan::from_csv(region, 2, &path).unwrap();
        for node in 0..plan.region().len() {
            assert_eq!(restored.assignment(node), plan.assignment(node));
        }
        assert_eq!(restored.unassigned(), plan.unassigned());
        for district in 0..2 {
            assert_eq!(restored.district_population(district), plan.district_population(district));
        }
    }

    #[test]
    fn from_csv_rejects_out_of_range_district() {
        let region = make_test_region();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        std::fs::write(&path, "block,district\n1,0\n2,0\n3,1\n4,9\n").unwrap();

        assert!(Plan::from_csv(region, 2, &path).is_err());
    }

    #[test]
    fn from_csv_rejects_missing_rows() {
        let region = make_test_region();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        std::fs::write(&path, "block,district\n1,0\n2,1\n").unwrap();

        assert!(Plan::from_csv(region, 2, &path).is_err());
    }
}

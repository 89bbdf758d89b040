use serde::Serialize;

use crate::{error::Error, plan::Plan};

/// Per-district vote and wasted-vote breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DistrictVotes {
    pub district: u32,
    pub dem_votes: f64,
    pub rep_votes: f64,
    pub dem_wasted: f64,
    pub rep_wasted: f64,
    pub net_wasted: f64,
}

/// The efficiency-gap report for a plan: the scalar gap plus the
/// per-district breakdown it was computed from.
///
/// Positive gap means Democratic votes were wasted disproportionately;
/// negative means Republican.
#[derive(Clone, Debug, Serialize)]
pub struct EfficiencyGap {
    pub gap: f64,
    pub districts: Vec<DistrictVotes>,
}

impl Plan {
    /// Compute the efficiency gap of the current assignment.
    ///
    /// Per district: the winner wastes every vote past the winning threshold
    /// (`total/2 + 1`), the loser wastes all of its votes, and negative
    /// wasted counts clamp to zero. Democrats win only with strictly more
    /// votes, so exact ties score on the Republican branch. The gap is the
    /// net wasted count over all votes cast; a plan with no votes at all has
    /// no defined gap.
    ///
    /// Pure read-only computation; evaluating twice yields identical output.
    pub fn efficiency_gap(&self) -> Result<EfficiencyGap, Error> {
        let mut districts = Vec::with_capacity(self.num_districts as usize);
        let mut total_votes_cast = 0.0;
        let mut total_dem_wasted = 0.0;
        let mut total_rep_wasted = 0.0;

        for district in 0..self.num_districts {
            let dem_votes = self.district_democrats(district);
            let rep_votes = self.district_population(district) - dem_votes;
            let total_votes = dem_votes + rep_votes;
            let winning_threshold = total_votes / 2.0 + 1.0;

            let (dem_wasted, rep_wasted) = if dem_votes > rep_votes {
                (dem_votes - winning_threshold, rep_votes)
            } else {
                (dem_votes, rep_votes - winning_threshold)
            };
            let dem_wasted = dem_wasted.max(0.0);
            let rep_wasted = rep_wasted.max(0.0);

            total_votes_cast += total_votes;
            total_dem_wasted += dem_wasted;
            total_rep_wasted += rep_wasted;

            districts.push(DistrictVotes {
                district,
                dem_votes,
                rep_votes,
                dem_wasted,
                rep_wasted,
                net_wasted: dem_wasted - rep_wasted,
            });
        }

        if total_votes_cast == 0.0 {
            return Err(Error::EmptyPlan);
        }

        Ok(EfficiencyGap {
            gap: (total_dem_wasted - total_rep_wasted) / total_votes_cast,
            districts,
        })
    }
}

use crate::plan::Plan;

/// How an equalization run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EqualizeStatus {
    /// A full pass committed no moves; no further improving, contiguity-
    /// preserving move exists under the cap.
    Converged { passes: usize },
    /// The pass budget ran out first. The plan is still valid, just not
    /// fully balanced.
    BudgetExhausted,
}

impl EqualizeStatus {
    #[inline]
    pub fn converged(self) -> bool {
        matches!(self, EqualizeStatus::Converged { .. })
    }
}

impl Plan {
    /// Rebalance district populations by relocating single blocks out of
    /// over-populated districts, without breaking contiguity.
    ///
    /// A district is over-populated when it exceeds
    /// `target_population + tolerance`. Districts are visited in id order and
    /// their blocks in ascending block-id order; a block moves to the first
    /// other district that stays under the cap after accepting it and is
    /// empty or adjacent to the block, provided its removal leaves the rest
    /// of the source district connected.
    ///
    /// Every committed move shrinks the total over-cap population, and the
    /// loop stops at the first pass with no moves or after `max_passes`
    /// passes, so the run always terminates.
    pub fn equalize(&mut self, tolerance: f64, max_passes: usize) -> EqualizeStatus {
        assert!(tolerance >= 0.0, "tolerance must be non-negative");

        let cap = self.target_population + tolerance;

        for pass in 0..max_passes {
            let mut moves = 0;

            for district in 0..self.num_districts {
                if self.district_population(district) <= cap {
                    continue;
                }

                let mut candidates = self.districts[district as usize].blocks.clone();
                candidates.sort_unstable_by_key(|&node| self.region.blocks().id(node));

                for node in candidates {
                    if self.district_population(district) <= cap {
                        break;
                    }
                    if !self.removal_preserves_contiguity(node) {
                        continue;
                    }

                    let population = self.region.blocks().population(node);
                    let receiver = (0..self.num_districts).find(|&other| {
                        other != district
                            && self.district_population(other) + population <= cap
                            && (self.district_is_empty(other) || self.borders_district(node, other))
                    });

                    if let Some(other) = receiver {
                        self.unassign(node);
                        self.assign(node, other);
                        moves += 1;
                    }
                }
            }

            if moves == 0 {
                return EqualizeStatus::Converged { passes: pass };
            }
        }

        EqualizeStatus::BudgetExhausted
    }
}

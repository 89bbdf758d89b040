mod assign;
mod contiguity;
mod equalize;
mod io;
mod metrics;
mod plan;

pub use equalize::EqualizeStatus;
pub use metrics::{DistrictVotes, EfficiencyGap};
pub use plan::Plan;

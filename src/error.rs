/// Fatal error conditions surfaced before or outside the core algorithms.
///
/// Soft outcomes of the heuristic (unassigned blocks, refinement running out
/// of budget) are data carried in results, never variants here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input tables violate a structural invariant (dangling adjacency id,
    /// self-edge, demographic counts out of range, duplicate block id).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Party selector other than the two recognized values.
    #[error("invalid party: {0:?} (expected 'D' or 'R')")]
    InvalidParty(String),

    /// Target district count of zero.
    #[error("invalid district count: {0} (must be at least 1)")]
    InvalidDistrictCount(u32),

    /// Efficiency gap requested for a plan with zero total votes.
    #[error("cannot score an empty plan: no votes cast in any district")]
    EmptyPlan,
}

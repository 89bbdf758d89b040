#![doc = "Mander public API"]
mod block;
mod error;
mod graph;
mod io;
mod party;
mod plan;
mod region;

#[doc(inline)]
pub use block::{BlockRecord, BlockTable};

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use graph::Graph;

#[doc(inline)]
pub use io::load_region;

#[doc(inline)]
pub use party::Party;

#[doc(inline)]
pub use plan::{DistrictVotes, EfficiencyGap, EqualizeStatus, Plan};

#[doc(inline)]
pub use region::Region;

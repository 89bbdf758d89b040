pub mod redistrict;
pub mod score;

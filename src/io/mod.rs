mod csv;

pub use csv::load_region;

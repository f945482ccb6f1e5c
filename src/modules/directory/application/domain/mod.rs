pub mod entities;
pub mod seed_data;

pub use entities::{PincodeEntry, SectorRecord};

pub mod pincodes;
pub mod sectors;

pub mod list_sector_pincodes;
pub mod list_sectors;
pub mod lookup_pincode;
pub mod search_directory;
pub mod seed_directory;

mod directory_view;
mod list_sector_pincodes;
mod list_sectors;
mod lookup_pincode;
mod search_directory;

pub use directory_view::*;
pub use list_sector_pincodes::*;
pub use list_sectors::*;
pub use lookup_pincode::*;
pub use search_directory::*;

/// One pincode→sector mapping with the service pools available in that area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PincodeEntry {
    pub code: String,
    pub sector: String,
    pub area_name: String,
    pub pools: Vec<String>,
}

/// Aggregate view of a sector: its member pincodes and the union of their
/// pools, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorRecord {
    pub name: String,
    pub pincodes: Vec<String>,
    pub pools: Vec<String>,
    pub description: Option<String>,
}

use serde::Serialize;
use utoipa::ToSchema;

use crate::directory::application::domain::{PincodeEntry, SectorRecord};

/// One pincode→sector mapping as returned by the API.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PincodeView {
    /// 6-digit postal code
    #[schema(example = "560001")]
    pub pincode: String,

    /// Administrative sector the code belongs to
    #[schema(example = "Bengaluru")]
    pub sector: String,

    /// Human-readable area name
    #[schema(example = "Bangalore GPO")]
    pub area_name: String,

    /// Service pools available in the area
    #[schema(example = json!(["IT Sector", "Government Services"]))]
    pub available_pools: Vec<String>,
}

impl From<PincodeEntry> for PincodeView {
    fn from(entry: PincodeEntry) -> Self {
        Self {
            pincode: entry.code,
            sector: entry.sector,
            area_name: entry.area_name,
            available_pools: entry.pools,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectorView {
    #[schema(example = "Bengaluru")]
    pub name: String,

    /// Member pincodes
    #[schema(example = json!(["560001", "560002"]))]
    pub pincodes: Vec<String>,

    /// Union of the pools of all member pincodes
    #[schema(example = json!(["IT Sector", "Government Services"]))]
    pub available_pools: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<SectorRecord> for SectorView {
    fn from(record: SectorRecord) -> Self {
        Self {
            name: record.name,
            pincodes: record.pincodes,
            available_pools: record.pools,
            description: record.description,
        }
    }
}

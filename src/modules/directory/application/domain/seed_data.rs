//! Bundled directory dataset used to bootstrap an empty database.

use super::entities::PincodeEntry;

fn entry(code: &str, sector: &str, area_name: &str, pools: &[&str]) -> PincodeEntry {
    PincodeEntry {
        code: code.to_string(),
        sector: sector.to_string(),
        area_name: area_name.to_string(),
        pools: pools.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn bundled_directory() -> Vec<PincodeEntry> {
    vec![
        // Bengaluru
        entry(
            "560001",
            "Bengaluru",
            "Central Bengaluru",
            &["IT Sector", "Government Services", "Urban Development"],
        ),
        entry(
            "560002",
            "Bengaluru",
            "Majestic Area",
            &["Transportation", "Commerce", "Retail"],
        ),
        entry(
            "560003",
            "Bengaluru",
            "Chickpet",
            &["Textile Industry", "Commerce", "Retail"],
        ),
        entry(
            "560004",
            "Bengaluru",
            "City Market",
            &["Agriculture Markets", "Commerce", "Retail"],
        ),
        entry(
            "560005",
            "Bengaluru",
            "Shivajinagar",
            &["Commerce", "Retail", "Small Businesses"],
        ),
        entry(
            "560006",
            "Bengaluru",
            "Gandhinagar",
            &["Commerce", "Retail", "Wholesale Markets"],
        ),
        entry(
            "560007",
            "Bengaluru",
            "Basavanagudi",
            &["Education", "Cultural Activities", "Retail"],
        ),
        entry(
            "560008",
            "Bengaluru",
            "Jayanagar",
            &["Residential Services", "Retail", "Healthcare"],
        ),
        entry(
            "560009",
            "Bengaluru",
            "JP Nagar",
            &["Residential Services", "Retail", "Education"],
        ),
        entry(
            "560010",
            "Bengaluru",
            "Whitefield",
            &["IT Sector", "Technology Services", "Residential"],
        ),
        // Mysore
        entry(
            "570001",
            "Mysore",
            "Central Mysore",
            &["Tourism", "Cultural Heritage", "Government Services"],
        ),
        entry(
            "570002",
            "Mysore",
            "Nazarbad",
            &["Residential Services", "Retail", "Education"],
        ),
        entry(
            "570003",
            "Mysore",
            "Vijaynagar",
            &["Residential Services", "Retail", "Healthcare"],
        ),
        entry(
            "570004",
            "Mysore",
            "Kuvempunagar",
            &["Education", "Residential Services", "Retail"],
        ),
        entry(
            "570005",
            "Mysore",
            "Gokulam",
            &["Education", "Residential Services", "Healthcare"],
        ),
        entry(
            "570006",
            "Mysore",
            "TK Layout",
            &["Residential Services", "Retail", "Small Businesses"],
        ),
        entry(
            "570007",
            "Mysore",
            "Ramakrishnanagar",
            &["Residential Services", "Education", "Healthcare"],
        ),
        entry(
            "570008",
            "Mysore",
            "Jayanagar",
            &["Residential Services", "Retail", "Cultural Activities"],
        ),
        entry(
            "570009",
            "Mysore",
            "Hinkal",
            &["Residential Services", "Small Industries", "Retail"],
        ),
        entry(
            "570010",
            "Mysore",
            "Bogadi",
            &["Residential Services", "Education", "Retail"],
        ),
    ]
}

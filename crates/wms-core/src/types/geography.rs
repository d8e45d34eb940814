//! Country → Province → Locality hierarchy.

use serde::{Deserialize, Serialize};

/// A country, identified by name for upserts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Country {
    pub id: i64,
    pub country_name: String,
}

/// A province inside a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Province {
    pub id: i64,
    pub province_name: String,
    pub country_id: i64,
}

/// A locality. Unlike every other entity its id is chosen by the client
/// (it is the postal code).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Locality {
    pub id: i64,
    pub locality_name: String,
    pub province_id: i64,
}

/// Create payload for a locality: the province and country are given by
/// name and resolved (or created) on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalityInput {
    pub id: i64,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

impl LocalityInput {
    /// Splits the payload into the three rows it describes. Foreign keys are
    /// left at zero until the hierarchy is resolved.
    pub fn into_parts(self) -> (Locality, Province, Country) {
        (
            Locality {
                id: self.id,
                locality_name: self.locality_name,
                province_id: 0,
            },
            Province {
                id: 0,
                province_name: self.province_name,
                country_id: 0,
            },
            Country {
                id: 0,
                country_name: self.country_name,
            },
        )
    }
}

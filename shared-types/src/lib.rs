use serde::{Deserialize, Serialize};

/// One address book record as stored and returned by the service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AddressEntry {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "coordinateX")]
    pub coordinate_x: f64,
    #[serde(rename = "coordinateY")]
    pub coordinate_y: f64,
}

/// Create/update request body: every field of an entry except the
/// store-assigned id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EntryPayload {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "coordinateX")]
    pub coordinate_x: f64,
    #[serde(rename = "coordinateY")]
    pub coordinate_y: f64,
}

/// Radius search request. `radius` is in kilometers and defaults to 10
/// when the caller omits it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchQuery {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_radius")]
    pub radius: i64,
}

fn default_radius() -> i64 {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Axis-aligned latitude/longitude rectangle used as the pre-filter for
/// proximity search.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min: GeoPoint,
    pub max: GeoPoint,
}

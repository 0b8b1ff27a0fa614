use serde::{Deserialize, Serialize};

use crate::{
    domain::{Coordinates, Location, Place},
    error::ResponseError,
};

pub const GET_LOCATION_PATH: &str = "get_location";
pub const SEARCH_PLACES_PATH: &str = "search_places";
pub const GET_PLACE_TYPES_PATH: &str = "get_place_types";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GetLocationRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for GetLocationRequest {
    fn from(value: Coordinates) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetLocationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl GetLocationResponse {
    pub fn into_result(self) -> Result<Location, ResponseError> {
        if !self.success {
            return Err(ResponseError::Rejected {
                endpoint: GET_LOCATION_PATH,
            });
        }
        self.location.ok_or(ResponseError::MissingField {
            endpoint: GET_LOCATION_PATH,
            field: "location",
        })
    }
}

/// Body of `POST /search_places`. `radius` is in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: u32,
    pub place_type: String,
}

impl SearchParameters {
    pub fn from_kilometers(
        coordinates: Coordinates,
        radius_km: u32,
        place_type: impl Into<String>,
    ) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            radius: radius_km.saturating_mul(1000),
            place_type: place_type.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPlacesResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub places: Option<Vec<Place>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_html: Option<String>,
}

/// Everything a successful search replaces at once.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub location: Location,
    pub places: Vec<Place>,
    pub map_html: String,
}

impl SearchPlacesResponse {
    pub fn into_result(self) -> Result<SearchOutcome, ResponseError> {
        if !self.success {
            return Err(ResponseError::Rejected {
                endpoint: SEARCH_PLACES_PATH,
            });
        }
        let location = self.location.ok_or(ResponseError::MissingField {
            endpoint: SEARCH_PLACES_PATH,
            field: "location",
        })?;
        Ok(SearchOutcome {
            location,
            places: self.places.unwrap_or_default(),
            map_html: self.map_html.unwrap_or_default(),
        })
    }
}

// src/models/marker.rs
// DOCUMENTATION: Marker records, request payloads and validation
// PURPOSE: A marker is a geolocated point of interest belonging to one map

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::fields::{as_integer, as_number, as_text, is_present, is_supplied, length_within};
use crate::errors::AlbumError;

/// Marker row as stored in the `markers` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Marker {
    pub id_marker: i64,
    pub title: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub id_map: i64,
}

/// Raw body of POST /markers and PUT /markers/{id}
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkerPayload {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    pub id_map: Option<Value>,
}

/// A fully validated marker
#[derive(Debug, Clone, PartialEq)]
pub struct NewMarker {
    pub title: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub id_map: i64,
}

impl NewMarker {
    pub fn into_marker(self, id_marker: i64) -> Marker {
        Marker {
            id_marker,
            title: self.title,
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
            id_map: self.id_map,
        }
    }
}

const TITLE_RULE: &str = "Title must be between 3 and 255 characters";
const DESCRIPTION_RULE: &str = "Description must be a string of at most 1000 characters";
const COORDINATES_RULE: &str = "Latitude and longitude must be valid numbers";
const ID_MAP_RULE: &str = "idMap must be a valid positive number";

impl MarkerPayload {
    /// Check the payload and return the first rule it breaks
    ///
    /// Unlike the other fields, a coordinate of 0 counts as present.
    pub fn validate(&self) -> Result<NewMarker, AlbumError> {
        let fail = |msg: &str| Err(AlbumError::Validation(msg.to_string()));

        if !is_present(self.title.as_ref())
            || !is_supplied(self.latitude.as_ref())
            || !is_supplied(self.longitude.as_ref())
            || !is_present(self.id_map.as_ref())
        {
            return fail("Missing required fields: title, latitude, longitude, idMap");
        }

        let Some(title) = as_text(self.title.as_ref()) else {
            return fail(TITLE_RULE);
        };
        let description = match &self.description {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.as_str()),
            Some(_) => return fail(DESCRIPTION_RULE),
        };
        let (Some(latitude), Some(longitude)) = (
            as_number(self.latitude.as_ref()),
            as_number(self.longitude.as_ref()),
        ) else {
            return fail(COORDINATES_RULE);
        };
        let Some(id_map) = as_integer(self.id_map.as_ref()) else {
            return fail(ID_MAP_RULE);
        };

        if !length_within(title, Some(3), Some(255)) {
            return fail(TITLE_RULE);
        }
        if let Some(text) = description {
            if !length_within(text, None, Some(1000)) {
                return fail(DESCRIPTION_RULE);
            }
        }

        if id_map < 1 {
            return fail(ID_MAP_RULE);
        }

        Ok(NewMarker {
            title: title.to_string(),
            description: description.map(str::to_string),
            latitude,
            longitude,
            id_map,
        })
    }
}

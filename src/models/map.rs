// src/models/map.rs
// DOCUMENTATION: Map records, request payloads and validation
// PURPOSE: A map is a named, public or private collection of markers owned by a user

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::fields::{as_integer, as_text, is_present, length_within};
use crate::errors::AlbumError;

/// Map row as stored in the `maps` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Map {
    pub id_map: i64,
    pub name: String,
    pub description: Option<String>,
    pub privacy: String,
    pub id_user: i64,
}

/// Visibility of a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privacy {
    Public,
    Private,
}

impl Privacy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "public" => Some(Privacy::Public),
            "private" => Some(Privacy::Private),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Privacy::Public => "public",
            Privacy::Private => "private",
        }
    }
}

/// Raw body of POST /maps and PUT /maps/{id}
/// Fields stay untyped so validation can report its own messages
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapPayload {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub privacy: Option<Value>,
    pub id_user: Option<Value>,
}

/// A fully validated map, ready to insert or to replace an existing row
#[derive(Debug, Clone, PartialEq)]
pub struct NewMap {
    pub name: String,
    pub description: Option<String>,
    pub privacy: Privacy,
    pub id_user: i64,
}

impl NewMap {
    pub fn into_map(self, id_map: i64) -> Map {
        Map {
            id_map,
            name: self.name,
            description: self.description,
            privacy: self.privacy.as_str().to_string(),
            id_user: self.id_user,
        }
    }
}

const NAME_RULE: &str = "Name must be between 3 and 255 characters";
const DESCRIPTION_RULE: &str = "Description must be a string of at most 1000 characters";
const ID_USER_RULE: &str = "idUser must be a valid positive number";

impl MapPayload {
    /// Check the payload and return the first rule it breaks
    pub fn validate(&self) -> Result<NewMap, AlbumError> {
        let fail = |msg: &str| Err(AlbumError::Validation(msg.to_string()));

        if !is_present(self.name.as_ref())
            || !is_present(self.privacy.as_ref())
            || !is_present(self.id_user.as_ref())
        {
            return fail("Missing required fields: name, privacy, idUser");
        }

        let Some(name) = as_text(self.name.as_ref()) else {
            return fail(NAME_RULE);
        };
        let description = match &self.description {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.as_str()),
            Some(_) => return fail(DESCRIPTION_RULE),
        };
        let Some(id_user) = as_integer(self.id_user.as_ref()) else {
            return fail(ID_USER_RULE);
        };

        if !length_within(name, Some(3), Some(255)) {
            return fail(NAME_RULE);
        }
        if let Some(text) = description {
            if !length_within(text, None, Some(1000)) {
                return fail(DESCRIPTION_RULE);
            }
        }

        let Some(privacy) = as_text(self.privacy.as_ref()).and_then(Privacy::parse) else {
            return fail("Invalid privacy. Must be one of: 'public', 'private'");
        };

        if id_user < 1 {
            return fail(ID_USER_RULE);
        }

        Ok(NewMap {
            name: name.to_string(),
            description: description.map(str::to_string),
            privacy,
            id_user,
        })
    }
}

// src/models/multimedia.rs
// DOCUMENTATION: Multimedia records, request payloads and validation
// PURPOSE: A photo, video or text attachment belonging to one marker

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::fields::{as_integer, as_text, is_present};
use crate::errors::AlbumError;

/// Multimedia row as stored in the `multimedia` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Multimedia {
    pub id_multimedia: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub media_type: String,
    pub id_marker: i64,
}

/// Kind of attached file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Photo,
    Video,
    Text,
}

impl MediaType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "photo_file" => Some(MediaType::Photo),
            "video_file" => Some(MediaType::Video),
            "text_file" => Some(MediaType::Text),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Photo => "photo_file",
            MediaType::Video => "video_file",
            MediaType::Text => "text_file",
        }
    }
}

/// Raw body of POST /multimedia and PUT /multimedia/{id}
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MultimediaPayload {
    #[serde(rename = "type")]
    pub media_type: Option<Value>,
    pub id_marker: Option<Value>,
}

/// A fully validated multimedia entry for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewMultimedia {
    pub media_type: MediaType,
    pub id_marker: i64,
}

/// Fields to overwrite on an existing entry; None keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultimediaChanges {
    pub media_type: Option<MediaType>,
    pub id_marker: Option<i64>,
}

impl MultimediaChanges {
    pub fn apply(&self, entry: &mut Multimedia) {
        if let Some(media_type) = self.media_type {
            entry.media_type = media_type.as_str().to_string();
        }
        if let Some(id_marker) = self.id_marker {
            entry.id_marker = id_marker;
        }
    }
}

const TYPE_RULE: &str = "Invalid type. Must be one of: 'photo_file', 'video_file', 'text_file'";
const ID_MARKER_RULE: &str = "idMarker must be a valid positive number";

impl MultimediaPayload {
    /// Validate a create request: both fields are required
    pub fn validate(&self) -> Result<NewMultimedia, AlbumError> {
        if !is_present(self.media_type.as_ref()) || !is_present(self.id_marker.as_ref()) {
            return Err(AlbumError::Validation(
                "Missing required fields: type, idMarker".into(),
            ));
        }

        let changes = self.validate_changes()?;
        match (changes.media_type, changes.id_marker) {
            (Some(media_type), Some(id_marker)) => Ok(NewMultimedia {
                media_type,
                id_marker,
            }),
            _ => Err(AlbumError::Validation(
                "Missing required fields: type, idMarker".into(),
            )),
        }
    }

    /// Validate a partial update: absent fields are left alone, present ones
    /// must pass the same rules as on create
    pub fn validate_changes(&self) -> Result<MultimediaChanges, AlbumError> {
        let media_type = is_present(self.media_type.as_ref()).then_some(self.media_type.as_ref());
        let id_marker = is_present(self.id_marker.as_ref()).then_some(self.id_marker.as_ref());

        if media_type.is_none() && id_marker.is_none() {
            return Err(AlbumError::Validation(
                "At least one field must be provided: type, idMarker".into(),
            ));
        }

        // an unparsable id is a format error, reported before enum membership
        let id_marker = match id_marker {
            Some(raw) => Some(
                as_integer(raw).ok_or_else(|| AlbumError::Validation(ID_MARKER_RULE.into()))?,
            ),
            None => None,
        };

        let media_type = match media_type {
            Some(raw) => Some(
                as_text(raw)
                    .and_then(MediaType::parse)
                    .ok_or_else(|| AlbumError::Validation(TYPE_RULE.into()))?,
            ),
            None => None,
        };

        if id_marker.is_some_and(|id| id < 1) {
            return Err(AlbumError::Validation(ID_MARKER_RULE.into()));
        }

        Ok(MultimediaChanges {
            media_type,
            id_marker,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> MultimediaPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_create() {
        let entry = payload(json!({ "type": "photo_file", "idMarker": 3 }))
            .validate()
            .unwrap();

        assert_eq!(entry.media_type, MediaType::Photo);
        assert_eq!(entry.id_marker, 3);
    }

    #[test]
    fn test_create_requires_both() {
        let err = payload(json!({ "type": "video_file" })).validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: type, idMarker");
    }

    #[test]
    fn test_type_enum() {
        let err = payload(json!({ "type": "audio_file", "idMarker": 1 }))
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), TYPE_RULE);
    }

    #[test]
    fn test_id_marker_positive() {
        let err = payload(json!({ "type": "text_file", "idMarker": -1 }))
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), ID_MARKER_RULE);

        let err = payload(json!({ "type": "text_file", "idMarker": "abc" }))
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), ID_MARKER_RULE);
    }

    #[test]
    fn test_partial_changes() {
        let changes = payload(json!({ "type": "text_file" })).validate_changes().unwrap();
        assert_eq!(changes.media_type, Some(MediaType::Text));
        assert_eq!(changes.id_marker, None);

        let changes = payload(json!({ "idMarker": "8" })).validate_changes().unwrap();
        assert_eq!(changes.media_type, None);
        assert_eq!(changes.id_marker, Some(8));
    }

    #[test]
    fn test_empty_changes_rejected() {
        let err = payload(json!({ "idMarker": 0 })).validate_changes().unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one field must be provided: type, idMarker"
        );
    }

    #[test]
    fn test_apply_keeps_omitted_fields() {
        let mut entry = Multimedia {
            id_multimedia: 1,
            media_type: "photo_file".into(),
            id_marker: 5,
        };

        MultimediaChanges {
            media_type: None,
            id_marker: Some(6),
        }
        .apply(&mut entry);

        assert_eq!(entry.media_type, "photo_file");
        assert_eq!(entry.id_marker, 6);
    }
}

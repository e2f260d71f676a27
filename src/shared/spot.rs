//! Camping Spot Types
//!
//! The serialization contract for camping spots at the service boundary,
//! plus the stateless validation that turns a raw creation payload into a
//! typed [`NewSpot`].
//!
//! # Wire format
//!
//! Listing returns objects with exactly these fields:
//!
//! ```json
//! { "id": 1, "name": "Bear Creek", "location": "Near Guanella Pass",
//!   "description": "...", "state": "CO", "latitude": 39.6, "longitude": -105.3 }
//! ```
//!
//! Creation accepts the same fields minus `id`. Coordinates may arrive as
//! JSON numbers or numeric strings; anything else is a validation error.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// States offered by the map page filter, with their display names
pub const MAP_STATES: [(&str, &str); 10] = [
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("ID", "Idaho"),
    ("MT", "Montana"),
    ("NV", "Nevada"),
    ("OR", "Oregon"),
    ("UT", "Utah"),
    ("WA", "Washington"),
    ("WY", "Wyoming"),
];

/// A stored camping spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CampingSpot {
    /// Auto-assigned row id, never changes once assigned
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-form location label ("Near Guanella Pass")
    pub location: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Two-letter U.S. state code
    pub state: Option<String>,
    /// WGS84 latitude
    pub latitude: Option<f64>,
    /// WGS84 longitude
    pub longitude: Option<f64>,
}

/// A coordinate as sent by a client: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateInput {
    /// `39.6`
    Number(f64),
    /// `"39.6"`
    Text(String),
}

impl From<f64> for CoordinateInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CoordinateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Raw body of `POST /api/camping_spots`, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewSpotRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub latitude: Option<CoordinateInput>,
    #[serde(default)]
    pub longitude: Option<CoordinateInput>,
}

/// A validated spot, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpot {
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Response body of a successful creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSpotResponse {
    pub success: bool,
    pub id: i64,
}

/// Query string of `GET /api/camping_spots`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotFilter {
    #[serde(default)]
    pub state: Option<String>,
}

impl SpotFilter {
    /// The state code to filter on; an empty `?state=` means no filter
    pub fn state_code(&self) -> Option<&str> {
        self.state.as_deref().filter(|s| !s.is_empty())
    }
}

/// Validate a raw creation payload
///
/// Required fields are checked in the order name, location, state,
/// latitude, longitude; the first failure is returned. Blank strings count
/// as missing. The state code is upper-cased, a blank description becomes
/// `None`.
pub fn validate_new_spot(request: &NewSpotRequest) -> Result<NewSpot, SharedError> {
    let name = required_text(&request.name, "name")?;
    let location = required_text(&request.location, "location")?;
    let state = state_code(&request.state)?;
    let latitude = coordinate(&request.latitude, "latitude", 90.0)?;
    let longitude = coordinate(&request.longitude, "longitude", 180.0)?;

    let description = request
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    Ok(NewSpot {
        name,
        location,
        description,
        state,
        latitude,
        longitude,
    })
}

fn required_text(value: &Option<String>, field: &str) -> Result<String, SharedError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(SharedError::missing_field(field)),
    }
}

fn state_code(value: &Option<String>) -> Result<String, SharedError> {
    let code = required_text(value, "state")?;
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(SharedError::validation(
            "state",
            "State must be a two-letter code",
        ));
    }
    Ok(code.to_ascii_uppercase())
}

/// Coerce a coordinate to `f64` and check it lies within `[-limit, limit]`
fn coordinate(
    value: &Option<CoordinateInput>,
    field: &str,
    limit: f64,
) -> Result<f64, SharedError> {
    let parsed = match value {
        None => return Err(SharedError::missing_field(field)),
        Some(CoordinateInput::Number(n)) => *n,
        Some(CoordinateInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(SharedError::missing_field(field));
            }
            text.parse::<f64>().map_err(|_| {
                SharedError::validation(field, format!("Invalid {}: must be a number", field))
            })?
        }
    };

    if !parsed.is_finite() {
        return Err(SharedError::validation(
            field,
            format!("Invalid {}: must be a number", field),
        ));
    }
    if parsed < -limit || parsed > limit {
        return Err(SharedError::validation(
            field,
            format!("Invalid {}: must be between -{} and {}", field, limit, limit),
        ));
    }
    Ok(parsed)
}

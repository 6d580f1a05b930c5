//! Great-circle distance and upstream coordinate parsing.

use serde::Deserialize;
use serde_json::Value;

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Computes the great-circle distance in meters between two points given
/// in decimal degrees, using the haversine formula.
///
/// The result is `0.0` for coincident points and symmetric in its two points.
///
/// # Examples
///
/// ```
/// use users_gateway::domain::geo::distance_meters;
///
/// assert_eq!(distance_meters(51.5, -0.12, 51.5, -0.12), 0.0);
/// ```
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = ((d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Upstream user geolocation could not be read as finite coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid user geolocation: {reason}")]
pub struct InvalidUserGeolocation {
    pub reason: String,
}

impl InvalidUserGeolocation {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A single coordinate as found upstream: normally text, occasionally a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn to_degrees(&self, name: &str) -> Result<f64, InvalidUserGeolocation> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => parse_coordinate(text).ok_or_else(|| {
                InvalidUserGeolocation::new(format!("`{name}` is not numeric: {text:?}"))
            })?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(InvalidUserGeolocation::new(format!("`{name}` is not finite")))
        }
    }
}

const LOCATION_OBJECT_POINTERS: [&str; 3] = ["", "/address", "/address/geo"];

#[derive(Debug, Deserialize)]
struct LocatedUser {
    address: LocatedAddress,
}

#[derive(Debug, Deserialize)]
struct LocatedAddress {
    geo: LocatedGeo,
}

#[derive(Debug, Deserialize)]
struct LocatedGeo {
    lat: Coordinate,
    lng: Coordinate,
}

/// Parses a textual coordinate in decimal degrees.
///
/// Surrounding whitespace is ignored. Returns `None` for empty, non-numeric
/// or non-finite text.
pub fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Reads `address.geo.lat` / `address.geo.lng` from an upstream user object.
///
/// # Errors
///
/// Returns [`InvalidUserGeolocation`] if the geo block is missing or not an
/// object, or either coordinate does not parse to a finite number.
pub fn user_coordinates(user: &Value) -> Result<(f64, f64), InvalidUserGeolocation> {
    // Serde also reads sequences into structs; `["10", "20"]` is no geo block.
    for pointer in LOCATION_OBJECT_POINTERS {
        if !user.pointer(pointer).is_some_and(Value::is_object) {
            return Err(InvalidUserGeolocation::new(format!(
                "`{pointer}` is not an object"
            )));
        }
    }

    let located = LocatedUser::deserialize(user)
        .map_err(|e| InvalidUserGeolocation::new(format!("missing geo block: {e}")))?;
    let geo = located.address.geo;

    Ok((geo.lat.to_degrees("lat")?, geo.lng.to_degrees("lng")?))
}

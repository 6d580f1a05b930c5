//! User record shapes exchanged with the upstream directory.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// A user record submitted for creation.
///
/// Every field is required at every nesting level. Decoding a payload into
/// this type is the schema check: a missing field, a `null`, or a value of
/// the wrong JSON type fails the decode. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewUser {
    pub id: Number,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// Postal address of a user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: GeoPoint,
}

/// Coordinates as stored upstream: numeric values encoded as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoPoint {
    pub lat: String,
    pub lng: String,
}

/// Employer of a user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A user object returned by the upstream directory, augmented with the
/// distance to a reference point.
///
/// The upstream fields are kept verbatim; `distanceMeters` is set explicitly
/// so an upstream key of the same name is replaced rather than duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithDistance {
    pub user: Map<String, Value>,
    pub distance_meters: f64,
}

impl UserWithDistance {
    pub const DISTANCE_FIELD: &'static str = "distanceMeters";

    pub fn new(user: Map<String, Value>, distance_meters: f64) -> Self {
        Self {
            user,
            distance_meters,
        }
    }

    /// Builds the response object: upstream fields plus `distanceMeters`.
    pub fn into_json(self) -> Value {
        let mut fields = self.user;
        fields.insert(
            Self::DISTANCE_FIELD.to_string(),
            Number::from_f64(self.distance_meters)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        );
        Value::Object(fields)
    }
}

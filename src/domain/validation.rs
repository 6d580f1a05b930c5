//! Structural validation of inbound JSON payloads.
//!
//! Payloads arrive untyped. Each check decodes the payload into a typed
//! schema and returns either the decoded value or a single uniform error.
//! The caller keeps the original [`Value`] for forwarding, so validation
//! never normalizes or defaults anything.

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::domain::entities::NewUser;

/// A payload did not match the user record schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid user data: {reason}")]
pub struct InvalidUserData {
    pub reason: String,
}

/// A distance request did not carry numeric `userId`, `lat` and `lng`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance request: {reason}")]
pub struct InvalidDistanceRequest {
    pub reason: String,
}

/// Reference point for the distance endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceRequest {
    pub user_id: Number,
    pub lat: f64,
    pub lng: f64,
}

impl DistanceRequest {
    /// Renders `userId` as an upstream path segment.
    ///
    /// Integral floats such as `1.0` render as `1`.
    pub fn user_id_segment(&self) -> String {
        if let Some(id) = self.user_id.as_i64() {
            return id.to_string();
        }
        if let Some(id) = self.user_id.as_u64() {
            return id.to_string();
        }
        match self.user_id.as_f64() {
            Some(id) if id.fract() == 0.0 && id.abs() < 1e15 => format!("{id:.0}"),
            _ => self.user_id.to_string(),
        }
    }
}

/// Nested values of a user record that must be JSON objects.
const USER_OBJECT_POINTERS: [&str; 4] = ["", "/address", "/address/geo", "/company"];

/// Checks that `payload` has the full shape of a user record.
///
/// The top level, `address`, `address.geo` and `company` must be non-null
/// objects, and every leaf must carry its declared JSON type (`id` a number,
/// everything else a string).
///
/// # Errors
///
/// Returns [`InvalidUserData`] on the first mismatch found.
pub fn validate_new_user(payload: &Value) -> Result<NewUser, InvalidUserData> {
    // Serde also accepts sequences for structs, so object-ness is checked up front.
    for pointer in USER_OBJECT_POINTERS {
        if let Some(value) = payload.pointer(pointer)
            && !value.is_object()
        {
            return Err(InvalidUserData {
                reason: format!("`{pointer}` is not an object"),
            });
        }
    }

    NewUser::deserialize(payload).map_err(|e| InvalidUserData {
        reason: e.to_string(),
    })
}

/// Checks that `payload` is an object with numeric `userId`, `lat` and `lng`.
///
/// # Errors
///
/// Returns [`InvalidDistanceRequest`] if any field is missing or not a number.
pub fn validate_distance_request(
    payload: &Value,
) -> Result<DistanceRequest, InvalidDistanceRequest> {
    if !payload.is_object() {
        return Err(InvalidDistanceRequest {
            reason: "payload is not an object".to_string(),
        });
    }

    DistanceRequest::deserialize(payload).map_err(|e| InvalidDistanceRequest {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_user() -> Value {
        json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        })
    }

    /// Every required field as a JSON pointer.
    const REQUIRED_FIELDS: &[&str] = &[
        "/id",
        "/name",
        "/username",
        "/email",
        "/address",
        "/phone",
        "/website",
        "/company",
        "/address/street",
        "/address/suite",
        "/address/city",
        "/address/zipcode",
        "/address/geo",
        "/address/geo/lat",
        "/address/geo/lng",
        "/company/name",
        "/company/catchPhrase",
        "/company/bs",
    ];

    fn remove_field(payload: &mut Value, pointer: &str) {
        let (parent, key) = pointer.rsplit_once('/').unwrap();
        let parent = if parent.is_empty() {
            payload
        } else {
            payload.pointer_mut(parent).unwrap()
        };
        parent.as_object_mut().unwrap().remove(key);
    }

    #[test]
    fn test_valid_user_passes() {
        let user = validate_new_user(&valid_user()).unwrap();

        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn test_extra_fields_are_tolerated() {
        let mut payload = valid_user();
        payload["nickname"] = json!("Lee");
        payload["address"]["country"] = json!("NZ");

        assert!(validate_new_user(&payload).is_ok());
    }

    #[test]
    fn test_non_object_payloads_rejected() {
        for payload in [json!(null), json!([]), json!("user"), json!(42), json!(true)] {
            assert!(validate_new_user(&payload).is_err(), "accepted {payload}");
        }
    }

    #[test]
    fn test_empty_object_rejected() {
        assert!(validate_new_user(&json!({})).is_err());
    }

    #[test]
    fn test_each_missing_field_rejected() {
        for pointer in REQUIRED_FIELDS {
            let mut payload = valid_user();
            remove_field(&mut payload, pointer);

            assert!(
                validate_new_user(&payload).is_err(),
                "accepted payload without {pointer}"
            );
        }
    }

    #[test]
    fn test_each_null_field_rejected() {
        for pointer in REQUIRED_FIELDS {
            let mut payload = valid_user();
            *payload.pointer_mut(pointer).unwrap() = Value::Null;

            assert!(
                validate_new_user(&payload).is_err(),
                "accepted null {pointer}"
            );
        }
    }

    #[test]
    fn test_mistyped_fields_rejected() {
        let cases = [
            ("/id", json!("1")),
            ("/name", json!(7)),
            ("/email", json!(["a@b.c"])),
            ("/address", json!("Kulas Light")),
            ("/company", json!([])),
            ("/company", json!(["Romaguera-Crona", "neural-net", "e-markets"])),
            ("/address/geo", json!(["-37.3159", "81.1496"])),
            ("/address/zipcode", json!(92998)),
            ("/address/geo", json!("-37.3159,81.1496")),
            ("/address/geo/lat", json!(-37.3159)),
            ("/company/bs", json!(false)),
        ];

        for (pointer, value) in cases {
            let mut payload = valid_user();
            *payload.pointer_mut(pointer).unwrap() = value;

            assert!(
                validate_new_user(&payload).is_err(),
                "accepted mistyped {pointer}"
            );
        }
    }

    #[test]
    fn test_fractional_id_is_a_number() {
        let mut payload = valid_user();
        payload["id"] = json!(11.5);

        assert!(validate_new_user(&payload).is_ok());
    }

    #[test]
    fn test_distance_request_valid() {
        let request =
            validate_distance_request(&json!({ "userId": 1, "lat": 0, "lng": 0.5 })).unwrap();

        assert_eq!(request.user_id_segment(), "1");
        assert_eq!(request.lat, 0.0);
        assert_eq!(request.lng, 0.5);
    }

    #[test]
    fn test_distance_request_rejects_missing_or_mistyped() {
        let cases = [
            json!({}),
            json!(null),
            json!({ "lat": 0, "lng": 0 }),
            json!({ "userId": 1, "lng": 0 }),
            json!({ "userId": 1, "lat": 0 }),
            json!({ "userId": "1", "lat": 0, "lng": 0 }),
            json!({ "userId": 1, "lat": "0", "lng": 0 }),
            json!({ "userId": 1, "lat": 0, "lng": null }),
        ];

        for payload in cases {
            assert!(
                validate_distance_request(&payload).is_err(),
                "accepted {payload}"
            );
        }
    }

    #[test]
    fn test_user_id_segment_formats_integral_floats() {
        let request =
            validate_distance_request(&json!({ "userId": 3.0, "lat": 0, "lng": 0 })).unwrap();
        assert_eq!(request.user_id_segment(), "3");

        let request =
            validate_distance_request(&json!({ "userId": 3.25, "lat": 0, "lng": 0 })).unwrap();
        assert_eq!(request.user_id_segment(), "3.25");
    }
}

//! DTO for the home (liveness) endpoint.

use serde::Serialize;

/// Fixed greeting used for health checking.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl Default for HomeResponse {
    fn default() -> Self {
        Self {
            status: "Ok",
            message: "Hello World!",
        }
    }
}

use crate::{DevOpsError, DevOpsResult};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use error_location::ErrorLocation;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

/// Headers authenticating a call with a personal access token.
///
/// The PAT goes in as the password of HTTP Basic auth with an empty user name.
#[track_caller]
pub fn auth_headers(pat: &str) -> DevOpsResult<HeaderMap> {
    let encoded = STANDARD.encode(format!(":{pat}"));

    let mut authorization =
        HeaderValue::from_str(&format!("Basic {encoded}")).map_err(|_| {
            DevOpsError::InvalidCredential {
                message: "Personal access token produced an invalid header value".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}

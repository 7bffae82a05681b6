use serde::Deserialize;

/// Body of `POST /v1/signup`.
///
/// Missing fields decode as empty strings so they surface as validation
/// failures (422) rather than decode failures (400).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub fullname: String,

    #[serde(default)]
    pub email: String,
}

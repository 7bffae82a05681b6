use serde::Deserialize;

/// Body of `PATCH /v1/signup/{id}`. `None` (absent or `null`) means no change.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub fullname: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

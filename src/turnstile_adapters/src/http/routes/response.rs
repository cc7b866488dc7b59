use serde::{Deserialize, Serialize};

const SUCCESS: &str = "Success";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    #[serde(rename = "Status")]
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: SUCCESS.to_owned(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityResponse {
    #[serde(rename = "Status")]
    pub status: String,
    pub name: String,
}

impl IdentityResponse {
    pub fn success(name: impl Into<String>) -> Self {
        Self {
            status: SUCCESS.to_owned(),
            name: name.into(),
        }
    }
}

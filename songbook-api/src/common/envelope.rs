use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// Uniform wrapper returned by every mutating endpoint and by every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl Envelope {
    pub const SUCCESS: &'static str = "success";

    pub fn success() -> Self {
        Self { status: Status::Ok, error: None, msg: Some(Self::SUCCESS.to_owned()) }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: Status::Error, error: Some(message.into()), msg: None }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

use crate::{dispatch::Reply, geocode::Coordinates};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl SendRequest {
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_direction: Option<bool>,
}

impl SendResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            response: message.into(),
            is_direction: Some(false),
        }
    }
}

impl From<Reply> for SendResponse {
    fn from(reply: Reply) -> Self {
        Self {
            is_direction: reply.is_direction(),
            response: reply.text,
        }
    }
}

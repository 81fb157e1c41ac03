use async_trait::async_trait;
use haloo_navigator::{
    Error, Result,
    geocode::{Coordinates, Geocoder},
    inference::{InferenceClient, InferenceReply},
};
use std::sync::{Arc, Mutex};

/// Mock geocoder that records every lookup
#[derive(Debug, Clone, Default)]
pub struct MockGeocoder {
    pub calls: Arc<Mutex<Vec<Coordinates>>>,
    pub place: Option<String>,
}

impl MockGeocoder {
    pub fn resolving(place: &str) -> Self {
        Self {
            calls: Arc::default(),
            place: Some(place.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn get_calls(&self) -> Vec<Coordinates> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn reverse(&self, coordinates: Coordinates) -> Result<String> {
        self.calls.lock().unwrap().push(coordinates);

        self.place
            .clone()
            .ok_or_else(|| Error::geocoding("mock geocoder has no place"))
    }
}

#[derive(Debug, Clone)]
pub enum InferenceOutcome {
    Reply(InferenceReply),
    Unavailable,
    Failure(String),
}

/// Mock inference client that records every forwarded message
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    pub requests: Arc<Mutex<Vec<String>>>,
    pub outcome: InferenceOutcome,
}

impl MockInferenceClient {
    pub fn new(outcome: InferenceOutcome) -> Self {
        Self {
            requests: Arc::default(),
            outcome,
        }
    }

    pub fn replying(content: &str) -> Self {
        Self::new(InferenceOutcome::Reply(InferenceReply::Content(
            content.to_string(),
        )))
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn chat(&self, message: &str) -> Result<InferenceReply> {
        self.requests.lock().unwrap().push(message.to_string());

        match &self.outcome {
            InferenceOutcome::Reply(reply) => Ok(reply.clone()),
            InferenceOutcome::Unavailable => Err(Error::InferenceUnavailable(
                "connection refused".to_string(),
            )),
            InferenceOutcome::Failure(msg) => Err(Error::inference(msg.clone())),
        }
    }
}

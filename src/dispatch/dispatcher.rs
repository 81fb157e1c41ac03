use super::{classifier::is_directions_request, directions::*, sanitize::sanitize};
use crate::{
    Result,
    config::Config,
    geocode::{Coordinates, Geocoder, NominatimClient},
    inference::{InferenceClient, OllamaClient},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const EMPTY_MESSAGE_PROMPT: &str = "❗ Please enter a message.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// The message was blank.
    Prompt,
    Directions,
    Chat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub kind: ReplyKind,
}

impl Reply {
    /// `None` for the blank-message prompt, which carries no direction flag.
    pub fn is_direction(&self) -> Option<bool> {
        match self.kind {
            ReplyKind::Prompt => None,
            ReplyKind::Directions => Some(true),
            ReplyKind::Chat => Some(false),
        }
    }
}

/// Routes one user message to the directions template or the inference service.
#[derive(Clone)]
pub struct Dispatcher {
    geocoder: Arc<dyn Geocoder>,
    inference: Arc<dyn InferenceClient>,
}

impl Dispatcher {
    pub fn new(geocoder: Arc<dyn Geocoder>, inference: Arc<dyn InferenceClient>) -> Self {
        Self {
            geocoder,
            inference,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let geocoder = NominatimClient::new(config.geocoding.clone())?;
        let inference = OllamaClient::new(config.inference.clone())?;

        Ok(Self::new(Arc::new(geocoder), Arc::new(inference)))
    }

    pub async fn dispatch(&self, message: &str, coordinates: Option<Coordinates>) -> Result<Reply> {
        let message = message.trim();

        if message.is_empty() {
            return Ok(Reply {
                text: EMPTY_MESSAGE_PROMPT.to_string(),
                kind: ReplyKind::Prompt,
            });
        }

        if is_directions_request(message) {
            info!("Answering directions request");
            let start_location = self.resolve_start_location(coordinates).await;
            return Ok(Reply {
                text: sanitize(&directions_to(&start_location)),
                kind: ReplyKind::Directions,
            });
        }

        let reply = self.inference.chat(message).await?;
        debug!("Inference reply: {:?}", reply);

        Ok(Reply {
            text: sanitize(&reply.into_text()),
            kind: ReplyKind::Chat,
        })
    }

    /// Never fails: lookup errors degrade to the raw coordinates.
    async fn resolve_start_location(&self, coordinates: Option<Coordinates>) -> String {
        let Some(coordinates) = coordinates else {
            return CURRENT_LOCATION.to_string();
        };

        match self.geocoder.reverse(coordinates).await {
            Ok(place) => place,
            Err(e) => {
                warn!("Reverse geocoding failed for {}: {}", coordinates, e);
                coordinates.to_string()
            }
        }
    }
}

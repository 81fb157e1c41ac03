use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body of a non-streaming Ollama `/api/chat` call.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

impl ChatRequest {
    pub fn single_turn(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(content)],
            stream: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// `Some(Value::Null)` when the field is present but null.
    #[serde(default, deserialize_with = "present")]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// What the inference service answered, before it is shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceReply {
    Content(String),
    ServiceError(String),
    Unrecognized,
}

impl TryFrom<ChatResponse> for InferenceReply {
    type Error = crate::Error;

    fn try_from(response: ChatResponse) -> crate::Result<Self> {
        match response.message {
            Some(Value::Object(message)) => match message.get("content") {
                Some(Value::String(content)) => return Ok(Self::Content(content.clone())),
                Some(other) => {
                    return Err(crate::Error::inference(format!(
                        "Inference reply content is not text: {}",
                        other
                    )));
                }
                None => {}
            },
            Some(other) => {
                return Err(crate::Error::inference(format!(
                    "Inference reply message is not an object: {}",
                    other
                )));
            }
            None => {}
        }

        Ok(match response.error {
            Some(Value::String(error)) => Self::ServiceError(error),
            Some(error) => Self::ServiceError(error.to_string()),
            None => Self::Unrecognized,
        })
    }
}

impl InferenceReply {
    pub fn into_text(self) -> String {
        match self {
            Self::Content(content) => content,
            Self::ServiceError(error) => format!("⚠️ Ollama error: {}", error),
            Self::Unrecognized => "⚠️ Ollama did not return a valid reply.".to_string(),
        }
    }
}

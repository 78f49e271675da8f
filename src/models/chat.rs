use serde::{self, Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageSystemUser {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    System(MessageSystemUser),
    User(MessageSystemUser),
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Message::System(MessageSystemUser {
            content: content.into(),
        })
    }

    pub fn user(content: impl Into<String>) -> Self {
        Message::User(MessageSystemUser {
            content: content.into(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatCompletionCreate {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MessageAssistant {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Choice {
    pub message: MessageAssistant,
}

/// Only `choices[].message.content` is read; everything else the provider
/// sends is ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

use serde::{Deserialize, Serialize};

/// One line of the eco coach transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    User(String),
    Coach(String),
    System(String),
}

impl Message {
    pub fn speaker_key(&self) -> &'static str {
        match self {
            Message::User(_) => "User",
            Message::Coach(_) => "Coach",
            Message::System(_) => "System",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Message::User(t) | Message::Coach(t) | Message::System(t) => t,
        }
    }
}
